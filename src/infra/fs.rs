use anyhow::{anyhow, Result};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

use crate::logic::parsing::ManifestParser;

/// Reads and parses the manifest at `path`.
///
/// Returns `Ok(None)` when nothing exists at `path`. Read, UTF-8 and parse
/// failures come back as errors for the caller to decide on.
pub fn read_manifest(path: &Path, parser: &dyn ManifestParser) -> Result<Option<Value>> {
    if !path.exists() {
        log::debug!("manifest {:?} does not exist", path);
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .map_err(|e| anyhow!("Failed to read file {:?}: {}", path, e))?;

    let document = parser.parse(&content)?;
    Ok(Some(document))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::parsing::YamlParser;

    #[test]
    fn test_read_manifest_parses_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("secret.yaml");
        fs::write(&file_path, "
apiVersion: v1
kind: Secret
metadata:
  name: db-credentials
").unwrap();

        let doc = read_manifest(&file_path, &YamlParser).unwrap().unwrap();
        assert_eq!(doc["kind"].as_str(), Some("Secret"));
        assert_eq!(doc["metadata"]["name"].as_str(), Some("db-credentials"));
    }

    #[test]
    fn test_read_manifest_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(read_manifest(&missing, &YamlParser).unwrap().is_none());
    }

    #[test]
    fn test_read_manifest_errors() {
        let dir = tempfile::tempdir().unwrap();

        // a directory exists but cannot be read as text
        assert!(read_manifest(dir.path(), &YamlParser).is_err());

        let binary = dir.path().join("binary.yaml");
        fs::write(&binary, b"\xff\xfe\x00\x9f").unwrap();
        assert!(read_manifest(&binary, &YamlParser).is_err());

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "metadata: [unclosed\n").unwrap();
        let err = read_manifest(&broken, &YamlParser).unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
    }
}
