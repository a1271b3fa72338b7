use serde_yaml::Value;
use std::path::Path;

use crate::infra::fs::read_manifest;
use crate::logic::parsing::{ManifestParser, Node};
use crate::models::{
    ControllerOverride, CONTROLLER_NAMESPACE_ANNOTATION, CONTROLLER_NAME_ANNOTATION,
};

/// Pulls the Sealed Secrets controller override out of a Secret manifest.
///
/// Every failure past argument parsing degrades to an empty override: no
/// parser, a missing file, unreadable or malformed YAML, or a document that
/// is not shaped like a Secret.
pub struct AnnotationExtractor<'p> {
    parser: Option<&'p dyn ManifestParser>,
}

impl<'p> AnnotationExtractor<'p> {
    pub fn new(parser: Option<&'p dyn ManifestParser>) -> Self {
        Self { parser }
    }

    pub fn extract(&self, secret_path: &Path) -> ControllerOverride {
        let Some(parser) = self.parser else {
            log::debug!("no manifest parser available, using default controller settings");
            return ControllerOverride::default();
        };

        match read_manifest(secret_path, parser) {
            Ok(Some(document)) => overrides_from_document(&document),
            Ok(None) => ControllerOverride::default(),
            Err(e) => {
                log::debug!("ignoring unreadable manifest {:?}: {:#}", secret_path, e);
                ControllerOverride::default()
            }
        }
    }
}

/// Reads `metadata.annotations` from an already parsed manifest.
pub fn overrides_from_document(document: &Value) -> ControllerOverride {
    let root = match document {
        Value::Null => return ControllerOverride::default(),
        other => Node::of(Some(other)),
    };
    if !root.is_mapping() {
        log::debug!("manifest root is not a mapping");
        return ControllerOverride::default();
    }

    let annotations = root.get("metadata").get("annotations");
    ControllerOverride::new(
        annotations.get(CONTROLLER_NAME_ANNOTATION).text_or_empty(),
        annotations.get(CONTROLLER_NAMESPACE_ANNOTATION).text_or_empty(),
    )
}
