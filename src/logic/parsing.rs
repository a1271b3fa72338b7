use anyhow::{anyhow, Result};
use serde_yaml::{Mapping, Value};

/// Turns manifest text into a YAML value tree.
pub trait ManifestParser {
    fn parse(&self, text: &str) -> Result<Value>;
}

/// `serde_yaml` backed parser. Rejects multi-document input and expands
/// `<<` merge keys.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlParser;

impl ManifestParser for YamlParser {
    fn parse(&self, text: &str) -> Result<Value> {
        let mut document: Value =
            serde_yaml::from_str(text).map_err(|e| anyhow!("Failed to parse YAML: {}", e))?;
        document
            .apply_merge()
            .map_err(|e| anyhow!("Failed to apply YAML merge keys: {}", e))?;
        Ok(document)
    }
}

/// One step of a defensive walk through an untyped document.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Mapping(&'a Mapping),
    Other(&'a Value),
    Absent,
}

impl<'a> Node<'a> {
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None => Node::Absent,
            Some(Value::Tagged(tagged)) => Node::of(Some(&tagged.value)),
            Some(Value::Mapping(m)) => Node::Mapping(m),
            Some(v) => Node::Other(v),
        }
    }

    /// Looks up `key`, treating anything that is not a mapping as an empty one.
    pub fn get(&self, key: &str) -> Node<'a> {
        match *self {
            Node::Mapping(m) => Node::of(m.get(key)),
            _ => Node::Absent,
        }
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Node::Mapping(_))
    }

    /// Renders an annotation value, mapping absent and falsy values to "".
    ///
    /// Falsy follows YAML truthiness: null, false, zero, "", [] and {}.
    /// Non-empty collections have no scalar text and also come back empty.
    pub fn text_or_empty(&self) -> String {
        let value = match *self {
            Node::Other(v) => v,
            Node::Mapping(m) => {
                if !m.is_empty() {
                    log::debug!("annotation value is a mapping, ignoring it");
                }
                return String::new();
            }
            Node::Absent => return String::new(),
        };

        if is_falsy(value) {
            return String::new();
        }

        match value {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            other => {
                log::debug!("annotation value {:?} has no scalar form, ignoring it", other);
                String::new()
            }
        }
    }
}

// YAML 1.2 scalars: plain `no`, `off`, `yes` and `on` arrive as strings and are
// truthy. Under YAML 1.1 they would be booleans, and `no`/`off` would be falsy.
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(m) => m.is_empty(),
        Value::Tagged(tagged) => is_falsy(&tagged.value),
    }
}
