/// Annotation naming the Sealed Secrets controller deployment.
pub const CONTROLLER_NAME_ANNOTATION: &str = "sealedsecrets.bitnami.com/controller-name";
/// Annotation naming the namespace the controller runs in.
pub const CONTROLLER_NAMESPACE_ANNOTATION: &str = "sealedsecrets.bitnami.com/controller-namespace";

pub const CONTROLLER_NAME_KEY: &str = "controller_name_from_meta";
pub const CONTROLLER_NAMESPACE_KEY: &str = "controller_namespace_from_meta";

/// Controller placement read from a Secret manifest.
///
/// Empty strings mean "use the default controller settings".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControllerOverride {
    pub controller_name: String,
    pub controller_namespace: String,
}

impl ControllerOverride {
    pub fn new(
        controller_name: impl Into<String>,
        controller_namespace: impl Into<String>,
    ) -> Self {
        Self {
            controller_name: controller_name.into(),
            controller_namespace: controller_namespace.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.controller_name.is_empty() && self.controller_namespace.is_empty()
    }

    /// Output pairs in the order they are printed.
    pub fn entries(&self) -> [(&'static str, &str); 2] {
        [
            (CONTROLLER_NAME_KEY, self.controller_name.as_str()),
            (CONTROLLER_NAMESPACE_KEY, self.controller_namespace.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_override_is_empty() {
        let o = ControllerOverride::default();
        assert!(o.is_empty());
        assert_eq!(o.entries(), [(CONTROLLER_NAME_KEY, ""), (CONTROLLER_NAMESPACE_KEY, "")]);
    }

    #[test]
    fn test_entries_keep_name_before_namespace() {
        let o = ControllerOverride::new("sealed-secrets", "kube-system");
        assert!(!o.is_empty());
        let keys: Vec<&str> = o.entries().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["controller_name_from_meta", "controller_namespace_from_meta"]);
    }
}
