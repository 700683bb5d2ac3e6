/// Project metadata as published in the package index: display name,
/// licenses and a one-line description
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LicenseInfo {
    display_name: Option<String>,
    licenses: Vec<String>,
    description: Option<String>,
}

impl LicenseInfo {
    pub fn new(
        display_name: Option<String>,
        licenses: Vec<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            display_name,
            licenses,
            description,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn licenses(&self) -> &[String] {
        &self.licenses
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_info_new() {
        let info = LicenseInfo::new(
            Some("PyYAML".to_string()),
            vec!["MIT".to_string()],
            Some("YAML parser and emitter for Python".to_string()),
        );
        assert_eq!(info.display_name(), Some("PyYAML"));
        assert_eq!(info.licenses(), ["MIT".to_string()]);
        assert_eq!(info.description(), Some("YAML parser and emitter for Python"));
    }

    #[test]
    fn test_license_info_default_is_empty() {
        let info = LicenseInfo::default();
        assert_eq!(info.display_name(), None);
        assert!(info.licenses().is_empty());
        assert_eq!(info.description(), None);
    }
}
