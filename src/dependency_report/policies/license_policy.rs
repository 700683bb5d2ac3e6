use crate::dependency_report::domain::LicenseInfo;

/// Raw license-related fields of a release, as published by the index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawLicenseFields {
    pub license: Option<String>,
    pub license_expression: Option<String>,
    pub classifiers: Vec<String>,
}

/// LicensePolicy decides which license names a release is reported with.
///
/// Priority order:
/// 1. license_expression field (if non-empty)
/// 2. license field (if non-empty, not "UNKNOWN", and a single line)
/// 3. every `License :: ...` classifier
pub struct LicensePolicy;

impl LicensePolicy {
    /// Selects the license names for a release; the result may be empty
    pub fn select_licenses(fields: &RawLicenseFields) -> Vec<String> {
        if let Some(expression) = Self::non_blank(fields.license_expression.as_deref()) {
            return vec![expression.to_string()];
        }

        // Multi-line values are full license texts, not names
        if let Some(license) = Self::non_blank(fields.license.as_deref())
            .filter(|l| !l.eq_ignore_ascii_case("UNKNOWN") && !l.contains('\n'))
        {
            return vec![license.to_string()];
        }

        Self::licenses_from_classifiers(&fields.classifiers)
    }

    /// Creates a LicenseInfo from release metadata
    pub fn create_license_info(
        display_name: Option<String>,
        fields: &RawLicenseFields,
        summary: Option<String>,
    ) -> LicenseInfo {
        LicenseInfo::new(
            display_name.filter(|n| !n.trim().is_empty()),
            Self::select_licenses(fields),
            summary,
        )
    }

    fn non_blank(value: Option<&str>) -> Option<&str> {
        value.map(str::trim).filter(|v| !v.is_empty())
    }

    /// `License :: OSI Approved :: MIT License` becomes `MIT License`
    fn licenses_from_classifiers(classifiers: &[String]) -> Vec<String> {
        let mut licenses: Vec<String> = Vec::new();
        for classifier in classifiers {
            let Some(rest) = classifier.strip_prefix("License :: ") else {
                continue;
            };
            let name = rest.rsplit(" :: ").next().unwrap_or(rest).trim();
            // The bare "OSI Approved" classifier carries no license name
            if name.is_empty() || name == "OSI Approved" {
                continue;
            }
            if !licenses.iter().any(|l| l == name) {
                licenses.push(name.to_string());
            }
        }
        licenses
    }
}
