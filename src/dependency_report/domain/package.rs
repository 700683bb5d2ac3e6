use crate::shared::Result;
use std::cmp::Ordering;

/// Maximum length for package names (security limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 255;

/// Maximum length for package versions (security limit)
const MAX_VERSION_LENGTH: usize = 100;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '[' | ']'))
        {
            anyhow::bail!(
                "Package name '{}' contains invalid characters. Only alphanumeric, hyphens, underscores, dots, and brackets are allowed.",
                name
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// PEP 503 normalized form: lowercase, runs of `-`, `_`, `.` become a single `-`
    pub fn normalized(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut in_separator = false;
        for c in self.0.chars() {
            if matches!(c, '-' | '_' | '.') {
                if !in_separator {
                    out.push('-');
                }
                in_separator = true;
            } else {
                out.extend(c.to_lowercase());
                in_separator = false;
            }
        }
        out
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for package version with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.is_empty() {
            anyhow::bail!("Package version cannot be empty");
        }

        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if !version
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '*' | '!'))
        {
            anyhow::bail!(
                "Package version '{}' contains invalid characters. Only alphanumeric, dots, hyphens, plus, exclamation marks and asterisks are allowed.",
                version
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Ord for Version {
    /// Natural ordering: digit runs compare numerically, everything else lexically.
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = VersionSegments::new(&self.0);
        let mut right = VersionSegments::new(&other.0);
        loop {
            match (left.next(), right.next()) {
                (None, None) => return self.0.cmp(&other.0),
                (None, Some(_)) => return Ordering::Less,
                (Some(_), None) => return Ordering::Greater,
                (Some(a), Some(b)) => {
                    let ord = a.cmp(&b);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                }
            }
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Segment<'a> {
    // Declaration order matters: text sorts before numbers ("1.0a1" < "1.0.1")
    Text(&'a str),
    Number(u64),
}

struct VersionSegments<'a> {
    rest: &'a str,
}

impl<'a> VersionSegments<'a> {
    fn new(version: &'a str) -> Self {
        Self { rest: version }
    }
}

impl<'a> Iterator for VersionSegments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.rest = self.rest.trim_start_matches(['.', '-', '+', '!']);
        let first = self.rest.chars().next()?;
        let is_digit = first.is_ascii_digit();
        let end = self
            .rest
            .find(|c: char| c.is_ascii_digit() != is_digit || matches!(c, '.' | '-' | '+' | '!'))
            .unwrap_or(self.rest.len());
        let (token, rest) = self.rest.split_at(end);
        self.rest = rest;

        if is_digit {
            // Absurdly long digit runs fall back to lexical comparison
            Some(
                token
                    .parse()
                    .map(Segment::Number)
                    .unwrap_or(Segment::Text(token)),
            )
        } else {
            Some(Segment::Text(token))
        }
    }
}

/// Package value object representing a locked software package
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Package {
    name: PackageName,
    version: Version,
}

impl Package {
    pub fn new(name: String, version: String) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    pub fn package_name(&self) -> &PackageName {
        &self.name
    }

    /// Identifier used in log lines, e.g. `requests==2.31.0`
    pub fn id(&self) -> String {
        format!("{}=={}", self.name, self.version)
    }
}

impl Ord for Package {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .normalized()
            .cmp(&other.name.normalized())
            .then_with(|| self.version.cmp(&other.version))
            .then_with(|| self.name.as_str().cmp(other.name.as_str()))
    }
}

impl PartialOrd for Package {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(v: &str) -> Version {
        Version::new(v.to_string()).unwrap()
    }

    fn package(name: &str, v: &str) -> Package {
        Package::new(name.to_string(), v.to_string()).unwrap()
    }

    #[test]
    fn test_package_name_new_valid() {
        let name = PackageName::new("requests".to_string()).unwrap();
        assert_eq!(name.as_str(), "requests");
    }

    #[test]
    fn test_package_name_new_empty() {
        assert!(PackageName::new("".to_string()).is_err());
    }

    #[test]
    fn test_package_name_rejects_invalid_characters() {
        let result = PackageName::new("bad;name".to_string());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("invalid characters"));
    }

    #[test]
    fn test_package_name_too_long() {
        let result = PackageName::new("a".repeat(256));
        assert!(result.is_err());
    }

    #[test]
    fn test_package_name_normalized() {
        let name = PackageName::new("Zope.Interface__Extra".to_string()).unwrap();
        assert_eq!(name.normalized(), "zope-interface-extra");
    }

    #[test]
    fn test_version_new_empty() {
        assert!(Version::new("".to_string()).is_err());
    }

    #[test]
    fn test_version_accepts_epoch() {
        assert_eq!(version("1!2.0").as_str(), "1!2.0");
    }

    #[test]
    fn test_version_natural_ordering() {
        assert!(version("1.2.0") < version("1.10.0"));
        assert!(version("2.9") < version("2.10"));
        assert!(version("1.0") < version("1.0.1"));
        assert!(version("1.0a1") < version("1.0.1"));
        assert_eq!(version("3.1.4").cmp(&version("3.1.4")), Ordering::Equal);
    }

    #[test]
    fn test_package_ordering_by_normalized_name_then_version() {
        let mut packages = vec![
            package("urllib3", "2.0.0"),
            package("Jinja2", "3.1.2"),
            package("certifi", "2023.11.17"),
            package("jinja2", "2.11.3"),
        ];
        packages.sort();

        let ids: Vec<String> = packages.iter().map(Package::id).collect();
        assert_eq!(
            ids,
            vec![
                "certifi==2023.11.17",
                "jinja2==2.11.3",
                "Jinja2==3.1.2",
                "urllib3==2.0.0",
            ]
        );
    }

    #[test]
    fn test_package_id() {
        assert_eq!(package("requests", "2.31.0").id(), "requests==2.31.0");
    }

    #[test]
    fn test_package_new_empty_version() {
        assert!(Package::new("requests".to_string(), "".to_string()).is_err());
    }
}
