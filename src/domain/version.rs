use crate::domain::IncrementKind;
use crate::error::{Result, SemverBumpError};
use std::fmt;

/// Tag that an empty current version stands for
pub const INITIAL_TAG: &str = "v0.0.0";

/// `v` followed by one to three numeric components, none with a leading zero
const TAG_PATTERN: &str = r"^v(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*)){0,2}$";

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Normalize a tag into canonical `vMAJOR.MINOR.PATCH` form.
    ///
    /// - `""` becomes `"v0.0.0"`
    /// - a tag without the leading `v` is retried with it prepended
    /// - `vMAJOR` and `vMAJOR.MINOR` are padded with `.0` components
    ///
    /// # Example
    /// ```ignore
    /// assert_eq!(Version::normalize("1.2").unwrap(), "v1.2.0");
    /// assert!(Version::normalize("05").is_err());
    /// ```
    pub fn normalize(current: &str) -> Result<String> {
        if current.is_empty() {
            return Ok(INITIAL_TAG.to_string());
        }

        let mut tag = if is_valid_tag(current) {
            current.to_string()
        } else {
            let prefixed = format!("v{}", current);
            if !is_valid_tag(&prefixed) {
                return Err(SemverBumpError::invalid_version(current));
            }
            prefixed
        };

        for _ in tag.matches('.').count()..2 {
            tag.push_str(".0");
        }

        Ok(tag)
    }

    /// Parse a tag (shorthand and missing `v` allowed) into a version
    pub fn parse(current: &str) -> Result<Self> {
        let tag = Self::normalize(current)?;

        // Components too large for u64 are rejected here
        let parsed = semver::Version::parse(&tag[1..])
            .map_err(|_| SemverBumpError::invalid_version(current))?;

        Ok(Version::new(parsed.major, parsed.minor, parsed.patch))
    }

    /// Bump version according to the increment kind.
    ///
    /// Returns `None` when the incremented component would overflow.
    pub fn bump(&self, kind: IncrementKind) -> Option<Self> {
        let bumped = match kind {
            IncrementKind::Major => Version::new(self.major.checked_add(1)?, 0, 0),
            IncrementKind::Minor => Version::new(self.major, self.minor.checked_add(1)?, 0),
            IncrementKind::Patch => Version::new(self.major, self.minor, self.patch.checked_add(1)?),
        };
        Some(bumped)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn is_valid_tag(tag: &str) -> bool {
    regex::Regex::new(TAG_PATTERN)
        .map(|re| re.is_match(tag))
        .unwrap_or(false)
}
