use crate::error::{Result, SemverBumpError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity of a version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IncrementKind {
    Major,
    Minor,
    Patch,
}

impl IncrementKind {
    /// Parse an increment kind from one of the literals `major`, `minor` or `patch`
    ///
    /// Matching is case-sensitive: `"Major"` is rejected.
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IncrementKind::Major => "major",
            IncrementKind::Minor => "minor",
            IncrementKind::Patch => "patch",
        }
    }
}

impl FromStr for IncrementKind {
    type Err = SemverBumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(IncrementKind::Major),
            "minor" => Ok(IncrementKind::Minor),
            "patch" => Ok(IncrementKind::Patch),
            other => Err(SemverBumpError::invalid_kind(other)),
        }
    }
}

impl TryFrom<String> for IncrementKind {
    type Error = SemverBumpError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<IncrementKind> for String {
    fn from(kind: IncrementKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for IncrementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literals() {
        assert_eq!(IncrementKind::parse("major").unwrap(), IncrementKind::Major);
        assert_eq!(IncrementKind::parse("minor").unwrap(), IncrementKind::Minor);
        assert_eq!(IncrementKind::parse("patch").unwrap(), IncrementKind::Patch);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        for input in ["Major", "MINOR", "Patch", " patch", "patch ", ""] {
            let err = IncrementKind::parse(input).unwrap_err();
            assert!(
                matches!(err, SemverBumpError::InvalidIncrementKind(ref got) if got == input),
                "unexpected error for '{}': {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_parse_rejects_shorthand() {
        assert!(IncrementKind::parse("m").is_err());
        assert!(IncrementKind::parse("foo").is_err());
    }

    #[test]
    fn test_display_round_trips_literal() {
        for kind in [IncrementKind::Major, IncrementKind::Minor, IncrementKind::Patch] {
            assert_eq!(kind.to_string().parse::<IncrementKind>().unwrap(), kind);
        }
    }
}
