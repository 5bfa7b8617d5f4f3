//! The version bump operation exposed to callers.

use crate::domain::{IncrementKind, Version};
use crate::error::{Result, SemverBumpError};

/// Bumps a semVer tag by the increment kind given as a string.
///
/// `kind` must be one of `major`, `minor` or `patch` and is checked before
/// the version, so an unknown kind is reported even when `current` is also
/// invalid.
///
/// # Arguments
/// * `current` - Current tag, e.g. `"v1.0.1"`, `"1.1"`, `"v1"` or `""`
/// * `kind` - Increment kind literal
///
/// # Returns
/// * `Ok(String)` - The bumped tag in canonical `vMAJOR.MINOR.PATCH` form
/// * `Err(SemverBumpError::InvalidIncrementKind)` - If `kind` is not recognized
/// * `Err(SemverBumpError::InvalidVersion)` - If `current` is not a valid tag
///
/// # Example
/// ```
/// assert_eq!(semverbump::bump("1.0.1", "minor").unwrap(), "v1.1.0");
/// assert_eq!(semverbump::bump("", "patch").unwrap(), "v0.0.1");
/// assert!(semverbump::bump("1.0.0", "foo").is_err());
/// ```
pub fn bump(current: &str, kind: &str) -> Result<String> {
    let kind = IncrementKind::parse(kind)?;
    bump_version(current, kind)
}

/// Bumps a semVer tag by a closed increment kind.
///
/// # Example
/// ```
/// use semverbump::{bump_version, IncrementKind};
///
/// assert_eq!(bump_version("v1", IncrementKind::Major).unwrap(), "v2.0.0");
/// ```
pub fn bump_version(current: &str, kind: IncrementKind) -> Result<String> {
    let version = Version::parse(current)?;
    let bumped = version
        .bump(kind)
        .ok_or_else(|| SemverBumpError::invalid_version(current))?;
    Ok(bumped.to_string())
}
