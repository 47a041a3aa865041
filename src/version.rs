use std::fmt;

use crate::BumpError;

/// A three-part version as it appears in the header declaration.
///
/// `major` and `minor` are carried verbatim as text; only `patch` is
/// treated as numeric, and only at increment time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionTriple {
    pub major: String,
    pub minor: String,
    pub patch: String,
}

impl VersionTriple {
    /// Splits a dotted string into its three components.
    ///
    /// Anything other than exactly three `.`-separated parts is rejected.
    pub fn parse(raw: &str) -> Result<Self, BumpError> {
        let parts: Vec<&str> = raw.split('.').collect();
        match parts.as_slice() {
            [major, minor, patch] => Ok(VersionTriple {
                major: (*major).to_string(),
                minor: (*minor).to_string(),
                patch: (*patch).to_string(),
            }),
            _ => Err(BumpError::MalformedVersion(raw.to_string())),
        }
    }

    /// Returns a new triple with the patch component incremented.
    ///
    /// A patch that is not a plain run of decimal digits resets to `0`
    /// instead of incrementing. Pre-release tags and other suffixes are
    /// discarded by this policy.
    pub fn bump_patch(&self) -> VersionTriple {
        let numeric =
            !self.patch.is_empty() && self.patch.bytes().all(|b| b.is_ascii_digit());
        let next = if numeric {
            self.patch.parse::<u64>().map(|n| n + 1).unwrap_or(0)
        } else {
            0
        };

        VersionTriple {
            major: self.major.clone(),
            minor: self.minor.clone(),
            patch: next.to_string(),
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
