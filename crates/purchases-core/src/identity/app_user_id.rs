//! App user ID type and the anonymous-ID format

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix shared by every generated anonymous app user ID.
///
/// The full format is the prefix followed by exactly 32 lowercase hex
/// characters; this string shape is an external contract and must not
/// change across SDK versions.
pub const ANONYMOUS_ID_PREFIX: &str = "$RCAnonymousID:";

/// An app user identifier.
///
/// Two kinds exist: anonymous IDs generated by the SDK (matching
/// `$RCAnonymousID:` + 32 lowercase hex chars) and identified IDs
/// supplied by the application. Supplied values are stored verbatim;
/// validation is the host's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppUserId(String);

impl AppUserId {
    /// Wrap an application-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh anonymous app user ID.
    ///
    /// 128 bits of randomness rendered as lowercase hex behind the fixed
    /// prefix. Collision-resistant, not a cryptographic credential.
    pub fn generate_anonymous() -> Self {
        Self(format!("{}{}", ANONYMOUS_ID_PREFIX, Uuid::new_v4().simple()))
    }

    /// True iff this ID matches the generated anonymous format.
    pub fn is_anonymous(&self) -> bool {
        match self.0.strip_prefix(ANONYMOUS_ID_PREFIX) {
            Some(suffix) => {
                suffix.len() == 32
                    && suffix
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            }
            None => false,
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the identifier.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl core::fmt::Display for AppUserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AppUserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for AppUserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for AppUserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
