//! The composite `username#ccid` account identifier.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bounds on the username half of a [`JoyId`].
const USERNAME_LENGTH: std::ops::RangeInclusive<usize> = 4..=16;

/// Minimum number of digits in the CCID half of a [`JoyId`].
const CCID_MIN_LENGTH: usize = 4;

/// A composite account identifier: an alphanumeric username joined by `#`
/// to its numeric CCID suffix, e.g. `abcd1234#1234`.
///
/// Usernames are 4 to 16 ASCII alphanumerics; CCIDs are at least 4 decimal
/// digits. Parsing rejects anything else, including extra `#` separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoyId {
    username: String,
    ccid: String,
}

impl JoyId {
    /// Assemble an identifier from its halves, validating both.
    ///
    /// # Errors
    ///
    /// Rejects usernames and CCIDs that do not meet the rules above.
    pub fn new(
        username: impl Into<String>,
        ccid: impl Into<String>,
    ) -> Result<Self, JoyIdParseError> {
        let username = username.into();
        let ccid = ccid.into();

        if !USERNAME_LENGTH.contains(&username.len())
            || !username.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(JoyIdParseError::InvalidUsername);
        }

        if ccid.len() < CCID_MIN_LENGTH || !ccid.chars().all(|c| c.is_ascii_digit()) {
            return Err(JoyIdParseError::InvalidCcid);
        }

        Ok(Self { username, ccid })
    }

    /// The username half.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The numeric CCID half.
    pub fn ccid(&self) -> &str {
        &self.ccid
    }
}

/// Errors when parsing a [`JoyId`] from its `username#ccid` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum JoyIdParseError {
    /// No `#` separator between username and CCID.
    #[error("expected 'username#ccid', missing the '#' separator")]
    MissingSeparator,

    /// The username half is not 4-16 ASCII alphanumerics.
    #[error("username must be 4 to 16 alphanumeric characters")]
    InvalidUsername,

    /// The CCID half is not at least 4 decimal digits.
    #[error("ccid must be at least 4 decimal digits")]
    InvalidCcid,
}

impl FromStr for JoyId {
    type Err = JoyIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (username, ccid) = s.split_once('#').ok_or(JoyIdParseError::MissingSeparator)?;

        Self::new(username, ccid)
    }
}

impl fmt::Display for JoyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.username, self.ccid)
    }
}

impl Serialize for JoyId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for JoyId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct JoyIdVisitor;

        impl serde::de::Visitor<'_> for JoyIdVisitor {
            type Value = JoyId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 'username#ccid' account identifier")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(JoyIdVisitor)
    }
}
