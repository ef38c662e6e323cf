//! COSE signing algorithm identifiers used by wallet credentials.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The signing algorithms a wallet credential can declare, identified by
/// their COSE algorithm numbers.
///
/// Resident passkeys sign with ECDSA P-256 (`ES256`); delegated session
/// keys may use RSASSA-PKCS1-v1_5 (`RS256`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SigningAlg {
    /// ECDSA with SHA-256 on the P-256 curve (COSE -7).
    Es256,
    /// RSASSA-PKCS1-v1_5 with SHA-256 (COSE -257).
    Rs256,
}

impl SigningAlg {
    /// The COSE algorithm identifier.
    pub const fn cose_id(self) -> i32 {
        match self {
            SigningAlg::Es256 => -7,
            SigningAlg::Rs256 => -257,
        }
    }
}

impl From<SigningAlg> for i32 {
    fn from(alg: SigningAlg) -> Self {
        alg.cose_id()
    }
}

/// The COSE algorithm identifier does not name a supported algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown COSE algorithm identifier {0}")]
pub struct UnknownAlgError(pub i32);

impl TryFrom<i32> for SigningAlg {
    type Error = UnknownAlgError;

    fn try_from(cose_id: i32) -> Result<Self, Self::Error> {
        match cose_id {
            -7 => Ok(SigningAlg::Es256),
            -257 => Ok(SigningAlg::Rs256),
            other => Err(UnknownAlgError(other)),
        }
    }
}

impl fmt::Display for SigningAlg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SigningAlg::Es256 => write!(f, "ES256"),
            SigningAlg::Rs256 => write!(f, "RS256"),
        }
    }
}
