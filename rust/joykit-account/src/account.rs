//! The account record returned by a successful authentication.

use serde::{Deserialize, Serialize};

/// Which kind of credential authenticated the account.
///
/// `MainKey` and `SubKey` are resident passkeys; the session variants are
/// time-limited keys the wallet derives for delegated signing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    /// The account's primary passkey.
    MainKey,
    /// A secondary passkey enrolled on another device.
    SubKey,
    /// A delegated session key derived from the main key.
    MainSessionKey,
    /// A delegated session key derived from a sub key.
    SubSessionKey,
}

impl KeyType {
    /// Whether this is a time-limited session key rather than a resident
    /// passkey.
    pub fn is_session_key(self) -> bool {
        matches!(self, KeyType::MainSessionKey | KeyType::SubSessionKey)
    }
}

/// How the authentication response was delivered back to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallbackType {
    /// The wallet ran in a popup window and posted the result back.
    Popup,
    /// The wallet navigated away and returned via a redirect URL.
    Redirect,
}

/// The logged-in account material persisted between sessions.
///
/// Everything here comes straight out of the wallet's authentication
/// response; nothing is derived locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// The account's blockchain address.
    pub address: String,

    /// The credential's public key, as lowercase hex of the raw uncompressed
    /// coordinates.
    pub pubkey: String,

    /// Which credential produced the response.
    pub key_type: KeyType,

    /// COSE algorithm identifier of the credential, when the wallet
    /// reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<i32>,

    /// Authenticator attestation, base64url, when the wallet returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attestation: Option<String>,

    /// Which callback flow delivered the response.
    pub callback_type: CallbackType,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    fn test_account() -> Account {
        Account {
            address: "ckt1qrfrwcdnvssswdwpn3s9v8fp87emat306ctjwsm3nmlkjg8qyza2cqgqq".into(),
            pubkey: "ab".repeat(64),
            key_type: KeyType::MainKey,
            alg: Some(-7),
            attestation: None,
            callback_type: CallbackType::Popup,
        }
    }

    #[test]
    fn it_serializes_key_types_in_snake_case() -> Result<()> {
        assert_eq!(
            serde_json::to_string(&KeyType::MainSessionKey)?,
            "\"main_session_key\""
        );
        assert_eq!(serde_json::to_string(&KeyType::MainKey)?, "\"main_key\"");
        Ok(())
    }

    #[test]
    fn it_distinguishes_session_keys() {
        assert!(KeyType::MainSessionKey.is_session_key());
        assert!(KeyType::SubSessionKey.is_session_key());
        assert!(!KeyType::MainKey.is_session_key());
        assert!(!KeyType::SubKey.is_session_key());
    }

    #[test]
    fn it_round_trips_an_account_through_json() -> Result<()> {
        let account = test_account();
        let json = serde_json::to_string(&account)?;
        let back: Account = serde_json::from_str(&json)?;

        assert_eq!(back, account);
        Ok(())
    }

    #[test]
    fn it_omits_absent_optional_fields() -> Result<()> {
        let json = serde_json::to_string(&test_account())?;

        assert!(!json.contains("attestation"));
        Ok(())
    }
}
