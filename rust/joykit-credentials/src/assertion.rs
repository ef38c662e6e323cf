//! WebAuthn assertions and their verification.

use crate::{PasskeyPublicKey, SigningAlg, VerifyError};
use joykit_encoding::{append_buffer, base64url_to_buffer, der_to_p1363, sha256};
use p256::ecdsa::signature::Verifier as _;
use serde::Deserialize;

/// A WebAuthn assertion produced when the wallet signs a message.
///
/// Everything here is carried verbatim from the authenticator's response;
/// the DER signature is converted to its fixed-width form only at
/// verification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertion {
    /// The message the application asked to have signed.
    pub challenge: Vec<u8>,

    /// Raw `clientDataJSON` bytes from the authenticator.
    pub client_data_json: Vec<u8>,

    /// Raw `authenticatorData` bytes from the authenticator.
    pub authenticator_data: Vec<u8>,

    /// The DER-encoded ECDSA signature.
    pub signature: Vec<u8>,
}

/// Verify a wallet assertion against the account's public key.
///
/// Performs the full WebAuthn check:
///
/// 1. parse `clientDataJSON` and require its base64url challenge to decode
///    to the message the caller asked to have signed;
/// 2. reassemble the signed payload
///    `authenticatorData || SHA-256(clientDataJSON)`;
/// 3. reformat the DER signature to fixed-width form and verify it.
///
/// Only ES256 credentials can be verified locally; the wallet's RSA
/// session keys never hand their assertions to the application.
///
/// # Errors
///
/// Each step above fails with a distinct error; see [`VerifyError`].
pub fn verify_assertion(
    key: &PasskeyPublicKey,
    alg: SigningAlg,
    assertion: &Assertion,
) -> Result<(), VerifyError> {
    if alg != SigningAlg::Es256 {
        return Err(VerifyError::UnsupportedAlgorithm(alg));
    }

    validate_challenge(&assertion.challenge, &assertion.client_data_json)?;

    let payload = append_buffer(
        &assertion.authenticator_data,
        &sha256(&assertion.client_data_json),
    );

    let p1363 = der_to_p1363(&assertion.signature)?;
    let signature = p256::ecdsa::Signature::from_slice(&p1363)
        .map_err(|error| VerifyError::InvalidSignature(error.to_string()))?;

    key.verifying_key()
        .verify(&payload, &signature)
        .map_err(|_| VerifyError::SignatureMismatch)?;

    tracing::trace!("assertion verified");
    Ok(())
}

/// Require the challenge inside `clientDataJSON` to be the base64url form
/// of the expected message.
fn validate_challenge(expected: &[u8], client_data_json: &[u8]) -> Result<(), VerifyError> {
    #[derive(Deserialize)]
    struct ClientData {
        challenge: String,
    }

    let client_data: ClientData = serde_json::from_slice(client_data_json)
        .map_err(|error| VerifyError::InvalidClientData(error.to_string()))?;

    let challenge = base64url_to_buffer(&client_data.challenge)
        .map_err(|error| VerifyError::InvalidClientData(error.to_string()))?;

    if challenge != expected {
        return Err(VerifyError::ChallengeMismatch);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use joykit_encoding::buffer_to_base64url;
    use p256::ecdsa::signature::Signer as _;
    use p256::ecdsa::{Signature, SigningKey};
    use testresult::TestResult;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    /// Build a `clientDataJSON` whose challenge is the base64url form of
    /// `message`.
    fn build_client_data_json(message: &[u8]) -> Vec<u8> {
        let json = serde_json::json!({
            "type": "webauthn.get",
            "challenge": buffer_to_base64url(message),
            "origin": "https://app.joy.id",
            "crossOrigin": false,
        });

        serde_json::to_vec(&json).expect("serializable JSON value")
    }

    /// Minimal authenticator data: rpIdHash (32) | flags (1) | signCount (4).
    fn build_authenticator_data() -> Vec<u8> {
        let mut auth_data = sha256(b"app.joy.id").to_vec();
        auth_data.push(0x05); // flags: UP + UV
        auth_data.extend_from_slice(&[0x00, 0x00, 0x00, 0x01]);
        auth_data
    }

    /// A signing key, its public half, and a valid assertion over `message`.
    fn create_test_fixture(message: &[u8]) -> (PasskeyPublicKey, Assertion) {
        let signing_key = SigningKey::from_bytes(&[42u8; 32].into())
            .expect("a nonzero scalar is a valid signing key");
        let public_key = PasskeyPublicKey::from(*signing_key.verifying_key());

        let client_data_json = build_client_data_json(message);
        let authenticator_data = build_authenticator_data();

        let payload = append_buffer(&authenticator_data, &sha256(&client_data_json));
        let signature: Signature = signing_key.sign(&payload);

        let assertion = Assertion {
            challenge: message.to_vec(),
            client_data_json,
            authenticator_data,
            signature: signature.to_der().as_bytes().to_vec(),
        };

        (public_key, assertion)
    }

    #[test]
    fn it_verifies_a_valid_assertion() -> TestResult {
        let (key, assertion) = create_test_fixture(b"Hello World");

        verify_assertion(&key, SigningAlg::Es256, &assertion)?;
        Ok(())
    }

    #[test]
    fn it_rejects_a_challenge_for_a_different_message() {
        let (key, mut assertion) = create_test_fixture(b"original message");
        assertion.challenge = b"tampered message".to_vec();

        let result = verify_assertion(&key, SigningAlg::Es256, &assertion);

        assert!(matches!(result, Err(VerifyError::ChallengeMismatch)));
    }

    #[test]
    fn it_rejects_a_wrong_key() {
        let (_, assertion) = create_test_fixture(b"key mismatch");

        let other_key = SigningKey::from_bytes(&[99u8; 32].into())
            .expect("a nonzero scalar is a valid signing key");
        let other_public_key = PasskeyPublicKey::from(*other_key.verifying_key());

        let result = verify_assertion(&other_public_key, SigningAlg::Es256, &assertion);

        assert!(matches!(result, Err(VerifyError::SignatureMismatch)));
    }

    #[test]
    fn it_rejects_tampered_authenticator_data() {
        let (key, mut assertion) = create_test_fixture(b"auth data tamper");
        assertion.authenticator_data[0] ^= 0xff;

        let result = verify_assertion(&key, SigningAlg::Es256, &assertion);

        assert!(matches!(result, Err(VerifyError::SignatureMismatch)));
    }

    #[test]
    fn it_rejects_tampered_client_data() {
        let (key, mut assertion) = create_test_fixture(b"client data tamper");
        // Keep the challenge intact but change the origin, so the challenge
        // check passes and the signature check is what trips.
        assertion.client_data_json = {
            let json = serde_json::json!({
                "type": "webauthn.get",
                "challenge": buffer_to_base64url(b"client data tamper"),
                "origin": "https://evil.example",
                "crossOrigin": false,
            });
            serde_json::to_vec(&json).expect("serializable JSON value")
        };

        let result = verify_assertion(&key, SigningAlg::Es256, &assertion);

        assert!(matches!(result, Err(VerifyError::SignatureMismatch)));
    }

    #[test]
    fn it_rejects_unparseable_client_data() {
        let (key, mut assertion) = create_test_fixture(b"bad json");
        assertion.client_data_json = b"not json".to_vec();

        let result = verify_assertion(&key, SigningAlg::Es256, &assertion);

        assert!(matches!(result, Err(VerifyError::InvalidClientData(_))));
    }

    #[test]
    fn it_rejects_a_malformed_der_signature() {
        let (key, mut assertion) = create_test_fixture(b"bad der");
        assertion.signature = vec![0x30, 0x02, 0xff, 0xff];

        let result = verify_assertion(&key, SigningAlg::Es256, &assertion);

        assert!(matches!(result, Err(VerifyError::SignatureFormat(_))));
    }

    #[test]
    fn it_rejects_non_es256_algorithms() {
        let (key, assertion) = create_test_fixture(b"rsa session key");

        let result = verify_assertion(&key, SigningAlg::Rs256, &assertion);

        assert!(matches!(
            result,
            Err(VerifyError::UnsupportedAlgorithm(SigningAlg::Rs256))
        ));
    }
}
