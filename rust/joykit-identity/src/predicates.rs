//! Boolean classifiers over user- and configuration-supplied strings.
//!
//! Each predicate is total: unrecognized or malformed input yields `false`,
//! never an error.

use crate::JoyId;
use url::Url;

/// Whether `hostname` is a plausibly well-formed domain name.
///
/// `localhost` is accepted as well, since it is a secure context for
/// credential ceremonies despite not being a dotted domain.
pub fn is_valid_domain(hostname: &str) -> bool {
    if hostname == "localhost" {
        return true;
    }

    let Some((head, tld)) = hostname.rsplit_once('.') else {
        return false;
    };

    head.split('.').all(is_valid_label)
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// A single domain label: alphanumerics with interior single hyphens.
fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
        return false;
    }

    let mut previous_hyphen = false;

    for c in label.chars() {
        if c == '-' {
            if previous_hyphen {
                return false;
            }
            previous_hyphen = true;
        } else if c.is_ascii_alphanumeric() {
            previous_hyphen = false;
        } else {
            return false;
        }
    }

    true
}

/// Whether `value` parses as an absolute `http` or `https` URL.
pub fn is_valid_url(value: &str) -> bool {
    Url::parse(value).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}

/// Whether `value` is an object URL minted from an `https` origin.
pub fn is_blob_url(value: &str) -> bool {
    value.starts_with("blob:https://")
}

/// Whether `value` is nonempty ASCII alphanumerics.
pub fn is_alphanumeric_string(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Whether `value` is a well-formed username: 4 to 16 alphanumerics.
pub fn is_valid_username(value: &str) -> bool {
    (4..=16).contains(&value.len()) && is_alphanumeric_string(value)
}

/// Whether `value` is nonempty ASCII decimal digits.
pub fn is_numeric_string(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Whether `value` is a well-formed CCID: at least 4 decimal digits.
pub fn is_valid_ccid(value: &str) -> bool {
    value.len() >= 4 && is_numeric_string(value)
}

/// Whether `value` is a well-formed `username#ccid` composite identifier.
pub fn is_valid_joy_id(value: &str) -> bool {
    value.parse::<JoyId>().is_ok()
}

/// Whether `value` contains any Unicode whitespace.
pub fn has_whitespace(value: &str) -> bool {
    value.chars().any(char::is_whitespace)
}

/// Whether `value` references a renderable 3D asset, judged by file
/// extension (`.usdz`, `.glb`, `.gltf`).
pub fn is_3d_asset_url(value: &str) -> bool {
    value
        .rsplit_once('.')
        .is_some_and(|(_, extension)| matches!(extension, "usdz" | "glb" | "gltf"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    use wasm_bindgen_test::wasm_bindgen_test as test;

    #[test]
    fn it_classifies_domains() {
        assert!(is_valid_domain("localhost"));
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("app.joy.id"));
        assert!(is_valid_domain("my-app.example.co"));
        assert!(is_valid_domain("EXAMPLE.COM"));

        assert!(!is_valid_domain("example"));
        assert!(!is_valid_domain(".com"));
        assert!(!is_valid_domain("example."));
        assert!(!is_valid_domain("-bad.example.com"));
        assert!(!is_valid_domain("bad-.example.com"));
        assert!(!is_valid_domain("ba--d.example.com"));
        assert!(!is_valid_domain("example.c"));
        assert!(!is_valid_domain("example.c0m"));
        assert!(!is_valid_domain("exa mple.com"));
    }

    #[test]
    fn it_classifies_urls() {
        assert!(is_valid_url("https://app.joy.id/session"));
        assert!(is_valid_url("http://localhost:5173"));

        assert!(!is_valid_url("ftp://example.com"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("/relative/path"));
        assert!(!is_valid_url("not a url"));
    }

    #[test]
    fn it_classifies_blob_urls() {
        assert!(is_blob_url("blob:https://app.joy.id/55a7bd36"));
        assert!(!is_blob_url("blob:http://app.joy.id/55a7bd36"));
        assert!(!is_blob_url("https://app.joy.id/55a7bd36"));
    }

    #[test]
    fn it_classifies_usernames() {
        assert!(!is_valid_username("ab"));
        assert!(is_valid_username("abcd1234"));
        assert!(is_valid_username("abcd"));
        assert!(is_valid_username("a234567890123456"));

        assert!(!is_valid_username("a2345678901234567"));
        assert!(!is_valid_username("abc_1234"));
        assert!(!is_valid_username(""));
    }

    #[test]
    fn it_classifies_ccids() {
        assert!(!is_valid_ccid("123"));
        assert!(is_valid_ccid("1234"));
        assert!(is_valid_ccid("00123456"));

        assert!(!is_valid_ccid("12e4"));
        assert!(!is_valid_ccid(""));
    }

    #[test]
    fn it_classifies_composite_identifiers() {
        assert!(is_valid_joy_id("abcd1234#1234"));

        assert!(!is_valid_joy_id("ab#1234"));
        assert!(!is_valid_joy_id("abcd1234#123"));
        assert!(!is_valid_joy_id("abcd1234"));
        assert!(!is_valid_joy_id("#1234"));
    }

    #[test]
    fn it_detects_whitespace() {
        assert!(has_whitespace("hello world"));
        assert!(has_whitespace("tab\there"));
        assert!(!has_whitespace("nowhitespace"));
        assert!(!has_whitespace(""));
    }

    #[test]
    fn it_classifies_3d_asset_urls() {
        assert!(is_3d_asset_url("https://cdn.joy.id/models/card.glb"));
        assert!(is_3d_asset_url("https://cdn.joy.id/models/card.usdz"));
        assert!(is_3d_asset_url("https://cdn.joy.id/models/card.gltf"));

        assert!(!is_3d_asset_url("https://cdn.joy.id/models/card.png"));
        assert!(!is_3d_asset_url("https://cdn.joy.id/models/card"));
        assert!(!is_3d_asset_url(""));
    }
}
