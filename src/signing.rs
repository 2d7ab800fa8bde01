// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HMAC-SHA512 signing of fund-transfer requests.
//!
//! The address API authenticates sends with a `sign` parameter:
//! 1. `key = hex(SHA-512(secret_token))`, lower-case
//! 2. Sort the body parameters by key
//! 3. Form-encode them into a query string
//! 4. `sign = hex(HMAC-SHA512(key, query))`, lower-case
//!
//! The secret token is only used to derive the key and never crosses the wire.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha512};

use crate::params::Params;

type HmacSha512 = Hmac<Sha512>;

/// Body key the signature is stored under.
pub const SIGN_PARAM: &str = "sign";

/// Signs parameter sets with a key derived from the secret token.
#[derive(Clone)]
pub struct RequestSigner {
    signing_key: String,
}

impl RequestSigner {
    pub fn new(secret_token: &str) -> Self {
        Self {
            signing_key: derive_signing_key(secret_token),
        }
    }

    /// Signature over `params` as they stand, without any `sign` entry.
    pub fn sign(&self, params: &Params) -> String {
        let query = params.sorted().to_form_string();
        hmac_sha512_hex(self.signing_key.as_bytes(), query.as_bytes())
    }

    /// Append `sign` to `params`.
    ///
    /// An existing `sign` entry is dropped first so it never feeds into its
    /// own signature.
    pub fn sign_into(&self, params: &mut Params) {
        params.remove(SIGN_PARAM);
        let signature = self.sign(params);
        params.insert(SIGN_PARAM, signature);
    }
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("signing_key", &"<redacted>")
            .finish()
    }
}

/// Lower-case hex SHA-512 digest of the secret token.
pub fn derive_signing_key(secret_token: &str) -> String {
    hex::encode(Sha512::digest(secret_token.as_bytes()))
}

fn hmac_sha512_hex(key: &[u8], message: &[u8]) -> String {
    let mut mac = HmacSha512::new_from_slice(key).expect("HMAC accepts any key length");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParamValue;

    const SECRET: &str = "s3cret";

    fn base_params() -> Params {
        Params::new()
            .with("amount", 0.1)
            .with("recipient", "abc")
            .with("payment_password", "pw")
    }

    #[test]
    fn signing_key_is_hex_sha512_of_secret() {
        assert_eq!(
            derive_signing_key(SECRET),
            "95c89addde506357ec5efd0ee41ac241efd6fb1009a7680c1501ea8170342b8c\
             bf0f2d938b56295490f19f1fc5fa28d09b1584eaa09c9a6b2f777623299cd521"
        );
    }

    #[test]
    fn known_signature_vector() {
        let signer = RequestSigner::new(SECRET);
        assert_eq!(
            signer.sign(&base_params()),
            "1f9f2c7bb6b000d9828c0d71d422f2bda21ae3060cd7288f0aa63a6893dca80f\
             78e24a9a10a34e6293762de9d81861ae865fcfa3a0f7aef0eb15f1adb2606b52"
        );
    }

    #[test]
    fn signature_ignores_insertion_order() {
        let signer = RequestSigner::new(SECRET);
        let reordered = Params::new()
            .with("payment_password", "pw")
            .with("amount", 0.1)
            .with("recipient", "abc");

        assert_eq!(signer.sign(&base_params()), signer.sign(&reordered));
        assert_eq!(signer.sign(&reordered), signer.sign(&reordered));
    }

    #[test]
    fn signature_changes_with_any_value_or_key() {
        let signer = RequestSigner::new(SECRET);
        let baseline = signer.sign(&base_params());

        let changed_value = base_params().with("amount", 0.2);
        assert_ne!(signer.sign(&changed_value), baseline);

        let extra_key = base_params().with("tag", 39381);
        assert_ne!(signer.sign(&extra_key), baseline);

        let mut renamed = base_params();
        renamed.remove("recipient");
        renamed.insert("recipients", "abc");
        assert_ne!(signer.sign(&renamed), baseline);
    }

    #[test]
    fn signature_depends_on_secret() {
        let a = RequestSigner::new(SECRET).sign(&base_params());
        let b = RequestSigner::new("other").sign(&base_params());
        assert_ne!(a, b);
    }

    #[test]
    fn signature_is_lowercase_hex_of_64_bytes() {
        let signature = RequestSigner::new(SECRET).sign(&base_params());
        assert_eq!(signature.len(), 128);
        assert!(signature
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn sign_into_appends_sign_computed_without_itself() {
        let signer = RequestSigner::new(SECRET);
        let expected = signer.sign(&base_params());

        let mut params = base_params().with(SIGN_PARAM, "stale");
        signer.sign_into(&mut params);

        assert_eq!(params.keys().last(), Some(SIGN_PARAM));
        assert_eq!(params.get(SIGN_PARAM), Some(&ParamValue::Str(expected)));
    }

    #[test]
    fn hmac_accepts_empty_and_oversized_keys() {
        assert_eq!(hmac_sha512_hex(b"", b"amount=1").len(), 128);
        assert_eq!(hmac_sha512_hex(&[0x61; 512], b"amount=1").len(), 128);
        assert_eq!(RequestSigner::new("").sign(&Params::new()).len(), 128);
    }

    #[test]
    fn debug_redacts_key() {
        let rendered = format!("{:?}", RequestSigner::new(SECRET));
        assert!(!rendered.contains("95c89add"));
        assert!(rendered.contains("redacted"));
    }
}
