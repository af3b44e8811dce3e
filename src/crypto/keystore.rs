//! This module manages the demo's signing keys: an in-memory store of
//! Ed25519 key pairs addressed by alias, with sign and verify operations.
//!
//! Keys live only as long as the process; nothing is written to disk.
use base64::prelude::*;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use thiserror::Error;

/// The closed set of ways a key-store operation can fail.
///
/// A signature that simply does not match is not a failure; `verify` reports
/// that through its `Ok(false)` return instead.
#[derive(Debug, Error)]
pub enum KeyStoreError {
    /// No key pair has been created under the requested alias.
    #[error("no key pair stored under alias '{0}'")]
    UnknownAlias(String),
    /// The supplied signature text is not valid base64.
    #[error("signature is not valid base64: {0}")]
    MalformedSignature(#[from] base64::DecodeError),
    /// The decoded signature is not the 64 bytes Ed25519 expects.
    #[error("decoded signature is {0} bytes, expected 64")]
    BadSignatureLength(usize),
}

/// An Ed25519 public key with display helpers.
#[derive(Clone)]
pub struct PublicKey(VerifyingKey);

impl PublicKey {
    /// Returns a short hex fingerprint (first 8 bytes of the SHA-256 of the
    /// key), handy for telling key pairs apart in log output.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.0.as_bytes());
        hex::encode(&digest[..8])
    }

    /// Returns the key itself as base64.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(self.0.as_bytes())
    }
}

/// An in-memory store of Ed25519 key pairs addressed by alias.
#[derive(Default)]
pub struct KeyStore {
    entries: HashMap<String, SigningKey>,
}

impl KeyStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a fresh key pair under `alias`, replacing any previous pair
    /// stored there, and returns the new public key.
    pub fn create_keys(&mut self, alias: &str) -> PublicKey {
        let signing_key = SigningKey::generate(&mut OsRng);
        let public = PublicKey(signing_key.verifying_key());
        self.entries.insert(alias.to_string(), signing_key);
        public
    }

    /// Returns the public key stored under `alias`, if any.
    pub fn public_key(&self, alias: &str) -> Option<PublicKey> {
        self.entries
            .get(alias)
            .map(|key| PublicKey(key.verifying_key()))
    }

    /// Signs `data` with the key pair under `alias` and returns the
    /// signature as base64 text.
    ///
    /// # Errors
    ///
    /// Returns [`KeyStoreError::UnknownAlias`] when no key pair exists under
    /// the alias.
    pub fn sign(&self, alias: &str, data: &[u8]) -> Result<String, KeyStoreError> {
        let key = self
            .entries
            .get(alias)
            .ok_or_else(|| KeyStoreError::UnknownAlias(alias.to_string()))?;

        let signature = key.sign(data);
        Ok(BASE64_STANDARD.encode(signature.to_bytes()))
    }

    /// Checks a base64 signature against `data` using the public key under
    /// `alias`. Returns `Ok(false)` for a well-formed signature that does
    /// not match.
    ///
    /// # Errors
    ///
    /// Returns [`KeyStoreError::UnknownAlias`] for a missing alias,
    /// [`KeyStoreError::MalformedSignature`] for invalid base64, and
    /// [`KeyStoreError::BadSignatureLength`] when the decoded bytes are not
    /// a whole Ed25519 signature.
    pub fn verify(
        &self,
        alias: &str,
        data: &[u8],
        signature_b64: &str,
    ) -> Result<bool, KeyStoreError> {
        let key = self
            .entries
            .get(alias)
            .ok_or_else(|| KeyStoreError::UnknownAlias(alias.to_string()))?;

        let bytes = BASE64_STANDARD.decode(signature_b64)?;
        let bytes: [u8; Signature::BYTE_SIZE] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyStoreError::BadSignatureLength(bytes.len()))?;

        let signature = Signature::from_bytes(&bytes);
        Ok(key.verifying_key().verify(data, &signature).is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_and_verify_round_trip() {
        let mut store = KeyStore::new();
        store.create_keys("myKey");

        let signature = store.sign("myKey", b"Hello, world!").unwrap();
        assert!(store.verify("myKey", b"Hello, world!", &signature).unwrap());
    }

    #[test]
    fn tampered_data_does_not_verify() {
        let mut store = KeyStore::new();
        store.create_keys("myKey");

        let signature = store.sign("myKey", b"Hello, world!").unwrap();
        assert!(!store.verify("myKey", b"Hello, world?", &signature).unwrap());
    }

    #[test]
    fn recreating_keys_replaces_the_pair() {
        let mut store = KeyStore::new();
        let first = store.create_keys("myKey");
        let signature = store.sign("myKey", b"payload").unwrap();

        let second = store.create_keys("myKey");
        assert_ne!(first.fingerprint(), second.fingerprint());
        assert!(!store.verify("myKey", b"payload", &signature).unwrap());
    }

    #[test]
    fn unknown_alias_is_reported() {
        let store = KeyStore::new();
        let err = store.sign("missing", b"payload").unwrap_err();
        assert!(matches!(err, KeyStoreError::UnknownAlias(alias) if alias == "missing"));
    }

    #[test]
    fn malformed_base64_is_reported() {
        let mut store = KeyStore::new();
        store.create_keys("myKey");

        let err = store.verify("myKey", b"payload", "not base64!!").unwrap_err();
        assert!(matches!(err, KeyStoreError::MalformedSignature(_)));
    }

    #[test]
    fn truncated_signature_is_reported() {
        let mut store = KeyStore::new();
        store.create_keys("myKey");

        let short = BASE64_STANDARD.encode([0u8; 16]);
        let err = store.verify("myKey", b"payload", &short).unwrap_err();
        assert!(matches!(err, KeyStoreError::BadSignatureLength(16)));
    }

    #[test]
    fn fingerprint_is_stable_for_one_key() {
        let mut store = KeyStore::new();
        let created = store.create_keys("myKey");
        let looked_up = store.public_key("myKey").unwrap();

        assert_eq!(created.fingerprint(), looked_up.fingerprint());
        assert_eq!(created.fingerprint().len(), 16);
    }
}
