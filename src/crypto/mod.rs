pub mod keystore;

pub use keystore::{KeyStore, KeyStoreError, PublicKey};
