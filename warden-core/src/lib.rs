//! Wallet model types for Warden.
//!
//! This crate holds the data an importer produces: a [`Wallet`] with its
//! [`ScriptType`], [`Policy`] and [`Keystore`]s, plus [`ExtendedPublicKey`]
//! parsing for the SLIP-132 key formats hardware wallets export.
//!
//! # Features
//!
//! - `serde` (default): Derive `serde::Serialize` for the model types
//!
//! # Usage
//!
//! ```
//! use warden_core::{ExtendedPublicKey, ScriptType};
//!
//! let zpub = "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs";
//! let key = ExtendedPublicKey::from_descriptor(zpub)?;
//! let addr = key.derive_receive_address(ScriptType::P2wpkh, 0)?;
//! assert_eq!(addr.to_string(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
//! # Ok::<(), warden_core::Error>(())
//! ```

mod error;
mod keystore;
mod network;
mod policy;
mod script_type;
mod wallet;
mod xpub;

pub use error::Error;
pub use keystore::{DEFAULT_LABEL, KeyDerivation, Keystore, KeystoreSource, WalletModel};
pub use network::Network;
pub use policy::{Policy, PolicyType};
pub use script_type::{ParseScriptTypeError, ScriptType};
pub use wallet::Wallet;
pub use xpub::{ExtendedPublicKey, KeyHeader};

/// A convenient Result type alias for warden-core operations.
pub type Result<T> = core::result::Result<T, Error>;
