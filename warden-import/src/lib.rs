//! Hardware wallet export importers for Warden.
//!
//! Turns vendor export files into [`warden_core::Wallet`] and
//! [`warden_core::Keystore`] values. Importers implement the traits in this
//! crate so callers can pick one by device at runtime.
//!
//! # Usage
//!
//! ```
//! use warden_core::ScriptType;
//! use warden_import::{ColdcardSinglesig, SinglesigWalletImport};
//!
//! let dump = "\
//! xpub661MyMwAqRbcFkPHucMnrGNzDwb6teAX1RbKQmqtEF8kK3Z7LZ59qafCjB9eCRLiTVG3uxBxgKvRgbubRhqSKXnGGb1aoaqLrpMBDrVxga8
//! m/84'/0'/0' => zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs
//! ";
//!
//! let importer = ColdcardSinglesig::default();
//! let wallet = importer.import_wallet(ScriptType::P2wpkh, &mut dump.as_bytes(), None)?;
//! assert_eq!(wallet.name.as_deref(), Some("Coldcard 73C5DA0A"));
//! assert_eq!(wallet.keystores.len(), 1);
//! # Ok::<(), warden_import::Error>(())
//! ```

mod coldcard;
mod error;
mod traits;

pub use coldcard::ColdcardSinglesig;
pub use error::Error;
pub use traits::{Import, KeystoreFileImport, SinglesigWalletImport};

/// A convenient Result type alias for warden-import operations.
pub type Result<T> = core::result::Result<T, Error>;
