//! Importer interfaces.
//!
//! Readers are passed as `&mut dyn Read` so importers can be used as trait
//! objects, e.g. a `Vec<Box<dyn KeystoreFileImport>>` of supported devices.

use std::io::Read;
use std::path::Path;

use warden_core::{Keystore, PolicyType, ScriptType, Wallet, WalletModel};

use crate::Result;

/// Common surface of every importer.
pub trait Import {
    /// Vendor or format name shown to users.
    fn name(&self) -> &'static str;

    /// Device model the imported keystores are tagged with.
    fn wallet_model(&self) -> WalletModel;
}

/// Importer that extracts a single keystore from an export file.
pub trait KeystoreFileImport: Import {
    /// Instructions for producing the export on the device.
    fn keystore_import_description(&self) -> &'static str;

    /// Policy type the produced keystore is meant for.
    fn keystore_policy_type(&self) -> PolicyType;

    /// Whether the file at `path` needs a password to read.
    fn is_encrypted(&self, path: &Path) -> bool;

    /// Import a keystore for `script_type` from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the export cannot be read, is malformed, or has
    /// no keystore for `script_type`.
    fn get_keystore(
        &self,
        script_type: ScriptType,
        reader: &mut dyn Read,
        password: Option<&str>,
    ) -> Result<Keystore>;
}

/// Importer that builds a complete single-signature wallet.
pub trait SinglesigWalletImport: Import {
    /// Instructions for producing the export on the device.
    fn wallet_import_description(&self) -> &'static str;

    /// Import a wallet for `script_type` from `reader`.
    ///
    /// # Errors
    ///
    /// Returns an error if the script type is not supported, or the export
    /// cannot be read or is malformed.
    fn import_wallet(
        &self,
        script_type: ScriptType,
        reader: &mut dyn Read,
        password: Option<&str>,
    ) -> Result<Wallet>;
}
