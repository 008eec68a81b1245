//! Coldcard "Dump Summary" single-signature import.
//!
//! The export is a plaintext file written by *Advanced > Dump Summary* on
//! the device. Besides prose and comments it holds the master key on a line
//! of its own and `path => value` entries for keys and addresses:
//!
//! ```text
//! ## Top-level, 'master' extended public key ('m/'):
//!
//! xpub661MyMwAqRbc...
//!
//! m => xpub661MyMwAqRbc...
//! m/84'/0'/0' => zpub6rFR7y4Q2Aij...
//! m/84'/0'/0'/0/0 => bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu
//! ```
//!
//! The first entry whose path is a prefix of the script type's default
//! derivation path becomes the wallet's only keystore.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::{debug, info, trace, warn};
use warden_core::{
    ExtendedPublicKey, KeyDerivation, Keystore, KeystoreSource, Network, Policy, PolicyType,
    ScriptType, Wallet, WalletModel,
};

use crate::{Error, Import, KeystoreFileImport, Result, SinglesigWalletImport};

/// Line prefix of the master extended public key.
const MASTER_KEY_PREFIX: &str = "xpub";

/// Separator between a derivation path and its value.
const ENTRY_SEPARATOR: &str = "=>";

/// Path of the master key itself, which is never a keystore.
const MASTER_PATH: &str = "m";

const IMPORT_DESCRIPTION: &str =
    "Import file created by using the Advanced > Dump Summary feature on your Coldcard";

/// Importer for Coldcard dump summary files.
///
/// The network selects the coin type of the default derivation paths an
/// entry is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColdcardSinglesig {
    network: Network,
}

impl ColdcardSinglesig {
    /// Script types a dump summary can be imported as.
    pub const ALLOWED_SCRIPT_TYPES: [ScriptType; 3] =
        [ScriptType::P2pkh, ScriptType::P2shP2wpkh, ScriptType::P2wpkh];

    /// Create an importer for `network`.
    #[must_use]
    pub const fn new(network: Network) -> Self {
        Self { network }
    }

    /// Network the importer matches derivation paths for.
    #[must_use]
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Import a wallet from a buffered dump summary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedScriptType`] before reading anything if
    /// `script_type` is not in [`Self::ALLOWED_SCRIPT_TYPES`], and
    /// [`Error::Io`] or [`Error::ExtendedKey`] if the export is unreadable
    /// or holds a bad key.
    pub fn import<R: BufRead>(&self, script_type: ScriptType, mut reader: R) -> Result<Wallet> {
        if !Self::ALLOWED_SCRIPT_TYPES.contains(&script_type) {
            return Err(Error::UnsupportedScriptType(script_type));
        }

        let default_path = script_type.default_derivation_path(self.network);
        let mut wallet = Wallet::new(PolicyType::Single, script_type, self.network);
        let mut master_fingerprint: Option<String> = None;
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            // Bytes that are not UTF-8 become U+FFFD instead of failing the import.
            let raw = String::from_utf8_lossy(&buf);
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with(MASTER_KEY_PREFIX) {
                let master = parse_key(line, line_no)?;
                let fingerprint = master.fingerprint();
                if let Some(previous) = master_fingerprint.as_deref() {
                    debug!(line = line_no, previous, %fingerprint, "replacing master fingerprint");
                } else {
                    debug!(line = line_no, %fingerprint, "found master extended public key");
                }
                wallet.name = Some(format!("{} {fingerprint}", self.name()));
                master_fingerprint = Some(fingerprint);
                continue;
            }

            let Some((path, value)) = split_entry(line) else {
                trace!(line = line_no, "skipping line without a single entry");
                continue;
            };

            if path == MASTER_PATH {
                trace!(line = line_no, "skipping master key entry");
                continue;
            }

            if !default_path.starts_with(path) {
                trace!(line = line_no, path, %default_path, "skipping entry outside default path");
                continue;
            }

            let extended_public_key = parse_key(value, line_no)?;
            info!(line = line_no, path, %script_type, "found keystore");
            wallet.keystores.push(Keystore::new(
                KeystoreSource::HwAirgapped,
                self.wallet_model(),
                KeyDerivation::new(master_fingerprint.clone(), path),
                extended_public_key,
            ));
            break;
        }

        if wallet.keystores.is_empty() {
            warn!(%script_type, %default_path, "no entry matched the default derivation path");
        }

        wallet.default_policy = Some(Policy::default_policy(
            PolicyType::Single,
            script_type,
            &wallet.keystores,
            1,
        ));

        Ok(wallet)
    }
}

/// Split `path => value`, or `None` unless the line has exactly two fields.
///
/// Trailing empty fields are discarded first, so `path =>` is not an entry.
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let mut fields: Vec<&str> = line.split(ENTRY_SEPARATOR).collect();
    while fields.last().is_some_and(|f| f.is_empty()) {
        fields.pop();
    }
    match fields.as_slice() {
        [path, value] => Some((path.trim(), value.trim())),
        _ => None,
    }
}

fn parse_key(descriptor: &str, line: usize) -> Result<ExtendedPublicKey> {
    ExtendedPublicKey::from_descriptor(descriptor)
        .map_err(|source| Error::ExtendedKey { line, source })
}

impl Import for ColdcardSinglesig {
    fn name(&self) -> &'static str {
        "Coldcard"
    }

    fn wallet_model(&self) -> WalletModel {
        WalletModel::Coldcard
    }
}

impl KeystoreFileImport for ColdcardSinglesig {
    fn keystore_import_description(&self) -> &'static str {
        IMPORT_DESCRIPTION
    }

    fn keystore_policy_type(&self) -> PolicyType {
        PolicyType::Single
    }

    fn is_encrypted(&self, _path: &Path) -> bool {
        false
    }

    fn get_keystore(
        &self,
        script_type: ScriptType,
        reader: &mut dyn Read,
        password: Option<&str>,
    ) -> Result<Keystore> {
        self.import_wallet(script_type, reader, password)?
            .keystores
            .into_iter()
            .next()
            .ok_or(Error::NoKeystore(script_type))
    }
}

impl SinglesigWalletImport for ColdcardSinglesig {
    fn wallet_import_description(&self) -> &'static str {
        IMPORT_DESCRIPTION
    }

    fn import_wallet(
        &self,
        script_type: ScriptType,
        reader: &mut dyn Read,
        _password: Option<&str>,
    ) -> Result<Wallet> {
        self.import(script_type, BufReader::new(reader))
    }
}
