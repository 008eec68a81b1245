//! Keystores: one extended public key and where it came from.

use core::fmt;

use crate::ExtendedPublicKey;

/// Label given to keystores that have not been named.
pub const DEFAULT_LABEL: &str = "Keystore 1";

/// How the key material reached the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum KeystoreSource {
    /// Hardware wallet connected over USB.
    HwUsb,
    /// Hardware wallet exchanging files or QR codes.
    HwAirgapped,
    /// Software wallet holding a seed.
    SwSeed,
    /// Watch-only software wallet.
    SwWatch,
}

impl KeystoreSource {
    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::HwUsb => "Connected Hardware Wallet",
            Self::HwAirgapped => "Airgapped Hardware Wallet",
            Self::SwSeed => "Software Wallet",
            Self::SwWatch => "Watch Only Wallet",
        }
    }
}

impl fmt::Display for KeystoreSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Device or application that produced a keystore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[non_exhaustive]
pub enum WalletModel {
    /// Coinkite Coldcard.
    Coldcard,
}

impl WalletModel {
    /// Vendor name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Coldcard => "Coldcard",
        }
    }
}

impl fmt::Display for WalletModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Origin of a derived key: the master it descends from and the path taken.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct KeyDerivation {
    /// Upper-case hex fingerprint of the master key, if known.
    pub master_fingerprint: Option<String>,
    /// Derivation path as written by the exporting device.
    pub derivation_path: String,
}

impl KeyDerivation {
    /// Create a key derivation.
    #[must_use]
    pub fn new(master_fingerprint: Option<String>, derivation_path: impl Into<String>) -> Self {
        Self {
            master_fingerprint,
            derivation_path: derivation_path.into(),
        }
    }
}

impl fmt::Display for KeyDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(fingerprint) = &self.master_fingerprint else {
            return f.write_str(&self.derivation_path);
        };
        let path = self
            .derivation_path
            .strip_prefix('m')
            .unwrap_or(&self.derivation_path);
        write!(f, "[{}{path}]", fingerprint.to_lowercase())
    }
}

/// A single signing key known to a wallet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Keystore {
    /// Display label.
    pub label: String,
    /// Where the key came from.
    pub source: KeystoreSource,
    /// Device model.
    pub wallet_model: WalletModel,
    /// Master fingerprint and derivation path.
    pub key_derivation: KeyDerivation,
    /// Account-level extended public key.
    pub extended_public_key: ExtendedPublicKey,
}

impl Keystore {
    /// Create a keystore with the default label.
    #[must_use]
    pub fn new(
        source: KeystoreSource,
        wallet_model: WalletModel,
        key_derivation: KeyDerivation,
        extended_public_key: ExtendedPublicKey,
    ) -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            source,
            wallet_model,
            key_derivation,
            extended_public_key,
        }
    }

    /// Label reduced to lower-case ASCII alphanumerics, for use in descriptors.
    #[must_use]
    pub fn script_name(&self) -> String {
        self.label
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
