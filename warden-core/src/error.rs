//! Error types for wallet model operations.

use std::fmt;

use crate::ScriptType;

/// Errors that can occur while parsing keys or building wallet data.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// Invalid Base58Check encoding or checksum.
    Base58(bitcoin::base58::Error),
    /// BIP32 decoding or derivation error.
    Bip32(bitcoin::bip32::Error),
    /// Decoded extended key has the wrong length.
    InvalidLength {
        /// Expected length in bytes.
        expected: usize,
        /// Actual length in bytes.
        actual: usize,
    },
    /// Extended key version bytes are not a known header.
    UnknownHeader([u8; 4]),
    /// No single-key address exists for this script type.
    UnsupportedAddress(ScriptType),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base58(e) => write!(f, "base58 error: {e}"),
            Self::Bip32(e) => write!(f, "BIP32 error: {e}"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid extended key length {actual}, expected {expected}")
            }
            Self::UnknownHeader(v) => {
                write!(f, "unknown extended key header {}", hex::encode(v))
            }
            Self::UnsupportedAddress(t) => {
                write!(f, "cannot derive a single-key address for script type {t}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Base58(e) => Some(e),
            Self::Bip32(e) => Some(e),
            Self::InvalidLength { .. } | Self::UnknownHeader(_) | Self::UnsupportedAddress(_) => {
                None
            }
        }
    }
}

impl From<bitcoin::base58::Error> for Error {
    fn from(err: bitcoin::base58::Error) -> Self {
        Self::Base58(err)
    }
}

impl From<bitcoin::bip32::Error> for Error {
    fn from(err: bitcoin::bip32::Error) -> Self {
        Self::Bip32(err)
    }
}
