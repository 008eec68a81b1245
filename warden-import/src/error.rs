//! Error types for wallet file imports.

use core::fmt;
use std::io;

use warden_core::ScriptType;

/// Errors that can occur while importing a wallet export file.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The importer cannot produce wallets of this script type.
    UnsupportedScriptType(ScriptType),
    /// Reading the export failed.
    Io(io::Error),
    /// An extended public key in the export could not be parsed.
    ExtendedKey {
        /// 1-based line number of the offending key.
        line: usize,
        /// Underlying parse error.
        source: warden_core::Error,
    },
    /// The export held no keystore for this script type.
    NoKeystore(ScriptType),
}

impl Error {
    /// Whether the export itself was unreadable or contained a bad key.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self, Self::Io(_) | Self::ExtendedKey { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedScriptType(t) => write!(f, "Script type of {t} is not allowed"),
            Self::Io(e) => write!(f, "error reading import file: {e}"),
            Self::ExtendedKey { line, source } => {
                write!(f, "invalid extended public key on line {line}: {source}")
            }
            Self::NoKeystore(t) => {
                write!(f, "import file has no keystore for script type {t}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ExtendedKey { source, .. } => Some(source),
            Self::UnsupportedScriptType(_) | Self::NoKeystore(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}
