//! Networks an imported key can belong to.
//!
//! The network decides the BIP-44 coin type used in derivation paths and
//! the family of SLIP-132 headers a hardware wallet exports keys with.

use core::fmt;

use bitcoin::NetworkKind;

use crate::{KeyHeader, ScriptType};

/// Bitcoin network of a wallet or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Network {
    /// Bitcoin mainnet.
    #[default]
    Mainnet,
    /// Testnet, signet and regtest; they share key headers and coin type.
    Testnet,
}

impl Network {
    /// Network used when building addresses.
    #[inline]
    #[must_use]
    pub const fn to_bitcoin_network(self) -> bitcoin::Network {
        match self {
            Self::Mainnet => bitcoin::Network::Bitcoin,
            Self::Testnet => bitcoin::Network::Testnet,
        }
    }

    /// Coin type in the second level of a BIP-44 style path.
    #[inline]
    #[must_use]
    pub const fn coin_type(self) -> u32 {
        match self {
            Self::Mainnet => 0,
            Self::Testnet => 1,
        }
    }

    /// Lower-case name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }

    /// Plain BIP-32 header (`xpub` or `tpub`).
    #[must_use]
    pub const fn standard_header(self) -> KeyHeader {
        match self {
            Self::Mainnet => KeyHeader::Xpub,
            Self::Testnet => KeyHeader::Tpub,
        }
    }

    /// SLIP-132 header conventionally used for `script_type`.
    ///
    /// Script types without a registered header fall back to
    /// [`standard_header`](Self::standard_header).
    #[must_use]
    pub const fn slip132_header(self, script_type: ScriptType) -> KeyHeader {
        match (self, script_type) {
            (Self::Mainnet, ScriptType::P2shP2wpkh) => KeyHeader::Ypub,
            (Self::Mainnet, ScriptType::P2shP2wsh) => KeyHeader::YpubMulti,
            (Self::Mainnet, ScriptType::P2wpkh) => KeyHeader::Zpub,
            (Self::Mainnet, ScriptType::P2wsh) => KeyHeader::ZpubMulti,
            (Self::Testnet, ScriptType::P2shP2wpkh) => KeyHeader::Upub,
            (Self::Testnet, ScriptType::P2shP2wsh) => KeyHeader::UpubMulti,
            (Self::Testnet, ScriptType::P2wpkh) => KeyHeader::Vpub,
            (Self::Testnet, ScriptType::P2wsh) => KeyHeader::VpubMulti,
            _ => self.standard_header(),
        }
    }
}

impl From<NetworkKind> for Network {
    fn from(kind: NetworkKind) -> Self {
        match kind {
            NetworkKind::Main => Self::Mainnet,
            NetworkKind::Test => Self::Testnet,
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
