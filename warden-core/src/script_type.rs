//! Output script types and their default derivation paths.

use core::fmt;
use core::str::FromStr;

use crate::Network;

/// Bitcoin output script types a wallet can be built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ScriptType {
    /// Pay to Public Key.
    #[cfg_attr(feature = "serde", serde(rename = "P2PK"))]
    P2pk,
    /// Pay to Public Key Hash (Legacy).
    #[cfg_attr(feature = "serde", serde(rename = "P2PKH"))]
    P2pkh,
    /// Pay to Script Hash (legacy multisig).
    #[cfg_attr(feature = "serde", serde(rename = "P2SH"))]
    P2sh,
    /// P2WPKH wrapped in P2SH (nested `SegWit`).
    #[cfg_attr(feature = "serde", serde(rename = "P2SH-P2WPKH"))]
    P2shP2wpkh,
    /// P2WSH wrapped in P2SH (nested `SegWit` multisig).
    #[cfg_attr(feature = "serde", serde(rename = "P2SH-P2WSH"))]
    P2shP2wsh,
    /// Pay to Witness Public Key Hash (Native `SegWit`).
    #[cfg_attr(feature = "serde", serde(rename = "P2WPKH"))]
    P2wpkh,
    /// Pay to Witness Script Hash (Native `SegWit` multisig).
    #[cfg_attr(feature = "serde", serde(rename = "P2WSH"))]
    P2wsh,
    /// Pay to Taproot.
    #[cfg_attr(feature = "serde", serde(rename = "P2TR"))]
    P2tr,
}

impl ScriptType {
    /// All script types, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::P2pk,
        Self::P2pkh,
        Self::P2sh,
        Self::P2shP2wpkh,
        Self::P2shP2wsh,
        Self::P2wpkh,
        Self::P2wsh,
        Self::P2tr,
    ];

    /// Canonical upper-case name, e.g. `P2SH-P2WPKH`.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::P2pk => "P2PK",
            Self::P2pkh => "P2PKH",
            Self::P2sh => "P2SH",
            Self::P2shP2wpkh => "P2SH-P2WPKH",
            Self::P2shP2wsh => "P2SH-P2WSH",
            Self::P2wpkh => "P2WPKH",
            Self::P2wsh => "P2WSH",
            Self::P2tr => "P2TR",
        }
    }

    /// Human readable description.
    #[inline]
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::P2pk => "Pay to Public Key",
            Self::P2pkh => "Legacy (single sig)",
            Self::P2sh => "Legacy (multisig)",
            Self::P2shP2wpkh => "Nested Segwit (single sig)",
            Self::P2shP2wsh => "Nested Segwit (multisig)",
            Self::P2wpkh => "Native Segwit (single sig)",
            Self::P2wsh => "Native Segwit (multisig)",
            Self::P2tr => "Taproot (single or multisig)",
        }
    }

    /// Default account-level derivation path for this script type.
    ///
    /// The coin type component follows `network`. P2SH multisig uses the
    /// BIP45 purpose and has no coin type or account level.
    #[must_use]
    pub fn default_derivation_path(self, network: Network) -> String {
        let coin = network.coin_type();
        match self {
            Self::P2pk | Self::P2pkh => format!("m/44'/{coin}'/0'"),
            Self::P2sh => "m/45'".to_string(),
            Self::P2shP2wpkh => format!("m/49'/{coin}'/0'"),
            Self::P2shP2wsh => format!("m/48'/{coin}'/0'/1'"),
            Self::P2wpkh => format!("m/84'/{coin}'/0'"),
            Self::P2wsh => format!("m/48'/{coin}'/0'/2'"),
            Self::P2tr => format!("m/86'/{coin}'/0'"),
        }
    }

    /// Opening half of the output descriptor for this script type.
    #[inline]
    #[must_use]
    pub const fn descriptor_open(self) -> &'static str {
        match self {
            Self::P2pk => "pk(",
            Self::P2pkh => "pkh(",
            Self::P2sh => "sh(",
            Self::P2shP2wpkh => "sh(wpkh(",
            Self::P2shP2wsh => "sh(wsh(",
            Self::P2wpkh => "wpkh(",
            Self::P2wsh => "wsh(",
            Self::P2tr => "tr(",
        }
    }

    /// Closing half of the output descriptor for this script type.
    #[inline]
    #[must_use]
    pub const fn descriptor_close(self) -> &'static str {
        match self {
            Self::P2shP2wpkh | Self::P2shP2wsh => "))",
            _ => ")",
        }
    }
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid script type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseScriptTypeError;

impl fmt::Display for ParseScriptTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid script type, expected: p2pk, p2pkh, p2sh, p2sh-p2wpkh, p2sh-p2wsh, p2wpkh, p2wsh, or p2tr"
        )
    }
}

impl std::error::Error for ParseScriptTypeError {}

impl FromStr for ScriptType {
    type Err = ParseScriptTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "p2pk" => Ok(Self::P2pk),
            "p2pkh" | "legacy" => Ok(Self::P2pkh),
            "p2sh" => Ok(Self::P2sh),
            "p2sh-p2wpkh" | "p2sh_p2wpkh" | "nested-segwit" => Ok(Self::P2shP2wpkh),
            "p2sh-p2wsh" | "p2sh_p2wsh" => Ok(Self::P2shP2wsh),
            "p2wpkh" | "native-segwit" => Ok(Self::P2wpkh),
            "p2wsh" => Ok(Self::P2wsh),
            "p2tr" | "taproot" => Ok(Self::P2tr),
            _ => Err(ParseScriptTypeError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_type_from_str() {
        assert_eq!("p2pkh".parse::<ScriptType>().unwrap(), ScriptType::P2pkh);
        assert_eq!("legacy".parse::<ScriptType>().unwrap(), ScriptType::P2pkh);
        assert_eq!(
            "P2SH-P2WPKH".parse::<ScriptType>().unwrap(),
            ScriptType::P2shP2wpkh
        );
        assert_eq!(
            "nested-segwit".parse::<ScriptType>().unwrap(),
            ScriptType::P2shP2wpkh
        );
        assert_eq!(
            "native-segwit".parse::<ScriptType>().unwrap(),
            ScriptType::P2wpkh
        );
        assert_eq!("TAPROOT".parse::<ScriptType>().unwrap(), ScriptType::P2tr);
    }

    #[test]
    fn test_script_type_from_str_invalid() {
        assert!("p2wpkhh".parse::<ScriptType>().is_err());
        assert!("".parse::<ScriptType>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_from_str() {
        for script_type in ScriptType::ALL {
            assert_eq!(
                script_type.to_string().parse::<ScriptType>().unwrap(),
                script_type
            );
        }
    }

    #[test]
    fn test_default_derivation_path_mainnet() {
        let mainnet = Network::Mainnet;
        assert_eq!(ScriptType::P2pkh.default_derivation_path(mainnet), "m/44'/0'/0'");
        assert_eq!(
            ScriptType::P2shP2wpkh.default_derivation_path(mainnet),
            "m/49'/0'/0'"
        );
        assert_eq!(ScriptType::P2wpkh.default_derivation_path(mainnet), "m/84'/0'/0'");
        assert_eq!(ScriptType::P2tr.default_derivation_path(mainnet), "m/86'/0'/0'");
        assert_eq!(ScriptType::P2sh.default_derivation_path(mainnet), "m/45'");
        assert_eq!(
            ScriptType::P2wsh.default_derivation_path(mainnet),
            "m/48'/0'/0'/2'"
        );
    }

    #[test]
    fn test_default_derivation_path_testnet() {
        assert_eq!(
            ScriptType::P2wpkh.default_derivation_path(Network::Testnet),
            "m/84'/1'/0'"
        );
        assert_eq!(
            ScriptType::P2shP2wsh.default_derivation_path(Network::Testnet),
            "m/48'/1'/0'/1'"
        );
    }

    #[test]
    fn test_descriptor_wrapping() {
        let wrap = |t: ScriptType| format!("{}k{}", t.descriptor_open(), t.descriptor_close());
        assert_eq!(wrap(ScriptType::P2pkh), "pkh(k)");
        assert_eq!(wrap(ScriptType::P2shP2wpkh), "sh(wpkh(k))");
        assert_eq!(wrap(ScriptType::P2wpkh), "wpkh(k)");
        assert_eq!(wrap(ScriptType::P2shP2wsh), "sh(wsh(k))");
    }
}
