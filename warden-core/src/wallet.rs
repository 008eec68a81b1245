//! Wallets: a script type, a policy and the keystores that satisfy it.

use crate::{Keystore, Network, Policy, PolicyType, ScriptType};

/// An imported wallet description.
///
/// Created fresh by an importer and handed to the caller; nothing here
/// reaches back into the source it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Wallet {
    /// Display name, if the source provided enough to build one.
    pub name: Option<String>,
    /// Policy shape.
    pub policy_type: PolicyType,
    /// Output script type.
    pub script_type: ScriptType,
    /// Network the derivation paths refer to.
    pub network: Network,
    /// Keystores in policy order.
    pub keystores: Vec<Keystore>,
    /// Default spending policy, built once the keystores are known.
    pub default_policy: Option<Policy>,
}

impl Wallet {
    /// Create an empty wallet with no keystores and no policy.
    #[must_use]
    pub const fn new(policy_type: PolicyType, script_type: ScriptType, network: Network) -> Self {
        Self {
            name: None,
            policy_type,
            script_type,
            network,
            keystores: Vec::new(),
            default_policy: None,
        }
    }

    /// Default derivation path for this wallet's script type and network.
    #[must_use]
    pub fn default_derivation_path(&self) -> String {
        self.script_type.default_derivation_path(self.network)
    }

    /// Whether the wallet has exactly the keystores its policy needs.
    ///
    /// Single-signature wallets need exactly one keystore; multisig wallets
    /// need at least as many keystores as the policy threshold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        let Some(policy) = &self.default_policy else {
            return false;
        };
        match self.policy_type {
            PolicyType::Single => self.keystores.len() == 1,
            PolicyType::Multi => {
                policy.threshold > 0 && self.keystores.len() >= policy.threshold
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ExtendedPublicKey, KeyDerivation, KeystoreSource, WalletModel};

    const XPUB: &str = "xpub6CatWdiZiodmUeTDp8LT5or8nmbKNcuyvz7WyksVFkKB4RHwCD3XyuvPEbvqAQY3rAPshWcMLoP2fMFMKHPJ4ZeZXYVUhLv1VMrjPC7PW6V";

    #[test]
    fn test_new_wallet_is_empty() {
        let wallet = Wallet::new(PolicyType::Single, ScriptType::P2wpkh, Network::Mainnet);
        assert!(wallet.name.is_none());
        assert!(wallet.keystores.is_empty());
        assert!(wallet.default_policy.is_none());
        assert!(!wallet.is_valid());
        assert_eq!(wallet.default_derivation_path(), "m/84'/0'/0'");
    }

    #[test]
    fn test_single_wallet_validity() {
        let mut wallet = Wallet::new(PolicyType::Single, ScriptType::P2wpkh, Network::Mainnet);
        wallet.default_policy = Some(Policy::default_policy(
            PolicyType::Single,
            ScriptType::P2wpkh,
            &wallet.keystores,
            1,
        ));
        assert!(!wallet.is_valid());

        wallet.keystores.push(Keystore::new(
            KeystoreSource::HwAirgapped,
            WalletModel::Coldcard,
            KeyDerivation::new(None, "m/84'/0'/0'"),
            ExtendedPublicKey::from_descriptor(XPUB).unwrap(),
        ));
        assert!(wallet.is_valid());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_imported_wallet() {
        const ZPUB: &str = "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs";

        let mut wallet = Wallet::new(PolicyType::Single, ScriptType::P2wpkh, Network::Mainnet);
        wallet.keystores.push(Keystore::new(
            KeystoreSource::HwAirgapped,
            WalletModel::Coldcard,
            KeyDerivation::new(None, "m/84'/0'/0'"),
            ExtendedPublicKey::from_descriptor(ZPUB).unwrap(),
        ));
        wallet.default_policy = Some(Policy::default_policy(
            PolicyType::Single,
            ScriptType::P2wpkh,
            &wallet.keystores,
            1,
        ));

        let json = serde_json::to_value(&wallet).unwrap();
        assert_eq!(json["name"], serde_json::Value::Null);
        assert_eq!(json["script_type"], "P2WPKH");
        assert_eq!(json["policy_type"], "SINGLE");
        assert_eq!(json["network"], "mainnet");
        assert_eq!(json["default_policy"]["miniscript"], "wpkh(keystore1)");
        assert_eq!(json["default_policy"]["threshold"], 1);

        let keystore = &json["keystores"][0];
        assert_eq!(keystore["extended_public_key"], ZPUB);
        assert_eq!(keystore["source"], "HW_AIRGAPPED");
        assert_eq!(keystore["wallet_model"], "COLDCARD");
        assert_eq!(keystore["label"], "Keystore 1");
        assert_eq!(keystore["key_derivation"]["master_fingerprint"], serde_json::Value::Null);
        assert_eq!(keystore["key_derivation"]["derivation_path"], "m/84'/0'/0'");

        let nested = serde_json::to_value(ScriptType::P2shP2wpkh).unwrap();
        assert_eq!(nested, "P2SH-P2WPKH");

        wallet.keystores[0].key_derivation.master_fingerprint = Some("73C5DA0A".to_string());
        let json = serde_json::to_value(&wallet.keystores[0]).unwrap();
        assert_eq!(json["key_derivation"]["master_fingerprint"], "73C5DA0A");
    }
}
