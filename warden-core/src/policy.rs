//! Spending policies derived from a wallet's script type and keystores.

use core::fmt;

use crate::{Keystore, ScriptType};

/// Broad shape of a wallet's spending policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum PolicyType {
    /// One key, one signature.
    Single,
    /// Threshold of several keys.
    Multi,
}

impl PolicyType {
    /// Human readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Single => "Single Signature",
            Self::Multi => "Multi Signature",
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named spending policy expressed as a descriptor template.
///
/// Keys appear in the template by their keystore script names, so
/// `wpkh(keystore1)` is a native segwit single-signature policy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Policy {
    /// Display name.
    pub name: String,
    /// Policy shape.
    pub policy_type: PolicyType,
    /// Required number of signatures.
    pub threshold: usize,
    /// Descriptor template.
    pub miniscript: String,
}

impl Policy {
    /// Build the default policy for a set of keystores.
    ///
    /// A single-signature policy uses the first keystore, or no key at all
    /// when `keystores` is empty.
    #[must_use]
    pub fn default_policy(
        policy_type: PolicyType,
        script_type: ScriptType,
        keystores: &[Keystore],
        threshold: usize,
    ) -> Self {
        let inner = match policy_type {
            PolicyType::Single => keystores
                .first()
                .map(Keystore::script_name)
                .unwrap_or_default(),
            PolicyType::Multi => {
                let mut args = vec![threshold.to_string()];
                args.extend(keystores.iter().map(Keystore::script_name));
                format!("sortedmulti({})", args.join(","))
            }
        };

        Self {
            name: policy_type.name().to_string(),
            policy_type,
            threshold,
            miniscript: format!(
                "{}{inner}{}",
                script_type.descriptor_open(),
                script_type.descriptor_close()
            ),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.miniscript)
    }
}
