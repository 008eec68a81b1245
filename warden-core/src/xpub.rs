//! BIP-32 extended public keys with SLIP-132 header support.
//!
//! Hardware wallets commonly export account keys with alternative version
//! bytes (`ypub`, `zpub`, ...) that hint at the script type. The key
//! material is identical to a standard `xpub`/`tpub`, so parsing swaps the
//! header for the standard one and hands the bytes to [`Xpub::decode`].

use core::fmt;
use core::str::FromStr;

use bitcoin::bip32::{ChildNumber, Xpub};
use bitcoin::secp256k1::Secp256k1;
use bitcoin::{Address, PublicKey, base58};

use crate::{Error, Network, Result, ScriptType};

/// Length of a serialized extended key without checksum.
const EXTENDED_KEY_LEN: usize = 78;

/// SLIP-132 extended public key headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyHeader {
    /// `xpub`: mainnet, P2PKH or P2SH.
    Xpub,
    /// `ypub`: mainnet, P2SH-P2WPKH.
    Ypub,
    /// `Ypub`: mainnet, P2SH-P2WSH.
    YpubMulti,
    /// `zpub`: mainnet, P2WPKH.
    Zpub,
    /// `Zpub`: mainnet, P2WSH.
    ZpubMulti,
    /// `tpub`: testnet, P2PKH or P2SH.
    Tpub,
    /// `upub`: testnet, P2SH-P2WPKH.
    Upub,
    /// `Upub`: testnet, P2SH-P2WSH.
    UpubMulti,
    /// `vpub`: testnet, P2WPKH.
    Vpub,
    /// `Vpub`: testnet, P2WSH.
    VpubMulti,
}

impl KeyHeader {
    /// All known headers.
    pub const ALL: [Self; 10] = [
        Self::Xpub,
        Self::Ypub,
        Self::YpubMulti,
        Self::Zpub,
        Self::ZpubMulti,
        Self::Tpub,
        Self::Upub,
        Self::UpubMulti,
        Self::Vpub,
        Self::VpubMulti,
    ];

    /// Version bytes of this header.
    #[must_use]
    pub const fn version(self) -> [u8; 4] {
        match self {
            Self::Xpub => [0x04, 0x88, 0xB2, 0x1E],
            Self::Ypub => [0x04, 0x9D, 0x7C, 0xB2],
            Self::YpubMulti => [0x02, 0x95, 0xB4, 0x3F],
            Self::Zpub => [0x04, 0xB2, 0x47, 0x46],
            Self::ZpubMulti => [0x02, 0xAA, 0x7E, 0xD3],
            Self::Tpub => [0x04, 0x35, 0x87, 0xCF],
            Self::Upub => [0x04, 0x4A, 0x52, 0x62],
            Self::UpubMulti => [0x02, 0x42, 0x89, 0xEF],
            Self::Vpub => [0x04, 0x5F, 0x1C, 0xF6],
            Self::VpubMulti => [0x02, 0x57, 0x54, 0x83],
        }
    }

    /// Four character Base58 prefix produced by this header.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Xpub => "xpub",
            Self::Ypub => "ypub",
            Self::YpubMulti => "Ypub",
            Self::Zpub => "zpub",
            Self::ZpubMulti => "Zpub",
            Self::Tpub => "tpub",
            Self::Upub => "upub",
            Self::UpubMulti => "Upub",
            Self::Vpub => "vpub",
            Self::VpubMulti => "Vpub",
        }
    }

    /// Network the header belongs to.
    #[must_use]
    pub const fn network(self) -> Network {
        match self {
            Self::Xpub | Self::Ypub | Self::YpubMulti | Self::Zpub | Self::ZpubMulti => {
                Network::Mainnet
            }
            Self::Tpub | Self::Upub | Self::UpubMulti | Self::Vpub | Self::VpubMulti => {
                Network::Testnet
            }
        }
    }

    /// Standard BIP-32 header for the same network.
    #[must_use]
    pub const fn standard(self) -> Self {
        self.network().standard_header()
    }

    /// Look up a header by its version bytes.
    #[must_use]
    pub fn from_version(version: [u8; 4]) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.version() == version)
    }
}

impl fmt::Display for KeyHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A BIP-32 extended public key together with the header it was read with.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedPublicKey {
    inner: Xpub,
    header: KeyHeader,
}

impl ExtendedPublicKey {
    /// Parse an extended public key in any supported header.
    ///
    /// # Errors
    ///
    /// Returns an error if the Base58Check encoding, the length, the header
    /// or the key material is invalid.
    pub fn from_descriptor(descriptor: &str) -> Result<Self> {
        let mut data = base58::decode_check(descriptor.trim())?;
        if data.len() != EXTENDED_KEY_LEN {
            return Err(Error::InvalidLength {
                expected: EXTENDED_KEY_LEN,
                actual: data.len(),
            });
        }

        let mut version = [0u8; 4];
        version.copy_from_slice(&data[..4]);
        let header = KeyHeader::from_version(version).ok_or(Error::UnknownHeader(version))?;

        data[..4].copy_from_slice(&header.standard().version());
        let inner = Xpub::decode(&data)?;

        Ok(Self { inner, header })
    }

    /// Master fingerprint of this key as upper-case hex.
    ///
    /// This is the first four bytes of HASH160 of the public key, the value
    /// a child key records as its parent fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        self.inner.fingerprint().to_string().to_uppercase()
    }

    /// Header the key was parsed with.
    #[inline]
    #[must_use]
    pub const fn header(&self) -> KeyHeader {
        self.header
    }

    /// Network encoded in the key.
    #[inline]
    #[must_use]
    pub fn network(&self) -> Network {
        Network::from(self.inner.network)
    }

    /// Depth of the key in the derivation tree.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.inner.depth
    }

    /// Get the inner bitcoin extended public key.
    #[inline]
    #[must_use]
    pub const fn inner(&self) -> &Xpub {
        &self.inner
    }

    /// Serialize using `header` in place of the standard version bytes.
    #[must_use]
    pub fn to_string_with_header(&self, header: KeyHeader) -> String {
        let mut data = self.inner.encode();
        data[..4].copy_from_slice(&header.version());
        base58::encode_check(&data)
    }

    /// Serialize with the header the key was originally parsed with.
    #[must_use]
    pub fn to_original_string(&self) -> String {
        self.to_string_with_header(self.header)
    }

    /// Derive the receive address at `m/.../0/index` below this key.
    ///
    /// # Errors
    ///
    /// Returns an error for script types without a single-key address, or
    /// if the index is hardened.
    pub fn derive_receive_address(&self, script_type: ScriptType, index: u32) -> Result<Address> {
        let secp = Secp256k1::verification_only();
        let path = [
            ChildNumber::from_normal_idx(0)?,
            ChildNumber::from_normal_idx(index)?,
        ];
        let child = self.inner.derive_pub(&secp, &path)?;
        let public_key = child.to_pub();
        let network = self.network().to_bitcoin_network();

        match script_type {
            ScriptType::P2pkh => Ok(Address::p2pkh(PublicKey::from(public_key), network)),
            ScriptType::P2shP2wpkh => Ok(Address::p2shwpkh(&public_key, network)),
            ScriptType::P2wpkh => Ok(Address::p2wpkh(&public_key, network)),
            ScriptType::P2tr => {
                let internal_key = public_key.0.x_only_public_key().0;
                Ok(Address::p2tr(&secp, internal_key, None, network))
            }
            other => Err(Error::UnsupportedAddress(other)),
        }
    }
}

impl FromStr for ExtendedPublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_descriptor(s)
    }
}

impl fmt::Display for ExtendedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl fmt::Debug for ExtendedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtendedPublicKey")
            .field("header", &self.header)
            .field("depth", &self.inner.depth)
            .field("child_number", &self.inner.child_number)
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ExtendedPublicKey {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_original_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Keys derived from "abandon abandon ... about" with no passphrase.
    const MASTER_XPUB: &str = "xpub661MyMwAqRbcFkPHucMnrGNzDwb6teAX1RbKQmqtEF8kK3Z7LZ59qafCjB9eCRLiTVG3uxBxgKvRgbubRhqSKXnGGb1aoaqLrpMBDrVxga8";
    const BIP44_XPUB: &str = "xpub6BosfCnifzxcFwrSzQiqu2DBVTshkCXacvNsWGYJVVhhawA7d4R5WSWGFNbi8Aw6ZRc1brxMyWMzG3DSSSSoekkudhUd9yLb6qx39T9nMdj";
    const BIP49_YPUB: &str = "ypub6Ww3ibxVfGzLrAH1PNcjyAWenMTbbAosGNB6VvmSEgytSER9azLDWCxoJwW7Ke7icmizBMXrzBx9979FfaHxHcrArf3zbeJJJUZPf663zsP";
    const BIP49_XPUB: &str = "xpub6C6nQwHaWbSrzs5tZ1q7m5R9cPK9eYpNMFesiXsYrgc1P8bvLLAet9JfHjYXKjToD8cBRswJXXbbFpXgwsswVPAZzKMa1jUp2kVkGVUaJa7";
    const BIP84_ZPUB: &str = "zpub6rFR7y4Q2AijBEqTUquhVz398htDFrtymD9xYYfG1m4wAcvPhXNfE3EfH1r1ADqtfSdVCToUG868RvUUkgDKf31mGDtKsAYz2oz2AGutZYs";
    const BIP84_XPUB: &str = "xpub6CatWdiZiodmUeTDp8LT5or8nmbKNcuyvz7WyksVFkKB4RHwCD3XyuvPEbvqAQY3rAPshWcMLoP2fMFMKHPJ4ZeZXYVUhLv1VMrjPC7PW6V";
    const BIP84_VPUB: &str = "vpub5Y6cjg78GGuNLsaPhmYsiw4gYX3HoQiRBiSwDaBXKUafCt9bNwWQiitDk5VZ5BVxYnQdwoTyXSs2JHRPAgjAvtbBrf8ZhDYe2jWAqvZVnsc";
    const BIP84_TPUB: &str = "tpubDC8msFGeGuwnKG9Upg7DM2b4DaRqg3CUZa5g8v2SRQ6K4NSkxUgd7HsL2XVWbVm39yBA4LAxysQAm397zwQSQoQgewGiYZqrA9DsP4zbQ1M";

    #[test]
    fn test_master_fingerprint() {
        let xpub = ExtendedPublicKey::from_descriptor(MASTER_XPUB).unwrap();
        assert_eq!(xpub.fingerprint(), "73C5DA0A");
        assert_eq!(xpub.depth(), 0);
        assert_eq!(xpub.header(), KeyHeader::Xpub);
    }

    #[test]
    fn test_account_fingerprint() {
        let xpub = ExtendedPublicKey::from_descriptor(BIP84_XPUB).unwrap();
        assert_eq!(xpub.fingerprint(), "FD13AAC9");
        assert_eq!(xpub.depth(), 3);
    }

    #[test]
    fn test_zpub_converts_to_xpub() {
        let zpub = ExtendedPublicKey::from_descriptor(BIP84_ZPUB).unwrap();
        assert_eq!(zpub.header(), KeyHeader::Zpub);
        assert_eq!(zpub.network(), Network::Mainnet);
        assert_eq!(zpub.to_string(), BIP84_XPUB);
        assert_eq!(zpub.to_original_string(), BIP84_ZPUB);
        assert_eq!(
            zpub.inner(),
            ExtendedPublicKey::from_descriptor(BIP84_XPUB).unwrap().inner()
        );
    }

    #[test]
    fn test_ypub_converts_to_xpub() {
        let ypub = ExtendedPublicKey::from_descriptor(BIP49_YPUB).unwrap();
        assert_eq!(ypub.header(), KeyHeader::Ypub);
        assert_eq!(ypub.to_string(), BIP49_XPUB);
    }

    #[test]
    fn test_vpub_converts_to_tpub() {
        let vpub = ExtendedPublicKey::from_descriptor(BIP84_VPUB).unwrap();
        assert_eq!(vpub.header(), KeyHeader::Vpub);
        assert_eq!(vpub.network(), Network::Testnet);
        assert_eq!(vpub.to_string(), BIP84_TPUB);
    }

    #[test]
    fn test_to_string_with_header() {
        let xpub = ExtendedPublicKey::from_descriptor(BIP84_XPUB).unwrap();
        assert_eq!(xpub.to_string_with_header(KeyHeader::Zpub), BIP84_ZPUB);
    }

    #[test]
    fn test_invalid_checksum() {
        let mut corrupted = BIP84_XPUB.to_string();
        corrupted.pop();
        corrupted.push('W');
        let err = ExtendedPublicKey::from_descriptor(&corrupted).unwrap_err();
        assert!(matches!(err, Error::Base58(_)));
    }

    #[test]
    fn test_truncated_key() {
        let err = ExtendedPublicKey::from_descriptor(&BIP84_XPUB[..60]).unwrap_err();
        assert!(matches!(err, Error::Base58(_) | Error::InvalidLength { .. }));
    }

    #[test]
    fn test_unknown_header() {
        let mut data = base58::decode_check(BIP84_XPUB).unwrap();
        data[..4].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        let encoded = base58::encode_check(&data);
        let err = ExtendedPublicKey::from_descriptor(&encoded).unwrap_err();
        assert!(matches!(err, Error::UnknownHeader([0x01, 0x02, 0x03, 0x04])));
    }

    #[test]
    fn test_exported_header_follows_script_type() {
        let zpub = ExtendedPublicKey::from_descriptor(BIP84_ZPUB).unwrap();
        assert_eq!(zpub.header(), zpub.network().slip132_header(ScriptType::P2wpkh));
        let ypub = ExtendedPublicKey::from_descriptor(BIP49_YPUB).unwrap();
        assert_eq!(ypub.header(), ypub.network().slip132_header(ScriptType::P2shP2wpkh));
        let vpub = ExtendedPublicKey::from_descriptor(BIP84_VPUB).unwrap();
        assert_eq!(vpub.header(), Network::Testnet.slip132_header(ScriptType::P2wpkh));
        assert_eq!(vpub.header().standard(), KeyHeader::Tpub);
    }

    #[test]
    fn test_receive_address_p2pkh() {
        let xpub = ExtendedPublicKey::from_descriptor(BIP44_XPUB).unwrap();
        let addr = xpub.derive_receive_address(ScriptType::P2pkh, 0).unwrap();
        assert_eq!(addr.to_string(), "1LqBGSKuX5yYUonjxT5qGfpUsXKYYWeabA");
    }

    #[test]
    fn test_receive_address_p2sh_p2wpkh() {
        let ypub = ExtendedPublicKey::from_descriptor(BIP49_YPUB).unwrap();
        let addr = ypub.derive_receive_address(ScriptType::P2shP2wpkh, 1).unwrap();
        assert_eq!(addr.to_string(), "3LtMnn87fqUeHBUG414p9CWwnoV6E2pNKS");
    }

    #[test]
    fn test_receive_address_p2wpkh() {
        let zpub = ExtendedPublicKey::from_descriptor(BIP84_ZPUB).unwrap();
        let first = zpub.derive_receive_address(ScriptType::P2wpkh, 0).unwrap();
        let second = zpub.derive_receive_address(ScriptType::P2wpkh, 1).unwrap();
        assert_eq!(first.to_string(), "bc1qcr8te4kr609gcawutmrza0j4xv80jy8z306fyu");
        assert_eq!(second.to_string(), "bc1qnjg0jd8228aq7egyzacy8cys3knf9xvrerkf9g");
    }

    #[test]
    fn test_receive_address_testnet() {
        let vpub = ExtendedPublicKey::from_descriptor(BIP84_VPUB).unwrap();
        let addr = vpub.derive_receive_address(ScriptType::P2wpkh, 0).unwrap();
        assert_eq!(addr.to_string(), "tb1q6rz28mcfaxtmd6v789l9rrlrusdprr9pqcpvkl");
    }

    #[test]
    fn test_receive_address_unsupported() {
        let xpub = ExtendedPublicKey::from_descriptor(BIP84_XPUB).unwrap();
        let err = xpub.derive_receive_address(ScriptType::P2wsh, 0).unwrap_err();
        assert!(matches!(err, Error::UnsupportedAddress(ScriptType::P2wsh)));
    }

    #[test]
    fn test_receive_address_hardened_index() {
        let xpub = ExtendedPublicKey::from_descriptor(BIP84_XPUB).unwrap();
        assert!(xpub.derive_receive_address(ScriptType::P2wpkh, 0x8000_0000).is_err());
    }
}
