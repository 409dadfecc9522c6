/*
[INPUT]:  Wire response records and caller-supplied values
[OUTPUT]: Client-side models with binary fields decoded
[POS]:    Data layer - the shapes callers work with
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;

use alloy_primitives::U256;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};

use crate::codec::{self, hex_to_buf};
use crate::http::{Result, RocksideError};

use super::responses::{
    EncryptedWalletRecord, EncryptionKeyRecord, EoaRecord, IdentityRecord, RelayParamsRecord,
};

/// Numeric transaction field: JSON number, numeric string, or 256-bit integer
///
/// Serialized as given, so `TransactionOpts` reaches the server verbatim;
/// `Big` goes out as a `0x` hex string.
///
/// Decoding never looks inside strings: any JSON string becomes `Text`,
/// including the hex a `Big` was written as. `Big` only comes back for JSON
/// integers above `u64::MAX`, which the JSON reader hands over as `f64`, so
/// digits past its 53-bit mantissa are already rounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(u64),
    Text(String),
    Big(#[serde(serialize_with = "crate::codec::serde_quantity::serialize")] U256),
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(QuantityVisitor)
    }
}

struct QuantityVisitor;

impl Visitor<'_> for QuantityVisitor {
    type Value = Quantity;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer or a numeric string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Quantity, E> {
        Ok(Quantity::Number(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Quantity, E> {
        u64::try_from(v)
            .map(Quantity::Number)
            .map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> std::result::Result<Quantity, E> {
        Ok(match u64::try_from(v) {
            Ok(n) => Quantity::Number(n),
            Err(_) => Quantity::Big(U256::from(v)),
        })
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Quantity, E> {
        if !v.is_finite() || v < 0.0 || v.fract() != 0.0 {
            return Err(E::invalid_value(Unexpected::Float(v), &self));
        }
        if v < u64::MAX as f64 {
            return Ok(Quantity::Number(v as u64));
        }
        U256::from_str_radix(&format!("{v:.0}"), 10)
            .map(Quantity::Big)
            .map_err(|_| E::invalid_value(Unexpected::Float(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Quantity, E> {
        Ok(Quantity::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Quantity, E> {
        Ok(Quantity::Text(v))
    }
}

impl Quantity {
    /// Numeric value, parsing text as hex (`0x`) or decimal
    pub fn to_u256(&self) -> Result<U256> {
        match self {
            Quantity::Number(n) => Ok(U256::from(*n)),
            Quantity::Text(text) => codec::hex_to_quantity(text),
            Quantity::Big(value) => Ok(*value),
        }
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity::Number(value)
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Quantity::Text(value)
    }
}

impl From<U256> for Quantity {
    fn from(value: U256) -> Self {
        Quantity::Big(value)
    }
}

/// Smart wallet (identity contract) and the transaction that created it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub address: String,
    pub transaction_hash: String,
}

impl From<IdentityRecord> for Identity {
    fn from(record: IdentityRecord) -> Self {
        Self {
            address: record.address,
            transaction_hash: record.transaction_hash,
        }
    }
}

/// Externally-owned account whose key is held by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eoa {
    pub address: String,
}

impl From<EoaRecord> for Eoa {
    fn from(record: EoaRecord) -> Self {
        Self {
            address: record.address,
        }
    }
}

/// Account stored encrypted on the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedAccount {
    pub username: String,
    #[serde(with = "crate::codec::serde_hex")]
    pub password_hash: Vec<u8>,
    #[serde(with = "crate::codec::serde_hex")]
    pub password_derived_key_hash: Vec<u8>,
    #[serde(with = "crate::codec::serde_hex")]
    pub encrypted_encryption_key: Vec<u8>,
    #[serde(with = "crate::codec::serde_hex")]
    pub encrypted_encryption_key_iv: Vec<u8>,
    /// KDF iteration count used to derive the key from the password
    pub iterations: u32,
}

/// Encrypted symmetric key released on a successful connect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionKey {
    #[serde(with = "crate::codec::serde_hex")]
    pub data: Vec<u8>,
    #[serde(with = "crate::codec::serde_hex")]
    pub iv: Vec<u8>,
}

impl TryFrom<EncryptionKeyRecord> for EncryptionKey {
    type Error = RocksideError;

    fn try_from(record: EncryptionKeyRecord) -> Result<Self> {
        Ok(Self {
            data: hex_to_buf(&record.data)?,
            iv: hex_to_buf(&record.iv)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedWallet {
    #[serde(with = "crate::codec::serde_hex")]
    pub encrypted_mnemonic: Vec<u8>,
    #[serde(with = "crate::codec::serde_hex")]
    pub encrypted_mnemonic_iv: Vec<u8>,
}

impl TryFrom<EncryptedWalletRecord> for EncryptedWallet {
    type Error = RocksideError;

    fn try_from(record: EncryptedWalletRecord) -> Result<Self> {
        Ok(Self {
            encrypted_mnemonic: hex_to_buf(&record.encrypted_mnemonic)?,
            encrypted_mnemonic_iv: hex_to_buf(&record.encrypted_mnemonic_iv)?,
        })
    }
}

/// Transaction sent from a server-held EOA
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionOpts {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Quantity>,
}

/// Meta-transaction relayed through a smart wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayTransaction {
    /// Signer of the meta-transaction
    pub from: String,
    pub to: String,
    pub value: U256,
    pub data: Vec<u8>,
    pub gas: Option<Quantity>,
    pub gas_price: Option<Quantity>,
    /// Nonce obtained from `get_relay_params`
    pub nonce: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayParams {
    pub nonce: String,
    pub relayer: Option<String>,
}

impl From<RelayParamsRecord> for RelayParams {
    fn from(record: RelayParamsRecord) -> Self {
        Self {
            nonce: record.nonce,
            relayer: record.relayer,
        }
    }
}
