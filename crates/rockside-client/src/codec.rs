/*
[INPUT]:  Binary buffers, 0x-prefixed hex strings, 256-bit quantities
[OUTPUT]: Wire hex strings and decoded byte buffers
[POS]:    Codec layer - hex transport convention for binary and numeric fields
[UPDATE]: When the wire encoding of binary or numeric fields changes
*/

use alloy_primitives::U256;

use crate::http::{Result, RocksideError};

/// Encode bytes as `0x` followed by two lowercase hex digits per byte.
///
/// The empty buffer encodes as `"0x"`.
pub fn buf_to_hex(buf: &[u8]) -> String {
    format!("0x{}", hex::encode(buf))
}

/// Decode a hex string produced by [`buf_to_hex`].
///
/// The `0x` prefix is optional. Odd-length input and non-hex characters are
/// rejected instead of producing truncated bytes.
pub fn hex_to_buf(value: &str) -> Result<Vec<u8>> {
    let digits = strip_hex_prefix(value);
    hex::decode(digits).map_err(|e| RocksideError::Decode(format!("{value:?}: {e}")))
}

/// Encode a quantity as `0x` followed by its minimal lowercase hex digits.
pub fn quantity_to_hex(value: U256) -> String {
    format!("0x{value:x}")
}

/// Parse a quantity from hex (`0x`-prefixed) or decimal text.
pub fn hex_to_quantity(value: &str) -> Result<U256> {
    let trimmed = value.trim();
    let parsed = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        let digits = strip_hex_prefix(trimmed);
        if digits.is_empty() {
            return Err(RocksideError::Decode(format!("{value:?}: empty quantity")));
        }
        U256::from_str_radix(digits, 16)
    } else {
        U256::from_str_radix(trimmed, 10)
    };
    parsed.map_err(|e| RocksideError::Decode(format!("{value:?}: {e}")))
}

fn strip_hex_prefix(value: &str) -> &str {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value)
}

/// `#[serde(with = "crate::codec::serde_hex")]` for `Vec<u8>` fields.
pub mod serde_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::buf_to_hex(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::hex_to_buf(&raw).map_err(serde::de::Error::custom)
    }
}

/// `#[serde(with = "crate::codec::serde_quantity")]` for `U256` fields.
pub mod serde_quantity {
    use alloy_primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &U256, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::quantity_to_hex(*value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::hex_to_quantity(&raw).map_err(serde::de::Error::custom)
    }
}
