/*
[INPUT]:  JSON bodies returned by the Rockside API
[OUTPUT]: Typed Rust response records with deserialization support
[POS]:    Data layer - wire shapes exactly as the server reports them
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Deserializer, Serialize};

use super::models::Quantity;

/// Error body returned with any unexpected status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IdentityRecord {
    pub address: String,
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EoaRecord {
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignedMessageRecord {
    pub signed_message: String,
}

/// Hex-encoded key material returned by `/encryptedaccounts/connect`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncryptionKeyRecord {
    pub data: String,
    pub iv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EncryptedWalletRecord {
    pub encrypted_mnemonic: String,
    pub encrypted_mnemonic_iv: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayParamsRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub nonce: String,
    #[serde(default)]
    pub relayer: Option<String>,
}

/// Hash and tracking id of a transaction accepted by the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub transaction_hash: String,
    pub tracking_id: String,
}

/// Server-side view of a transaction, looked up by hash or tracking id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub transaction_hash: String,
    #[serde(default)]
    pub tracking_id: Option<String>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub value: Option<Quantity>,
    #[serde(default)]
    pub gas: Option<Quantity>,
    #[serde(default)]
    pub gas_price: Option<Quantity>,
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub nonce: Option<Quantity>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub receipt: Option<TransactionReceipt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub block_hash: Option<String>,
    #[serde(default)]
    pub block_number: Option<Quantity>,
    #[serde(default)]
    pub gas_used: Option<Quantity>,
    #[serde(default)]
    pub cumulative_gas_used: Option<Quantity>,
    #[serde(default)]
    pub contract_address: Option<String>,
    #[serde(default)]
    pub status: Option<Quantity>,
    #[serde(default)]
    pub logs: Vec<Log>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub address: String,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub data: String,
    #[serde(default)]
    pub block_number: Option<Quantity>,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    #[serde(default)]
    pub log_index: Option<Quantity>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
