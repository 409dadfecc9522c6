/*
[INPUT]:  Client models and call arguments
[OUTPUT]: Typed Rust request bodies with serialization support
[POS]:    Data layer - wire shapes sent to the Rockside API
[UPDATE]: When API schema changes or new types added
*/

use serde::Serialize;

use crate::codec::{buf_to_hex, quantity_to_hex};

use super::models::{EncryptedAccount, EncryptedWallet, Quantity, RelayTransaction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateIdentityRequest {
    pub forwarder: String,
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeployIdentityRequest {
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignMessageRequest {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedAccountRequest {
    pub username: String,
    pub password_hash: String,
    pub password_derived_key_hash: String,
    pub encrypted_encryption_key: String,
    pub encrypted_encryption_key_iv: String,
    pub iterations: u32,
}

impl From<&EncryptedAccount> for EncryptedAccountRequest {
    fn from(account: &EncryptedAccount) -> Self {
        Self {
            username: account.username.clone(),
            password_hash: buf_to_hex(&account.password_hash),
            password_derived_key_hash: buf_to_hex(&account.password_derived_key_hash),
            encrypted_encryption_key: buf_to_hex(&account.encrypted_encryption_key),
            encrypted_encryption_key_iv: buf_to_hex(&account.encrypted_encryption_key_iv),
            iterations: account.iterations,
        }
    }
}

/// Username and password hash identifying an encrypted account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountLoginRequest {
    pub username: String,
    pub password_hash: String,
}

impl AccountLoginRequest {
    pub fn new(username: &str, password_hash: &[u8]) -> Self {
        Self {
            username: username.to_string(),
            password_hash: buf_to_hex(password_hash),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedWalletRequest {
    pub username: String,
    pub password_hash: String,
    pub encrypted_mnemonic: String,
    pub encrypted_mnemonic_iv: String,
}

impl EncryptedWalletRequest {
    pub fn new(username: &str, password_hash: &[u8], wallet: &EncryptedWallet) -> Self {
        Self {
            username: username.to_string(),
            password_hash: buf_to_hex(password_hash),
            encrypted_mnemonic: buf_to_hex(&wallet.encrypted_mnemonic),
            encrypted_mnemonic_iv: buf_to_hex(&wallet.encrypted_mnemonic_iv),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayParamsRequest {
    pub account: String,
    pub channel_id: String,
}

impl RelayParamsRequest {
    pub fn new(account: &str, channel_id: u64) -> Self {
        Self {
            account: account.to_string(),
            channel_id: channel_id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayTransactionRequest {
    pub from: String,
    pub to: String,
    pub value: String,
    pub data: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    pub nonce: String,
    pub signature: String,
}

impl From<&RelayTransaction> for RelayTransactionRequest {
    fn from(tx: &RelayTransaction) -> Self {
        Self {
            from: tx.from.clone(),
            to: tx.to.clone(),
            value: quantity_to_hex(tx.value),
            data: buf_to_hex(&tx.data),
            gas: tx.gas.clone(),
            gas_price: tx.gas_price.clone(),
            nonce: tx.nonce.clone(),
            signature: tx.signature.clone(),
        }
    }
}
