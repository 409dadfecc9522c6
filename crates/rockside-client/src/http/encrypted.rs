/*
[INPUT]:  Encrypted accounts, usernames, password hashes, encrypted wallets
[OUTPUT]: Stored credentials and decoded key material
[POS]:    HTTP layer - encrypted account and wallet storage endpoints
[UPDATE]: When changing the encrypted storage payloads or routes
*/

use reqwest::{Method, StatusCode};

use crate::http::{Result, RocksideClient};
use crate::types::{
    AccountLoginRequest, EncryptedAccount, EncryptedAccountRequest, EncryptedWallet,
    EncryptedWalletRecord, EncryptedWalletRequest, EncryptionKey, EncryptionKeyRecord,
};

const ACCOUNTS_ROUTE: &str = "/encryptedaccounts";
const CONNECT_ROUTE: &str = "/encryptedaccounts/connect";
const WALLETS_ROUTE: &str = "/encryptedaccounts/wallets";

impl RocksideClient {
    /// Store an encrypted account
    ///
    /// PUT /encryptedaccounts
    /// An account that already exists (409) counts as stored.
    pub async fn create_encrypted_account(&self, account: &EncryptedAccount) -> Result<()> {
        let body = EncryptedAccountRequest::from(account);
        let builder = self.request(Method::PUT, ACCOUNTS_ROUTE)?.json(&body);
        self.send_empty(builder, &[StatusCode::CREATED, StatusCode::CONFLICT])
            .await
    }

    /// Exchange username and password hash for the encrypted symmetric key
    ///
    /// POST /encryptedaccounts/connect
    pub async fn connect_encrypted_account(
        &self,
        username: &str,
        password_hash: &[u8],
    ) -> Result<EncryptionKey> {
        let body = AccountLoginRequest::new(username, password_hash);
        let builder = self.request(Method::POST, CONNECT_ROUTE)?.json(&body);
        let record: EncryptionKeyRecord = self.send_json(builder, &[StatusCode::OK]).await?;
        EncryptionKey::try_from(record)
    }

    /// Store an encrypted wallet under an account
    ///
    /// PUT /encryptedaccounts/wallets
    pub async fn create_encrypted_wallet(
        &self,
        username: &str,
        password_hash: &[u8],
        wallet: &EncryptedWallet,
    ) -> Result<()> {
        let body = EncryptedWalletRequest::new(username, password_hash, wallet);
        let builder = self.request(Method::PUT, WALLETS_ROUTE)?.json(&body);
        self.send_empty(builder, &[StatusCode::CREATED]).await
    }

    /// Fetch every encrypted wallet stored under an account
    ///
    /// POST /encryptedaccounts/wallets
    pub async fn get_encrypted_wallets(
        &self,
        username: &str,
        password_hash: &[u8],
    ) -> Result<Vec<EncryptedWallet>> {
        let body = AccountLoginRequest::new(username, password_hash);
        let builder = self.request(Method::POST, WALLETS_ROUTE)?.json(&body);
        let records: Vec<EncryptedWalletRecord> =
            self.send_json(builder, &[StatusCode::OK]).await?;
        records.into_iter().map(EncryptedWallet::try_from).collect()
    }
}
