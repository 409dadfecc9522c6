/*
[INPUT]:  Identity address, signer account, channel id, signed meta-transactions
[OUTPUT]: Relay nonces and relayed transaction handles
[POS]:    HTTP layer - meta-transaction relay endpoints
[UPDATE]: When changing relay payloads or routes
*/

use reqwest::{Method, StatusCode};

use crate::http::client::path_param;
use crate::http::{Result, RocksideClient};
use crate::types::{
    RelayParams, RelayParamsRecord, RelayParamsRequest, RelayTransaction,
    RelayTransactionRequest, TransactionResponse,
};

impl RocksideClient {
    /// Fetch the nonce (and relayer) to sign a meta-transaction against
    ///
    /// POST /ethereum/{network}/relay/{identity}/params
    pub async fn get_relay_params(
        &self,
        identity: &str,
        account: &str,
        channel: u64,
    ) -> Result<RelayParams> {
        let body = RelayParamsRequest::new(account, channel);
        let segments = [
            "ethereum",
            self.network().name(),
            "relay",
            path_param(identity)?,
            "params",
        ];
        let builder = self.request_segments(Method::POST, &segments)?.json(&body);
        let record: RelayParamsRecord = self.send_json(builder, &[StatusCode::OK]).await?;
        Ok(record.into())
    }

    /// Relay a signed meta-transaction through smart wallet `identity`
    ///
    /// POST /ethereum/{network}/relay/{identity}
    pub async fn relay_transaction(
        &self,
        identity: &str,
        tx: &RelayTransaction,
    ) -> Result<TransactionResponse> {
        let body = RelayTransactionRequest::from(tx);
        let segments = ["ethereum", self.network().name(), "relay", path_param(identity)?];
        let builder = self.request_segments(Method::POST, &segments)?.json(&body);
        self.send_json(builder, &[StatusCode::OK]).await
    }
}
