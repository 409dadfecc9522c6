/*
[INPUT]:  EOA addresses and messages to sign
[OUTPUT]: Server-custodied accounts and signatures
[POS]:    HTTP layer - externally-owned account endpoints
[UPDATE]: When adding EOA endpoints or changing signing payloads
*/

use reqwest::{Method, StatusCode};

use crate::http::client::path_param;
use crate::http::{Result, RocksideClient};
use crate::types::{Eoa, EoaRecord, SignMessageRequest, SignedMessageRecord};

const EOA_ROUTE: &str = "/ethereum/eoa";

impl RocksideClient {
    /// List EOAs held for the credential
    ///
    /// GET /ethereum/eoa
    pub async fn get_eoas(&self) -> Result<Vec<String>> {
        let builder = self.request(Method::GET, EOA_ROUTE)?;
        self.send_json(builder, &[StatusCode::OK]).await
    }

    /// Create a new server-custodied EOA
    ///
    /// POST /ethereum/eoa
    pub async fn create_eoa(&self) -> Result<Eoa> {
        let builder = self.request(Method::POST, EOA_ROUTE)?;
        let record: EoaRecord = self.send_json(builder, &[StatusCode::OK]).await?;
        Ok(record.into())
    }

    /// Sign `message` with the key of EOA `address`, returning the signature
    ///
    /// POST /ethereum/eoa/{address}/sign
    pub async fn sign_message_with_eoa(&self, address: &str, message: &str) -> Result<String> {
        let body = SignMessageRequest {
            message: message.to_string(),
        };
        let segments = ["ethereum", "eoa", path_param(address)?, "sign"];
        let builder = self.request_segments(Method::POST, &segments)?.json(&body);
        let record: SignedMessageRecord = self.send_json(builder, &[StatusCode::OK]).await?;
        Ok(record.signed_message)
    }
}
