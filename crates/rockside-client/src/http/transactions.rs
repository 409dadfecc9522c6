/*
[INPUT]:  Transaction options, transaction hashes or tracking ids
[OUTPUT]: Relayed transaction handles and server-side transaction records
[POS]:    HTTP layer - transaction submission and lookup endpoints
[UPDATE]: When adding transaction endpoints or changing lookup keys
*/

use reqwest::{Method, StatusCode};

use crate::http::client::path_param;
use crate::http::{Result, RocksideClient};
use crate::types::{TransactionInfo, TransactionOpts, TransactionResponse};

impl RocksideClient {
    /// Send a transaction from a server-held EOA
    ///
    /// POST /ethereum/{network}/transactions
    pub async fn send_transaction(&self, tx: &TransactionOpts) -> Result<TransactionResponse> {
        let route = self.network_route("/transactions");
        let builder = self.request(Method::POST, &route)?.json(tx);
        self.send_json(builder, &[StatusCode::OK]).await
    }

    /// Look up a transaction by hash or by tracking id
    ///
    /// GET /ethereum/{network}/transactions/{hash_or_tracking_id}
    pub async fn get_transaction(&self, hash_or_tracking_id: &str) -> Result<TransactionInfo> {
        let segments = [
            "ethereum",
            self.network().name(),
            "transactions",
            path_param(hash_or_tracking_id)?,
        ];
        let builder = self.request_segments(Method::GET, &segments)?;
        self.send_json(builder, &[StatusCode::OK]).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credential;
    use crate::http::{RocksideClient, RocksideError};
    use crate::types::{Network, Quantity, TransactionOpts};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> RocksideClient {
        RocksideClient::new(
            &server.uri(),
            Network::Mainnet,
            Credential::ApiKey("key".to_string()),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_send_transaction_passes_opts_through() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ethereum/mainnet/transactions"))
            .and(body_json(serde_json::json!({
                "from": "0xfrom",
                "to": "0xto",
                "value": "1000",
                "gasPrice": 20,
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transaction_hash": "0xhash",
                "tracking_id": "track-1",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tx = TransactionOpts {
            from: "0xfrom".to_string(),
            to: Some("0xto".to_string()),
            value: Some(Quantity::from("1000")),
            gas_price: Some(Quantity::from(20u64)),
            ..Default::default()
        };

        let response = client(&server)
            .send_transaction(&tx)
            .await
            .expect("send_transaction failed");

        assert_eq!(response.transaction_hash, "0xhash");
        assert_eq!(response.tracking_id, "track-1");
    }

    #[tokio::test]
    async fn test_get_transaction() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ethereum/mainnet/transactions/track-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transaction_hash": "0xhash",
                "tracking_id": "track-1",
                "status": "mined",
                "receipt": {
                    "transaction_hash": "0xhash",
                    "gas_used": 21000,
                    "logs": []
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let info = client(&server)
            .get_transaction("track-1")
            .await
            .expect("get_transaction failed");

        assert_eq!(info.transaction_hash, "0xhash");
        assert_eq!(info.status.as_deref(), Some("mined"));
        let receipt = info.receipt.expect("receipt");
        assert_eq!(receipt.gas_used, Some(Quantity::Number(21000)));
        assert!(receipt.logs.is_empty());
    }

    #[tokio::test]
    async fn test_get_transaction_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ethereum/mainnet/transactions/0xmissing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "error": "transaction not found",
            })))
            .mount(&server)
            .await;

        let err = client(&server).get_transaction("0xmissing").await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("transaction not found"));
    }

    #[tokio::test]
    async fn test_unparsable_error_body_propagates_parse_failure() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ethereum/mainnet/transactions/0xhash"))
            .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
            .mount(&server)
            .await;

        let err = client(&server).get_transaction("0xhash").await.unwrap_err();

        assert!(matches!(err, RocksideError::Serialization(_)), "unexpected: {err:?}");
    }

    #[tokio::test]
    async fn test_get_transaction_tracking_id_stays_one_segment() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ethereum/mainnet/transactions/a%2Fb%23c"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transaction_hash": "0xhash",
                "tracking_id": "a/b#c",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let info = client(&server)
            .get_transaction("a/b#c")
            .await
            .expect("get_transaction failed");

        assert_eq!(info.tracking_id.as_deref(), Some("a/b#c"));
    }

    #[tokio::test]
    async fn test_get_transaction_dot_segment_rejected_before_sending() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client(&server).get_transaction("..").await.unwrap_err();

        assert!(err.is_config_error(), "unexpected: {err:?}");
    }
}
