/*
[INPUT]:  Forwarder and account addresses
[OUTPUT]: Smart wallet addresses and creation transactions
[POS]:    HTTP layer - identity (smart wallet) endpoints
[UPDATE]: When adding identity endpoints or changing their routes
*/

use reqwest::{Method, StatusCode};

use crate::http::{Result, RocksideClient};
use crate::types::{CreateIdentityRequest, DeployIdentityRequest, Identity, IdentityRecord};

impl RocksideClient {
    /// List smart wallets owned by the credential
    ///
    /// GET /ethereum/{network}/identities
    pub async fn get_identities(&self) -> Result<Vec<String>> {
        let route = self.network_route("/identities");
        let builder = self.request(Method::GET, &route)?;
        self.send_json(builder, &[StatusCode::OK]).await
    }

    /// Create a smart wallet for `account`, relayed through `forwarder`
    ///
    /// POST /ethereum/{network}/identities
    pub async fn create_identity(&self, forwarder: &str, account: &str) -> Result<Identity> {
        let body = CreateIdentityRequest {
            forwarder: forwarder.to_string(),
            account: account.to_string(),
        };
        let route = self.network_route("/identities");
        let builder = self.request(Method::POST, &route)?.json(&body);
        let record: IdentityRecord = self.send_json(builder, &[StatusCode::CREATED]).await?;
        Ok(record.into())
    }

    /// Deploy a relayable identity contract owned by `account`
    ///
    /// POST /ethereum/{network}/contracts/relayableidentity
    pub async fn deploy_identity_contract(&self, account: &str) -> Result<Identity> {
        let body = DeployIdentityRequest {
            account: account.to_string(),
        };
        let route = self.network_route("/contracts/relayableidentity");
        let builder = self.request(Method::POST, &route)?.json(&body);
        let record: IdentityRecord = self.send_json(builder, &[StatusCode::CREATED]).await?;
        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credential;
    use crate::http::{RocksideClient, RocksideError};
    use crate::types::Network;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> RocksideClient {
        RocksideClient::new(
            &server.uri(),
            Network::Ropsten,
            Credential::ApiKey("key".to_string()),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_get_identities() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ethereum/ropsten/identities"))
            .and(header("apikey", "key"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!(["0xabc", "0xdef"])),
            )
            .expect(1)
            .mount(&server)
            .await;

        let identities = client(&server)
            .get_identities()
            .await
            .expect("get_identities failed");

        assert_eq!(identities, vec!["0xabc".to_string(), "0xdef".to_string()]);
    }

    #[tokio::test]
    async fn test_create_identity() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ethereum/ropsten/identities"))
            .and(body_json(serde_json::json!({
                "forwarder": "0xforwarder",
                "account": "0xaccount",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "address": "0xidentity",
                "transaction_hash": "0xtx",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let identity = client(&server)
            .create_identity("0xforwarder", "0xaccount")
            .await
            .expect("create_identity failed");

        assert_eq!(identity.address, "0xidentity");
        assert_eq!(identity.transaction_hash, "0xtx");
    }

    #[tokio::test]
    async fn test_create_identity_rejects_plain_ok() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ethereum/ropsten/identities"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "error": "unexpected",
            })))
            .mount(&server)
            .await;

        let err = client(&server)
            .create_identity("0xforwarder", "0xaccount")
            .await
            .unwrap_err();

        match err {
            RocksideError::Api { status, message } => {
                assert_eq!(status, 200);
                assert_eq!(message, "unexpected");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_deploy_identity_contract() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/ethereum/ropsten/contracts/relayableidentity"))
            .and(body_json(serde_json::json!({"account": "0xaccount"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "address": "0xcontract",
                "transaction_hash": "0xdeploy",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let identity = client(&server)
            .deploy_identity_contract("0xaccount")
            .await
            .expect("deploy_identity_contract failed");

        assert_eq!(identity.address, "0xcontract");
        assert_eq!(identity.transaction_hash, "0xdeploy");
    }
}
