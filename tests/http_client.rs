#![cfg(feature = "client")]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{Value, json};
use solana_rpc_quickstart::{
    AccountDetails, BlockhashResult, Commitment, Error, Quickstart, SolanaRpcClient,
};

const API_KEY: &str = "test-key";
const ADDRESS: &str = "DLRPZSrex3dk58mbJxfKEaxPMazchNogvZDSh26BhgRi";

fn quickstart(server: &ServerGuard) -> Quickstart<SolanaRpcClient> {
    Quickstart::new(SolanaRpcClient::new(format!(
        "{}/?key={API_KEY}",
        server.url()
    )))
}

fn unknown_signature() -> String {
    bs58::encode([3u8; 64]).into_string()
}

async fn mock_method(server: &mut ServerGuard, method: &str, reply: Value) -> Mock {
    server
        .mock("POST", "/")
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .match_body(Matcher::PartialJson(json!({ "jsonrpc": "2.0", "method": method })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(reply.to_string())
        .create_async()
        .await
}

#[tokio::test]
async fn get_balance_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::UrlEncoded("key".into(), API_KEY.into()))
        .match_body(Matcher::Json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "getBalance",
            "params": [ADDRESS, { "commitment": "confirmed" }]
        })))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": { "context": { "slot": 353_000_001 }, "value": 35_737_443 }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let balance = quickstart(&server)
        .get_balance(ADDRESS)
        .await
        .expect("balance");

    assert_eq!(balance.address, ADDRESS);
    assert_eq!(balance.lamports, 35_737_443);
    assert!((balance.sol - 0.035737443).abs() < 1e-15);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_blockhash_end_to_end() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_method(
        &mut server,
        "getLatestBlockhash",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "slot": 353_000_001 },
                "value": {
                    "blockhash": "Zb6cPmjqh9UmdG4TP4QRVDsjFEinDzze8CY2mrgXgEv",
                    "lastValidBlockHeight": 375_270_398
                }
            }
        }),
    )
    .await;

    let blockhash = quickstart(&server).get_blockhash().await.expect("blockhash");

    assert_eq!(
        blockhash,
        BlockhashResult {
            blockhash: "Zb6cPmjqh9UmdG4TP4QRVDsjFEinDzze8CY2mrgXgEv".to_string(),
            last_valid_block_height: 375_270_398,
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn get_account_info_existing_and_missing() {
    let mut server = mockito::Server::new_async().await;
    let found = mock_method(
        &mut server,
        "getAccountInfo",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": {
                "context": { "slot": 353_000_001 },
                "value": {
                    "data": ["AAECAw==", "base64"],
                    "executable": false,
                    "lamports": 35_737_443,
                    "owner": "11111111111111111111111111111111",
                    "rentEpoch": 18_446_744_073_709_551_615_u64
                }
            }
        }),
    )
    .await;

    let info = quickstart(&server)
        .get_account_info(ADDRESS)
        .await
        .expect("account info");
    assert_eq!(
        info.account,
        Some(AccountDetails {
            owner: "11111111111111111111111111111111".to_string(),
            lamports: 35_737_443,
            executable: false,
            data_length: 4,
        })
    );
    found.assert_async().await;

    let mut server = mockito::Server::new_async().await;
    let missing = mock_method(
        &mut server,
        "getAccountInfo",
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "result": { "context": { "slot": 353_000_002 }, "value": null }
        }),
    )
    .await;

    let info = quickstart(&server)
        .get_account_info(ADDRESS)
        .await
        .expect("account info");
    assert!(!info.exists());
    assert_eq!(
        serde_json::to_value(&info).expect("serialize"),
        json!({ "address": ADDRESS, "exists": false })
    );
    missing.assert_async().await;
}

#[tokio::test]
async fn get_transaction_unknown_signature() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_method(
        &mut server,
        "getTransaction",
        json!({ "jsonrpc": "2.0", "id": 1, "result": null }),
    )
    .await;

    let signature = unknown_signature();
    let result = quickstart(&server)
        .get_transaction(&signature)
        .await
        .expect("transaction");

    assert_eq!(
        serde_json::to_value(&result).expect("serialize"),
        json!({ "signature": signature, "found": false })
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn get_transaction_never_sends_processed() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .match_body(Matcher::AllOf(vec![
            Matcher::PartialJson(json!({ "method": "getTransaction" })),
            Matcher::Regex(r#""commitment":"confirmed""#.to_string()),
        ]))
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "jsonrpc": "2.0",
                "id": 1,
                "result": {
                    "slot": 353_000_001,
                    "blockTime": 1_752_000_000,
                    "meta": { "err": null, "fee": 5000 }
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = SolanaRpcClient::new(format!("{}/?key={API_KEY}", server.url()))
        .with_commitment(Commitment::Processed);
    let result = Quickstart::new(client)
        .get_transaction(&unknown_signature())
        .await
        .expect("transaction");

    let details = result.transaction.expect("found");
    assert!(details.success);
    assert_eq!(details.slot, 353_000_001);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_slot_falls_back_when_block_is_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let slot = mock_method(
        &mut server,
        "getSlot",
        json!({ "jsonrpc": "2.0", "id": 1, "result": 353_000_001 }),
    )
    .await;
    let block_time = mock_method(
        &mut server,
        "getBlockTime",
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": { "code": -32004, "message": "Block not available for slot 353000001" }
        }),
    )
    .await;

    let before = chrono::Utc::now().timestamp();
    let result = quickstart(&server).get_slot().await.expect("slot");
    let after = chrono::Utc::now().timestamp();

    assert_eq!(result.slot, 353_000_001);
    assert!((before..=after).contains(&result.timestamp));
    slot.assert_async().await;
    block_time.assert_async().await;
}

#[tokio::test]
async fn get_slot_falls_back_when_block_time_is_null() {
    let mut server = mockito::Server::new_async().await;
    let slot = mock_method(
        &mut server,
        "getSlot",
        json!({ "jsonrpc": "2.0", "id": 1, "result": 353_000_001 }),
    )
    .await;
    let block_time = mock_method(
        &mut server,
        "getBlockTime",
        json!({ "jsonrpc": "2.0", "id": 2, "result": null }),
    )
    .await;

    let before = chrono::Utc::now().timestamp();
    let result = quickstart(&server).get_slot().await.expect("slot");
    let after = chrono::Utc::now().timestamp();

    assert_eq!(result.slot, 353_000_001);
    assert!((before..=after).contains(&result.timestamp));
    slot.assert_async().await;
    block_time.assert_async().await;
}

#[tokio::test]
async fn get_slot_falls_back_when_slot_was_skipped_in_long_term_storage() {
    let mut server = mockito::Server::new_async().await;
    let slot = mock_method(
        &mut server,
        "getSlot",
        json!({ "jsonrpc": "2.0", "id": 1, "result": 353_000_001 }),
    )
    .await;
    let block_time = mock_method(
        &mut server,
        "getBlockTime",
        json!({
            "jsonrpc": "2.0",
            "id": 2,
            "error": {
                "code": -32009,
                "message": "Slot 353000001 was skipped, or missing in long-term storage"
            }
        }),
    )
    .await;

    let before = chrono::Utc::now().timestamp();
    let result = quickstart(&server).get_slot().await.expect("slot");
    let after = chrono::Utc::now().timestamp();

    assert_eq!(result.slot, 353_000_001);
    assert!((before..=after).contains(&result.timestamp));
    slot.assert_async().await;
    block_time.assert_async().await;
}

#[tokio::test]
async fn reply_without_result_or_error_is_an_error() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_method(
        &mut server,
        "getTransaction",
        json!({ "jsonrpc": "2.0", "id": 1 }),
    )
    .await;

    let error = quickstart(&server)
        .get_transaction(&unknown_signature())
        .await
        .expect_err("should have failed on a reply without a result");

    assert!(matches!(error, Error::Json(_)), "Invalid error: {error}");
    mock.assert_async().await;
}

#[tokio::test]
async fn rpc_error_with_null_id_propagates() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_method(
        &mut server,
        "getLatestBlockhash",
        json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": { "code": -32005, "message": "Node is unhealthy" }
        }),
    )
    .await;

    let error = quickstart(&server)
        .get_blockhash()
        .await
        .expect_err("should have failed with an RPC error");

    if let Error::Rpc(error) = error {
        assert_eq!(error.code, -32005);
        assert_eq!(error.message, "Node is unhealthy");
    } else {
        unreachable!("Invalid error: {error}");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn rpc_error_propagates() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_method(
        &mut server,
        "getLatestBlockhash",
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32005, "message": "Node is unhealthy" }
        }),
    )
    .await;

    let error = quickstart(&server)
        .get_blockhash()
        .await
        .expect_err("should have failed with an RPC error");

    if let Error::Rpc(error) = error {
        assert_eq!(error.code, -32005);
        assert_eq!(error.message, "Node is unhealthy");
    } else {
        unreachable!("Invalid error: {error}");
    }
    mock.assert_async().await;
}

#[tokio::test]
async fn http_status_error_propagates() {
    const STATUS_CODE: u16 = 429;

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .with_status(STATUS_CODE.into())
        .with_header("content-type", "text/plain")
        .with_body("Too Many Requests")
        .expect(1)
        .create_async()
        .await;

    let error = quickstart(&server)
        .get_balance(ADDRESS)
        .await
        .expect_err("should have failed due to a HTTP status error");

    if let Error::Http(error) = error {
        assert_eq!(error.status().map(|s| s.as_u16()), Some(STATUS_CODE));
    } else {
        unreachable!("Invalid error: {error}");
    }
    // No retry.
    mock.assert_async().await;
}

#[tokio::test]
async fn invalid_address_never_reaches_the_server() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let quickstart = quickstart(&server);
    let error = quickstart.get_balance("not-an-address").await.unwrap_err();
    assert!(error.is_invalid_input());
    let error = quickstart.get_account_info("").await.unwrap_err();
    assert!(error.is_invalid_input());
    let error = quickstart.get_transaction(ADDRESS).await.unwrap_err();
    assert!(error.is_invalid_input());

    mock.assert_async().await;
}
