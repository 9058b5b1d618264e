mod common;

use common::test_client::{WsTestClient, connect_clients};
use common::test_server::create_test_server;

use axum_test::WsMessage;
use tokio::time::{Duration, sleep};

#[tokio::test]
async fn given_client_when_connecting_then_registered() {
    // Given
    let test_server = create_test_server();

    // When
    let client = WsTestClient::connect(&test_server.server).await;

    // Then
    assert_eq!(test_server.app_state.registry.total_count().await, 1);

    client.close().await;
}

#[tokio::test]
async fn given_connected_client_when_closed_then_server_cleans_up() {
    // Given
    let test_server = create_test_server();
    let client = WsTestClient::connect(&test_server.server).await;

    // When
    client.close().await;

    // Then - Give server time to process cleanup
    sleep(Duration::from_millis(100)).await;
    assert_eq!(test_server.app_state.registry.total_count().await, 0);
}

#[tokio::test]
async fn given_three_connects_and_one_disconnect_then_two_remain() {
    // Given
    let test_server = create_test_server();
    let mut clients = connect_clients(&test_server.server, 3).await;

    // When
    let leaving = clients.pop().expect("three clients");
    leaving.close().await;
    sleep(Duration::from_millis(100)).await;

    // Then
    assert_eq!(test_server.app_state.registry.total_count().await, 2);

    for client in clients {
        client.close().await;
    }
}

#[tokio::test]
async fn given_client_sends_text_when_connected_then_connection_stays_open() {
    // Given
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    // When - relay ignores anything clients send
    client.send_text("hello").await;
    sleep(Duration::from_millis(50)).await;

    // Then
    assert_eq!(test_server.app_state.registry.total_count().await, 1);
    assert!(client.receives_nothing_within(Duration::from_millis(50)).await);

    client.close().await;
}

#[tokio::test]
async fn given_connected_clients_when_shutdown_then_registry_drained() {
    // Given
    let test_server = create_test_server();
    let _clients = connect_clients(&test_server.server, 2).await;
    assert_eq!(test_server.app_state.registry.total_count().await, 2);
    // Let both connection tasks subscribe to shutdown
    sleep(Duration::from_millis(50)).await;

    // When
    test_server.app_state.shutdown.shutdown();
    sleep(Duration::from_millis(100)).await;

    // Then
    assert_eq!(test_server.app_state.registry.total_count().await, 0);
}

#[tokio::test]
async fn given_client_ping_when_connected_then_exactly_one_pong() {
    // Given
    let test_server = create_test_server();
    let mut client = WsTestClient::connect(&test_server.server).await;

    // When
    client.send_ping(b"hb").await;

    // Then
    let first = client.next_frame_within(Duration::from_millis(500)).await;
    assert!(
        matches!(first, Some(WsMessage::Pong(ref data)) if data.as_ref() == b"hb"),
        "expected a pong, got {first:?}"
    );
    let second = client.next_frame_within(Duration::from_millis(100)).await;
    assert!(second.is_none(), "expected a single pong, got {second:?}");

    client.close().await;
}
