use small_greet::{GreetServer, ServerConfig};
use std::time::Duration;

#[tokio::test]
async fn test_server_serves_on_configured_port() {
    // Grab a free port from the OS, release it, and hand it to the server
    // the way PORT from the environment would.
    let probe = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = probe.local_addr().unwrap().port();
    drop(probe);

    let server = GreetServer::new(ServerConfig { port });
    tokio::spawn(async move {
        server.run().await.unwrap();
    });

    // The bind happens inside the spawned task; poll until it is up.
    let url = format!("http://127.0.0.1:{}/hello", port);
    let mut response = None;
    for _ in 0..50 {
        match reqwest::get(&url).await {
            Ok(r) => {
                response = Some(r);
                break;
            }
            Err(_) => tokio::time::sleep(Duration::from_millis(20)).await,
        }
    }

    let response = response.expect("server never came up on the configured port");
    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "Hello world");
}

#[tokio::test]
async fn test_bind_failure_is_fatal() {
    // Occupy a port first so the server's own bind fails.
    let occupied = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
    let port = occupied.local_addr().unwrap().port();

    let server = GreetServer::new(ServerConfig { port });
    let result = server.run().await;

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, small_greet::GreetError::IoError(_)));
    assert!(!err.recovery_suggestion().is_empty());
}
