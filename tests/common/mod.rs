//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

use cocktail_browser::{AppConfig, HttpServer};

/// Start a mock upstream that answers each request with whatever JSON the
/// handler returns for the request target (path plus query), recording
/// every target it sees. Binds an ephemeral port.
pub async fn start_mock_upstream<F>(handler: F) -> (SocketAddr, Arc<Mutex<Vec<String>>>)
where
    F: Fn(&str) -> Option<String> + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let handler = Arc::new(handler);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((socket, _)) => {
                    let handler = handler.clone();
                    let recorded = recorded.clone();
                    tokio::spawn(async move {
                        let mut reader = BufReader::new(socket);
                        let mut request_line = String::new();
                        if reader.read_line(&mut request_line).await.is_err() {
                            return;
                        }
                        // "GET /random.php HTTP/1.1"
                        let target = request_line
                            .split_whitespace()
                            .nth(1)
                            .unwrap_or("")
                            .to_string();
                        recorded.lock().unwrap().push(target.clone());

                        // Drain the request headers.
                        loop {
                            let mut line = String::new();
                            match reader.read_line(&mut line).await {
                                Ok(0) => break,
                                Ok(_) if line == "\r\n" => break,
                                Ok(_) => {}
                                Err(_) => return,
                            }
                        }

                        let (status, body) = match handler(&target) {
                            Some(json) => ("200 OK", json),
                            None => ("404 Not Found", String::from("{}")),
                        };
                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        let mut socket = reader.into_inner();
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, requests)
}

/// Reserve an address with nothing listening behind it, for
/// upstream-down scenarios.
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// Start the real server against the given upstream base URL on an
/// ephemeral port.
pub async fn start_server(upstream_base: String) -> SocketAddr {
    let mut config = AppConfig::default();
    config.upstream.base_url = upstream_base;
    config.upstream.timeout_secs = 2;
    config.templates.dir = format!("{}/templates", env!("CARGO_MANIFEST_DIR"));
    config.static_files.dir = format!("{}/public", env!("CARGO_MANIFEST_DIR"));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config).unwrap();
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// A reqwest client that ignores any ambient proxy configuration.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
