//! HTTP adapter tests, driving the layered Axum router in-process.

use axum::http::StatusCode;

use pathway::config::{RouteConfig, ServerConfig};
use pathway::http::HttpServer;
use pathway::lifecycle::startup::build_dispatcher;

mod common;
use common::send;

fn server_with_routes(routes: Vec<RouteConfig>) -> HttpServer {
    let config = ServerConfig {
        routes,
        ..ServerConfig::default()
    };
    let dispatcher = build_dispatcher(&config).unwrap();
    HttpServer::new(config, dispatcher)
}

fn route(method: &str, path: &str, status: u16, body: &str) -> RouteConfig {
    RouteConfig {
        method: method.into(),
        path: path.into(),
        status,
        body: body.into(),
    }
}

#[tokio::test]
async fn test_greeting_over_http() {
    let server = server_with_routes(Vec::new());

    let (status, body) = send(server.router(), "GET", "/hello/alice").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, alice.");

    let (status, body) = send(server.router(), "GET", "/hello/bob/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, bob.");
}

#[tokio::test]
async fn test_path_is_percent_decoded() {
    let server = server_with_routes(vec![route("GET", "/files/:name:", 200, "{{name}}")]);

    let (status, body) = send(server.router(), "GET", "/hello/john%20doe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Hello, john doe.");

    let (status, body) = send(server.router(), "GET", "/files/caf%C3%A9").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "café");
}

#[tokio::test]
async fn test_invalid_utf8_path_is_bad_request() {
    let server = server_with_routes(Vec::new());

    let (status, body) = send(server.router(), "GET", "/hello/%FF").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Bad Request");
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = server_with_routes(Vec::new());

    let (status, body) = send(server.router(), "GET", "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "Not Found");

    let (status, _) = send(server.router(), "POST", "/hello/alice").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_configured_template_route() {
    let server = server_with_routes(vec![
        route("GET", "/users/:id:", 200, "user {{id}}"),
        route("DELETE", "/users/:id:", 202, "deleting {{id}}"),
    ]);

    assert_eq!(server.config().routes.len(), 2);

    let (status, body) = send(server.router(), "GET", "/users/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "user 7");

    let (status, body) = send(server.router(), "DELETE", "/users/7?force=1").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, "deleting 7");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let server = server_with_routes(vec![route("GET", "/id", 200, "{{request_id}}")]);

    let (status, body) = send(server.router(), "GET", "/id").await;
    assert_eq!(status, StatusCode::OK);
    assert!(uuid::Uuid::parse_str(&body).is_ok(), "not a uuid: {body}");
}

#[tokio::test]
async fn test_run_stops_on_shutdown() {
    let server = server_with_routes(Vec::new());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let shutdown = pathway::Shutdown::new();
    let rx = shutdown.subscribe();

    let handle = tokio::spawn(server.run(listener, rx));
    shutdown.trigger();

    let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
        .await
        .unwrap()
        .unwrap();
    assert!(result.is_ok());
}
