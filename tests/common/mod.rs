//! Shared utilities for integration tests.

use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use pathway::RequestContext;

/// Ordered record of handler invocations.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

#[allow(dead_code)]
impl CallLog {
    /// A handler that appends `name` to the log and does nothing else.
    pub fn handler<S: 'static>(&self, name: &str) -> impl Fn(&mut RequestContext<'_, S>) + Send + Sync + 'static {
        let log = self.clone();
        let name = name.to_string();
        move |_ctx| log.push(&name)
    }

    pub fn push(&self, name: &str) {
        self.0.lock().unwrap().push(name.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

/// Send one request through a router without opening a socket.
#[allow(dead_code)]
pub async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
