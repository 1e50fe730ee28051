//! chainware example: a timing layer, a request-id layer and an auth gate,
//! composed once and reused by two handlers.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example compose
//!
//! No server here: requests are built in-process and fed to the composed
//! handlers directly. In production, wrap the handler in
//! `chainware::HandlerService` and hand it to hyper.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use bytes::Bytes;
use chainware::{chain, BoxedHandler, Middleware, Request, Response};
use http::StatusCode;
use tracing::info;

#[derive(Clone, Debug)]
struct RequestId(u64);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let stack = chain([timing(), request_id(), require_token("s3cret")])
        .expect("three layers");

    let users = stack.call(get_user);
    let health = stack.call(|_req: Request| async { "ok" });

    for (handler, req) in [
        (&users, request("/users/42", Some("s3cret"))),
        (&users, request("/users/42", None)),
        (&health, request("/healthz", Some("s3cret"))),
    ] {
        let res = handler.call(req).await;
        info!(
            status = %res.status_code(),
            request_id = res.header("x-request-id").unwrap_or("-"),
            body = %String::from_utf8_lossy(res.body()),
            "response",
        );
    }
}

// ── Middleware ────────────────────────────────────────────────────────────────

fn timing() -> Middleware {
    Middleware::from_fn(|req: Request, next: BoxedHandler| async move {
        let path = req.path().to_owned();
        let started = Instant::now();
        let res = next.call(req).await;
        info!(%path, status = %res.status_code(), elapsed = ?started.elapsed(), "handled");
        res
    })
    .named("timing")
}

fn request_id() -> Middleware {
    static NEXT: AtomicU64 = AtomicU64::new(1);

    Middleware::from_fn(|mut req: Request, next: BoxedHandler| async move {
        let id = NEXT.fetch_add(1, Ordering::Relaxed);
        req.extensions_mut().insert(RequestId(id));
        next.call(req).await.with_header("x-request-id", &id.to_string())
    })
    .named("request-id")
}

fn require_token(token: &'static str) -> Middleware {
    Middleware::from_fn(move |req: Request, next: BoxedHandler| async move {
        let expected = format!("Bearer {token}");
        if req.header("authorization") != Some(expected.as_str()) {
            return Response::status(StatusCode::UNAUTHORIZED);
        }
        next.call(req).await
    })
    .named("auth")
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn get_user(req: Request) -> Response {
    let id = req.path().rsplit('/').next().unwrap_or("unknown");
    let request_id = req.extensions().get::<RequestId>().map_or(0, |r| r.0);
    Response::json(format!(r#"{{"id":"{id}","request":{request_id}}}"#))
}

fn request(path: &str, token: Option<&str>) -> Request {
    let mut builder = http::Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Bytes::new()).expect("valid request").into()
}
