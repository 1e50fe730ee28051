//! # chainware
//!
//! Composable middleware for async HTTP handlers.
//! One type, two combinators, no runtime machinery.
//!
//! ## The contract
//!
//! A [`Middleware`] turns a handler into a handler. That is the whole model.
//! Logging, auth, request ids, timeouts: each one is a `Middleware` you
//! write (or borrow), and chainware combines them.
//!
//! - [`Middleware::bind`] nests one middleware inside another
//! - [`chain`] folds any number of them, first element outermost
//! - [`Middleware::call`] closes a stack over a plain `async fn`
//!
//! Composition runs once at startup. Requests only ever see the resulting
//! nested handler. What chainware does not do: listen on sockets, route, or
//! ship concrete middleware. The host server owns the first two;
//! [`HandlerService`] plugs a composed handler into hyper.
//!
//! ## Quick start
//!
//! ```rust
//! use chainware::{chain, Middleware, Request, Response};
//! use http::StatusCode;
//!
//! let auth = Middleware::from_fn(|req, next| async move {
//!     if req.header("authorization").is_none() {
//!         return Response::status(StatusCode::UNAUTHORIZED);
//!     }
//!     next.call(req).await
//! })
//! .named("auth");
//!
//! let powered_by = Middleware::from_fn(|req, next| async move {
//!     next.call(req).await.with_header("x-powered-by", "chainware")
//! })
//! .named("powered-by");
//!
//! // `None` only for an empty list: the caller decides what "no layers" means.
//! let stack = chain([powered_by, auth]).expect("two layers");
//!
//! let users = stack.call(list_users);
//! let health = stack.call(healthz);
//! # drop((users, health));
//!
//! async fn list_users(_req: Request) -> Response {
//!     Response::json(br#"[{"id":1}]"#.to_vec())
//! }
//!
//! async fn healthz(_req: Request) -> &'static str {
//!     "ok"
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod service;

pub mod middleware;

pub use error::{BoxError, Error};
pub use handler::{BoxFuture, BoxedHandler, Handler};
pub use middleware::{chain, Middleware};
pub use request::Request;
pub use response::{IntoResponse, Response, ResponseBuilder};
pub use service::HandlerService;
