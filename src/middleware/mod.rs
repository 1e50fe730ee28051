//! Middleware layer.
//!
//! Middleware intercepts requests and responses and is the right place for
//! cross-cutting concerns: tracing, request-id injection, authentication.
//! chainware ships none of those. It ships the algebra that combines them.
//!
//! A [`Middleware`] is a transformation `BoxedHandler -> BoxedHandler`.
//! Binding `outer` to `inner` yields `h -> outer(inner(h))`, so for
//! `chain([a, b, c])` a request travels
//!
//! ```text
//! a (pre) → b (pre) → c (pre) → handler → c (post) → b (post) → a (post)
//! ```
//!
//! Composition happens once, at startup. Per request only the resulting
//! nested handler runs.

mod compose;

pub use compose::chain;

use std::borrow::Cow;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tracing::trace;

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::IntoResponse;

type Wrap = dyn Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static;

/// A reusable transformation from handler to handler.
///
/// Immutable once built. [`bind`](Middleware::bind) and [`chain`] never
/// modify their inputs; they return new composite values. Cloning is cheap.
///
/// ```rust
/// use chainware::{Middleware, Request, Response};
///
/// let server_header = Middleware::from_fn(|req, next| async move {
///     next.call(req).await.with_header("server", "chainware")
/// });
///
/// async fn hello(_req: Request) -> Response { Response::text("hello") }
///
/// let handler = server_header.call(hello);
/// # drop(handler);
/// ```
#[derive(Clone)]
pub struct Middleware {
    wrap: Arc<Wrap>,
    name: Cow<'static, str>,
}

impl Middleware {
    /// Builds a middleware from a raw handler transformation.
    pub fn new<F>(wrap: F) -> Self
    where
        F: Fn(BoxedHandler) -> BoxedHandler + Send + Sync + 'static,
    {
        Self { wrap: Arc::new(wrap), name: Cow::Borrowed("<fn>") }
    }

    /// Builds a middleware from an async function of the request and the
    /// downstream handler.
    ///
    /// Delegate with `next.call(req).await`. Returning without calling
    /// `next` short-circuits everything downstream.
    pub fn from_fn<F, Fut, R>(f: F) -> Self
    where
        F: Fn(Request, BoxedHandler) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = R> + Send + 'static,
        R: IntoResponse + Send + 'static,
    {
        let f = Arc::new(f);
        Self::new(move |next: BoxedHandler| {
            let f = Arc::clone(&f);
            BoxedHandler::new(move |req: Request| f(req, next.clone()))
        })
    }

    /// Attaches a diagnostic name, shown in logs and `Debug` output.
    pub fn named(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds `next` inside `self`: the result maps `h` to `self(next(h))`.
    ///
    /// `self` sees each request first and each response last.
    pub fn bind(&self, next: &Middleware) -> Middleware {
        trace!(outer = %self.name, inner = %next.name, "binding middleware");

        let outer = Arc::clone(&self.wrap);
        let inner = Arc::clone(&next.wrap);
        Middleware {
            wrap: Arc::new(move |handler: BoxedHandler| outer(inner(handler))),
            name: Cow::Owned(format!("{} > {}", self.name, next.name)),
        }
    }

    /// Wraps an existing handler. Each call produces a fresh composite.
    pub fn apply(&self, handler: BoxedHandler) -> BoxedHandler {
        (self.wrap)(handler)
    }

    /// Coerces a plain handler function and wraps it.
    pub fn call(&self, handler: impl Handler) -> BoxedHandler {
        self.apply(handler.into_boxed_handler())
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware").field("name", &self.name).finish_non_exhaustive()
    }
}
