//! Handler trait and type erasure.
//!
//! # Two shapes of handler
//!
//! Middleware transforms handlers into handlers, so every layer needs to see
//! the same concrete type no matter what the user originally wrote. That
//! type is [`BoxedHandler`]: a type-erased, reference-counted capability.
//!
//! Users rarely build one by hand. They write a plain `async fn` (or a
//! closure) and let [`Handler`] coerce it:
//!
//! ```text
//! async fn hello(req: Request) -> Response { … }   ← user writes this
//!        ↓ mw.call(hello) / BoxedHandler::new(hello)
//! hello.into_boxed_handler()                       ← Handler blanket impl
//!        ↓
//! BoxedHandler(Arc::new(FnHandler(hello)))         ← heap-allocated wrapper
//!        ↓  wrapped by each middleware layer
//! handler.call(req)  at request time               ← one vtable dispatch per layer
//!        ↓
//! Box::pin(async { hello(req).await.into_response() })  ← BoxFuture
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::{IntoResponse, Response};

// ── Erased types ──────────────────────────────────────────────────────────────

/// A heap-allocated, type-erased future that resolves to a [`Response`].
///
/// `Send + 'static` so the host runtime can move it across threads.
pub type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
///
/// This is the value middleware receives and returns. Cloning it is one
/// atomic reference-count increment; the wrapped handler is never copied.
///
/// ```rust
/// use chainware::{BoxedHandler, Request};
///
/// async fn hello(_req: Request) -> &'static str { "hello" }
///
/// let handler = BoxedHandler::new(hello);
/// let shared = handler.clone();
/// # drop(shared);
/// ```
#[derive(Clone)]
pub struct BoxedHandler(Arc<dyn ErasedHandler + Send + Sync + 'static>);

impl BoxedHandler {
    /// Coerces a plain handler function into the erased form.
    pub fn new(handler: impl Handler) -> Self {
        handler.into_boxed_handler()
    }

    /// Processes one request.
    pub fn call(&self, req: Request) -> BoxFuture {
        self.0.call(req)
    }
}

impl fmt::Debug for BoxedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedHandler").finish_non_exhaustive()
    }
}

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every plain handler function.
///
/// You never implement this yourself. It is automatically satisfied for any
/// `async fn` or closure with the signature:
///
/// ```text
/// Fn(Request) -> impl Future<Output = impl IntoResponse>
/// ```
///
/// The trait is **sealed**: only the blanket impl below can satisfy it.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        BoxedHandler(Arc::new(FnHandler(self)))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Bridges a concrete handler `F` to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoResponse + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_response() })
    }
}
