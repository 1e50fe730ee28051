//! Bridge from a composed handler to hyper.
//!
//! chainware does not listen on sockets. Whatever server the host runs
//! (hyper directly, `hyper-util`'s auto builder, …) drives a
//! [`HandlerService`], which turns each hyper request into a [`Request`],
//! runs the composed handler, and converts the [`Response`] back.
//!
//! ```rust,ignore
//! let app = chain([trace, auth]).expect("non-empty").call(hello);
//! let svc = HandlerService::new(app);
//!
//! ConnBuilder::new(TokioExecutor::new())
//!     .serve_connection(TokioIo::new(stream), svc.clone())
//!     .await?;
//! ```

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use hyper::body::Body;
use hyper::service::Service;
use tracing::warn;

use crate::error::BoxError;
use crate::handler::BoxedHandler;
use crate::request::Request;
use crate::response::Response;

/// A [`BoxedHandler`] exposed as a hyper [`Service`].
///
/// Cloning is one `Arc` increment, so hand one clone to each connection.
#[derive(Clone, Debug)]
pub struct HandlerService {
    handler: BoxedHandler,
}

impl HandlerService {
    pub fn new(handler: BoxedHandler) -> Self {
        Self { handler }
    }
}

impl From<BoxedHandler> for HandlerService {
    fn from(handler: BoxedHandler) -> Self {
        Self::new(handler)
    }
}

impl<B> Service<http::Request<B>> for HandlerService
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
{
    type Response = http::Response<Full<Bytes>>;
    // Every failure becomes a response, so hyper never sees an error.
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<B>) -> Self::Future {
        let handler = self.handler.clone();
        Box::pin(async move {
            let method = req.method().clone();
            let path = req.uri().path().to_owned();

            let response = match Request::from_http(req).await {
                Ok(req) => handler.call(req).await,
                Err(e) => {
                    warn!(%method, %path, "failed to read request body: {e}");
                    Response::status(StatusCode::BAD_REQUEST)
                }
            };

            Ok(response.into_http())
        })
    }
}
