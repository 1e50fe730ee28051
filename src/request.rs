//! Incoming HTTP request type.

use bytes::Bytes;
use http::request::Parts;
use http::{Extensions, HeaderMap, Method, Uri};
use http_body_util::BodyExt;

use crate::error::{BoxError, Error};

/// An incoming HTTP request with its body fully buffered.
///
/// Middleware that needs to hand data to inner layers for the current
/// invocation only (an authenticated user, a request id) puts it in
/// [`extensions_mut`](Request::extensions_mut).
#[derive(Debug)]
pub struct Request {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    extensions: Extensions,
}

impl Request {
    pub fn from_parts(parts: Parts, body: Bytes) -> Self {
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
            extensions: parts.extensions,
        }
    }

    /// Buffers the body of a hyper request and converts it.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the body stream fails before its end.
    pub async fn from_http<B>(req: http::Request<B>) -> Result<Self, Error>
    where
        B: hyper::body::Body,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = req.into_parts();
        let body = body.collect().await.map_err(Error::body)?.to_bytes();
        Ok(Self::from_parts(parts, body))
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn uri(&self) -> &Uri { &self.uri }
    pub fn path(&self) -> &str { self.uri.path() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }
    pub fn extensions(&self) -> &Extensions { &self.extensions }
    pub fn extensions_mut(&mut self) -> &mut Extensions { &mut self.extensions }

    /// Case-insensitive header lookup. `None` if absent or not valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl From<http::Request<Bytes>> for Request {
    fn from(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self::from_parts(parts, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> Request {
        http::Request::builder()
            .method(Method::POST)
            .uri("/users/42?verbose=1")
            .header("X-Request-Id", "abc")
            .body(Bytes::from_static(b"{}"))
            .unwrap()
            .into()
    }

    #[test]
    fn exposes_parts() {
        let req = request();
        assert_eq!(*req.method(), Method::POST);
        assert_eq!(req.path(), "/users/42");
        assert_eq!(req.uri().query(), Some("verbose=1"));
        assert_eq!(req.body(), b"{}");
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request();
        assert_eq!(req.header("x-request-id"), Some("abc"));
        assert_eq!(req.header("X-REQUEST-ID"), Some("abc"));
        assert_eq!(req.header("authorization"), None);
    }

    #[test]
    fn extensions_are_per_request() {
        #[derive(Clone, Debug, PartialEq)]
        struct User(&'static str);

        let mut req = request();
        req.extensions_mut().insert(User("alice"));
        assert_eq!(req.extensions().get::<User>(), Some(&User("alice")));
        assert!(request().extensions().get::<User>().is_none());
    }
}
