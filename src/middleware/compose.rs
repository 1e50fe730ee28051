use tracing::debug;

use super::Middleware;

/// Composes a sequence of middleware into one, first element outermost.
///
/// `chain([a, b, c])` is `a.bind(&b).bind(&c)`, i.e. `h -> a(b(c(h)))`.
/// A single element comes back unchanged.
///
/// An empty sequence returns `None`: there is nothing to wrap with, and the
/// caller decides whether to serve the handler bare. This is deliberately not
/// an identity middleware, so forgetting the check is a type error rather
/// than a silent pass-through.
///
/// ```rust
/// use chainware::{chain, Middleware, Request};
///
/// let log = Middleware::from_fn(|req, next| async move { next.call(req).await });
/// let auth = Middleware::from_fn(|req, next| async move { next.call(req).await });
///
/// async fn hello(_req: Request) -> &'static str { "hello" }
///
/// let stack = chain([log, auth]).expect("non-empty");
/// let h1 = stack.call(hello);
/// let h2 = stack.call(hello);
/// # drop((h1, h2));
///
/// assert!(chain(Vec::<Middleware>::new()).is_none());
/// ```
pub fn chain<I>(mws: I) -> Option<Middleware>
where
    I: IntoIterator<Item = Middleware>,
{
    let mut mws = mws.into_iter();
    let Some(first) = mws.next() else {
        debug!("empty middleware chain, nothing to wrap");
        return None;
    };

    let mut layers = 1usize;
    let composite = mws.fold(first, |acc, mw| {
        layers += 1;
        acc.bind(&mw)
    });

    debug!(layers, chain = %composite.name(), "middleware chain composed");
    Some(composite)
}
