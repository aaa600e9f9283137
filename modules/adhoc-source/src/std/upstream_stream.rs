use futures::stream::BoxStream;

use crate::core::UpstreamCause;

/// Upstream instance as driven on tokio: a boxed stream of elements or failures.
pub type UpstreamStream<T> = BoxStream<'static, Result<T, UpstreamCause>>;
