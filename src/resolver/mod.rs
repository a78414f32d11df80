//! Request resolution
//!
//! [`RequestResolver`] is the contract shared by everything that can turn a
//! [`Request`] into a [`Response`]. A [`MasterFile`](crate::MasterFile) answers
//! without suspending, but the contract is asynchronous so that it composes
//! with resolvers which do network I/O.

use tokio_util::sync::CancellationToken;

mod message;
mod service;

pub use self::message::{Question, Request, Response};
pub use self::service::ZoneService;

pub type ResolverError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait::async_trait]
pub trait RequestResolver {
    /// Resolve every question in a request.
    ///
    /// Implementations which do no blocking work may ignore `cancel`.
    async fn resolve(
        &self,
        request: &Request,
        cancel: &CancellationToken,
    ) -> Result<Response, ResolverError>;
}
