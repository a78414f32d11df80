//! Tower service over a shared master file.

use std::{
    convert::Infallible,
    task::{Context, Poll},
};

use futures::future::{Ready, ready};

use super::{Request, Response};
use crate::zone::SharedMasterFile;

/// A [`tower::Service`] answering requests from a [`SharedMasterFile`].
///
/// Lookups never suspend, so the returned future is always ready and the
/// service is always ready to accept a request.
///
/// # Examples
///
/// ```rust
/// use tower::ServiceExt as _;
/// use walnut_masterfile::{MasterFile, Question, Request, ZoneService, rr::RecordType};
///
/// # futures::executor::block_on(async {
/// let mut zone = MasterFile::new();
/// zone.add_ip_address_record_str("www.example.com", "10.0.0.1").unwrap();
///
/// let service = ZoneService::from(zone);
/// let request = Request::from_questions(
///     1,
///     [Question::new("www.example.com".parse().unwrap(), RecordType::A)],
/// );
/// let response = service.oneshot(request).await.unwrap();
/// assert_eq!(response.answer_records().len(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZoneService {
    zone: SharedMasterFile,
}

impl ZoneService {
    pub fn new(zone: SharedMasterFile) -> Self {
        Self { zone }
    }

    /// The master file this service answers from.
    pub fn zone(&self) -> &SharedMasterFile {
        &self.zone
    }
}

impl From<SharedMasterFile> for ZoneService {
    fn from(zone: SharedMasterFile) -> Self {
        Self::new(zone)
    }
}

impl From<crate::zone::MasterFile> for ZoneService {
    fn from(zone: crate::zone::MasterFile) -> Self {
        Self::new(zone.into())
    }
}

impl tower::Service<Request> for ZoneService {
    type Response = Response;
    type Error = Infallible;
    type Future = Ready<Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request) -> Self::Future {
        tracing::trace!(id = req.id(), questions = req.questions().len(), "zone service request");
        ready(Ok(self.zone.snapshot().answer(&req)))
    }
}
