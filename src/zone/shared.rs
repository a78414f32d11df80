use std::{fmt, sync::Arc};

use arc_swap::ArcSwap;
use tokio_util::sync::CancellationToken;

use super::MasterFile;
use crate::resolver::{Request, RequestResolver, ResolverError, Response};

/// A master file shared between tasks.
///
/// Readers take a snapshot of the current store and never block. Writers
/// apply their mutation to a copy of the store and swap it in, so a lookup
/// sees either all of a mutation or none of it. Concurrent writers are
/// serialized by retrying: the update closure may run more than once.
#[derive(Clone)]
pub struct SharedMasterFile {
    inner: Arc<ArcSwap<MasterFile>>,
}

impl fmt::Debug for SharedMasterFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedMasterFile")
            .field("records", &self.inner.load().len())
            .finish()
    }
}

impl Default for SharedMasterFile {
    fn default() -> Self {
        Self::new(MasterFile::default())
    }
}

impl From<MasterFile> for SharedMasterFile {
    fn from(zone: MasterFile) -> Self {
        Self::new(zone)
    }
}

impl SharedMasterFile {
    pub fn new(zone: MasterFile) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(zone)),
        }
    }

    /// The current contents of the master file.
    pub fn snapshot(&self) -> Arc<MasterFile> {
        self.inner.load_full()
    }

    /// Apply a mutation to the master file.
    pub fn update<F>(&self, mut f: F)
    where
        F: FnMut(&mut MasterFile),
    {
        self.inner.rcu(|current| {
            let mut next = MasterFile::clone(current);
            f(&mut next);
            next
        });
    }

    /// Apply a fallible mutation to the master file.
    ///
    /// When the closure fails, the master file is left as it was and the
    /// error from the last attempt is returned.
    pub fn try_update<F, E>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&mut MasterFile) -> Result<(), E>,
    {
        let mut failure = None;
        self.inner.rcu(|current| {
            let mut next = MasterFile::clone(current);
            match f(&mut next) {
                Ok(()) => {
                    failure = None;
                    Arc::new(next)
                }
                Err(error) => {
                    failure = Some(error);
                    Arc::clone(current)
                }
            }
        });

        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl RequestResolver for SharedMasterFile {
    async fn resolve(
        &self,
        request: &Request,
        _cancel: &CancellationToken,
    ) -> Result<Response, ResolverError> {
        Ok(self.snapshot().answer(request))
    }
}
