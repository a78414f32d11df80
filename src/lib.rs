//! An in-memory authoritative master file for hickory-dns.
//!
//! A [`MasterFile`] holds resource records in insertion order and answers
//! [`Request`]s through the [`RequestResolver`] contract, matching owner names
//! that may contain `*` wildcard labels.

pub mod error;
pub mod resolver;
pub mod rr;
pub mod zone;

pub use self::error::ZoneError;
pub use self::resolver::{Question, Request, RequestResolver, ResolverError, Response, ZoneService};
pub use self::zone::{MasterFile, SharedMasterFile, ZoneConfig};
