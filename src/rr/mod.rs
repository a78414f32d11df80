//! Resource Record Definitions for DNS

mod kinds;
mod name;
mod record;
mod ttl;

pub use self::kinds::{
    CanonicalNameRecord, IPAddressRecord, MailExchangeRecord, NameServerRecord, PointerRecord,
    TextRecord,
};
pub use self::name::Name;
pub use self::record::{Record, ResourceRecord};
pub use self::ttl::TimeToLive;

pub use hickory_proto::rr::{DNSClass, RData, RecordType};

/// Trait for converting walnut-masterfile types to their hickory-dns equivalents
///
/// This trait provides a consistent interface for converting internal types
/// to their hickory-dns counterparts, so that answers can be handed to the
/// hickory-dns wire encoder.
pub trait AsHickory {
    /// The corresponding hickory-dns type
    type Hickory;

    /// Convert this type to its hickory-dns equivalent
    fn as_hickory(&self) -> Self::Hickory;
}
