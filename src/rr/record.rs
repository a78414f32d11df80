use std::fmt;

use hickory_proto::{
    ProtoError,
    rr::{DNSClass, RData, RecordType},
    serialize::binary::BinEncodable as _,
};

use super::{AsHickory, name::Name, ttl::TimeToLive};

/// A single DNS answer entry.
///
/// This is the capability set every record in a master file shares: it is a
/// named, typed and classed message entry carrying a TTL and opaque data, and it
/// can be compared structurally against any other record.
pub trait ResourceRecord: fmt::Debug {
    /// Owner name of the record
    fn name(&self) -> &Name;

    /// Record Type of the record resource
    fn record_type(&self) -> RecordType;

    /// DNS Class of the record resource
    fn dns_class(&self) -> DNSClass;

    /// Time to Live of the record resource
    fn ttl(&self) -> TimeToLive;

    /// Wire-encoded RDATA
    fn data(&self) -> &[u8];

    /// Length of the wire-encoded RDATA
    fn data_length(&self) -> usize {
        self.data().len()
    }

    /// Size of the whole record on the wire, with an uncompressed owner name
    fn size(&self) -> usize;

    /// Encode the whole record in wire format
    fn encode(&self) -> Result<Vec<u8>, ProtoError>;

    /// Structural equality over name, type, class, ttl, data, data length and size.
    fn same_record(&self, other: &dyn ResourceRecord) -> bool {
        self.name() == other.name()
            && self.record_type() == other.record_type()
            && self.dns_class() == other.dns_class()
            && self.ttl() == other.ttl()
            && self.data_length() == other.data_length()
            && self.data() == other.data()
            && self.size() == other.size()
    }
}

/// DNS Resource Record
///
/// Records are immutable values. The wire form of the RDATA and the size of the
/// full record are computed once when the record is built.
#[derive(Debug, Clone)]
pub struct Record {
    name_labels: Name,
    dns_class: DNSClass,
    ttl: TimeToLive,
    rdata: RData,
    data: Box<[u8]>,
    size: usize,
}

/// [RFC 1033](https://tools.ietf.org/html/rfc1033)
///
/// ```text
///           <name>   [<ttl>]   [<class>]   <type>   <data>
/// ```
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(
            f,
            "{name} {ttl} {class} {ty} {rdata}",
            name = self.name_labels,
            ttl = self.ttl,
            class = self.dns_class,
            ty = self.record_type(),
            rdata = self.rdata,
        )
    }
}

impl Record {
    /// Build an `IN` class record from its record data.
    pub fn new(name: Name, ttl: TimeToLive, rdata: RData) -> Result<Self, ProtoError> {
        Self::with_class(name, DNSClass::IN, ttl, rdata)
    }

    pub fn with_class(
        name: Name,
        dns_class: DNSClass,
        ttl: TimeToLive,
        rdata: RData,
    ) -> Result<Self, ProtoError> {
        let data = rdata.to_bytes()?.into_boxed_slice();
        let mut record = Record {
            name_labels: name,
            dns_class,
            ttl,
            rdata,
            data,
            size: 0,
        };
        record.size = record.encode()?.len();
        Ok(record)
    }

    /// Record Data of the record resource
    pub fn rdata(&self) -> &RData {
        &self.rdata
    }
}

impl ResourceRecord for Record {
    fn name(&self) -> &Name {
        &self.name_labels
    }

    fn record_type(&self) -> RecordType {
        self.rdata.record_type()
    }

    fn dns_class(&self) -> DNSClass {
        self.dns_class
    }

    fn ttl(&self) -> TimeToLive {
        self.ttl
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn size(&self) -> usize {
        self.size
    }

    fn encode(&self) -> Result<Vec<u8>, ProtoError> {
        self.as_hickory().to_bytes()
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.same_record(other)
    }
}

impl Eq for Record {}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

impl AsHickory for Record {
    type Hickory = hickory_proto::rr::Record;

    fn as_hickory(&self) -> Self::Hickory {
        let mut record = hickory_proto::rr::Record::from_rdata(
            self.name().clone().into(),
            self.ttl().into(),
            self.rdata().clone(),
        );
        record.set_dns_class(self.dns_class);
        record
    }
}
