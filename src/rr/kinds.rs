//! Typed record constructors
//!
//! Each kind owns a fully built [`Record`] alongside the typed values it was
//! built from, and implements [`ResourceRecord`] by forwarding every member to
//! that record. Kinds convert into a plain [`Record`] for storage.

use std::net::IpAddr;

use hickory_proto::{
    ProtoError,
    rr::{
        DNSClass, RData, RecordType,
        rdata::{A, AAAA, CNAME, MX, NS, PTR, TXT},
    },
};

use super::{Name, Record, ResourceRecord, TimeToLive};

macro_rules! impl_record_kind {
    ($name:ident) => {
        impl ResourceRecord for $name {
            fn name(&self) -> &Name {
                self.record.name()
            }

            fn record_type(&self) -> RecordType {
                self.record.record_type()
            }

            fn dns_class(&self) -> DNSClass {
                self.record.dns_class()
            }

            fn ttl(&self) -> TimeToLive {
                self.record.ttl()
            }

            fn data(&self) -> &[u8] {
                self.record.data()
            }

            fn data_length(&self) -> usize {
                self.record.data_length()
            }

            fn size(&self) -> usize {
                self.record.size()
            }

            fn encode(&self) -> Result<Vec<u8>, ProtoError> {
                self.record.encode()
            }
        }

        impl AsRef<Record> for $name {
            fn as_ref(&self) -> &Record {
                &self.record
            }
        }

        impl From<$name> for Record {
            fn from(value: $name) -> Self {
                value.record
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.record, f)
            }
        }
    };
}

/// An `A` or `AAAA` record, depending on the address family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IPAddressRecord {
    record: Record,
    ip: IpAddr,
}

impl IPAddressRecord {
    pub fn new(domain: Name, ip: IpAddr, ttl: TimeToLive) -> Result<Self, ProtoError> {
        let rdata = match ip {
            IpAddr::V4(ip) => RData::A(A::from(ip)),
            IpAddr::V6(ip) => RData::AAAA(AAAA::from(ip)),
        };

        Ok(Self {
            record: Record::new(domain, ttl, rdata)?,
            ip,
        })
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }
}

impl_record_kind!(IPAddressRecord);

/// An `NS` record delegating `domain` to the name server `ns_domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameServerRecord {
    record: Record,
    ns_domain: Name,
}

impl NameServerRecord {
    pub fn new(domain: Name, ns_domain: Name, ttl: TimeToLive) -> Result<Self, ProtoError> {
        let rdata = RData::NS(NS(ns_domain.clone().into()));
        Ok(Self {
            record: Record::new(domain, ttl, rdata)?,
            ns_domain,
        })
    }

    pub fn ns_domain(&self) -> &Name {
        &self.ns_domain
    }
}

impl_record_kind!(NameServerRecord);

/// A `CNAME` record aliasing `domain` to `canonical_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalNameRecord {
    record: Record,
    canonical_name: Name,
}

impl CanonicalNameRecord {
    pub fn new(domain: Name, canonical_name: Name, ttl: TimeToLive) -> Result<Self, ProtoError> {
        let rdata = RData::CNAME(CNAME(canonical_name.clone().into()));
        Ok(Self {
            record: Record::new(domain, ttl, rdata)?,
            canonical_name,
        })
    }

    pub fn canonical_name(&self) -> &Name {
        &self.canonical_name
    }
}

impl_record_kind!(CanonicalNameRecord);

/// A `PTR` record owned by the reverse-lookup name of an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointerRecord {
    record: Record,
    ip: IpAddr,
    pointer_domain: Name,
}

impl PointerRecord {
    pub fn new(ip: IpAddr, pointer_domain: Name, ttl: TimeToLive) -> Result<Self, ProtoError> {
        let rdata = RData::PTR(PTR(pointer_domain.clone().into()));
        Ok(Self {
            record: Record::new(Name::reverse_pointer(ip)?, ttl, rdata)?,
            ip,
            pointer_domain,
        })
    }

    pub fn ip(&self) -> IpAddr {
        self.ip
    }

    pub fn pointer_domain(&self) -> &Name {
        &self.pointer_domain
    }
}

impl_record_kind!(PointerRecord);

/// An `MX` record.
///
/// Mail exchange records carry no TTL unless one is given explicitly with
/// [`MailExchangeRecord::with_ttl`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailExchangeRecord {
    record: Record,
    preference: u16,
    exchange_domain: Name,
}

impl MailExchangeRecord {
    pub fn new(domain: Name, preference: u16, exchange_domain: Name) -> Result<Self, ProtoError> {
        Self::with_ttl(domain, preference, exchange_domain, TimeToLive::ZERO)
    }

    pub fn with_ttl(
        domain: Name,
        preference: u16,
        exchange_domain: Name,
        ttl: TimeToLive,
    ) -> Result<Self, ProtoError> {
        let rdata = RData::MX(MX::new(preference, exchange_domain.clone().into()));
        Ok(Self {
            record: Record::new(domain, ttl, rdata)?,
            preference,
            exchange_domain,
        })
    }

    pub fn preference(&self) -> u16 {
        self.preference
    }

    pub fn exchange_domain(&self) -> &Name {
        &self.exchange_domain
    }
}

impl_record_kind!(MailExchangeRecord);

/// A `TXT` record holding one attribute in the
/// [RFC 1464](https://tools.ietf.org/html/rfc1464) `name=value` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    record: Record,
    attribute_name: String,
    attribute_value: String,
}

impl TextRecord {
    pub fn new(
        domain: Name,
        attribute_name: &str,
        attribute_value: &str,
        ttl: TimeToLive,
    ) -> Result<Self, ProtoError> {
        let text = format!("{}={}", escape_attribute_name(attribute_name), attribute_value);
        let rdata = RData::TXT(TXT::new(vec![text]));
        Ok(Self {
            record: Record::new(domain, ttl, rdata)?,
            attribute_name: attribute_name.to_owned(),
            attribute_value: attribute_value.to_owned(),
        })
    }

    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn attribute_value(&self) -> &str {
        &self.attribute_value
    }
}

impl_record_kind!(TextRecord);

// RFC 1464 uses a backquote to quote `=` and itself inside the attribute name.
fn escape_attribute_name(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len());
    for c in name.chars() {
        if c == '`' || c == '=' {
            escaped.push('`');
        }
        escaped.push(c);
    }
    escaped
}
