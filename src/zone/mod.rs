//! In-memory master file
//!
//! [`MasterFile`] is an authoritative record store which answers questions by
//! scanning every record it holds, in insertion order, for a matching type and
//! a matching owner name. Owner names may contain `*` labels, see
//! [`wildcard::matches`].
//!
//! # Concurrency
//!
//! A master file has no internal locking. Every mutation takes `&mut self`, so
//! a store shared between tasks must be serialized by its owner, for example
//! with a lock, or by handing it to a [`SharedMasterFile`], which applies
//! mutations copy-on-write and lets lookups proceed without blocking.

use std::net::IpAddr;

use hickory_proto::op::ResponseCode;
use tokio_util::sync::CancellationToken;

use crate::error::ZoneError;
use crate::resolver::{Request, RequestResolver, ResolverError, Response};
use crate::rr::{
    CanonicalNameRecord, IPAddressRecord, MailExchangeRecord, Name, NameServerRecord,
    PointerRecord, Record, RecordType, ResourceRecord, TextRecord, TimeToLive,
};

mod config;
mod shared;
pub mod wildcard;

pub use self::config::ZoneConfig;
pub use self::shared::SharedMasterFile;

/// An ordered, in-memory collection of resource records.
///
/// Duplicate records are allowed and kept. Removal is by structural equality
/// (see [`ResourceRecord::same_record`]) and removes the first equal record.
///
/// The typed helpers give address, name server, canonical name and pointer
/// records the store's default TTL. Mail exchange and text records are built
/// with a zero TTL regardless of the store's default.
#[derive(Debug, Clone, Default)]
pub struct MasterFile {
    entries: Vec<Record>,
    ttl: TimeToLive,
}

impl MasterFile {
    /// Create an empty master file with a zero default TTL.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty master file whose helpers use `ttl` as the default TTL.
    pub fn with_ttl(ttl: TimeToLive) -> Self {
        Self {
            entries: Vec::new(),
            ttl,
        }
    }

    /// Create an empty master file using the default TTL from `config`.
    pub fn with_config(config: &ZoneConfig) -> Self {
        Self::with_ttl(config.default_ttl)
    }

    /// The TTL applied by the typed helpers.
    pub fn default_ttl(&self) -> TimeToLive {
        self.ttl
    }

    /// Iterate over all records, in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a record structurally equal to `record` is present.
    pub fn contains(&self, record: &dyn ResourceRecord) -> bool {
        self.position(record).is_some()
    }

    fn position(&self, record: &dyn ResourceRecord) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.same_record(record))
    }
}

impl MasterFile {
    /// Append a record. Equal records already present are kept.
    pub fn add(&mut self, record: impl Into<Record>) {
        let record = record.into();
        tracing::trace!(%record, "add");
        self.entries.push(record);
    }

    /// Remove the first record structurally equal to `record`.
    ///
    /// Returns `false`, and leaves the store untouched, when no equal record
    /// is present.
    pub fn remove(&mut self, record: &dyn ResourceRecord) -> bool {
        match self.position(record) {
            Some(index) => {
                let removed = self.entries.remove(index);
                tracing::trace!(record = %removed, "remove");
                true
            }
            None => {
                tracing::trace!(name = %record.name(), ty = %record.record_type(), "remove: no equal record");
                false
            }
        }
    }

    /// Remove one equal record for each candidate that is currently present.
    ///
    /// Returns the number of records removed.
    pub fn remove_all<'r, I, R>(&mut self, records: I) -> usize
    where
        I: IntoIterator<Item = &'r R>,
        R: ResourceRecord + 'r,
    {
        records
            .into_iter()
            .filter(|record| self.remove(*record))
            .count()
    }

    /// Remove every record.
    pub fn clear_records(&mut self) {
        tracing::trace!(count = self.entries.len(), "clear records");
        self.entries.clear();
    }

    /// Records of `record_type` whose owner name matches `name`, in insertion order.
    #[tracing::instrument("get", skip_all, fields(name = %name, ty = %record_type), level = "trace")]
    pub fn get(&self, name: &Name, record_type: RecordType) -> Vec<Record> {
        self.entries
            .iter()
            .filter(|entry| entry.record_type() == record_type)
            .filter(|entry| wildcard::matches(name, entry.name()))
            .cloned()
            .collect()
    }
}

impl MasterFile {
    /// Add an `A` or `AAAA` record with the default TTL.
    pub fn add_ip_address_record(&mut self, domain: Name, ip: IpAddr) -> Result<(), ZoneError> {
        self.add(IPAddressRecord::new(domain, ip, self.ttl)?);
        Ok(())
    }

    pub fn add_ip_address_record_str(&mut self, domain: &str, ip: &str) -> Result<(), ZoneError> {
        self.add_ip_address_record(domain.parse::<Name>()?, ip.parse::<IpAddr>()?)
    }

    pub fn remove_ip_address_record(
        &mut self,
        domain: Name,
        ip: IpAddr,
    ) -> Result<bool, ZoneError> {
        Ok(self.remove(&IPAddressRecord::new(domain, ip, self.ttl)?))
    }

    pub fn remove_ip_address_record_str(
        &mut self,
        domain: &str,
        ip: &str,
    ) -> Result<bool, ZoneError> {
        self.remove_ip_address_record(domain.parse::<Name>()?, ip.parse::<IpAddr>()?)
    }

    /// Add an `NS` record with the default TTL.
    pub fn add_name_server_record(&mut self, domain: Name, ns_domain: Name) -> Result<(), ZoneError> {
        self.add(NameServerRecord::new(domain, ns_domain, self.ttl)?);
        Ok(())
    }

    pub fn add_name_server_record_str(
        &mut self,
        domain: &str,
        ns_domain: &str,
    ) -> Result<(), ZoneError> {
        self.add_name_server_record(domain.parse::<Name>()?, ns_domain.parse::<Name>()?)
    }

    pub fn remove_name_server_record(
        &mut self,
        domain: Name,
        ns_domain: Name,
    ) -> Result<bool, ZoneError> {
        Ok(self.remove(&NameServerRecord::new(domain, ns_domain, self.ttl)?))
    }

    pub fn remove_name_server_record_str(
        &mut self,
        domain: &str,
        ns_domain: &str,
    ) -> Result<bool, ZoneError> {
        self.remove_name_server_record(domain.parse::<Name>()?, ns_domain.parse::<Name>()?)
    }

    /// Add a `CNAME` record with the default TTL.
    pub fn add_canonical_name_record(&mut self, domain: Name, cname: Name) -> Result<(), ZoneError> {
        self.add(CanonicalNameRecord::new(domain, cname, self.ttl)?);
        Ok(())
    }

    pub fn add_canonical_name_record_str(
        &mut self,
        domain: &str,
        cname: &str,
    ) -> Result<(), ZoneError> {
        self.add_canonical_name_record(domain.parse::<Name>()?, cname.parse::<Name>()?)
    }

    pub fn remove_canonical_name_record(
        &mut self,
        domain: Name,
        cname: Name,
    ) -> Result<bool, ZoneError> {
        Ok(self.remove(&CanonicalNameRecord::new(domain, cname, self.ttl)?))
    }

    pub fn remove_canonical_name_record_str(
        &mut self,
        domain: &str,
        cname: &str,
    ) -> Result<bool, ZoneError> {
        self.remove_canonical_name_record(domain.parse::<Name>()?, cname.parse::<Name>()?)
    }

    /// Add a `PTR` record for `ip` with the default TTL.
    pub fn add_pointer_record(&mut self, ip: IpAddr, pointer: Name) -> Result<(), ZoneError> {
        self.add(PointerRecord::new(ip, pointer, self.ttl)?);
        Ok(())
    }

    pub fn add_pointer_record_str(&mut self, ip: &str, pointer: &str) -> Result<(), ZoneError> {
        self.add_pointer_record(ip.parse::<IpAddr>()?, pointer.parse::<Name>()?)
    }

    pub fn remove_pointer_record(&mut self, ip: IpAddr, pointer: Name) -> Result<bool, ZoneError> {
        Ok(self.remove(&PointerRecord::new(ip, pointer, self.ttl)?))
    }

    pub fn remove_pointer_record_str(&mut self, ip: &str, pointer: &str) -> Result<bool, ZoneError> {
        self.remove_pointer_record(ip.parse::<IpAddr>()?, pointer.parse::<Name>()?)
    }

    /// Add an `MX` record. The default TTL is not applied.
    pub fn add_mail_exchange_record(
        &mut self,
        domain: Name,
        preference: u16,
        exchange: Name,
    ) -> Result<(), ZoneError> {
        self.add(MailExchangeRecord::new(domain, preference, exchange)?);
        Ok(())
    }

    pub fn add_mail_exchange_record_str(
        &mut self,
        domain: &str,
        preference: u16,
        exchange: &str,
    ) -> Result<(), ZoneError> {
        self.add_mail_exchange_record(domain.parse::<Name>()?, preference, exchange.parse::<Name>()?)
    }

    pub fn remove_mail_exchange_record(
        &mut self,
        domain: Name,
        preference: u16,
        exchange: Name,
    ) -> Result<bool, ZoneError> {
        Ok(self.remove(&MailExchangeRecord::new(domain, preference, exchange)?))
    }

    pub fn remove_mail_exchange_record_str(
        &mut self,
        domain: &str,
        preference: u16,
        exchange: &str,
    ) -> Result<bool, ZoneError> {
        self.remove_mail_exchange_record(
            domain.parse::<Name>()?,
            preference,
            exchange.parse::<Name>()?,
        )
    }

    /// Add a `TXT` attribute record. The default TTL is not applied.
    pub fn add_text_record(
        &mut self,
        domain: Name,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<(), ZoneError> {
        self.add(TextRecord::new(
            domain,
            attribute_name,
            attribute_value,
            TimeToLive::ZERO,
        )?);
        Ok(())
    }

    pub fn add_text_record_str(
        &mut self,
        domain: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<(), ZoneError> {
        self.add_text_record(domain.parse::<Name>()?, attribute_name, attribute_value)
    }

    pub fn remove_text_record(
        &mut self,
        domain: Name,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<bool, ZoneError> {
        Ok(self.remove(&TextRecord::new(
            domain,
            attribute_name,
            attribute_value,
            TimeToLive::ZERO,
        )?))
    }

    pub fn remove_text_record_str(
        &mut self,
        domain: &str,
        attribute_name: &str,
        attribute_value: &str,
    ) -> Result<bool, ZoneError> {
        self.remove_text_record(domain.parse::<Name>()?, attribute_name, attribute_value)
    }
}

impl MasterFile {
    /// Answer every question in `request` from this master file.
    ///
    /// Answers are appended in question order. A question with no matching
    /// record sets the response code to `NXDomain`, and nothing resets it, so
    /// a single unmatched question marks the whole response as a name error
    /// even when other questions were answered.
    #[tracing::instrument("answer", skip_all, fields(id = request.id()), level = "trace")]
    pub fn answer(&self, request: &Request) -> Response {
        let mut response = Response::from_request(request);

        for question in request.questions() {
            let answers = self.get(question.name(), question.record_type());

            if answers.is_empty() {
                tracing::trace!(name = %question.name(), ty = %question.record_type(), "no matching records");
                response.set_response_code(ResponseCode::NXDomain);
            } else {
                tracing::trace!(name = %question.name(), ty = %question.record_type(), count = answers.len(), "matched");
                response.add_answers(answers);
            }
        }

        tracing::debug!(
            answers = response.answer_records().len(),
            code = %response.response_code(),
            "answered request"
        );
        response
    }
}

/// Lookups never block, so cancellation is not observed.
#[async_trait::async_trait]
impl RequestResolver for MasterFile {
    async fn resolve(
        &self,
        request: &Request,
        _cancel: &CancellationToken,
    ) -> Result<Response, ResolverError> {
        Ok(self.answer(request))
    }
}

impl Extend<Record> for MasterFile {
    fn extend<T: IntoIterator<Item = Record>>(&mut self, iter: T) {
        for record in iter {
            self.add(record);
        }
    }
}

impl FromIterator<Record> for MasterFile {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        let mut zone = MasterFile::new();
        zone.extend(iter);
        zone
    }
}
