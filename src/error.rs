use std::net::AddrParseError;

use hickory_proto::ProtoError;

/// Errors raised while building records for a master file.
///
/// Lookups never fail; only the record helpers that parse names and addresses,
/// or encode record data, return this error.
#[derive(Debug, thiserror::Error)]
pub enum ZoneError {
    #[error("dns protocol error: {0}")]
    Protocol(#[from] ProtoError),

    #[error("invalid ip address: {0}")]
    Address(#[from] AddrParseError),
}
