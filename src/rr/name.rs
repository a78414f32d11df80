use std::{
    fmt,
    hash::{Hash, Hasher},
    net::IpAddr,
    ops::Deref,
    str::FromStr,
};

use hickory_proto::ProtoError;

/// DNS Name with case preserved.
///
/// Two names are equal when they have the same labels, byte for byte. Unlike
/// [`hickory_proto::rr::Name`], comparison is case-sensitive and ignores whether
/// the name is fully qualified, so `Example.com` and `example.com` differ while
/// `example.com` and `example.com.` are the same name.
///
/// The [`Display`](fmt::Display) form is the escaped presentation form without
/// the trailing root label.
#[derive(Debug, Clone)]
pub struct Name(hickory_proto::rr::Name);

impl Deref for Name {
    type Target = hickory_proto::rr::Name;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Name {
    /// Parse a name from its presentation form.
    ///
    /// ASCII input keeps its case. Anything else goes through IDNA, which
    /// lowercases as part of the punycode conversion.
    pub fn parse(value: &str) -> Result<Self, ProtoError> {
        let name = if value.is_ascii() {
            hickory_proto::rr::Name::from_ascii(value)?
        } else {
            hickory_proto::rr::Name::from_utf8(value)?
        };
        Ok(Name(name))
    }

    pub fn root() -> Self {
        Name(hickory_proto::rr::Name::root())
    }

    /// The reverse-lookup name for an address, e.g. `1.0.0.10.in-addr.arpa.`
    /// for `10.0.0.1`.
    pub fn reverse_pointer(ip: IpAddr) -> Result<Self, ProtoError> {
        let reversed = match ip {
            IpAddr::V4(ip) => {
                let octets = ip.octets();
                format!(
                    "{}.{}.{}.{}.in-addr.arpa.",
                    octets[3], octets[2], octets[1], octets[0]
                )
            }
            IpAddr::V6(ip) => {
                let mut labels = String::with_capacity(72);
                for byte in ip.octets().iter().rev() {
                    labels.push_str(&format!("{:x}.{:x}.", byte & 0x0f, byte >> 4));
                }
                labels.push_str("ip6.arpa.");
                labels
            }
        };

        Name::parse(&reversed)
    }

    /// Raw label bytes, leftmost first.
    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter()
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for label in self.0.iter() {
            label.hash(state);
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().next().is_none() {
            return Ok(());
        }

        let mut relative = self.0.clone();
        relative.set_fqdn(false);
        f.write_str(&relative.to_ascii())
    }
}

impl FromStr for Name {
    type Err = ProtoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::parse(s)
    }
}

impl From<hickory_proto::rr::Name> for Name {
    fn from(value: hickory_proto::rr::Name) -> Self {
        Name(value)
    }
}

impl From<Name> for hickory_proto::rr::Name {
    fn from(value: Name) -> Self {
        value.0
    }
}
