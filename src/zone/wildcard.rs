//! Wildcard owner-name matching
//!
//! A stored name may contain labels that are literally `*`. Each such label
//! matches exactly one label of one or more word characters in the queried
//! name. Every other label must match byte for byte, and the label counts must
//! be equal.

use std::sync::LazyLock;

use regex::bytes::Regex;

use crate::rr::Name;

static WORD_LABEL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"^\w+$"));

/// Check whether a queried name is matched by a stored entry name.
///
/// Labels are compared on their raw bytes, so labels holding escaped dots or
/// non-UTF-8 bytes never match a different label.
pub fn matches(query: &Name, entry: &Name) -> bool {
    if query.labels().count() != entry.labels().count() {
        return false;
    }

    query
        .labels()
        .zip(entry.labels())
        .all(|(label, pattern)| match pattern {
            b"*" => is_word_label(label),
            _ => label == pattern,
        })
}

fn is_word_label(label: &[u8]) -> bool {
    match &*WORD_LABEL {
        Ok(re) => re.is_match(label),
        Err(error) => {
            tracing::warn!("wildcard label pattern failed to compile: {error}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(value: &str) -> Name {
        Name::parse(value).unwrap()
    }

    #[test]
    fn test_exact_match() {
        assert!(matches(&name("www.example.com"), &name("www.example.com")));
        assert!(!matches(&name("ftp.example.com"), &name("www.example.com")));
    }

    #[test]
    fn test_fqdn_query_matches_relative_entry() {
        assert!(matches(&name("www.example.com."), &name("www.example.com")));
    }

    #[test]
    fn test_wildcard_single_label() {
        let entry = name("*.example.com");
        assert!(matches(&name("foo.example.com"), &entry));
        assert!(matches(&name("test.example.com"), &entry));
    }

    #[test]
    fn test_wildcard_label_count_must_match() {
        let entry = name("*.example.com");
        assert!(!matches(&name("example.com"), &entry));
        assert!(!matches(&name("a.b.example.com"), &entry));
    }

    #[test]
    fn test_wildcard_requires_word_characters() {
        let entry = name("*.example.com");
        assert!(matches(&name("host_1.example.com"), &entry));
        assert!(!matches(&name("my-host.example.com"), &entry));
    }

    #[test]
    fn test_wildcard_in_middle() {
        let entry = name("www.*.example.com");
        assert!(matches(&name("www.eu.example.com"), &entry));
        assert!(!matches(&name("ftp.eu.example.com"), &entry));
    }

    #[test]
    fn test_bare_wildcard_matches_any_single_label() {
        let entry = name("*");
        assert!(matches(&name("localhost"), &entry));
        assert!(!matches(&name("example.com"), &entry));
    }

    #[test]
    fn test_literal_dots_are_escaped() {
        assert!(!matches(&name("wwwxexample.com"), &name("www.example.com")));
    }

    #[test]
    fn test_escaped_dot_keeps_label_count() {
        let entry = name(r"a\.b.example.com");
        assert_eq!(entry.labels().count(), 3);
        assert!(!matches(&name("a.b.example.com"), &entry));
        assert!(matches(&name(r"a\.b.example.com"), &entry));
        assert!(!matches(&name(r"a\.b.example.com"), &name("*.example.com")));
    }

    #[test]
    fn test_binary_labels_compare_raw_bytes() {
        let binary = |first: u8| -> Name {
            hickory_proto::rr::Name::from_labels([&[first][..], &b"example"[..], &b"com"[..]])
                .unwrap()
                .into()
        };
        let entry = binary(0xff);
        let query = binary(0xfe);

        assert_ne!(entry, query);
        assert!(!matches(&query, &entry));
        assert!(matches(&binary(0xff), &entry));
        assert!(!matches(&query, &name("*.example.com")));
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert!(!matches(&name("WWW.example.com"), &name("www.example.com")));
        assert!(matches(&name("Foo.example.com"), &name("*.example.com")));
    }
}
