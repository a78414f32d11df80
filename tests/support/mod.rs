#![allow(unused)]

use std::sync::Once;

use walnut_masterfile::{
    MasterFile, Question, Request,
    rr::{Name, RecordType},
};

/// Registers a global default tracing subscriber when called for the first time. This is intended
/// for use in tests.
pub fn subscribe() {
    static INSTALL_TRACING_SUBSCRIBER: Once = Once::new();
    INSTALL_TRACING_SUBSCRIBER.call_once(|| {
        let subscriber = tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber).unwrap();
    });
}

pub fn name(value: &str) -> Name {
    Name::parse(value).unwrap()
}

/// A request with one `IN` question per `(name, type)` pair.
pub fn request(id: u16, questions: &[(&str, RecordType)]) -> Request {
    Request::from_questions(
        id,
        questions
            .iter()
            .map(|(owner, record_type)| Question::new(name(owner), *record_type)),
    )
}

/// example.com with a handful of records of every kind the helpers know about.
#[allow(clippy::unreadable_literal)]
pub fn create_example() -> MasterFile {
    let mut zone = MasterFile::new();

    zone.add_name_server_record_str("example.com", "a.iana-servers.net")
        .unwrap();
    zone.add_name_server_record_str("example.com", "b.iana-servers.net")
        .unwrap();
    zone.add_ip_address_record_str("example.com", "93.184.215.14")
        .unwrap();
    zone.add_ip_address_record_str("example.com", "2606:2800:21f:cb07:6820:80da:af6b:8b2c")
        .unwrap();
    zone.add_text_record_str("example.com", "v", "spf1 -all")
        .unwrap();
    zone.add_mail_exchange_record_str("example.com", 10, "mail.example.com")
        .unwrap();
    zone.add_ip_address_record_str("mail.example.com", "93.184.215.25")
        .unwrap();
    zone.add_canonical_name_record_str("www.example.com", "example.com")
        .unwrap();
    zone.add_ip_address_record_str("*.dev.example.com", "10.0.0.1")
        .unwrap();
    zone.add_pointer_record_str("93.184.215.14", "example.com")
        .unwrap();

    zone
}
