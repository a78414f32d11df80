use hickory_proto::{
    op::{Message, MessageType, Query, ResponseCode},
    rr::{Name as HickoryName, RData, rdata::A},
    serialize::binary::{BinDecodable as _, BinEncodable as _},
};
use tokio_util::sync::CancellationToken;
use walnut_masterfile::{Request, RequestResolver as _, rr::RecordType};

mod support;
use support::{create_example, subscribe};

fn wire_query(id: u16, queries: &[(&str, RecordType)]) -> Vec<u8> {
    let mut msg = Message::new();
    msg.set_id(id);
    msg.set_recursion_desired(true);
    for (owner, record_type) in queries {
        msg.add_query(Query::query(
            HickoryName::from_ascii(owner).unwrap(),
            *record_type,
        ));
    }
    msg.to_bytes().unwrap()
}

#[tokio::test]
async fn test_wire_round_trip() {
    subscribe();
    let zone = create_example();

    let bytes = wire_query(4242, &[("mail.example.com.", RecordType::A)]);
    let request = Request::from(Message::from_bytes(&bytes).unwrap());
    let response = zone
        .resolve(&request, &CancellationToken::new())
        .await
        .unwrap();

    let bytes = Message::from(response).to_bytes().unwrap();
    let reply = Message::from_bytes(&bytes).unwrap();

    assert_eq!(reply.id(), 4242);
    assert_eq!(reply.message_type(), MessageType::Response);
    assert!(reply.recursion_desired());
    assert_eq!(reply.response_code(), ResponseCode::NoError);
    assert_eq!(reply.queries().len(), 1);
    assert_eq!(reply.answers().len(), 1);
    assert_eq!(reply.answers()[0].data(), &RData::A(A::new(93, 184, 215, 25)));
}

#[tokio::test]
async fn test_wire_name_error() {
    subscribe();
    let zone = create_example();

    let bytes = wire_query(
        7,
        &[
            ("example.com.", RecordType::NS),
            ("nowhere.example.org.", RecordType::A),
        ],
    );
    let request = Request::from(Message::from_bytes(&bytes).unwrap());
    let response = zone
        .resolve(&request, &CancellationToken::new())
        .await
        .unwrap();

    let bytes = Message::from(response).to_bytes().unwrap();
    let reply = Message::from_bytes(&bytes).unwrap();

    assert_eq!(reply.id(), 7);
    assert_eq!(reply.response_code(), ResponseCode::NXDomain);
    assert_eq!(reply.queries().len(), 2);
    assert_eq!(reply.answers().len(), 2);
    assert!(
        reply
            .answers()
            .iter()
            .all(|record| record.record_type() == RecordType::NS)
    );
}
