use super::*;

#[test]
fn persisted_blob_shape_is_stable() {
    let session = Session {
        token: Some("eyFakeToken12345".to_owned()),
    };
    assert_eq!(
        encode_session(&session).as_deref(),
        Some(r#"{"token":"eyFakeToken12345"}"#)
    );
}

#[test]
fn decoded_blob_restores_the_token() {
    let session = decode_session(r#"{"token":"eyFakeToken12345"}"#);
    assert_eq!(
        session,
        Some(Session {
            token: Some("eyFakeToken12345".to_owned()),
        })
    );
}

#[test]
fn corrupt_blob_reads_as_no_session() {
    assert_eq!(decode_session("not json"), None);
    assert_eq!(decode_session(r#"{"token":42}"#), None);
}
