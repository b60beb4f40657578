use super::*;

fn query(input: Option<&str>, size: Option<&str>, timestamp: Option<&str>) -> AvatarQuery {
    AvatarQuery {
        input: input.map(str::to_owned),
        size: size.map(str::to_owned),
        timestamp: timestamp.map(str::to_owned),
    }
}

fn reject(q: AvatarQuery) -> RequestError {
    q.validate(AvatarSize::S64).unwrap_err()
}

#[test]
fn input_is_required_and_trimmed() {
    assert!(matches!(reject(query(None, None, None)), RequestError::MissingInput));
    assert!(matches!(reject(query(Some("  \t"), None, None)), RequestError::MissingInput));

    let ok = query(Some("  bob  "), None, Some("0"))
        .validate(AvatarSize::S64)
        .unwrap();
    assert_eq!(ok.input, "bob");
    assert_eq!(ok.time_key.as_str(), "1970-01-01");
}

#[test]
fn size_defaults_then_parses_then_checks_support() {
    let q = query(Some("a"), None, Some("0"));
    assert_eq!(q.validate(AvatarSize::S128).unwrap().size, AvatarSize::S128);
    let q = query(Some("a"), Some(""), Some("0"));
    assert_eq!(q.validate(AvatarSize::S64).unwrap().size, AvatarSize::S64);
    let q = query(Some("a"), Some("128"), Some("0"));
    assert_eq!(q.validate(AvatarSize::S64).unwrap().size, AvatarSize::S128);

    assert!(matches!(reject(query(Some("a"), Some("big"), None)), RequestError::InvalidSize));
    assert!(matches!(reject(query(Some("a"), Some("100"), None)), RequestError::UnsupportedSize));
    assert!(matches!(reject(query(Some("a"), Some("-64"), None)), RequestError::UnsupportedSize));
}

#[test]
fn timestamp_must_be_integer_seconds() {
    assert!(matches!(
        reject(query(Some("a"), None, Some("yesterday"))),
        RequestError::InvalidTimestamp
    ));
    assert!(matches!(
        reject(query(Some("a"), None, Some("1.5"))),
        RequestError::InvalidTimestamp
    ));
    let ok = query(Some("a"), None, Some("1704153599"))
        .validate(AvatarSize::S64)
        .unwrap();
    assert_eq!(ok.time_key.as_str(), "2024-01-01");
}

#[test]
fn input_is_checked_before_size() {
    assert!(matches!(reject(query(None, Some("100"), Some("x"))), RequestError::MissingInput));
    assert!(matches!(
        reject(query(Some("a"), Some("100"), Some("x"))),
        RequestError::UnsupportedSize
    ));
}

#[test]
fn statuses_follow_error_class() {
    assert_eq!(RequestError::MissingInput.status(), StatusCode::BAD_REQUEST);
    assert_eq!(RequestError::InvalidTimestamp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        RequestError::Encode(AvatarError::encode("boom")).status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn respond_exposes_hash_and_time_key() {
    let request = query(Some("alice@example.com"), None, Some("1704067200"))
        .validate(AvatarSize::S64)
        .unwrap();
    let response = respond(&request).unwrap();
    assert_eq!(
        response.hash,
        "efcbd96ccded7d25c0ea12397cf0ba7488d7210a2464140e8232b3c89639ecfd"
    );
    assert_eq!(response.time_key.as_str(), "2024-01-01");
    assert!(response.png.starts_with(b"\x89PNG"));
}

#[test]
fn hand_built_empty_request_is_a_client_error() {
    let request = AvatarRequest {
        input: String::new(),
        size: AvatarSize::S64,
        time_key: TimeKey::from_unix(0).unwrap(),
    };
    let err = respond(&request).unwrap_err();
    assert!(matches!(err, RequestError::MissingInput));
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
}
