use crate::HttpStatusCode;

#[test]
fn given_2xx_codes_when_classified_then_only_they_are_success() {
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(204).is_success());
    assert!(!HttpStatusCode(199).is_success());
    assert!(!HttpStatusCode(300).is_success());
    assert!(!HttpStatusCode(422).is_success());
}

#[test]
fn given_error_codes_when_classified_then_client_and_server_ranges_are_disjoint() {
    let unprocessable = HttpStatusCode::from(422);
    let unavailable = HttpStatusCode::from(503);

    assert!(unprocessable.is_client_error());
    assert!(!unprocessable.is_server_error());
    assert!(unavailable.is_server_error());
    assert!(!unavailable.is_client_error());
    assert_eq!(unavailable.to_string(), "503");
}
