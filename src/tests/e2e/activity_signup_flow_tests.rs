use axum::http::StatusCode;

use crate::shell::http::router;
use crate::tests::fixtures::activities::{CHESS_CLUB, NEW_EMAIL, REGISTERED_EMAIL, make_test_state};
use crate::tests::fixtures::http::{delete_request, get_request, post_request, send};

#[tokio::test]
async fn signs_up_and_unregisters_through_the_router() {
    let app = router(make_test_state(), "static");

    let (status, json) = send(
        app.clone(),
        post_request(&format!("/activities/Chess%20Club/signup?email={NEW_EMAIL}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], format!("Signed up {NEW_EMAIL} for {CHESS_CLUB}"));

    let (_, listing) = send(app.clone(), get_request("/activities")).await;
    assert_eq!(
        listing[CHESS_CLUB]["participants"],
        serde_json::json!([REGISTERED_EMAIL, NEW_EMAIL])
    );

    let (status, json) = send(
        app.clone(),
        delete_request(&format!(
            "/activities/Chess%20Club/participants?email={REGISTERED_EMAIL}"
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        format!("Unregistered {REGISTERED_EMAIL} from {CHESS_CLUB}")
    );

    let (_, listing) = send(app, get_request("/activities")).await;
    assert_eq!(
        listing[CHESS_CLUB]["participants"],
        serde_json::json!([NEW_EMAIL])
    );
}

#[tokio::test]
async fn isolates_state_between_independently_built_apps() {
    let first = router(make_test_state(), "static");
    let (status, _) = send(
        first,
        delete_request(&format!(
            "/activities/Chess%20Club/participants?email={REGISTERED_EMAIL}"
        )),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let second = router(make_test_state(), "static");
    let (_, listing) = send(second, get_request("/activities")).await;
    assert_eq!(
        listing[CHESS_CLUB]["participants"],
        serde_json::json!([REGISTERED_EMAIL])
    );
}

#[tokio::test]
async fn rejects_a_second_signup_after_the_first_succeeds() {
    let app = router(make_test_state(), "static");
    let uri = format!("/activities/Programming%20Class/signup?email={NEW_EMAIL}");

    let (first, _) = send(app.clone(), post_request(&uri)).await;
    let (second, json) = send(app, post_request(&uri)).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::BAD_REQUEST);
    assert!(
        json["detail"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("already signed up")
    );
}
