//! Integration tests for caller resolution in the auth middleware.

use salvo::http::StatusCode;

use gigboard_test::component::constants::APP_ROUTE_PREFIX;

use super::helpers::*;

fn whoami_path() -> String {
    format!("{APP_ROUTE_PREFIX}/whoami")
}

#[test_log::test(tokio::test)]
async fn single_user_is_provisioned_once() {
    let test_db = test_db!();
    let service = create_db_test_service(&test_db, single_user_config());

    let first = TestRequest::get(&whoami_path())
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();
    let second = TestRequest::get(&whoami_path())
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(first["username"], SINGLE_USER_USERNAME);
    assert_eq!(first["id"], second["id"]);
    assert!(first.get("token_identifier").is_none());
}

#[test_log::test(tokio::test)]
async fn proxy_identity_takes_username_header() {
    let test_db = test_db!();
    let service = create_db_test_service(&test_db, proxy_config());

    let me = TestRequest::get(&whoami_path())
        .subject("user_2abc")
        .header(USERNAME_HEADER, "JaneDoe")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(me["username"], "janedoe");
}

#[test_log::test(tokio::test)]
async fn username_collision_gets_suffix() {
    let test_db = test_db!();
    let existing = test_db
        .seed_user("user_first", "janedoe")
        .await
        .expect("seed user");
    assert_eq!(existing.username, "janedoe");

    let service = create_db_test_service(&test_db, proxy_config());
    let me = TestRequest::get(&whoami_path())
        .subject("user_second")
        .header(USERNAME_HEADER, "janedoe")
        .send(&service)
        .await
        .assert_status(StatusCode::OK)
        .json();

    let username = me["username"].as_str().expect("username");
    assert_ne!(username, "janedoe");
    assert!(username.starts_with("janedoe-"), "got {username}");
}
