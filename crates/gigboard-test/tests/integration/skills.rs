//! Integration tests for the public skill lookup.

use salvo::http::StatusCode;
use serde_json::json;

use gigboard_test::component::constants::APP_ROUTE_PREFIX;
use gigboard_test::component::skill::skills_for_username;

use super::helpers::*;

fn skills_path(username: &str) -> String {
    format!("{APP_ROUTE_PREFIX}/users/{username}/skills")
}

#[test_log::test(tokio::test)]
async fn unknown_username_has_no_skills() {
    let test_db = test_db!();
    let mut conn = test_db.get_conn().await.expect("connection");

    let skills = skills_for_username(&mut conn, "nobody")
        .await
        .expect("lookup succeeds");

    assert!(skills.is_empty());
}

#[test_log::test(tokio::test)]
async fn unknown_username_over_http_is_empty_list() {
    let test_db = test_db!();
    let service = create_db_test_service(&test_db, proxy_config());

    let res = TestRequest::get(&skills_path("nobody"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    assert_eq!(res.json(), json!([]));
}

#[test_log::test(tokio::test)]
async fn skills_are_public_and_ordered() {
    let test_db = test_db!();
    let user = test_db
        .seed_user("user_seller", "janedoe")
        .await
        .expect("seed user");
    for label in ["Rust", "PostgreSQL", "Technical Writing"] {
        test_db.seed_skill(user.id, label).await.expect("seed skill");
    }

    // Proxy mode without a subject header: the caller is public.
    let service = create_db_test_service(&test_db, proxy_config());
    let res = TestRequest::get(&skills_path("janedoe"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = res.json();
    let labels: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|skill| skill["label"].as_str())
        .collect();
    assert_eq!(labels, vec!["Rust", "PostgreSQL", "Technical Writing"]);
    assert!(
        body.as_array()
            .expect("array body")
            .iter()
            .all(|skill| skill["user_id"] == json!(user.id))
    );
}

#[test_log::test(tokio::test)]
async fn skills_of_other_users_are_not_returned() {
    let test_db = test_db!();
    let alice = test_db.seed_user("user_alice", "alice").await.expect("alice");
    let bob = test_db.seed_user("user_bob", "bob").await.expect("bob");
    test_db.seed_skill(alice.id, "Design").await.expect("skill");
    test_db.seed_skill(bob.id, "Finance").await.expect("skill");

    let mut conn = test_db.get_conn().await.expect("connection");
    let skills = skills_for_username(&mut conn, "bob").await.expect("lookup");

    assert_eq!(skills.len(), 1);
    assert_eq!(skills[0].label, "Finance");
    assert_eq!(skills[0].user_id, bob.id);
}
