//! Integration tests for the category and subcategory read paths.

use salvo::http::StatusCode;
use serde_json::json;

use gigboard_test::component::constants::{APP_ROUTE_PREFIX, SEED_ROUTE_PREFIX};

use super::helpers::*;

async fn seed_everything(service: &salvo::Service) {
    TestRequest::post_empty_json(&format!("{SEED_ROUTE_PREFIX}/categories"))
        .send(service)
        .await
        .assert_status(StatusCode::OK);
    TestRequest::post_empty_json(&format!("{SEED_ROUTE_PREFIX}/subcategories"))
        .send(service)
        .await
        .assert_status(StatusCode::OK);
}

#[test_log::test(tokio::test)]
async fn empty_database_lists_nothing() {
    let test_db = test_db!();
    let service = create_db_test_service(&test_db, proxy_config());

    let res = TestRequest::get(&format!("{APP_ROUTE_PREFIX}/categories"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(res.json(), json!([]));
}

#[test_log::test(tokio::test)]
async fn categories_are_listed_by_name() {
    let test_db = test_db!();
    let service = create_db_test_service(&test_db, single_user_config());
    seed_everything(&service).await;

    let res = TestRequest::get(&format!("{APP_ROUTE_PREFIX}/categories"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);

    let body = res.json();
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();

    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names.len(), 10);
    assert_eq!(names, sorted);
}

#[test_log::test(tokio::test)]
async fn subcategories_can_be_filtered_by_category() {
    let test_db = test_db!();
    let service = create_db_test_service(&test_db, single_user_config());
    seed_everything(&service).await;

    let all = TestRequest::get(&format!("{APP_ROUTE_PREFIX}/subcategories"))
        .send(&service)
        .await
        .assert_status(StatusCode::OK);
    assert_eq!(all.json().as_array().map(Vec::len), Some(70));

    let categories = TestRequest::get(&format!("{APP_ROUTE_PREFIX}/categories"))
        .send(&service)
        .await
        .json();
    let design = categories
        .as_array()
        .expect("array body")
        .iter()
        .find(|c| c["name"] == "Design")
        .expect("Design category present");
    let design_id = design["id"].as_str().expect("id is a string");

    let filtered = TestRequest::get(&format!(
        "{APP_ROUTE_PREFIX}/subcategories?category_id={design_id}"
    ))
    .send(&service)
    .await
    .assert_status(StatusCode::OK)
    .json();

    let rows = filtered.as_array().expect("array body");
    assert_eq!(rows.len(), 7);
    assert!(rows.iter().all(|s| s["category_id"] == design_id));
    assert!(rows.iter().any(|s| s["name"] == "UI/UX Design"));
}
