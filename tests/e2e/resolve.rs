use pretty_assertions::assert_eq;
use rstest::rstest;

use timestamp_entities::Timestamp;

use crate::common::setup::{setup_node, TestHelper};

const RESOLVED_BODY: &str = r#"{"unix":1450137600,"natural":"2015-12-15 00:00:00 +0000 UTC"}"#;
const NULL_BODY: &str = r#"{"unix":null,"natural":null}"#;

#[rstest]
#[tokio::test]
async fn resolve_route_sets_json_content_type(#[future] setup_node: TestHelper) {
    let hlpr = setup_node.await;

    let res = hlpr.get("1450137600").await;

    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=UTF-8"
    );
}

#[rstest]
#[case::from_epoch_seconds("1450137600")]
#[case::from_date_string("December%2015,%202015")]
#[tokio::test]
async fn resolve_equivalent_forms(#[future] setup_node: TestHelper, #[case] path: &str) {
    let hlpr = setup_node.await;

    let res = hlpr.get(path).await;

    assert_eq!(res.status(), 200);
    let body = res.text().await.expect("body should be readable");
    assert_eq!(body, RESOLVED_BODY);
}

#[rstest]
#[tokio::test]
async fn resolve_single_digit_day(#[future] setup_node: TestHelper) {
    let hlpr = setup_node.await;

    let res = hlpr.get("January%202,%202017").await;

    assert_eq!(res.status(), 200);
    let timestamp: Timestamp = res.json().await.expect("body should decode");
    assert_eq!(
        timestamp,
        Timestamp {
            unix: Some(1_483_315_200),
            natural: Some("2017-01-02 00:00:00 +0000 UTC".to_owned()),
        }
    );
}

#[rstest]
#[case::negative_epoch("-1")]
#[case::abbreviated_month("Dec%2015,%202015")]
#[case::garbage("not-a-date")]
#[tokio::test]
async fn resolve_invalid_input(#[future] setup_node: TestHelper, #[case] path: &str) {
    let hlpr = setup_node.await;

    let res = hlpr.get(path).await;

    assert_eq!(res.status(), 400);
    assert_eq!(
        res.headers()["content-type"],
        "application/json; charset=UTF-8"
    );
    assert!(res.headers().contains_key("x-status-reason"));
    let body = res.text().await.expect("body should be readable");
    assert_eq!(body, NULL_BODY);
}

#[rstest]
#[tokio::test]
async fn unknown_nested_path_is_not_found(#[future] setup_node: TestHelper) {
    let hlpr = setup_node.await;

    let res = hlpr.get("does/not/exist").await;

    assert_eq!(res.status(), 404);
}
