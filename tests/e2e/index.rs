use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::setup::{setup_node, TestHelper};

#[rstest]
#[tokio::test]
async fn index_serves_the_documentation_page(#[future] setup_node: TestHelper) {
    let hlpr = setup_node.await;

    let res = hlpr.get("").await;

    assert_eq!(res.status(), 200);
    let content_type = res.headers()["content-type"].to_str().expect("ascii header");
    assert!(content_type.starts_with("text/html"));

    let body = res.text().await.expect("body should be readable");
    assert!(body.contains("Timestamp Microservice"));
}
