use super::*;

#[tokio::test]
async fn healthz_reports_ok() {
    let Json(body) = healthz().await;
    assert_eq!(body.status, "ok");
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "status": "ok" }));
}

#[test]
fn base_routes_builds_without_leptos_configuration() {
    // Only /healthz is registered; Leptos routes need site options.
    let _router: Router = base_routes();
}
