use anyhow::Result;
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use serde_json::json;

use super::{MOCK_BOOKING_ID, MOCK_ITEM_ID, banner, expect_status, require_user};

/// A review may only reference a completed booking; this one references a
/// booking that does not exist.
pub async fn run(client: &ApiClient, ctx: &RunContext, report: &mut TestReport) -> Result<()> {
    banner("Reviews");

    let Some(user_id) = require_user(report, "Reviews scenario", ctx) else {
        return Ok(());
    };
    let headers = [("x-user-id", user_id.as_str())];

    let review = json!({
        "booking_id": MOCK_BOOKING_ID,
        "item_id": MOCK_ITEM_ID,
        "rating": 5,
        "text": "Отличное оборудование, всё работает идеально!",
    });
    let response = client
        .send(Method::POST, "/reviews", Some(&review), &headers)
        .await;
    expect_status(
        report,
        "Review creation blocked for non-completed booking",
        response,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}
