use anyhow::Result;
use chrono::{Duration, Utc};
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use serde_json::json;

use super::{MOCK_ITEM_ID, banner, expect_ok_with_field, expect_status, require_user};

/// Booking attempt (blocked for the unverified user) and own-bookings listing.
pub async fn run(client: &ApiClient, ctx: &RunContext, report: &mut TestReport) -> Result<()> {
    banner("Booking flow");

    let Some(user_id) = require_user(report, "Booking scenario", ctx) else {
        return Ok(());
    };
    let headers = [("x-user-id", user_id.as_str())];

    let start = Utc::now() + Duration::days(1);
    let end = Utc::now() + Duration::days(3);
    let booking = json!({
        "start_date": start.to_rfc3339(),
        "end_date": end.to_rfc3339(),
        "rental_type": "day",
        "is_insured": true,
    });
    let response = client
        .send(
            Method::POST,
            &format!("/items/{MOCK_ITEM_ID}/book"),
            Some(&booking),
            &headers,
        )
        .await;
    expect_status(
        report,
        "Booking blocked for unverified user",
        response,
        StatusCode::FORBIDDEN,
    );

    let response = client.send(Method::GET, "/bookings", None, &headers).await;
    expect_ok_with_field(report, "Bookings list retrieval", response, "bookings");

    Ok(())
}
