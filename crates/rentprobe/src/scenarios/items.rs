use anyhow::Result;
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use serde_json::json;

use super::{banner, expect_ok_with_field, expect_status, require_user};

/// Item creation (blocked for the unverified user), listing and filtering.
pub async fn run(client: &ApiClient, ctx: &RunContext, report: &mut TestReport) -> Result<()> {
    banner("Items management");

    let Some(user_id) = require_user(report, "Items scenario", ctx) else {
        return Ok(());
    };
    let headers = [("x-user-id", user_id.as_str())];

    let item = json!({
        "title": "Sony A7R IV Camera",
        "description": "Professional mirrorless camera for content creation",
        "category": "stream_equipment",
        "price_per_day": 2500,
        "price_per_month": 50000,
        "deposit": 150000,
        "location": "Москва",
        "attributes": {
            "type": "camera",
            "brand": "Sony",
            "condition": "excellent",
        },
    });
    let response = client.send(Method::POST, "/items", Some(&item), &headers).await;
    expect_status(
        report,
        "Item creation blocked for unverified user",
        response,
        StatusCode::FORBIDDEN,
    );

    let response = client.send(Method::GET, "/items", None, &[]).await;
    expect_ok_with_field(report, "Items list retrieval", response, "items");

    let response = client
        .send(
            Method::GET,
            "/items?category=stream_equipment&search=camera",
            None,
            &[],
        )
        .await;
    expect_status(report, "Items filtering", response, StatusCode::OK);

    Ok(())
}
