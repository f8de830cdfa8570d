use anyhow::Result;
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use serde_json::json;

use super::{banner, expect_ok_with_field, expect_status, require_user};

/// Profile update and `/auth/me` round trip for the first user.
pub async fn run(client: &ApiClient, ctx: &RunContext, report: &mut TestReport) -> Result<()> {
    banner("Profile management");

    let Some(user_id) = require_user(report, "Profile scenario", ctx) else {
        return Ok(());
    };
    let headers = [("x-user-id", user_id.as_str())];

    let profile = json!({
        "name": "Алексей Обновленный",
        "role": "owner",
    });
    let response = client
        .send(Method::PATCH, "/profile", Some(&profile), &headers)
        .await;
    expect_status(report, "Profile update", response, StatusCode::OK);

    let response = client.send(Method::GET, "/auth/me", None, &headers).await;
    expect_ok_with_field(report, "Get current user", response, "user");

    Ok(())
}
