use anyhow::Result;
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::report::TestReport;
use serde_json::json;

use super::{banner, expect_status};

/// Negative paths: unknown endpoint, missing auth header, wrong SMS code.
pub async fn run(client: &ApiClient, report: &mut TestReport) -> Result<()> {
    banner("Error handling");

    let response = client.send(Method::GET, "/invalid-endpoint", None, &[]).await;
    expect_status(
        report,
        "404 for invalid endpoint",
        response,
        StatusCode::NOT_FOUND,
    );

    let response = client.send(Method::GET, "/bookings", None, &[]).await;
    expect_status(
        report,
        "401 for missing auth",
        response,
        StatusCode::UNAUTHORIZED,
    );

    // A phone no other scenario touches, so this code was never issued.
    let response = client
        .send(
            Method::POST,
            "/auth/verify-sms",
            Some(&json!({
                "phone": "+7900999999",
                "code": "000000",
            })),
            &[],
        )
        .await;
    expect_status(
        report,
        "Invalid SMS code handling",
        response,
        StatusCode::BAD_REQUEST,
    );

    Ok(())
}
