//! Ordered smoke scenarios against the rental API. Each scenario is a linear
//! sequence of request/assert steps; ids captured by earlier scenarios feed
//! the later ones through [`RunContext`].

use anyhow::Result;
use console::style;
use reqwest::StatusCode;
use rentprobe_core::client::{ApiClient, ApiResponse};
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use rentprobe_core::sms::CodeSource;
use serde::Deserialize;

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod errors;
pub mod items;
pub mod profile;
pub mod reviews;

/// Item id that is never created on the server; booking and review checks rely
/// on it staying unknown.
pub const MOCK_ITEM_ID: &str = "test-item-123";
pub const MOCK_BOOKING_ID: &str = "test-booking-123";

/// Runs the seven scenarios in their fixed order. A scenario that errors out
/// is recorded as a single failure under its own name; the run always
/// continues so the summary covers every scenario reached.
pub async fn run_all(
    client: &ApiClient,
    codes: &dyn CodeSource,
    ctx: &mut RunContext,
    report: &mut TestReport,
) {
    let outcome = auth::run(client, codes, ctx, report).await;
    record(report, "Authentication flow", outcome);

    let outcome = items::run(client, ctx, report).await;
    record(report, "Items management", outcome);

    let outcome = bookings::run(client, ctx, report).await;
    record(report, "Booking flow", outcome);

    let outcome = reviews::run(client, ctx, report).await;
    record(report, "Reviews", outcome);

    let outcome = admin::run(client, codes, ctx, report).await;
    record(report, "Admin endpoints", outcome);

    let outcome = profile::run(client, ctx, report).await;
    record(report, "Profile management", outcome);

    let outcome = errors::run(client, report).await;
    record(report, "Error handling", outcome);
}

fn record(report: &mut TestReport, scenario: &str, outcome: Result<()>) {
    if let Err(e) = outcome {
        report.failure(scenario, &format!("aborted: {e:#}"));
    }
}

pub(crate) fn banner(title: &str) {
    println!("\n{}", style(title).bold());
}

/// Records a pass when `response` carries exactly `expected`, a failure with
/// the observed status (or "No response") otherwise. Returns the response
/// after a pass so callers can inspect the body.
pub(crate) fn expect_status(
    report: &mut TestReport,
    label: &str,
    response: Option<ApiResponse>,
    expected: StatusCode,
) -> Option<ApiResponse> {
    match response {
        Some(response) if response.status == expected => {
            report.success(label);
            Some(response)
        }
        Some(response) => {
            report.failure(
                label,
                &format!("Unexpected status: {}", response.status.as_u16()),
            );
            None
        }
        None => {
            report.failure(label, "No response");
            None
        }
    }
}

/// Like [`expect_status`] for 200 responses that must also carry a top-level
/// `field` in the body.
pub(crate) fn expect_ok_with_field(
    report: &mut TestReport,
    label: &str,
    response: Option<ApiResponse>,
    field: &str,
) {
    match response {
        Some(response) if response.status == StatusCode::OK => {
            if response.has_field(field) {
                report.success(label);
            } else {
                report.failure(label, &format!("No '{field}' field in response"));
            }
        }
        Some(response) => {
            report.failure(
                label,
                &format!("Unexpected status: {}", response.status.as_u16()),
            );
        }
        None => {
            report.failure(label, "No response");
        }
    }
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    user: VerifiedUser,
}

#[derive(Debug, Deserialize)]
struct VerifiedUser {
    #[serde(rename = "_id")]
    id: String,
}

/// Handles a verify-sms response that must be 200 with a non-empty `user._id`.
/// Records one check either way and returns the created user's id on a pass.
pub(crate) fn extract_user_id(
    report: &mut TestReport,
    label: &str,
    response: Option<ApiResponse>,
) -> Option<String> {
    let response = match response {
        Some(response) if response.status == StatusCode::OK => response,
        Some(response) => {
            report.failure(
                label,
                &format!("Unexpected status: {}", response.status.as_u16()),
            );
            return None;
        }
        None => {
            report.failure(label, "No response");
            return None;
        }
    };

    match serde_json::from_value::<VerifyResponse>(response.body.clone()) {
        Ok(verified) if !verified.user.id.is_empty() => {
            report.success(label);
            Some(verified.user.id)
        }
        _ => {
            report.failure(label, "No user data in response");
            None
        }
    }
}

/// Clones the authenticated user id out of the context, or records a failure
/// for a scenario that cannot run without one.
pub(crate) fn require_user(
    report: &mut TestReport,
    scenario: &str,
    ctx: &RunContext,
) -> Option<String> {
    match &ctx.user_id {
        Some(id) => Some(id.clone()),
        None => {
            report.failure(scenario, "No authenticated user");
            None
        }
    }
}
