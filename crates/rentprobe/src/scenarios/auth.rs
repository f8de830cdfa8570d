use anyhow::Result;
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use rentprobe_core::sms::CodeSource;
use serde_json::json;

use super::{banner, expect_status, extract_user_id};

pub const TEST_PHONE: &str = "+7900123456";
const TEST_NAME: &str = "Алексей Тестов";

// Smallest JPEG that passes the upload validation.
const DOCUMENT_DATA: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQEAYABgAAD/2wBDAAEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQH/2wBDAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQH/wAARCAABAAEDASIAAhEBAxEB/8QAFQABAQAAAAAAAAAAAAAAAAAAAAv/xAAUEAEAAAAAAAAAAAAAAAAAAAAA/8QAFQEBAQAAAAAAAAAAAAAAAAAAAAX/xAAUEQEAAAAAAAAAAAAAAAAAAAAA/9oADAMBAAIRAxEAPwA/8A";

/// send-sms -> verify-sms (creates the user) -> upload-document.
pub async fn run(
    client: &ApiClient,
    codes: &dyn CodeSource,
    ctx: &mut RunContext,
    report: &mut TestReport,
) -> Result<()> {
    banner("Authentication flow");

    let response = client
        .send(
            Method::POST,
            "/auth/send-sms",
            Some(&json!({"phone": TEST_PHONE})),
            &[],
        )
        .await;
    if expect_status(report, "SMS send request", response, StatusCode::OK).is_none() {
        return Ok(());
    }

    // The server prints the mock code to its own log; the code source scrapes
    // it or falls back to the fixed one.
    let code = codes.code_for(TEST_PHONE);
    let response = client
        .send(
            Method::POST,
            "/auth/verify-sms",
            Some(&json!({
                "phone": TEST_PHONE,
                "code": code,
                "name": TEST_NAME,
            })),
            &[],
        )
        .await;
    let Some(user_id) = extract_user_id(report, "SMS verification and user creation", response)
    else {
        return Ok(());
    };
    ctx.user_id = Some(user_id.clone());

    let response = client
        .send(
            Method::POST,
            "/auth/upload-document",
            Some(&json!({
                "documentData": DOCUMENT_DATA,
                "documentType": "passport",
            })),
            &[("x-user-id", user_id.as_str())],
        )
        .await;
    expect_status(report, "Document upload", response, StatusCode::OK);

    Ok(())
}
