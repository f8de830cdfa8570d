use anyhow::Result;
use reqwest::{Method, StatusCode};
use rentprobe_core::client::ApiClient;
use rentprobe_core::context::RunContext;
use rentprobe_core::report::TestReport;
use rentprobe_core::sms::CodeSource;
use serde_json::json;

use super::{banner, expect_status, extract_user_id};

pub const ADMIN_PHONE: &str = "+7900654321";
const ADMIN_NAME: &str = "Админ Тестов";

/// Creates a second user (admin candidate) and checks that every admin surface
/// refuses it while it has no elevated role.
pub async fn run(
    client: &ApiClient,
    codes: &dyn CodeSource,
    ctx: &mut RunContext,
    report: &mut TestReport,
) -> Result<()> {
    banner("Admin endpoints");

    let response = client
        .send(
            Method::POST,
            "/auth/send-sms",
            Some(&json!({"phone": ADMIN_PHONE})),
            &[],
        )
        .await;
    if expect_status(report, "Admin SMS send", response, StatusCode::OK).is_none() {
        return Ok(());
    }

    let code = codes.code_for(ADMIN_PHONE);
    let response = client
        .send(
            Method::POST,
            "/auth/verify-sms",
            Some(&json!({
                "phone": ADMIN_PHONE,
                "code": code,
                "name": ADMIN_NAME,
            })),
            &[],
        )
        .await;
    let Some(admin_id) = extract_user_id(report, "Admin user creation", response) else {
        return Ok(());
    };
    ctx.admin_user_id = Some(admin_id.clone());

    let headers = [("x-user-id", admin_id.as_str())];

    let response = client
        .send(Method::GET, "/admin/users?status=pending", None, &headers)
        .await;
    expect_status(
        report,
        "Admin access control for users",
        response,
        StatusCode::FORBIDDEN,
    );

    let response = client
        .send(Method::GET, "/admin/items?status=pending", None, &headers)
        .await;
    expect_status(
        report,
        "Admin access control for items",
        response,
        StatusCode::FORBIDDEN,
    );

    let response = client.send(Method::GET, "/admin/stats", None, &headers).await;
    expect_status(
        report,
        "Admin stats access control",
        response,
        StatusCode::FORBIDDEN,
    );

    Ok(())
}
