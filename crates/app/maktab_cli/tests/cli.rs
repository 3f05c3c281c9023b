//! End-to-end tests: drive the compiled binary against a stub backend and
//! assert what lands on the terminal and in the session directory.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;

use assert_cmd::Command;
use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::routing::post;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use predicates::prelude::*;
use serde_json::{Value, json};

// ---------------------------------------------------------------------------
// Stub backend
// ---------------------------------------------------------------------------

fn issued_token(phone: &str, role: &str, exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(
        r#"{{"phone":"{phone}","role":"{role}","iat":{},"exp":{exp}}}"#,
        Utc::now().timestamp()
    ));
    format!("{header}.{payload}.fake_signature")
}

/// Accounts the stub knows. One issues an already-expired token so tests can
/// see that expiry is only reported, never enforced by deletion.
async fn login_route(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let phone = params.get("phone").map(String::as_str).unwrap_or_default();
    let password = params
        .get("password")
        .map(String::as_str)
        .unwrap_or_default();
    let now = Utc::now().timestamp();
    let (role, exp) = match (phone, password) {
        ("998901234567", "secret") => ("ROLE_TEACHER", now + 3600),
        ("998905555555", "secret") => ("ROLE_SUPER_ADMIN", now + 3600),
        ("998907777777", "secret") => ("ROLE_HEADMASTER", now + 3600),
        ("998909999999", "secret") => ("ROLE_TEACHER", now - 60),
        _ => {
            return Json(json!({
                "success": false,
                "message": "invalid credentials",
                "data": null,
            }));
        }
    };
    Json(json!({
        "success": true,
        "message": role,
        "data": issued_token(phone, role, exp),
    }))
}

async fn spawn_stub() -> SocketAddr {
    let app = Router::new().route("/auth/login", post(login_route));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub backend");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve stub");
    });
    addr
}

/// The binary, pointed at the stub and an isolated session directory.
fn maktab(dir: &Path, addr: SocketAddr) -> Command {
    let mut cmd = Command::cargo_bin("maktab_cli").expect("binary");
    cmd.env("MAKTAB_API_BASE_URL", format!("http://{addr}/"))
        .env("MAKTAB_DATA_DIR", dir);
    cmd
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[tokio::test(flavor = "multi_thread")]
async fn version_prints_package_name_and_version() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("maktab_cli"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_signs_in_and_status_reports_the_session() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    // The plus sign is accepted on input and stripped before the wire; the
    // stub only knows the bare form.
    maktab(dir.path(), addr)
        .args(["login", "--phone", "+998901234567", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome! Signed in as ROLE_TEACHER."))
        .stdout(predicate::str::contains("Destination: /dashboard/teacher"));

    maktab(dir.path(), addr)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: active"))
        .stdout(predicate::str::contains("ROLE_TEACHER"))
        .stdout(predicate::str::contains("998901234567"))
        .stdout(predicate::str::contains("Issued:"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_maps_each_role_to_its_dashboard() {
    let addr = spawn_stub().await;

    let dir = tempfile::tempdir().expect("tempdir");
    maktab(dir.path(), addr)
        .args(["login", "--phone", "998905555555", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Destination: /dashboard/super_admin"));

    // A role outside the known set falls back to the default destination.
    let dir = tempfile::tempdir().expect("tempdir");
    maktab(dir.path(), addr)
        .args(["login", "--phone", "998907777777", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ROLE_HEADMASTER."))
        .stdout(predicate::str::contains("Destination: /dashboard/teacher"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_validation_fails_before_any_network_call() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .args(["login", "--phone", "90123456", "--password", "secret"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Phone number must start with 998."));

    maktab(dir.path(), addr)
        .args(["login", "--phone", "998901234567", "--password", ""])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Please enter your phone number and password.",
        ));

    maktab(dir.path(), addr)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: none"));
}

#[tokio::test(flavor = "multi_thread")]
async fn debug_logging_reports_where_the_flow_settled() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .env("RUST_LOG", "debug")
        .args(["login", "--phone", "998901234567", "--password", "wrong"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("sign-in flow settled in Error"));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_login_shows_the_backend_message() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .args(["login", "--phone", "998901234567", "--password", "wrong"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid credentials"));

    maktab(dir.path(), addr)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: none"));
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_clears_the_session_and_is_idempotent() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .args(["login", "--phone", "998901234567", "--password", "secret"])
        .assert()
        .success();

    maktab(dir.path(), addr)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Redirecting to /signin"))
        .stdout(predicate::str::contains("Signed out."));

    // Nothing left to clear; the second run must behave the same.
    maktab(dir.path(), addr)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed out."));

    maktab(dir.path(), addr)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: none"));
}

#[tokio::test(flavor = "multi_thread")]
async fn expired_token_is_kept_but_reported_expired() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .args(["login", "--phone", "998909999999", "--password", "secret"])
        .assert()
        .success();

    maktab(dir.path(), addr)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session: expired"))
        .stdout(predicate::str::contains("ROLE_TEACHER"));

    maktab(dir.path(), addr)
        .arg("teachers")
        .assert()
        .failure()
        .stdout(predicate::str::contains("not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_shows_the_menu_for_the_signed_in_role() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .args(["login", "--phone", "998901234567", "--password", "secret"])
        .assert()
        .success();

    maktab(dir.path(), addr)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Signed in as ROLE_TEACHER (/dashboard/teacher)",
        ))
        .stdout(predicate::str::contains("/teachers"))
        .stdout(predicate::str::contains("/attendance"));
}

#[tokio::test(flavor = "multi_thread")]
async fn teachers_lists_search_and_pages_the_roster() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .args(["login", "--phone", "998901234567", "--password", "secret"])
        .assert()
        .success();

    maktab(dir.path(), addr)
        .arg("teachers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Abdullaev Ahmad"))
        .stdout(predicate::str::contains("To'rayev Botir"))
        .stdout(predicate::str::contains("1-5 / 5 (page 1 of 1)"));

    maktab(dir.path(), addr)
        .args(["teachers", "--search", "front"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saidova Madina"))
        .stdout(predicate::str::contains("Karimova").not());
}

#[tokio::test(flavor = "multi_thread")]
async fn teachers_without_a_session_is_rejected() {
    let addr = spawn_stub().await;
    let dir = tempfile::tempdir().expect("tempdir");

    maktab(dir.path(), addr)
        .arg("teachers")
        .assert()
        .failure()
        .stdout(predicate::str::contains("not signed in"));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_backend_reports_the_network_message() {
    // Bind a port and drop it so nothing answers there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let dir = tempfile::tempdir().expect("tempdir");
    maktab(dir.path(), addr)
        .args(["login", "--phone", "998901234567", "--password", "secret"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Network error: could not reach the server.",
        ));
}
