use memolink_cipher::{decrypt, from_transport_safe};
use serde_json::Value;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

const KEY: &str = "0123456789abcdef";

struct TempDirGuard {
    path: PathBuf,
}

impl TempDirGuard {
    fn new(prefix: &str) -> Self {
        let unique = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let path = std::env::temp_dir().join(format!(
            "memolink-cli-{prefix}-{}-{unique}",
            std::process::id()
        ));
        fs::create_dir_all(&path).expect("temp dir should be created");
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDirGuard {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn run_memolink<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_memolink");
    Command::new(bin)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("memolink command should execute")
}

fn assert_success(output: &Output) {
    if !output.status.success() {
        panic!(
            "command failed with status {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
    }
}

fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "stdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn parse_json_stdout(output: &Output) -> Value {
    serde_json::from_slice::<Value>(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "expected valid JSON stdout, got error: {e}\nstdout:\n{}",
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

fn write_file(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).expect("fixture should be written");
    path.display().to_string()
}

#[test]
fn validate_reports_malformed_json() {
    let output = run_memolink([
        "validate",
        "--action",
        "issue_note",
        "--payload",
        "{not json",
        "--json",
    ]);
    assert_exit_code(&output, 1);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["result"], "invalid");
    assert_eq!(payload["reason"]["kind"], "parse_error");
}

#[test]
fn validate_accepts_complete_update_payload() {
    let output = run_memolink([
        "validate",
        "--action",
        "qcost_update",
        "--payload",
        r#"{"userId":"u1","surKey":"S-9"}"#,
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["result"], "valid");
    assert_eq!(payload["parsed"]["surKey"], "S-9");
}

#[test]
fn validate_flags_unknown_action() {
    let output = run_memolink(["validate", "--action", "memo_delete", "--payload", "{}"]);
    assert_exit_code(&output, 1);
    let text = stdout_text(&output);
    assert!(text.contains("Result: invalid"), "{text}");
    assert!(text.contains("unknown actionType: memo_delete"), "{text}");
}

#[test]
fn validate_reads_payload_file_with_audited_report() {
    let tmp = TempDirGuard::new("validate-file");
    let payload = write_file(
        tmp.path(),
        "search.json",
        r#"{"userId":"u1","yyyyMm":"202401","prodAff":"LGEKR"}"#,
    );
    let output = run_memolink([
        "validate",
        "--action",
        "qcost_create",
        "--payload-file",
        payload.as_str(),
        "--report-name",
        "MS - Audit",
        "--json",
    ]);
    assert_exit_code(&output, 1);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["reason"]["missing"], serde_json::json!(["region"]));
}

#[test]
fn encrypt_then_decrypt_transport_token() {
    let encrypted = run_memolink([
        "encrypt",
        "--key",
        KEY,
        "--text",
        r#"{"userId":"u1"}"#,
        "--transport-safe",
    ]);
    assert_success(&encrypted);
    let token = stdout_text(&encrypted).trim().to_string();
    assert!(!token.contains(['+', '/', '=']), "{token}");

    let decrypted = run_memolink(["decrypt", "--key", KEY, "--cipher", token.as_str()]);
    assert_success(&decrypted);
    assert_eq!(stdout_text(&decrypted).trim(), r#"{"userId":"u1"}"#);
}

#[test]
fn encrypt_rejects_short_key() {
    let output = run_memolink(["encrypt", "--key", "short", "--text", "x"]);
    assert_exit_code(&output, 2);
    assert!(stderr_text(&output).contains("at least 16 characters"));
}

#[test]
fn build_url_uses_exact_endpoint() {
    let output = run_memolink([
        "build-url",
        "--server",
        "https://quality.example.com",
        "--action",
        "qcost_update",
        "--cipher",
        "a+b/c==",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout_text(&output).trim(),
        "https://quality.example.com/qlik/memo/modify?search=a-b_c"
    );
}

#[test]
fn dispatch_prints_popup_request_with_decryptable_token() {
    let tmp = TempDirGuard::new("dispatch");
    let config = write_file(
        tmp.path(),
        "widget.toml",
        r#"
actionType = "qcost_create"
reportName = "Global Report"
serverAddress = "https://quality.example.com"
popWidth = 1200
popHeight = 800
"#,
    );
    let vars = write_file(
        tmp.path(),
        "vars.json",
        &serde_json::json!({
            "vAESKey": KEY,
            "vSearch": r#"{"reportNm":"x","userId":"u1","yyyyMm":"202401"}"#,
        })
        .to_string(),
    );

    let output = run_memolink([
        "dispatch",
        "--config",
        config.as_str(),
        "--vars",
        vars.as_str(),
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    assert_eq!(payload["width"], 1200);
    assert_eq!(payload["height"], 800);
    assert_eq!(
        payload["features"],
        "width=1200,height=800,left=360,top=140,toolbar=no,menubar=no,scrollbars=yes,resizable=yes,status=no"
    );

    let url = payload["url"].as_str().expect("url should be a string");
    let token = url
        .strip_prefix("https://quality.example.com/qlik/memo/create?search=")
        .expect("url should target the create endpoint");
    let sent = decrypt(&from_transport_safe(token), KEY).expect("token should decrypt");
    assert_eq!(sent, r#"{"reportNm":"Global Report","userId":"u1","yyyyMm":"202401"}"#);
}

#[test]
fn dispatch_alerts_on_unevaluated_variable() {
    let tmp = TempDirGuard::new("dispatch-novalue");
    let vars = write_file(
        tmp.path(),
        "vars.json",
        &format!(r#"{{"vAESKey":"{KEY}","vSearch":null}}"#),
    );
    let output = run_memolink(["dispatch", "--vars", vars.as_str(), "--action", "reliability"]);
    assert_exit_code(&output, 1);
    assert!(
        stderr_text(&output).contains("alert: Variable has no calculated value: vSearch"),
        "{}",
        stderr_text(&output)
    );
    assert!(stdout_text(&output).is_empty());
}

#[test]
fn dispatch_in_edit_mode_is_skipped() {
    let tmp = TempDirGuard::new("dispatch-edit");
    let vars = write_file(tmp.path(), "vars.json", "{}");
    let output = run_memolink(["dispatch", "--vars", vars.as_str(), "--edit-mode", "--json"]);
    assert_success(&output);
    assert_eq!(parse_json_stdout(&output)["skipped"], "edit_mode");
}

#[test]
fn render_emits_markup_and_scoped_styles() {
    let tmp = TempDirGuard::new("render");
    let config = write_file(
        tmp.path(),
        "widget.json",
        r#"{"actionType":"reliability","buttonText":"Open reliability"}"#,
    );
    let output = run_memolink([
        "render",
        "--config",
        config.as_str(),
        "--object-id",
        "obj42",
        "--json",
    ]);
    assert_success(&output);
    let payload = parse_json_stdout(&output);
    let markup = payload["markup"].as_str().expect("markup should be a string");
    assert!(markup.starts_with(r#"<button id="obj42-btn""#), "{markup}");
    assert!(markup.ends_with(">Open reliability</button>"), "{markup}");
    assert!(
        payload["styles"]
            .as_str()
            .expect("styles should be a string")
            .contains("#obj42_title")
    );
}
