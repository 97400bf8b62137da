//! CLI flag contract tests
//!
//! Runs the built binary with --no-probe and an isolated config directory,
//! and checks output formats, --fail-on, --export, input validation and
//! QR scanning.

use std::path::Path;
use std::process::{Command, Output};

fn qrsafe_bin() -> String {
    env!("CARGO_BIN_EXE_qrsafe").to_string()
}

/// Run qrsafe in `dir` with a private config home so user settings never leak in
fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(qrsafe_bin())
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join("config"))
        .env_remove("RUST_LOG")
        .env_remove("QRSAFE_NO_PROBE")
        .env_remove("QRSAFE_USER_AGENT")
        .output()
        .expect("Failed to run qrsafe")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn code(output: &Output) -> i32 {
    output.status.code().unwrap_or(-1)
}

/// Save `payload` as a QR code PNG, 8px per module with a 4-module quiet zone
fn write_qr(path: &Path, payload: &str) {
    const SCALE: u32 = 8;
    const QUIET: u32 = 4;
    let code = qrcode::QrCode::new(payload.as_bytes()).unwrap();
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let size = (modules + 2 * QUIET) * SCALE;
    let img = image::GrayImage::from_fn(size, size, |x, y| {
        let (mx, my) = (x / SCALE, y / SCALE);
        let inside = (QUIET..QUIET + modules).contains(&mx) && (QUIET..QUIET + modules).contains(&my);
        let dark = inside
            && colors[((my - QUIET) * modules + (mx - QUIET)) as usize] == qrcode::Color::Dark;
        image::Luma([if dark { 0u8 } else { 255 }])
    });
    img.save(path).unwrap();
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_single_result() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["check", "http://192.168.1.1/login", "--no-probe", "-f", "json"],
    );
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("Invalid JSON");
    assert_eq!(v["score"], 7);
    assert_eq!(v["verdict"], "HIGH_RISK");
    assert_eq!(v["reachable"], "unknown");
    assert_eq!(v["signals"].as_array().unwrap().len(), 3);
}

#[test]
fn test_json_batch_has_summary() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &[
            "check",
            "https://example.com",
            "http://192.168.1.1/login",
            "not a url###",
            "--no-probe",
            "--format",
            "json",
        ],
    );
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("Invalid JSON");
    let results = v["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["verdict"], "LOW_RISK");
    assert_eq!(results[2]["verdict"], "INVALID");
    assert_eq!(v["summary"]["total"], 3);
    assert_eq!(v["summary"]["high_risk"], 1);
    assert_eq!(v["summary"]["invalid"], 1);
}

#[test]
fn test_report_format_matches_export_layout() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["check", "https://sub.sub.sub.example.com", "--no-probe", "-f", "report"],
    );
    assert_eq!(code(&out), 0);
    let text = stdout(&out);
    assert!(text.starts_with("Fake QR & Phishing URL Detector Report\n"));
    assert!(text.contains("Verdict: LOW RISK (score 1)\n"));
    assert!(text.contains("- Unusually deep subdomain (4 dots) (+1)\n"));
}

#[test]
fn test_text_output_shows_verdict() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["check", "example.com", "--no-probe"]);
    assert_eq!(code(&out), 0);
    let text = console::strip_ansi_codes(&stdout(&out)).to_string();
    assert!(text.contains("Verdict: LOW RISK (score 2)"), "got: {text}");
    assert!(text.contains("Uses HTTP instead of HTTPS (+2)"));
}

// ============================================================================
// --fail-on
// ============================================================================

#[test]
fn test_fail_on_high_risk_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["check", "http://192.168.1.1/login", "--no-probe", "--fail-on", "high-risk"],
    );
    assert_eq!(code(&out), 1);
    assert!(stderr(&out).contains("--fail-on=high-risk"));
}

#[test]
fn test_fail_on_not_reached_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["check", "https://example.com", "--no-probe", "--fail-on", "suspicious"],
    );
    assert_eq!(code(&out), 0);
}

// ============================================================================
// --export
// ============================================================================

#[test]
fn test_export_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["check", "http://192.168.1.1/login", "--no-probe", "--export", "saved.txt"],
    );
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));

    let report = std::fs::read_to_string(dir.path().join("saved.txt")).unwrap();
    assert!(report.starts_with("Fake QR & Phishing URL Detector Report\n==========================================\n\n"));
    assert!(report.contains("Verdict: HIGH RISK (score 7)\n"));
    assert!(report.contains("- IP address used as host (+3)\n"));
}

#[test]
fn test_export_default_filename() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["check", "https://example.com", "--no-probe", "--export"]);
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));

    let reports: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|name| name.starts_with("report_") && name.ends_with(".txt"))
        .collect();
    assert_eq!(reports.len(), 1, "files: {reports:?}");
    let stamp = &reports[0]["report_".len()..reports[0].len() - ".txt".len()];
    assert!(stamp.parse::<i64>().is_ok());
}

#[test]
fn test_export_rejects_multiple_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(
        dir.path(),
        &["check", "a.com", "b.com", "--no-probe", "--export", "x.txt"],
    );
    assert_ne!(code(&out), 0);
    assert!(!dir.path().join("x.txt").exists());
}

// ============================================================================
// Input handling
// ============================================================================

#[test]
fn test_blank_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["check", "   ", "--no-probe"]);
    assert_ne!(code(&out), 0);
    assert!(stderr(&out).contains("Please enter a URL."));
}

#[test]
fn test_invalid_url_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["check", "not a url###", "--no-probe", "-f", "json"]);
    assert_eq!(code(&out), 0);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("Invalid JSON");
    assert_eq!(v["verdict"], "INVALID");
    assert!(v["score"].is_null());
}

#[test]
fn test_input_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("urls.txt"),
        "# from the flyer\nhttps://example.com\n\nhttp://192.168.1.1/login\n",
    )
    .unwrap();
    let out = run_in(
        dir.path(),
        &["check", "--input-file", "urls.txt", "--no-probe", "-f", "json"],
    );
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("Invalid JSON");
    assert_eq!(v["summary"]["total"], 2);
}

#[test]
fn test_scan_decodes_and_scores() {
    let dir = tempfile::tempdir().unwrap();
    write_qr(&dir.path().join("flyer.png"), "http://192.168.1.1/login");
    let out = run_in(dir.path(), &["scan", "flyer.png", "--no-probe", "-f", "json"]);
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));

    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("Invalid JSON");
    assert_eq!(v["input"], "http://192.168.1.1/login");
    assert_eq!(v["score"], 7);
    assert_eq!(v["verdict"], "HIGH_RISK");
}

#[test]
fn test_scan_mixed_batch_exits_1_but_reports_decoded() {
    let dir = tempfile::tempdir().unwrap();
    write_qr(&dir.path().join("good.png"), "https://example.com");
    std::fs::write(dir.path().join("bad.png"), b"not really a png").unwrap();
    let out = run_in(dir.path(), &["scan", "good.png", "bad.png", "--no-probe", "-f", "json"]);
    assert_eq!(code(&out), 1);
    let v: serde_json::Value = serde_json::from_str(&stdout(&out)).expect("Invalid JSON");
    assert_eq!(v["verdict"], "LOW_RISK");
    assert!(stderr(&out).contains("bad.png"));
}

#[test]
fn test_scan_unreadable_image_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("flyer.png"), b"not really a png").unwrap();
    let out = run_in(dir.path(), &["scan", "flyer.png", "--no-probe"]);
    assert_eq!(code(&out), 1);
    assert!(stderr(&out).contains("Could not read image"));
    assert!(stdout(&out).is_empty());
}

#[test]
fn test_init_creates_config() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_in(dir.path(), &["init"]);
    assert_eq!(code(&out), 0, "stderr: {}", stderr(&out));
    let text = console::strip_ansi_codes(&stdout(&out)).to_string();
    assert!(text.contains("Created"), "got: {text}");
    assert!(text.contains("config.toml"));

    // second run leaves the file alone
    let again = run_in(dir.path(), &["init"]);
    let text = console::strip_ansi_codes(&stdout(&again)).to_string();
    assert!(text.contains("already exists"), "got: {text}");
}
