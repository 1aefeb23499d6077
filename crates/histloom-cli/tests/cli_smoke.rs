//! Smoke tests for the `histloom` binary surface. Nothing here hits
//! the network; feed behavior is covered in histloom-feed and the
//! pipeline in histloom-synth.

use std::ffi::OsStr;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::process::{Command, Output};
use std::thread;

fn run_histloom<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let bin = env!("CARGO_BIN_EXE_histloom");
    Command::new(bin)
        .args(args)
        .output()
        .expect("histloom command should execute")
}

#[test]
fn help_lists_the_run_options() {
    let output = run_histloom(["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--user"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--max-timelines"));
}

#[test]
fn missing_user_is_a_usage_error() {
    let output = run_histloom(["--output", "/tmp/never-created"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--user"));
}

fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("fixture listener should bind");
    let addr = listener.local_addr().expect("fixture listener address");

    let status_line = status_line.to_string();
    let body = body.to_string();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("fixture should accept a connection");
        let mut request = [0u8; 4096];
        let _ = stream.read(&mut request);
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .expect("fixture response should be written");
    });

    format!("http://{addr}")
}

#[test]
fn failing_feed_exits_nonzero_and_leaves_no_output_store() {
    let base = serve_once("HTTP/1.1 404 Not Found", r#"{"message":"Not Found"}"#);
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let out = dir.path().join("out");

    let output = run_histloom([
        "--user",
        "nobody",
        "--output",
        out.to_str().expect("temp path should be utf-8"),
        "--feed-base-url",
        base.as_str(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"), "stderr was: {stderr}");
    // The feed failed before the store was touched.
    assert!(!out.exists());
}

#[test]
fn empty_feed_is_fatal_before_the_store_is_created() {
    let base = serve_once("HTTP/1.1 200 OK", "[]");
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let out = dir.path().join("out");

    let output = run_histloom([
        "--user",
        "nobody",
        "--output",
        out.to_str().expect("temp path should be utf-8"),
        "--feed-base-url",
        base.as_str(),
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no push events"), "stderr was: {stderr}");
    assert!(!out.exists());
}

#[test]
fn version_flag_reports_the_crate_version() {
    let output = run_histloom(["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
