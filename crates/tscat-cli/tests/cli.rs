//! End-to-end tests for the `tscat` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const FIXTURE: &str = include_str!("../../tscat/tests/fixtures/main_zh-CHS.ts");

fn tscat(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tscat"))
        .arg("--color=never")
        .args(args)
        .env_remove("TSCAT_LOG")
        .output()
        .unwrap()
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn check_accepts_fixture() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "main_zh-CHS.ts", FIXTURE);

    let output = tscat(&["check", path_str(&file)]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert!(stdout(&output).contains("65 messages in 7 contexts"));
}

#[test]
fn check_reports_broken_file() {
    let dir = TempDir::new().unwrap();
    let good = write(&dir, "good.ts", FIXTURE);
    let bad = write(&dir, "bad.ts", "<TS>\n<context><name>C</oops></context></TS>");

    let output = tscat(&["check", "--json", path_str(&good), path_str(&bad)]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));

    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["ok"], true);
    assert_eq!(results[1]["ok"], false);
    assert_eq!(results[1]["error"]["line"], 2);
}

#[test]
fn lookup_renders_translation() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "main_zh-CHS.ts", FIXTURE);

    let output = tscat(&[
        "lookup",
        "--file",
        path_str(&file),
        "--context",
        "SoftwarePanel",
        "--source",
        "Uninstall %1",
        "-a",
        "sunnypilot",
    ]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output).trim_end(), "卸载 sunnypilot");

    let output = tscat(&[
        "lookup",
        "-f",
        path_str(&file),
        "-c",
        "QObject",
        "-s",
        "%n day(s) ago",
        "-n",
        "3",
        "--json",
    ]);
    let result: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(result["result"], "3 天前");
    assert_eq!(result["status"], "finished");
    assert_eq!(result["translated"], true);
}

#[test]
fn lookup_suggests_similar_context() {
    let dir = TempDir::new().unwrap();
    let file = write(&dir, "main_zh-CHS.ts", FIXTURE);

    let output = tscat(&[
        "lookup", "-f", path_str(&file), "-c", "DevicePanl", "-s", "Reboot",
    ]);
    assert_eq!(stdout(&output).trim_end(), "Reboot");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("did you mean DevicePanel?"), "{stderr}");
}

#[test]
fn coverage_strict_fails_on_unfinished() {
    let dir = TempDir::new().unwrap();
    let file = write(
        &dir,
        "main_de.ts",
        r#"<TS language="de"><context><name>C</name>
            <message><source>Yes</source><translation>Ja</translation></message>
            <message><source>No</source><translation type="unfinished"></translation></message>
        </context></TS>"#,
    );

    let output = tscat(&["coverage", path_str(&file)]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert!(stdout(&output).contains("50.0%"));

    let output = tscat(&["coverage", "--strict", "--json", path_str(&file)]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    let results: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(results[0]["unfinished"], 1);
    assert_eq!(results[0]["unfinished_messages"][0]["source"], "No");
}

#[test]
fn lint_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let source = write(
        &dir,
        "main_en.ts",
        r#"<TS language="en"><context><name>C</name>
            <message><source>Uninstall %1</source><translation>Uninstall %1</translation></message>
            <message><source>Cancel</source><translation>Cancel</translation></message>
        </context></TS>"#,
    );
    let target = write(
        &dir,
        "main_de.ts",
        r#"<TS language="de"><context><name>C</name>
            <message><source>Uninstall %1</source><translation>Deinstallieren</translation></message>
        </context></TS>"#,
    );

    let output = tscat(&["lint", path_str(&target), "--against", path_str(&source), "--json"]);
    assert_eq!(output.status.code(), Some(exitcode::DATAERR));
    let warnings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(warnings[0]["kind"], "placeholder_mismatch");
    assert_eq!(warnings[1]["kind"], "missing_message");
    assert_eq!(warnings[1]["source_text"], "Cancel");

    let output = tscat(&["lint", path_str(&source)]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
}

#[test]
fn normalize_collapses_duplicates() {
    let dir = TempDir::new().unwrap();
    let input = write(
        &dir,
        "in.ts",
        r#"<TS version="2.1" language="zh_CN"><context><name>DevicePanel</name>
            <message><source>Reboot</source><translation>重启</translation></message>
            <message><source>Reboot</source><translation>重新启动</translation></message>
        </context></TS>"#,
    );
    let out = dir.path().join("out.ts");

    let output = tscat(&["normalize", path_str(&input), "-o", path_str(&out)]);
    assert_eq!(output.status.code(), Some(exitcode::OK));
    let written = fs::read_to_string(&out).unwrap();
    assert_eq!(written.matches("<message>").count(), 1);
    assert!(written.contains("<translation>重新启动</translation>"));

    let output = tscat(&["normalize", path_str(&input), "--duplicates", "first-wins"]);
    assert!(stdout(&output).contains("<translation>重启</translation>"));
}
