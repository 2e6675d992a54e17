//! Integration tests for building catalogs from .ts documents

use std::io::Write;

use tempfile::NamedTempFile;
use tscat::{Catalog, ContextEntries, DuplicatePolicy, LoadError, LoadOptions, Status};

const FIXTURE: &str = include_str!("fixtures/main_zh-CHS.ts");

const DUPLICATES: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!DOCTYPE TS>
<TS version="2.1" language="zh_CN">
<context>
    <name>DevicePanel</name>
    <message>
        <source>Reboot</source>
        <translation>重启</translation>
    </message>
    <message>
        <source>Power Off</source>
        <translation>关机</translation>
    </message>
    <message>
        <source>Reboot</source>
        <translation>重新启动</translation>
    </message>
</context>
</TS>
"#;

// =========================================================================
// Fixture
// =========================================================================

#[test]
fn test_fixture_counts() {
    let catalog = Catalog::load_str(FIXTURE).unwrap();
    assert_eq!(catalog.language(), "zh_CN");
    assert_eq!(catalog.version(), Some("2.1"));
    assert_eq!(catalog.source_language(), None);

    let stats = catalog.stats();
    assert_eq!(stats.contexts, 7);
    assert_eq!(stats.entries, 65);
    assert_eq!(stats.vanished, 3);
    assert_eq!(stats.unfinished, 0);
    assert_eq!(stats.finished, 62);
    assert_eq!(stats.plural, 5);
    assert_eq!(stats.completion(), 100.0);
}

#[test]
fn test_fixture_entry_fields() {
    let catalog = Catalog::load_str(FIXTURE).unwrap();

    let close = catalog.get("AbstractAlert", "Close").unwrap();
    assert_eq!(close.variants, vec!["关闭"]);
    assert_eq!(close.status, Status::Finished);
    assert!(!close.is_plural);

    let minutes = catalog.get("QObject", "%n minute(s) ago").unwrap();
    assert!(minutes.is_plural);
    assert_eq!(minutes.variants, vec!["%n 分钟前"]);

    let high = catalog.get("Sidebar", "HIGH").unwrap();
    assert_eq!(high.status, Status::Vanished);
    assert_eq!(high.variants, vec!["过热"]);
}

#[test]
fn test_fixture_unescapes_text() {
    let catalog = Catalog::load_str(FIXTURE).unwrap();
    let entry = catalog
        .get(
            "FirehosePanel",
            "<span stylesheet='font-size: 60px; font-weight: bold; color: #e74c3c;'>INACTIVE</span>: connect to an unmetered network",
        )
        .unwrap();
    assert_eq!(
        entry.variants[0],
        "<span stylesheet='font-size: 60px; font-weight: bold; color: #e74c3c;'>闲置</span>：请连接到不限流量的网络"
    );
}

#[test]
fn test_source_text_is_not_trimmed() {
    let catalog = Catalog::load_str(FIXTURE).unwrap();
    assert!(catalog.get("DevicePanel", " Your device is pointed %1° %2 and %3° %4.").is_some());
    assert!(catalog.get("DevicePanel", "Your device is pointed %1° %2 and %3° %4.").is_none());
}

#[test]
fn test_contexts_keep_file_order() {
    let catalog = Catalog::load_str(FIXTURE).unwrap();
    let names: Vec<&str> = catalog.contexts().map(ContextEntries::name).collect();
    assert_eq!(names.first(), Some(&"AbstractAlert"));
    assert_eq!(names.last(), Some(&"SoftwarePanel"));

    let sidebar = catalog.context("Sidebar").unwrap();
    let sources: Vec<&str> = sidebar.entries().iter().take(3).map(|e| e.source.as_str()).collect();
    assert_eq!(sources, vec!["CONNECT", "OFFLINE", "ONLINE"]);
}

// =========================================================================
// Duplicates
// =========================================================================

#[test]
fn test_duplicate_last_wins_by_default() {
    let catalog = Catalog::load_str(DUPLICATES).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("DevicePanel", "Reboot").unwrap().variants, vec!["重新启动"]);
}

#[test]
fn test_duplicate_keeps_first_position() {
    let catalog = Catalog::load_str(DUPLICATES).unwrap();
    let sources: Vec<&str> = catalog.entries().map(|e| e.source.as_str()).collect();
    assert_eq!(sources, vec!["Reboot", "Power Off"]);
}

#[test]
fn test_duplicate_first_wins() {
    let options = LoadOptions::builder()
        .duplicates(DuplicatePolicy::FirstWins)
        .build();
    let catalog = Catalog::load_str_with(DUPLICATES, &options).unwrap();
    assert_eq!(catalog.get("DevicePanel", "Reboot").unwrap().variants, vec!["重启"]);
}

#[test]
fn test_duplicate_across_repeated_context_blocks() {
    let catalog = Catalog::load_str(
        r#"<TS language="zh_CN">
        <context><name>DevicePanel</name>
            <message><source>Reboot</source><translation>重启</translation></message>
        </context>
        <context><name>SoftwarePanel</name>
            <message><source>Reboot</source><translation>立即重启</translation></message>
        </context>
        <context><name>DevicePanel</name>
            <message><source>Reboot</source><translation>重新启动</translation></message>
        </context>
        </TS>"#,
    )
    .unwrap();
    assert_eq!(catalog.stats().contexts, 2);
    assert_eq!(catalog.get("DevicePanel", "Reboot").unwrap().variants, vec!["重新启动"]);
    assert_eq!(catalog.get("SoftwarePanel", "Reboot").unwrap().variants, vec!["立即重启"]);
}

#[test]
fn test_vanished_never_replaces_live_entry() {
    for policy in [DuplicatePolicy::LastWins, DuplicatePolicy::FirstWins] {
        let options = LoadOptions::builder().duplicates(policy).build();
        let catalog = Catalog::load_str_with(
            r#"<TS language="zh_CN"><context><name>Sidebar</name>
                <message><source>OK</source><translation>好</translation></message>
                <message><source>OK</source><translation type="vanished">一般</translation></message>
            </context></TS>"#,
            &options,
        )
        .unwrap();
        let entry = catalog.get("Sidebar", "OK").unwrap();
        assert_eq!(entry.status, Status::Finished, "{policy:?}");
        assert_eq!(entry.variants, vec!["好"]);
    }
}

#[test]
fn test_live_entry_replaces_vanished() {
    for policy in [DuplicatePolicy::LastWins, DuplicatePolicy::FirstWins] {
        let options = LoadOptions::builder().duplicates(policy).build();
        let catalog = Catalog::load_str_with(
            r#"<TS language="zh_CN"><context><name>Sidebar</name>
                <message><source>OK</source><translation type="vanished">一般</translation></message>
                <message><source>OK</source><translation type="unfinished">好</translation></message>
            </context></TS>"#,
            &options,
        )
        .unwrap();
        let entry = catalog.get("Sidebar", "OK").unwrap();
        assert_eq!(entry.status, Status::Unfinished, "{policy:?}");
    }
}

// =========================================================================
// Statuses and defaults
// =========================================================================

#[test]
fn test_missing_translation_is_unfinished() {
    let catalog = Catalog::load_str(
        r#"<TS language="de"><context><name>C</name><message><source>Hello</source></message></context></TS>"#,
    )
    .unwrap();
    let entry = catalog.get("C", "Hello").unwrap();
    assert_eq!(entry.status, Status::Unfinished);
    assert_eq!(entry.variants, vec![""]);
    assert!(!entry.is_servable());
}

#[test]
fn test_missing_language_uses_default() {
    let content = r#"<TS version="2.1"><context><name>C</name></context></TS>"#;
    assert_eq!(Catalog::load_str(content).unwrap().language(), "en");

    let options = LoadOptions::builder().default_language("fr").build();
    assert_eq!(Catalog::load_str_with(content, &options).unwrap().language(), "fr");
}

#[test]
fn test_context_comment_is_kept() {
    let catalog = Catalog::load_str(
        r#"<TS><context><name>C</name><comment>first</comment></context><context><name>C</name><comment>second</comment></context></TS>"#,
    )
    .unwrap();
    assert_eq!(catalog.context("C").unwrap().comment(), Some("first"));
}

#[test]
fn test_similar_contexts() {
    let catalog = Catalog::load_str(FIXTURE).unwrap();
    assert_eq!(catalog.similar_contexts("DevicePanl"), vec!["DevicePanel"]);
    assert_eq!(catalog.similar_contexts("Sidbar"), vec!["Sidebar"]);
    assert!(catalog.similar_contexts("Completely Different").is_empty());
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn test_parse_error_from_string() {
    let err = Catalog::load_str("<TS>\n<context>").unwrap_err();
    match err {
        LoadError::Parse { path, message, .. } => {
            assert_eq!(path.to_string_lossy(), "<string>");
            assert_eq!(message, "unexpected end of file");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_load_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();

    let catalog = Catalog::load_file(file.path()).unwrap();
    assert_eq!(catalog, Catalog::load_str(FIXTURE).unwrap());
}

#[test]
fn test_load_file_parse_error_has_path() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<TS>\n  <context><name>C</name></wrong></TS>").unwrap();

    let err = Catalog::load_file(file.path()).unwrap_err();
    match &err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, file.path());
            assert_eq!(*line, 2);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(err.to_string().starts_with(&file.path().display().to_string()));
}

#[test]
fn test_load_file_invalid_utf8() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"<TS>\xfe\xff</TS>").unwrap();

    let err = Catalog::load_file(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { ref message, .. } if message == "invalid UTF-8"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::load_file(dir.path().join("missing.ts")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }), "{err:?}");
}
