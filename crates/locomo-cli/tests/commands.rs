use std::io::Cursor;

use locomo_cli::commands::{self, Context};
use locomo_cli::config::{ENDPOINT_ENV, LocomoConfig};
use locomo_export::ReportFormat;
use locomo_export::styles::DocumentStyles;
use locomo_instruments::advice::AdviceCatalog;

fn context() -> Context {
    Context {
        config: LocomoConfig::default(),
        catalog: AdviceCatalog::builtin().clone(),
        styles: DocumentStyles::default(),
        today: jiff::civil::date(2026, 10, 19),
    }
}

/// Stand-up 2 and a 0.9 two-step put this run at level 2.
fn level_two_script() -> Cursor<Vec<u8>> {
    let mut lines = vec!["Hanako", "74", "female", "150", "2", "70", "65"];
    lines.extend(std::iter::repeat_n("0", 25));
    Cursor::new(format!("{}\n", lines.join("\n")).into_bytes())
}

#[test]
fn check_writes_session_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut output = Vec::new();

    let written = commands::check(
        &context(),
        level_two_script(),
        &mut output,
        false,
        Some(dir.path().to_path_buf()),
    )
    .unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "locomo-report_Hanako_2026-10-19.session.json",
            "locomo-report_Hanako_2026-10-19.md",
            "locomo-report_Hanako_2026-10-19.docx",
        ]
    );
    for path in &written {
        assert!(path.exists());
    }

    let markdown = std::fs::read_to_string(&written[1]).unwrap();
    assert!(markdown.contains("Locomo level 2"));

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Result: Locomo level 2"));
    assert!(output.contains("Saved"));
}

#[test]
fn cancelled_check_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut output = Vec::new();
    let input = Cursor::new(b"Hanako\n74\n".to_vec());

    let written =
        commands::check(&context(), input, &mut output, false, Some(dir.path().to_path_buf()))
            .unwrap();

    assert!(written.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(String::from_utf8(output).unwrap().contains("Check cancelled"));
}

#[test]
fn report_rerenders_saved_session() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context();
    let written = commands::check(
        &ctx,
        level_two_script(),
        &mut Vec::new(),
        false,
        Some(dir.path().to_path_buf()),
    )
    .unwrap();

    let out = dir.path().join("again");
    let path = commands::report(&ctx, &written[0], ReportFormat::Json, Some(out.clone())).unwrap();

    assert_eq!(path.parent().unwrap(), out);
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["level"], 2);
    assert_eq!(json["name"], "Hanako");
}

#[test]
fn report_rejects_incomplete_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("partial.json");
    let session = locomo_core::models::session::AssessmentSession::new();
    std::fs::write(&path, session.to_json().unwrap()).unwrap();

    let err = commands::report(&context(), &path, ReportFormat::Markdown, None).unwrap_err();
    assert!(err.to_string().contains("profile"));
}

/// Nothing listens on port 1, so the connection is refused.
const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1/log";

fn saved_level_two_session(ctx: &Context, dir: &std::path::Path) -> std::path::PathBuf {
    let written = commands::check(
        ctx,
        level_two_script(),
        &mut Vec::new(),
        false,
        Some(dir.to_path_buf()),
    )
    .unwrap();
    written[0].clone()
}

#[test]
fn send_without_endpoint_is_refused() {
    if std::env::var_os(ENDPOINT_ENV).is_some() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let ctx = context();
    let path = saved_level_two_session(&ctx, dir.path());

    let mut output = Vec::new();
    let err = commands::send(&ctx, &path, &mut output).unwrap_err();

    assert!(err.to_string().contains("no logging endpoint configured"));
    assert!(output.is_empty());
}

#[test]
fn failed_send_keeps_session_and_offers_retry() {
    if std::env::var_os(ENDPOINT_ENV).is_some() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context();
    let path = saved_level_two_session(&ctx, dir.path());
    let before = std::fs::read(&path).unwrap();
    ctx.config.endpoint_url = Some(UNREACHABLE_ENDPOINT.to_string());

    let mut output = Vec::new();
    let err = commands::send(&ctx, &path, &mut output).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("could not send the result"), "{message}");
    assert!(message.contains("try again"), "{message}");
    assert!(!String::from_utf8(output).unwrap().contains("Result sent"));
    assert_eq!(std::fs::read(&path).unwrap(), before);
}

#[test]
fn check_with_send_saves_reports_before_failing() {
    if std::env::var_os(ENDPOINT_ENV).is_some() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let mut ctx = context();
    ctx.config.endpoint_url = Some(UNREACHABLE_ENDPOINT.to_string());

    let err = commands::check(
        &ctx,
        level_two_script(),
        &mut Vec::new(),
        true,
        Some(dir.path().to_path_buf()),
    )
    .unwrap_err();

    assert!(err.to_string().contains("Your report is saved"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn send_rejects_unreadable_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{not json").unwrap();

    let mut ctx = context();
    ctx.config.endpoint_url = Some(UNREACHABLE_ENDPOINT.to_string());
    assert!(commands::send(&ctx, &path, &mut Vec::new()).is_err());
}

#[test]
fn instruments_lists_all_three() {
    let mut output = Vec::new();
    commands::instruments(&mut output).unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("(stand_up)"));
    assert!(output.contains("(two_step)"));
    assert!(output.contains("(locomo25)"));
    assert!(output.contains("LowerIsBetter"));
    assert!(output.contains("25. Going on trips"));
    assert!(output.contains("4 = Unable"));
}
