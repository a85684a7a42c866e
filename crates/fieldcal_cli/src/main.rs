//! CLI probe for schedule normalization.
//!
//! # Responsibility
//! - Normalize one payload (file or stdin) for one schedule category.
//! - Print entries, summaries and calendar markings as JSON on stdout.

use clap::Parser;
use fieldcal_core::{CalendarTheme, RawSchedulePayload, ScheduleBoard, ScheduleCategory};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "fieldcal",
    version,
    about = "Normalize a farm schedule payload into calendar state"
)]
struct CliArgs {
    /// Schedule category: crop, livestock or poultry.
    #[arg(long, default_value = "crop", value_parser = parse_category)]
    category: ScheduleCategory,

    /// JSON calendar theme overriding the built-in colors.
    #[arg(long)]
    theme: Option<PathBuf>,

    /// Payload file. Reads stdin when omitted.
    payload: Option<PathBuf>,
}

fn parse_category(value: &str) -> Result<ScheduleCategory, String> {
    value.parse::<ScheduleCategory>().map_err(|err| err.to_string())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(&args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("fieldcal: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<String, String> {
    let theme = match &args.theme {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read theme `{}`: {err}", path.display()))?;
            CalendarTheme::from_json(&text).map_err(|err| err.to_string())?
        }
        None => CalendarTheme::default(),
    };

    let body = read_payload(args.payload.as_deref())?;
    let mut board = ScheduleBoard::with_theme(args.category, theme);
    board.reload(&RawSchedulePayload::from_response_body(Some(&body)));

    let summaries = board
        .summaries()
        .into_iter()
        .map(|(date, summary)| json!({"date": date, "summary": summary}))
        .collect::<Vec<_>>();
    let report = json!({
        "category": board.category(),
        "core_version": fieldcal_core::core_version(),
        "entries": board.entries(),
        "summaries": summaries,
        "markings": board.markings(),
        "alert_dates": board.alert_dates(),
    });
    serde_json::to_string_pretty(&report).map_err(|err| format!("failed to encode report: {err}"))
}

fn read_payload(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read payload `{}`: {err}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("failed to read payload from stdin: {err}"))?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{run, CliArgs};
    use clap::Parser;
    use fieldcal_core::ScheduleCategory;
    use std::path::PathBuf;

    #[test]
    fn defaults_to_crop_and_stdin() {
        let args = CliArgs::try_parse_from(["fieldcal"]).expect("no args is valid");
        assert_eq!(args.category, ScheduleCategory::Crop);
        assert_eq!(args.theme, None);
        assert_eq!(args.payload, None);
    }

    #[test]
    fn parses_category_theme_and_payload() {
        let args = CliArgs::try_parse_from([
            "fieldcal",
            "--category",
            "Poultry",
            "--theme",
            "theme.json",
            "schedule.json",
        ])
        .expect("valid args");
        assert_eq!(args.category, ScheduleCategory::Poultry);
        assert_eq!(args.theme, Some(PathBuf::from("theme.json")));
        assert_eq!(args.payload, Some(PathBuf::from("schedule.json")));
    }

    #[test]
    fn rejects_unknown_flags_and_bad_categories() {
        assert!(CliArgs::try_parse_from(["fieldcal", "--verbose"]).is_err());
        assert!(CliArgs::try_parse_from(["fieldcal", "--category", "fish"]).is_err());
        assert!(CliArgs::try_parse_from(["fieldcal", "--category"]).is_err());
        assert!(CliArgs::try_parse_from(["fieldcal", "a.json", "b.json"]).is_err());
    }

    #[test]
    fn run_unwraps_json_encoded_payload_file() {
        let path = std::env::temp_dir().join(format!(
            "fieldcal-cli-payload-{}.json",
            std::process::id()
        ));
        let body = serde_json::to_string("[{'date':'2024-03-01','activity':'Plant seeds'}]")
            .expect("encode string body");
        std::fs::write(&path, body).expect("write payload file");

        let args = CliArgs::try_parse_from(["fieldcal", path.to_str().expect("utf-8 path")])
            .expect("valid args");
        let report = run(&args).expect("report should render");
        let _ = std::fs::remove_file(&path);

        let report: serde_json::Value = serde_json::from_str(&report).expect("report is JSON");
        assert_eq!(report["entries"][0]["activity"], "Plant seeds");
        assert_eq!(report["category"], "crop");
    }
}
