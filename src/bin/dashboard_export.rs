use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use treatment_dashboard::api::{DashboardConfig, build_dashboard};
use treatment_dashboard::core::{SampleSource, TreatmentDataset};
use treatment_dashboard::render::NullRenderer;
use treatment_dashboard::telemetry::init_default_tracing;

const USAGE: &str = "usage: dashboard_export <export|check> [--dataset <path>] [--config <path>] [--seed <u64>|--entropy] [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Export,
    Check,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    dataset: Option<PathBuf>,
    config: Option<PathBuf>,
    source: Option<SampleSource>,
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportSummary {
    generated_at: String,
    dataset: String,
    treatments: usize,
    charts: usize,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            DashboardConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => DashboardConfig::default(),
    };
    if let Some(source) = args.source {
        config = config.with_sample_source(source);
    }

    let dataset = match &args.dataset {
        Some(path) => TreatmentDataset::from_json_path(path, config.reach_consistency),
        None => TreatmentDataset::builtin(config.reach_consistency),
    }
    .map_err(|err| err.to_string())?;

    let dashboard = build_dashboard(&dataset, &config).map_err(|err| err.to_string())?;
    let mut renderer = NullRenderer::default();
    dashboard
        .render_with(&mut renderer)
        .map_err(|err| err.to_string())?;

    match args.command {
        CommandKind::Check => {
            let summary = ExportSummary {
                generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                dataset: args
                    .dataset
                    .as_ref()
                    .map_or_else(|| "builtin".to_owned(), |p| p.display().to_string()),
                treatments: dataset.len(),
                charts: renderer.rendered_kinds.len(),
            };
            let payload = serde_json::to_string_pretty(&summary)
                .map_err(|err| format!("failed to serialize summary: {err}"))?;
            println!("{payload}");
            Ok(())
        }
        CommandKind::Export => {
            let output = args
                .output
                .ok_or_else(|| "export requires --output".to_owned())?;
            let payload = dashboard
                .to_json_contract_v1_pretty()
                .map_err(|err| err.to_string())?;
            fs::write(&output, payload)
                .map_err(|err| format!("failed to write `{}`: {err}", output.display()))
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("export") => CommandKind::Export,
        Some("check") => CommandKind::Check,
        _ => return Err(USAGE.to_owned()),
    };

    let mut dataset = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut source = None::<SampleSource>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--dataset" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --dataset".to_owned())?;
                dataset = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --seed".to_owned())?;
                let seed = value
                    .parse::<u64>()
                    .map_err(|err| format!("invalid --seed `{value}`: {err}"))?;
                source = Some(SampleSource::Seeded { seed });
            }
            "--entropy" => source = Some(SampleSource::Entropy),
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        command,
        dataset,
        config,
        source,
        output,
    })
}
