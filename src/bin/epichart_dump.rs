use std::path::PathBuf;

use epichart::api::{ChartDataConfig, ChartDataEngine};
use epichart::core::{Scope, ViewKind};
use epichart::source::{DiseaseShClient, HttpSourceConfig};
use epichart::telemetry::init_tracing_with_default;

const USAGE: &str = "usage: epichart-dump <all|country> [view] [--per100k] [--all-views] [--base-url <url>] [--config <path>] [--output <path>]";

#[derive(Debug)]
struct CliArgs {
    scope: Scope,
    view: ViewKind,
    per100k: bool,
    all_views: bool,
    base_url: Option<String>,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn main() {
    let _ = init_tracing_with_default("warn");
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("error: failed to start runtime: {err}");
            std::process::exit(1);
        }
    };
    if let Err(err) = runtime.block_on(run()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartDataConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartDataConfig::default(),
    };

    let mut source_config = HttpSourceConfig::default();
    if let Some(base_url) = &args.base_url {
        source_config = source_config.with_base_url(base_url);
    }
    let client = DiseaseShClient::new(source_config).map_err(|err| err.to_string())?;

    let mut engine =
        ChartDataEngine::new(&client, &client, config).map_err(|err| err.to_string())?;
    engine
        .load_scope(args.scope.clone(), args.per100k)
        .await
        .map_err(|err| err.to_string())?;

    let payload = if args.all_views {
        engine
            .state()
            .ok_or_else(|| "scope did not load".to_owned())?
            .to_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?
    } else {
        engine
            .select_view(args.view.as_str())
            .map_err(|err| err.to_string())?
    };

    match &args.output {
        Some(path) => std::fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            println!("{payload}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let scope = match args.next().as_deref() {
        None | Some("--help" | "-h") => return Err(USAGE.to_owned()),
        Some(selector) => Scope::from_selector(selector),
    };

    let mut view = ViewKind::default();
    let mut per100k = false;
    let mut all_views = false;
    let mut base_url = None::<String>;
    let mut config = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--per100k" => per100k = true,
            "--all-views" => all_views = true,
            "--base-url" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --base-url".to_owned())?;
                base_url = Some(value);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            name if !name.starts_with("--") => {
                view = name.parse().map_err(|err| format!("{err}\n{USAGE}"))?;
            }
            _ => return Err(format!("unknown argument `{arg}`")),
        }
    }

    Ok(CliArgs {
        scope,
        view,
        per100k,
        all_views,
        base_url,
        config,
        output,
    })
}
