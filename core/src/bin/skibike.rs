use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use skibike_core::cli::{parse_speeds, print_report};
use skibike_core::{
    load_params, save_report_json, save_series_csv, simulate_with_metrics, BikeConfiguration,
    BikeParams, DriveMode, Metrics, Terrain,
};

/// Ski-bike: kraftbalanse, kjøremodus og batterirekkevidde per målfart.
#[derive(Parser, Debug)]
#[command(name = "skibike", version)]
struct Args {
    /// Parametre som JSON (se BikeParams)
    #[arg(long)]
    config: Option<String>,
    /// Rytter + sykkel (kg) når --config ikke er gitt
    #[arg(long)]
    mass: Option<f64>,
    /// pedal | motor | both
    #[arg(long, default_value = "motor")]
    mode: String,
    /// "0..=10", "0..11" eller "0,2.5,5"
    #[arg(long, default_value = "0..=10")]
    speeds: String,
    /// snow | ice | default (overstyrer config)
    #[arg(long)]
    terrain: Option<String>,
    /// Stigning i prosent (overstyrer config)
    #[arg(long)]
    gradient: Option<f64>,
    #[arg(long)]
    speed_of_interest: Option<f64>,
    /// Skriv rapport som JSON
    #[arg(long)]
    out: Option<String>,
    /// Skriv plott-serier som CSV
    #[arg(long)]
    csv: Option<String>,
    /// Skriv prometheus-tellere til stdout
    #[arg(long)]
    metrics: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .context("failed to init logger")?;

    let mut params = match (&args.config, args.mass) {
        (Some(path), _) => load_params(path).with_context(|| format!("loading {path}"))?,
        (None, Some(mass)) => BikeParams::with_mass(mass),
        (None, None) => bail!("either --config or --mass is required"),
    };
    if let Some(mass) = args.mass {
        params.mass_kg = mass;
    }
    if let Some(t) = &args.terrain {
        params.terrain = t.parse::<Terrain>()?;
    }
    if let Some(g) = args.gradient {
        params.gradient_pct = g;
    }
    if let Some(v) = args.speed_of_interest {
        params.speed_of_interest_ms = v;
    }

    let cfg = BikeConfiguration::new(params).context("invalid configuration")?;
    let mode: DriveMode = args.mode.parse()?;
    let speeds = parse_speeds(&args.speeds)?;

    let metrics = Metrics::new().context("failed to build metrics registry")?;
    let report = simulate_with_metrics(&cfg, mode, &speeds, &metrics);
    print_report(&report, &cfg);

    if let Some(path) = &args.out {
        save_report_json(&report, path).with_context(|| format!("writing {path}"))?;
    }
    if let Some(path) = &args.csv {
        save_series_csv(&report.series(), path).with_context(|| format!("writing {path}"))?;
    }
    if args.metrics {
        print!("{}", metrics.render()?);
    }

    info!("done");
    Ok(())
}
