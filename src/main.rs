// iconsmith - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. The generation run and the process exit status

use clap::Parser;
use iconsmith::app::run::{self, GeneratorConfig};
use iconsmith::platform::config::{self, AppConfig, PlatformPaths};
use iconsmith::util;
use iconsmith::util::error::IconsmithError;
use std::path::{Path, PathBuf};

/// iconsmith - Generate PWA, maskable, Apple touch and favicon PNGs from one SVG.
///
/// With no arguments, renders client/public/favicon.svg into client/public/.
#[derive(Parser, Debug)]
#[command(name = "iconsmith", version, about)]
struct Cli {
    /// Source SVG (overrides config.toml and the built-in default).
    #[arg(short = 's', long = "source")]
    source: Option<PathBuf>,

    /// Output directory (overrides config.toml and the built-in default).
    #[arg(short = 'o', long = "out-dir")]
    out_dir: Option<PathBuf>,

    /// Configuration file. Defaults to ./config.toml, then the platform config directory.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Load config.toml from the explicit path, the working directory, or the
/// platform config directory, in that order.
fn load_app_config(cli: &Cli) -> util::error::Result<(AppConfig, Vec<String>)> {
    let loaded = if let Some(ref path) = cli.config {
        config::load_config(path, true)?
    } else {
        let local = Path::new(util::constants::CONFIG_FILE_NAME);
        if local.exists() {
            config::load_config(local, false)?
        } else {
            config::load_config(&PlatformPaths::resolve().config_file(), false)?
        }
    };
    Ok(loaded)
}

/// Print the error to stderr. Each error's message already embeds its
/// cause, so the chain is not walked again.
fn report_error(err: &IconsmithError) {
    eprintln!("Error: {err}");
}

fn main() {
    let cli = Cli::parse();

    let (app_config, warnings) = match load_app_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            report_error(&e);
            std::process::exit(1);
        }
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    for warning in &warnings {
        tracing::warn!("{}", warning);
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "iconsmith starting"
    );

    // CLI flag > config.toml > built-in default.
    let defaults = GeneratorConfig::default();
    let generator_config = GeneratorConfig {
        source_path: cli
            .source
            .or(app_config.source_path)
            .unwrap_or(defaults.source_path),
        output_dir: cli
            .out_dir
            .or(app_config.output_dir)
            .unwrap_or(defaults.output_dir),
        icon_set: app_config.icon_set,
        write_manifest: app_config.write_manifest,
        render: defaults.render,
    };

    if let Err(e) = run::run(&generator_config, |line| println!("{line}")) {
        report_error(&e);
        std::process::exit(1);
    }
}
