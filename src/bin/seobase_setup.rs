use std::env;

use anyhow::{anyhow, Context, Result};
use seobase::catalog::{
    config_file_path, ensure_workspace_structure, load_or_default, save,
};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let paths = ensure_workspace_structure()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let mut changed = !config_path.exists();

    if let Some(threshold) = args.cyrillic_threshold {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(anyhow!("--cyrillic-threshold must be between 0.0 and 1.0"));
        }
        if (config.heuristics.cyrillic_ratio_threshold - threshold).abs() > f32::EPSILON {
            config.heuristics.cyrillic_ratio_threshold = threshold;
            changed = true;
        }
    }
    if let Some(timeout_ms) = args.suggestion_timeout_ms {
        if config.suggestion.timeout_ms != timeout_ms {
            config.suggestion.timeout_ms = timeout_ms;
            changed = true;
        }
    }

    if changed {
        save(&config)?;
        println!("Variant engine settings recorded at {}", config_path.display());
    } else {
        println!("Variant engine settings already configured.");
    }
    println!("Catalog directory: {}", paths.catalog_dir.display());
    println!("Stats directory:   {}", paths.stats_dir.display());

    Ok(())
}

struct CliArgs {
    cyrillic_threshold: Option<f32>,
    suggestion_timeout_ms: Option<u64>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut cyrillic_threshold = None;
        let mut suggestion_timeout_ms = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--cyrillic-threshold" => {
                    let value = args
                        .next()
                        .context("Expected a ratio after --cyrillic-threshold")?;
                    cyrillic_threshold = Some(
                        value
                            .parse()
                            .context("--cyrillic-threshold expects a number, e.g. 0.6")?,
                    );
                }
                "--suggestion-timeout-ms" => {
                    let value = args
                        .next()
                        .context("Expected milliseconds after --suggestion-timeout-ms")?;
                    suggestion_timeout_ms = Some(
                        value
                            .parse()
                            .context("--suggestion-timeout-ms expects an integer")?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(Self {
            cyrillic_threshold,
            suggestion_timeout_ms,
        })
    }
}

fn print_usage() {
    println!("seobase setup");
    println!("Initializes the workspace and records variant engine settings in config.toml.");
    println!("Usage: cargo run --bin seobase_setup -- [options]");
    println!("Options:");
    println!("  --cyrillic-threshold <ratio>      Language gate for literal title excerpts (default: 0.6)");
    println!("  --suggestion-timeout-ms <millis>  Budget for one remote suggestion call (default: 8000)");
}
