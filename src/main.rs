use anyhow::{bail, Result};
use std::{env, path::PathBuf};

use kindle_clippings_split::{
    clippings::reporter::render_summary,
    pipeline::{run, Config, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_DIR},
};

fn get_config() -> Result<Option<Config>> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt(
        "i",
        "input",
        &format!("clippings file (default: {:?})", DEFAULT_INPUT_FILE),
        "FILE",
    );
    opts.optopt(
        "o",
        "output",
        &format!("output directory (default: {:?})", DEFAULT_OUTPUT_DIR),
        "DIR",
    );
    opts.optflag("h", "help", "print this help");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    if matches.opt_present("h") {
        print!("{}", opts.usage("Usage: kindle-clippings-split [options]"));
        return Ok(None);
    }

    if let Some(arg) = matches.free.first() {
        bail!("Unexpected argument: {:?}", arg);
    }

    let mut config = Config::default();
    if let Some(input) = matches.opt_str("i") {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = matches.opt_str("o") {
        config.output_dir = PathBuf::from(output);
    }

    Ok(Some(config))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(config) = get_config()? else {
        return Ok(());
    };

    println!("Processing {}...", config.input.display());

    let summary = run(&config)?;

    print!("{}", render_summary(&summary.tally, &summary.report));

    if !summary.report.failures.is_empty() {
        bail!(
            "Failed to write {} of {} book(s)",
            summary.report.failures.len(),
            summary.report.failures.len() + summary.report.written.len()
        );
    }

    println!("Finished.");

    Ok(())
}
