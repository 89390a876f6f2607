use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info};
use sf::{config::{get_config, Division, DuplicateCheck, Settings},
         input::read_points,
         Interpolator,
};
use std::path::PathBuf;

/// Recovers the constant term of a polynomial from base-encoded shares.
#[derive(Parser, Debug)]
#[command(name = "secret-finder", version)]
struct Cli {
    /// JSON document holding `keys.k` and the encoded shares.
    input: PathBuf,

    /// TOML settings file.
    #[arg(long, env = "SECRET_FINDER_CONFIG")]
    config: Option<PathBuf>,

    /// Fail before interpolating if two distinct shares share an x.
    #[arg(long)]
    reject_duplicate_x: bool,

    /// Integer-divide every Lagrange term instead of summing rationals.
    #[arg(long)]
    per_term_division: bool,

    /// Sets the level of verbosity.
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => get_config(path)?,
        None => Settings::default(),
    };
    if cli.reject_duplicate_x {
        settings.duplicate_x = DuplicateCheck::Reject;
    }
    if cli.per_term_division {
        settings.division = Division::PerTerm;
    }
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let settings = settings(&cli)?;
    debug!("{:?}", settings);

    let points = read_points(&cli.input)?;
    let secret = Interpolator::new(settings)
        .secret(&points)
        .with_context(|| format!("reconstructing the secret of {}", cli.input.display()))?;

    info!("secret for {} reconstructed from {} points", cli.input.display(), points.len());
    println!("{}", secret);
    Ok(())
}
