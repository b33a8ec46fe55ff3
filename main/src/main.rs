use std::io::{self, BufWriter, Write};

use anyhow::{anyhow, Context, Result};
use circular::{stats::CircularSummary, Seed, VonMisesSampler};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

mod output;

use output::Format;

#[derive(Debug, Parser)]
#[clap(version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Mean direction of the distribution, between -pi and pi
    #[clap(value_parser = parse_mean_direction)]
    mu: f64,

    /// Concentration of the distribution, zero or greater
    #[clap(value_parser = parse_concentration)]
    kappa: f64,

    /// Number of samples to generate
    #[clap(value_parser = clap::value_parser!(u64).range(1..), default_value_t = 1)]
    num_samples: u64,

    /// Seed for reproducible output, otherwise seeded from the clock and
    /// system randomness
    #[clap(short, long, value_parser)]
    seed: Option<u64>,

    /// Output format of the samples and summary
    #[clap(short, long, value_enum, default_value_t = Format::Lines)]
    format: Format,

    /// Print circular statistics of the samples to stderr
    #[clap(long, action)]
    summary: bool,
}

fn parse_mean_direction(value: &str) -> Result<f64, String> {
    let mu = value.parse::<f64>().map_err(|e| e.to_string())?;
    circular::check_mean_direction(mu).map_err(|e| e.to_string())
}

fn parse_concentration(value: &str) -> Result<f64, String> {
    let kappa = value.parse::<f64>().map_err(|e| e.to_string())?;
    circular::check_concentration(kappa).map_err(|e| e.to_string())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise tracing: {err}"))
}

fn main() -> Result<()> {
    init_tracing()?;
    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let num_samples =
        usize::try_from(args.num_samples).context("number of samples is too large")?;

    let seed = Seed::from(args.seed).resolve();
    info!(seed, "seeding sampler");

    let samples = VonMisesSampler::from_seed(seed)
        .generate(args.mu, args.kappa, num_samples)
        .context("failed to sample the von Mises distribution")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_samples(&mut out, &samples, args.format)?;
    out.flush()?;

    if args.summary {
        let summary =
            CircularSummary::from_samples(&samples).context("no samples to summarise")?;
        output::write_summary(&mut io::stderr().lock(), &summary, args.format)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("vonmises").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&["0.5", "2"]).unwrap();
        assert_eq!(args.mu, 0.5);
        assert_eq!(args.kappa, 2.0);
        assert_eq!(args.num_samples, 1);
        assert_eq!(args.seed, None);
        assert_eq!(args.format, Format::Lines);
        assert!(!args.summary);
    }

    #[test]
    fn negative_mean_and_options() {
        let args = parse(&["-1.5", "0", "7", "--seed", "42", "-f", "json", "--summary"]).unwrap();
        assert_eq!(args.mu, -1.5);
        assert_eq!(args.kappa, 0.0);
        assert_eq!(args.num_samples, 7);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.format, Format::Json);
        assert!(args.summary);
    }

    #[test]
    fn rejects_out_of_domain_values() {
        assert!(parse(&["4.0", "1"]).is_err());
        assert!(parse(&["0", "-1"]).is_err());
        assert!(parse(&["0", "1", "0"]).is_err());
        assert!(parse(&["0", "NaN"]).is_err());
        assert!(parse(&["0"]).is_err());
    }

    #[test]
    fn mean_direction_message_names_parameter() {
        let err = parse_mean_direction("3.5").unwrap_err();
        assert!(err.contains("mu"), "{err}");
    }
}
