//! # euler-ivp
//!
//! Approximates y' = -y + t, y(a) = y0 on [a, b] with the explicit Euler
//! method and compares the result with the exact solution.
//!
//! Parameters are taken from `--a --b --y0 --n` when all four are given, and
//! prompted for interactively otherwise.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use ivp_cli::{prompt, report};
use ivp_core::ivp::{IvpParams, LinearDecay};
use ivp_observers::NonFiniteGuard;
use ivp_solvers::scalar;
use tracing::{Level, info};

/// Explicit Euler approximation of y' = -y + t with exact-solution comparison.
#[derive(Debug, Parser)]
#[command(name = "euler-ivp", version, about)]
struct Cli {
    /// Lower bound of the interval, where y(a) = y0
    #[arg(short, long, allow_negative_numbers = true)]
    a: Option<f64>,

    /// Upper bound of the interval
    #[arg(short, long, allow_negative_numbers = true)]
    b: Option<f64>,

    /// Initial value y(a)
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,

    /// Number of Euler steps
    #[arg(short, long)]
    n: Option<usize>,

    /// Stop at the first NaN or infinite value instead of carrying it forward
    #[arg(long)]
    stop_on_non_finite: bool,

    /// Number of points at which the exact solution is plotted
    #[cfg(feature = "plot")]
    #[arg(long, default_value_t = 200)]
    samples: usize,

    /// Print the table only, without opening the plot window
    #[cfg(feature = "plot")]
    #[arg(long)]
    no_plot: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Parameters given on the command line, or `None` to prompt for them.
    fn params(&self) -> Result<Option<IvpParams>> {
        match (self.a, self.b, self.y0, self.n) {
            (None, None, None, None) => Ok(None),
            (Some(a), Some(b), Some(y0), Some(n)) => IvpParams::new(a, b, y0, n)
                .map(Some)
                .context("invalid command-line parameters"),
            _ => bail!("pass all of --a, --b, --y0 and --n, or none of them to be prompted"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let params = match cli.params()? {
        Some(params) => params,
        None => prompt::collect_parameters(io::stdin().lock(), io::stdout().lock())
            .context("failed to read parameters")?,
    };
    info!(
        a = params.a(),
        b = params.b(),
        y0 = params.y0(),
        n = params.n(),
        "parameters accepted"
    );

    let trajectory = if cli.stop_on_non_finite {
        let mut guard = NonFiniteGuard::new();
        let trajectory = scalar::solve(&LinearDecay, &params, &mut guard)?;
        if let Some(trip) = guard.tripped() {
            info!(t = trip.at, value = trip.value, "non-finite guard stopped the run");
        }
        trajectory
    } else {
        scalar::solve_unobserved(&LinearDecay, &params)?
    };

    let exact = LinearDecay.exact(params.a(), params.y0());
    report::write_table(io::stdout().lock(), &trajectory, &exact)
        .context("failed to write the report")?;

    #[cfg(feature = "plot")]
    if !cli.no_plot {
        let obs = ivp_cli::plot::build(&params, &trajectory, &exact, cli.samples)
            .context("invalid --samples")?;
        ivp_cli::plot::show(obs)?;
    }

    Ok(())
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}
