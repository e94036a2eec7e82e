use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use knights_tour::board::{Square, KNIGHT_MOVES};
use knights_tour::{dispatch, DispatchConfig, ReportPolicy, Reporter};

/// Enumerate every closed knight's tour on the 8x8 board.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Worker threads (default: available parallelism, at least 2)
    #[arg(long)]
    threads: Option<usize>,

    /// Only search from these starting squares (e.g. H1); repeatable
    #[arg(long = "start", value_name = "SQUARE")]
    starts: Vec<Square>,

    /// Verify each tour before printing it instead of after
    #[arg(long)]
    verify_first: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();

    let cli = Cli::parse();

    let mut config = match cli.threads {
        Some(threads) => DispatchConfig::with_threads(threads),
        None => DispatchConfig::default(),
    };
    if !cli.starts.is_empty() {
        config = config.starts(cli.starts);
    }
    if cli.verify_first {
        config = config.policy(ReportPolicy::VerifyThenEmit);
    }

    log::info!("starting search with {} threads...", config.threads);

    let reporter = Reporter::stdout();
    if let Err(err) = dispatch(&config, &KNIGHT_MOVES, &reporter) {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }

    if let Err(err) = reporter.finish() {
        log::error!("failed to write output: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
