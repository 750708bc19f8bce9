use anyhow::Context;
use clap::Parser;
use oop_math::utils::logger::{self, LogFormat};
use oop_math::{CliConfig, Evaluator, MathError};
use std::io::Write;

fn main() {
    let config = CliConfig::parse();

    let log_format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_cli_logger(config.verbose, log_format);

    tracing::debug!("CLI config: {:?}", config);

    let output = match config.resolve().and_then(|run| Evaluator::new(run).run()) {
        Ok(output) => output,
        Err(e) => fail(&e),
    };

    if let Err(e) = print_line(&output) {
        tracing::error!("Failed to write result: {:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn print_line(output: &str) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", output).context("writing result to stdout")?;
    stdout.flush().context("flushing stdout")?;
    Ok(())
}

fn fail(e: &MathError) -> ! {
    tracing::error!("Evaluation failed: {}", e);
    eprintln!("error: {}", e);
    std::process::exit(e.exit_code());
}
