pub(crate) mod cli;
pub(crate) mod config;
pub(crate) mod core;

use std::fmt::Arguments;
use std::fs::File;
use std::io;

use clap::Parser;
use fern::colors::{Color, ColoredLevelConfig};
use log::{info, warn};
use miette::{IntoDiagnostic, WrapErr};

use crate::cli::Cli;
use crate::core::outbound::RecordWriter;
use crate::core::reader::{FileReader, ParseReport, RecordError};

fn setup_logger(verbose: bool) -> std::result::Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .debug(Color::Cyan)
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::White)
        .trace(Color::Magenta);

    let formatter = move |out: fern::FormatCallback, message: &Arguments, record: &log::Record| {
        let now = jiff::Zoned::now();
        let now = now.strftime("%Y-%m-%d %H:%M:%S");

        let mut target = record.target().to_string();
        if let Some(line) = record.line() {
            target = format!("{}:{}", target, line);
        }

        out.finish(format_args!(
            "[{} {} {}] {}",
            now,
            colors.color(record.level()),
            target,
            message
        ))
    };

    let log_level = if verbose {
        log::LevelFilter::Debug
    } else {
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string())
            .parse()
            .expect("Invalid log level")
    };

    // Records go to stdout, diagnostics go to stderr.
    fern::Dispatch::new()
        .format(formatter)
        .level(log_level)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose).into_diagnostic()?;

    let config = cli.reader_options().build()?;
    let reader = FileReader::new(config);

    let mut writer =
        RecordWriter::create(cli.output.as_deref(), cli.output_format).into_diagnostic()?;

    let on_error = |err: &RecordError| {
        warn!("{} (raw: {:?})", err, err.raw);
    };

    let mut totals = ParseReport::default();
    if cli.files.is_empty() {
        let stdin = io::stdin();
        let report = reader.parse(stdin.lock(), on_error, |record| writer.write(&record))?;
        totals.merge(report);
    } else {
        for path in &cli.files {
            let file = File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to open input file: {}", path.display()))?;

            let report = reader.parse(file, on_error, |record| writer.write(&record))?;
            info!(
                "{}: {} records, {} rows skipped",
                path.display(),
                report.records,
                report.skipped
            );
            totals.merge(report);
        }
    }

    writer.flush().into_diagnostic()?;

    info!(
        "Done: {} records emitted, {} rows skipped",
        totals.records, totals.skipped
    );

    Ok(())
}
