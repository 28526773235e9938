use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgGroup, Parser, ValueEnum};

use teme_core::corpus::domain::record_source::RecordSource;
use teme_core::corpus::infrastructure::csv_record_source::CsvRecordSource;
use teme_core::corpus::infrastructure::json_loader::load_severity_weights;
use teme_core::corpus::infrastructure::text_record_source::TextRecordSource;
use teme_core::pipeline::report_sink::{JsonLinesReportSink, ReportSink, TextReportSink};
use teme_core::pipeline::score_batch_use_case::ScoreBatchUseCase;
use teme_core::pipeline::score_record_use_case::ScoreRecordUseCase;
use teme_core::scoring::domain::composite::DEFAULT_ALPHA;
use teme_core::scoring::domain::term_recall::SeverityWeights;

/// Compute WER, TMR, and TEME-Error metrics.
#[derive(Parser, Debug)]
#[command(name = "teme-score")]
#[command(group(
    ArgGroup::new("mode")
        .required(true)
        .args(["batch_file", "reference"])
))]
struct Cli {
    /// Path to CSV file for batch processing.
    #[arg(long = "batch_file", visible_alias = "batch-file")]
    batch_file: Option<PathBuf>,

    /// Path to reference transcript (.txt).
    #[arg(long = "ref")]
    reference: Option<PathBuf>,

    /// Path to hypothesis transcript (.txt).
    #[arg(long = "hyp")]
    hypothesis: Option<PathBuf>,

    /// Path to JSON file with gold reference terms list.
    #[arg(long = "ref_terms", visible_alias = "ref-terms")]
    ref_terms: Option<PathBuf>,

    /// Path to JSON file with severity weights (term->weight).
    #[arg(long)]
    severity: Option<PathBuf>,

    /// Alpha for TEME-Error.
    #[arg(long, default_value_t = DEFAULT_ALPHA, allow_negative_numbers = true)]
    alpha: f64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, PartialEq)]
enum RunMode {
    Single {
        reference: PathBuf,
        hypothesis: PathBuf,
        terms: PathBuf,
    },
    Batch {
        csv: PathBuf,
    },
}

/// Arguments after validation; everything downstream trusts these.
#[derive(Debug, PartialEq)]
struct RunConfig {
    mode: RunMode,
    severity: Option<PathBuf>,
    alpha: f64,
    format: OutputFormat,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = validate(Cli::parse())?;

    let weights = match &config.severity {
        Some(path) => load_severity_weights(path)?,
        None => SeverityWeights::default(),
    };
    let use_case = ScoreBatchUseCase::new(ScoreRecordUseCase::new(weights, config.alpha));

    let mut source = open_source(&config.mode)?;
    let stdout = io::stdout().lock();
    let mut sink = open_sink(config.format, stdout);

    let scored = use_case.execute(source.as_mut(), sink.as_mut())?;
    log::debug!("{scored} record(s) written");
    Ok(())
}

fn open_source(mode: &RunMode) -> Result<Box<dyn RecordSource>, Box<dyn std::error::Error>> {
    match mode {
        RunMode::Single {
            reference,
            hypothesis,
            terms,
        } => Ok(Box::new(TextRecordSource::new(reference, hypothesis, terms))),
        RunMode::Batch { csv } => Ok(Box::new(CsvRecordSource::open(csv)?)),
    }
}

fn open_sink<'a, W: Write + 'a>(format: OutputFormat, writer: W) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextReportSink::new(writer)),
        OutputFormat::Json => Box::new(JsonLinesReportSink::new(writer)),
    }
}

fn validate(cli: Cli) -> Result<RunConfig, Box<dyn std::error::Error>> {
    if !cli.alpha.is_finite() {
        return Err(format!("Alpha must be a finite number, got {}", cli.alpha).into());
    }

    let mode = match (cli.batch_file, cli.reference) {
        (Some(csv), _) => {
            if cli.hypothesis.is_some() || cli.ref_terms.is_some() {
                log::warn!("--hyp and --ref_terms are ignored in batch mode");
            }
            RunMode::Batch { csv }
        }
        (None, Some(reference)) => match (cli.hypothesis, cli.ref_terms) {
            (Some(hypothesis), Some(terms)) => RunMode::Single {
                reference,
                hypothesis,
                terms,
            },
            _ => {
                return Err(
                    "--ref, --hyp, and --ref_terms are required when not using --batch_file"
                        .into(),
                )
            }
        },
        (None, None) => return Err("Either --batch_file or --ref is required".into()),
    };

    for path in mode_paths(&mode).into_iter().chain(cli.severity.as_ref()) {
        if !path.exists() {
            return Err(format!("Input file not found: {}", path.display()).into());
        }
    }

    Ok(RunConfig {
        mode,
        severity: cli.severity,
        alpha: cli.alpha,
        format: cli.format,
    })
}

fn mode_paths(mode: &RunMode) -> Vec<&PathBuf> {
    match mode {
        RunMode::Single {
            reference,
            hypothesis,
            terms,
        } => vec![reference, hypothesis, terms],
        RunMode::Batch { csv } => vec![csv],
    }
}
