mod result;

use std::io::Write;
use std::io::stdout;

use clap::Parser;
use log::LevelFilter;
use log::error;
use log::info;
use log::warn;
use result::SeqgenResult;
use seqgen::DEFAULT_LENGTH;
use seqgen::Rule;
use seqgen::SequenceElement;
use seqgen::SequenceGenerationError;
use seqgen::SequenceGenerator;
use seqgen::convert_case::Case;
use seqgen::statistics::configure_statistic_logging;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    /// The rule which is used to construct the sequence.
    ///
    /// Required unless '--all' is provided.
    #[arg(value_enum, required_unless_present = "all", verbatim_doc_comment)]
    rule: Option<Rule>,

    /// The starting value of the sequence.
    ///
    /// Integers are given in decimal (e.g. '6' or '-3'), fractions as 'numerator/denominator'
    /// (e.g. '5/6'). Only add_primes, geometric_diff, increasing_difference and fibonacci_diff
    /// use the start, and they require an integer.
    #[arg(long, default_value = "0", allow_hyphen_values = true, verbatim_doc_comment)]
    start: SequenceElement,

    /// The number of elements to generate.
    ///
    /// The fixed tables of fraction_pattern and integer_fraction_pattern are truncated to six
    /// elements, and recurrence_relation always contains its two seeds.
    ///
    /// Possible values: usize
    #[arg(long, default_value_t = DEFAULT_LENGTH, verbatim_doc_comment)]
    length: usize,

    /// Generate a sequence for every rule in the catalog.
    ///
    /// Rules which cannot be generated for the given start are reported and skipped.
    #[arg(long, conflicts_with = "rule", verbatim_doc_comment)]
    all: bool,

    /// Log the statistics of every generated sequence.
    ///
    /// Statistics are written to stdout, each on a line starting with '%%%seqgen-stat:'.
    #[arg(long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,

    /// Enables log message output from the generator.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Omit the call site (module and line) from log messages.
    #[arg(long = "omit-call-site")]
    omit_call_site: bool,
}

fn configure_logging(
    verbose: bool,
    log_statistics: bool,
    omit_call_site: bool,
) -> SeqgenResult<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%seqgen-stat:",
            Some("%%%seqgen-stat-end"),
            Some(Case::Camel),
            None,
        );
    }

    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            if !omit_call_site {
                write!(
                    buf,
                    "[{}:{}] ",
                    record.module_path().unwrap_or_default(),
                    record.line().unwrap_or_default()
                )?;
            }

            writeln!(buf, "{} {}", record.level(), record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stderr)
        .try_init()?;
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> SeqgenResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics, args.omit_call_site)?;

    let rules = match args.rule {
        Some(rule) => vec![rule],
        None => Rule::ALL.to_vec(),
    };

    let mut output = stdout().lock();
    for rule in rules {
        let generator = match SequenceGenerator::with_rule(args.start.clone(), rule, args.length) {
            Ok(generator) => generator,
            Err(error @ SequenceGenerationError::NonIntegerStart { .. }) if args.all => {
                warn!("Skipping {rule}: {error}");
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        writeln!(output, "{rule}: {}", generator.sequence())?;
        generator.log_statistics();
    }

    Ok(())
}
