// tu: title-cases text or tag records read from stdin
use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::PathBuf;

use tu_lib::config::TitleCaseConfig;
use tu_lib::fields::{parse_records, retitle_record, FieldSelection};

const USAGE: &str = "usage: tu [--report] [--tags [FIELDS]] [--config PATH] [--verbose]

Reads stdin and writes the title-cased result to stdout.

--report         Print a JSON report with the rule that decided each word
--tags [FIELDS]  Read JSON tag records and print set:field=value lines,
                 optionally only for the comma separated FIELDS
--config PATH    Config file (default: <config dir>/tu/config.json)
--verbose        Log to stderr";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    report: bool,
    tags: Option<Option<String>>,
    config: Option<PathBuf>,
    verbose: bool,
}

/// What the command line asks for
#[derive(Debug, PartialEq)]
enum Command {
    Run(Args),
    Help,
}

fn parse_args(raw: &[String]) -> Result<Command> {
    let mut args = Args::default();
    let mut iter = raw.iter().peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--report" => args.report = true,
            "--verbose" => args.verbose = true,
            "--tags" => {
                let fields = iter.next_if(|next| !next.starts_with("--")).cloned();
                args.tags = Some(fields);
            }
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config needs a path"))?;
                args.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => return Ok(Command::Help),
            other => anyhow::bail!("Unknown argument: {}\n\n{}", other, USAGE),
        }
    }

    Ok(Command::Run(args))
}

fn main() -> Result<()> {
    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw)? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => TitleCaseConfig::load_from(path)?,
        None => TitleCaseConfig::load()?,
    };
    let engine = config.build_engine();

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let mut stdout = std::io::stdout().lock();

    if let Some(fields) = &args.tags {
        let selection = match fields {
            Some(list) => FieldSelection::parse(list),
            None => config.field_selection(),
        };
        let records = parse_records(&input)?;
        tracing::debug!("Retitling {} tag records", records.len());

        for record in &records {
            for update in retitle_record(&engine, record, &selection) {
                writeln!(stdout, "{}", update.assignment())?;
            }
        }
        return Ok(());
    }

    if args.report || config.report {
        let result = engine.convert_detailed(&input);
        writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        write!(stdout, "{}", engine.convert(&input))?;
    }

    Ok(())
}
