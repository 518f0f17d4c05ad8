//! lsift - filter lines with boolean substring queries.
//!
//! ```text
//! lsift 'error AND (disk OR network)' /var/log/app
//! tail -f app.log | lsift 'timeout OR refused'
//! ```
//!
//! Exit status follows grep: 0 when at least one line matched, 1 when
//! nothing matched, 2 on error.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use linesift::{Query, SearchResult};

#[derive(Debug, Parser)]
#[command(name = "lsift", version, about = "Filter lines with boolean substring queries")]
struct Cli {
    /// Query expression, e.g. '(foo OR bar) AND baz'
    query: String,

    /// Files or directories to search; stdin when omitted
    paths: Vec<PathBuf>,

    /// Match case exactly instead of case-insensitively
    #[arg(long)]
    match_case: bool,

    /// Only scan directory files with this extension (repeatable)
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print only the number of matching lines
    #[arg(long)]
    count: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(results) => {
            let matched = !results.is_empty();
            if let Err(err) = print_results(&cli, &results) {
                eprintln!("lsift: {err:#}");
                return ExitCode::from(2);
            }
            if matched {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
        Err(err) => {
            eprintln!("lsift: {err:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<Vec<SearchResult>> {
    let query = Query::parse(&cli.query).context("invalid query")?;
    let mut results = Vec::new();

    if cli.paths.is_empty() {
        let stdin = io::stdin();
        results.extend(
            query
                .scan_reader(stdin.lock(), cli.match_case)
                .context("failed to read stdin")?,
        );
        return Ok(results);
    }

    let extensions: Vec<&str> = cli.extensions.iter().map(String::as_str).collect();
    let filter = (!extensions.is_empty()).then_some(extensions.as_slice());

    for path in &cli.paths {
        if path.is_dir() {
            let scan = query.scan_dir(path, cli.match_case, filter)?;
            // Per-file failures are reported but never abort the siblings.
            for failure in &scan.failures {
                eprintln!("lsift: {failure}");
            }
            results.extend(scan.results);
        } else {
            results.extend(query.scan_file(path, cli.match_case)?);
        }
    }
    Ok(results)
}

fn print_results(cli: &Cli, results: &[SearchResult]) -> anyhow::Result<()> {
    if cli.count {
        println!("{}", results.len());
        return Ok(());
    }
    match cli.format {
        Format::Text => {
            for result in results {
                match &result.file {
                    Some(path) => {
                        println!("{}:{}:{}", path.display(), result.line_number, result.line)
                    }
                    None => println!("{}:{}", result.line_number, result.line),
                }
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(results)?);
        }
    }
    Ok(())
}
