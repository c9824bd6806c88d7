//! Command implementations for the carematch CLI.

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;

use crate::address::normalize;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{CarematchError, Result};
use crate::recommend::{HealthStatus, RecommendRequest, RecommendResponse, Recommender};

/// Execute a CLI command.
pub fn execute_command(args: CarematchArgs) -> Result<()> {
    match &args.command {
        Command::Recommend(recommend_args) => recommend(recommend_args, &args),
        Command::Resolve(resolve_args) => resolve(resolve_args, &args),
        Command::Normalize(normalize_args) => normalize_address(normalize_args, &args),
        Command::Health => output_result("Health", &HealthStatus::default(), &args),
        Command::Serve => serve(&args),
        Command::Batch(batch_args) => batch(batch_args, &args),
    }
}

fn load_recommender(args: &CarematchArgs) -> Result<Recommender> {
    let config = args.engine_config()?;
    Recommender::from_config(&config)
}

/// Recommend hospitals for a single request.
fn recommend(args: &RecommendArgs, cli_args: &CarematchArgs) -> Result<()> {
    let recommender = load_recommender(cli_args)?;
    let request = RecommendRequest::new(&args.message, &args.location);

    let response = recommender.recommend(&request);
    output_result("Recommendation", &response, cli_args)
}

/// Show the departments a symptom resolves to.
fn resolve(args: &ResolveArgs, cli_args: &CarematchArgs) -> Result<()> {
    let recommender = load_recommender(cli_args)?;
    let departments = recommender.resolve_departments(&args.symptom)?;

    output_result(
        "Resolved departments",
        &ResolutionResult {
            symptom: args.symptom.clone(),
            departments: departments.into_iter().collect(),
        },
        cli_args,
    )
}

/// Show the normalized form of an address.
fn normalize_address(args: &NormalizeArgs, cli_args: &CarematchArgs) -> Result<()> {
    output_result(
        "Normalized address",
        &NormalizationResult {
            address: args.address.clone(),
            normalized: normalize(&args.address),
        },
        cli_args,
    )
}

/// Answer one JSON request line.
///
/// Lines that are not valid requests produce an error response instead of
/// stopping the loop.
pub fn answer_line(recommender: &Recommender, line: &str) -> RecommendResponse {
    match serde_json::from_str::<RecommendRequest>(line) {
        Ok(request) => recommender.recommend(&request),
        Err(e) => {
            warn!("Rejected request line: {e}");
            RecommendResponse::error(format!("Invalid request: {e}"))
        }
    }
}

/// Answer one raw request line; bytes that are not UTF-8 produce an error response.
pub fn answer_bytes(recommender: &Recommender, line: &[u8]) -> RecommendResponse {
    match std::str::from_utf8(line) {
        Ok(line) => answer_line(recommender, line),
        Err(e) => {
            warn!("Rejected request line: {e}");
            RecommendResponse::error(format!("Invalid request: {e}"))
        }
    }
}

fn is_blank(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_whitespace)
}

/// Answer every request line of `reader`, one response line per request.
///
/// Returns the number of requests answered.
pub fn serve_lines<R: BufRead, W: Write>(
    recommender: &Recommender,
    reader: R,
    writer: &mut W,
) -> Result<usize> {
    let mut served = 0usize;

    for line in reader.split(b'\n') {
        let line = line?;
        if is_blank(&line) {
            continue;
        }

        let response = answer_bytes(recommender, &line);
        write_json_line(writer, &response)?;
        writer.flush()?;
        served += 1;
    }

    Ok(served)
}

/// Answer JSON-lines requests from stdin until end of input.
fn serve(cli_args: &CarematchArgs) -> Result<()> {
    let recommender = load_recommender(cli_args)?;
    info!("Serving requests from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let served = serve_lines(&recommender, stdin.lock(), &mut stdout.lock())?;

    info!("Served {served} requests");
    Ok(())
}

/// Answer every request in a JSON-lines file, in parallel.
fn batch(args: &BatchArgs, cli_args: &CarematchArgs) -> Result<()> {
    let recommender = load_recommender(cli_args)?;
    let start_time = Instant::now();

    let file = File::open(&args.input).map_err(|e| {
        CarematchError::invalid_argument(format!(
            "cannot open batch input '{}': {e}",
            args.input.display()
        ))
    })?;
    let lines: Vec<Vec<u8>> = BufReader::new(file)
        .split(b'\n')
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|line| !is_blank(line))
        .collect();

    let responses = answer_lines(&recommender, &lines);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Box::new(BufWriter::new(File::create(path)?))
        }
        None => Box::new(BufWriter::new(io::stdout())),
    };
    for response in &responses {
        write_json_line(&mut writer, response)?;
    }
    writer.flush()?;

    let summary = BatchSummary {
        requests: responses.len(),
        errors: responses.iter().filter(|r| r.is_error()).count(),
        duration_ms: millis(start_time.elapsed()),
    };
    info!(
        "Batch finished: {} requests, {} errors in {}ms",
        summary.requests, summary.errors, summary.duration_ms
    );

    // Keep stdout clean for the JSON lines when no output file was given.
    if args.output.is_some() {
        output_result("Batch complete", &summary, cli_args)?;
    }
    Ok(())
}

/// Whole milliseconds of `elapsed`, saturating at `u64::MAX`.
fn millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Answer request lines in parallel, preserving input order.
pub fn answer_lines<L>(recommender: &Recommender, lines: &[L]) -> Vec<RecommendResponse>
where
    L: AsRef<[u8]> + Sync,
{
    lines
        .par_iter()
        .map(|line| answer_bytes(recommender, line.as_ref()))
        .collect()
}
