use anyhow::{Context, Result};
use clap::Parser;
use code_runner::HttpCodeRunner;
use grader::questions::Question;
use grader::report::GradeResponse;
use grader::types::CodeSubmission;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use util::config::AppConfig;
use util::logging::init_logging;

#[derive(Parser, Debug)]
#[command(version, about = "Grade a submission against a question")]
struct Args {
    /// Question file (JSON, tagged by "type")
    #[arg(long)]
    question: PathBuf,
    /// Submitted source file
    #[arg(long)]
    submission: PathBuf,
    /// Code runner base URL. Defaults to CODE_RUNNER_HOST and CODE_RUNNER_PORT
    #[arg(long)]
    runner_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = AppConfig::global().clone();
    let _log_guard = init_logging(&config.log_file, &config.log_level, config.log_to_stdout);

    let raw = std::fs::read_to_string(&args.question)
        .with_context(|| format!("reading question {}", args.question.display()))?;
    let question: Question = serde_json::from_str(&raw)
        .with_context(|| format!("parsing question {}", args.question.display()))?;
    question.validate()?;

    let contents = std::fs::read_to_string(&args.submission)
        .with_context(|| format!("reading submission {}", args.submission.display()))?;

    let runner = match args.runner_url {
        Some(url) => HttpCodeRunner::new(url, Duration::from_secs(config.code_runner_timeout_secs))?,
        None => HttpCodeRunner::from_config(&config)?,
    };
    info!(kind = question.kind(), runner = runner.base_url(), "grading submission");

    let result = grader::grade(&question, &CodeSubmission::new(contents), &runner).await?;
    let response = GradeResponse::from(result);
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
