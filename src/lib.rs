pub mod check;
pub mod cli;
pub mod config;
pub mod filter;
pub mod report;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::check::{CheckReport, format_check_json, format_check_text};
use crate::config::ToolConfig;
use crate::report::{format_parse_json, format_parse_text};
pub use cli::{Cli, ColorMode, Commands, OutputFormat, cli_parse};
pub use filter::{FilterOutcome, FilterParseError, FilterQuery, parse, parse_optional};

fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn apply_color_mode(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        // Let colored decide from the terminal and NO_COLOR / CLICOLOR
        ColorMode::Auto => {}
    }
}

fn write_output_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write output file '{}'", path.display()))
}

/// Read an expression from stdin, dropping one trailing line break
fn read_stdin_expression() -> Result<String> {
    let mut raw = String::new();
    std::io::stdin()
        .read_to_string(&mut raw)
        .context("Failed to read expression from stdin")?;

    if let Some(stripped) = raw.strip_suffix('\n') {
        let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
        return Ok(stripped.to_string());
    }
    Ok(raw)
}

/// Print `render()` to stdout and, if requested, write an uncolored copy to `output`
fn emit(output: Option<&Path>, render: impl Fn() -> Result<String>) -> Result<()> {
    print!("{}", render()?);
    if let Some(path) = output {
        colored::control::set_override(false);
        write_output_file(path, &render()?)?;
        tracing::info!("Report written to {}", path.display());
    }
    Ok(())
}

fn run_parse(
    expression: Option<&str>,
    format: OutputFormat,
    config: &ToolConfig,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let expression = match expression {
        Some(expression) => expression.to_string(),
        None => {
            tracing::debug!("No expression argument, reading stdin");
            read_stdin_expression()?
        }
    };

    let result = parse(&expression);
    match &result {
        Ok(query) => tracing::debug!(
            includes = query.includes.len(),
            excludes = query.excludes.len(),
            "Parsed expression"
        ),
        Err(err) => tracing::debug!(position = err.position(), "Parse failed: {}", err),
    }

    let pretty = config.output.pretty_json;
    emit(output, || match format {
        OutputFormat::Text => Ok(format_parse_text(&expression, &result)),
        OutputFormat::Json => {
            let json = format_parse_json(&result, pretty)
                .context("Failed to serialize parse result")?;
            Ok(format!("{json}\n"))
        }
    })?;

    Ok(if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_check(
    files: &[PathBuf],
    format: OutputFormat,
    config: &ToolConfig,
    output: Option<&Path>,
) -> Result<ExitCode> {
    let mut report = CheckReport::default();

    for file in files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read expression file '{}'", file.display()))?;
        let failed_before = report.failed;
        let checked_before = report.checked;
        report.add_source(&file.display().to_string(), &content, &config.check);
        tracing::info!(
            "{}: {} expressions, {} failed",
            file.display(),
            report.checked - checked_before,
            report.failed - failed_before
        );
    }

    let pretty = config.output.pretty_json;
    emit(output, || match format {
        OutputFormat::Text => Ok(format_check_text(&report)),
        OutputFormat::Json => {
            let json =
                format_check_json(&report, pretty).context("Failed to serialize check report")?;
            Ok(format!("{json}\n"))
        }
    })?;

    Ok(if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

pub fn run() -> Result<ExitCode> {
    let cli = cli_parse();
    init_logging(cli.log_level());

    let config = config::load_config(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(path) = &cli.config {
        tracing::info!("Config file: {}", path.display());
    }

    let format = cli.effective_format(&config);
    apply_color_mode(cli.effective_color(&config));
    tracing::debug!("Output format: {:?}", format);

    let output = cli.output.as_deref();
    match &cli.command {
        Commands::Parse { expression } => {
            run_parse(expression.as_deref(), format, &config, output)
        }
        Commands::Check { files } => run_check(files, format, &config, output),
    }
}
