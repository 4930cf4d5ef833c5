// Command-line interface definitions and parsing for credcheck

use clap::{Parser, Subcommand};

use crate::analysis::submission::{Submission, parse_field};
use crate::config::CliConfig;
use crate::core::constants::output_formats;
use crate::core::error::{CredCheckError, Result};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Text files to analyze, each as its own submission
    pub inputs: Vec<String>,

    // Content
    /// Inline text to analyze
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true, help_heading = "Content")]
    pub text: Option<String>,

    /// Media file (image/video) to attach to the submission
    #[arg(short = 'm', long, value_name = "PATH", help_heading = "Content")]
    pub media: Option<String>,

    /// Extra form field as key=value, forwarded as-is (repeatable)
    #[arg(long = "field", value_name = "KEY=VALUE", help_heading = "Content")]
    pub fields: Vec<String>,

    // Network
    /// Analysis server base URL (default: http://localhost:5000)
    #[arg(short = 's', long, value_name = "URL", help_heading = "Network")]
    pub server: Option<String>,

    /// Connection timeout in seconds (default: 30)
    #[arg(short = 't', long, value_name = "SECONDS", help_heading = "Network")]
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network")]
    pub user_agent: Option<String>,

    // Output & Verbosity
    /// Suppress progress and informational output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the pending spinner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    // Automation
    /// Exit non-zero when a credibility score falls below this value (0-100)
    #[arg(long, value_name = "SCORE", help_heading = "Automation")]
    pub fail_below: Option<f64>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Parse the derive-based CLI into the CliConfig overlay
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        server: cli.server.clone(),
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        quiet: cli.quiet,
        no_progress: cli.no_progress,
        fail_below: cli.fail_below,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}

/// Capture the submissions named on the command line.
///
/// Each positional input file is its own submission; `--text`/`--media`
/// together form one more. Extra fields apply to every submission.
pub fn submissions_from_cli(cli: &Cli) -> Result<Vec<Submission>> {
    let extra_fields: Vec<(String, String)> = cli
        .fields
        .iter()
        .map(|raw| parse_field(raw))
        .collect::<Result<_>>()?;

    let mut submissions = Vec::new();

    for input in &cli.inputs {
        let content = std::fs::read_to_string(input).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CredCheckError::FileNotFound(input.clone()),
            _ => CredCheckError::Io(e),
        })?;

        let mut builder = Submission::builder().text(content).label(input.clone());
        for (key, value) in &extra_fields {
            builder = builder.field(key.clone(), value.clone());
        }
        submissions.push(builder.build()?);
    }

    if cli.text.is_some() || cli.media.is_some() {
        let mut builder = Submission::builder();
        if let Some(ref text) = cli.text {
            builder = builder.text(text.clone());
        }
        if let Some(ref media) = cli.media {
            builder = builder.media(media.clone());
        }
        for (key, value) in &extra_fields {
            builder = builder.field(key.clone(), value.clone());
        }
        submissions.push(builder.build()?);
    }

    if submissions.is_empty() {
        return Err(CredCheckError::Submission(
            "No input provided. Pass text files, --text, or --media.".to_string(),
        ));
    }

    Ok(submissions)
}
