use clap::{CommandFactory, Parser};
use credcheck::analysis::{AnalysisClient, Handler};
use credcheck::config::Config;
use credcheck::core::constants::output_formats;
use credcheck::reporting::logging;
use credcheck::ui::output;
use credcheck::ui::{
    Cli, Commands, PendingIndicator, ResultsView, TerminalNotifier, cli_to_config,
    print_completions, submissions_from_cli,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    // Run the main analysis logic
    match run_credcheck_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if a completion command was processed
pub fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            print_completions(shell, &mut app);
            Some(0)
        }
        None => None,
    }
}

/// Main analysis logic extracted from main() for testing
pub async fn run_credcheck_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Parse CLI arguments into CliConfig using the derive-based CLI
    let cli_config = cli_to_config(cli);

    // Load and merge configuration
    let config = load_and_merge_config(&cli_config)?;
    config.validate()?;

    // Setup logging and output settings
    let output_settings = setup_output_settings(&cli_config, &config);
    logging::init_logger(output_settings.verbose, output_settings.quiet);
    logging::log_config_info(&config);

    // Capture submissions from the command line
    let submissions = submissions_from_cli(cli).inspect_err(|e| {
        logging::log_error("Could not capture submissions", Some(e));
    })?;

    // Display configuration info if needed
    if output_settings.should_show_config_info() {
        output::display_config_info(&config);
    }

    let client = AnalysisClient::from_config(&config)?;
    let notifier = TerminalNotifier;
    let handler = Handler::new(&client, &notifier);
    let mut view = ResultsView::new();
    let mut progress = PendingIndicator::new(output_settings.show_progress);

    // Submit each capture in turn. A failed submission does not abort the
    // remaining ones; it only shows up in the exit code.
    let mut failures = 0usize;
    let mut below_threshold = 0usize;

    for submission in &submissions {
        let outcome = handler.submit(submission, &mut view, &mut progress).await;

        if outcome.is_failure() {
            failures += 1;
        } else if let Some(threshold) = config.fail_below {
            // A missing or non-numeric score never satisfies the threshold
            let meets = outcome.credibility_score().is_some_and(|s| s >= threshold);
            if !meets {
                below_threshold += 1;
            }
        }

        output::display_result(
            submission.label(),
            &view,
            &outcome,
            &output_settings.output_format,
        );
    }

    Ok(determine_exit_code(failures, below_threshold))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(
    cli_config: &credcheck::config::CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // Merge CLI arguments with configuration (CLI takes precedence)
    config.merge_with_cli(cli_config);
    Ok(config)
}

/// Settings for output formatting and display
pub struct OutputSettings {
    pub quiet: bool,
    pub verbose: bool,
    pub output_format: String,
    pub show_progress: bool,
}

impl OutputSettings {
    pub fn should_show_config_info(&self) -> bool {
        !self.quiet && self.output_format == output_formats::TEXT
    }
}

/// Setup output settings based on CLI and config
pub fn setup_output_settings(
    cli_config: &credcheck::config::CliConfig,
    config: &Config,
) -> OutputSettings {
    let quiet = cli_config.quiet;
    let verbose = config.verbose.unwrap_or(false);
    let output_format = config
        .output_format
        .as_deref()
        .unwrap_or(output_formats::DEFAULT)
        .to_string();
    let show_progress =
        !quiet && !cli_config.no_progress && output_format == output_formats::TEXT;

    OutputSettings {
        quiet,
        verbose,
        output_format,
        show_progress,
    }
}

/// Map counted failures and threshold misses to the process exit code
pub fn determine_exit_code(failures: usize, below_threshold: usize) -> i32 {
    if failures > 0 || below_threshold > 0 { 1 } else { 0 }
}
