use crate::analysis::report::AnalysisResult;
use crate::analysis::verdict::Tier;
use crate::config::Config;
use log::{debug, error, info};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let server = config.server_base();
    let timeout = config.timeout.unwrap_or(30);
    let output_format = config.output_format.as_deref().unwrap_or("text");

    info!("Configuration: server={server}, timeout={timeout}s, format={output_format}");
    if let Some(threshold) = config.fail_below {
        info!("Failure threshold: fail below {threshold}");
    }
}

/// Log the start of a submission
pub fn log_submission_start(label: &str) {
    info!("Submitting '{label}' for analysis");
}

/// Log the raw parsed response for debugging
pub fn log_response_data(report: &AnalysisResult) {
    debug!("Response data: {report:?}");
}

/// Log a completed analysis
pub fn log_analysis_complete(label: &str, tier: Tier, duration_ms: u128) {
    info!("✅ Analysis complete: '{label}' classified {tier} ({duration_ms}ms)");
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_initialization_verbose() {
        // Logger can only be initialized once per process, so we use panic::catch_unwind
        std::panic::catch_unwind(|| init_logger(true, false)).ok();
    }

    #[test]
    fn test_logger_initialization_quiet() {
        std::panic::catch_unwind(|| init_logger(false, true)).ok();
    }

    #[test]
    fn test_logger_initialization_conflicting() {
        // Conflicting flags must not panic (quiet takes precedence)
        std::panic::catch_unwind(|| init_logger(true, true)).ok();
    }

    #[test]
    fn test_log_helpers_do_not_panic() {
        let config = Config {
            fail_below: Some(60.0),
            ..Default::default()
        };
        log_config_info(&config);
        log_submission_start("article.txt");
        log_response_data(&AnalysisResult::default());
        log_analysis_complete("article.txt", Tier::Questionable, 42);
        log_error("Analysis request failed", None);

        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        log_error("Analysis request failed", Some(&io_error));
    }
}
