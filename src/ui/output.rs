//! Output formatting and display logic for credcheck

use crate::analysis::handler::SubmissionOutcome;
use crate::analysis::verdict::Tier;
use crate::config::Config;
use crate::core::constants::output_formats;
use crate::ui::color::{Colors, colorize, colorize_banner};
use crate::ui::view::{Banner, ResultsView};

/// Background color for whatever the banner currently shows
pub fn banner_background(banner: Banner) -> &'static str {
    match banner {
        Banner::Empty | Banner::Pending => Colors::BG_GRAY,
        Banner::Error => Colors::BG_DARK_GRAY,
        Banner::Verdict(Tier::Authentic) => Colors::BG_GREEN,
        Banner::Verdict(Tier::Questionable) => Colors::BG_ORANGE,
        Banner::Verdict(Tier::Misleading) => Colors::BG_RED,
        Banner::Verdict(Tier::Suspicious) => Colors::BG_DARK_RED,
    }
}

/// Display configuration information in a user-friendly format
pub fn display_config_info(config: &Config) {
    println!(
        "{}: {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Using server", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(&config.server_base(), Colors::BRIGHT_WHITE)
    );
    println!(
        "{}: {}",
        colorize(
            &format!(
                "{}{}{}",
                Colors::BOLD,
                "Using timeout (seconds)",
                Colors::RESET
            ),
            Colors::BRIGHT_CYAN
        ),
        colorize(
            &config.timeout.unwrap_or(30).to_string(),
            Colors::BRIGHT_WHITE
        )
    );

    if let Some(threshold) = config.fail_below {
        println!(
            "{}: {}",
            colorize(
                &format!("{}{}{}", Colors::BOLD, "Fail below score", Colors::RESET),
                Colors::BRIGHT_CYAN
            ),
            colorize(&threshold.to_string(), Colors::BRIGHT_WHITE)
        );
    }

    println!();
}

/// Dispatch result display on the configured output format
pub fn display_result(
    label: &str,
    view: &ResultsView,
    outcome: &SubmissionOutcome,
    output_format: &str,
) {
    match output_format {
        output_formats::JSON => display_result_json(label, view, outcome),
        output_formats::MINIMAL => display_result_minimal(label, view),
        _ => display_result_text(label, view),
    }
}

/// Colored verdict rendering: banner, score fields, explanation
fn display_result_text(label: &str, view: &ResultsView) {
    println!("\n> {}", colorize(label, Colors::BLUE));
    println!(
        "\n  {}",
        colorize_banner(&view.banner().label(), banner_background(view.banner()))
    );
    println!();

    display_field("Credibility score", view.credibility());
    display_field("Text score", view.text_score());
    display_field("Suspicious phrases", view.phrases());
    display_field("Media score", view.media_score());

    println!(
        "\n  {} {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, "Assessment:", Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        view.explanation()
    );
}

fn display_field(name: &str, value: &str) {
    println!(
        "  {}: {}",
        colorize(
            &format!("{}{}{}", Colors::BOLD, name, Colors::RESET),
            Colors::BRIGHT_CYAN
        ),
        colorize(value, Colors::BRIGHT_WHITE)
    );
}

/// Plain rendering without colors or emojis
fn display_result_minimal(label: &str, view: &ResultsView) {
    println!("{}: {}", label, view.banner().plain_label());
    println!("  credibility_score: {}", view.credibility());
    println!("  text_score: {}", view.text_score());
    println!("  suspicious_phrases: {}", view.phrases());
    println!("  media_score: {}", view.media_score());
    println!("  assessment: {}", view.explanation());
}

/// Structured rendering for automation
fn display_result_json(label: &str, view: &ResultsView, outcome: &SubmissionOutcome) {
    let value = result_json(label, view, outcome);
    match serde_json::to_string_pretty(&value) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Warning: Failed to serialize result: {e}"),
    }
}

/// Build the structured report for one submission
pub fn result_json(
    label: &str,
    view: &ResultsView,
    outcome: &SubmissionOutcome,
) -> serde_json::Value {
    let (status, report, tier) = match outcome {
        SubmissionOutcome::Analyzed { report, tier } => {
            ("analyzed", serde_json::to_value(report).ok(), Some(*tier))
        }
        SubmissionOutcome::Failed => ("failed", None, None),
    };

    serde_json::json!({
        "input": label,
        "status": status,
        "verdict": view.banner().plain_label(),
        "tier": tier.map(|t| t.as_str()),
        "report": report,
        "display": {
            "credibility_score": view.credibility(),
            "text_score": view.text_score(),
            "suspicious_phrases": view.phrases(),
            "media_score": view.media_score(),
            "explanation": view.explanation(),
        },
        "timestamp": chrono::Utc::now()
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
    })
}
