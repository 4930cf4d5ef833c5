//! Color, emoji, and formatting utilities for terminal output

use once_cell::sync::Lazy;

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";

    // Basic colors
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const BLUE: &'static str = "\x1b[34m";
    pub const CYAN: &'static str = "\x1b[36m";

    // Bright colors
    pub const BRIGHT_RED: &'static str = "\x1b[91m";
    pub const BRIGHT_GREEN: &'static str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &'static str = "\x1b[93m";
    pub const BRIGHT_CYAN: &'static str = "\x1b[96m";
    pub const BRIGHT_WHITE: &'static str = "\x1b[97m";

    // Banner backgrounds. All four verdict backgrounds carry bright white
    // bold text for contrast.
    pub const BG_GREEN: &'static str = "\x1b[42m";
    pub const BG_ORANGE: &'static str = "\x1b[48;5;208m";
    pub const BG_RED: &'static str = "\x1b[41m";
    pub const BG_DARK_RED: &'static str = "\x1b[48;5;88m";
    /// Neutral background for the pending banner
    pub const BG_GRAY: &'static str = "\x1b[48;5;247m";
    /// Distinct darker gray for the error banner
    pub const BG_DARK_GRAY: &'static str = "\x1b[48;5;243m";
}

/// Apply color to text if terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{}{}{}", color, text, Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Render banner text on a background color if the terminal supports it
pub fn colorize_banner(text: &str, background: &str) -> String {
    if supports_formatting() {
        format!(
            "{}{}{} {} {}",
            background,
            Colors::BOLD,
            Colors::BRIGHT_WHITE,
            text,
            Colors::RESET
        )
    } else {
        text.to_string()
    }
}

static FORMATTING_SUPPORT: Lazy<bool> = Lazy::new(detect_formatting);

/// Whether terminal formatting is enabled for this process.
///
/// Detection runs once; the result is reused for every colorized fragment.
pub fn supports_formatting() -> bool {
    *FORMATTING_SUPPORT
}

/// Terminal capability detection
fn detect_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    // Check if colors/emojis are explicitly disabled
    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }

    // Force enable if explicitly requested
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    // Disable formatting when running tests
    if cfg!(test) || env::var("RUST_TEST_TIME_UNIT").is_ok() {
        return false;
    }

    // Check if output is being redirected
    if !std::io::stdout().is_terminal() {
        return false;
    }

    // Check TERM environment variable
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" || term.is_empty() {
            return false;
        }

        // Check for known capable terminals
        if term.contains("color")
            || term.contains("256")
            || term.starts_with("xterm")
            || term.starts_with("screen")
            || term.starts_with("tmux")
            || term == "linux"
        {
            return true;
        }
    }

    // Check for modern terminal programs
    if let Ok(term_program) = env::var("TERM_PROGRAM") {
        match term_program.as_str() {
            "Apple_Terminal" | "iTerm.app" | "vscode" | "Hyper" | "Alacritty" | "kitty"
            | "WezTerm" => return true,
            _ => {}
        }
    }

    // Default: assume no support if we can't detect
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_detect_formatting_with_no_color() {
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
        assert!(!detect_formatting());
        unsafe {
            std::env::remove_var("NO_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_detect_formatting_with_force_color_zero() {
        unsafe {
            std::env::set_var("FORCE_COLOR", "0");
        }
        assert!(!detect_formatting());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_detect_formatting_with_force_color() {
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::set_var("FORCE_COLOR", "1");
        }
        assert!(detect_formatting());
        unsafe {
            std::env::remove_var("FORCE_COLOR");
        }
    }

    #[test]
    #[serial]
    fn test_detect_formatting_disabled_under_test() {
        // cfg!(test) holds here, so detection is off without any env overrides
        unsafe {
            std::env::remove_var("NO_COLOR");
            std::env::remove_var("FORCE_COLOR");
        }
        assert!(!detect_formatting());
    }

    #[test]
    fn test_colorize_plain_in_tests() {
        // Formatting is disabled under cfg(test), so colorize passes through
        assert_eq!(colorize("test", Colors::RED), "test");
        assert_eq!(colorize_banner("VERDICT", Colors::BG_GREEN), "VERDICT");
    }

    #[test]
    fn test_background_codes_are_distinct() {
        let backgrounds = [
            Colors::BG_GREEN,
            Colors::BG_ORANGE,
            Colors::BG_RED,
            Colors::BG_DARK_RED,
            Colors::BG_GRAY,
            Colors::BG_DARK_GRAY,
        ];

        for (i, a) in backgrounds.iter().enumerate() {
            for b in backgrounds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
