//! User interface and interaction
//!
//! This module contains all components related to user interaction,
//! including CLI parsing, the result view-model, output formatting,
//! the pending indicator, notifications, and shell completion generation.

pub mod cli;
pub mod color;
pub mod completion;
pub mod notify;
pub mod output;
pub mod progress;
pub mod view;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config, submissions_from_cli};
pub use completion::print_completions;
pub use notify::{Notify, TerminalNotifier};
pub use progress::PendingIndicator;
pub use view::{Banner, ResultsView, ViewState};
