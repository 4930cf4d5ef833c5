//! Shell completion generation for credcheck

use clap::Command;
use clap_complete::{Generator, generate};

/// Generate shell completions for the given shell
pub fn print_completions<G: Generator>(generator: G, app: &mut Command) {
    generate(
        generator,
        app,
        app.get_name().to_string(),
        &mut std::io::stdout(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::cli::Cli;
    use clap::CommandFactory;

    #[test]
    fn test_print_completions_does_not_panic() {
        let mut app = Cli::command();
        print_completions(clap_complete::Shell::Bash, &mut app);
    }
}
