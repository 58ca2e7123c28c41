//! Output formatting utilities

use console::style;

/// Error line printed by `main` before exiting
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("Error:").for_stderr().red().bold(), message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error() {
        let line = format_error("No repositories selected");
        assert!(line.contains("Error:"));
        assert!(line.ends_with("No repositories selected"));
    }
}
