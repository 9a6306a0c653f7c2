use colored::*;

pub struct ColorScheme;

impl ColorScheme {
    pub fn new(use_colors: bool) -> Self {
        if !use_colors {
            colored::control::set_override(false);
        }
        Self
    }

    pub fn state(&self, text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn path_cell(&self, text: &str) -> ColoredString {
        text.cyan().bold()
    }

    pub fn wall(&self, text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn success(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(&self, text: &str) -> ColoredString {
        text.red()
    }

    pub fn algorithm(&self, text: &str) -> ColoredString {
        text.magenta()
    }

    pub fn number(&self, text: &str) -> ColoredString {
        text.green()
    }

    pub fn stats(&self, text: &str) -> ColoredString {
        text.blue()
    }
}
