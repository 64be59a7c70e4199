//! Formatting utilities for terminal output

use crate::core::Feedback;
use colored::{ColoredString, Colorize};

/// Format a row of feedback as emoji squares
#[must_use]
pub fn feedback_to_emoji(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.to_emoji()).collect()
}

/// Format a row of feedback as arrows pointing towards the secret
#[must_use]
pub fn feedback_to_arrows(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.arrow()).collect()
}

/// Color one guessed symbol by its feedback
#[must_use]
pub fn colored_symbol(symbol: char, feedback: Feedback) -> ColoredString {
    let text = format!(" {symbol} ");
    match feedback {
        Feedback::TooLow => text.white().on_blue().bold(),
        Feedback::Exact => text.black().on_green().bold(),
        Feedback::TooHigh => text.white().on_red().bold(),
    }
}

/// A block of the given color, with text in a contrasting color
#[must_use]
pub fn color_swatch(text: &str, rgb: (u8, u8, u8), contrast: (u8, u8, u8)) -> ColoredString {
    text.truecolor(contrast.0, contrast.1, contrast.2)
        .on_truecolor(rgb.0, rgb.1, rgb.2)
        .bold()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
