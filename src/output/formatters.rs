//! Formatting utilities for terminal output

/// Entropy shown as a full bar
const BAR_MAX_ENTROPY: f64 = 8.0;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar, shorter is more English-like
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    create_progress_bar(entropy, BAR_MAX_ENTROPY, width)
}

/// Shorten text to at most `width` characters, marking the cut with an ellipsis
#[must_use]
pub fn truncate_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let kept: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}
