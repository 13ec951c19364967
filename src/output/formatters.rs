//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Cast is safe: ratio is clamped to [0, 1]
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar, scaled to the most bits a guess could carry
/// against `total` candidates
#[must_use]
pub fn entropy_bar(entropy: f64, total: usize, width: usize) -> String {
    let max_entropy = (total.max(2) as f64).log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// `1 guess` / `3 guesses`
#[must_use]
pub fn plural_guesses(count: usize) -> String {
    if count == 1 {
        "1 guess".to_string()
    } else {
        format!("{count} guesses")
    }
}
