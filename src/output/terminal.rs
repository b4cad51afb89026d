//! Terminal output utilities.

use crate::cli::Verdict;
use colored::Colorize;

/// Render a verdict as the lines printed by the binary.
pub fn render(verdict: &Verdict) -> String {
    match verdict {
        Verdict::Clean { checked } => {
            format!("{} {checked} ranges, no overlap\n", "OK:".green())
        }
        Verdict::Overlap(conflict) => format!(
            "{} {conflict}\n  {} overlaps {}\n",
            "OVERLAP:".red(),
            conflict.first.as_str().on_blue(),
            conflict.second.as_str().on_blue()
        ),
        Verdict::Invalid(e) => format!("{} {e}\n", "INVALID:".red()),
    }
}
