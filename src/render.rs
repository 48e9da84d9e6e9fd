//! Reply sentences for ranked windows.

use crate::engine::RankedWindow;
use crate::grammar::ordinal;

pub const NO_WINDOWS: &str = "No free parking times found.";

/// Shown by callers when the regulation data could not be obtained at all.
pub const FALLBACK_REPLY: &str = "Sorry, we weren't able to find parking regulations near you. Please try again!";

const PARAGRAPH: &str = "\n\n";

/// One sentence per window, separated by blank lines.
pub fn render_windows(place: &str, windows: &[RankedWindow]) -> String {
    if windows.is_empty() {
        return NO_WINDOWS.to_string();
    }

    windows
        .iter()
        .enumerate()
        .map(|(idx, window)| {
            let ending = format!(
                "is {}, with alternate-side parking restrictions ending on {} nearby streets.",
                window.label, window.count
            );
            match idx {
                0 => format!("The best time to park near {place} {ending}"),
                _ => format!("The {} best time to park {ending}", ordinal(idx + 1)),
            }
        })
        .collect::<Vec<_>>()
        .join(PARAGRAPH)
}

/// Windows message followed by the suspension summary, if there is one.
pub fn compose_reply(windows_message: &str, suspension_message: &str) -> String {
    if suspension_message.is_empty() {
        windows_message.to_string()
    } else {
        format!("{windows_message}{PARAGRAPH}{suspension_message}")
    }
}
