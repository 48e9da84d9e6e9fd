//! Regulation text parsing: rule sentence -> start token -> [`TimeLabel`].
//!
//! [`TimeLabel`]: crate::TimeLabel

pub mod rule_text;
pub mod start_time;

pub use rule_text::extract_start_token;
pub use start_time::parse_start_token;

use crate::error::Result;
use crate::time_label::TimeLabel;

/// Run a rule sentence through both parsing stages.
///
/// `Ok(None)` means "not a free-parking rule".
pub fn label_for_rule(rule: &str) -> Result<Option<TimeLabel>> {
    match extract_start_token(rule)? {
        Some(token) => parse_start_token(token).map(Some),
        None => Ok(None),
    }
}
