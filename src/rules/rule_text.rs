//! Start-time extraction from free-form regulation sentences.

use crate::error::{Error, Result};

/// Marker phrase that identifies a free-parking allowance.
pub const FREE_PARKING_MARKER: &str = "Free Parking";

const FROM: &str = "From";
const UNTIL: &str = "Until";

/// Extract the start-time token from a regulation sentence.
///
/// Returns `Ok(None)` when the rule is not a free-parking rule. For a
/// free-parking rule, returns the text between the first `From` and the next
/// `Until`, trimmed and with one trailing period removed.
///
/// ```
/// use curbtime::extract_start_token;
///
/// let rule = "Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am.";
/// assert_eq!(extract_start_token(rule).unwrap(), Some("Nov 12 Mon 9:00am"));
/// assert_eq!(extract_start_token("No Standing Anytime").unwrap(), None);
/// ```
pub fn extract_start_token(rule: &str) -> Result<Option<&str>> {
    if !rule.contains(FREE_PARKING_MARKER) {
        return Ok(None);
    }

    let malformed = || Error::MalformedRuleText { rule: rule.to_string() };

    let (_, after_from) = rule.split_once(FROM).ok_or_else(malformed)?;
    let (between, _) = after_from.split_once(UNTIL).ok_or_else(malformed)?;

    let token = between.trim();
    let token = token.strip_suffix('.').unwrap_or(token);
    if token.is_empty() {
        return Err(malformed());
    }

    Ok(Some(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_token_between_markers() {
        let cases = [
            ("Free Parking From Nov 12 Mon 9:00am Until Nov 12 Mon 10:30am", "Nov 12 Mon 9:00am"),
            ("Free Parking From   Nov 14 Wed 11:30am.   Until Nov 14 Wed 1:00pm", "Nov 14 Wed 11:30am"),
            ("Broom symbol. Free Parking From Nov 13 Tue 8:00am Until Nov 13 Tue 8:30am.", "Nov 13 Tue 8:00am"),
        ];

        for (rule, expected) in cases {
            assert_eq!(extract_start_token(rule).unwrap(), Some(expected), "rule: {rule}");
        }
    }

    #[test]
    fn strips_only_one_trailing_period() {
        let rule = "Free Parking From Nov 12 Mon 9:00am.. Until later";
        assert_eq!(extract_start_token(rule).unwrap(), Some("Nov 12 Mon 9:00am."));
    }

    #[test]
    fn non_free_parking_rules_are_absent() {
        assert_eq!(extract_start_token("No Parking 8am-9:30am Mon Thurs").unwrap(), None);
        assert_eq!(extract_start_token("").unwrap(), None);
        assert_eq!(extract_start_token("free parking From x Until y").unwrap(), None);
    }

    #[test]
    fn missing_delimiters_are_malformed() {
        for rule in ["Free Parking Anytime", "Free Parking From Nov 12 Mon 9:00am", "Free Parking Until 9am", "Free Parking From . Until"]
        {
            let err = extract_start_token(rule).unwrap_err();
            assert!(matches!(err, Error::MalformedRuleText { .. }), "rule: {rule}");
        }
    }
}
