//! English list and ordinal phrasing.

/// Join items into an English list: `"A"`, `"A and B"`, `"A, B and C"`.
///
/// ```
/// use curbtime::join_list;
///
/// assert_eq!(join_list::<&str>(&[]), "");
/// assert_eq!(join_list(&["A", "B", "C"]), "A, B and C");
/// ```
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head = init.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
            format!("{head} and {}", last.as_ref())
        }
    }
}

/// English ordinal for `n`: 1st, 2nd, 3rd, 4th, 11th, 21st, 112th.
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_examples() {
        let cases: Vec<(&str, Vec<&str>)> = vec![
            ("", vec![]),
            ("A", vec!["A"]),
            ("A and B", vec!["A", "B"]),
            ("A, B and C", vec!["A", "B", "C"]),
            ("A, B, C and D", vec!["A", "B", "C", "D"]),
        ];

        for (expected, items) in cases {
            assert_eq!(join_list(&items), expected, "items: {items:?}");
        }
    }

    #[test]
    fn join_list_leaves_input_untouched() {
        let items = vec!["Monday, 11/13".to_string(), "Friday, 11/24".to_string()];
        assert_eq!(join_list(&items), "Monday, 11/13 and Friday, 11/24");
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn ordinal_examples() {
        let cases = [
            (1, "1st"),
            (2, "2nd"),
            (3, "3rd"),
            (4, "4th"),
            (10, "10th"),
            (11, "11th"),
            (12, "12th"),
            (13, "13th"),
            (20, "20th"),
            (21, "21st"),
            (22, "22nd"),
            (23, "23rd"),
            (101, "101st"),
            (111, "111th"),
            (0, "0th"),
        ];

        for (n, expected) in cases {
            assert_eq!(ordinal(n), expected);
        }
    }
}
