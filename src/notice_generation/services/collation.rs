use std::cmp::Ordering;

/// Whitespace and punctuation in root collation order, lowest first
const PUNCTUATION_ORDER: &str = " _-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Orders package names the way a human-facing listing expects
///
/// Follows the root collation at primary strength: whitespace and
/// punctuation sort below digits, digits below letters, and letters compare
/// case-insensitively. Names that differ only in case put the lowercase
/// spelling first. Only exact duplicates compare equal, so a stable sort
/// keeps their insertion order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let primary_a = a.chars().flat_map(char::to_lowercase).map(primary_weight);
    let primary_b = b.chars().flat_map(char::to_lowercase).map(primary_weight);

    // lowercase code points sort above uppercase ones, hence the reversal
    primary_a.cmp(primary_b).then_with(|| b.cmp(a))
}

/// Group and rank of an already lowercased character
fn primary_weight(c: char) -> (u8, u32) {
    if let Some(rank) = PUNCTUATION_ORDER.find(c) {
        return (0, rank as u32);
    }
    if let Some(digit) = c.to_digit(10) {
        return (2, digit);
    }
    if c.is_alphabetic() {
        return (3, c as u32);
    }
    // other symbols sit between the listed punctuation and the digits
    (1, c as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let mut names: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        names.sort_by(|a, b| locale_compare(a, b));
        names
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        assert_eq!(sorted(&["b", "A", "c"]), vec!["A", "b", "c"]);
        assert_eq!(sorted(&["Zlib", "anyhow", "Serde"]), vec!["anyhow", "Serde", "Zlib"]);
    }

    #[test]
    fn test_lowercase_before_uppercase_on_tie() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(sorted(&["Serde", "serde"]), vec!["serde", "Serde"]);
    }

    #[test]
    fn test_equal_names_compare_equal() {
        assert_eq!(locale_compare("tokio", "tokio"), Ordering::Equal);
    }

    #[test]
    fn test_punctuation_sorts_before_digits_and_letters() {
        assert_eq!(
            sorted(&["lodash.get", "lodash-es", "abc2", "lodash_fp", "abc_x"]),
            vec!["abc_x", "abc2", "lodash_fp", "lodash-es", "lodash.get"]
        );
    }

    #[test]
    fn test_digits_sort_before_letters() {
        assert_eq!(sorted(&["ab", "a1", "a-b"]), vec!["a-b", "a1", "ab"]);
        assert_eq!(sorted(&["v8", "v10", "vue"]), vec!["v10", "v8", "vue"]);
    }

    #[test]
    fn test_scoped_names_sort_before_plain_names() {
        assert_eq!(
            sorted(&["react", "@types/node", "7zip", "@babel/core"]),
            vec!["@babel/core", "@types/node", "7zip", "react"]
        );
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(sorted(&["serde_json", "serde"]), vec!["serde", "serde_json"]);
    }
}
