use unicode_normalization::UnicodeNormalization;

/// Clean and canonicalize free text from upstream documents.
///
/// Applies NFKC Unicode normalization, replaces typographic dashes with
/// plain hyphens, collapses whitespace runs (including newlines) to a
/// single space, and trims. Idempotent.
pub fn normalize(text: &str) -> String {
    let canonical: String = text
        .nfkc()
        .map(|c| match c {
            '\u{2013}' | '\u{2014}' => '-',
            other => other,
        })
        .collect();

    canonical.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a question for indexing/querying: [`normalize`] plus lowercase.
///
/// Applied identically to corpus questions at index build time and to
/// incoming queries at request time.
pub fn normalize_question(text: &str) -> String {
    normalize(text).to_lowercase()
}

/// Parse a CTC (cost-to-company) salary figure.
///
/// Upstream placement data is dirty; any unparseable value is coerced to
/// `0.0` so corpus generation never aborts on malformed financial data.
pub fn parse_ctc(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  hello \n  world \t"), "hello world");
    }

    #[test]
    fn test_normalize_replaces_dashes() {
        assert_eq!(normalize("09.09.2024 \u{2013} 18.09.2024"), "09.09.2024 - 18.09.2024");
        assert_eq!(normalize("a\u{2014}b"), "a-b");
    }

    #[test]
    fn test_normalize_nfkc() {
        // Fullwidth characters fold to ASCII under NFKC
        assert_eq!(normalize("ＣＳＥ"), "CSE");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = ["  MSE\u{2013}I \n", "a  b", "", "already clean"];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_question_lowercases() {
        assert_eq!(normalize_question("When is MSE-I?"), "when is mse-i?");
    }

    #[test]
    fn test_parse_ctc_valid() {
        assert_eq!(parse_ctc("14.00"), 14.0);
        assert_eq!(parse_ctc(" 7 "), 7.0);
    }

    #[test]
    fn test_parse_ctc_invalid_coerced_to_zero() {
        assert_eq!(parse_ctc("N/A"), 0.0);
        assert_eq!(parse_ctc(""), 0.0);
        assert_eq!(parse_ctc("7.5 LPA"), 0.0);
    }
}
