//! English number words to numeric values ("twelve" → 12).
//!
//! Number cleaning runs this only after a direct numeric parse fails, so
//! plain digit strings never take this path. The grammar is the usual
//! unit/tens/scale accumulator: "four hundred and twenty-two thousand"
//! resolves to 422000. Any unknown token makes the whole string
//! non-numeric.

enum WordKind {
    Unit(f64),
    Tens(f64),
    Hundred,
    Scale(f64),
}

fn classify(token: &str) -> Option<WordKind> {
    let kind = match token {
        "zero" => WordKind::Unit(0.0),
        "one" => WordKind::Unit(1.0),
        "two" => WordKind::Unit(2.0),
        "three" => WordKind::Unit(3.0),
        "four" => WordKind::Unit(4.0),
        "five" => WordKind::Unit(5.0),
        "six" => WordKind::Unit(6.0),
        "seven" => WordKind::Unit(7.0),
        "eight" => WordKind::Unit(8.0),
        "nine" => WordKind::Unit(9.0),
        "ten" => WordKind::Unit(10.0),
        "eleven" => WordKind::Unit(11.0),
        "twelve" => WordKind::Unit(12.0),
        "thirteen" => WordKind::Unit(13.0),
        "fourteen" => WordKind::Unit(14.0),
        "fifteen" => WordKind::Unit(15.0),
        "sixteen" => WordKind::Unit(16.0),
        "seventeen" => WordKind::Unit(17.0),
        "eighteen" => WordKind::Unit(18.0),
        "nineteen" => WordKind::Unit(19.0),
        "twenty" => WordKind::Tens(20.0),
        "thirty" => WordKind::Tens(30.0),
        "forty" => WordKind::Tens(40.0),
        "fifty" => WordKind::Tens(50.0),
        "sixty" => WordKind::Tens(60.0),
        "seventy" => WordKind::Tens(70.0),
        "eighty" => WordKind::Tens(80.0),
        "ninety" => WordKind::Tens(90.0),
        "hundred" => WordKind::Hundred,
        "thousand" => WordKind::Scale(1_000.0),
        "million" => WordKind::Scale(1_000_000.0),
        "billion" => WordKind::Scale(1_000_000_000.0),
        _ => return None,
    };
    Some(kind)
}

/// Resolve a string made entirely of English number words. Returns `None`
/// when any token is not a number word, or when there are no tokens at all.
pub fn resolve_number_words(raw: &str) -> Option<f64> {
    let lowered = raw.to_lowercase();
    let mut total = 0.0_f64;
    let mut current = 0.0_f64;
    let mut seen_word = false;

    let tokens = lowered
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty() && *t != "and");

    for token in tokens {
        match classify(token)? {
            WordKind::Unit(v) | WordKind::Tens(v) => current += v,
            WordKind::Hundred => {
                // bare "hundred" means one hundred
                current = if current == 0.0 { 100.0 } else { current * 100.0 };
            }
            WordKind::Scale(scale) => {
                let group = if current == 0.0 { 1.0 } else { current };
                total += group * scale;
                current = 0.0;
            }
        }
        seen_word = true;
    }

    if seen_word { Some(total + current) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_simple_words() {
        assert_eq!(resolve_number_words("twelve"), Some(12.0));
        assert_eq!(resolve_number_words("zero"), Some(0.0));
        assert_eq!(resolve_number_words("ninety"), Some(90.0));
    }

    #[test]
    fn resolves_compound_words() {
        assert_eq!(resolve_number_words("twenty-one"), Some(21.0));
        assert_eq!(resolve_number_words("one hundred and five"), Some(105.0));
        assert_eq!(
            resolve_number_words("four hundred twenty two thousand"),
            Some(422_000.0)
        );
        assert_eq!(resolve_number_words("two million"), Some(2_000_000.0));
    }

    #[test]
    fn rejects_non_number_words() {
        assert_eq!(resolve_number_words("maybe"), None);
        assert_eq!(resolve_number_words("twelve apples"), None);
        assert_eq!(resolve_number_words(""), None);
        assert_eq!(resolve_number_words("   "), None);
    }
}
