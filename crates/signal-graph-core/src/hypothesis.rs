//! Short hypothesis synthesis from selected signal titles.
//!
//! The sentence is strictly derived: every content word comes from an
//! input title, and only the fixed connective template adds vocabulary.
//! No generative synthesis of any kind.

/// Fixed sentence returned when the selection is empty.
pub const NO_DATA_HYPOTHESIS: &str = "Sem dados suficientes para hipótese.";

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "…";

/// Shorten a title to its first `max_words` whitespace words.
fn shorten(title: &str, max_words: usize) -> String {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.len() <= max_words {
        words.join(" ")
    } else {
        format!("{}{}", words[..max_words].join(" "), ELLIPSIS)
    }
}

/// Compose the hypothesis from up to the first three selected titles.
///
/// Titles are taken in selection order and shortened to their first
/// `max_title_words` words each. The composed sentence is hard-capped at
/// `max_words` whitespace words; truncation appends the ellipsis marker
/// and never fails. Deterministic: identical selection, identical
/// sentence.
pub fn synthesize(titles: &[&str], max_title_words: usize, max_words: usize) -> String {
    if titles.is_empty() {
        return NO_DATA_HYPOTHESIS.to_string();
    }

    let short: Vec<String> = titles
        .iter()
        .take(3)
        .map(|t| shorten(t, max_title_words))
        .collect();

    let sentence = match short.as_slice() {
        [a] => format!("Tendências poderão convergir a partir de: '{a}'."),
        [a, b] => format!("Tendências poderão convergir entre: '{a}' e '{b}'."),
        [a, b, c] => format!("Tendências poderão convergir entre: '{a}', '{b}' e '{c}'."),
        _ => unreachable!("at most three titles are taken"),
    };

    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() > max_words {
        format!("{}{}", words[..max_words].join(" "), ELLIPSIS)
    } else {
        sentence
    }
}
