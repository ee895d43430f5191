//! Term-vector construction for signal titles.
//!
//! Builds a batch-local TF-IDF space over unigrams and adjacent-word
//! bigrams. Case and diacritics are normalized before tokenization, and
//! near-universal units are suppressed as boilerplate. The vocabulary is
//! recomputed on every call; nothing persists between invocations.

use std::collections::{HashMap, HashSet};

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Minimum token length in characters; shorter runs are discarded.
const MIN_TOKEN_CHARS: usize = 2;

/// Lowercase and strip diacritics.
///
/// NFKD decomposition with combining marks removed, so "Exportação"
/// and "exportacao" normalize to the same text.
pub fn normalize(text: &str) -> String {
    text.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Split normalized text into alphanumeric tokens of at least two characters.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut tokens = Vec::new();
    let mut current = String::new();
    for c in normalized.chars() {
        if c.is_alphanumeric() || c == '_' {
            current.push(c);
        } else {
            flush_token(&mut current, &mut tokens);
        }
    }
    flush_token(&mut current, &mut tokens);
    tokens
}

fn flush_token(current: &mut String, tokens: &mut Vec<String>) {
    if current.chars().count() >= MIN_TOKEN_CHARS {
        tokens.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

/// Vocabulary units for one title: tokens plus adjacent-token bigrams.
fn units(title: &str) -> Vec<String> {
    let tokens = tokenize(title);
    let bigrams: Vec<String> = tokens
        .windows(2)
        .map(|pair| format!("{} {}", pair[0], pair[1]))
        .collect();
    let mut units = tokens;
    units.extend(bigrams);
    units
}

/// Vectorize a batch of titles into a shared TF-IDF space.
///
/// Returns one L2-normalized vector per title, deterministic for a given
/// input sequence. Weights are raw term counts scaled by the smooth
/// inverse document frequency `ln((1 + n) / (1 + df)) + 1`. Units whose
/// document frequency exceeds `ceil(max_df_ratio * n)` weigh nothing;
/// the ceiling keeps tiny batches intact, where every unit necessarily
/// occurs in a large share of the titles.
///
/// With fewer than 2 titles there is no usable space: an empty set is
/// returned and callers treat the whole batch as a single cluster with
/// no edges. A vocabulary of size zero yields all-zero vectors; neither
/// case is an error.
pub fn vectorize(titles: &[&str], max_df_ratio: f64) -> Vec<Vec<f32>> {
    let n = titles.len();
    if n < 2 {
        return Vec::new();
    }

    let per_title: Vec<Vec<String>> = titles.iter().map(|t| units(t)).collect();

    // Vocabulary in first-encounter order, with document frequencies.
    let mut vocab_index: HashMap<String, usize> = HashMap::new();
    let mut doc_freq: Vec<usize> = Vec::new();
    for title_units in &per_title {
        let mut seen: HashSet<usize> = HashSet::new();
        for unit in title_units {
            let id = match vocab_index.get(unit) {
                Some(&id) => id,
                None => {
                    let id = doc_freq.len();
                    vocab_index.insert(unit.clone(), id);
                    doc_freq.push(0);
                    id
                }
            };
            if seen.insert(id) {
                doc_freq[id] += 1;
            }
        }
    }

    let df_cutoff = (max_df_ratio * n as f64).ceil() as usize;
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| {
            if df > df_cutoff {
                0.0
            } else {
                ((1 + n) as f64 / (1 + df) as f64).ln() + 1.0
            }
        })
        .collect();

    per_title
        .iter()
        .map(|title_units| {
            let mut vector = vec![0.0f32; doc_freq.len()];
            for unit in title_units {
                vector[vocab_index[unit]] += 1.0;
            }
            for (id, weight) in vector.iter_mut().enumerate() {
                *weight = (f64::from(*weight) * idf[id]) as f32;
            }
            let norm = vector.iter().map(|w| w * w).sum::<f32>().sqrt();
            if norm > 0.0 {
                for weight in vector.iter_mut() {
                    *weight /= norm;
                }
            }
            vector
        })
        .collect()
}
