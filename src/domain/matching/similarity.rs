//! Weighted-ratio fuzzy string similarity
//!
//! Scores are in `[0, 100]`. The base metric is the normalized Indel
//! similarity (`2 * LCS / (|a| + |b|)`); the weighted ratio combines it with
//! substring and token-based variants, scaled down when the two strings have
//! very different lengths.

use std::collections::BTreeSet;

const UNBASE_SCALE: f64 = 0.95;

/// Best candidate for a query
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub candidate: String,
    pub score: f64,
}

impl MatchResult {
    pub fn new(candidate: impl Into<String>, score: f64) -> Self {
        Self {
            candidate: candidate.into(),
            score,
        }
    }

    pub fn meets(&self, threshold: f64) -> bool {
        self.score >= threshold
    }
}

/// Replace non-alphanumeric characters with spaces, lowercase and trim
pub fn preprocess(input: &str) -> String {
    let replaced: String = input
        .chars()
        .flat_map(|c| {
            let lowered: Vec<char> = if c.is_alphanumeric() {
                c.to_lowercase().collect()
            } else {
                vec![' ']
            };
            lowered
        })
        .collect();

    replaced.trim().to_string()
}

/// Score `query` against every candidate and keep the best one.
///
/// On equal scores the earliest candidate wins. Returns `None` when there
/// are no candidates.
pub fn extract_one(query: &str, candidates: &[String]) -> Option<MatchResult> {
    let query = preprocess(query);
    let mut best: Option<MatchResult> = None;

    for candidate in candidates {
        let score = weighted_ratio_processed(&query, &preprocess(candidate));

        let better = match &best {
            Some(current) => score > current.score,
            None => true,
        };

        if better {
            best = Some(MatchResult::new(candidate.clone(), score));
        }
    }

    best
}

/// Weighted ratio of two raw strings
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    weighted_ratio_processed(&preprocess(a), &preprocess(b))
}

fn weighted_ratio_processed(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0.0;
    }

    let shorter = a_chars.len().min(b_chars.len()) as f64;
    let longer = a_chars.len().max(b_chars.len()) as f64;
    let len_ratio = longer / shorter;

    let end_ratio = ratio_chars(&a_chars, &b_chars);

    if len_ratio < 1.5 {
        let token = token_sort_ratio(a, b).max(token_set_ratio(a, b));
        return end_ratio.max(token * UNBASE_SCALE);
    }

    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };

    let end_ratio = end_ratio.max(partial_ratio_chars(&a_chars, &b_chars) * partial_scale);
    let partial_token = partial_token_sort_ratio(a, b).max(partial_token_set_ratio(a, b));

    end_ratio.max(partial_token * UNBASE_SCALE * partial_scale)
}

/// Normalized Indel similarity
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    ratio_chars(&a, &b)
}

/// Best `ratio` of the shorter string against windows of the longer one
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    partial_ratio_chars(&a, &b)
}

pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let parts = TokenSetParts::new(a, b);

    if !parts.intersection.is_empty()
        && (parts.only_a.is_empty() || parts.only_b.is_empty())
    {
        return 100.0;
    }

    let combined_a = join_nonempty(&parts.intersection, &parts.only_a);
    let combined_b = join_nonempty(&parts.intersection, &parts.only_b);

    let mut best = ratio(&combined_a, &combined_b);

    if !parts.intersection.is_empty() {
        best = best
            .max(ratio(&parts.intersection, &combined_a))
            .max(ratio(&parts.intersection, &combined_b));
    }

    best
}

fn partial_token_sort_ratio(a: &str, b: &str) -> f64 {
    partial_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

fn partial_token_set_ratio(a: &str, b: &str) -> f64 {
    let parts = TokenSetParts::new(a, b);

    if !parts.intersection.is_empty() {
        return 100.0;
    }

    partial_ratio(&parts.only_a, &parts.only_b)
}

fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();

    if total == 0 {
        return 100.0;
    }

    200.0 * lcs_len(a, b) as f64 / total as f64
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut best = best_window_ratio(shorter, longer);

    if shorter.len() == longer.len() {
        best = best.max(best_window_ratio(longer, shorter));
    }

    best
}

fn best_window_ratio(needle: &[char], haystack: &[char]) -> f64 {
    let m = needle.len();
    let n = haystack.len();
    let mut best: f64 = 0.0;

    for i in 1..m {
        best = best
            .max(ratio_chars(needle, &haystack[..i]))
            .max(ratio_chars(needle, &haystack[n - i..]));
    }

    for start in 0..=(n - m) {
        best = best.max(ratio_chars(needle, &haystack[start..start + m]));

        if best >= 100.0 {
            break;
        }
    }

    best
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut previous = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];

    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                previous[j] + 1
            } else {
                previous[j + 1].max(current[j])
            };
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

struct TokenSetParts {
    intersection: String,
    only_a: String,
    only_b: String,
}

impl TokenSetParts {
    fn new(a: &str, b: &str) -> Self {
        let set_a: BTreeSet<&str> = a.split_whitespace().collect();
        let set_b: BTreeSet<&str> = b.split_whitespace().collect();

        let join = |tokens: Vec<&str>| tokens.join(" ");

        Self {
            intersection: join(set_a.intersection(&set_b).copied().collect()),
            only_a: join(set_a.difference(&set_b).copied().collect()),
            only_b: join(set_b.difference(&set_a).copied().collect()),
        }
    }
}
