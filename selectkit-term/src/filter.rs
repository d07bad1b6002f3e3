//! Ranking option labels against the typed text with nucleo-matcher.

use std::cmp::Reverse;

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher};

/// A label under consideration, remembering where it came from.
struct Candidate<'a> {
    index: usize,
    label: &'a str,
}

impl AsRef<str> for Candidate<'_> {
    fn as_ref(&self) -> &str {
        self.label
    }
}

/// Indices of the labels matching `query`, best first.
///
/// The query uses fzf syntax (`^prefix`, `suffix$`, `'exact`, `!not`, space
/// separated atoms) and is case-insensitive unless it contains an uppercase
/// letter. Equal scores prefer the shorter label, then list order. A blank
/// query keeps every label in list order.
pub fn rank(query: &str, labels: &[String]) -> Vec<usize> {
    if query.trim().is_empty() {
        return (0..labels.len()).collect();
    }

    let pattern = Pattern::parse(query, CaseMatching::Smart, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let candidates = labels.iter().enumerate().map(|(index, label)| Candidate {
        index,
        label: label.as_str(),
    });

    let mut ranked = pattern.match_list(candidates, &mut matcher);
    ranked.sort_by_key(|(candidate, score)| {
        (Reverse(*score), candidate.label.chars().count(), candidate.index)
    });
    ranked.into_iter().map(|(candidate, _)| candidate.index).collect()
}
