//! Free-text entity extraction for user stories.
//!
//! Story sentences follow the rough pattern "As a [role], I want to
//! [action] a [object]". Extraction is a best-effort heuristic: it keeps
//! the word tokens that could plausibly name a data object and offers a
//! normalized equivalence test tolerant of case, spacing, and plural
//! differences. False positives and false negatives are both possible and
//! accepted.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::core::word_tokens;

/// Story-scaffolding words that never name a data object.
///
/// Matched case-insensitively. Role nouns are deliberately NOT filtered;
/// a role that collides with an object name is an accepted false positive.
const STOPWORDS: &[&str] = &[
    "a", "an", "the", "as", "i", "want", "to", "so", "that", "can", "all", "view", "add",
    "update", "delete", "create", "see", "manage", "my", "of", "in", "for", "and", "or", "is",
    "are", "be", "able", "when", "with", "on",
];

fn is_stopword(token: &str) -> bool {
    STOPWORDS.iter().any(|s| token.eq_ignore_ascii_case(s))
}

/// Extract candidate entity names from a user story sentence.
///
/// Candidates are the non-stopword word tokens plus 2- and 3-token runs
/// of adjacent original tokens ending in a non-stopword, so a phrase like
/// "to do items" can match the compact name `ToDoItem` even though "to"
/// alone is scaffolding. Duplicates are removed; first-seen order is
/// kept. Empty or malformed text degrades to an empty list.
pub fn extract_candidate_names(story_text: &str) -> Vec<String> {
    let tokens = word_tokens(story_text);

    let mut seen = FxHashSet::default();
    let mut candidates = Vec::new();
    let mut push = |candidate: String| {
        if seen.insert(candidate.clone()) {
            candidates.push(candidate);
        }
    };

    for (i, &token) in tokens.iter().enumerate() {
        if !is_stopword(token) {
            push(token.to_string());
        }
        for len in 2..=3usize {
            if i + len > tokens.len() {
                break;
            }
            let run = &tokens[i..i + len];
            // Entity mentions end in a noun; a run ending in scaffolding
            // ("I want", "want to") can never be one.
            if run.last().is_some_and(|t| !is_stopword(t)) {
                push(run.join(" "));
            }
        }
    }

    trace!(
        story = story_text,
        count = candidates.len(),
        "extracted story candidates"
    );
    candidates
}

/// Fuzzy equivalence between a story candidate and a model entity name.
///
/// Both sides are case-folded and stripped of spaces/underscores/hyphens,
/// then compared raw and with either side singularized. Singular-vs-raw
/// in both directions avoids mangling names that already end in `s`
/// ("Status" must match "statuses"). Story text uses natural language
/// ("invoices", "tac customers") while model names use a compact
/// identifier style (`Invoice`, `TacCustomer`).
pub fn is_name_match(candidate: &str, target_name: &str) -> bool {
    let candidate = fold_entity_name(candidate);
    let target = fold_entity_name(target_name);
    if candidate.is_empty() || target.is_empty() {
        return false;
    }
    candidate == target
        || singularize(&candidate) == target
        || candidate == singularize(&target)
}

fn fold_entity_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Strip a plural suffix: `…ies` → `…y`, `es` after a sibilant, else a
/// trailing `s` (but never `ss`).
fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for sibilant in ["ses", "xes", "zes", "ches", "shes"] {
        if word.len() > sibilant.len() {
            if let Some(stem) = word.strip_suffix(sibilant) {
                return format!("{stem}{}", &sibilant[..sibilant.len() - 2]);
            }
        }
    }
    if word.len() > 1 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}
