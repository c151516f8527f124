//! Trigger-phrase heuristic deciding whether a turn warrants a web lookup.
//!
//! Matching is plain substring containment on the lowercased text, with no
//! word boundaries: "rediagram" triggers just like "diagram" does.  The
//! phrases are compiled once into an Aho-Corasick automaton.

use std::sync::LazyLock;

use aho_corasick::AhoCorasick;

/// Phrases that mark a request for diagrams, schematics or manuals.
pub const TRIGGER_PHRASES: &[&str] = &[
    "wiring diagram",
    "wiring",
    "diagram",
    "schematic",
    "manual",
    "fuse",
    "serpentine",
];

static AUTOMATON: LazyLock<Option<AhoCorasick>> =
    LazyLock::new(|| match AhoCorasick::new(TRIGGER_PHRASES) {
        Ok(ac) => Some(ac),
        Err(e) => {
            tracing::error!(error = %e, "failed to build trigger automaton, using linear scan");
            None
        }
    });

/// Return `true` iff the lowercased text contains at least one trigger phrase.
pub fn should_search(text: &str) -> bool {
    matched_trigger(text).is_some()
}

/// Return the first trigger phrase found in the lowercased text, if any.
pub fn matched_trigger(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    match AUTOMATON.as_ref() {
        Some(ac) => ac
            .find(lowered.as_str())
            .map(|m| TRIGGER_PHRASES[m.pattern().as_usize()]),
        None => TRIGGER_PHRASES
            .iter()
            .copied()
            .find(|phrase| lowered.contains(phrase)),
    }
}
