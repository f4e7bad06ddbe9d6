//! Alphabetical term ordering.
//!
//! Produces the ascending lexicographic order of the term set by repeated
//! minimum extraction rather than a comparison sort: candidates that lose a
//! pass are set aside and returned to the working set before the next pass.
//! Total work is O(n²), which is fine for glossaries of ordinary size but
//! does not scale; for distinct keys the result is identical to a standard
//! sort, so swapping one in is safe if term counts ever grow large.

use tracing::debug;

/// Order terms in ascending lexicographic (code point) order.
///
/// Consumes the input; the result is a sorted permutation of it.
#[must_use]
pub fn order_terms(mut terms: Vec<String>) -> Vec<String> {
    let mut ordered = Vec::with_capacity(terms.len());

    while let Some(next) = extract_min(&mut terms) {
        ordered.push(next);
    }

    debug!(terms = ordered.len(), "ordered term list");
    ordered
}

/// Remove and return the smallest element of `remaining`.
///
/// Picks an arbitrary element and scans the rest of the working set for a
/// strictly smaller one; losers are held aside and restored afterwards. The
/// overall minimum is never held aside, so the loop always finds it.
fn extract_min(remaining: &mut Vec<String>) -> Option<String> {
    let mut held = Vec::new();

    let minimum = loop {
        let Some(candidate) = remaining.pop() else {
            break None;
        };

        if remaining.iter().any(|term| *term < candidate) {
            held.push(candidate);
        } else {
            break Some(candidate);
        }
    };

    remaining.append(&mut held);
    minimum
}
