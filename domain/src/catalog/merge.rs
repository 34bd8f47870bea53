//! Union-by-first-occurrence over layered banks.

use crate::core::question::Question;
use std::collections::HashSet;

/// Merge bank contents in precedence order, keeping the first occurrence
/// of every id and silently dropping later duplicates.
///
/// The policy is presence-wins-first, not override-wins-last: a more
/// specific bank gains nothing by redefining an id the core bank already
/// owns. If the same id legitimately carries different content in two
/// banks, the earliest-loaded version wins. Output order is first
/// occurrence and is never re-sorted downstream.
pub fn merge_first_occurrence(banks: Vec<Vec<Question>>) -> Vec<Question> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = Vec::new();
    for bank in banks {
        for question in bank {
            if seen.contains(&question.id) {
                continue;
            }
            seen.insert(question.id.clone());
            merged.push(question);
        }
    }
    merged
}
