//! Tokenized, rank-ordered customer name matching.
//!
//! One canonical implementation used by every search surface. Matching is
//! name-only (never email or phone) so results follow what the customer
//! entered at sign-up.

use crate::user::User;

/// Queries shorter than this yield no results.
pub const MIN_QUERY_LEN: usize = 2;

fn norm(s: Option<&str>) -> String {
    s.unwrap_or("").trim().to_lowercase()
}

/// Match `records` against free-text `query`, returning matches ranked
/// with exact first/last name equality first, ties broken by ascending
/// first name.
///
/// Single-token queries match on first/last name equality, prefix, or
/// substring. Multi-token queries (first two tokens only) match the
/// tokens across first/last name in either order, or the full name
/// against the whole query.
pub fn match_customers(records: &[User], query: &str) -> Vec<User> {
    let q = query.trim().to_lowercase();
    if q.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    let words: Vec<&str> = q.split_whitespace().collect();

    let mut matched: Vec<User> = records
        .iter()
        .filter(|u| {
            let first = norm(u.first_name.as_deref());
            let last = norm(u.last_name.as_deref());
            let full = norm(u.full_name.as_deref());

            match words.as_slice() {
                [w] => {
                    first == *w
                        || last == *w
                        || first.starts_with(w)
                        || last.starts_with(w)
                        || first.contains(w)
                        || last.contains(w)
                }
                [w1, w2, ..] => {
                    (first.contains(w1) && last.contains(w2))
                        || (first.contains(w2) && last.contains(w1))
                        || (first == *w1 && last == *w2)
                        || (first == *w2 && last == *w1)
                        || full.contains(&q)
                }
                // Defensive: a non-empty query always tokenizes, but keep
                // a plain substring fallback rather than panicking.
                [] => first.contains(&q) || last.contains(&q) || full.contains(&q),
            }
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| {
        let a_first = norm(a.first_name.as_deref());
        let b_first = norm(b.first_name.as_deref());
        let a_exact = a_first == q || norm(a.last_name.as_deref()) == q;
        let b_exact = b_first == q || norm(b.last_name.as_deref()) == q;
        b_exact.cmp(&a_exact).then(a_first.cmp(&b_first))
    });
    matched
}

/// Degraded-precision filter used when the full roster is unavailable:
/// plain substring match against first, last, or full name, skipping the
/// token-pairing heuristics.
pub fn filter_substring(records: &[User], query: &str) -> Vec<User> {
    let q = query.trim().to_lowercase();
    if q.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }
    records
        .iter()
        .filter(|u| {
            norm(u.first_name.as_deref()).contains(&q)
                || norm(u.last_name.as_deref()).contains(&q)
                || norm(u.full_name.as_deref()).contains(&q)
        })
        .cloned()
        .collect()
}
