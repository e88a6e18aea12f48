//! Local search filter over already-loaded users.
//!
//! The displayed set is always recomputed from scratch from the accumulated
//! records and the query; it is never patched incrementally. Matching is
//! case-insensitive and deliberately narrow: full-name prefix, exact email,
//! or last-name prefix.

use crate::models::User;

/// True if `user` matches the search query.
pub fn matches_query(user: &User, query: &str) -> bool {
    let term = query.to_lowercase();
    let full_name = user.full_name().to_lowercase();

    full_name.starts_with(&term)
        || user.email.to_lowercase() == term
        || user.last_name.to_lowercase().starts_with(&term)
}

/// Recompute the displayed set from the accumulated records and the query.
/// An empty (trimmed) query restores the full accumulated set in order.
pub fn apply(users: &[User], query: &str) -> Vec<User> {
    if query.trim().is_empty() {
        users.to_vec()
    } else {
        users
            .iter()
            .filter(|u| matches_query(u, query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: &str, last: &str, email: &str) -> User {
        User {
            id: 0,
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            image: None,
        }
    }

    fn sample() -> Vec<User> {
        vec![
            user("Ann", "Lee", "ann.lee@example.com"),
            user("Bob", "Lane", "bob.lane@example.com"),
        ]
    }

    #[test]
    fn test_last_name_prefix_match() {
        let users = sample();
        let shown = apply(&users, "La");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].full_name(), "Bob Lane");
    }

    #[test]
    fn test_full_name_prefix_match() {
        let users = sample();
        let shown = apply(&users, "ann l");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].first_name, "Ann");
    }

    #[test]
    fn test_email_must_match_exactly() {
        let users = sample();
        assert_eq!(apply(&users, "BOB.LANE@EXAMPLE.COM").len(), 1);
        // A partial email is not an email match, and "bob.lane@" is neither
        // a name prefix.
        assert!(apply(&users, "bob.lane@").is_empty());
    }

    #[test]
    fn test_empty_query_restores_everything_in_order() {
        let users = sample();
        let shown = apply(&users, "");
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].first_name, "Ann");
        assert_eq!(shown[1].first_name, "Bob");

        // Whitespace-only counts as empty too.
        assert_eq!(apply(&users, "   ").len(), 2);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let users = sample();
        assert_eq!(apply(&users, "lEe").len(), 1);
        assert_eq!(apply(&users, "BOB").len(), 1);
    }

    #[test]
    fn test_no_match_yields_empty_set() {
        let users = sample();
        assert!(apply(&users, "zzz").is_empty());
    }
}
