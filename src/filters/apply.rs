use super::ast::{OrGroup, SearchExpr};

/// True if any OR-group has all of its terms in `text`
///
/// Matching is case-sensitive substring search. An expression with no groups matches
/// nothing.
pub fn matches(expr: &SearchExpr, text: &str) -> bool {
    expr.groups.iter().any(|group| group_matches(group, text))
}

/// True if every term of the group is a substring of `text`
fn group_matches(group: &OrGroup, text: &str) -> bool {
    group.terms.iter().all(|term| text.contains(term.as_str()))
}

impl SearchExpr {
    pub fn matches(&self, text: &str) -> bool {
        matches(self, text)
    }
}
