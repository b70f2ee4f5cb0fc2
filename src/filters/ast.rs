/// Terms that must all appear in a line for the group to match
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrGroup {
    pub terms: Vec<String>,
}

impl OrGroup {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }
}

/// Search expression: OR of AND-groups
///
/// Known limitation: one level of grouping only, no parentheses
/// - `a & b | c` is `(a AND b) OR c`
/// - `a & (b | c)` cannot be expressed; the parentheses become part of the terms
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchExpr {
    pub groups: Vec<OrGroup>,
}

impl SearchExpr {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    pub fn add_group(&mut self, group: OrGroup) {
        self.groups.push(group);
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
