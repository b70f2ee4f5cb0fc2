//! Search expression parser.
//!
//! # Syntax
//!
//! ```text
//! expr     := group ('|' group)*
//! group    := term ('&' term)*
//! term     := any text without '|' or '&', surrounding whitespace trimmed
//! ```
//!
//! ORs are split first, then the ANDs inside each OR-group. There is no escaping,
//! quoting or nesting.
//!
//! # Examples
//!
//! ```rust
//! # use search_directory_history::filters::parser::parse_search_expression;
//! // Either side of the `|` may match
//! let expr = parse_search_expression("kubectl & namespace | kubectl & statefulset");
//! assert_eq!(expr.groups.len(), 2);
//!
//! // Plain alternatives
//! let expr = parse_search_expression("statefulset | configmap | deployment");
//! assert_eq!(expr.groups.len(), 3);
//! ```
//!
//! Parsing cannot fail. An empty term (`"git &"`, `""`) trims to the empty string,
//! which every line contains, so it narrows nothing.

use super::ast::{OrGroup, SearchExpr};

const OR: char = '|';
const AND: char = '&';

fn parse_group(group: &str) -> OrGroup {
    OrGroup::new(group.split(AND).map(|term| term.trim().to_string()).collect())
}

/// Parse a search string into a [`SearchExpr`]
pub fn parse_search_expression(input: &str) -> SearchExpr {
    let mut expr = SearchExpr::new();

    if input.contains(OR) {
        for group in input.split(OR) {
            expr.add_group(parse_group(group));
        }
    } else {
        expr.add_group(parse_group(input));
    }

    expr
}

impl SearchExpr {
    pub fn parse(input: &str) -> Self {
        parse_search_expression(input)
    }
}

impl From<&str> for SearchExpr {
    fn from(input: &str) -> Self {
        parse_search_expression(input)
    }
}
