pub mod apply;
pub mod ast;
pub mod parser;

pub use apply::matches;
pub use ast::{OrGroup, SearchExpr};
pub use parser::parse_search_expression;
