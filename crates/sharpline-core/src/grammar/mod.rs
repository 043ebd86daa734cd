//! Grammar data model: rule expressions, the named rule registry, and its JSON form.

mod json;
mod registry;
mod types;


pub use registry::{Grammar, GrammarBuilder, GrammarError, RuleId};
pub use types::{Rule, Suffix};
