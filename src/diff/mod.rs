pub mod operations;
pub mod search_replace;

pub use operations::{change_counts, unified_diff};
pub use search_replace::{apply_in_order, Substitution, SubstitutionResult};
