// Core query engine exports
pub mod extractor;
pub mod filters;
pub mod hours;
pub mod matcher;

pub use extractor::{extract_criteria, extract_criteria_on};
pub use filters::matches_criteria;
pub use hours::{is_open_at, parse_wall_clock};
pub use matcher::{RecommendOutcome, Recommender};
