// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{QueryCriteria, Restaurant};
pub use requests::RecommendParams;
pub use responses::{ErrorResponse, HealthResponse, Recommendation};
