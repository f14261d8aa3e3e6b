use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendParams {
    #[validate(length(min = 1))]
    pub query: String,
}
