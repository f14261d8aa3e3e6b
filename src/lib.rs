//! DineFind - Natural-language restaurant recommendation service
//!
//! This library provides the core query engine behind DineFind: it turns
//! free-form requests like "vegetarian italian place open now" into
//! structured criteria and evaluates them against a restaurant catalog,
//! returning the first match in catalog order.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    extract_criteria, extract_criteria_on, is_open_at, matches_criteria, Recommender,
};
pub use crate::models::{QueryCriteria, Recommendation, Restaurant};
