use crate::core::filters::matches_criteria;
use crate::models::{QueryCriteria, Restaurant};
use chrono::NaiveDateTime;

/// Result of one recommendation pass over the catalog
#[derive(Debug)]
pub struct RecommendOutcome {
    pub recommendation: Option<Restaurant>,
    pub total_candidates: usize,
}

/// First-fit recommender
///
/// Walks the catalog snapshot in order and returns the first record that
/// satisfies every specified criterion. There is no ranking: catalog
/// order is an observable part of the contract. Stateless and safe to
/// share across in-flight requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recommender;

impl Recommender {
    pub fn new() -> Self {
        Self
    }

    /// Find the first catalog entry matching `criteria`
    ///
    /// `now` is the request's wall-clock time, used only when the query
    /// asked for "open now" without an explicit time.
    pub fn recommend(
        &self,
        criteria: &QueryCriteria,
        catalog: Vec<Restaurant>,
        now: NaiveDateTime,
    ) -> RecommendOutcome {
        let total_candidates = catalog.len();
        let recommendation = catalog
            .into_iter()
            .find(|restaurant| matches_criteria(restaurant, criteria, now));

        RecommendOutcome {
            recommendation,
            total_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn restaurant(name: &str, style: &str, vegetarian: bool) -> Restaurant {
        Restaurant {
            name: name.to_string(),
            style: style.to_string(),
            address: format!("1 {} Way", name),
            open_hour: "09:00".to_string(),
            close_hour: "23:00".to_string(),
            vegetarian,
            deliveries: true,
        }
    }

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_first_match_wins_in_catalog_order() {
        let recommender = Recommender::new();
        let catalog = vec![
            restaurant("First Italian", "Italian", false),
            restaurant("Second Italian", "Italian", true),
        ];
        let criteria = QueryCriteria {
            style: "Italian".to_string(),
            ..Default::default()
        };

        let outcome = recommender.recommend(&criteria, catalog, noon());
        assert_eq!(outcome.recommendation.unwrap().name, "First Italian");
        assert_eq!(outcome.total_candidates, 2);
    }

    #[test]
    fn test_later_entry_found_when_earlier_fails() {
        let recommender = Recommender::new();
        let catalog = vec![
            restaurant("Trattoria", "Italian", false),
            restaurant("Green Fork", "Italian", true),
        ];
        let criteria = QueryCriteria {
            vegetarian: Some(true),
            ..Default::default()
        };

        let outcome = recommender.recommend(&criteria, catalog, noon());
        assert_eq!(outcome.recommendation.unwrap().name, "Green Fork");
    }

    #[test]
    fn test_no_match() {
        let recommender = Recommender::new();
        let catalog = vec![restaurant("Trattoria", "Italian", false)];
        let criteria = QueryCriteria {
            style: "Mexican".to_string(),
            ..Default::default()
        };

        let outcome = recommender.recommend(&criteria, catalog, noon());
        assert!(outcome.recommendation.is_none());
        assert_eq!(outcome.total_candidates, 1);
    }

    #[test]
    fn test_empty_catalog() {
        let recommender = Recommender::new();
        let outcome = recommender.recommend(&QueryCriteria::default(), vec![], noon());
        assert!(outcome.recommendation.is_none());
        assert_eq!(outcome.total_candidates, 0);
    }
}
