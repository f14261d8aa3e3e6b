use crate::core::hours::is_open_at;
use crate::models::{QueryCriteria, Restaurant};
use chrono::NaiveDateTime;

/// Check a restaurant against every specified criterion
///
/// Strict conjunction with short-circuiting; unspecified criteria pass
/// vacuously, so an all-default criteria object matches everything.
/// `now` is only consulted when the query asked for "open now" without
/// an explicit time.
#[inline]
pub fn matches_criteria(
    restaurant: &Restaurant,
    criteria: &QueryCriteria,
    now: NaiveDateTime,
) -> bool {
    // Exact style equality after lowercasing, not a substring test.
    if !criteria.style.is_empty()
        && restaurant.style.to_lowercase() != criteria.style.to_lowercase()
    {
        return false;
    }

    if criteria
        .vegetarian
        .is_some_and(|wanted| restaurant.vegetarian != wanted)
    {
        return false;
    }

    if criteria
        .delivers
        .is_some_and(|wanted| restaurant.deliveries != wanted)
    {
        return false;
    }

    // An explicit "open at" time takes precedence over "open now".
    let check_time = criteria.open_at.or_else(|| criteria.open_now.then_some(now));
    if let Some(at) = check_time {
        if !is_open_at(&restaurant.open_hour, &restaurant.close_hour, at.time()) {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pizza_place() -> Restaurant {
        Restaurant {
            name: "Pizza Hut".to_string(),
            style: "Italian".to_string(),
            address: "Wherever Street 99, Somewhere".to_string(),
            open_hour: "09:00".to_string(),
            close_hour: "23:00".to_string(),
            vegetarian: true,
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
    fn test_unconstrained_criteria_match_everything() {
        let criteria = QueryCriteria::default();
        assert!(matches_criteria(&pizza_place(), &criteria, noon()));
    }

    #[test]
    fn test_style_is_exact_not_substring() {
        let mut fusion = pizza_place();
        fusion.style = "Italian-American".to_string();

        let criteria = QueryCriteria {
            style: "Italian".to_string(),
            ..Default::default()
        };

        assert!(matches_criteria(&pizza_place(), &criteria, noon()));
        assert!(!matches_criteria(&fusion, &criteria, noon()));
    }

    #[test]
    fn test_style_comparison_ignores_case() {
        let criteria = QueryCriteria {
            style: "iTaLiAn".to_string(),
            ..Default::default()
        };
        assert!(matches_criteria(&pizza_place(), &criteria, noon()));
    }

    #[test]
    fn test_vegetarian_requirement() {
        let criteria = QueryCriteria {
            vegetarian: Some(true),
            ..Default::default()
        };

        let mut not_veg = pizza_place();
        not_veg.vegetarian = false;

        assert!(matches_criteria(&pizza_place(), &criteria, noon()));
        assert!(!matches_criteria(&not_veg, &criteria, noon()));
    }

    #[test]
    fn test_delivery_requirement() {
        let criteria = QueryCriteria {
            delivers: Some(true),
            ..Default::default()
        };

        let mut no_delivery = pizza_place();
        no_delivery.deliveries = false;

        assert!(!matches_criteria(&no_delivery, &criteria, noon()));
    }

    #[test]
    fn test_open_now_uses_request_time() {
        let criteria = QueryCriteria {
            open_now: true,
            ..Default::default()
        };

        assert!(matches_criteria(&pizza_place(), &criteria, noon()));

        let late = NaiveDate::from_ymd_opt(2025, 3, 2)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        assert!(!matches_criteria(&pizza_place(), &criteria, late));
    }

    #[test]
    fn test_open_at_overrides_open_now() {
        // "now" is during opening hours, but the explicit time is not.
        let late = NaiveDate::from_ymd_opt(2025, 3, 2)
            .unwrap()
            .and_hms_opt(23, 30, 0)
            .unwrap();
        let criteria = QueryCriteria {
            open_now: true,
            open_at: Some(late),
            ..Default::default()
        };
        assert!(!matches_criteria(&pizza_place(), &criteria, noon()));
    }

    #[test]
    fn test_malformed_hours_fail_time_check_only() {
        let mut broken = pizza_place();
        broken.open_hour = String::new();

        // No time criterion: the record still matches.
        assert!(matches_criteria(&broken, &QueryCriteria::default(), noon()));

        // With a time criterion the record reports closed.
        let criteria = QueryCriteria {
            open_now: true,
            ..Default::default()
        };
        assert!(!matches_criteria(&broken, &criteria, noon()));
    }
}
