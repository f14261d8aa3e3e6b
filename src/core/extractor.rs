use crate::models::QueryCriteria;
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

// e.g. "open at 6pm", "open at 6:30 pm"
static OPEN_AT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"open at (\d{1,2})(?::(\d{2}))?\s*(am|pm)").expect("open-at pattern is valid")
});

/// Extract filter criteria from a free-form query
///
/// Pure keyword and pattern matching, case-insensitive throughout.
/// Extraction never fails: anything the query does not mention is left
/// unconstrained, and an empty query yields an all-unconstrained
/// criteria object.
///
/// An explicit "open at" time is anchored to today's calendar date, a
/// quirk kept for compatibility with the existing audit trail.
pub fn extract_criteria(query: &str, known_styles: &[String]) -> QueryCriteria {
    extract_criteria_on(query, known_styles, Local::now().date_naive())
}

/// Extract filter criteria, anchoring any "open at" time to `today`
pub fn extract_criteria_on(query: &str, known_styles: &[String], today: NaiveDate) -> QueryCriteria {
    let lowered = query.to_lowercase();
    let mut criteria = QueryCriteria::default();

    // First vocabulary entry found as a substring wins, in the order the
    // vocabulary was supplied. No attempt to find a longer match.
    for style in known_styles {
        if lowered.contains(&style.to_lowercase()) {
            criteria.style = style.clone();
            break;
        }
    }

    if lowered.contains("vegetarian") {
        criteria.vegetarian = Some(true);
    }

    // "deliver" also covers "delivery", "delivers", "delivering".
    if lowered.contains("deliver") {
        criteria.delivers = Some(true);
    }

    if lowered.contains("open now") {
        criteria.open_now = true;
    }

    if let Some(caps) = OPEN_AT_RE.captures(&lowered) {
        let hour: u32 = caps[1].parse().unwrap_or(0);
        let minute: u32 = caps
            .get(2)
            .map_or(0, |m| m.as_str().parse().unwrap_or(0));
        let hour = match (&caps[3], hour) {
            ("pm", 12) => 12,
            ("pm", h) => h + 12,
            ("am", 12) => 0,
            (_, h) => h,
        };
        // Out-of-range hours (e.g. "13pm") yield None and the time
        // criterion stays unconstrained.
        criteria.open_at = today.and_hms_opt(hour, minute, 0);
    }

    criteria
}
