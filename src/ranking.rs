use chrono::{Duration, NaiveDate};

use crate::config::{MIN_SCORE, TARGET_KEYWORDS, TOP_N, WINDOW_DAYS};
use crate::models::Launch;
use crate::scoring::combined_text;

/// Broad keyword gate over `product_name vendor`.
pub fn is_on_target(launch: &Launch) -> bool {
    let text = combined_text(launch);
    TARGET_KEYWORDS.iter().any(|k| text.contains(k))
}

pub fn is_relevant(launch: &Launch) -> bool {
    launch.score >= MIN_SCORE
}

/// Score descending, then ISO date ascending as plain strings. Stable, so
/// full ties keep document order.
pub fn rank(launches: &mut [Launch]) {
    launches.sort_by(|a, b| {
        b.score
            .cmp(&a.score)
            .then_with(|| a.launch_date.cmp(&b.launch_date))
    });
}

pub fn top(ranked: &[Launch]) -> &[Launch] {
    &ranked[..ranked.len().min(TOP_N)]
}

/// Upcoming-launch window starting at `today`. Reported only; ranking
/// ignores it.
pub fn launch_window(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today, today + Duration::days(WINDOW_DAYS))
}

pub fn in_window(launch: &Launch, window: (NaiveDate, NaiveDate)) -> bool {
    NaiveDate::parse_from_str(&launch.launch_date, "%Y-%m-%d")
        .map(|d| d >= window.0 && d <= window.1)
        .unwrap_or(false)
}
