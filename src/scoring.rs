//! Niche tagging and the 0-10 relevance heuristic.

use crate::config::{
    AI_KEYWORDS, AUTOMATION_KEYWORDS, CONTENT_KEYWORDS, FALLBACK_NICHE, MARKETING_KEYWORDS,
    MAX_SCORE, PREMIUM_VENDORS, SAAS_KEYWORDS, TARGET_NICHES,
};
use crate::models::Launch;

const NICHE_CAP: f64 = 5.0;

/// Lowercased `product_name vendor`, the text both the gate and the scorer see.
pub fn combined_text(launch: &Launch) -> String {
    format!("{} {}", launch.product_name, launch.vendor).to_lowercase()
}

fn hits(text: &str, keywords: &[&str]) -> usize {
    keywords.iter().filter(|k| text.contains(*k)).count()
}

fn any_hit(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Tags from the product name only, in fixed order; never empty.
pub fn classify(launch: &Launch) -> Vec<String> {
    let name = launch.product_name.to_lowercase();
    let sets = [
        AI_KEYWORDS,
        SAAS_KEYWORDS,
        MARKETING_KEYWORDS,
        CONTENT_KEYWORDS,
        AUTOMATION_KEYWORDS,
    ];
    let niches: Vec<String> = TARGET_NICHES
        .iter()
        .zip(sets)
        .filter(|(_, set)| any_hit(&name, set))
        .map(|(niche, _)| niche.to_string())
        .collect();

    if niches.is_empty() {
        vec![FALLBACK_NICHE.to_string()]
    } else {
        niches
    }
}

pub fn score(launch: &Launch) -> u8 {
    let text = combined_text(launch);

    let niche = (hits(&text, AI_KEYWORDS) as f64 * 2.0
        + hits(&text, SAAS_KEYWORDS) as f64 * 1.5
        + hits(&text, MARKETING_KEYWORDS) as f64 * 1.5
        + hits(&text, CONTENT_KEYWORDS) as f64)
        .min(NICHE_CAP);

    let vendor = launch.vendor.to_lowercase();
    let vendor_quality = if any_hit(&vendor, PREMIUM_VENDORS) || launch.is_mega_launch {
        2.0
    } else if launch.price >= 37.0 {
        1.0
    } else {
        0.0
    };

    let commission = if launch.commission_percent >= 50 { 1.0 } else { 0.0 };

    let price_point = if launch.price >= 47.0 {
        1.0
    } else if launch.price >= 27.0 {
        0.5
    } else {
        0.0
    };

    // Half-way totals round to even, so 3.5 -> 4 but 2.5 -> 2.
    let total = (niche + vendor_quality + commission + price_point).round_ties_even();
    (total as u8).min(MAX_SCORE)
}
