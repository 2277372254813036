use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{DEFAULT_COMMISSION, DEFAULT_PLATFORM, DEFAULT_PRICE, SOURCE_ORIGIN};
use crate::models::{Launch, RawItem};

static PRICE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$?([\d.]+)").unwrap());
static COMMISSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"at\s+([0-9]+)%").unwrap());

/// Decode and dedupe raw items. The first `(product_name, launch_date)` wins.
/// Classification and scoring are left at their empty defaults.
pub fn normalize(items: Vec<RawItem>) -> Vec<Launch> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut launches = Vec::with_capacity(items.len());

    for item in items {
        let launch = normalize_item(item);
        if launch.product_name.is_empty() {
            debug!("dropping listing at {} with empty product name", launch.jv_page_url);
            continue;
        }
        let key = (launch.product_name.clone(), launch.launch_date.clone());
        if !seen.insert(key) {
            debug!("dropping duplicate {} ({})", launch.product_name, launch.launch_date);
            continue;
        }
        launches.push(launch);
    }
    launches
}

fn normalize_item(item: RawItem) -> Launch {
    let label = decode(&item.label);
    let details = decode(&item.details).trim().to_string();
    let (commission_percent, commission_inferred) = match parse_commission(&details) {
        Some(pct) => (pct, false),
        None => (DEFAULT_COMMISSION, true),
    };

    Launch {
        product_name: decode(&item.product_name).trim().to_string(),
        vendor: vendor_of(&label),
        launch_date: decode(&item.release_date),
        jv_page_url: format!("{}{}", SOURCE_ORIGIN, item.path),
        platform: item
            .platform
            .map(|p| decode(&p))
            .unwrap_or_else(|| DEFAULT_PLATFORM.to_string()),
        price: parse_price(&details).unwrap_or(DEFAULT_PRICE),
        commission_percent,
        commission_inferred,
        is_mega_launch: item.is_mega,
        price_commission_raw: details,
        niche_categories: Vec::new(),
        score: 0,
    }
}

// Full HTML5 character references, including legacy forms without `;`.
fn decode(s: &str) -> String {
    htmlize::unescape(s).into_owned()
}

/// Text before the first `:`, or the whole label when there is none.
pub fn vendor_of(label: &str) -> String {
    label.split(':').next().unwrap_or(label).trim().to_string()
}

/// First `$`-optional number in the text. A match that is not a valid
/// number (e.g. a lone `.`) counts as unparsable.
pub fn parse_price(text: &str) -> Option<f64> {
    PRICE_RE.captures(text)?.get(1)?.as_str().parse().ok()
}

/// `at N%` commission. Digit runs too large for `u32` saturate.
pub fn parse_commission(text: &str) -> Option<u32> {
    let digits = COMMISSION_RE.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u32::MAX))
}
