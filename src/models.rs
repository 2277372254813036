use serde::{Deserialize, Serialize};

/// One item block as captured from the listing markup, before any decoding.
#[derive(Debug, Clone, PartialEq)]
pub struct RawItem {
    pub is_mega: bool,
    pub platform: Option<String>,
    pub path: String,
    pub label: String,
    pub details: String,
    pub product_name: String,
    pub release_date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Launch {
    pub product_name: String,
    pub vendor: String,
    pub launch_date: String,
    pub jv_page_url: String,
    pub platform: String,
    pub price: f64,
    pub commission_percent: u32,
    /// Set when the details text had no commission and the default was used.
    pub commission_inferred: bool,
    pub is_mega_launch: bool,
    pub price_commission_raw: String,
    pub niche_categories: Vec<String>,
    pub score: u8,
}

/// Output shape consumed by the rendering step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub product_name: String,
    pub vendor: String,
    pub launch_date: String,
    pub jv_page_url: String,
    pub platform: String,
    pub niche_categories: Vec<String>,
    pub price_usd: f64,
    pub commission_percent: u32,
    pub is_mega_launch: bool,
    pub score: u8,
}

impl From<&Launch> for LaunchRecord {
    fn from(l: &Launch) -> Self {
        LaunchRecord {
            product_name: l.product_name.clone(),
            vendor: l.vendor.clone(),
            launch_date: l.launch_date.clone(),
            jv_page_url: l.jv_page_url.clone(),
            platform: l.platform.clone(),
            niche_categories: l.niche_categories.clone(),
            price_usd: l.price,
            commission_percent: l.commission_percent,
            is_mega_launch: l.is_mega_launch,
            score: l.score,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    #[serde(flatten)]
    pub record: LaunchRecord,
    pub price_commission_raw: String,
    pub commission_inferred: bool,
}

impl From<&Launch> for ReportEntry {
    fn from(l: &Launch) -> Self {
        ReportEntry {
            record: LaunchRecord::from(l),
            price_commission_raw: l.price_commission_raw.clone(),
            commission_inferred: l.commission_inferred,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub scraped_at: String,
    pub source: String,
    pub total_launches_found: usize,
    pub filtered_relevant: usize,
    pub top_launches: usize,
    pub target_niches: Vec<String>,
    pub launches: Vec<ReportEntry>,
}
