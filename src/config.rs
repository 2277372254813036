//! Embedded run parameters. Nothing here is read from the environment.

use std::time::Duration;

pub const SOURCE_URL: &str = "https://muncheye.com/";
/// Prefix for the relative detail-page paths found in listings.
pub const SOURCE_ORIGIN: &str = "https://muncheye.com";

pub const USER_AGENT: &str = "Mozilla/5.0";
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const TOTAL_TIMEOUT: Duration = Duration::from_secs(15);
pub const MAX_REDIRECTS: usize = 10;

pub const WINDOW_DAYS: i64 = 14;

pub const REPORT_PATH: &str = "/root/.openclaw/workspace/muncheye-launches.json";
pub const RENDER_DATA_PATH: &str = "/root/.openclaw/workspace/affiliate-autopilot/launches_data.json";

pub const DEFAULT_PLATFORM: &str = "Unknown";
pub const DEFAULT_PRICE: f64 = 0.0;
pub const DEFAULT_COMMISSION: u32 = 50;

pub const MIN_SCORE: u8 = 3;
pub const MAX_SCORE: u8 = 10;
pub const TOP_N: usize = 50;

pub const TARGET_NICHES: &[&str] = &[
    "AI Tools",
    "SaaS",
    "Digital Marketing",
    "Content Creation",
    "Automation",
];
pub const FALLBACK_NICHE: &str = "General IM";

// Gate only; the classifier and scorer use the narrower sets below.
pub const TARGET_KEYWORDS: &[&str] = &[
    "ai", "artificial intelligence", "saas", "builder", "automation", "automate",
    "content", "video", "creator", "marketing", "email", "funnel", "seo",
    "social", "traffic", "ads", "agency", "bot", "chatbot", "voice",
    "copy", "writer", "blog", "site", "web", "app", "software",
    "digital", "prompt", "gpt", "clone", "reel", "influencer",
    "ebook", "book", "publish", "image", "design", "graphic",
    "store", "ecom", "market", "lead", "inbox", "mail",
];

pub const AI_KEYWORDS: &[&str] = &[
    "ai", "artificial intelligence", "gpt", "prompt", "chatbot", "bot", "clone", "automation",
];
pub const SAAS_KEYWORDS: &[&str] = &["saas", "builder", "software", "app", "platform", "suite", "tool"];
pub const MARKETING_KEYWORDS: &[&str] = &[
    "marketing", "funnel", "email", "seo", "traffic", "ads", "lead", "agency",
];
pub const CONTENT_KEYWORDS: &[&str] = &[
    "content", "video", "reel", "blog", "ebook", "book", "voice", "image", "design", "creator",
];
pub const AUTOMATION_KEYWORDS: &[&str] = &["automation", "automate"];

pub const PREMIUM_VENDORS: &[&str] = &[
    "abhi dwivedi",
    "karthik ramani",
    "ben murray",
    "joshua zamora",
    "ifiok nkem",
    "glynn kosky",
    "matt garrett",
];
