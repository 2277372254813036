use chrono::NaiveDate;
use tracing::{debug, info};

use crate::models::Launch;
use crate::normalizer::normalize;
use crate::parser::parse_items;
use crate::ranking::{in_window, is_on_target, is_relevant, launch_window, rank, top};
use crate::scoring::{classify, score};

/// Stage counts plus the ranked survivors of one run.
#[derive(Debug)]
pub struct Outcome {
    pub total_found: usize,
    pub filtered: Vec<Launch>,
    pub top_n: usize,
}

impl Outcome {
    pub fn top_launches(&self) -> &[Launch] {
        &self.filtered[..self.top_n]
    }
}

/// Parse, normalize, score and rank the fetched listing text.
pub fn process(html: &str, today: NaiveDate) -> Outcome {
    let raw = parse_items(html);
    debug!("extracted {} item blocks", raw.len());

    let launches = normalize(raw);
    let total_found = launches.len();

    let window = launch_window(today);
    let upcoming = launches.iter().filter(|l| in_window(l, window)).count();
    info!(
        "{} launches parsed, {} dated {} to {}",
        total_found, upcoming, window.0, window.1
    );

    let mut filtered: Vec<Launch> = launches
        .into_iter()
        .filter(is_on_target)
        .map(|mut l| {
            l.niche_categories = classify(&l);
            l.score = score(&l);
            l
        })
        .filter(is_relevant)
        .collect();
    rank(&mut filtered);

    let top_n = top(&filtered).len();
    info!("{} relevant, keeping top {}", filtered.len(), top_n);

    Outcome { total_found, filtered, top_n }
}
