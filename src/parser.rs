use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::models::RawItem;

static BLOCK_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<div class='item\s+clearfix").unwrap());

// Applied to a single block, so lazy gaps cannot run into the next listing.
static ITEM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)^<div class='item\s+clearfix\s*(mega_item)?'>",
        r"(?:.*?title='([^']*)'.*?class='brand'/)?",
        r".*?<a href='(/[^']+)'[^>]*>([^<]+)</a>",
        r".*?<span class='item_details'>&nbsp;(.*?)</div>",
        r".*?itemprop='name' content='([^']*)'",
        r".*?itemprop='releaseDate' content='([^']*)'",
    ))
    .unwrap()
});

/// Extract every well-formed listing block in document order. Malformed
/// blocks are skipped without error.
pub fn parse_items(html: &str) -> Vec<RawItem> {
    let mut items = Vec::new();
    for block in split_blocks(html) {
        match ITEM_RE.captures(block) {
            Some(caps) => items.push(raw_item(&caps)),
            None => debug!("skipping malformed item block ({} bytes)", block.len()),
        }
    }
    items
}

fn split_blocks(html: &str) -> Vec<&str> {
    let starts: Vec<usize> = BLOCK_START_RE.find_iter(html).map(|m| m.start()).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            &html[start..end]
        })
        .collect()
}

fn raw_item(caps: &Captures) -> RawItem {
    let text = |i: usize| caps.get(i).map(|m| m.as_str().to_string()).unwrap_or_default();
    RawItem {
        is_mega: caps.get(1).is_some(),
        platform: caps.get(2).map(|m| m.as_str().to_string()),
        path: text(3),
        label: text(4),
        details: text(5),
        product_name: text(6),
        release_date: text(7),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn item_html(
        mega: bool,
        platform: Option<&str>,
        path: &str,
        label: &str,
        details: &str,
        name: &str,
        date: &str,
    ) -> String {
        let class = if mega { "item clearfix mega_item" } else { "item clearfix" };
        let brand = platform
            .map(|p| format!("<img title='{}' class='brand'/>", p))
            .unwrap_or_default();
        format!(
            "<div class='{class}'>{brand}\n\
             <a href='{path}' rel='bookmark'>{label}</a>\n\
             <span class='item_details'>&nbsp;{details}</span></div>\n\
             <meta itemprop='name' content='{name}'/>\n\
             <meta itemprop='releaseDate' content='{date}'/>\n"
        )
    }

    #[test]
    fn test_parse_single_mega_item() {
        let html = item_html(
            true,
            Some("JVZoo"),
            "/jane-doe-ai-content-bot/",
            "Jane Doe: AI Content Bot",
            "$47 at 60%",
            "AI Content Bot",
            "2026-06-01",
        );
        let items = parse_items(&html);
        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert!(item.is_mega);
        assert_eq!(item.platform.as_deref(), Some("JVZoo"));
        assert_eq!(item.path, "/jane-doe-ai-content-bot/");
        assert_eq!(item.label, "Jane Doe: AI Content Bot");
        assert_eq!(item.details, "$47 at 60%</span>");
        assert_eq!(item.product_name, "AI Content Bot");
        assert_eq!(item.release_date, "2026-06-01");
    }

    #[test]
    fn test_platform_absent_does_not_borrow_from_next_item() {
        let mut html = String::from("<html><body>");
        html.push_str(&item_html(false, None, "/a/", "A: First", "$10", "First", "2026-06-02"));
        html.push_str(&item_html(false, Some("WarriorPlus"), "/b/", "B: Second", "$20", "Second", "2026-06-03"));
        html.push_str("</body></html>");

        let items = parse_items(&html);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].platform, None);
        assert_eq!(items[0].product_name, "First");
        assert!(!items[0].is_mega);
        assert_eq!(items[1].platform.as_deref(), Some("WarriorPlus"));
        assert_eq!(items[1].product_name, "Second");
    }

    #[test]
    fn test_malformed_block_is_skipped() {
        let mut html = String::new();
        html.push_str("<div class='item clearfix'><a href='/broken/'>Broken</a></div>\n");
        html.push_str(&item_html(false, None, "/ok/", "Ok: Fine", "$5", "Fine", "2026-07-01"));
        let items = parse_items(&html);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, "/ok/");
    }

    #[test]
    fn test_empty_text_yields_no_items() {
        assert!(parse_items("").is_empty());
        assert!(parse_items("<html>no listings</html>").is_empty());
    }
}
