//! Tool directory search, filtering and highlighting

use std::fmt;

use crate::models::Tool;

/// Keywords beyond this count are ignored
pub const MAX_KEYWORDS: usize = 5;
/// Size of the featured strip
pub const FEATURED_LIMIT: usize = 6;
/// Number of category chips shown above the grid
pub const CHIP_LIMIT: usize = 10;

/// Whitespace-separated keywords of a search query, at most [`MAX_KEYWORDS`]
pub fn split_keywords(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .take(MAX_KEYWORDS)
        .map(str::to_owned)
        .collect()
}

/// Search text and category filter applied to the tool grid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolQuery {
    search: String,
    filter: Option<String>,
}

impl ToolQuery {
    pub fn new(search: &str) -> Self {
        Self {
            search: search.trim().to_owned(),
            filter: None,
        }
    }

    /// Restrict results to one category; an empty name clears the filter
    pub fn with_filter(mut self, category: &str) -> Self {
        let category = category.trim();
        self.filter = (!category.is_empty()).then(|| category.to_owned());
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        !self.search.is_empty()
    }

    /// Keyword and category check for a single tool
    pub fn matches(&self, tool: &Tool) -> bool {
        self.matches_keywords(tool) && self.matches_filter(tool)
    }

    fn matches_keywords(&self, tool: &Tool) -> bool {
        if !self.is_searching() {
            return true;
        }
        let haystack = format!("{} {} {}", tool.name, tool.description, tool.tags.join(" "))
            .to_lowercase();
        split_keywords(&self.search)
            .iter()
            .all(|k| haystack.contains(&k.to_lowercase()))
    }

    fn matches_filter(&self, tool: &Tool) -> bool {
        let Some(filter) = &self.filter else {
            return true;
        };
        match &tool.category {
            Some(category) => category == filter,
            None => tool.tags.iter().any(|t| t == filter),
        }
    }

    /// Matching tools, heaviest first; ties keep their original order
    pub fn apply<'a>(&self, tools: &'a [Tool]) -> Vec<&'a Tool> {
        let mut list: Vec<&Tool> = tools.iter().filter(|t| self.matches(t)).collect();
        list.sort_by(|a, b| {
            b.weight
                .unwrap_or(0.0)
                .total_cmp(&a.weight.unwrap_or(0.0))
        });
        if self.is_searching() {
            tracing::info!(
                event = "search_used",
                search = %self.search,
                filter = self.filter().unwrap_or("all"),
                shown = list.len(),
                "tool search"
            );
            if list.is_empty() {
                tracing::info!(event = "search_empty", search = %self.search, "tool search empty");
            }
        }
        list
    }

    /// Count line for the grid header
    pub fn summary(&self, shown: usize, total: usize) -> ToolCount {
        if self.is_searching() {
            ToolCount::Matched { shown, total }
        } else {
            ToolCount::Total(total)
        }
    }

    /// Notice shown when [`ToolQuery::apply`] returns nothing
    pub fn empty_result_notice(&self) -> String {
        if self.is_searching() {
            format!(
                "Tools: nothing found for \"{}\". Try shorter keywords or check the spelling.",
                self.search
            )
        } else {
            "Tools: no matching tools. Check the tool data.".to_owned()
        }
    }
}

/// Result count shown above the tool grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCount {
    Matched { shown: usize, total: usize },
    Total(usize),
}

impl fmt::Display for ToolCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolCount::Matched { shown, total } => write!(f, "matched {shown}/{total}"),
            ToolCount::Total(total) => write!(f, "{total} tools"),
        }
    }
}

/// First [`FEATURED_LIMIT`] tools flagged as featured
pub fn featured(tools: &[Tool]) -> Vec<&Tool> {
    tools.iter().filter(|t| t.featured).take(FEATURED_LIMIT).collect()
}

/// Distinct tags and categories in first-seen order, at most [`CHIP_LIMIT`]
pub fn category_chips(tools: &[Tool]) -> Vec<String> {
    let mut chips: Vec<String> = Vec::new();
    for tool in tools {
        for name in tool.tags.iter().chain(tool.category.iter()) {
            if !chips.contains(name) {
                chips.push(name.clone());
            }
        }
    }
    chips.truncate(CHIP_LIMIT);
    chips
}

/// Escape text for HTML or SVG element content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Number of text chars matched by `keyword` starting at `start`, comparing
/// lower-cased
fn match_at(chars: &[char], start: usize, keyword: &[char]) -> Option<usize> {
    let mut k = 0;
    let mut i = start;
    while k < keyword.len() {
        let c = *chars.get(i)?;
        for lower in c.to_lowercase() {
            if keyword.get(k) != Some(&lower) {
                return None;
            }
            k += 1;
        }
        i += 1;
    }
    Some(i - start)
}

/// HTML-escaped `text` with every case-insensitive keyword match of `query`
/// wrapped in `<mark class="hl">`.
///
/// Matching runs on the raw text, so markup characters in the query never
/// match inside an entity. The longest keyword wins at each position.
pub fn highlight(text: &str, query: &str) -> String {
    let mut keywords: Vec<Vec<char>> = split_keywords(query)
        .iter()
        .map(|k| k.to_lowercase().chars().collect())
        .collect();
    if keywords.is_empty() {
        return escape_html(text);
    }
    keywords.sort_by_key(|k| std::cmp::Reverse(k.len()));

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut plain = String::new();
    let mut i = 0;
    while i < chars.len() {
        let hit = keywords.iter().find_map(|k| match_at(&chars, i, k));
        match hit {
            Some(len) => {
                out.push_str(&escape_html(&plain));
                plain.clear();
                let matched: String = chars[i..i + len].iter().collect();
                out.push_str("<mark class=\"hl\">");
                out.push_str(&escape_html(&matched));
                out.push_str("</mark>");
                i += len;
            }
            None => {
                plain.push(chars[i]);
                i += 1;
            }
        }
    }
    out.push_str(&escape_html(&plain));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(name: &str, tags: &[&str], category: Option<&str>, weight: Option<f64>) -> Tool {
        Tool {
            name: name.to_owned(),
            description: format!("{name} docs"),
            url: format!("https://example.com/{name}"),
            icon: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            category: category.map(str::to_owned),
            featured: false,
            weight,
        }
    }

    #[test]
    fn test_split_keywords() {
        assert_eq!(split_keywords("  rust   qr "), vec!["rust", "qr"]);
        assert_eq!(split_keywords("a b c d e f g").len(), MAX_KEYWORDS);
        assert!(split_keywords("   ").is_empty());
    }

    #[test]
    fn test_keywords_must_all_match() {
        let tools = [
            tool("Ripgrep", &["search", "cli"], None, None),
            tool("Figma", &["design"], None, None),
        ];
        let query = ToolQuery::new("RIP cli");
        let found = query.apply(&tools);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Ripgrep");
        assert!(ToolQuery::new("rip design").apply(&tools).is_empty());
        // Descriptions take part in matching
        assert_eq!(ToolQuery::new("figma docs").apply(&tools).len(), 1);
    }

    #[test]
    fn test_category_takes_precedence_over_tags() {
        let tools = [
            tool("A", &["dev"], Some("design"), None),
            tool("B", &["dev"], None, None),
        ];
        let dev: Vec<&str> = ToolQuery::default()
            .with_filter("dev")
            .apply(&tools)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(dev, ["B"]);
        assert_eq!(ToolQuery::default().with_filter("").apply(&tools).len(), 2);
    }

    #[test]
    fn test_weight_order_is_stable() {
        let tools = [
            tool("low", &[], None, Some(1.0)),
            tool("none", &[], None, None),
            tool("high", &[], None, Some(5.0)),
            tool("low2", &[], None, Some(1.0)),
        ];
        let names: Vec<&str> = ToolQuery::default()
            .apply(&tools)
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, ["high", "low", "low2", "none"]);
    }

    #[test]
    fn test_summary_and_notice() {
        assert_eq!(ToolQuery::new("x").summary(2, 9).to_string(), "matched 2/9");
        assert_eq!(ToolQuery::default().summary(9, 9).to_string(), "9 tools");
        assert!(ToolQuery::new("zzz").empty_result_notice().contains("\"zzz\""));
    }

    #[test]
    fn test_featured_and_chips() {
        let mut tools: Vec<Tool> = (0..8)
            .map(|i| tool(&format!("t{i}"), &["x", "y"], Some("cat"), None))
            .collect();
        for t in &mut tools {
            t.featured = true;
        }
        tools[0].featured = false;
        let names: Vec<&str> = featured(&tools).iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["t1", "t2", "t3", "t4", "t5", "t6"]);
        assert_eq!(category_chips(&tools), ["x", "y", "cat"]);

        let many: Vec<Tool> = (0..12)
            .map(|i| {
                let tag = format!("tag{i}");
                tool("t", &[tag.as_str()], None, None)
            })
            .collect();
        let chips = category_chips(&many);
        assert_eq!(chips.len(), CHIP_LIMIT);
        assert_eq!(chips[0], "tag0");
    }

    #[test]
    fn test_highlight() {
        assert_eq!(
            highlight("Rust QR tool", "qr rust"),
            "<mark class=\"hl\">Rust</mark> <mark class=\"hl\">QR</mark> tool"
        );
        assert_eq!(highlight("a < b", ""), "a &lt; b");
        assert_eq!(
            highlight("<b>bold</b>", "b"),
            "&lt;<mark class=\"hl\">b</mark>&gt;<mark class=\"hl\">b</mark>old&lt;/<mark class=\"hl\">b</mark>&gt;"
        );
        // Query characters never match inside an escaped entity
        assert_eq!(highlight("a&b", "amp"), "a&amp;b");
    }

    #[test]
    fn test_highlight_prefers_longest_keyword() {
        assert_eq!(
            highlight("notebook", "note notebook"),
            "<mark class=\"hl\">notebook</mark>"
        );
    }
}
