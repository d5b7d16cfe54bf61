//! Learning-log ordering and expansion state

use chrono::{DateTime, NaiveDate};

use crate::models::LogEntry;

/// Milliseconds since the Unix epoch for a log date.
///
/// Accepts `YYYY-MM-DD` (midnight UTC) and RFC 3339 timestamps; anything
/// else counts as the epoch itself, so it sorts as the oldest entry.
pub fn date_millis(date: &str) -> i64 {
    let date = date.trim();
    if let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return day
            .and_hms_opt(0, 0, 0)
            .map_or(0, |dt| dt.and_utc().timestamp_millis());
    }
    DateTime::parse_from_rfc3339(date).map_or(0, |dt| dt.timestamp_millis())
}

/// Pinned entries first, then newest first; equal keys keep source order
pub fn sort_logs(entries: &[LogEntry]) -> Vec<&LogEntry> {
    let mut sorted: Vec<&LogEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| {
        b.pinned
            .cmp(&a.pinned)
            .then_with(|| date_millis(&b.date).cmp(&date_millis(&a.date)))
    });
    sorted
}

/// Fragment id of the entry at 1-based `position`
pub fn anchor_for(position: usize) -> String {
    format!("log-{position}")
}

/// One entry as displayed, with its 1-based position in the sorted list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogView<'a> {
    pub entry: &'a LogEntry,
    pub position: usize,
}

impl<'a> LogView<'a> {
    /// Sorted views over `entries`
    pub fn list(entries: &'a [LogEntry]) -> Vec<LogView<'a>> {
        sort_logs(entries)
            .into_iter()
            .enumerate()
            .map(|(i, entry)| LogView {
                entry,
                position: i + 1,
            })
            .collect()
    }

    pub fn anchor(&self) -> String {
        anchor_for(self.position)
    }

    pub fn related_line(&self) -> String {
        format!("Related tools: {}", self.entry.related_tools.join(" / "))
    }

    /// Expanded detail text; links follow the details when both exist
    pub fn detail_text(&self) -> String {
        match &self.entry.details {
            None => "No details yet".to_owned(),
            Some(details) if self.entry.links.is_empty() => details.clone(),
            Some(details) => format!("{details}\nLinks: {}", self.entry.links.join(" / ")),
        }
    }
}

/// Which log details are expanded.
///
/// Toggling one entry closes any other open entry. The page persists the
/// index returned by [`LogAccordion::toggle`] and restores it through
/// [`LogAccordion::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogAccordion {
    open: Vec<bool>,
    all_open: bool,
}

impl LogAccordion {
    /// State for `count` entries. `stored` is a previously persisted open
    /// index and `hash` the URL fragment; either one opens its entry.
    pub fn new(count: usize, stored: Option<usize>, hash: &str) -> Self {
        let hash = hash.trim_start_matches('#');
        let open = (0..count)
            .map(|i| stored == Some(i) || (!hash.is_empty() && anchor_for(i + 1) == hash))
            .collect();
        Self {
            open,
            all_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Flip one entry. Returns the index to persist when the entry opened,
    /// `None` when it closed or the index is out of range.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        if index >= self.open.len() {
            return None;
        }
        if self.open[index] {
            self.open[index] = false;
            return None;
        }
        for (i, open) in self.open.iter_mut().enumerate() {
            *open = i == index;
        }
        tracing::info!(event = "log_expand", anchor = %anchor_for(index + 1), "log expanded");
        Some(index)
    }

    /// Open or close every entry; the persisted index should be cleared
    pub fn toggle_all(&mut self) {
        self.all_open = !self.all_open;
        self.open.fill(self.all_open);
    }

    /// Button text for one entry
    pub fn label(&self, index: usize) -> &'static str {
        if self.is_open(index) { "Collapse" } else { "Expand" }
    }

    /// Button text for the expand-all control
    pub fn toggle_all_label(&self) -> &'static str {
        if self.all_open { "Collapse all" } else { "Expand all" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, date: &str, pinned: bool) -> LogEntry {
        LogEntry {
            title: title.to_owned(),
            date: date.to_owned(),
            bullets: Vec::new(),
            related_tools: Vec::new(),
            details: None,
            links: Vec::new(),
            pinned,
        }
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(date_millis("1970-01-02"), 86_400_000);
        assert_eq!(date_millis("1970-01-01T00:00:01Z"), 1000);
        assert_eq!(date_millis("last week"), 0);
        assert_eq!(date_millis(""), 0);
    }

    #[test]
    fn test_pinned_then_newest() {
        let entries = [
            entry("old", "2024-01-01", false),
            entry("bad", "soon", false),
            entry("new", "2024-06-01", false),
            entry("pin", "2020-01-01", true),
        ];
        let titles: Vec<&str> = sort_logs(&entries).iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["pin", "new", "old", "bad"]);
    }

    #[test]
    fn test_views_and_anchors() {
        let mut first = entry("a", "2024-02-01", false);
        first.details = Some("notes".to_owned());
        first.links = vec!["https://a".to_owned(), "https://b".to_owned()];
        first.related_tools = vec!["Ripgrep".to_owned(), "Figma".to_owned()];
        let entries = [entry("b", "2024-01-01", false), first];

        let views = LogView::list(&entries);
        assert_eq!(views[0].entry.title, "a");
        assert_eq!(views[0].anchor(), "log-1");
        assert_eq!(views[1].anchor(), "log-2");
        assert_eq!(views[0].detail_text(), "notes\nLinks: https://a / https://b");
        assert_eq!(views[0].related_line(), "Related tools: Ripgrep / Figma");
        assert_eq!(views[1].detail_text(), "No details yet");
    }

    #[test]
    fn test_accordion_single_open() {
        let mut acc = LogAccordion::new(3, None, "");
        assert!((0..3).all(|i| !acc.is_open(i)));

        assert_eq!(acc.toggle(0), Some(0));
        assert_eq!(acc.toggle(2), Some(2));
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
        assert_eq!(acc.label(2), "Collapse");

        assert_eq!(acc.toggle(2), None);
        assert!(!acc.is_open(2));
        assert_eq!(acc.toggle(7), None);
    }

    #[test]
    fn test_accordion_restores_state() {
        let acc = LogAccordion::new(3, Some(1), "");
        assert!(acc.is_open(1));

        let acc = LogAccordion::new(3, None, "#log-3");
        assert!(acc.is_open(2));

        let acc = LogAccordion::new(2, Some(5), "#log-9");
        assert!(!acc.is_open(0) && !acc.is_open(1));
    }

    #[test]
    fn test_toggle_all() {
        let mut acc = LogAccordion::new(3, None, "");
        acc.toggle_all();
        assert!((0..3).all(|i| acc.is_open(i)));
        assert_eq!(acc.toggle_all_label(), "Collapse all");
        acc.toggle_all();
        assert!((0..3).all(|i| !acc.is_open(i)));
        assert_eq!(acc.toggle_all_label(), "Expand all");
    }
}
