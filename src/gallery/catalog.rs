//! Sample Data
//!
//! Static option lists for the local demos, and an in-memory turbine catalog
//! served page by page with simulated latency for the paginated demos.

use std::rc::Rc;
use std::time::Duration;

use gpui::{Context, SharedString, Task};
use gpui_component::{Icon, IconName};

use crate::domain::{OptionAccessors, contains_ignore_case};
use crate::states::PaginationSignal;

// ==================== Local options ====================

/// Frontend framework option
#[derive(Debug, Clone, PartialEq)]
pub struct Framework {
    pub value: &'static str,
    pub label: &'static str,
    pub popular: bool,
}

pub fn frameworks() -> Vec<Framework> {
    [
        ("react", "React", true),
        ("angular", "Angular", false),
        ("vue", "Vue", true),
        ("svelte", "Svelte", false),
        ("ember", "Ember", false),
        ("solid", "Solid", false),
        ("next", "Next.js", true),
        ("nuxt", "Nuxt", false),
        ("remix", "Remix", false),
        ("astro", "Astro", false),
    ]
    .into_iter()
    .map(|(value, label, popular)| Framework { value, label, popular })
    .collect()
}

pub fn framework_accessors() -> OptionAccessors<Framework, &'static str> {
    OptionAccessors::new(|f: &Framework| f.value, |f: &Framework| f.label.into())
        .with_icon(|f: &Framework| f.popular.then(|| Icon::new(IconName::Asterisk)))
}

/// Grid region option
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub code: &'static str,
    pub name: &'static str,
}

pub fn regions() -> Vec<Region> {
    [
        ("NW", "Northwest"),
        ("NC", "North China"),
        ("NE", "Northeast"),
        ("EC", "East China"),
        ("CC", "Central China"),
        ("SC", "South China"),
        ("SW", "Southwest"),
        ("AS", "Asia Pacific"),
    ]
    .into_iter()
    .map(|(code, name)| Region { code, name })
    .collect()
}

pub fn region_accessors() -> OptionAccessors<Region, &'static str> {
    OptionAccessors::new(|r: &Region| r.code, |r: &Region| r.name.into())
}

// ==================== Turbine catalog ====================

const FARMS: [&str; 6] = ["Dabancheng", "Guazhou", "Jiuquan", "Xilinhot", "Zhangbei", "Hami"];
const TURBINES_PER_FARM: u32 = 40;

/// A wind turbine
#[derive(Debug, Clone, PartialEq)]
pub struct Turbine {
    pub id: u32,
    pub name: SharedString,
    pub farm: &'static str,
}

pub fn turbine_accessors() -> OptionAccessors<Turbine, u32> {
    OptionAccessors::new(|t: &Turbine| t.id, |t: &Turbine| t.name.clone())
}

/// One page of query results
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub items: Vec<Turbine>,
    pub has_next: bool,
}

/// In-memory turbine catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    turbines: Vec<Turbine>,
}

impl Default for Catalog {
    fn default() -> Self {
        let turbines = FARMS
            .iter()
            .enumerate()
            .flat_map(|(farm_ix, farm)| {
                (1..=TURBINES_PER_FARM).map(move |n| Turbine {
                    id: (farm_ix as u32 + 1) * 1000 + n,
                    name: format!("{farm} WTG-{n:02}").into(),
                    farm,
                })
            })
            .collect();
        Self { turbines }
    }
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.turbines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turbines.is_empty()
    }

    /// Turbines whose name or id contains `term`, one page at a time
    pub fn query(&self, term: &str, page: usize, page_size: usize) -> Page {
        let matches: Vec<&Turbine> = self
            .turbines
            .iter()
            .filter(|t| term.is_empty() || contains_ignore_case(&t.name, term) || t.id.to_string().contains(term))
            .collect();
        let start = page.saturating_mul(page_size).min(matches.len());
        let end = start.saturating_add(page_size).min(matches.len());
        Page {
            items: matches[start..end].iter().map(|t| (*t).clone()).collect(),
            has_next: end < matches.len(),
        }
    }
}

// ==================== Paged feed ====================

/// Caller-side pagination state backing a paginated select
///
/// Owns the loaded options and fetch flags; the select only reads them.
pub struct PagedFeed {
    catalog: Rc<Catalog>,
    page_size: usize,
    fetch_delay: Duration,
    term: String,
    items: Vec<Turbine>,
    next_page: usize,
    has_next: bool,
    fetching: bool,
    generation: u64,
    fetch_task: Option<Task<()>>,
}

impl PagedFeed {
    /// Create a feed with the first page already loaded
    pub fn new(catalog: Rc<Catalog>, page_size: usize, fetch_delay: Duration) -> Self {
        let first = catalog.query("", 0, page_size);
        Self {
            catalog,
            page_size,
            fetch_delay,
            term: String::new(),
            items: first.items,
            next_page: 1,
            has_next: first.has_next,
            fetching: false,
            generation: 0,
            fetch_task: None,
        }
    }

    pub fn items(&self) -> &[Turbine] {
        &self.items
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn signal(&self) -> PaginationSignal {
        PaginationSignal::new(self.has_next, self.fetching)
    }

    /// Restart from the first page for a new term
    pub fn search(&mut self, term: &str, cx: &mut Context<Self>) {
        if term == self.term {
            return;
        }
        tracing::debug!(term, "Feed search");
        self.reset(term);
        self.fetch_task = None;
        self.load_next(cx);
    }

    /// Fetch the next page unless one is in flight or none remain
    pub fn load_next(&mut self, cx: &mut Context<Self>) {
        let Some((generation, page)) = self.begin() else {
            return;
        };
        cx.notify();

        let catalog = self.catalog.clone();
        let term = self.term.clone();
        let page_size = self.page_size;
        let delay = self.fetch_delay;
        self.fetch_task = Some(cx.spawn(async move |this, cx| {
            cx.background_executor().timer(delay).await;
            let result = catalog.query(&term, page, page_size);
            let _ = this.update(cx, |this, cx| {
                if this.complete(generation, result) {
                    cx.notify();
                }
            });
        }));
    }

    fn reset(&mut self, term: &str) {
        self.generation += 1;
        self.term = term.to_string();
        self.items.clear();
        self.next_page = 0;
        self.has_next = true;
        self.fetching = false;
    }

    fn begin(&mut self) -> Option<(u64, usize)> {
        if self.fetching || !self.has_next {
            return None;
        }
        self.fetching = true;
        Some((self.generation, self.next_page))
    }

    fn complete(&mut self, generation: u64, page: Page) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items.extend(page.items);
        self.has_next = page.has_next;
        self.next_page += 1;
        self.fetching = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(page_size: usize) -> PagedFeed {
        PagedFeed::new(Rc::new(Catalog::default()), page_size, Duration::ZERO)
    }

    #[test]
    fn test_catalog_pages() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 240);

        let first = catalog.query("", 0, 100);
        assert_eq!(first.items.len(), 100);
        assert!(first.has_next);

        let last = catalog.query("", 2, 100);
        assert_eq!(last.items.len(), 40);
        assert!(!last.has_next);

        let beyond = catalog.query("", 9, 100);
        assert!(beyond.items.is_empty());
        assert!(!beyond.has_next);
    }

    #[test]
    fn test_catalog_search_by_name_or_id() {
        let catalog = Catalog::default();
        let hami = catalog.query("hami", 0, 100);
        assert_eq!(hami.items.len(), 40);
        assert!(hami.items.iter().all(|t| t.farm == "Hami"));

        let by_id = catalog.query("2007", 0, 10);
        assert_eq!(by_id.items.len(), 1);
        assert_eq!(by_id.items[0].name, SharedString::from("Guazhou WTG-07"));
    }

    #[test]
    fn test_feed_guards_in_flight_fetch() {
        let mut feed = feed(20);
        assert_eq!(feed.items().len(), 20);
        assert_eq!(feed.signal(), PaginationSignal::new(true, false));

        let (generation, page) = feed.begin().expect("first fetch starts");
        assert_eq!(page, 1);
        assert!(feed.signal().is_fetching_next_page);
        assert!(feed.begin().is_none());

        let result = feed.catalog.query("", page, 20);
        assert!(feed.complete(generation, result));
        assert_eq!(feed.items().len(), 40);
        assert!(feed.signal().can_load_more());
    }

    #[test]
    fn test_feed_drops_stale_pages_after_search() {
        let mut feed = feed(20);
        let (stale, page) = feed.begin().expect("fetch starts");
        let result = feed.catalog.query("", page, 20);

        feed.reset("zhang");
        assert!(!feed.complete(stale, result));
        assert!(feed.items().is_empty());
        assert_eq!(feed.term(), "zhang");

        let (generation, page) = feed.begin().expect("fetch for new term starts");
        assert_eq!(page, 0);
        let result = feed.catalog.query("zhang", page, 20);
        assert!(feed.complete(generation, result));
        assert_eq!(feed.items().len(), 20);
        assert!(feed.items().iter().all(|t| t.farm == "Zhangbei"));
    }
}
