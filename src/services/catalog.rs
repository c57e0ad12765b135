//! Read-only queries over the loaded element set.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

use crate::data::{Element, ElementSet};

/// Largest page size accepted by [`ElementCatalog::list`].
pub const MAX_PAGE_LIMIT: usize = 100;

/// Page size used when none is requested.
pub const DEFAULT_PAGE_LIMIT: usize = 50;

/// Result count used by [`ElementCatalog::search`] when none is requested.
pub const DEFAULT_SEARCH_LIMIT: usize = 20;

/// Largest result count for [`ElementCatalog::search`].
pub const MAX_SEARCH_LIMIT: usize = 100;

/// Result count used by [`ElementCatalog::similar`] when none is requested.
pub const DEFAULT_SIMILAR_LIMIT: usize = 5;

/// Field the element list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    /// Atomic number
    #[default]
    AtomicNumber,
    /// Atomic mass, unknown masses first
    AtomicMass,
    /// English name
    Name,
    /// Chemical symbol
    Symbol,
    /// Period
    Period,
    /// Group, f-block elements first
    Group,
}

impl FromStr for SortField {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "atomic_number" => Ok(Self::AtomicNumber),
            "atomic_mass" => Ok(Self::AtomicMass),
            "name" => Ok(Self::Name),
            "symbol" => Ok(Self::Symbol),
            "period" => Ok(Self::Period),
            "group" => Ok(Self::Group),
            _ => anyhow::bail!(
                "Invalid sort field '{s}'. Must be one of: atomic_number, atomic_mass, name, symbol, period, group"
            ),
        }
    }
}

impl SortField {
    fn compare(self, a: &Element, b: &Element) -> Ordering {
        match self {
            Self::AtomicNumber => a.atomic_number.cmp(&b.atomic_number),
            Self::AtomicMass => match (a.atomic_mass, b.atomic_mass) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (x, y) => x.is_some().cmp(&y.is_some()),
            },
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Symbol => a.symbol.cmp(&b.symbol),
            Self::Period => a.period.cmp(&b.period),
            Self::Group => a.group.cmp(&b.group),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl FromStr for SortOrder {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => anyhow::bail!("Invalid sort order '{s}'. Must be 'asc' or 'desc'"),
        }
    }
}

/// Filters, ordering and paging for [`ElementCatalog::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Category, compared case-insensitively
    pub category: Option<String>,
    /// Phase, compared case-insensitively
    pub phase: Option<String>,
    /// Period, 1-7
    pub period: Option<u8>,
    /// Group, 1-18
    pub group: Option<u8>,
    /// Sort key
    pub sort_by: SortField,
    /// Sort direction
    pub order: SortOrder,
    /// One-based page number
    pub page: usize,
    /// Page size, 1-100
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            category: None,
            phase: None,
            period: None,
            group: None,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl ListQuery {
    /// Checks ranges of the numeric parameters.
    pub fn validate(&self) -> Result<()> {
        if self.page == 0 {
            anyhow::bail!("page must be at least 1");
        }
        if !(1..=MAX_PAGE_LIMIT).contains(&self.limit) {
            anyhow::bail!("limit must be between 1 and {MAX_PAGE_LIMIT}");
        }
        if let Some(period) = self.period {
            if !(1..=7).contains(&period) {
                anyhow::bail!("period must be between 1 and 7");
            }
        }
        if let Some(group) = self.group {
            if !(1..=18).contains(&group) {
                anyhow::bail!("group must be between 1 and 18");
            }
        }
        Ok(())
    }

    fn accepts(&self, element: &Element) -> bool {
        let text_matches =
            |filter: &Option<String>, value: &str| filter.as_ref().map_or(true, |f| f.eq_ignore_ascii_case(value));

        text_matches(&self.category, &element.category)
            && text_matches(&self.phase, &element.phase)
            && self.period.map_or(true, |p| p == element.period)
            && self.group.map_or(true, |g| element.group == Some(g))
    }
}

/// Paging information returned with every list page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    /// Elements matching the filters
    pub total_items: usize,
    /// Number of pages at this page size
    pub total_pages: usize,
    /// This page, one-based
    pub page: usize,
    /// Page size
    pub limit: usize,
    /// A later page exists
    pub has_next: bool,
    /// An earlier page exists
    pub has_previous: bool,
}

/// One page of elements.
#[derive(Debug, Clone)]
pub struct Page<'a> {
    /// Elements on this page
    pub items: Vec<&'a Element>,
    /// Paging information
    pub metadata: PageMetadata,
}

/// Field considered by [`ElementCatalog::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    /// Chemical symbol, exact match only
    Symbol,
    /// English name
    Name,
    /// Persian name
    FaName,
    /// Category tag, substring only
    Category,
}

impl SearchField {
    /// Fields searched when the caller names none.
    pub const DEFAULT: &'static [Self] = &[Self::Symbol, Self::Name, Self::FaName];

    /// Parses a comma-separated list such as `"symbol,name"`.
    ///
    /// Unknown names are ignored; an empty result falls back to
    /// [`SearchField::DEFAULT`].
    #[must_use]
    pub fn parse_list(list: &str) -> Vec<Self> {
        let mut fields: Vec<Self> = Vec::new();
        for field in list.split(',').filter_map(|f| match f.trim() {
            "symbol" => Some(Self::Symbol),
            "name" => Some(Self::Name),
            "fa_name" => Some(Self::FaName),
            "category" => Some(Self::Category),
            _ => None,
        }) {
            if !fields.contains(&field) {
                fields.push(field);
            }
        }
        if fields.is_empty() {
            Self::DEFAULT.to_vec()
        } else {
            fields
        }
    }
}

/// A search hit with its relevance score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredElement<'a> {
    /// The matching element
    pub element: &'a Element,
    /// Sum of all rule scores; always positive
    pub score: u32,
}

/// Query interface over an [`ElementSet`].
#[derive(Debug, Clone, Copy)]
pub struct ElementCatalog<'a> {
    elements: &'a ElementSet,
}

impl<'a> ElementCatalog<'a> {
    /// Wraps an element set.
    #[must_use]
    pub const fn new(elements: &'a ElementSet) -> Self {
        Self { elements }
    }

    /// Total number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Finds an element by atomic number, symbol or English name.
    ///
    /// Numeric identifiers are only looked up as atomic numbers within
    /// 1-118. Symbol and name comparisons ignore case.
    #[must_use]
    pub fn find(&self, identifier: &str) -> Option<&'a Element> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return None;
        }

        if identifier.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(n) = identifier.parse::<u32>() {
                if (1..=118).contains(&n) {
                    if let Some(element) = self.elements.by_atomic_number(n) {
                        return Some(element);
                    }
                }
            }
        }

        self.elements.get(identifier).or_else(|| {
            let name = identifier.to_lowercase();
            self.elements
                .iter()
                .find(|e| e.name.to_lowercase() == name)
        })
    }

    /// Filters, sorts and pages the element set.
    pub fn list(&self, query: &ListQuery) -> Result<Page<'a>> {
        query.validate()?;

        let mut filtered: Vec<&Element> = self.elements.sorted();
        filtered.retain(|e| query.accepts(e));
        filtered.sort_by(|a, b| {
            let ord = query.sort_by.compare(a, b);
            match query.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        let total_items = filtered.len();
        let total_pages = total_items.div_ceil(query.limit);
        let items = filtered
            .into_iter()
            .skip((query.page - 1).saturating_mul(query.limit))
            .take(query.limit)
            .collect();

        Ok(Page {
            items,
            metadata: PageMetadata {
                total_items,
                total_pages,
                page: query.page,
                limit: query.limit,
                has_next: query.page < total_pages,
                has_previous: query.page > 1,
            },
        })
    }

    /// Relevance-scored search.
    ///
    /// | rule                         | score |
    /// |------------------------------|-------|
    /// | symbol equals query          | 100   |
    /// | name equals query            | 90    |
    /// | Persian name equals query    | 80    |
    /// | name contains query          | 70    |
    /// | Persian name contains query  | 60    |
    /// | atomic number equals query   | 50    |
    /// | category contains query      | 40    |
    ///
    /// Only rules for the requested `fields` apply, except the atomic
    /// number rule which always applies. Queries shorter than two
    /// characters return nothing.
    #[must_use]
    pub fn search(&self, query: &str, fields: &[SearchField], limit: usize) -> Vec<ScoredElement<'a>> {
        let query = query.trim();
        if query.chars().count() < 2 {
            return Vec::new();
        }

        let lower = query.to_lowercase();
        let has = |field| fields.contains(&field);

        let mut scored: Vec<ScoredElement<'a>> = self
            .elements
            .iter()
            .filter_map(|element| {
                let mut score = 0;
                let name = element.name.to_lowercase();
                let fa_name = element.fa_name.to_lowercase();

                if has(SearchField::Symbol) && element.symbol.eq_ignore_ascii_case(query) {
                    score += 100;
                }
                if has(SearchField::Name) && name == lower {
                    score += 90;
                }
                if has(SearchField::FaName) && !fa_name.is_empty() && fa_name == lower {
                    score += 80;
                }
                if has(SearchField::Name) && name.contains(&lower) {
                    score += 70;
                }
                if has(SearchField::FaName) && fa_name.contains(&lower) {
                    score += 60;
                }
                if element.atomic_number.to_string() == query {
                    score += 50;
                }
                if has(SearchField::Category) && element.category.to_lowercase().contains(&lower) {
                    score += 40;
                }

                (score > 0).then_some(ScoredElement { element, score })
            })
            .collect();

        scored.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then(a.element.atomic_number.cmp(&b.element.atomic_number))
        });
        scored.truncate(limit.clamp(1, MAX_SEARCH_LIMIT));
        scored
    }

    /// Elements sharing category, period or group with `element`.
    #[must_use]
    pub fn similar(&self, element: &Element, limit: usize) -> Vec<&'a Element> {
        self.elements
            .sorted()
            .into_iter()
            .filter(|e| e.atomic_number != element.atomic_number)
            .filter(|e| {
                (!element.category.is_empty() && e.category == element.category)
                    || e.period == element.period
                    || (element.group.is_some() && e.group == element.group)
            })
            .take(limit)
            .collect()
    }
}
