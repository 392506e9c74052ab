//! Enquiry list state as carried in the URL query string
//!
//! The query string is the single source of truth for the list page: every
//! user action produces a new [`EnquiryListQuery`], the page navigates to it,
//! and the list re-fetches whenever the parsed query changes.

use crate::enquiry::{ConversionStatus, LeadSource, Pagination};
use url::form_urlencoded;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 25, 50, 100];

/// Filter panel values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryFilters {
    pub conversion_status: Option<ConversionStatus>,
    pub agent_name: Option<String>,
    /// `YYYY-MM-DD`
    pub from_date: Option<String>,
    /// `YYYY-MM-DD`
    pub to_date: Option<String>,
    pub lead_source: Option<LeadSource>,
}

impl EnquiryFilters {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Number of active filters, shown on the filter toggle
    pub fn active_count(&self) -> usize {
        [
            self.conversion_status.is_some(),
            self.agent_name.is_some(),
            self.from_date.is_some(),
            self.to_date.is_some(),
            self.lead_source.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Normalise free-text fields so blank input means "no filter"
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            agent_name: non_blank(self.agent_name),
            from_date: non_blank(self.from_date),
            to_date: non_blank(self.to_date),
            ..self
        }
    }
}

/// Search, filter and pagination state of the enquiry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryListQuery {
    pub page: u32,
    pub page_size: u32,
    pub search: Option<String>,
    pub filters: EnquiryFilters,
}

impl Default for EnquiryListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            search: None,
            filters: EnquiryFilters::default(),
        }
    }
}

impl EnquiryListQuery {
    /// Parse a query string (with or without the leading `?`).
    ///
    /// Parsing never fails: malformed values fall back to their defaults and
    /// unknown keys are ignored.
    pub fn from_query_str(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "page" => {
                    query.page = value.parse().ok().filter(|p| *p >= 1).unwrap_or(1);
                }
                "page_size" => {
                    query.page_size = value
                        .parse()
                        .ok()
                        .filter(|s| PAGE_SIZE_OPTIONS.contains(s))
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                "search" => query.search = Some(value.to_string()),
                "conversion_status" => query.filters.conversion_status = value.parse().ok(),
                "agent_name" => query.filters.agent_name = Some(value.to_string()),
                "from_date" => query.filters.from_date = Some(value.to_string()),
                "to_date" => query.filters.to_date = Some(value.to_string()),
                "lead_source" => query.filters.lead_source = value.parse().ok(),
                _ => {}
            }
        }

        query
    }

    /// Key/value pairs with defaults and absent values left out
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if self.page != 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.page_size != DEFAULT_PAGE_SIZE {
            pairs.push(("page_size", self.page_size.to_string()));
        }
        pairs.extend(self.filter_pairs());
        pairs
    }

    /// Search and filter pairs only, as used by the export endpoint
    pub fn filter_pairs(&self) -> Vec<(&'static str, String)> {
        let f = &self.filters;
        [
            ("search", self.search.clone()),
            (
                "conversion_status",
                f.conversion_status.map(|s| s.as_str().to_string()),
            ),
            ("agent_name", f.agent_name.clone()),
            ("from_date", f.from_date.clone()),
            ("to_date", f.to_date.clone()),
            ("lead_source", f.lead_source.map(|s| s.as_str().to_string())),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// Pairs sent to the list endpoint; page and size are always explicit
    pub fn api_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        pairs.extend(self.filter_pairs());
        pairs
    }

    /// Encoded query string without the leading `?`
    pub fn to_query_string(&self) -> String {
        encode_pairs(&self.to_pairs())
    }

    #[must_use]
    pub fn with_search(&self, search: &str) -> Self {
        Self {
            page: 1,
            search: non_blank(Some(search.to_string())),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_filters(&self, filters: EnquiryFilters) -> Self {
        Self {
            page: 1,
            filters: filters.normalized(),
            ..self.clone()
        }
    }

    /// Clear the filter panel; search text and page size survive
    #[must_use]
    pub fn reset_filters(&self) -> Self {
        self.with_filters(EnquiryFilters::default())
    }

    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_page_size(&self, page_size: u32) -> Self {
        let page_size = if PAGE_SIZE_OPTIONS.contains(&page_size) {
            page_size
        } else {
            DEFAULT_PAGE_SIZE
        };
        Self {
            page: 1,
            page_size,
            ..self.clone()
        }
    }
}

impl EnquiryListQuery {
    /// Query for the last page that still has rows, when this one ran past
    /// the end (typically after deleting the last rows of a page)
    pub fn clamp_to(&self, pagination: &Pagination) -> Option<Self> {
        let last = u32::try_from(pagination.total_pages()).unwrap_or(u32::MAX);
        (last >= 1 && self.page > last).then(|| self.with_page(last))
    }
}

pub fn encode_pairs(pairs: &[(&str, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}

/// Split a raw query string into owned key/value pairs
pub fn decode_pairs(raw: &str) -> Vec<(String, String)> {
    let raw = raw.strip_prefix('?').unwrap_or(raw);
    form_urlencoded::parse(raw.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_default() {
        assert_eq!(EnquiryListQuery::from_query_str(""), EnquiryListQuery::default());
        assert_eq!(EnquiryListQuery::from_query_str("?"), EnquiryListQuery::default());
        assert_eq!(EnquiryListQuery::default().to_query_string(), "");
    }

    #[test]
    fn parses_all_keys() {
        let q = EnquiryListQuery::from_query_str(
            "?page=3&page_size=25&search=john+doe&conversion_status=Lost\
             &agent_name=Asha&from_date=2024-01-01&to_date=2024-02-01&lead_source=WalkIn",
        );
        assert_eq!(q.page, 3);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.search.as_deref(), Some("john doe"));
        assert_eq!(q.filters.conversion_status, Some(ConversionStatus::Lost));
        assert_eq!(q.filters.agent_name.as_deref(), Some("Asha"));
        assert_eq!(q.filters.from_date.as_deref(), Some("2024-01-01"));
        assert_eq!(q.filters.to_date.as_deref(), Some("2024-02-01"));
        assert_eq!(q.filters.lead_source, Some(LeadSource::WalkIn));
        assert_eq!(q.filters.active_count(), 5);
    }

    #[test]
    fn malformed_values_fall_back() {
        let q = EnquiryListQuery::from_query_str(
            "page=0&page_size=7&conversion_status=Maybe&lead_source=&search=%20%20&foo=bar",
        );
        assert_eq!(q, EnquiryListQuery::default());

        let q = EnquiryListQuery::from_query_str("page=-2&page_size=abc");
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn serialisation_omits_defaults_and_survives_reparse() {
        let q = EnquiryListQuery::default()
            .with_search("Goa trip")
            .with_page(4);
        assert_eq!(q.to_query_string(), "page=4&search=Goa+trip");
        assert_eq!(EnquiryListQuery::from_query_str(&q.to_query_string()), q);
    }

    #[test]
    fn search_and_filters_reset_page() {
        let q = EnquiryListQuery::default().with_page(5);
        assert_eq!(q.with_search("x").page, 1);

        let filters = EnquiryFilters {
            agent_name: Some("  ".into()),
            conversion_status: Some(ConversionStatus::Converted),
            ..EnquiryFilters::default()
        };
        let filtered = q.with_filters(filters);
        assert_eq!(filtered.page, 1);
        assert_eq!(filtered.filters.agent_name, None);
        assert_eq!(filtered.filters.active_count(), 1);
    }

    #[test]
    fn reset_keeps_search_and_page_size() {
        let q = EnquiryListQuery::default()
            .with_page_size(50)
            .with_search("kerala")
            .with_filters(EnquiryFilters {
                lead_source: Some(LeadSource::Agent),
                ..EnquiryFilters::default()
            })
            .with_page(2);
        let reset = q.reset_filters();
        assert!(reset.filters.is_empty());
        assert_eq!(reset.search.as_deref(), Some("kerala"));
        assert_eq!(reset.page_size, 50);
        assert_eq!(reset.page, 1);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let q = EnquiryListQuery::default().with_page(3).with_page_size(25);
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.with_page_size(33).page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn api_pairs_always_carry_paging() {
        let pairs = EnquiryListQuery::default().api_pairs();
        assert_eq!(
            pairs,
            vec![("page", "1".to_string()), ("page_size", "10".to_string())]
        );
    }

    #[test]
    fn decodes_raw_pairs() {
        assert_eq!(
            decode_pairs("?page=2&search=goa+trip"),
            vec![
                ("page".to_string(), "2".to_string()),
                ("search".to_string(), "goa trip".to_string())
            ]
        );
        assert!(decode_pairs("").is_empty());
    }

    #[test]
    fn page_past_the_end_is_clamped() {
        let q = EnquiryListQuery::default().with_page(4);
        let pagination = Pagination { page: 4, page_size: 10, total: 25 };
        assert_eq!(q.clamp_to(&pagination).map(|q| q.page), Some(3));

        let within = EnquiryListQuery::default().with_page(3);
        assert_eq!(within.clamp_to(&pagination), None);

        let empty = Pagination { page: 4, page_size: 10, total: 0 };
        assert_eq!(q.clamp_to(&empty), None);
    }
}
