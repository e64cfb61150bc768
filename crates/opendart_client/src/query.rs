//! Typed query parameter families.
//!
//! Most endpoints fall into one of three families: periodic report lookups
//! (company, year, report), financial statement lookups (the same plus the
//! consolidation flag), and date range lookups (company, start, end).

/// Query pairs ready for `reqwest::RequestBuilder::query`.
pub(crate) type QueryPairs = Vec<(&'static str, String)>;

fn push_opt(pairs: &mut QueryPairs, key: &'static str, value: &Option<String>) {
    if let Some(value) = value {
        pairs.push((key, value.clone()));
    }
}

/// Disclosure search filters. Every field is optional.
///
/// # Examples
///
/// ```
/// use opendart_client::DisclosureSearch;
///
/// let search = DisclosureSearch::builder()
///     .corp_code("00126380")
///     .bgn_de("20230101")
///     .end_de("20231231")
///     .page_count(100u32)
///     .build()
///     .unwrap();
/// assert_eq!(search.corp_code.as_deref(), Some("00126380"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_builder::Builder)]
#[builder(default, setter(into, strip_option))]
pub struct DisclosureSearch {
    /// Corporation code
    pub corp_code: Option<String>,
    /// Range start (YYYYMMDD)
    pub bgn_de: Option<String>,
    /// Range end (YYYYMMDD)
    pub end_de: Option<String>,
    /// Final reports only (Y/N)
    pub last_reprt_at: Option<String>,
    /// Disclosure type (A to J)
    pub pblntf_ty: Option<String>,
    /// Disclosure detail type
    pub pblntf_detail_ty: Option<String>,
    /// Market classification (Y/K/N/E)
    pub corp_cls: Option<String>,
    /// Sort key (date/crp/rpt)
    pub sort: Option<String>,
    /// Sort direction (asc/desc)
    pub sort_mth: Option<String>,
    /// Page number
    pub page_no: Option<u32>,
    /// Page size (max 100)
    pub page_count: Option<u32>,
}

impl DisclosureSearch {
    /// Start building a search.
    pub fn builder() -> DisclosureSearchBuilder {
        DisclosureSearchBuilder::default()
    }

    pub(crate) fn to_query(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        push_opt(&mut pairs, "corp_code", &self.corp_code);
        push_opt(&mut pairs, "bgn_de", &self.bgn_de);
        push_opt(&mut pairs, "end_de", &self.end_de);
        push_opt(&mut pairs, "last_reprt_at", &self.last_reprt_at);
        push_opt(&mut pairs, "pblntf_ty", &self.pblntf_ty);
        push_opt(&mut pairs, "pblntf_detail_ty", &self.pblntf_detail_ty);
        push_opt(&mut pairs, "corp_cls", &self.corp_cls);
        push_opt(&mut pairs, "sort", &self.sort);
        push_opt(&mut pairs, "sort_mth", &self.sort_mth);
        if let Some(page_no) = self.page_no {
            pairs.push(("page_no", page_no.to_string()));
        }
        if let Some(page_count) = self.page_count {
            pairs.push(("page_count", page_count.to_string()));
        }
        pairs
    }
}

/// Company, business year and report code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    /// Corporation code
    pub corp_code: String,
    /// Business year (YYYY)
    pub bsns_year: String,
    /// Report code, see [`ReportCode`](opendart_core::ReportCode)
    pub reprt_code: String,
}

impl ReportQuery {
    /// Create a report query.
    pub fn new(
        corp_code: impl Into<String>,
        bsns_year: impl Into<String>,
        reprt_code: impl Into<String>,
    ) -> Self {
        Self {
            corp_code: corp_code.into(),
            bsns_year: bsns_year.into(),
            reprt_code: reprt_code.into(),
        }
    }

    pub(crate) fn to_query(&self) -> QueryPairs {
        vec![
            ("corp_code", self.corp_code.clone()),
            ("bsns_year", self.bsns_year.clone()),
            ("reprt_code", self.reprt_code.clone()),
        ]
    }
}

/// A [`ReportQuery`] plus the consolidated/separate flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialQuery {
    /// Company, year and report
    pub report: ReportQuery,
    /// `CFS` or `OFS`; the service defaults to consolidated when absent
    pub fs_div: Option<String>,
}

impl FinancialQuery {
    /// Create a financial statement query.
    pub fn new(report: ReportQuery, fs_div: Option<String>) -> Self {
        Self { report, fs_div }
    }

    pub(crate) fn to_query(&self) -> QueryPairs {
        let mut pairs = self.report.to_query();
        push_opt(&mut pairs, "fs_div", &self.fs_div);
        pairs
    }
}

/// Company and an optional receipt date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodQuery {
    /// Corporation code
    pub corp_code: String,
    /// Range start (YYYYMMDD)
    pub bgn_de: Option<String>,
    /// Range end (YYYYMMDD)
    pub end_de: Option<String>,
}

impl PeriodQuery {
    /// Create a period query.
    pub fn new(corp_code: impl Into<String>, bgn_de: Option<String>, end_de: Option<String>) -> Self {
        Self {
            corp_code: corp_code.into(),
            bgn_de,
            end_de,
        }
    }

    pub(crate) fn to_query(&self) -> QueryPairs {
        let mut pairs = vec![("corp_code", self.corp_code.clone())];
        push_opt(&mut pairs, "bgn_de", &self.bgn_de);
        push_opt(&mut pairs, "end_de", &self.end_de);
        pairs
    }
}
