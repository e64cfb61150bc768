//! The ordered catalog of endpoints to verify.

use opendart_core::Category;
use opendart_interface::{Operation, Param};

/// A value only known after an earlier call in the same run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::AsRefStr, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum RuntimeVariable {
    /// Receipt number of the first disclosure returned by the search
    RceptNo,
}

/// Where a call argument's value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamSource {
    /// Fixed value
    Literal(String),
    /// The configured test-data value for the same parameter
    TestData,
    /// A value discovered earlier in the run
    Runtime(RuntimeVariable),
}

/// One remote operation and how to call it.
///
/// # Examples
///
/// ```
/// use opendart_interface::{Operation, Param};
/// use opendart_verify::EndpointSpec;
///
/// let spec = EndpointSpec::new("DS001-03", Operation::DisclosureDownloadDocument, "공시서류 원본 다운로드")
///     .receipt_no(Param::RceptNo);
///
/// assert_eq!(spec.name(), "disclosure.download_document");
/// assert_eq!(spec.category().as_ref(), "DS001");
/// assert!(spec.requires_runtime());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct EndpointSpec {
    /// Identifier such as `DS001-01`
    id: String,
    /// Client operation invoked
    operation: Operation,
    /// Short Korean description
    description: String,
    /// Argument sources in call order
    params: Vec<(Param, ParamSource)>,
}

impl EndpointSpec {
    /// An endpoint that takes no arguments yet.
    pub fn new(id: impl Into<String>, operation: Operation, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            operation,
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Add an argument with an explicit source.
    pub fn param(mut self, param: Param, source: ParamSource) -> Self {
        self.params.push((param, source));
        self
    }

    /// Add arguments filled from test data.
    pub fn test_data(mut self, params: &[Param]) -> Self {
        self.params
            .extend(params.iter().map(|param| (*param, ParamSource::TestData)));
        self
    }

    /// Add an argument filled from the discovered receipt number.
    pub fn receipt_no(self, param: Param) -> Self {
        self.param(param, ParamSource::Runtime(RuntimeVariable::RceptNo))
    }

    /// Dotted `service.method` name.
    pub fn name(&self) -> &str {
        self.operation.as_ref()
    }

    /// Category tag, derived from the operation.
    pub fn category(&self) -> Category {
        self.operation.category()
    }

    /// True when some argument depends on an earlier call.
    pub fn requires_runtime(&self) -> bool {
        self.runtime_dependencies().next().is_some()
    }

    /// Runtime values this endpoint needs.
    pub fn runtime_dependencies(&self) -> impl Iterator<Item = RuntimeVariable> + '_ {
        self.params.iter().filter_map(|(_, source)| match source {
            ParamSource::Runtime(var) => Some(*var),
            _ => None,
        })
    }
}

/// Ordered endpoint catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    endpoints: Vec<EndpointSpec>,
}

const REPORT: &[Param] = &[Param::CorpCode, Param::BsnsYear, Param::ReprtCode];
const FINANCIAL: &[Param] = &[
    Param::CorpCode,
    Param::BsnsYear,
    Param::ReprtCode,
    Param::FsDiv,
];
const PERIOD: &[Param] = &[Param::CorpCode, Param::BgnDe, Param::EndDe];

impl Registry {
    /// Registry from explicit endpoints, kept in the given order.
    pub fn new(endpoints: Vec<EndpointSpec>) -> Self {
        Self { endpoints }
    }

    /// The 30 published OpenDART endpoints.
    ///
    /// The disclosure search comes first so later receipt-dependent
    /// downloads can use what it discovers.
    pub fn opendart() -> Self {
        use Operation::*;

        let endpoints = vec![
            // DS001
            EndpointSpec::new("DS001-01", DisclosureSearch, "공시검색").test_data(PERIOD),
            EndpointSpec::new("DS001-02", DisclosureGetCompany, "기업개황 조회")
                .test_data(&[Param::CorpCode]),
            EndpointSpec::new("DS001-03", DisclosureDownloadDocument, "공시서류 원본 다운로드")
                .receipt_no(Param::RceptNo),
            EndpointSpec::new("DS001-04", DisclosureDownloadCorpCodes, "고유번호 전체 다운로드"),
            // DS002
            EndpointSpec::new("DS002-01", ReportGetStockChanges, "증자(감자) 현황 조회")
                .test_data(REPORT),
            EndpointSpec::new("DS002-02", ReportGetDividends, "배당에 관한 사항 조회")
                .test_data(REPORT),
            EndpointSpec::new("DS002-03", ReportGetTreasuryStock, "자기주식 현황 조회")
                .test_data(REPORT),
            EndpointSpec::new("DS002-04", ReportGetLargestShareholders, "최대주주 현황 조회")
                .test_data(REPORT),
            EndpointSpec::new("DS002-05", ReportGetExecutives, "임원 현황 조회").test_data(REPORT),
            EndpointSpec::new("DS002-06", ReportGetEmployees, "직원 현황 조회").test_data(REPORT),
            EndpointSpec::new("DS002-07", ReportGetIndividualCompensation, "개인별 보수 현황 조회")
                .test_data(REPORT),
            EndpointSpec::new("DS002-08", ReportGetDirectorCompensation, "이사/감사 보수 현황 조회")
                .test_data(REPORT),
            // DS003
            EndpointSpec::new("DS003-01", FinancialGetSingleAccount, "단일회사 주요계정 조회")
                .test_data(FINANCIAL),
            EndpointSpec::new("DS003-02", FinancialGetMultiAccount, "다중회사 주요계정 조회")
                .test_data(FINANCIAL),
            EndpointSpec::new("DS003-03", FinancialGetFullStatements, "단일회사 전체 재무제표 조회")
                .test_data(FINANCIAL),
            EndpointSpec::new("DS003-04", FinancialDownloadXbrl, "XBRL 원본파일 다운로드")
                .receipt_no(Param::RceptNo)
                .test_data(&[Param::ReprtCode]),
            EndpointSpec::new("DS003-05", FinancialGetXbrlTaxonomy, "XBRL 택사노미 조회")
                .test_data(&[Param::SjDiv]),
            EndpointSpec::new("DS003-06", FinancialGetIndicators, "재무지표 조회").test_data(REPORT),
            // DS004
            EndpointSpec::new("DS004-01", ShareholderGetMajorStock, "대량보유 상황보고 조회")
                .test_data(&[Param::CorpCode]),
            EndpointSpec::new("DS004-02", ShareholderGetExecutiveStock, "임원/주요주주 소유보고 조회")
                .test_data(&[Param::CorpCode]),
            // DS005
            EndpointSpec::new("DS005-01", MajorEventGetPaidCapitalIncrease, "유상증자 결정 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS005-02", MajorEventGetBonusIssue, "무상증자 결정 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS005-03", MajorEventGetCapitalReduction, "감자 결정 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS005-04", MajorEventGetConvertibleBond, "전환사채권 발행결정 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS005-05", MajorEventGetMergerDecision, "합병 결정 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS005-06", MajorEventGetSplitDecision, "분할 결정 조회")
                .test_data(PERIOD),
            // DS006
            EndpointSpec::new("DS006-01", RegistrationGetEquitySecurities, "지분증권 발행 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS006-02", RegistrationGetDebtSecurities, "채무증권 발행 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS006-03", RegistrationGetMergerRegistration, "합병 신고 조회")
                .test_data(PERIOD),
            EndpointSpec::new("DS006-04", RegistrationGetSplitRegistration, "분할 신고 조회")
                .test_data(PERIOD),
        ];

        Self { endpoints }
    }

    /// Endpoint by id.
    pub fn get(&self, id: &str) -> Option<&EndpointSpec> {
        self.endpoints.iter().find(|spec| spec.id == id)
    }

    /// Endpoints in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, EndpointSpec> {
        self.endpoints.iter()
    }

    /// Endpoints whose category tag equals `category`, in registry order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a EndpointSpec> {
        self.endpoints
            .iter()
            .filter(move |spec| spec.category().as_ref() == category)
    }

    /// Number of endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// True when the registry lists nothing.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a EndpointSpec;
    type IntoIter = std::slice::Iter<'a, EndpointSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.endpoints.iter()
    }
}
