//! The closed set of client operations.

use crate::Param;
use opendart_core::Category;

/// How an operation's response body is shaped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseShape {
    /// `{status, message, list: [...]}`
    List,
    /// Record fields flattened next to `status` and `message`
    Single,
    /// Raw file download (ZIP or XML)
    Bytes,
}

/// Every client operation the harness can invoke.
///
/// The string form is the dotted `service.method` name used in reports.
///
/// # Examples
///
/// ```
/// use opendart_interface::{Operation, ResponseShape};
///
/// let op: Operation = "financial.download_xbrl".parse().unwrap();
/// assert_eq!(op, Operation::FinancialDownloadXbrl);
/// assert_eq!(op.path(), "/api/fnlttXbrl.xml");
/// assert_eq!(op.shape(), ResponseShape::Bytes);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
pub enum Operation {
    // DS001
    /// Disclosure search
    #[strum(serialize = "disclosure.search")]
    DisclosureSearch,
    /// Company overview
    #[strum(serialize = "disclosure.get_company")]
    DisclosureGetCompany,
    /// Original filing document (ZIP)
    #[strum(serialize = "disclosure.download_document")]
    DisclosureDownloadDocument,
    /// Corporation code table (ZIP)
    #[strum(serialize = "disclosure.download_corp_codes")]
    DisclosureDownloadCorpCodes,

    // DS002
    /// Capital increase and reduction history
    #[strum(serialize = "report.get_stock_changes")]
    ReportGetStockChanges,
    /// Dividends
    #[strum(serialize = "report.get_dividends")]
    ReportGetDividends,
    /// Treasury stock
    #[strum(serialize = "report.get_treasury_stock")]
    ReportGetTreasuryStock,
    /// Largest shareholders
    #[strum(serialize = "report.get_largest_shareholders")]
    ReportGetLargestShareholders,
    /// Executives
    #[strum(serialize = "report.get_executives")]
    ReportGetExecutives,
    /// Employees
    #[strum(serialize = "report.get_employees")]
    ReportGetEmployees,
    /// Individual compensation
    #[strum(serialize = "report.get_individual_compensation")]
    ReportGetIndividualCompensation,
    /// Director and auditor compensation
    #[strum(serialize = "report.get_director_compensation")]
    ReportGetDirectorCompensation,

    // DS003
    /// Key accounts of a single company
    #[strum(serialize = "financial.get_single_account")]
    FinancialGetSingleAccount,
    /// Key accounts of several companies
    #[strum(serialize = "financial.get_multi_account")]
    FinancialGetMultiAccount,
    /// Full financial statements
    #[strum(serialize = "financial.get_full_statements")]
    FinancialGetFullStatements,
    /// XBRL instance (ZIP)
    #[strum(serialize = "financial.download_xbrl")]
    FinancialDownloadXbrl,
    /// XBRL taxonomy
    #[strum(serialize = "financial.get_xbrl_taxonomy")]
    FinancialGetXbrlTaxonomy,
    /// Financial indicators
    #[strum(serialize = "financial.get_indicators")]
    FinancialGetIndicators,

    // DS004
    /// Large holding reports
    #[strum(serialize = "shareholder.get_major_stock")]
    ShareholderGetMajorStock,
    /// Executive ownership reports
    #[strum(serialize = "shareholder.get_executive_stock")]
    ShareholderGetExecutiveStock,

    // DS005
    /// Paid-in capital increase decisions
    #[strum(serialize = "major_event.get_paid_capital_increase")]
    MajorEventGetPaidCapitalIncrease,
    /// Bonus issue decisions
    #[strum(serialize = "major_event.get_bonus_issue")]
    MajorEventGetBonusIssue,
    /// Capital reduction decisions
    #[strum(serialize = "major_event.get_capital_reduction")]
    MajorEventGetCapitalReduction,
    /// Convertible bond decisions
    #[strum(serialize = "major_event.get_convertible_bond")]
    MajorEventGetConvertibleBond,
    /// Merger decisions
    #[strum(serialize = "major_event.get_merger_decision")]
    MajorEventGetMergerDecision,
    /// Split decisions
    #[strum(serialize = "major_event.get_split_decision")]
    MajorEventGetSplitDecision,

    // DS006
    /// Equity securities registrations
    #[strum(serialize = "registration.get_equity_securities")]
    RegistrationGetEquitySecurities,
    /// Debt securities registrations
    #[strum(serialize = "registration.get_debt_securities")]
    RegistrationGetDebtSecurities,
    /// Merger registrations
    #[strum(serialize = "registration.get_merger_registration")]
    RegistrationGetMergerRegistration,
    /// Split registrations
    #[strum(serialize = "registration.get_split_registration")]
    RegistrationGetSplitRegistration,
}

const REPORT_PARAMS: &[Param] = &[Param::CorpCode, Param::BsnsYear, Param::ReprtCode];
const FINANCIAL_PARAMS: &[Param] = &[
    Param::CorpCode,
    Param::BsnsYear,
    Param::ReprtCode,
    Param::FsDiv,
];
const PERIOD_PARAMS: &[Param] = &[Param::CorpCode, Param::BgnDe, Param::EndDe];

impl Operation {
    /// Service group the operation belongs to.
    pub fn category(&self) -> Category {
        use Operation::*;
        match self {
            DisclosureSearch
            | DisclosureGetCompany
            | DisclosureDownloadDocument
            | DisclosureDownloadCorpCodes => Category::Ds001,
            ReportGetStockChanges
            | ReportGetDividends
            | ReportGetTreasuryStock
            | ReportGetLargestShareholders
            | ReportGetExecutives
            | ReportGetEmployees
            | ReportGetIndividualCompensation
            | ReportGetDirectorCompensation => Category::Ds002,
            FinancialGetSingleAccount
            | FinancialGetMultiAccount
            | FinancialGetFullStatements
            | FinancialDownloadXbrl
            | FinancialGetXbrlTaxonomy
            | FinancialGetIndicators => Category::Ds003,
            ShareholderGetMajorStock | ShareholderGetExecutiveStock => Category::Ds004,
            MajorEventGetPaidCapitalIncrease
            | MajorEventGetBonusIssue
            | MajorEventGetCapitalReduction
            | MajorEventGetConvertibleBond
            | MajorEventGetMergerDecision
            | MajorEventGetSplitDecision => Category::Ds005,
            RegistrationGetEquitySecurities
            | RegistrationGetDebtSecurities
            | RegistrationGetMergerRegistration
            | RegistrationGetSplitRegistration => Category::Ds006,
        }
    }

    /// Request path relative to the API host.
    pub fn path(&self) -> &'static str {
        use Operation::*;
        match self {
            DisclosureSearch => "/api/list.json",
            DisclosureGetCompany => "/api/company.json",
            DisclosureDownloadDocument => "/api/document.xml",
            DisclosureDownloadCorpCodes => "/api/corpCode.xml",
            ReportGetStockChanges => "/api/irdsSttus.json",
            ReportGetDividends => "/api/alotMatter.json",
            ReportGetTreasuryStock => "/api/tesstkAcqsDspsSttus.json",
            ReportGetLargestShareholders => "/api/hyslrSttus.json",
            ReportGetExecutives => "/api/exctvSttus.json",
            ReportGetEmployees => "/api/empSttus.json",
            ReportGetIndividualCompensation => "/api/indvdlByPay.json",
            ReportGetDirectorCompensation => "/api/hmvAuditAllSttus.json",
            FinancialGetSingleAccount => "/api/fnlttSinglAcnt.json",
            FinancialGetMultiAccount => "/api/fnlttMultiAcnt.json",
            FinancialGetFullStatements => "/api/fnlttSinglAcntAll.json",
            FinancialDownloadXbrl => "/api/fnlttXbrl.xml",
            FinancialGetXbrlTaxonomy => "/api/xbrlTaxonomy.json",
            FinancialGetIndicators => "/api/fnlttCmpnyIndx.json",
            ShareholderGetMajorStock => "/api/majorstock.json",
            ShareholderGetExecutiveStock => "/api/elestock.json",
            MajorEventGetPaidCapitalIncrease => "/api/piicDecsn.json",
            MajorEventGetBonusIssue => "/api/fricDecsn.json",
            MajorEventGetCapitalReduction => "/api/crDecsn.json",
            MajorEventGetConvertibleBond => "/api/cvbdIsDecsn.json",
            MajorEventGetMergerDecision => "/api/mgDecsn.json",
            MajorEventGetSplitDecision => "/api/dvDecsn.json",
            RegistrationGetEquitySecurities => "/api/estkRs.json",
            RegistrationGetDebtSecurities => "/api/bdRs.json",
            RegistrationGetMergerRegistration => "/api/mgRs.json",
            RegistrationGetSplitRegistration => "/api/dvRs.json",
        }
    }

    /// Response body shape.
    pub fn shape(&self) -> ResponseShape {
        match self {
            Self::DisclosureGetCompany => ResponseShape::Single,
            Self::DisclosureDownloadDocument
            | Self::DisclosureDownloadCorpCodes
            | Self::FinancialDownloadXbrl => ResponseShape::Bytes,
            _ => ResponseShape::List,
        }
    }

    /// Arguments the operation cannot be called without.
    ///
    /// Search arguments are all optional upstream, so the search operation
    /// reports none.
    pub fn required_params(&self) -> &'static [Param] {
        use Operation::*;
        match self {
            DisclosureSearch | DisclosureDownloadCorpCodes => &[],
            DisclosureGetCompany => &[Param::CorpCode],
            DisclosureDownloadDocument => &[Param::RceptNo],
            ReportGetStockChanges
            | ReportGetDividends
            | ReportGetTreasuryStock
            | ReportGetLargestShareholders
            | ReportGetExecutives
            | ReportGetEmployees
            | ReportGetIndividualCompensation
            | ReportGetDirectorCompensation
            | FinancialGetIndicators => REPORT_PARAMS,
            FinancialGetSingleAccount | FinancialGetMultiAccount | FinancialGetFullStatements => {
                FINANCIAL_PARAMS
            }
            FinancialDownloadXbrl => &[Param::RceptNo, Param::ReprtCode],
            FinancialGetXbrlTaxonomy => &[Param::SjDiv],
            ShareholderGetMajorStock | ShareholderGetExecutiveStock => &[Param::CorpCode],
            MajorEventGetPaidCapitalIncrease
            | MajorEventGetBonusIssue
            | MajorEventGetCapitalReduction
            | MajorEventGetConvertibleBond
            | MajorEventGetMergerDecision
            | MajorEventGetSplitDecision
            | RegistrationGetEquitySecurities
            | RegistrationGetDebtSecurities
            | RegistrationGetMergerRegistration
            | RegistrationGetSplitRegistration => PERIOD_PARAMS,
        }
    }

    /// The search operation is the source of discovered receipt numbers.
    pub fn is_discovery(&self) -> bool {
        matches!(self, Self::DisclosureSearch)
    }
}
