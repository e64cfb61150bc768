//! Code tables used by OpenDART request parameters and responses.

use serde::{Deserialize, Serialize};

/// Production API host.
pub const BASE_URL: &str = "https://opendart.fss.or.kr";

/// Periodic report codes (`reprt_code`).
///
/// # Examples
///
/// ```
/// use opendart_core::ReportCode;
///
/// assert_eq!(ReportCode::Annual.as_ref(), "11011");
/// assert_eq!("11013".parse::<ReportCode>().unwrap(), ReportCode::Q1);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
pub enum ReportCode {
    /// First quarter report
    #[strum(serialize = "11013")]
    #[serde(rename = "11013")]
    Q1,
    /// Half-year report
    #[strum(serialize = "11012")]
    #[serde(rename = "11012")]
    Half,
    /// Third quarter report
    #[strum(serialize = "11014")]
    #[serde(rename = "11014")]
    Q3,
    /// Annual business report
    #[strum(serialize = "11011")]
    #[serde(rename = "11011")]
    Annual,
}

/// Corporation market classification (`corp_cls`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumString,
    strum::Display,
)]
pub enum CorpClass {
    /// KOSPI listed
    #[strum(serialize = "Y")]
    #[serde(rename = "Y")]
    Kospi,
    /// KOSDAQ listed
    #[strum(serialize = "K")]
    #[serde(rename = "K")]
    Kosdaq,
    /// KONEX listed
    #[strum(serialize = "N")]
    #[serde(rename = "N")]
    Konex,
    /// Everything else
    #[strum(serialize = "E")]
    #[serde(rename = "E")]
    Etc,
}

/// Disclosure type filter (`pblntf_ty`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumString,
    strum::Display,
)]
pub enum DisclosureType {
    /// A: periodic disclosure
    #[strum(serialize = "A")]
    #[serde(rename = "A")]
    Periodic,
    /// B: major event report
    #[strum(serialize = "B")]
    #[serde(rename = "B")]
    MajorEvent,
    /// C: issuance disclosure
    #[strum(serialize = "C")]
    #[serde(rename = "C")]
    Issuance,
    /// D: shareholding disclosure
    #[strum(serialize = "D")]
    #[serde(rename = "D")]
    Shareholding,
    /// E: other disclosure
    #[strum(serialize = "E")]
    #[serde(rename = "E")]
    Other,
    /// F: external audit
    #[strum(serialize = "F")]
    #[serde(rename = "F")]
    ExternalAudit,
    /// G: fund disclosure
    #[strum(serialize = "G")]
    #[serde(rename = "G")]
    Fund,
    /// H: asset securitization
    #[strum(serialize = "H")]
    #[serde(rename = "H")]
    AssetSecuritization,
    /// I: exchange disclosure
    #[strum(serialize = "I")]
    #[serde(rename = "I")]
    Exchange,
    /// J: fair trade commission
    #[strum(serialize = "J")]
    #[serde(rename = "J")]
    FairTrade,
}

/// Consolidated or separate statements (`fs_div`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumString,
    strum::Display,
)]
pub enum FinancialStatementType {
    /// Consolidated
    #[strum(serialize = "CFS")]
    #[serde(rename = "CFS")]
    Consolidated,
    /// Separate
    #[strum(serialize = "OFS")]
    #[serde(rename = "OFS")]
    Separate,
}

/// Financial statement division (`sj_div`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumString,
    strum::Display,
)]
pub enum StatementDivision {
    /// Balance sheet
    #[strum(serialize = "BS")]
    #[serde(rename = "BS")]
    BalanceSheet,
    /// Income statement
    #[strum(serialize = "IS")]
    #[serde(rename = "IS")]
    IncomeStatement,
    /// Comprehensive income statement
    #[strum(serialize = "CIS")]
    #[serde(rename = "CIS")]
    ComprehensiveIncome,
    /// Cash flow statement
    #[strum(serialize = "CF")]
    #[serde(rename = "CF")]
    CashFlow,
    /// Statement of changes in equity
    #[strum(serialize = "SCE")]
    #[serde(rename = "SCE")]
    ChangesInEquity,
}

/// Service groups of the OpenDART API.
///
/// # Examples
///
/// ```
/// use opendart_core::Category;
///
/// assert_eq!(Category::Ds003.as_ref(), "DS003");
/// assert_eq!(Category::Ds003.description(), "정기보고서 재무정보");
/// assert_eq!("DS005".parse::<Category>().unwrap(), Category::Ds005);
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
    Serialize,
    Deserialize,
    strum::AsRefStr,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// Disclosure information
    Ds001,
    /// Periodic report key information
    Ds002,
    /// Periodic report financial information
    Ds003,
    /// Shareholding disclosure
    Ds004,
    /// Major event report information
    Ds005,
    /// Securities registration information
    Ds006,
}

impl Category {
    /// Korean description as published by the service.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Ds001 => "공시정보",
            Self::Ds002 => "정기보고서 주요정보",
            Self::Ds003 => "정기보고서 재무정보",
            Self::Ds004 => "지분공시 종합정보",
            Self::Ds005 => "주요사항보고서 주요정보",
            Self::Ds006 => "증권신고서 주요정보",
        }
    }
}
