//! DS002 periodic report records.
//!
//! Every record carries the filing's receipt number and the issuer identity,
//! followed by section specific columns. Amounts arrive as formatted strings.

use crate::record::receipt_record;
use serde::{Deserialize, Serialize};

/// Capital increase or reduction history (`irdsSttus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Issue (reduction) date
    pub isu_dcrs_de: Option<String>,
    /// Issue (reduction) form
    pub isu_dcrs_stle: Option<String>,
    /// Share kind
    pub isu_dcrs_stock_knd: Option<String>,
    /// Quantity
    pub isu_dcrs_qy: Option<String>,
    /// Par value per share
    pub isu_dcrs_mstvdv_fval_amount: Option<String>,
    /// Price per share
    pub isu_dcrs_mstvdv_amount: Option<String>,
}

/// Dividend information (`alotMatter`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendInfo {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Item
    pub se: Option<String>,
    /// Share kind
    pub stock_knd: Option<String>,
    /// Current term
    pub thstrm: Option<String>,
    /// Previous term
    pub frmtrm: Option<String>,
    /// Term before previous
    pub lwfr: Option<String>,
}

/// Treasury stock acquisition and disposal (`tesstkAcqsDspsSttus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreasuryStock {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Acquisition method, major
    pub acqs_mth1: Option<String>,
    /// Acquisition method, middle
    pub acqs_mth2: Option<String>,
    /// Acquisition method, minor
    pub acqs_mth3: Option<String>,
    /// Share kind
    pub stock_knd: Option<String>,
    /// Opening quantity
    pub bsis_qy: Option<String>,
    /// Acquired
    pub change_qy_acqs: Option<String>,
    /// Disposed
    pub change_qy_dsps: Option<String>,
    /// Retired
    pub change_qy_incnr: Option<String>,
    /// Closing quantity
    pub trmend_qy: Option<String>,
    /// Remarks
    pub rm: Option<String>,
}

/// Largest shareholder holdings (`hyslrSttus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LargestShareholder {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Holder name
    pub nm: Option<String>,
    /// Relation
    pub relate: Option<String>,
    /// Share kind
    pub stock_knd: Option<String>,
    /// Opening share count
    pub bsis_posesn_stock_co: Option<String>,
    /// Opening stake
    pub bsis_posesn_stock_qota_rt: Option<String>,
    /// Closing share count
    pub trmend_posesn_stock_co: Option<String>,
    /// Closing stake
    pub trmend_posesn_stock_qota_rt: Option<String>,
    /// Remarks
    pub rm: Option<String>,
}

/// Executive roster (`exctvSttus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executive {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Name
    pub nm: Option<String>,
    /// Sex
    pub sexdstn: Option<String>,
    /// Birth year and month
    pub birth_ym: Option<String>,
    /// Position
    pub ofcps: Option<String>,
    /// Registered executive
    pub rgbsn_od_yn: Option<String>,
    /// Full time
    pub fte_yn: Option<String>,
    /// Responsibilities
    pub chrg_job: Option<String>,
    /// Career
    pub main_career: Option<String>,
    /// Relation to largest shareholder
    pub mxmm_shrholdr_relate: Option<String>,
    /// Tenure
    pub hffc_pd: Option<String>,
    /// Term end
    pub tenure_end_on: Option<String>,
}

/// Employee headcount and pay (`empSttus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Business segment
    pub fo_bbm: Option<String>,
    /// Sex
    pub sexdstn: Option<String>,
    /// Pre-reform regular headcount
    pub reform_bfe_emp_co_rgllbr: Option<String>,
    /// Pre-reform contract headcount
    pub reform_bfe_emp_co_cnttk: Option<String>,
    /// Pre-reform other headcount
    pub reform_bfe_emp_co_etc: Option<String>,
    /// Regular headcount
    pub rgllbr_co: Option<String>,
    /// Regular part-time headcount
    pub rgllbr_abacpt_labrr_co: Option<String>,
    /// Contract headcount
    pub cnttk_co: Option<String>,
    /// Contract part-time headcount
    pub cnttk_abacpt_labrr_co: Option<String>,
    /// Total
    pub sm: Option<String>,
    /// Average tenure
    pub avrg_cnwk_sdytrn: Option<String>,
    /// Annual payroll
    pub fyer_salary_totamt: Option<String>,
    /// Average pay per person
    pub jan_salary_am: Option<String>,
    /// Remarks
    pub rm: Option<String>,
}

/// Individual compensation above the disclosure threshold (`indvdlByPay`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualCompensation {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Name
    pub nm: Option<String>,
    /// Position
    pub ofcps: Option<String>,
    /// Total compensation
    pub mendng_totamt: Option<String>,
    /// Items excluded from the total
    pub mendng_totamt_ct_incls_mendng: Option<String>,
}

/// Director and auditor compensation totals (`hmvAuditAllSttus`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorCompensation {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Item
    pub se: Option<String>,
    /// Headcount
    pub nmpr: Option<String>,
    /// Total paid
    pub pymnt_totamt: Option<String>,
    /// Average per person
    pub psn1_avrg_pymnt_amt: Option<String>,
    /// Remarks
    pub rm: Option<String>,
}

receipt_record!(
    StockChange,
    DividendInfo,
    TreasuryStock,
    LargestShareholder,
    Executive,
    Employee,
    IndividualCompensation,
    DirectorCompensation,
);
