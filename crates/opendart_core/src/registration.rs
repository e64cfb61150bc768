//! DS006 securities registration records.

use crate::record::receipt_record;
use serde::{Deserialize, Serialize};

/// Equity securities registration (`estkRs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquitySecurities {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Share kind
    pub stk_knd: Option<String>,
    /// Shares issued
    pub stk_issustk_isk_cnt: Option<String>,
    /// Issue price
    pub stk_issustk_isk_pr: Option<String>,
    /// Par value
    pub stk_issustk_isk_fv: Option<String>,
    /// Par value total
    pub stk_fvpl: Option<String>,
    /// Issue total
    pub stk_issustk_isk_fvt: Option<String>,
    /// Issue method
    pub stk_issustk_isk_mthn: Option<String>,
}

/// Debt securities registration (`bdRs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtSecurities {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Bond name
    pub bnd_nm: Option<String>,
    /// Face value total
    pub bnd_fta: Option<String>,
    /// Interest rate
    pub bnd_int_rt: Option<String>,
    /// Maturity date
    pub bnd_mtd: Option<String>,
    /// Repayment method
    pub bnd_repay: Option<String>,
    /// Guaranteed
    pub bnd_grn: Option<String>,
    /// Guarantor
    pub bnd_grncpn: Option<String>,
}

/// Merger registration (`mgRs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergerRegistration {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Counterparty
    pub mg_cpn: Option<String>,
    /// Merger ratio
    pub mg_rt: Option<String>,
    /// Merger method
    pub mg_mthn: Option<String>,
    /// Purpose
    pub mg_pp: Option<String>,
    /// Shares issued for the merger
    pub mg_stk: Option<String>,
    /// Merger date
    pub mg_cdd: Option<String>,
}

/// Split registration (`dvRs`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRegistration {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Split method
    pub dv_mthn: Option<String>,
    /// Newly formed company
    pub dv_nspcpn: Option<String>,
    /// Split ratio
    pub dv_rt: Option<String>,
    /// Purpose
    pub dv_pp: Option<String>,
    /// Split date
    pub dv_cdd: Option<String>,
}

receipt_record!(
    EquitySecurities,
    DebtSecurities,
    MergerRegistration,
    SplitRegistration,
);
