//! DS005 major event decision records.

use crate::record::receipt_record;
use serde::{Deserialize, Serialize};

/// Paid-in capital increase or capital reduction decision (`piicDecsn`, `crDecsn`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapitalChange {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// New common shares
    pub nstk_ostk_cnt: Option<String>,
    /// New other shares
    pub nstk_estk_cnt: Option<String>,
    /// Par value per share
    pub fv_ps: Option<String>,
    /// Common shares outstanding before
    pub bfic_tisstk_ostk: Option<String>,
    /// Other shares outstanding before
    pub bfic_tisstk_estk: Option<String>,
    /// Funding: facilities
    pub fdpp_fclt: Option<String>,
    /// Funding: business acquisition
    pub fdpp_bsninh: Option<String>,
    /// Funding: operations
    pub fdpp_op: Option<String>,
    /// Funding: debt repayment
    pub fdpp_dtrp: Option<String>,
    /// Funding: other securities
    pub fdpp_ocsa: Option<String>,
    /// Funding: other
    pub fdpp_etc: Option<String>,
}

/// Bonus issue decision (`fricDecsn`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusIssue {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// New common shares
    pub nstk_ostk_cnt: Option<String>,
    /// New other shares
    pub nstk_estk_cnt: Option<String>,
    /// Par value per share
    pub fv_ps: Option<String>,
    /// Common shares outstanding before
    pub bfic_tisstk_ostk: Option<String>,
    /// Other shares outstanding before
    pub bfic_tisstk_estk: Option<String>,
    /// Allotment record date
    pub nstk_asstd: Option<String>,
    /// New common shares per share
    pub nstk_ascnt_ps_ostk: Option<String>,
    /// New other shares per share
    pub nstk_ascnt_ps_estk: Option<String>,
    /// Dividend start date
    pub nstk_dividrk: Option<String>,
    /// Certificate delivery date
    pub nstk_dlprd: Option<String>,
    /// Listing date
    pub nstk_lstprd: Option<String>,
    /// Board resolution date
    pub bddd: Option<String>,
    /// Outside directors attending
    pub od_a_at_t: Option<String>,
    /// Outside directors present
    pub od_a_at_b: Option<String>,
    /// Outside directors absent
    pub od_a_at_c: Option<String>,
    /// Audit committee attendance
    pub adt_a_atn: Option<String>,
}

/// Convertible bond issuance decision (`cvbdIsDecsn`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertibleBond {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Series
    pub bd_tm: Option<String>,
    /// Kind
    pub bd_knd: Option<String>,
    /// Face value total
    pub bd_fta: Option<String>,
    /// Funding purpose
    pub atcsc: Option<String>,
    /// Overseas face value total
    pub ovis_fta: Option<String>,
    /// Overseas exchange rate
    pub ovis_fxrt: Option<String>,
    /// Overseas amount in KRW
    pub ovis_fta_crn: Option<String>,
    /// Funding: facilities
    pub fdpp_fclt: Option<String>,
    /// Funding: business acquisition
    pub fdpp_bsninh: Option<String>,
    /// Funding: operations
    pub fdpp_op: Option<String>,
    /// Funding: debt repayment
    pub fdpp_dtrp: Option<String>,
    /// Funding: other securities
    pub fdpp_ocsa: Option<String>,
    /// Funding: other
    pub fdpp_etc: Option<String>,
    /// Coupon rate
    pub bd_intr_ex: Option<String>,
    /// Yield to maturity
    pub bd_intr_sf: Option<String>,
    /// Maturity date
    pub bd_mtd: Option<String>,
    /// Repayment method
    pub bd_repay: Option<String>,
    /// Convertible shares
    pub bd_tm_nstkqy: Option<String>,
    /// Conversion ratio
    pub bd_tm_act_pr: Option<String>,
}

/// Merger decision (`mgDecsn`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergerDecision {
    /// Receipt number
    pub rcept_no: String,
    /// Market classification
    pub corp_cls: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Counterparty
    pub mgcpn: Option<String>,
    /// Merger price
    pub mg_prc: Option<String>,
    /// Merger ratio
    pub mg_rt: Option<String>,
    /// Merger form
    pub mgsc: Option<String>,
    /// Purpose
    pub mg_pp: Option<String>,
    /// Newly formed company
    pub mg_nsp: Option<String>,
    /// Board resolution date
    pub mg_bdddr: Option<String>,
    /// Contract date
    pub mg_ctrcdd: Option<String>,
    /// Shareholder meeting date
    pub mg_shddsr: Option<String>,
    /// Merger date
    pub mg_cdd: Option<String>,
}

/// Split decision (`dvDecsn`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitDecision {
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
    /// Board resolution date
    pub dv_bdddr: Option<String>,
    /// Shareholder meeting date
    pub dv_shddsr: Option<String>,
    /// Split date
    pub dv_cdd: Option<String>,
}

receipt_record!(
    CapitalChange,
    BonusIssue,
    ConvertibleBond,
    MergerDecision,
    SplitDecision,
);
