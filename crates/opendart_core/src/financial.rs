//! DS003 financial statement records.

use crate::Record;
use crate::record::receipt_record;
use serde::{Deserialize, Serialize};

/// One account line from the single, multi or full statement endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialAccount {
    /// Receipt number
    pub rcept_no: String,
    /// Report code
    pub reprt_code: Option<String>,
    /// Business year
    pub bsns_year: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Stock ticker
    pub stock_code: Option<String>,
    /// Consolidated or separate (CFS/OFS)
    pub fs_div: Option<String>,
    /// Consolidated or separate, display name
    pub fs_nm: Option<String>,
    /// Statement division (BS/IS/CIS/CF/SCE)
    pub sj_div: Option<String>,
    /// Statement name
    pub sj_nm: Option<String>,
    /// Account id
    pub account_id: Option<String>,
    /// Account name
    pub account_nm: Option<String>,
    /// Account detail
    pub account_detail: Option<String>,
    /// Current term name
    pub thstrm_nm: Option<String>,
    /// Current term amount
    pub thstrm_amount: Option<String>,
    /// Current term cumulative amount
    pub thstrm_add_amount: Option<String>,
    /// Previous term name
    pub frmtrm_nm: Option<String>,
    /// Previous term amount
    pub frmtrm_amount: Option<String>,
    /// Previous quarter name
    pub frmtrm_q_nm: Option<String>,
    /// Previous quarter amount
    pub frmtrm_q_amount: Option<String>,
    /// Previous term cumulative amount
    pub frmtrm_add_amount: Option<String>,
    /// Term before previous, name
    pub bfefrmtrm_nm: Option<String>,
    /// Term before previous, amount
    pub bfefrmtrm_amount: Option<String>,
    /// Sort order
    pub ord: Option<String>,
    /// Currency
    pub currency: Option<String>,
}

/// XBRL taxonomy entry (`xbrlTaxonomy`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XbrlTaxonomy {
    /// Statement division
    pub sj_div: String,
    /// Account id
    pub account_id: Option<String>,
    /// Account name
    pub account_nm: Option<String>,
    /// Effective date
    pub bsns_de: Option<String>,
    /// Korean label
    pub label_kor: Option<String>,
    /// English label
    pub label_eng: Option<String>,
    /// Data type
    pub data_tp: Option<String>,
    /// IFRS reference
    pub ifrs_ref: Option<String>,
}

impl Record for XbrlTaxonomy {
    fn type_name(&self) -> &'static str {
        "XbrlTaxonomy"
    }
}

/// Financial indicator (`fnlttCmpnyIndx`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialIndicator {
    /// Receipt number
    pub rcept_no: Option<String>,
    /// Business year
    pub bsns_year: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Stock ticker
    pub stock_code: Option<String>,
    /// Report code
    pub reprt_code: Option<String>,
    /// Settlement date
    pub stlm_dt: Option<String>,
    /// Indicator class code
    pub idx_cl_code: Option<String>,
    /// Indicator class name
    pub idx_cl_nm: Option<String>,
    /// Indicator code
    pub idx_code: Option<String>,
    /// Indicator name
    pub idx_nm: Option<String>,
    /// Indicator value
    pub idx_val: Option<String>,
}

impl Record for FinancialIndicator {
    fn type_name(&self) -> &'static str {
        "FinancialIndicator"
    }

    fn receipt_no(&self) -> Option<&str> {
        self.rcept_no.as_deref().filter(|no| !no.is_empty())
    }
}

receipt_record!(FinancialAccount);
