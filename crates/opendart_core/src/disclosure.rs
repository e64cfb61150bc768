//! DS001 disclosure records.

use crate::Record;
use serde::{Deserialize, Serialize};

/// One hit from the disclosure search (`list.json`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclosure {
    /// Corporation code (8 digits)
    pub corp_code: String,
    /// Corporation name
    pub corp_name: String,
    /// Stock ticker
    pub stock_code: Option<String>,
    /// Market classification (Y/K/N/E)
    pub corp_cls: Option<String>,
    /// Report title
    pub report_nm: Option<String>,
    /// Receipt number
    pub rcept_no: Option<String>,
    /// Filer name
    pub flr_nm: Option<String>,
    /// Receipt date (YYYYMMDD)
    pub rcept_dt: Option<String>,
    /// Remarks
    pub rm: Option<String>,
}

impl Record for Disclosure {
    fn type_name(&self) -> &'static str {
        "Disclosure"
    }

    fn receipt_no(&self) -> Option<&str> {
        self.rcept_no.as_deref().filter(|no| !no.is_empty())
    }
}

/// Company overview (`company.json`).
///
/// The service returns these fields flattened next to `status` and `message`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Corporation code
    pub corp_code: String,
    /// Official name
    pub corp_name: String,
    /// English name
    pub corp_name_eng: Option<String>,
    /// Stock or short name
    pub stock_name: Option<String>,
    /// Stock ticker for listed companies
    pub stock_code: Option<String>,
    /// CEO name
    pub ceo_nm: Option<String>,
    /// Market classification (Y/K/N/E)
    pub corp_cls: Option<String>,
    /// Corporate registration number
    pub jurir_no: Option<String>,
    /// Business registration number
    pub bizr_no: Option<String>,
    /// Address
    pub adres: Option<String>,
    /// Homepage
    pub hm_url: Option<String>,
    /// IR homepage
    pub ir_url: Option<String>,
    /// Phone number
    pub phn_no: Option<String>,
    /// Fax number
    pub fax_no: Option<String>,
    /// Industry code
    pub induty_code: Option<String>,
    /// Establishment date (YYYYMMDD)
    pub est_dt: Option<String>,
    /// Fiscal month (MM)
    pub acc_mt: Option<String>,
}

impl Record for Company {
    fn type_name(&self) -> &'static str {
        "Company"
    }
}
