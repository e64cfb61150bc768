//! DS004 shareholding records.

use crate::record::receipt_record;
use serde::{Deserialize, Serialize};

/// Large holding report (`majorstock`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MajorStock {
    /// Receipt number
    pub rcept_no: String,
    /// Receipt date
    pub rcept_dt: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Report type
    pub report_tp: Option<String>,
    /// Reporter
    pub repror: Option<String>,
    /// Shares held
    pub stkqy: Option<String>,
    /// Change in shares held
    pub stkqy_irds: Option<String>,
    /// Holding ratio
    pub stkrt: Option<String>,
    /// Change in holding ratio
    pub stkrt_irds: Option<String>,
    /// Shares under major contracts
    pub ctr_stkqy: Option<String>,
    /// Ratio under major contracts
    pub ctr_stkrt: Option<String>,
    /// Reason
    pub report_resn: Option<String>,
}

/// Executive and major shareholder ownership report (`elestock`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutiveStock {
    /// Receipt number
    pub rcept_no: String,
    /// Receipt date
    pub rcept_dt: Option<String>,
    /// Corporation code
    pub corp_code: Option<String>,
    /// Corporation name
    pub corp_name: Option<String>,
    /// Reporter
    pub repror: Option<String>,
    /// Registered executive
    pub isu_exctv_rgist_at: Option<String>,
    /// Position
    pub isu_exctv_ofcps: Option<String>,
    /// Major shareholder
    pub isu_main_shrholdr: Option<String>,
    /// Shares owned
    pub sp_stock_lmp_cnt: Option<String>,
    /// Change in shares owned
    pub sp_stock_lmp_irds_cnt: Option<String>,
    /// Ownership ratio
    pub sp_stock_lmp_rate: Option<String>,
    /// Change in ownership ratio
    pub sp_stock_lmp_irds_rate: Option<String>,
}

receipt_record!(MajorStock, ExecutiveStock);
