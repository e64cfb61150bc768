//! Core data types for the OpenDART disclosure API.
//!
//! This crate holds the code tables the API speaks in and one record type per
//! response shape. Every record implements [`Record`], which is all the
//! verification harness needs to know about a decoded value.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod constants;
mod disclosure;
mod financial;
mod major_event;
mod record;
mod registration;
mod report;
mod response;
mod shareholder;

pub use constants::{
    BASE_URL, Category, CorpClass, DisclosureType, FinancialStatementType, ReportCode,
    StatementDivision,
};
pub use disclosure::{Company, Disclosure};
pub use financial::{FinancialAccount, FinancialIndicator, XbrlTaxonomy};
pub use major_event::{BonusIssue, CapitalChange, ConvertibleBond, MergerDecision, SplitDecision};
pub use record::Record;
pub use registration::{DebtSecurities, EquitySecurities, MergerRegistration, SplitRegistration};
pub use report::{
    DirectorCompensation, DividendInfo, Employee, Executive, IndividualCompensation,
    LargestShareholder, StockChange, TreasuryStock,
};
pub use response::{ListResponse, StatusEnvelope};
pub use shareholder::{ExecutiveStock, MajorStock};
