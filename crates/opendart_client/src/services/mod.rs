//! Per-service endpoint groups.

mod disclosure;
mod financial;
mod major_event;
mod registration;
mod report;
mod shareholder;

pub use disclosure::DisclosureService;
pub use financial::FinancialService;
pub use major_event::MajorEventService;
pub use registration::RegistrationService;
pub use report::ReportService;
pub use shareholder::ShareholderService;
