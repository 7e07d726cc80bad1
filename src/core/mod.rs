pub mod report;
pub mod sections;

pub use report::{DashboardReport, ReportGenerator};
pub use sections::{
    dashboard_sections, faq_sections, pricing_sections, ReportContext, Section, SectionData,
    SectionId,
};
