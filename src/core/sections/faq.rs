use super::{ReportContext, ReportLine, Section, SectionData, SectionId, Tone};
use crate::pricing::faqs;

pub struct FaqSection;

impl Section for FaqSection {
    fn collect(&self, _ctx: &ReportContext) -> Option<SectionData> {
        let mut lines = vec![ReportLine::muted(
            "Find answers to common questions about our platform and pricing",
        )];
        for entry in faqs() {
            lines.push(ReportLine::plain(""));
            lines.push(ReportLine::new(entry.question, Tone::Heading));
            lines.push(ReportLine::plain(entry.answer));
        }

        Some(SectionData {
            title: "Frequently Asked Questions".to_string(),
            lines,
        })
    }

    fn id(&self) -> SectionId {
        SectionId::Faq
    }
}
