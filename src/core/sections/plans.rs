use super::{ReportContext, ReportLine, Section, SectionData, SectionId, Tone};
use crate::pricing::view::{
    PAGE_SUBTITLE, PAGE_TITLE, TRIAL_BUTTON, TRIAL_HEADLINE, TRIAL_PITCH, YEARLY_HINT,
};
use crate::pricing::{BillingCycle, PricingPage};

pub struct PlansSection;

impl Section for PlansSection {
    fn collect(&self, ctx: &ReportContext) -> Option<SectionData> {
        let page = PricingPage::new(ctx.billing);

        let (monthly, yearly) = (BillingCycle::Monthly, BillingCycle::Yearly);
        let toggle = match page.cycle() {
            BillingCycle::Monthly => format!("[{}]  {} {}", monthly, yearly, YEARLY_HINT),
            BillingCycle::Yearly => format!(" {}  [{} {}]", monthly, yearly, YEARLY_HINT),
        };

        let mut lines = vec![
            ReportLine::muted(PAGE_SUBTITLE),
            ReportLine::plain(""),
            ReportLine::new(toggle, Tone::Heading),
        ];

        for view in page.views() {
            lines.push(ReportLine::plain(""));
            let heading = match view.popular_tag() {
                Some(tag) => format!("{}  ({})", view.name, tag),
                None => view.name.to_string(),
            };
            lines.push(ReportLine::new(heading, Tone::Heading));
            lines.push(ReportLine::new(view.price_line(), Tone::Value));
            if let Some(discount) = view.discount {
                lines.push(ReportLine::new(discount, Tone::Positive));
            }
            lines.push(ReportLine::muted(view.plan.description));
            for feature in view.plan.features {
                lines.push(ReportLine::plain(format!("  ✓ {}", feature)));
            }
            lines.push(ReportLine::muted(format!(
                "  [{}] → {}",
                view.plan.button_text, view.route
            )));
        }

        lines.push(ReportLine::plain(""));
        lines.push(ReportLine::new(TRIAL_HEADLINE, Tone::Heading));
        lines.push(ReportLine::muted(TRIAL_PITCH));
        lines.push(ReportLine::muted(format!(
            "  [{}] → {}",
            TRIAL_BUTTON,
            page.trial_route().path()
        )));

        Some(SectionData {
            title: PAGE_TITLE.to_string(),
            lines,
        })
    }

    fn id(&self) -> SectionId {
        SectionId::Plans
    }
}
