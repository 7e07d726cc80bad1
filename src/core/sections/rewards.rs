use super::{ReportContext, ReportLine, Section, SectionData, SectionId, Tone};
use crate::savings::rewards::highest_unlocked;
use crate::savings::{evaluate_tiers, summarize, REWARD_TIERS};

pub struct RewardsSection;

impl Section for RewardsSection {
    fn collect(&self, ctx: &ReportContext) -> Option<SectionData> {
        let total = summarize(&ctx.dataset.records).total_saved;

        let statuses = evaluate_tiers(total, &REWARD_TIERS);
        let headline = match highest_unlocked(&statuses) {
            Some(best) => format!("Top badge: {} {}", best.tier.icon, best.tier.title),
            None => "No badges unlocked yet".to_string(),
        };

        let mut lines = vec![ReportLine::new(headline, Tone::Value)];
        for status in &statuses {
            let tier = status.tier;
            match status.progress_with(ctx.currency) {
                None => lines.push(ReportLine::new(
                    format!("{} {:<16}Unlocked!", tier.icon, tier.title),
                    Tone::Accent(tier.accent),
                )),
                Some(progress) => lines.push(ReportLine::muted(format!(
                    "{} {:<16}{}",
                    tier.icon, tier.title, progress
                ))),
            }
            lines.push(ReportLine::muted(format!("   {}", tier.caption)));
        }

        Some(SectionData {
            title: "Earned Rewards".to_string(),
            lines,
        })
    }

    fn id(&self) -> SectionId {
        SectionId::Rewards
    }
}
