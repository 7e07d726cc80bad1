use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

static FAQS: [FaqEntry; 5] = [
    FaqEntry {
        question: "How accurate is your traffic data?",
        answer: "Our traffic data is sourced from multiple reliable providers including MapmyIndia, Google Maps, and crowd-sourced information. We update traffic conditions every 2-5 minutes in major cities and every 15 minutes in other areas.",
    },
    FaqEntry {
        question: "Does your platform work offline?",
        answer: "Yes, our mobile app allows drivers to download routes for offline use. While real-time updates won't be available without connectivity, the basic navigation features will continue to work.",
    },
    FaqEntry {
        question: "Can I integrate with my existing fleet management software?",
        answer: "Yes, our Enterprise plan includes API access and custom integrations with major fleet management solutions. Our team will work with you to ensure smooth data flow between systems.",
    },
    FaqEntry {
        question: "How do you calculate toll costs?",
        answer: "We maintain a comprehensive database of toll plazas across India, with up-to-date pricing based on vehicle types. Our system calculates toll costs as part of the route optimization process, allowing you to choose routes based on time, distance, or total cost including tolls.",
    },
    FaqEntry {
        question: "Is there a free trial available?",
        answer: "Yes, we offer a 14-day free trial of our Pro plan so you can experience the benefits of Last Mile before committing. No credit card is required to start your trial.",
    },
];

pub fn faqs() -> &'static [FaqEntry] {
    &FAQS
}
