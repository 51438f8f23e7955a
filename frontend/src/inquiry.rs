//! Which inquiry form a services page button opens.

use crate::content::{plan_named, PricingPlan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryKind {
    General,
    Trial,
    Consultation,
    Pricing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inquiry {
    pub kind: InquiryKind,
    /// Service or plan the visitor asked about.
    pub subject: String,
    pub price: Option<String>,
}

impl Inquiry {
    pub fn general(service: &str) -> Self {
        Self {
            kind: InquiryKind::General,
            subject: service.to_string(),
            price: None,
        }
    }

    pub fn trial() -> Self {
        Self {
            kind: InquiryKind::Trial,
            subject: "Free Trial".to_string(),
            price: None,
        }
    }

    pub fn consultation() -> Self {
        Self {
            kind: InquiryKind::Consultation,
            subject: "Free Consultation".to_string(),
            price: None,
        }
    }

    pub fn plan(name: &str, price: &str) -> Self {
        Self {
            kind: InquiryKind::Pricing,
            subject: name.to_string(),
            price: Some(price.to_string()),
        }
    }

    pub fn for_plan(plan: &PricingPlan, yearly: bool) -> Self {
        let price = if yearly { plan.yearly_price } else { plan.price };
        Self::plan(plan.name, price)
    }

    pub fn title(&self) -> String {
        match self.kind {
            InquiryKind::Trial => "Start Free Trial".to_string(),
            InquiryKind::Consultation => "Free Consultation".to_string(),
            InquiryKind::Pricing | InquiryKind::General => format!("Get Started with {}", self.subject),
        }
    }

    pub fn description(&self) -> &'static str {
        match self.kind {
            InquiryKind::Trial => "Experience our premium services risk-free for 7 days. No credit card required.",
            InquiryKind::Consultation => {
                "Schedule a free consultation call with our experts to discuss your business goals."
            }
            InquiryKind::Pricing => "Let's get you started with the perfect plan for your business.",
            InquiryKind::General => "Tell us about your project and we'll get back to you within 24 hours.",
        }
    }

    /// Initial value of the form's service field.
    pub fn seed_service(&self) -> &str {
        &self.subject
    }
}

/// Routes a "Get Started" click on a service card. Subscription style
/// services map onto a pricing plan, the rest ask about the service itself.
pub fn inquiry_for_service(title: &str) -> Inquiry {
    let plan = |name: &str, yearly: bool| match plan_named(name) {
        Some(plan) => Inquiry::for_plan(&plan, yearly),
        None => Inquiry::general(title),
    };
    match title {
        "Bundle Kits" => plan("Professional", false),
        "7-Day Free Trial" => Inquiry::trial(),
        "Monthly Subscription" => plan("Starter", false),
        "Yearly Subscription" => plan("Starter", true),
        other => Inquiry::general(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn subscriptions_route_to_plans() {
        assert_eq!(inquiry_for_service("Bundle Kits"), Inquiry::plan("Professional", "$1,200"));
        assert_eq!(inquiry_for_service("Monthly Subscription"), Inquiry::plan("Starter", "$800"));
        assert_eq!(inquiry_for_service("Yearly Subscription"), Inquiry::plan("Starter", "$560"));
    }

    #[test]
    fn trial_and_plain_services() {
        assert_eq!(inquiry_for_service("7-Day Free Trial").kind, InquiryKind::Trial);
        let seo = inquiry_for_service("Email Marketing");
        assert_eq!(seo.kind, InquiryKind::General);
        assert_eq!(seo.title(), "Get Started with Email Marketing");
        assert_eq!(seo.seed_service(), "Email Marketing");
    }

    #[test]
    fn fixed_titles() {
        assert_eq!(Inquiry::trial().title(), "Start Free Trial");
        assert_eq!(Inquiry::consultation().title(), "Free Consultation");
        assert_eq!(Inquiry::plan("Enterprise", "$2,000").title(), "Get Started with Enterprise");
    }
}
