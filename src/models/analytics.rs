use serde::{Deserialize, Serialize};

/// Longest FAQ question text forwarded to GA.
pub const MAX_QUESTION_TEXT: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", content = "params", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    HeroCtaClick(HeroCta),
    PricingPlanSelected(PricingPlan),
    FaqItemOpened(FaqItem),
    WhatsappContactClicked(WhatsAppContact),
    TestimonialSlideViewed(TestimonialSlide),
    DemoVideoPlayed(DemoVideo),
    ScrollDepthReached(ScrollDepth),
    FormSubmitted(FormSubmitted),
    PageView(PageView),
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::HeroCtaClick(_) => "hero_cta_click",
            AnalyticsEvent::PricingPlanSelected(_) => "pricing_plan_selected",
            AnalyticsEvent::FaqItemOpened(_) => "faq_item_opened",
            AnalyticsEvent::WhatsappContactClicked(_) => "whatsapp_contact_clicked",
            AnalyticsEvent::TestimonialSlideViewed(_) => "testimonial_slide_viewed",
            AnalyticsEvent::DemoVideoPlayed(_) => "demo_video_played",
            AnalyticsEvent::ScrollDepthReached(_) => "scroll_depth_reached",
            AnalyticsEvent::FormSubmitted(_) => "form_submitted",
            AnalyticsEvent::PageView(_) => "page_view",
        }
    }

    /// Parameters as a flat JSON object, the shape GA expects.
    pub fn params(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .ok()
            .and_then(|mut v| v.get_mut("params").map(serde_json::Value::take))
            .unwrap_or_else(|| serde_json::json!({}))
    }

    /// Applies the length limits GA imposes on free-text parameters.
    pub fn sanitized(mut self) -> Self {
        if let AnalyticsEvent::FaqItemOpened(ref mut item) = self {
            if item.question_text.chars().count() > MAX_QUESTION_TEXT {
                item.question_text = item.question_text.chars().take(MAX_QUESTION_TEXT).collect();
            }
        }
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ButtonPosition {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HeroCta {
    pub button_text: String,
    #[serde(default = "default_button_position")]
    pub button_position: ButtonPosition,
}

fn default_button_position() -> ButtonPosition {
    ButtonPosition::Primary
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Founder,
    Monthly,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingPlan {
    pub plan_id: PlanId,
    pub plan_name: String,
    pub plan_price: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FaqCategory {
    #[serde(rename = "Técnico")]
    Technical,
    #[serde(rename = "Comercial")]
    Commercial,
    #[serde(rename = "Funcional")]
    Functional,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaqItem {
    pub question_index: u32,
    pub question_text: String,
    pub category: FaqCategory,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ContactSource {
    Hero,
    Pricing,
    Floating,
    Faq,
    FinalCta,
    Navbar,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WhatsAppContact {
    pub source: ContactSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestimonialSlide {
    pub slide_index: u32,
    pub testimonial_name: String,
    pub testimonial_business: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoVideo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_percentage: Option<f64>,
}

/// Scroll milestones; anything else is rejected at deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "u8", into = "u8")]
pub enum DepthPercentage {
    Quarter,
    Half,
    ThreeQuarters,
    Full,
}

impl TryFrom<u8> for DepthPercentage {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            25 => Ok(DepthPercentage::Quarter),
            50 => Ok(DepthPercentage::Half),
            75 => Ok(DepthPercentage::ThreeQuarters),
            100 => Ok(DepthPercentage::Full),
            other => Err(format!("unsupported scroll depth: {other}")),
        }
    }
}

impl From<DepthPercentage> for u8 {
    fn from(value: DepthPercentage) -> Self {
        match value {
            DepthPercentage::Quarter => 25,
            DepthPercentage::Half => 50,
            DepthPercentage::ThreeQuarters => 75,
            DepthPercentage::Full => 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScrollDepth {
    pub depth_percentage: DepthPercentage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_reached: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormSubmitted {
    pub form_id: String,
    pub form_name: String,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageView {
    pub page_path: String,
    pub page_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
}
