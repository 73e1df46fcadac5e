use serde::{Deserialize, Serialize};

use crate::models::RoiModel;
use crate::services::format::{format_currency, format_plan_price, CurrencyFormat, PlanPeriod};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("El número debe tener entre 10 y 14 dígitos")]
    Length(usize),
}

/// `wa.me` for browsers, `whatsapp://` to open the native app directly.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyle {
    #[default]
    Web,
    Native,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredefinedMessage {
    HeroInquiry,
    FounderPlan,
    MonthlyPlan,
    GeneralInquiry,
    FromFaq,
    RequestDemo,
    Support,
}

impl PredefinedMessage {
    pub const ALL: [PredefinedMessage; 7] = [
        PredefinedMessage::HeroInquiry,
        PredefinedMessage::FounderPlan,
        PredefinedMessage::MonthlyPlan,
        PredefinedMessage::GeneralInquiry,
        PredefinedMessage::FromFaq,
        PredefinedMessage::RequestDemo,
        PredefinedMessage::Support,
    ];

    /// Prefilled text. Plan messages quote the prices in `pricing`.
    pub fn text(&self, pricing: &RoiModel) -> String {
        match self {
            PredefinedMessage::HeroInquiry => "Hola! Vi la landing de Nordia y me interesa saber más sobre la IA para WhatsApp. ¿Me pueden dar info?".to_string(),
            PredefinedMessage::FounderPlan => format!(
                "Hola! Quiero contratar el Plan Founder de Nordia ({} por {} meses). ¿Cómo sigo?",
                format_currency(pricing.founder_price, &CurrencyFormat::default()),
                pricing.founder_months,
            ),
            PredefinedMessage::MonthlyPlan => format!(
                "Hola! Quiero contratar el Plan Mensual de Nordia ({}). ¿Cómo sigo?",
                format_plan_price(pricing.monthly_service_cost, PlanPeriod::Month),
            ),
            PredefinedMessage::GeneralInquiry => "Hola! Tengo una consulta sobre Nordia WhatsApp IA.".to_string(),
            PredefinedMessage::FromFaq => "Hola! Estuve viendo las preguntas frecuentes de Nordia pero tengo otra duda...".to_string(),
            PredefinedMessage::RequestDemo => "Hola! Me gustaría ver una demo de Nordia WhatsApp IA. ¿Es posible?".to_string(),
            PredefinedMessage::Support => "Hola! Soy cliente de Nordia y necesito soporte.".to_string(),
        }
    }
}

pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Brings an Argentine number to the `549 + area + number` form WhatsApp
/// expects for mobiles.
pub fn normalize_argentine_phone(phone: &str) -> Result<String, PhoneError> {
    let cleaned = digits_only(phone);
    let len = cleaned.len();

    if !(10..=14).contains(&len) {
        return Err(PhoneError::Length(len));
    }

    if cleaned.starts_with("549") && len >= 12 {
        return Ok(cleaned);
    }
    if let Some(rest) = cleaned.strip_prefix("54").filter(|_| !cleaned.starts_with("549")) {
        return Ok(format!("549{rest}"));
    }
    if cleaned.starts_with('9') {
        return Ok(format!("54{cleaned}"));
    }
    if len == 10 {
        return Ok(format!("549{cleaned}"));
    }

    Ok(cleaned)
}

/// Percent-encodes a prefilled message, including emoji and line breaks.
pub fn encode_message(message: &str) -> String {
    urlencoding::encode(message).into_owned()
}

pub fn generate_link(phone: &str, message: &str, style: LinkStyle) -> String {
    let phone = normalize_argentine_phone(phone).unwrap_or_else(|_| digits_only(phone));
    let text = encode_message(message);

    match style {
        LinkStyle::Web => format!("https://wa.me/{phone}?text={text}"),
        LinkStyle::Native => format!("whatsapp://send?phone={phone}&text={text}"),
    }
}

pub fn predefined_link(
    phone: &str,
    message: PredefinedMessage,
    pricing: &RoiModel,
    style: LinkStyle,
) -> String {
    generate_link(phone, &message.text(pricing), style)
}

/// `5493794281273` becomes `+54 9 379 428-1273`, a bare 10-digit number
/// becomes `379 428-1273`. Anything else is returned untouched.
pub fn format_phone_display(phone: &str) -> String {
    let digits = digits_only(phone);

    if digits.len() == 13 && digits.starts_with("549") {
        return format!(
            "+54 9 {} {}-{}",
            &digits[3..6],
            &digits[6..9],
            &digits[9..]
        );
    }

    if digits.len() == 10 {
        return format!("{} {}-{}", &digits[0..3], &digits[3..6], &digits[6..]);
    }

    phone.to_string()
}
