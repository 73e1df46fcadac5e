use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RoiInputs {
    /// WhatsApp inquiries received per day.
    pub daily_inquiries: f64,
    /// Average sale value in ARS.
    pub average_ticket: f64,
    /// Hours per day spent answering messages.
    pub daily_hours_spent: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            daily_inquiries: DAILY_INQUIRIES_RANGE.default,
            average_ticket: AVERAGE_TICKET_RANGE.default,
            daily_hours_spent: DAILY_HOURS_RANGE.default,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiResult {
    pub lost_sales: i64,
    pub opportunity_cost: f64,
    pub monthly_savings: f64,
    pub roi_percent: i64,
    pub payback_days: i64,
    pub worthwhile: bool,
    pub message: String,
    pub estimated_hourly_value: f64,
    pub monthly_hours_recovered: f64,
}

/// Fixed constants of the estimator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiModel {
    pub loss_rate_from_slow_reply: f64,
    pub base_conversion_rate: f64,
    pub estimated_hourly_value: f64,
    pub monthly_service_cost: f64,
    pub founder_price: f64,
    pub founder_months: u32,
    pub days_per_month: f64,
}

impl Default for RoiModel {
    fn default() -> Self {
        Self {
            loss_rate_from_slow_reply: 0.15,
            base_conversion_rate: 0.20,
            estimated_hourly_value: 3500.0,
            monthly_service_cost: 18000.0,
            founder_price: 15000.0,
            founder_months: 3,
            days_per_month: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InputLabel {
    pub label: &'static str,
    pub helper: &'static str,
    pub unit: &'static str,
}

pub const DAILY_INQUIRIES_RANGE: InputRange = InputRange {
    min: 1.0,
    max: 100.0,
    step: 1.0,
    default: 15.0,
};

pub const AVERAGE_TICKET_RANGE: InputRange = InputRange {
    min: 1000.0,
    max: 100000.0,
    step: 500.0,
    default: 5000.0,
};

pub const DAILY_HOURS_RANGE: InputRange = InputRange {
    min: 0.5,
    max: 8.0,
    step: 0.5,
    default: 2.0,
};

pub const DAILY_INQUIRIES_LABEL: InputLabel = InputLabel {
    label: "Consultas por día",
    helper: "Mensajes de WhatsApp que recibís por día",
    unit: "consultas/día",
};

pub const AVERAGE_TICKET_LABEL: InputLabel = InputLabel {
    label: "Ticket promedio",
    helper: "Valor promedio de cada venta",
    unit: "ARS",
};

pub const DAILY_HOURS_LABEL: InputLabel = InputLabel {
    label: "Horas respondiendo",
    helper: "Tiempo diario que dedicás a WhatsApp",
    unit: "horas/día",
};
