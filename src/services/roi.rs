use crate::models::{RoiInputs, RoiModel, RoiResult};
use crate::services::format::{format_number, round_half_up};

/// Payback reported when the projected benefit never covers the cost.
pub const PAYBACK_SENTINEL: i64 = 999;

/// Projects the monthly cost of slow replies against the service price.
/// Any input is accepted; degenerate inputs give degenerate numbers.
pub fn calculate(model: &RoiModel, inputs: &RoiInputs) -> RoiResult {
    let days = model.days_per_month;
    let cost = model.monthly_service_cost;

    let monthly_inquiries = inputs.daily_inquiries * days;
    let lost_inquiries = round_half_up(monthly_inquiries * model.loss_rate_from_slow_reply);
    let lost_sales = round_half_up(lost_inquiries * model.base_conversion_rate);
    let opportunity_cost = lost_sales * inputs.average_ticket;

    let monthly_hours_recovered = inputs.daily_hours_spent * days;
    let time_value = monthly_hours_recovered * model.estimated_hourly_value;

    let total_benefit = opportunity_cost + time_value;
    let monthly_savings = total_benefit - cost;
    let roi_percent = round_half_up((total_benefit - cost) / cost * 100.0) as i64;

    let daily_benefit = total_benefit / days;
    let payback_days = if daily_benefit > 0.0 {
        (cost / daily_benefit).ceil() as i64
    } else {
        PAYBACK_SENTINEL
    };

    let worthwhile = monthly_savings > 0.0;

    let message = recommendation(&Projection {
        opportunity_cost,
        monthly_savings,
        payback_days,
        monthly_hours_recovered,
        worthwhile,
    });

    RoiResult {
        lost_sales: lost_sales as i64,
        opportunity_cost,
        monthly_savings,
        roi_percent,
        payback_days,
        worthwhile,
        message,
        estimated_hourly_value: model.estimated_hourly_value,
        monthly_hours_recovered,
    }
}

struct Projection {
    opportunity_cost: f64,
    monthly_savings: f64,
    payback_days: i64,
    monthly_hours_recovered: f64,
    worthwhile: bool,
}

fn recommendation(p: &Projection) -> String {
    // es-AR grouping with up to three decimals; hours are printed as computed.
    let money = |n: f64| format!("${}", format_number(n.abs()));
    let hours = p.monthly_hours_recovered;

    if !p.worthwhile {
        return "Con tu volumen actual, Nordia podría no ser la mejor inversión todavía. Pero si tu negocio crece, ¡volvé a calcular!".to_string();
    }

    if p.payback_days <= 7 {
        return format!(
            "🔥 Estás perdiendo {}/mes en ventas. Nordia se paga solo en {} días. Además, recuperás {hours}hs de tu tiempo cada mes.",
            money(p.opportunity_cost),
            p.payback_days,
        );
    }

    if p.payback_days <= 15 {
        return format!(
            "💰 Perdés aproximadamente {}/mes por no responder a tiempo. Con Nordia ahorrás {}/mes y recuperás {hours}hs de tu vida.",
            money(p.opportunity_cost),
            money(p.monthly_savings),
        );
    }

    format!(
        "📈 Tu costo de oportunidad es {}/mes. Nordia te ayuda a recuperar esas ventas y te libera {hours}hs mensuales para enfocarte en lo importante.",
        money(p.opportunity_cost),
    )
}

/// Calculator form state: inputs plus the last explicitly computed result.
/// Any input change drops the result until `calculate` runs again.
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    model: RoiModel,
    inputs: RoiInputs,
    result: Option<RoiResult>,
}

impl CalculatorForm {
    pub fn new(model: RoiModel, inputs: RoiInputs) -> Self {
        Self {
            model,
            inputs,
            result: None,
        }
    }

    pub fn inputs(&self) -> &RoiInputs {
        &self.inputs
    }

    pub fn result(&self) -> Option<&RoiResult> {
        self.result.as_ref()
    }

    pub fn set_daily_inquiries(&mut self, value: f64) {
        self.inputs.daily_inquiries = value;
        self.result = None;
    }

    pub fn set_average_ticket(&mut self, value: f64) {
        self.inputs.average_ticket = value;
        self.result = None;
    }

    pub fn set_daily_hours_spent(&mut self, value: f64) {
        self.inputs.daily_hours_spent = value;
        self.result = None;
    }

    pub fn calculate(&mut self) -> &RoiResult {
        self.result.insert(calculate(&self.model, &self.inputs))
    }
}
