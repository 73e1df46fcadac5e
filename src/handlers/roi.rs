use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::models::roi::{
    AVERAGE_TICKET_LABEL, AVERAGE_TICKET_RANGE, DAILY_HOURS_LABEL, DAILY_HOURS_RANGE,
    DAILY_INQUIRIES_LABEL, DAILY_INQUIRIES_RANGE,
};
use crate::models::{InputLabel, InputRange, RoiInputs, RoiResult};
use crate::services::format::{
    format_currency, format_daily_cost, format_plan_price, format_value_comparison,
    CurrencyFormat, PlanPeriod,
};
use crate::services::roi;
use crate::state::AppState;

#[derive(Serialize)]
pub struct FormattedAmounts {
    opportunity_cost: String,
    monthly_savings: String,
    monthly_service_cost: String,
}

#[derive(Serialize)]
pub struct CalculateResponse {
    #[serde(flatten)]
    result: RoiResult,
    formatted: FormattedAmounts,
}

// POST /api/roi/calculate
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<RoiInputs>,
) -> Json<CalculateResponse> {
    let result = roi::calculate(&state.roi_model, &inputs);

    tracing::info!(
        daily_inquiries = inputs.daily_inquiries,
        average_ticket = inputs.average_ticket,
        daily_hours_spent = inputs.daily_hours_spent,
        roi_percent = result.roi_percent,
        worthwhile = result.worthwhile,
        "roi calculated"
    );

    let per_month = CurrencyFormat::with_suffix("/mes");
    let formatted = FormattedAmounts {
        opportunity_cost: format_currency(result.opportunity_cost, &per_month),
        monthly_savings: format_currency(result.monthly_savings, &per_month),
        monthly_service_cost: format_currency(state.roi_model.monthly_service_cost, &per_month),
    };

    Json(CalculateResponse { result, formatted })
}

#[derive(Serialize)]
pub struct Field {
    range: InputRange,
    label: InputLabel,
}

#[derive(Serialize)]
pub struct Fields {
    daily_inquiries: Field,
    average_ticket: Field,
    daily_hours_spent: Field,
}

#[derive(Serialize)]
pub struct Prices {
    monthly: f64,
    founder: f64,
    founder_months: u32,
    monthly_label: String,
    founder_label: String,
    founder_per_month: String,
    daily_cost: String,
}

#[derive(Serialize)]
pub struct RangesResponse {
    fields: Fields,
    defaults: RoiInputs,
    prices: Prices,
}

// GET /api/roi/ranges
pub async fn ranges(State(state): State<Arc<AppState>>) -> Json<RangesResponse> {
    let model = &state.roi_model;

    Json(RangesResponse {
        fields: Fields {
            daily_inquiries: Field {
                range: DAILY_INQUIRIES_RANGE,
                label: DAILY_INQUIRIES_LABEL,
            },
            average_ticket: Field {
                range: AVERAGE_TICKET_RANGE,
                label: AVERAGE_TICKET_LABEL,
            },
            daily_hours_spent: Field {
                range: DAILY_HOURS_RANGE,
                label: DAILY_HOURS_LABEL,
            },
        },
        defaults: RoiInputs::default(),
        prices: Prices {
            monthly: model.monthly_service_cost,
            founder: model.founder_price,
            founder_months: model.founder_months,
            monthly_label: format_plan_price(model.monthly_service_cost, PlanPeriod::Month),
            founder_label: format_plan_price(model.founder_price, PlanPeriod::OneTime),
            founder_per_month: format_value_comparison(model.founder_price, model.founder_months),
            daily_cost: format_daily_cost(model.monthly_service_cost),
        },
    })
}
