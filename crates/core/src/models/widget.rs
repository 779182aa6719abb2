use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::options::SelectorLayout;

/// Everything a client needs to render the booking box for one event:
/// resolved display options, prices, and the bookable dates with their
/// remaining capacity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetResponse {
    pub event_id: Uuid,
    pub headline: String,
    pub name: String,
    pub price: f64,
    pub price_display: String,
    pub price_hint: Option<String>,
    pub button_text: String,
    pub button_class: String,
    pub select_label: String,
    pub select_class: String,
    pub select_layout: SelectorLayout,
    pub amount_input_label: String,
    pub amount_input_class: String,
    pub times: Vec<WidgetTimeEntry>,
    /// Present when the event has no bookable dates, or when forced by the
    /// `ind_req_force` option.
    pub individual_request: Option<IndividualRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetTimeEntry {
    pub id: Uuid,
    /// `YYYY-MM-DD` for date-only slots, RFC 3339 otherwise.
    pub label: String,
    pub free_slots: i64,
    pub price: f64,
    pub price_display: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualRequest {
    pub label: String,
    pub url: String,
}
