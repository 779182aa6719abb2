//! Explicit service configuration.
//!
//! Everything the original kept as site-wide mutable options (currency, page
//! URLs, widget texts, rejection messages) is collected here and passed into
//! the API state at construction time.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// ISO 4217 code reported alongside prices.
    pub currency_code: String,
    /// Symbol used when formatting display prices.
    pub currency_symbol: String,
    /// Page the caller is redirected to after an accepted booking.
    pub checkout_page: String,
    /// Page individual requests link to when an event has no bookable dates.
    pub contact_page: String,
    pub messages: RejectionMessages,
    pub widget: WidgetDefaults,
}

/// The two fixed rejection texts returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectionMessages {
    pub not_enough_slots: String,
    pub booked_out: String,
}

/// Default widget texts, overridable per request through widget options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetDefaults {
    pub headline: String,
    pub button_text: String,
    pub select_label: String,
    pub amount_input_label: String,
    pub ind_req_label: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            currency_code: "EUR".to_string(),
            currency_symbol: "€".to_string(),
            checkout_page: "/checkout".to_string(),
            contact_page: "/contact".to_string(),
            messages: RejectionMessages {
                not_enough_slots: "There are not enough free slots for your selection."
                    .to_string(),
                booked_out: "This is now booked out.".to_string(),
            },
            widget: WidgetDefaults {
                headline: "Booking".to_string(),
                button_text: "Book".to_string(),
                select_label: "Dates".to_string(),
                amount_input_label: "People".to_string(),
                ind_req_label: "Individual request".to_string(),
            },
        }
    }
}

impl BookingConfig {
    /// Formats a price for display, e.g. `€ 15.00`.
    pub fn format_price(&self, amount: f64) -> String {
        format!("{} {:.2}", self.currency_symbol, amount)
    }

    /// The checkout redirect for an accepted booking, carrying the booking id
    /// and the anti-forgery token as query parameters.
    pub fn checkout_url(&self, booking_id: Uuid, token: &str) -> String {
        format!(
            "{}?booking={}&token={}",
            self.checkout_page, booking_id, token
        )
    }

    /// The individual-request contact link for an event.
    pub fn individual_request_url(&self, event_name: &str) -> String {
        format!("{}?subject={}", self.contact_page, event_name)
    }
}
