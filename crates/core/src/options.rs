//! Widget display options.
//!
//! The recognized option set is closed and enumerated; unknown keys are
//! rejected rather than assigned onto fields dynamically.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::BookingConfig;
use crate::errors::{BookingError, BookingResult};

/// How the date selector is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorLayout {
    Dropdown,
    Bigdropdown,
    Radiolist,
    Styledlist,
}

impl Default for SelectorLayout {
    fn default() -> Self {
        SelectorLayout::Dropdown
    }
}

impl FromStr for SelectorLayout {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dropdown" => Ok(SelectorLayout::Dropdown),
            "bigdropdown" => Ok(SelectorLayout::Bigdropdown),
            "radiolist" => Ok(SelectorLayout::Radiolist),
            "styledlist" => Ok(SelectorLayout::Styledlist),
            other => Err(BookingError::Validation(format!(
                "unknown selector layout '{other}'"
            ))),
        }
    }
}

/// Resolved display options for one widget request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub headline: String,
    pub button_text: String,
    pub button_class: String,
    pub select_label: String,
    pub select_class: String,
    pub select_layout: SelectorLayout,
    pub amount_input_label: String,
    pub amount_input_class: String,
    pub ind_req_label: String,
    pub ind_req_force: bool,
}

impl WidgetOptions {
    /// Baseline options from the service configuration, before any
    /// per-request overrides are applied.
    pub fn defaults(config: &BookingConfig) -> Self {
        Self {
            headline: config.widget.headline.clone(),
            button_text: config.widget.button_text.clone(),
            button_class: String::new(),
            select_label: config.widget.select_label.clone(),
            select_class: String::new(),
            select_layout: SelectorLayout::default(),
            amount_input_label: config.widget.amount_input_label.clone(),
            amount_input_class: String::new(),
            ind_req_label: config.widget.ind_req_label.clone(),
            ind_req_force: false,
        }
    }

    /// Applies one `key=value` override. Unknown keys are an error.
    pub fn apply(&mut self, key: &str, value: &str) -> BookingResult<()> {
        match key {
            "headline" => self.headline = value.to_string(),
            "button_text" => self.button_text = value.to_string(),
            "button_class" => self.button_class = value.to_string(),
            "select_label" => self.select_label = value.to_string(),
            "select_class" => self.select_class = value.to_string(),
            "select_layout" => self.select_layout = value.parse()?,
            "amount_input_label" => self.amount_input_label = value.to_string(),
            "amount_input_class" => self.amount_input_class = value.to_string(),
            "ind_req_label" => self.ind_req_label = value.to_string(),
            "ind_req_force" => self.ind_req_force = parse_flag(key, value)?,
            other => {
                return Err(BookingError::Validation(format!(
                    "unknown widget option '{other}'"
                )));
            }
        }
        Ok(())
    }

    /// Resolves options from configuration defaults plus request overrides.
    pub fn resolve<'a, I>(config: &BookingConfig, pairs: I) -> BookingResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::defaults(config);
        for (key, value) in pairs {
            options.apply(key, value)?;
        }
        Ok(options)
    }
}

fn parse_flag(key: &str, value: &str) -> BookingResult<bool> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        other => Err(BookingError::Validation(format!(
            "option '{key}' expects a boolean, got '{other}'"
        ))),
    }
}
