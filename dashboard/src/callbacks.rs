//! Selector event dispatch.
//!
//! Maps a selector change to the output elements it drives. Each output is a
//! pure function of the selector value and the immutable [`AppState`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use worldcup::{lookup_final, lookup_wins};

use crate::layout::{COUNTRY_DROPDOWN_ID, FINAL_OUTPUT_ID, WIN_COUNT_OUTPUT_ID, YEAR_DROPDOWN_ID};
use crate::state::AppState;

/// A selector changed value in the browser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectorEvent {
    pub id: String,
    pub value: Value,
}

/// New content for one output element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputUpdate {
    pub id: String,
    pub children: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown element id {0:?}")]
    UnknownElement(String),

    #[error("invalid value for {id}: {value}")]
    InvalidValue { id: &'static str, value: String },
}

pub fn dispatch(state: &AppState, event: &SelectorEvent) -> Result<Vec<OutputUpdate>, DispatchError> {
    match event.id.as_str() {
        COUNTRY_DROPDOWN_ID => {
            let country = event.value.as_str().ok_or_else(|| DispatchError::InvalidValue {
                id: COUNTRY_DROPDOWN_ID,
                value: event.value.to_string(),
            })?;
            Ok(vec![win_count_output(state, country)])
        }
        YEAR_DROPDOWN_ID => {
            let year = parse_year(&event.value).ok_or_else(|| DispatchError::InvalidValue {
                id: YEAR_DROPDOWN_ID,
                value: event.value.to_string(),
            })?;
            Ok(vec![final_output(state, year)])
        }
        other => Err(DispatchError::UnknownElement(other.to_string())),
    }
}

pub fn win_count_output(state: &AppState, country: &str) -> OutputUpdate {
    OutputUpdate {
        id: WIN_COUNT_OUTPUT_ID.to_string(),
        children: lookup_wins(&state.summary, country),
    }
}

pub fn final_output(state: &AppState, year: u16) -> OutputUpdate {
    OutputUpdate {
        id: FINAL_OUTPUT_ID.to_string(),
        children: lookup_final(&state.dataset, year),
    }
}

/// Years arrive as JSON numbers from the dropdown, or as strings from forms.
pub fn parse_year(value: &Value) -> Option<u16> {
    match value {
        Value::Number(n) => n.as_u64().and_then(|y| u16::try_from(y).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
