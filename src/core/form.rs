use super::constants::*;
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("submission rejected with HTTP {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },
}

/// Serialise named text fields into a flat JSON object. Later duplicates of a
/// name overwrite earlier ones; values that are not text (files) are skipped.
pub fn encode_fields<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
{
    let mut object = Map::new();
    for (name, value) in fields {
        if let Some(v) = value {
            object.insert(name.to_string(), Value::String(v.to_string()));
        }
    }
    Value::Object(object).to_string()
}

/// Any JSON body is accepted; only the status decides success. A rejection
/// carries the reply's `message`, rendered as JSON text when not a string.
pub fn interpret_response(status: u16, body: &str) -> Result<(), SubmitError> {
    let reply: Value = serde_json::from_str(body)?;
    if status == 200 {
        return Ok(());
    }
    let message = match reply.get("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    Err(SubmitError::Rejected { status, message })
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub color: &'static str,
}

impl StatusMessage {
    pub fn sending() -> Self {
        Self {
            text: STATUS_SENDING.to_string(),
            color: COLOR_NEUTRAL,
        }
    }

    pub fn from_outcome(outcome: &Result<(), SubmitError>) -> Self {
        match outcome {
            Ok(()) => Self {
                text: STATUS_SUCCESS.to_string(),
                color: COLOR_SUCCESS,
            },
            Err(SubmitError::Rejected {
                message: Some(m), ..
            }) => Self {
                text: m.clone(),
                color: COLOR_ERROR,
            },
            Err(_) => Self {
                text: STATUS_FAILURE.to_string(),
                color: COLOR_ERROR,
            },
        }
    }
}
