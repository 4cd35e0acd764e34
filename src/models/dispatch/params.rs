//! Fail-closed decoding of positional instruction parameters.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::error::SlideError;

/// One positional parameter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub required: bool,
}

impl ParamSpec {
    pub const fn required(name: &'static str) -> Self {
        Self { name, required: true }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self { name, required: false }
    }
}

/// Positional arguments checked against a parameter list.
pub struct Params<'a> {
    values: &'a [Value],
    spec: &'static [ParamSpec],
}

impl<'a> Params<'a> {
    /// Rejects too few or too many arguments before anything is decoded.
    pub fn bind(values: &'a [Value], spec: &'static [ParamSpec]) -> Result<Self, SlideError> {
        let min = spec.iter().filter(|p| p.required).count();
        let max = spec.len();
        if values.len() < min || values.len() > max {
            let expected = if min == max {
                min.to_string()
            } else {
                format!("{min} to {max}")
            };
            return Err(SlideError::Arity {
                expected,
                got: values.len(),
            });
        }
        Ok(Self { values, spec })
    }

    fn invalid(&self, index: usize, reason: impl Into<String>) -> SlideError {
        SlideError::InvalidParam {
            index,
            name: self.spec[index].name,
            reason: reason.into(),
        }
    }

    /// The value at `index`, treating JSON `null` as absent.
    fn present(&self, index: usize) -> Option<&'a Value> {
        self.values.get(index).filter(|v| !v.is_null())
    }

    pub fn text(&self, index: usize) -> Result<String, SlideError> {
        self.opt_text(index)?
            .ok_or_else(|| self.invalid(index, "is required"))
    }

    pub fn opt_text(&self, index: usize) -> Result<Option<String>, SlideError> {
        match self.present(index) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
            Some(_) => Err(self.invalid(index, "expected text")),
        }
    }

    /// Any serde-decodable shape: lists of objects, nested rows, option maps.
    pub fn decode<T: DeserializeOwned>(&self, index: usize) -> Result<T, SlideError> {
        self.opt_decode(index)?
            .ok_or_else(|| self.invalid(index, "is required"))
    }

    pub fn opt_decode<T: DeserializeOwned>(&self, index: usize) -> Result<Option<T>, SlideError> {
        match self.present(index) {
            None => Ok(None),
            Some(v) => T::deserialize(v)
                .map(Some)
                .map_err(|e| self.invalid(index, e.to_string())),
        }
    }
}
