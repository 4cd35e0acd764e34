use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::error::GenerationError;
use crate::models::presentation::{PresentationBuilder, PresentationConfig};
use crate::models::theme::Brand;
use crate::storage::OutputDir;
use crate::writer::DocumentWriter;

use super::registry::lookup_for;

/// What happens to an instruction that cannot be rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPolicy {
    /// The first failing instruction fails the request.
    #[default]
    Strict,
    /// Failing instructions are skipped and reported as warnings.
    Lenient,
}

impl FromStr for DispatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(DispatchPolicy::Strict),
            "lenient" => Ok(DispatchPolicy::Lenient),
            other => Err(format!("unknown dispatch policy '{other}'")),
        }
    }
}

impl fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchPolicy::Strict => f.write_str("strict"),
            DispatchPolicy::Lenient => f.write_str("lenient"),
        }
    }
}

/// One `{method, params}` entry of a generation request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Instruction {
    pub method: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

impl Instruction {
    pub fn new(method: &str, params: Vec<Value>) -> Self {
        Self {
            method: method.to_string(),
            params,
        }
    }
}

/// A skipped instruction under [`DispatchPolicy::Lenient`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchWarning {
    pub index: usize,
    pub method: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub filename: String,
    pub slide_count: usize,
    pub size: u64,
    pub warnings: Vec<DispatchWarning>,
}

/// Apply `instructions` to `builder` in order.
pub fn dispatch(
    builder: &mut PresentationBuilder,
    instructions: &[Instruction],
    policy: DispatchPolicy,
) -> Result<Vec<DispatchWarning>, GenerationError> {
    let mut warnings = Vec::new();

    for (index, instruction) in instructions.iter().enumerate() {
        let method = instruction.method.as_str();
        let outcome = match lookup_for(builder.brand(), method) {
            None => Err(GenerationError::UnknownSlideMethod {
                index,
                method: method.to_string(),
            }),
            Some(entry) => entry
                .decode(&instruction.params)
                .and_then(|content| builder.add(&content).map(|_| ()))
                .map_err(|err| GenerationError::from_slide(index, method, err)),
        };

        if let Err(err) = outcome {
            match policy {
                DispatchPolicy::Strict => return Err(err),
                DispatchPolicy::Lenient => {
                    log::warn!("Skipping slide instruction {}: {}", index, err);
                    warnings.push(DispatchWarning {
                        index,
                        method: method.to_string(),
                        message: err.to_string(),
                    });
                }
            }
        }
    }

    Ok(warnings)
}

/// Resolve the brand, render every instruction and save the deck.
///
/// Nothing is written when the type, the config or (under strict policy) any
/// instruction is rejected.
pub fn generate(
    presentation_type: &str,
    config: &PresentationConfig,
    instructions: &[Instruction],
    policy: DispatchPolicy,
    writer: &dyn DocumentWriter,
    out: &OutputDir,
    now: DateTime<Utc>,
) -> Result<Generated, GenerationError> {
    let brand = Brand::parse(presentation_type)
        .ok_or_else(|| GenerationError::UnknownPresentationType(presentation_type.to_string()))?;
    let mut builder = PresentationBuilder::new(brand, config)?;

    let warnings = dispatch(&mut builder, instructions, policy)?;
    let saved = builder.save(writer, out, now)?;

    Ok(Generated {
        filename: saved.filename,
        slide_count: saved.slide_count,
        size: saved.size,
        warnings,
    })
}
