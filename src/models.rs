use crate::json::JsonValue;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TruthLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl TruthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruthLevel::VeryLow => "VERY_LOW",
            TruthLevel::Low => "LOW",
            TruthLevel::Medium => "MEDIUM",
            TruthLevel::High => "HIGH",
            TruthLevel::VeryHigh => "VERY_HIGH",
        }
    }

    pub fn from_score(score: u8) -> Self {
        match score {
            0..=25 => TruthLevel::VeryLow,
            26..=45 => TruthLevel::Low,
            46..=65 => TruthLevel::Medium,
            66..=85 => TruthLevel::High,
            _ => TruthLevel::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostics {
    pub tokens: Vec<String>,
    pub weights: Vec<f64>,
    pub elimination_score: f64,
    pub proximity_score: f64,
    pub pattern_score: f64,
    pub contradiction_penalty: f64,
    pub sequence_penalty: f64,
    pub first_word_bonus: f64,
    pub matched_facts: Vec<String>,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TruthReport {
    pub truth_score: u8,
    pub truth_level: TruthLevel,
    pub diagnostics: Diagnostics,
}

impl TruthReport {
    pub fn to_json_value(&self) -> JsonValue {
        let mut obj = BTreeMap::new();
        obj.insert(
            "truth_score".to_string(),
            JsonValue::Number(self.truth_score as f64),
        );
        obj.insert(
            "truth_level".to_string(),
            JsonValue::String(self.truth_level.as_str().to_string()),
        );
        obj.insert("diagnostics".to_string(), diagnostics_to_json(&self.diagnostics));
        JsonValue::Object(obj)
    }
}

fn diagnostics_to_json(value: &Diagnostics) -> JsonValue {
    let mut obj = BTreeMap::new();
    obj.insert(
        "tokens".to_string(),
        JsonValue::Array(
            value
                .tokens
                .iter()
                .map(|t| JsonValue::String(t.clone()))
                .collect(),
        ),
    );
    obj.insert(
        "weights".to_string(),
        JsonValue::Array(value.weights.iter().map(|w| JsonValue::Number(*w)).collect()),
    );
    obj.insert(
        "elimination_score".to_string(),
        JsonValue::Number(value.elimination_score),
    );
    obj.insert(
        "proximity_score".to_string(),
        JsonValue::Number(value.proximity_score),
    );
    obj.insert(
        "pattern_score".to_string(),
        JsonValue::Number(value.pattern_score),
    );
    obj.insert(
        "contradiction_penalty".to_string(),
        JsonValue::Number(value.contradiction_penalty),
    );
    obj.insert(
        "sequence_penalty".to_string(),
        JsonValue::Number(value.sequence_penalty),
    );
    obj.insert(
        "first_word_bonus".to_string(),
        JsonValue::Number(value.first_word_bonus),
    );
    obj.insert(
        "matched_facts".to_string(),
        JsonValue::Array(
            value
                .matched_facts
                .iter()
                .map(|f| JsonValue::String(f.clone()))
                .collect(),
        ),
    );
    match &value.reason {
        Some(reason) => obj.insert(
            "reason".to_string(),
            JsonValue::String(reason.clone()),
        ),
        None => obj.insert("reason".to_string(), JsonValue::Null),
    };
    JsonValue::Object(obj)
}
