mod engine;
mod facts;
mod json;
mod models;
mod scoring;

pub use engine::TruthEngine;
pub use engine::score;
pub use facts::SEED_FACTS;
pub use facts::parse_facts;
pub use facts::seed_facts;
pub use json::JsonError;
pub use json::JsonValue;
pub use json::parse_json;
pub use json::to_pretty_json;
pub use models::Diagnostics;
pub use models::TruthLevel;
pub use models::TruthReport;
pub use scoring::ContradictionDetector;
pub use scoring::ContradictionOutcome;
pub use scoring::Domain;
pub use scoring::EliminationOutcome;
pub use scoring::Fact;
pub use scoring::KbFormatError;
pub use scoring::KeywordEliminationAnalyzer;
pub use scoring::KnowledgeBase;
pub use scoring::MAX_STATEMENT_CHARS;
pub use scoring::PatternProximityAnalyzer;
pub use scoring::ProximityOutcome;
pub use scoring::ScoreError;
pub use scoring::Token;
pub use scoring::Tokenizer;
pub use scoring::WeightedToken;
pub use scoring::is_noun_candidate;
pub use scoring::is_stopword;
