mod contradiction;
mod elimination;
mod knowledge;
mod models;
mod proximity;
mod tokenizer;

pub use contradiction::ContradictionDetector;
pub use contradiction::ContradictionOutcome;
pub use elimination::EliminationOutcome;
pub use elimination::KeywordEliminationAnalyzer;
pub use knowledge::KnowledgeBase;
pub use models::Domain;
pub use models::Fact;
pub use models::KbFormatError;
pub use models::ScoreError;
pub use models::Token;
pub use models::WeightedToken;
pub use proximity::PatternProximityAnalyzer;
pub use proximity::ProximityOutcome;
pub use tokenizer::MAX_STATEMENT_CHARS;
pub use tokenizer::Tokenizer;
pub use tokenizer::is_noun_candidate;
pub use tokenizer::is_stopword;
