use crate::models::Diagnostics;
use crate::models::TruthLevel;
use crate::models::TruthReport;
use crate::scoring::ContradictionDetector;
use crate::scoring::Fact;
use crate::scoring::KeywordEliminationAnalyzer;
use crate::scoring::KnowledgeBase;
use crate::scoring::PatternProximityAnalyzer;
use crate::scoring::ScoreError;
use crate::scoring::Tokenizer;

const ELIMINATION_SHARE: f64 = 0.5;
const PROXIMITY_SHARE: f64 = 0.5;

pub fn score(statement: &str) -> Result<TruthReport, ScoreError> {
    TruthEngine::seeded().score_statement(statement)
}

pub struct TruthEngine {
    kb: KnowledgeBase,
    tokenizer: Tokenizer,
    elimination: KeywordEliminationAnalyzer,
    proximity: PatternProximityAnalyzer,
    contradiction: ContradictionDetector,
}

impl Default for TruthEngine {
    fn default() -> Self {
        Self::seeded()
    }
}

impl TruthEngine {
    pub fn seeded() -> Self {
        Self::with_kb(KnowledgeBase::seeded())
    }

    pub fn with_facts(extra: Vec<Fact>) -> Self {
        Self::with_kb(KnowledgeBase::with_extra(extra))
    }

    pub fn with_kb(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            tokenizer: Tokenizer,
            elimination: KeywordEliminationAnalyzer,
            proximity: PatternProximityAnalyzer,
            contradiction: ContradictionDetector,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn score_statement(&self, statement: &str) -> Result<TruthReport, ScoreError> {
        let tokens = self.tokenizer.tokenize(statement)?;
        if tokens.is_empty() {
            return Ok(no_content_report());
        }

        let contradiction = self.contradiction.detect(&tokens, &self.kb);
        let elimination = self.elimination.weigh(&tokens, &self.kb);
        let proximity =
            self.proximity
                .analyze(&tokens, &self.kb, &contradiction.implicated_facts);

        let pattern_score = ELIMINATION_SHARE * elimination.elimination_score
            + PROXIMITY_SHARE * proximity.proximity_score;
        let composite = pattern_score - contradiction.penalty;
        let truth_score = composite.round().clamp(0.0, 100.0) as u8;

        Ok(TruthReport {
            truth_score,
            truth_level: TruthLevel::from_score(truth_score),
            diagnostics: Diagnostics {
                tokens: tokens.iter().map(|t| t.text.clone()).collect(),
                weights: elimination.weighted.iter().map(|w| w.weight).collect(),
                elimination_score: elimination.elimination_score,
                proximity_score: proximity.proximity_score,
                pattern_score,
                contradiction_penalty: contradiction.penalty,
                sequence_penalty: elimination.sequence_penalty,
                first_word_bonus: elimination.first_word_bonus,
                matched_facts: proximity.matched_facts,
                reason: None,
            },
        })
    }
}

fn no_content_report() -> TruthReport {
    TruthReport {
        truth_score: 0,
        truth_level: TruthLevel::VeryLow,
        diagnostics: Diagnostics {
            tokens: Vec::new(),
            weights: Vec::new(),
            elimination_score: 0.0,
            proximity_score: 0.0,
            pattern_score: 0.0,
            contradiction_penalty: 0.0,
            sequence_penalty: 0.0,
            first_word_bonus: 0.0,
            matched_facts: Vec::new(),
            reason: Some("no_content".to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Domain;
    use crate::scoring::MAX_STATEMENT_CHARS;
    use std::collections::BTreeSet;

    #[test]
    fn empty_statement_reports_no_content() {
        let report = score("").expect("must score");
        assert_eq!(report.truth_score, 0);
        assert_eq!(report.truth_level, TruthLevel::VeryLow);
        assert_eq!(report.diagnostics.reason.as_deref(), Some("no_content"));
    }

    #[test]
    fn stopword_only_statement_reports_no_content() {
        let report = score("the and but with from").expect("must score");
        assert_eq!(report.truth_score, 0);
        assert_eq!(report.diagnostics.reason.as_deref(), Some("no_content"));
    }

    #[test]
    fn oversized_statement_is_invalid_input() {
        let long = "word ".repeat(MAX_STATEMENT_CHARS);
        let err = score(&long).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidInput(_)));
    }

    #[test]
    fn scoring_is_deterministic() {
        let engine = TruthEngine::seeded();
        let first = engine
            .score_statement("Plants use sunlight in photosynthesis to make food")
            .expect("must score");
        let second = engine
            .score_statement("Plants use sunlight in photosynthesis to make food")
            .expect("must score");
        assert_eq!(first, second);
    }

    #[test]
    fn diagnostics_align_with_tokens() {
        let report = score("gravity pulls objects down").expect("must score");
        assert_eq!(report.diagnostics.tokens.len(), report.diagnostics.weights.len());
        assert_eq!(
            report.diagnostics.tokens,
            vec!["gravity", "pulls", "objects", "down"]
        );
    }

    #[test]
    fn contradicted_statement_loses_proximity_support() {
        let report = score("Gravity makes objects fall upward into the sky").expect("must score");
        assert_eq!(report.diagnostics.contradiction_penalty, 50.0);
        assert_eq!(report.diagnostics.proximity_score, 0.0);
        assert_eq!(report.truth_score, 0);
    }

    #[test]
    fn extra_facts_extend_the_knowledge_base() {
        let extra = Fact::new(
            Domain::General,
            vec!["water".to_string(), "boils".to_string(), "heat".to_string()],
            "Water boils when heated enough.".to_string(),
            BTreeSet::new(),
        )
        .expect("must create fact");

        let seeded = TruthEngine::seeded()
            .score_statement("water boils with heat")
            .expect("must score");
        let extended = TruthEngine::with_facts(vec![extra])
            .score_statement("water boils with heat")
            .expect("must score");
        assert!(extended.truth_score > seeded.truth_score);
        assert!(
            extended
                .diagnostics
                .matched_facts
                .iter()
                .any(|f| f.contains("boils"))
        );
    }

    #[test]
    fn truth_level_always_matches_truth_score() {
        for statement in [
            "Plants use sunlight in photosynthesis to make food",
            "Addition combines numbers to get a sum",
            "Gravity makes objects fall upward into the sky",
            "florble granix brumple",
            "plants vote for addition leaders",
        ] {
            let report = score(statement).expect("must score");
            assert_eq!(
                report.truth_level,
                TruthLevel::from_score(report.truth_score),
                "level mismatch for: {statement}"
            );
        }
    }
}
