use crate::scoring::knowledge::KnowledgeBase;
use crate::scoring::models::Domain;
use crate::scoring::models::Token;
use crate::scoring::models::WeightedToken;
use std::collections::BTreeSet;

const BASE_WEIGHT: f64 = 10.0;
const CORRELATION_REWARD: f64 = 10.0;
const FIRST_NOUN_BONUS: f64 = 15.0;
const SEQUENCE_MULTIPLIER: f64 = 0.3;
const DOMAIN_MIX_MULTIPLIER: f64 = 0.7;
const DOMAIN_MIX_THRESHOLD: usize = 3;
const SCORE_CAP: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EliminationOutcome {
    pub weighted: Vec<WeightedToken>,
    pub elimination_score: f64,
    pub first_word_bonus: f64,
    pub sequence_penalty: f64,
    pub domains_hit: usize,
}

impl EliminationOutcome {
    fn empty() -> Self {
        Self {
            weighted: Vec::new(),
            elimination_score: 0.0,
            first_word_bonus: 0.0,
            sequence_penalty: 0.0,
            domains_hit: 0,
        }
    }
}

pub struct KeywordEliminationAnalyzer;

impl KeywordEliminationAnalyzer {
    pub fn weigh(&self, tokens: &[Token], kb: &KnowledgeBase) -> EliminationOutcome {
        if tokens.is_empty() {
            return EliminationOutcome::empty();
        }

        let mut weights = Vec::with_capacity(tokens.len());
        let mut domains: BTreeSet<Domain> = BTreeSet::new();
        let mut first_word_bonus = 0.0;

        for token in tokens {
            let hits = kb.hits(&token.text);
            let mut weight = BASE_WEIGHT / (1.0 + hits as f64);
            if hits >= 1 {
                weight += CORRELATION_REWARD;
            }
            if token.position == 0 && token.is_noun_candidate {
                first_word_bonus = FIRST_NOUN_BONUS;
                weight += FIRST_NOUN_BONUS;
            }
            domains.extend(kb.domains_hit(&token.text));
            weights.push(weight);
        }

        if domains.len() >= DOMAIN_MIX_THRESHOLD {
            for weight in &mut weights {
                *weight *= DOMAIN_MIX_MULTIPLIER;
            }
        }

        let before_sequence = SCORE_CAP.min(weights.iter().sum());
        let mut sequence_penalty = 0.0;
        if is_alphabetic_run(tokens) || is_numeric_run(tokens) {
            for weight in &mut weights {
                *weight *= SEQUENCE_MULTIPLIER;
            }
            sequence_penalty = before_sequence - SCORE_CAP.min(weights.iter().sum());
        }

        let elimination_score = SCORE_CAP.min(weights.iter().sum());
        let weighted = tokens
            .iter()
            .cloned()
            .zip(weights)
            .map(|(token, weight)| WeightedToken { token, weight })
            .collect();

        EliminationOutcome {
            weighted,
            elimination_score,
            first_word_bonus,
            sequence_penalty,
            domains_hit: domains.len(),
        }
    }
}

fn is_alphabetic_run(tokens: &[Token]) -> bool {
    if tokens.len() < 3 {
        return false;
    }
    let mut initials = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.text.bytes().next() {
            Some(b) if b.is_ascii_lowercase() => initials.push(b as i16),
            _ => return false,
        }
    }
    let ascending = initials.windows(2).all(|pair| pair[1] - pair[0] == 1);
    let descending = initials.windows(2).all(|pair| pair[0] - pair[1] == 1);
    ascending || descending
}

fn is_numeric_run(tokens: &[Token]) -> bool {
    if tokens.len() < 3 {
        return false;
    }
    let mut values = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.text.parse::<i64>() {
            Ok(v) => values.push(v),
            Err(_) => return false,
        }
    }
    let increasing = values.windows(2).all(|pair| pair[1] > pair[0]);
    let decreasing = values.windows(2).all(|pair| pair[1] < pair[0]);
    increasing || decreasing
}
