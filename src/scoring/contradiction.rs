use crate::scoring::knowledge::KnowledgeBase;
use crate::scoring::models::Token;
use std::collections::BTreeSet;

const PAIR_PENALTY: f64 = 25.0;
const PENALTY_CAP: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ContradictionOutcome {
    pub penalty: f64,
    pub pairs: Vec<(String, String)>,
    pub implicated_facts: BTreeSet<usize>,
}

impl ContradictionOutcome {
    fn empty() -> Self {
        Self {
            penalty: 0.0,
            pairs: Vec::new(),
            implicated_facts: BTreeSet::new(),
        }
    }
}

pub struct ContradictionDetector;

impl ContradictionDetector {
    pub fn detect(&self, tokens: &[Token], kb: &KnowledgeBase) -> ContradictionOutcome {
        if tokens.len() < 2 {
            return ContradictionOutcome::empty();
        }

        let mut seen: BTreeSet<(String, String)> = BTreeSet::new();
        let mut pairs = Vec::new();
        let mut implicated_facts = BTreeSet::new();

        for i in 0..tokens.len() {
            for j in (i + 1)..tokens.len() {
                let a = &tokens[i].text;
                let b = &tokens[j].text;
                if a == b {
                    continue;
                }
                let witnesses = kb.contradicting_facts(a, b);
                if witnesses.is_empty() {
                    continue;
                }
                let key = if a <= b {
                    (a.clone(), b.clone())
                } else {
                    (b.clone(), a.clone())
                };
                if !seen.insert(key.clone()) {
                    continue;
                }
                pairs.push(key);
                implicated_facts.extend(witnesses);
            }
        }

        let penalty = PENALTY_CAP.min(PAIR_PENALTY * pairs.len() as f64);
        ContradictionOutcome {
            penalty,
            pairs,
            implicated_facts,
        }
    }
}
