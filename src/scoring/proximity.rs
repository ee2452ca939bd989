use crate::scoring::knowledge::KnowledgeBase;
use crate::scoring::models::Domain;
use crate::scoring::models::Token;
use std::collections::BTreeSet;

const COVERAGE_SHARE: f64 = 0.6;
const TIGHTNESS_SHARE: f64 = 0.4;
const SCORE_CAP: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ProximityOutcome {
    pub proximity_score: f64,
    pub matched_facts: Vec<String>,
}

impl ProximityOutcome {
    fn empty() -> Self {
        Self {
            proximity_score: 0.0,
            matched_facts: Vec::new(),
        }
    }
}

struct Candidate {
    fact_idx: usize,
    score: f64,
    matched: usize,
    domain_match: bool,
}

pub struct PatternProximityAnalyzer;

impl PatternProximityAnalyzer {
    pub fn analyze(
        &self,
        tokens: &[Token],
        kb: &KnowledgeBase,
        excluded: &BTreeSet<usize>,
    ) -> ProximityOutcome {
        if tokens.len() < 2 {
            return ProximityOutcome::empty();
        }

        let preferred_domain = most_hit_domain(tokens, kb);
        let mut candidates = Vec::new();

        for (fact_idx, fact) in kb.facts().iter().enumerate() {
            if excluded.contains(&fact_idx) {
                continue;
            }
            let positions: Vec<usize> = tokens
                .iter()
                .filter(|t| fact.has_keyword(&t.text))
                .map(|t| t.position)
                .collect();
            if positions.len() < 2 {
                continue;
            }

            let mut pair_sum = 0.0;
            let mut pairs = 0usize;
            for i in 0..positions.len() {
                for j in (i + 1)..positions.len() {
                    pair_sum += 1.0 / (positions[j] - positions[i]) as f64;
                    pairs += 1;
                }
            }
            let tightness = pair_sum / pairs as f64;
            let coverage = positions.len() as f64 / fact.canonical_keywords.len() as f64;

            candidates.push(Candidate {
                fact_idx,
                score: COVERAGE_SHARE * coverage + TIGHTNESS_SHARE * tightness,
                matched: positions.len(),
                domain_match: preferred_domain == Some(fact.domain),
            });
        }

        if candidates.is_empty() {
            return ProximityOutcome::empty();
        }

        candidates.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(b.matched.cmp(&a.matched))
                .then(b.domain_match.cmp(&a.domain_match))
                .then(a.fact_idx.cmp(&b.fact_idx))
        });

        let proximity_score = SCORE_CAP.min(candidates[0].score * 100.0);
        let matched_facts = candidates
            .iter()
            .map(|c| kb.fact(c.fact_idx).natural_phrase.clone())
            .collect();

        ProximityOutcome {
            proximity_score,
            matched_facts,
        }
    }
}

fn most_hit_domain(tokens: &[Token], kb: &KnowledgeBase) -> Option<Domain> {
    let mut best: Option<(usize, usize)> = None;
    for token in tokens {
        let hits = kb.hits(&token.text);
        if hits == 0 {
            continue;
        }
        match best {
            Some((best_hits, _)) if best_hits >= hits => {}
            _ => best = Some((hits, token.position)),
        }
    }
    let (_, position) = best?;
    let token = tokens.iter().find(|t| t.position == position)?;
    kb.lookup_indices(&token.text)
        .first()
        .map(|idx| kb.fact(*idx).domain)
}
