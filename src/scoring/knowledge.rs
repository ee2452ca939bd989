use crate::facts::seed_facts;
use crate::scoring::models::Domain;
use crate::scoring::models::Fact;
use crate::scoring::models::singular_form;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

pub struct KnowledgeBase {
    facts: Vec<Fact>,
    by_keyword: BTreeMap<String, Vec<usize>>,
}

impl KnowledgeBase {
    pub fn new(facts: Vec<Fact>) -> Self {
        let mut by_keyword: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, fact) in facts.iter().enumerate() {
            for keyword in &fact.canonical_keywords {
                by_keyword.entry(keyword.clone()).or_default().push(idx);
            }
        }
        Self { facts, by_keyword }
    }

    pub fn seeded() -> Self {
        Self::new(seed_facts())
    }

    pub fn with_extra(extra: Vec<Fact>) -> Self {
        let mut facts = seed_facts();
        facts.extend(extra);
        Self::new(facts)
    }

    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    pub fn fact(&self, idx: usize) -> &Fact {
        &self.facts[idx]
    }

    pub fn lookup(&self, word: &str) -> Vec<&Fact> {
        self.lookup_indices(word)
            .into_iter()
            .map(|idx| &self.facts[idx])
            .collect()
    }

    pub fn lookup_indices(&self, word: &str) -> Vec<usize> {
        let mut out = BTreeSet::new();
        if let Some(ids) = self.by_keyword.get(word) {
            out.extend(ids.iter().copied());
        }
        if let Some(base) = singular_form(word)
            && let Some(ids) = self.by_keyword.get(base)
        {
            out.extend(ids.iter().copied());
        }
        out.into_iter().collect()
    }

    pub fn hits(&self, word: &str) -> usize {
        self.lookup_indices(word).len()
    }

    pub fn domains_hit(&self, word: &str) -> Vec<Domain> {
        self.lookup_indices(word)
            .into_iter()
            .map(|idx| self.facts[idx].domain)
            .collect()
    }

    pub fn contradicts(&self, word_a: &str, word_b: &str) -> bool {
        !self.contradicting_facts(word_a, word_b).is_empty()
    }

    pub fn contradicting_facts(&self, word_a: &str, word_b: &str) -> Vec<usize> {
        let mut out = Vec::new();
        for (idx, fact) in self.facts.iter().enumerate() {
            let forward = fact.has_keyword(word_a) && fact.contradicted_by(word_b);
            let reverse = fact.has_keyword(word_b) && fact.contradicted_by(word_a);
            if forward || reverse {
                out.push(idx);
            }
        }
        out
    }
}
