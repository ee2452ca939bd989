use crate::scoring::tokenizer::is_stopword;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Domain {
    Science,
    Math,
    Grammar,
    Civics,
    General,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Science => "science",
            Domain::Math => "math",
            Domain::Grammar => "grammar",
            Domain::Civics => "civics",
            Domain::General => "general",
        }
    }
}

impl std::str::FromStr for Domain {
    type Err = ();

    fn from_str(v: &str) -> Result<Self, Self::Err> {
        match v {
            "science" => Ok(Domain::Science),
            "math" => Ok(Domain::Math),
            "grammar" => Ok(Domain::Grammar),
            "civics" => Ok(Domain::Civics),
            "general" => Ok(Domain::General),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KbFormatError {
    pub message: String,
}

impl KbFormatError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    InvalidInput(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fact {
    pub domain: Domain,
    pub canonical_keywords: Vec<String>,
    pub natural_phrase: String,
    pub contradicts: BTreeSet<String>,
}

impl Fact {
    pub fn new(
        domain: Domain,
        canonical_keywords: Vec<String>,
        natural_phrase: String,
        contradicts: BTreeSet<String>,
    ) -> Result<Self, KbFormatError> {
        if !(2..=6).contains(&canonical_keywords.len()) {
            return Err(KbFormatError::new(format!(
                "fact must carry 2-6 canonical keywords, got {}",
                canonical_keywords.len()
            )));
        }
        let mut seen = BTreeSet::new();
        for keyword in &canonical_keywords {
            validate_word("canonical keyword", keyword)?;
            if !seen.insert(keyword.clone()) {
                return Err(KbFormatError::new(format!(
                    "duplicate canonical keyword: {keyword}"
                )));
            }
            if is_stopword(keyword) {
                return Err(KbFormatError::new(format!(
                    "canonical keyword is a stopword: {keyword}"
                )));
            }
        }
        if natural_phrase.trim().is_empty() {
            return Err(KbFormatError::new("natural_phrase must not be empty"));
        }
        for partner in &contradicts {
            validate_word("contradiction partner", partner)?;
            if seen.contains(partner) {
                return Err(KbFormatError::new(format!(
                    "contradiction partner duplicates a canonical keyword: {partner}"
                )));
            }
        }
        Ok(Self {
            domain,
            canonical_keywords,
            natural_phrase,
            contradicts,
        })
    }

    pub fn has_keyword(&self, word: &str) -> bool {
        if self.canonical_keywords.iter().any(|k| k == word) {
            return true;
        }
        match singular_form(word) {
            Some(base) => self.canonical_keywords.iter().any(|k| k == base),
            None => false,
        }
    }

    pub fn contradicted_by(&self, word: &str) -> bool {
        if self.contradicts.contains(word) {
            return true;
        }
        match singular_form(word) {
            Some(base) => self.contradicts.contains(base),
            None => false,
        }
    }
}

fn validate_word(kind: &str, word: &str) -> Result<(), KbFormatError> {
    if word.len() < 3 {
        return Err(KbFormatError::new(format!(
            "{kind} must be at least 3 characters: {word}"
        )));
    }
    if !word.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()) {
        return Err(KbFormatError::new(format!(
            "{kind} must be lowercase alphanumeric: {word}"
        )));
    }
    Ok(())
}

pub fn singular_form(word: &str) -> Option<&str> {
    if word.len() >= 4 && word.ends_with('s') && !word.ends_with("ss") {
        Some(&word[..word.len() - 1])
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub position: usize,
    pub is_noun_candidate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeightedToken {
    pub token: Token,
    pub weight: f64,
}
