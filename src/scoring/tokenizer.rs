use crate::scoring::models::ScoreError;
use crate::scoring::models::Token;
use crate::scoring::models::singular_form;

pub const MAX_STATEMENT_CHARS: usize = 4096;

const STOPWORDS: &[&str] = &[
    "a", "an", "and", "any", "are", "as", "at", "be", "been", "but", "by", "can", "did", "do",
    "does", "for", "from", "had", "has", "have", "he", "her", "him", "his", "i", "if", "in",
    "into", "is", "it", "its", "me", "my", "no", "not", "of", "on", "or", "our", "she", "so",
    "that", "the", "their", "them", "they", "this", "to", "up", "was", "we", "were", "what",
    "when", "where", "which", "who", "will", "with", "you", "your",
];

const NOUN_CANDIDATES: &[&str] = &[
    "action", "addition", "animal", "book", "cat", "citizen", "democracy", "dog", "earth",
    "election", "energy", "food", "gravity", "ground", "house", "leader", "moon", "movement",
    "noun", "number", "object", "person", "photosynthesis", "place", "plant", "school", "sky",
    "student", "sum", "sun", "sunlight", "teacher", "thing", "tree", "verb", "vote", "water",
    "word",
];

pub fn is_stopword(word: &str) -> bool {
    word.len() <= 2 || STOPWORDS.contains(&word)
}

pub fn is_noun_candidate(word: &str) -> bool {
    if NOUN_CANDIDATES.contains(&word) {
        return true;
    }
    match singular_form(word) {
        Some(base) => NOUN_CANDIDATES.contains(&base),
        None => false,
    }
}

pub struct Tokenizer;

impl Tokenizer {
    pub fn tokenize(&self, statement: &str) -> Result<Vec<Token>, ScoreError> {
        let length = statement.chars().count();
        if length > MAX_STATEMENT_CHARS {
            return Err(ScoreError::InvalidInput(format!(
                "statement exceeds {MAX_STATEMENT_CHARS} characters ({length})"
            )));
        }

        let mut normalized = String::with_capacity(statement.len());
        for c in statement.chars() {
            let lower = c.to_ascii_lowercase();
            if lower.is_ascii_lowercase() || lower.is_ascii_digit() {
                normalized.push(lower);
            } else {
                normalized.push(' ');
            }
        }

        let mut tokens = Vec::new();
        for word in normalized.split_whitespace() {
            if is_stopword(word) {
                continue;
            }
            tokens.push(Token {
                text: word.to_string(),
                position: tokens.len(),
                is_noun_candidate: is_noun_candidate(word),
            });
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        let tokens = Tokenizer
            .tokenize("Plants USE sunlight, in photosynthesis!")
            .expect("must tokenize");
        assert_eq!(
            texts(&tokens),
            vec!["plants", "use", "sunlight", "photosynthesis"]
        );
    }

    #[test]
    fn drops_stopwords_and_short_tokens() {
        let tokens = Tokenizer
            .tokenize("the cat is on a mat with me up")
            .expect("must tokenize");
        assert_eq!(texts(&tokens), vec!["cat", "mat"]);
    }

    #[test]
    fn positions_follow_filtered_order() {
        let tokens = Tokenizer
            .tokenize("gravity and the objects will fall")
            .expect("must tokenize");
        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(texts(&tokens), vec!["gravity", "objects", "fall"]);
    }

    #[test]
    fn flags_noun_candidates_including_plurals() {
        let tokens = Tokenizer
            .tokenize("plants absorb sunlight")
            .expect("must tokenize");
        assert!(tokens[0].is_noun_candidate);
        assert!(!tokens[1].is_noun_candidate);
        assert!(tokens[2].is_noun_candidate);
    }

    #[test]
    fn non_ascii_characters_split_tokens() {
        let tokens = Tokenizer.tokenize("caf\u{e9}\tplants\u{a0}vote").expect("must tokenize");
        assert_eq!(texts(&tokens), vec!["caf", "plants", "vote"]);
    }

    #[test]
    fn empty_and_numeric_inputs() {
        assert!(Tokenizer.tokenize("").expect("must tokenize").is_empty());
        let tokens = Tokenizer.tokenize("100 200 300").expect("must tokenize");
        assert_eq!(texts(&tokens), vec!["100", "200", "300"]);
    }

    #[test]
    fn rejects_statements_over_the_length_cap() {
        let long = "x".repeat(MAX_STATEMENT_CHARS + 1);
        let err = Tokenizer.tokenize(&long).unwrap_err();
        assert!(matches!(err, ScoreError::InvalidInput(_)));

        let at_cap = "x".repeat(MAX_STATEMENT_CHARS);
        assert!(Tokenizer.tokenize(&at_cap).is_ok());
    }

    #[test]
    fn stopword_checks_cover_the_fixed_set() {
        assert!(is_stopword("the"));
        assert!(is_stopword("which"));
        assert!(is_stopword("ab"));
        assert!(!is_stopword("use"));
        assert!(!is_stopword("plants"));
    }
}
