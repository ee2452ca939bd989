use crate::json::JsonValue;
use crate::json::parse_json;
use crate::scoring::Domain;
use crate::scoring::Fact;
use crate::scoring::KbFormatError;
use std::collections::BTreeSet;

pub const SEED_FACTS: &str = r#"[
  {
    "domain": "science",
    "canonical_keywords": ["plants", "photosynthesis", "sunlight"],
    "natural_phrase": "Plants use sunlight in photosynthesis to make food.",
    "contradicts": []
  },
  {
    "domain": "science",
    "canonical_keywords": ["gravity", "objects", "fall", "down"],
    "natural_phrase": "Gravity pulls objects down.",
    "contradicts": ["upward", "float"]
  },
  {
    "domain": "math",
    "canonical_keywords": ["addition", "numbers", "sum"],
    "natural_phrase": "Addition combines numbers to produce a sum.",
    "contradicts": []
  },
  {
    "domain": "grammar",
    "canonical_keywords": ["noun", "person", "place", "thing"],
    "natural_phrase": "A noun names a person, place, or thing.",
    "contradicts": ["action"]
  },
  {
    "domain": "civics",
    "canonical_keywords": ["democracy", "citizens", "vote", "leaders"],
    "natural_phrase": "In a democracy, citizens vote for leaders.",
    "contradicts": []
  }
]"#;

pub fn seed_facts() -> Vec<Fact> {
    let value = parse_json(SEED_FACTS).expect("seed facts are valid JSON");
    let items = value.as_array().expect("seed facts are a JSON array");
    parse_facts(items).expect("seed facts are well-formed")
}

pub fn parse_facts(payload: &[JsonValue]) -> Result<Vec<Fact>, KbFormatError> {
    let mut facts = Vec::new();
    for item in payload {
        facts.push(fact_from_json(item)?);
    }
    Ok(facts)
}

fn fact_from_json(value: &JsonValue) -> Result<Fact, KbFormatError> {
    let obj = value
        .as_object()
        .ok_or_else(|| KbFormatError::new("fact must be a JSON object"))?;

    let domain_raw = obj
        .get("domain")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| KbFormatError::new("fact.domain is required"))?;
    let domain: Domain = domain_raw
        .parse()
        .map_err(|()| KbFormatError::new(format!("unknown domain: {domain_raw}")))?;

    let keywords_raw = obj
        .get("canonical_keywords")
        .and_then(JsonValue::as_array)
        .ok_or_else(|| KbFormatError::new("fact.canonical_keywords must be an array"))?;
    let mut canonical_keywords = Vec::new();
    for keyword in keywords_raw {
        let word = keyword
            .as_str()
            .ok_or_else(|| KbFormatError::new("canonical keyword must be a string"))?;
        canonical_keywords.push(word.to_string());
    }

    let natural_phrase = obj
        .get("natural_phrase")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| KbFormatError::new("fact.natural_phrase is required"))?
        .to_string();

    let mut contradicts = BTreeSet::new();
    match obj.get("contradicts") {
        Some(JsonValue::Array(partners)) => {
            for partner in partners {
                let word = partner
                    .as_str()
                    .ok_or_else(|| KbFormatError::new("contradiction partner must be a string"))?;
                contradicts.insert(word.to_string());
            }
        }
        Some(JsonValue::Null) | None => {}
        Some(_) => {
            return Err(KbFormatError::new("fact.contradicts must be an array"));
        }
    }

    Fact::new(domain, canonical_keywords, natural_phrase, contradicts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_to_five_facts() {
        let facts = seed_facts();
        assert_eq!(facts.len(), 5);
        assert_eq!(facts[0].domain, Domain::Science);
        assert_eq!(
            facts[1].contradicts,
            ["float", "upward"]
                .iter()
                .map(|w| (*w).to_string())
                .collect::<BTreeSet<String>>()
        );
        assert_eq!(facts[4].canonical_keywords.len(), 4);
    }

    #[test]
    fn parse_facts_accepts_well_formed_payload() {
        let value = parse_json(
            r#"[{"domain":"general","canonical_keywords":["water","boils"],
                 "natural_phrase":"Water boils at one hundred degrees Celsius.",
                 "contradicts":["freezes"]}]"#,
        )
        .expect("json parses");
        let facts = parse_facts(value.as_array().expect("array")).expect("facts parse");
        assert_eq!(facts.len(), 1);
        assert!(facts[0].contradicted_by("freezes"));
    }

    #[test]
    fn parse_facts_rejects_unknown_domain() {
        let value = parse_json(
            r#"[{"domain":"astrology","canonical_keywords":["mars","luck"],
                 "natural_phrase":"x","contradicts":[]}]"#,
        )
        .expect("json parses");
        let err = parse_facts(value.as_array().expect("array")).unwrap_err();
        assert!(err.message.contains("unknown domain"));
    }

    #[test]
    fn parse_facts_rejects_missing_fields() {
        let value = parse_json(r#"[{"domain":"science"}]"#).expect("json parses");
        let err = parse_facts(value.as_array().expect("array")).unwrap_err();
        assert!(err.message.contains("canonical_keywords"));
    }

    #[test]
    fn parse_facts_surfaces_fact_validation() {
        let value = parse_json(
            r#"[{"domain":"science","canonical_keywords":["the","gravity"],
                 "natural_phrase":"x","contradicts":[]}]"#,
        )
        .expect("json parses");
        let err = parse_facts(value.as_array().expect("array")).unwrap_err();
        assert!(err.message.contains("stopword"));
    }
}
