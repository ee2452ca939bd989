use truthcore_rs::JsonValue;
use truthcore_rs::TruthEngine;
use truthcore_rs::parse_facts;
use truthcore_rs::parse_json;
use truthcore_rs::to_pretty_json;

fn print_help() {
    println!("TruthCore CLI.");
    println!("\nUsage:");
    println!("  truthcore-rs [--version] score --statement TEXT [--facts JSON]");
}

fn main() {
    std::process::exit(run(std::env::args().collect()));
}

fn run(argv: Vec<String>) -> i32 {
    let args = if argv.is_empty() {
        Vec::new()
    } else {
        argv[1..].to_vec()
    };

    if args.is_empty() {
        print_help();
        return 0;
    }

    if args.iter().any(|a| a == "--version") {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return 0;
    }

    let mut i = 0;
    let mut command = String::new();
    let mut statement: Option<String> = None;
    let mut facts_json: Option<String> = None;

    while i < args.len() {
        match args[i].as_str() {
            "score" => {
                command = "score".to_string();
            }
            "--statement" => {
                i += 1;
                if let Some(v) = args.get(i) {
                    statement = Some(v.clone());
                } else {
                    eprintln!("error: --statement requires value");
                    return 2;
                }
            }
            "--facts" => {
                i += 1;
                if let Some(v) = args.get(i) {
                    facts_json = Some(v.clone());
                } else {
                    eprintln!("error: --facts requires value");
                    return 2;
                }
            }
            _ => {}
        }
        i += 1;
    }

    if command != "score" {
        print_help();
        return 0;
    }

    let Some(statement) = statement else {
        eprintln!("error: score requires --statement");
        return 2;
    };

    let extra_facts = match facts_json {
        Some(raw) => match parse_json(&raw) {
            Ok(JsonValue::Array(arr)) => match parse_facts(&arr) {
                Ok(v) => v,
                Err(err) => {
                    eprintln!("error: invalid --facts: {}", err.message);
                    return 2;
                }
            },
            Ok(_) => {
                eprintln!("error: --facts must be JSON array");
                return 2;
            }
            Err(err) => {
                eprintln!("error: Failed to parse --facts JSON: {}", err.message);
                return 2;
            }
        },
        None => Vec::new(),
    };

    let engine = TruthEngine::with_facts(extra_facts);
    match engine.score_statement(&statement) {
        Ok(report) => {
            println!("{}", to_pretty_json(&report.to_json_value()));
            0
        }
        Err(err) => {
            eprintln!("error: {err:?}");
            2
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_runs() {
        assert_eq!(run(vec!["truthcore-rs".to_string()]), 0);
    }

    #[test]
    fn version_runs() {
        assert_eq!(
            run(vec!["truthcore-rs".to_string(), "--version".to_string()]),
            0
        );
    }

    #[test]
    fn score_runs() {
        assert_eq!(
            run(vec![
                "truthcore-rs".to_string(),
                "score".to_string(),
                "--statement".to_string(),
                "Plants use sunlight in photosynthesis to make food".to_string(),
            ]),
            0
        );
    }

    #[test]
    fn score_without_statement_fails() {
        assert_eq!(
            run(vec!["truthcore-rs".to_string(), "score".to_string()]),
            2
        );
    }

    #[test]
    fn malformed_facts_fail() {
        assert_eq!(
            run(vec![
                "truthcore-rs".to_string(),
                "score".to_string(),
                "--statement".to_string(),
                "water boils".to_string(),
                "--facts".to_string(),
                "{not json".to_string(),
            ]),
            2
        );
    }
}
