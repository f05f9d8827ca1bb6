use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use number_spell::{Speller, SpellingMode};

#[derive(Debug, Deserialize)]
struct SpellCase {
    locale: String,
    input: String,
    mode: String,
    expected: String,
}

#[derive(Debug, Deserialize)]
struct SpellCorpus {
    cases: Vec<SpellCase>,
}

#[test]
fn test_corpus() {
    let json_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("spell-corpus.json");

    let json_content = fs::read_to_string(&json_path)
        .unwrap_or_else(|e| panic!("Failed to read corpus file {}: {}", json_path.display(), e));

    let corpus: SpellCorpus = serde_json::from_str(&json_content)
        .unwrap_or_else(|e| panic!("Failed to parse corpus file {}: {}", json_path.display(), e));

    let mut spellers: HashMap<&str, Speller> = HashMap::new();
    let mut failures = Vec::new();

    for case in &corpus.cases {
        let speller = spellers
            .entry(case.locale.as_str())
            .or_insert_with(|| Speller::new(&case.locale).expect("corpus locale should resolve"));

        let mode = match case.mode.as_str() {
            "currency" => SpellingMode::Currency,
            _ => SpellingMode::Number,
        };

        let actual = speller.spell_as(case.input.as_str(), mode);
        if actual != case.expected {
            failures.push(format!(
                "{} {} ({}): expected \"{}\", got \"{}\"",
                case.locale, case.input, case.mode, case.expected, actual
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} corpus mismatches:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
