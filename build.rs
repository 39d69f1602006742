//! Build script to generate embedded vocabularies
//!
//! Reads the per-language word lists and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (file stem, const name, description)
const LISTS: &[(&str, &str, &str)] = &[
    ("pt-br", "PT_BR", "Brazilian Portuguese vocabulary"),
    ("pt-br-common", "PT_BR_COMMON", "Common Brazilian Portuguese words"),
    ("en-us", "EN_US", "American English vocabulary"),
    ("en-us-common", "EN_US_COMMON", "Common American English words"),
    ("fr", "FR", "French vocabulary"),
    ("fr-common", "FR_COMMON", "Common French words"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("vocab.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated vocabularies").unwrap();
    writeln!(output).unwrap();

    for (stem, const_name, doc_comment) in LISTS {
        let input_path = format!("data/vocab/{stem}.txt");
        generate_word_list(&mut output, &input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_word_list(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    // Lines are kept raw; length filtering happens at load time
    let words: Vec<&str> = content
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    writeln!(output, "/// {doc_comment} ({count} lines)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
}
