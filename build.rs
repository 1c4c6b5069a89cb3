//! Build script to embed the default hangman word list
//!
//! Every non-blank line of `data/words.txt` must be a word of ASCII letters. Words are
//! uppercased and written to `OUT_DIR/words.rs` as `WORDS` and `WORDS_COUNT`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let words = read_words(WORD_LIST);
    assert!(!words.is_empty(), "{WORD_LIST} has no words");

    let source = render_word_list("WORDS", "Default hangman word list", &words);
    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
    println!("cargo:rerun-if-changed=data/art");
}

/// Uppercased words, one per non-blank line
fn read_words(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let word = line.trim();
            if word.is_empty() {
                return None;
            }
            assert!(
                word.bytes().all(|b| b.is_ascii_alphabetic()),
                "{input_path}:{}: '{word}' is not a word of ASCII letters",
                index + 1
            );
            Some(word.to_ascii_uppercase())
        })
        .collect()
}

fn render_word_list(const_name: &str, description: &str, words: &[String]) -> String {
    let count = words.len();
    let mut source = String::new();

    let _ = writeln!(source, "// Generated from {WORD_LIST}, do not edit");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// {description} ({count} words)");
    let _ = writeln!(source, "pub const {const_name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// Number of words in {const_name}");
    let _ = writeln!(source, "pub const {const_name}_COUNT: usize = {count};");

    source
}
