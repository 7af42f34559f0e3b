//! Build script to embed the answer word list
//!
//! Reads the newline-delimited word file and generates Rust source code with
//! a const array.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content = fs::read_to_string("data/answers.txt")
        .unwrap_or_else(|e| panic!("Failed to read data/answers.txt: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    let count = words.len();

    let output_path = Path::new(&out_dir).join("answers.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Secret-word candidates compiled into the binary").unwrap();
    writeln!(output, "pub const ANSWERS: &[&str] = &[").unwrap();
    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }
    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in ANSWERS").unwrap();
    writeln!(output, "pub const ANSWERS_COUNT: usize = {count};").unwrap();

    println!("cargo:rerun-if-changed=data/answers.txt");
}
