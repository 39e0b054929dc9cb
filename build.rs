//! Build script to generate embedded frequency tables
//!
//! Reads frequency data files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const ALPHABET_LEN: usize = 26;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Single letters, indexed A=0..Z=25
    generate_table(
        "data/letters.txt",
        &Path::new(&out_dir).join("letters.rs"),
        "LETTER_FREQUENCIES",
        1,
        "Expected relative frequency of each letter in English text",
    );

    // Ordered letter pairs, indexed first * 26 + second
    generate_table(
        "data/bigrams.txt",
        &Path::new(&out_dir).join("bigrams.rs"),
        "BIGRAM_FREQUENCIES",
        2,
        "Expected relative frequency of each letter pair in English text (0.0 = not listed)",
    );

    // Rebuild if tables change
    println!("cargo:rerun-if-changed=data/letters.txt");
    println!("cargo:rerun-if-changed=data/bigrams.txt");
}

/// Map an uppercase symbol of `width` letters to its flat table index
fn symbol_index(symbol: &str, width: usize) -> usize {
    assert_eq!(symbol.len(), width, "Symbol '{symbol}' must be {width} letters");
    symbol.bytes().fold(0, |acc, b| {
        assert!(b.is_ascii_uppercase(), "Symbol '{symbol}' must be uppercase A-Z");
        acc * ALPHABET_LEN + usize::from(b - b'A')
    })
}

fn generate_table(
    input_path: &str,
    output_path: &Path,
    const_name: &str,
    width: usize,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let size = ALPHABET_LEN.pow(u32::try_from(width).unwrap());
    let mut table = vec![0.0_f64; size];

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let symbol = fields.next().unwrap();
        let weight: f64 = fields
            .next()
            .and_then(|w| w.parse().ok())
            .unwrap_or_else(|| panic!("Missing weight in {input_path}: '{line}'"));

        let index = symbol_index(symbol, width);
        assert!(
            table[index] == 0.0,
            "Duplicate symbol '{symbol}' in {input_path}"
        );
        table[index] = weight;
    }

    // Normalise so listed symbols sum to 1.0
    let total: f64 = table.iter().sum();
    assert!(total > 0.0, "{input_path} contains no weights");

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated frequency table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: [f64; {size}] = [").unwrap();

    for weight in table {
        writeln!(output, "    {:?},", weight / total).unwrap();
    }

    writeln!(output, "];").unwrap();
}
