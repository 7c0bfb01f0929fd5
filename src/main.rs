use lmf_reader::{Dictionary, Word};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <path-to-wn-lmf-xml> <query>", args[0]);
        std::process::exit(1);
    }

    let document_path = &args[1];
    let query = &args[2];

    println!("Reading WN-LMF document: {}", document_path);
    println!("{}", "=".repeat(60));

    let dictionary = match Dictionary::open(document_path) {
        Ok(dictionary) => dictionary,
        Err(e) => {
            eprintln!("\nERROR: Failed to read WN-LMF document");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    };

    let resource = dictionary.resource();
    if let Some(lexicon) = resource.lexicons.first() {
        println!("\nLexicon Information:");
        println!("  Label: {}", lexicon.label);
        println!("  Language: {}", lexicon.language);
        println!("  Version: {}", lexicon.version);
        println!("  License: {}", lexicon.license);
    }

    println!("\nStatistics:");
    println!("  Lexical entries: {}", resource.entry_count());
    println!("  Senses: {}", resource.sense_count());
    println!("  Synsets: {}", resource.synset_count());
    println!("  Headwords: {}", dictionary.index().headword_count());
    println!("  Alternate forms: {}", dictionary.index().alias_count());

    println!("\n{}", "=".repeat(60));
    match dictionary.search(query) {
        Ok(word) => print!("{}", render_word(&word)),
        Err(e) => {
            eprintln!("\n{}", e);
            std::process::exit(1);
        }
    }
}

/// Formats a search result the way the definition pane shows it: one
/// header per matched entry, numbered definition lines, indented
/// example bullets.
fn render_word(word: &Word) -> String {
    let mut out = String::new();
    for entry in &word.entries {
        out.push_str(&format!("{} ({}):\n", entry.written_form, entry.part_of_speech));
        if entry.definitions.is_empty() {
            out.push_str("There's no definitions for this word!\n");
        }
        for (i, block) in entry.definitions.iter().enumerate() {
            out.push_str(&format!("{}: {}\n", i + 1, block.definitions.join("; ")));
            if !block.examples.is_empty() {
                out.push_str("Examples: \n");
            }
            for example in &block.examples {
                out.push_str(&format!(" - {}\n", example));
            }
        }
        out.push('\n');
    }
    out
}
