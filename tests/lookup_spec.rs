use lmf_reader::{
    parse_str, search, DefBlock, Dictionary, DictionaryIndex, LmfError, PartOfSpeech,
};
use std::io::Write;
use tempfile::NamedTempFile;

const RUN_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LexicalResource lmfVersion="1.0">
  <Lexicon id="test-en" label="Test English Wordnet" language="en" email="maintainer@example.org" license="CC-BY-4.0" version="1.0">
    <LexicalEntry id="w-run-v">
      <Lemma writtenForm="run" partOfSpeech="v"/>
      <Form writtenForm="ran"/>
      <Form writtenForm="running"/>
      <Sense id="s-run-v-1" synset="ss-run-v-1"/>
    </LexicalEntry>
    <Synset id="ss-run-v-1" ili="i100">
      <Definition>to move fast</Definition>
      <Example>he runs every morning</Example>
    </Synset>
  </Lexicon>
</LexicalResource>
"#;

const BANK_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LexicalResource lmfVersion="1.0">
  <Lexicon id="test-en" label="Test English Wordnet" language="en" email="" license="CC-BY-4.0" version="1.0">
    <LexicalEntry id="w-bank-n">
      <Lemma writtenForm="bank" partOfSpeech="n"/>
      <Sense id="s-bank-n-1" synset="ss-bank-n-1"/>
      <Sense id="s-bank-n-2" synset="ss-bank-n-2"/>
    </LexicalEntry>
    <LexicalEntry id="w-bank-v">
      <Lemma writtenForm="bank" partOfSpeech="v"/>
      <Sense id="s-bank-v-1" synset="ss-bank-v-1"/>
    </LexicalEntry>
    <Synset id="ss-bank-n-1" ili="i1">
      <Definition>sloping land beside a body of water</Definition>
    </Synset>
    <Synset id="ss-bank-n-2" ili="i2">
      <Definition>a financial institution</Definition>
      <Example>he cashed a check at the bank</Example>
    </Synset>
    <Synset id="ss-bank-v-1" ili="i3">
      <Definition>to tip laterally</Definition>
    </Synset>
  </Lexicon>
</LexicalResource>
"#;

const UNRESOLVED_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LexicalResource lmfVersion="1.0">
  <Lexicon id="test-en" label="Test" language="en" email="" license="" version="1">
    <LexicalEntry id="w-glark">
      <Lemma writtenForm="glark" partOfSpeech="v"/>
      <Sense id="s-glark-1" synset="ss-real"/>
      <Sense id="s-glark-2" synset="ss-phantom"/>
    </LexicalEntry>
    <Synset id="ss-real" ili="i1">
      <Definition>to understand from context</Definition>
    </Synset>
  </Lexicon>
</LexicalResource>
"#;

const MULTI_LEXICON_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LexicalResource lmfVersion="1.0">
  <Lexicon id="first-en" label="First" language="en" email="" license="" version="1">
    <LexicalEntry id="w-alpha">
      <Lemma writtenForm="alpha" partOfSpeech="n"/>
      <Sense id="s-alpha" synset="ss-alpha"/>
    </LexicalEntry>
    <Synset id="ss-alpha" ili="i1"><Definition>the first letter</Definition></Synset>
  </Lexicon>
  <Lexicon id="second-en" label="Second" language="en" email="" license="" version="1">
    <LexicalEntry id="w-beta">
      <Lemma writtenForm="beta" partOfSpeech="n"/>
      <Sense id="s-beta" synset="ss-beta"/>
    </LexicalEntry>
    <Synset id="ss-beta" ili="i2"><Definition>the second letter</Definition></Synset>
  </Lexicon>
</LexicalResource>
"#;

const ALIAS_COLLISION_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<LexicalResource lmfVersion="1.0">
  <Lexicon id="test-en" label="Test" language="en" email="" license="" version="1">
    <LexicalEntry id="w-lie">
      <Lemma writtenForm="lie" partOfSpeech="v"/>
      <Form writtenForm="lay"/>
      <Sense id="s-lie" synset="ss-lie"/>
    </LexicalEntry>
    <LexicalEntry id="w-recline">
      <Lemma writtenForm="recline" partOfSpeech="v"/>
      <Form writtenForm="lay"/>
      <Sense id="s-recline" synset="ss-recline"/>
    </LexicalEntry>
    <Synset id="ss-lie" ili="i1"><Definition>to rest flat</Definition></Synset>
    <Synset id="ss-recline" ili="i2"><Definition>to lean back</Definition></Synset>
  </Lexicon>
</LexicalResource>
"#;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dictionary(doc: &str) -> Dictionary {
    init_logs();
    doc.parse::<Dictionary>()
        .unwrap_or_else(|e| panic!("parse failed: {}", e))
}

fn expect_missing(dict: &Dictionary, query: &str) {
    match dict.search(query) {
        Ok(_) => panic!("{:?} should not be found", query),
        Err(LmfError::WordNotFound(word)) => assert_eq!(word, query),
        Err(other) => panic!("unexpected error for {:?}: {}", query, other),
    }
}

#[test]
fn finds_entries_by_lemma() {
    let dict = dictionary(RUN_DOC);
    let word = dict.search("run").expect("run should be found");

    assert_eq!(word.entries.len(), 1);
    let entry = &word.entries[0];
    assert_eq!(entry.written_form, "run");
    assert_eq!(entry.part_of_speech, PartOfSpeech::Verb);
    assert_eq!(entry.part_of_speech.label(), "Verb");

    assert_eq!(entry.definitions.len(), 1, "one block per sense");
    let block = &entry.definitions[0];
    assert_eq!(block.definitions, ["to move fast"]);
    assert_eq!(block.examples, ["he runs every morning"]);
}

#[test]
fn falls_back_to_alternate_forms() {
    let dict = dictionary(RUN_DOC);
    let direct = dict.search("run").expect("run should be found");

    for alias in ["ran", "running"] {
        let via_alias = dict
            .search(alias)
            .unwrap_or_else(|e| panic!("{} should fall back to run: {}", alias, e));
        assert_eq!(via_alias, direct, "{} must answer exactly like run", alias);
    }

    assert_eq!(dict.index().canonical_for("ran"), Some("run"));
    assert_eq!(dict.index().canonical_for("run"), None, "lemmas are not aliases");
}

#[test]
fn groups_homographs_in_document_order() {
    init_logs();
    let resource = parse_str(BANK_DOC).expect("parse bank document");
    let index = DictionaryIndex::build(&resource);

    let matches = index.entries_for("bank").expect("bank should be indexed");
    assert_eq!(matches.len(), 2, "noun and verb share one headword");
    assert_eq!(resource.entry(matches[0]).id, "w-bank-n");
    assert_eq!(resource.entry(matches[1]).id, "w-bank-v");

    let word = search(&resource, &index, "bank").expect("bank should be found");
    assert_eq!(word.entries.len(), 2);

    let noun = &word.entries[0];
    assert_eq!(noun.part_of_speech, PartOfSpeech::Noun);
    assert_eq!(noun.definitions.len(), 2, "one block per noun sense");
    assert_eq!(
        noun.definitions[0].definitions,
        ["sloping land beside a body of water"]
    );
    assert_eq!(noun.definitions[1].definitions, ["a financial institution"]);
    assert_eq!(
        noun.definitions[1].examples,
        ["he cashed a check at the bank"]
    );

    let verb = &word.entries[1];
    assert_eq!(verb.part_of_speech, PartOfSpeech::Verb);
    assert_eq!(verb.definitions.len(), 1);
    assert_eq!(verb.definitions[0].definitions, ["to tip laterally"]);
}

#[test]
fn missing_words_are_repeatable() {
    let dict = dictionary(BANK_DOC);
    let headwords = dict.index().headword_count();
    let aliases = dict.index().alias_count();

    expect_missing(&dict, "quux");
    expect_missing(&dict, "quux");

    assert_eq!(dict.index().headword_count(), headwords, "a miss must not mutate");
    assert_eq!(dict.index().alias_count(), aliases);
    let word = dict.search("bank").expect("bank still found after misses");
    assert_eq!(word.entries.len(), 2);
}

#[test]
fn unresolved_synsets_project_empty_blocks() {
    let dict = dictionary(UNRESOLVED_DOC);
    let word = dict.search("glark").expect("glark should be found");

    assert_eq!(word.entries.len(), 1);
    let entry = &word.entries[0];
    assert_eq!(entry.definitions.len(), 2, "both senses stay visible");
    assert_eq!(
        entry.definitions[0].definitions,
        ["to understand from context"]
    );
    assert_eq!(
        entry.definitions[1],
        DefBlock::default(),
        "a dangling synset reference projects an empty block"
    );
}

#[test]
fn indexes_only_the_first_lexicon() {
    let dict = dictionary(MULTI_LEXICON_DOC);
    assert_eq!(dict.resource().lexicons.len(), 2, "both lexicons are parsed");
    assert_eq!(dict.index().headword_count(), 1);

    let word = dict.search("alpha").expect("first lexicon is searchable");
    assert_eq!(word.entries[0].definitions[0].definitions, ["the first letter"]);
    expect_missing(&dict, "beta");
}

#[test]
fn last_alias_declaration_wins() {
    let dict = dictionary(ALIAS_COLLISION_DOC);
    assert_eq!(dict.index().canonical_for("lay"), Some("recline"));

    let word = dict.search("lay").expect("lay should fall back");
    assert_eq!(word.entries.len(), 1);
    assert_eq!(word.entries[0].written_form, "recline");
    assert_eq!(word.entries[0].definitions[0].definitions, ["to lean back"]);
}

#[test]
fn forms_matching_their_own_lemma_add_no_alias() {
    let dict = dictionary(
        r#"<LexicalResource><Lexicon id="l" label="T" language="en" email="" license="" version="1"><LexicalEntry id="w-deer"><Lemma writtenForm="deer" partOfSpeech="n"/><Form writtenForm="deer"/><Sense id="s-deer" synset="ss-deer"/></LexicalEntry><Synset id="ss-deer" ili="i1"><Definition>a ruminant mammal</Definition></Synset></Lexicon></LexicalResource>"#,
    );
    assert_eq!(dict.index().alias_count(), 0);
    assert_eq!(dict.index().headword_count(), 1);
    let word = dict.search("deer").expect("deer should be found");
    assert_eq!(word.entries.len(), 1);
}

#[test]
fn empty_resources_yield_empty_dictionaries() {
    let dict = dictionary("<LexicalResource></LexicalResource>");
    assert_eq!(dict.index().headword_count(), 0);
    assert_eq!(dict.index().alias_count(), 0);
    assert!(dict.index().entries_for("anything").is_none());
    expect_missing(&dict, "anything");
}

#[test]
fn repeated_queries_return_equal_results() {
    let dict = dictionary(BANK_DOC);
    let first = dict.search("bank").expect("bank should be found");
    let second = dict.search("bank").expect("bank should be found");
    assert_eq!(first, second, "lookup is a pure read");
}

#[test]
fn opens_documents_from_disk() {
    init_logs();
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(RUN_DOC.as_bytes()).expect("write document");
    file.flush().expect("flush document");

    let dict = Dictionary::open(file.path()).unwrap_or_else(|e| panic!("open failed: {}", e));
    assert_eq!(dict.resource().entry_count(), 1);
    let direct = dict.search("run").expect("run should be found");
    let via_alias = dict.search("running").expect("running should fall back");
    assert_eq!(via_alias, direct);

    let dir = tempfile::tempdir().expect("create temp dir");
    let err = Dictionary::open(dir.path().join("absent.xml")).expect_err("expected an I/O error");
    assert!(matches!(&err, LmfError::Io(_)), "unexpected error: {}", err);
}
