//! Integration tests for the public glossing and translation API
//!
//! These run both pipelines end to end against a small inline lexicon
//! table, the same way a UI collaborator would use the crate.

use std::io::Write;

use chrono::NaiveDate;

use tovian_gloss::case_phrase::detect_case_phrase;
use tovian_gloss::gloss::{NO_MATCH, UNKNOWN_SEGMENT};
use tovian_gloss::search::{combined_documents, DocumentKind};
use tovian_gloss::tense::resolve_tense;
use tovian_gloss::{
    best_match_token, gloss, load_lexicon, normalize_tovian, tokenize_tovian, translate, Case,
    ChunkType, Chunker, Engine, FuzzySearch, GlossError, GuidePage, LexicalEntry, Lexicon,
    LexiconBuilder, SubstringSearch, Tense,
};

const LEXICON_CSV: &str = "English,Tovian,IPA,POS,Roots\n\
water,tovi,to.vi,N,tov\n\
house,nata,na.ta,N,nat\n\
friend,meli,me.li,N,mel\n\
see,ven,ven,V,ven\n\
go (motion),velo,ve.lo,V,vel\n\
speak,kesi,ke.si,V,kes\n\
night,ka'na,ka.na,N,kan\n\
foo (obsolete),fu,fu,N,\n\
three,sano,sa.no,NUM,\n\
march,merus,me.rus,N,\n";

fn make_test_lexicon() -> Lexicon {
    Lexicon::from_csv(LEXICON_CSV).unwrap()
}

fn water() -> Lexicon {
    Lexicon::from_entries(vec![LexicalEntry::new("water", "tovi", "to.vi", "tov")])
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_obsolete_rows_excluded() {
    let lexicon = make_test_lexicon();
    assert_eq!(lexicon.len(), 9);
    assert!(lexicon.iter().all(|e| e.english != "foo (obsolete)"));
}

#[test]
fn test_builder_report() {
    let mut builder = LexiconBuilder::new();
    let report = builder.load_csv(LEXICON_CSV).unwrap();
    assert_eq!(report.kept, 9);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_load_failure_surfaces() {
    assert!(matches!(Lexicon::from_csv(""), Err(GlossError::EmptyLexicon)));

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("dictionary.csv");
    let err = load_lexicon(missing.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, GlossError::Io { .. }));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(LEXICON_CSV.as_bytes()).unwrap();
    let lexicon = load_lexicon(file.path().to_str().unwrap()).unwrap();
    assert_eq!(lexicon.entries(), make_test_lexicon().entries());
}

// =============================================================================
// Normalizer and tokenizer
// =============================================================================

#[test]
fn test_normalize_idempotent() {
    for t in ["Tovi", "KA\u{2019}NA", "ka\u{02BC}na-Wa", "", "e\u{301}"] {
        let once = normalize_tovian(t);
        assert_eq!(normalize_tovian(&once), once);
    }
}

#[test]
fn test_tokenize_empty() {
    assert!(tokenize_tovian("").is_empty());
}

#[test]
fn test_tokenize_drops_punct_and_space() {
    let tokens: Vec<String> = tokenize_tovian("hello, world")
        .into_iter()
        .map(|t| t.text)
        .collect();
    assert_eq!(tokens, vec!["hello", "world"]);
}

#[test]
fn test_tokenize_keeps_hyphen_and_apostrophe() {
    let text = "ka\u{2019}na tovi-nata.";
    let tokens = tokenize_tovian(text);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].text, "ka\u{2019}na");
    assert_eq!(tokens[1].text, "tovi-nata");
    // Offsets point back into the input
    assert_eq!(&text[tokens[1].start..tokens[1].end()], "tovi-nata");
}

#[test]
fn test_chunks_cover_input() {
    let text = "tovi, nata!";
    let chunks = Chunker::new(text).make_chunks();
    let rebuilt: String = chunks.iter().map(|c| c.text(text)).collect();
    assert_eq!(rebuilt, text);
    assert_eq!(chunks[0].chunk_type, ChunkType::Word);
    assert_eq!(chunks[1].chunk_type, ChunkType::Punct);
}

// =============================================================================
// Matcher
// =============================================================================

#[test]
fn test_best_match_strategies() {
    let lex = water();
    assert_eq!(best_match_token(&lex, "tovi").unwrap().english, "water");
    assert_eq!(best_match_token(&lex, "tovi-").unwrap().english, "water");
    assert_eq!(best_match_token(&lex, "toviwa").unwrap().english, "water");
    assert!(best_match_token(&lex, "xyz").is_none());
}

#[test]
fn test_curly_apostrophe_token_matches() {
    let lex = make_test_lexicon();
    assert_eq!(best_match_token(&lex, "Ka\u{2019}na").unwrap().english, "night");
}

// =============================================================================
// Glossing
// =============================================================================

#[test]
fn test_gloss_compound_with_unknown_segment() {
    let rows = gloss(&["tovi-wa"], &water());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].english_gloss, format!("water + {}", UNKNOWN_SEGMENT));
    assert_eq!(rows[0].ipa, "to.vi");
    assert_eq!(rows[0].roots, "tov");
    assert!(rows[0].is_compound());
}

#[test]
fn test_gloss_is_positional() {
    let lexicon = make_test_lexicon();
    let tokens = ["nata", "qqq", "tovi-nata", "meli"];
    let rows = gloss(&tokens, &lexicon);
    assert_eq!(rows.len(), tokens.len());
    for (row, token) in rows.iter().zip(tokens.iter()) {
        assert_eq!(&row.token, token);
    }
    assert_eq!(rows[1].english_gloss, NO_MATCH);
    assert!(rows[1].is_no_match());
    assert_eq!(rows[2].english_gloss, "water + house");
    assert_eq!(rows[2].roots, "tov | nat");
    assert_eq!(rows[2].segment_display(), "tovi\u{2011}nata");
}

// =============================================================================
// Case phrases and tense
// =============================================================================

#[test]
fn test_case_phrase_in_the_house() {
    let lex = Lexicon::from_entries(vec![LexicalEntry::new("house", "nata", "", "")]);
    let cp = detect_case_phrase(&lex, &["in", "the", "house"]).unwrap();
    assert_eq!(cp.prefixed_noun, "a-ti-nata");
    assert_eq!(cp.consumed_positions.into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(cp.case, Case::Locative);
}

#[test]
fn test_case_phrase_indefinite() {
    let lex = make_test_lexicon();
    let cp = detect_case_phrase(&lex, &["with", "a", "friend"]).unwrap();
    assert_eq!(cp.prefixed_noun, "o-si-meli");
}

#[test]
fn test_tense_cues() {
    assert_eq!(resolve_tense("I will go tomorrow").auxiliary(), "fo");
    assert_eq!(resolve_tense("I walked yesterday").auxiliary(), "fe");
    assert_eq!(resolve_tense("I walk").auxiliary(), "fa");
    assert_eq!(resolve_tense("I walk"), Tense::Present);
}

// =============================================================================
// Translation
// =============================================================================

#[test]
fn test_translate_sov() {
    let lexicon = make_test_lexicon();
    let t = translate(&lexicon, "I see the friend in the house.");
    assert_eq!(t.tovian, "na a-ti-nata fa vena");
    assert_eq!(t.romanization, t.tovian);
    assert_eq!(t.ipa, "na a-ti-nata fa ven");
}

#[test]
fn test_translate_future_second_person() {
    let lexicon = make_test_lexicon();
    let t = translate(&lexicon, "You will speak to a friend");
    assert_eq!(t.tovian, "wa o-su-meli fo kesio");
}

#[test]
fn test_translate_no_verb_keeps_words() {
    let lexicon = make_test_lexicon();
    let t = translate(&lexicon, "water and house");
    assert_eq!(t.tovian, "fa tovi and nata");
}

#[test]
fn test_translate_keeps_ellipsis() {
    let lexicon = make_test_lexicon();
    let t = translate(&lexicon, "water ... house");
    assert_eq!(t.tovian, "fa tovi ... nata");
    assert_eq!(t.ipa, "fa to.vi ... na.ta");
}

#[test]
fn test_translate_deterministic() {
    let lexicon = make_test_lexicon();
    let text = "You go to the house with a friend yesterday";
    assert_eq!(translate(&lexicon, text), translate(&lexicon, text));
}

#[test]
fn test_engine_shares_lexicon_across_threads() {
    let engine = Engine::new(make_test_lexicon());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.translate("I see the house").tovian)
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "na fa vena");
    }
}

// =============================================================================
// Search documents and tables
// =============================================================================

#[test]
fn test_search_over_vocab_and_guide() {
    let lexicon = make_test_lexicon();
    let pages = vec![GuidePage::from_markdown("verbs", "# Verbs\nVerbs come last.")];
    let documents = combined_documents(&lexicon, &pages);
    assert_eq!(documents.len(), lexicon.len() + 1);
    assert_eq!(documents.last().unwrap().kind, DocumentKind::Guide);

    let hits = SubstringSearch::new(&documents).search("speaking");
    assert!(hits.is_empty());
    let hits = SubstringSearch::new(&documents).search("verbs");
    assert_eq!(hits.len(), 1);
    assert_eq!(documents[hits[0].document].kind, DocumentKind::Guide);
}

#[test]
fn test_word_of_the_day_is_stable() {
    let engine = Engine::new(make_test_lexicon());
    let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let first = engine.word_of_the_day(date).unwrap();
    assert_eq!(engine.word_of_the_day(date).unwrap(), first);
    // seed = 2025 * 372 + 6 * 31 + 1 = 753487, 9 entries
    assert_eq!(first.entry.english, "three");
    assert!(first.named_date.is_none());
    assert!(Engine::new(Lexicon::new()).word_of_the_day(date).is_none());
}

#[test]
fn test_calendar_tables() {
    let tables = Engine::new(make_test_lexicon()).calendar();
    assert_eq!(tables.numbers.len(), 1);
    assert_eq!(tables.numbers[0].tovian, "sano");
    assert_eq!(tables.months.len(), 1);
    assert!(tables.dates.is_empty());
}
