use tovian_gloss::{draft, LexicalEntry, Lexicon};

fn main() {
    let lexicon = Lexicon::from_entries(vec![
        LexicalEntry::new("see", "ven", "ven", ""),
        LexicalEntry::new("go (motion)", "velo", "ve.lo", "vel"),
        LexicalEntry::new("friend", "meli", "me.li", "mel"),
        LexicalEntry::new("house", "nata", "na.ta", "nat"),
    ]);

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "You will go to the house with a friend.".to_string());
    println!("Input: {}", input);

    let d = draft(&lexicon, &input);
    println!(
        "\nAgreement: aux={} suffix={} pronoun={:?}",
        d.agreement.auxiliary(),
        d.agreement.person.suffix,
        d.agreement.person.subject_pronoun
    );

    println!("\nWords:");
    for (i, w) in d.words.iter().enumerate() {
        println!(
            "  {}: {:?} -> {:?} resolved={} verb={}",
            i, w.english, w.tovian, w.resolved, w.is_verb
        );
    }

    match &d.case_phrase {
        Some(cp) => println!(
            "\nCase phrase: {} ({}) consumes {:?}",
            cp.prefixed_noun,
            cp.case.as_str(),
            cp.consumed_positions
        ),
        None => println!("\nCase phrase: none"),
    }

    println!("Verb: {:?} at {:?}", d.verb_form, d.verb_position);
    println!("Dropped: {:?}", d.remainder);
    println!("\nDraft: {}", d.text());
}
