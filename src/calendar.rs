//! Number, ordinal, month and named-date tables drawn from the lexicon.
//!
//! Entries are classified by their English field against closed word lists
//! and each table gets its own ordering. The same lists drive the
//! deterministic word of the day.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::entry::LexicalEntry;
use crate::lexicon::Lexicon;

/// Month names in calendar order
pub static MONTHS: &[&str] = &[
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december",
];

/// Words that make up a spelled-out cardinal number
pub static NUMBER_PARTS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand",
];

/// Ordinal words, first to twentieth
pub static ORDINALS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth", "tenth",
    "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth", "seventeenth",
    "eighteenth", "nineteenth", "twentieth",
];

/// A number word or numeral phrase ("three", "21 (numeral)"); phrases with "of" are excluded
pub fn is_number_word(english: &str) -> bool {
    let w = english.to_lowercase();
    if w.contains("of") {
        return false;
    }
    if w.starts_with(|c: char| c.is_ascii_digit()) {
        return true;
    }
    w.split_whitespace().any(|part| NUMBER_PARTS.contains(&part))
}

/// Starts with an ordinal ("third", "twelfth month")
pub fn is_ordinal_word(english: &str) -> bool {
    let w = english.to_lowercase();
    ORDINALS.iter().any(|o| w.starts_with(o))
}

/// Exactly a month name, any case
pub fn is_month(english: &str) -> bool {
    month_index(&english.to_lowercase()).is_some()
}

/// A month followed by a day or name, e.g. "june 21st"
pub fn is_named_date(english: &str) -> bool {
    let w = english.to_lowercase();
    MONTHS.iter().any(|m| w.strip_prefix(m).map_or(false, |rest| rest.starts_with(' ')))
}

fn month_index(word: &str) -> Option<usize> {
    MONTHS.iter().position(|m| *m == word)
}

fn ordinal_index(word: &str) -> Option<usize> {
    ORDINALS.iter().position(|o| word.starts_with(o))
}

/// Leading digits of the first word, like `parseInt`
fn leading_int(english: &str) -> Option<u64> {
    let first = english.split_whitespace().next()?;
    let digits: String = first.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Numbers first by value, then everything else alphabetically
pub fn compare_numbers(a: &LexicalEntry, b: &LexicalEntry) -> Ordering {
    match (leading_int(&a.english), leading_int(&b.english)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a
            .english
            .to_lowercase()
            .cmp(&b.english.to_lowercase())
            .then_with(|| a.english.cmp(&b.english)),
    }
}

fn month_key(english: &str) -> usize {
    month_index(&english.to_lowercase()).unwrap_or(usize::MAX)
}

/// Rough day-of-year key: month index * 31 + day, saturating on huge days
fn date_key(english: &str) -> u64 {
    let w = english.to_lowercase();
    let mut words = w.split(' ');
    let month = words.next().and_then(month_index).unwrap_or(0) as u64;
    let day = words
        .next()
        .and_then(|d| d.split(|c: char| !c.is_ascii_alphanumeric()).find(|p| !p.is_empty()))
        .map(|first| {
            if first.chars().all(|c| c.is_ascii_digit()) {
                first.parse::<u64>().unwrap_or(u64::MAX)
            } else {
                ordinal_index(first).map_or(0, |i| i as u64 + 1)
            }
        })
        .unwrap_or(0);
    month.saturating_mul(31).saturating_add(day)
}

/// Lexicon entries grouped for the numbers and calendar pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarTables {
    pub numbers: Vec<LexicalEntry>,
    pub ordinals: Vec<LexicalEntry>,
    pub months: Vec<LexicalEntry>,
    pub dates: Vec<LexicalEntry>,
}

impl CalendarTables {
    /// Partition and sort the relevant entries of a lexicon
    pub fn from_lexicon(lexicon: &Lexicon) -> Self {
        let select = |pred: &dyn Fn(&str) -> bool| -> Vec<LexicalEntry> {
            lexicon.iter().filter(|e| pred(&e.english)).cloned().collect()
        };

        let mut numbers = select(&|e| is_number_word(e) && !is_ordinal_word(e));
        let mut ordinals = select(&is_ordinal_word);
        let mut months = select(&is_month);
        let mut dates = select(&is_named_date);

        numbers.sort_by(compare_numbers);
        ordinals.sort_by(compare_numbers);
        months.sort_by_key(|e| month_key(&e.english));
        dates.sort_by_key(|e| date_key(&e.english));

        CalendarTables {
            numbers,
            ordinals,
            months,
            dates,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
            && self.ordinals.is_empty()
            && self.months.is_empty()
            && self.dates.is_empty()
    }
}

// "3 of spring" and "june 21" style entries stay out of the daily pick
static SEASON_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d+\s+of\s+(spring|summer|autumn|winter)$").expect("Invalid regex")
});

static MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^({})\s+\d+$", MONTHS.join("|"))).expect("Invalid regex")
});

fn is_calendar_entry(english: &str) -> bool {
    let w = english.to_lowercase();
    SEASON_DAY_RE.is_match(&w) || MONTH_DAY_RE.is_match(&w)
}

/// The entry featured on a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordOfTheDay {
    pub entry: LexicalEntry,
    /// The lexicon's name for the date itself ("january 20"), if it has one
    pub named_date: Option<LexicalEntry>,
}

/// Pick the featured entry for `date`.
///
/// The pick is deterministic: `(year * 372 + month * 31 + day) % pool`,
/// where the pool skips date-like entries unless nothing else is left.
/// Returns `None` for an empty lexicon.
pub fn word_of_the_day(lexicon: &Lexicon, date: NaiveDate) -> Option<WordOfTheDay> {
    if lexicon.is_empty() {
        return None;
    }
    let non_calendar: Vec<&LexicalEntry> = lexicon
        .iter()
        .filter(|e| !is_calendar_entry(&e.english))
        .collect();
    let pool: Vec<&LexicalEntry> = if non_calendar.is_empty() {
        lexicon.iter().collect()
    } else {
        non_calendar
    };

    let seed =
        i64::from(date.year()) * 372 + i64::from(date.month()) * 31 + i64::from(date.day());
    let index = seed.rem_euclid(pool.len() as i64) as usize;

    let date_name = format!("{} {}", MONTHS[date.month0() as usize], date.day());
    let named_date = lexicon
        .iter()
        .find(|e| e.english.to_lowercase() == date_name)
        .cloned();

    Some(WordOfTheDay {
        entry: pool[index].clone(),
        named_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(english: &str) -> LexicalEntry {
        LexicalEntry::new(english, english, "", "")
    }

    fn englishes(entries: &[LexicalEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.english.as_str()).collect()
    }

    #[test]
    fn test_classifiers() {
        assert!(is_number_word("twenty one"));
        assert!(is_number_word("100"));
        assert!(!is_number_word("one of us"));
        assert!(!is_number_word("someone"));
        assert!(is_ordinal_word("Third"));
        assert!(is_month("May"));
        assert!(!is_month("may 1st"));
        assert!(is_named_date("may 1st"));
        assert!(!is_named_date("mayor"));
    }

    #[test]
    fn test_tables() {
        let lex = Lexicon::from_entries(vec![
            entry("ten"),
            entry("2"),
            entry("three"),
            entry("first"),
            entry("march"),
            entry("january"),
            entry("march 3rd"),
            entry("january tenth"),
            entry("march first"),
            entry("house"),
        ]);
        let tables = CalendarTables::from_lexicon(&lex);
        assert_eq!(englishes(&tables.numbers), vec!["2", "ten", "three"]);
        assert_eq!(englishes(&tables.ordinals), vec!["first"]);
        assert_eq!(englishes(&tables.months), vec!["january", "march"]);
        assert_eq!(
            englishes(&tables.dates),
            vec!["january tenth", "march first", "march 3rd"]
        );
    }

    #[test]
    fn test_huge_day_does_not_overflow() {
        let lex = Lexicon::from_entries(vec![
            entry("december 18446744073709551615"),
            entry("march 3"),
            entry("may 99999999999999999999999999"),
        ]);
        let tables = CalendarTables::from_lexicon(&lex);
        assert_eq!(tables.dates[0].english, "march 3");
        assert_eq!(tables.dates.len(), 3);
    }

    #[test]
    fn test_word_of_the_day() {
        let lex = Lexicon::from_entries(vec![
            entry("water"),
            entry("january 20"),
            entry("3 of spring"),
            entry("house"),
        ]);
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        // seed = 2024 * 372 + 31 + 20 = 752979, pool = [water, house]
        let wotd = word_of_the_day(&lex, date).unwrap();
        assert_eq!(wotd.entry.english, "house");
        assert_eq!(wotd.named_date.unwrap().english, "january 20");

        let next = word_of_the_day(&lex, date.succ_opt().unwrap()).unwrap();
        assert_eq!(next.entry.english, "water");
        assert!(next.named_date.is_none());
    }

    #[test]
    fn test_word_of_the_day_falls_back_to_calendar_entries() {
        let lex = Lexicon::from_entries(vec![entry("march 3")]);
        let date = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let wotd = word_of_the_day(&lex, date).unwrap();
        assert_eq!(wotd.entry.english, "march 3");
        assert_eq!(wotd.named_date.unwrap().english, "march 3");
        assert!(word_of_the_day(&Lexicon::new(), date).is_none());
    }

    #[test]
    fn test_empty_tables() {
        let lex = Lexicon::from_entries(vec![entry("house")]);
        assert!(CalendarTables::from_lexicon(&lex).is_empty());
    }
}
