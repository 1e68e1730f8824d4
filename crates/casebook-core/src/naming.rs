//! Identifier tokenization and title casing
//!
//! Test identifiers mix snake_case, camelCase and acronyms. [`split_name`]
//! segments an identifier into words and [`title_case`] reassembles a word
//! sequence into a natural-language phrase.

use std::sync::OnceLock;

use regex::Regex;

/// Words kept lowercase in titles unless they open the phrase
const FUNCTION_WORDS: [&str; 5] = ["in", "a", "the", "of", "has"];

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("[0-9]+|[A-Z]+[a-z]*|[a-z]+").expect("word pattern is valid"))
}

/// Split an identifier into word tokens.
///
/// Underscores are split first. More than two underscore-delimited segments
/// means the author already chose the word breaks, so the segments pass
/// through verbatim; this keeps camel-cased identifiers quoted inside a
/// snake_case name intact (`test_splitName_works` stays `splitName`).
/// With at most one underscore each segment is scanned for digit runs,
/// acronym runs and camel-case words. Acronyms (all-uppercase, length > 1)
/// are preserved verbatim; every other token is lowercased.
pub fn split_name(name: &str) -> Vec<String> {
    let bits: Vec<&str> = name.split('_').collect();
    if bits.len() > 2 {
        return bits.into_iter().map(str::to_string).collect();
    }
    let mut words = Vec::new();
    for segment in bits {
        split_segment(segment, &mut words);
    }
    words
}

fn split_segment(segment: &str, words: &mut Vec<String>) {
    for run in word_pattern().find_iter(segment) {
        let run = run.as_str();
        let upper = run.chars().take_while(char::is_ascii_uppercase).count();
        if upper >= 2 && upper < run.len() {
            // An uppercase run bleeding into a lowercase tail spans two
            // words; the last capital starts the second one (DNSName is
            // DNS + Name, not DNSN + ame).
            push_word(words, &run[..upper - 1]);
            push_word(words, &run[upper - 1..]);
        } else {
            push_word(words, run);
        }
    }
}

fn push_word(words: &mut Vec<String>, word: &str) {
    if word.is_empty() {
        return;
    }
    if word.len() > 1 && word == word.to_ascii_uppercase() {
        words.push(word.to_string());
    } else {
        words.push(word.to_ascii_lowercase());
    }
}

/// Join word tokens into a capitalized phrase.
///
/// Acronyms pass through verbatim, even when they spell a function word.
/// Function words stay lowercase and every other word is capitalized. The
/// first character of the phrase is forced uppercase even when the phrase
/// opens with a function word.
pub fn title_case(words: &[String]) -> String {
    let mut titled = Vec::with_capacity(words.len());
    for word in words {
        if word.len() > 1 && *word == word.to_ascii_uppercase() {
            titled.push(word.clone());
        } else if FUNCTION_WORDS.contains(&word.to_ascii_lowercase().as_str()) {
            titled.push(word.to_ascii_lowercase());
        } else {
            titled.push(capitalize(word));
        }
    }
    let phrase = titled.join(" ");
    let mut chars = phrase.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => phrase,
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}

/// Display title for a test class name: every `test` marker token is
/// dropped before title casing.
pub fn class_title(name: &str) -> String {
    let words: Vec<String> = split_name(name)
        .into_iter()
        .filter(|word| !word.eq_ignore_ascii_case("test"))
        .collect();
    title_case(&words)
}

/// Display title for a test method name: the leading prefix token
/// (conventionally `test`) is dropped before title casing.
pub fn method_title(name: &str) -> String {
    let words = split_name(name);
    title_case(words.get(1..).unwrap_or_default())
}
