use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A run of cased letters. Digits, punctuation and uncased scripts split words.
static WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Lu}\p{Ll}\p{Lt}]+").expect("word pattern compiles")
});

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\p{L}_][\p{L}\p{Nd}_]*$").expect("identifier pattern compiles")
});

const GO_KEYWORDS: [&str; 25] = [
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface",
    "map", "package", "range", "return", "select", "struct", "switch", "type",
    "var",
];

/// Title-case a JSON key into its exported field name.
///
/// Each word gets a titlecased first letter and a lower-case tail; every
/// other character is copied as-is. `user_id` → `User_Id`, `firstName` →
/// `Firstname`, `2fa` → `2Fa`.
pub fn export_name(key: &str) -> String {
    WORD.replace_all(key, |caps: &Captures| title_word(&caps[0]))
        .into_owned()
}

fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => title_char(first)
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Titlecase mapping of one letter.
///
/// Differs from `to_uppercase` for the Latin digraphs (`ǆ` → `ǅ`) and for
/// letters whose upper-case form is several characters (`ß` → `Ss`,
/// `ﬁ` → `Fi`). Greek letters with ypogegrammeni keep the upper-case
/// expansion.
fn title_char(c: char) -> impl Iterator<Item = char> {
    let digraph = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => Some('ǅ'),
        'Ǉ' | 'ǈ' | 'ǉ' => Some('ǈ'),
        'Ǌ' | 'ǋ' | 'ǌ' => Some('ǋ'),
        'Ǳ' | 'ǲ' | 'ǳ' => Some('ǲ'),
        _ => None,
    };
    let upper: Vec<char> = match digraph {
        Some(title) => vec![title],
        None => c.to_uppercase().collect(),
    };
    let mut upper = upper.into_iter();
    let head = upper.next();
    head.into_iter().chain(upper.flat_map(char::to_lowercase))
}

/// Name of the record synthesized for `export_name` under `parent`.
pub fn nested_name(parent: &str, export_name: &str) -> String {
    format!("{parent}{export_name}")
}

/// First of `candidate`, `candidate2`, `candidate3`, … that is not taken.
pub fn disambiguate(candidate: &str, taken: impl Fn(&str) -> bool) -> String {
    if !taken(candidate) {
        return candidate.to_string();
    }
    (2u64..)
        .map(|n| format!("{candidate}{n}"))
        .find(|name| !taken(name))
        .unwrap_or_else(|| candidate.to_string())
}

/// A Go identifier that is not a keyword.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name) && !GO_KEYWORDS.contains(&name)
}
