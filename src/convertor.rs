//! Naming conventions and literal token substitution.
//!
//! A component name is rendered once into six conventions. Every generated
//! file and custom directory then has the six placeholder tokens replaced in a
//! single scan, so a replacement value is never rescanned for other tokens.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Placeholder tokens, in substitution order.
pub const TOKENS: [&str; 6] = [
    "templatename",
    "TemplateName",
    "templateName",
    "template-name",
    "template_name",
    "TEMPLATE_NAME",
];

fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        let alternation = TOKENS
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<String>>()
            .join("|");
        Regex::new(&alternation).expect("token alternation should be a valid pattern")
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Convertors {
    values: [String; 6],
}

impl Convertors {
    pub fn new(name: &str) -> Self {
        let words = split_words(name);
        let snake = join_lower(&words, '_');
        let upper_snake = snake.to_uppercase();
        Self {
            values: [
                name.to_string(),
                pascal_case(&words),
                camel_case(&words),
                join_lower(&words, '-'),
                snake,
                upper_snake,
            ],
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        TOKENS
            .iter()
            .position(|t| *t == token)
            .map(|i| self.values[i].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        TOKENS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Replaces every occurrence of every token in one pass.
    pub fn substitute<'a>(&self, text: &'a str) -> Cow<'a, str> {
        token_pattern().replace_all(text, |caps: &Captures| {
            self.get(&caps[0]).unwrap_or(&caps[0]).to_string()
        })
    }

    pub fn contains_token(text: &str) -> bool {
        token_pattern().is_match(text)
    }
}

/// Splits a name into words on separators, case changes and digit runs.
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    for run in s.split(|c: char| !c.is_alphanumeric()) {
        let chars = run.chars().collect::<Vec<char>>();
        let mut start = 0;
        for i in 1..chars.len() {
            let (prev, cur) = (chars[i - 1], chars[i]);
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && cur.is_uppercase())
                || (prev.is_alphabetic() && cur.is_numeric())
                || (prev.is_numeric() && cur.is_alphabetic())
                || (prev.is_uppercase()
                    && cur.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(chars[start..i].iter().collect());
                start = i;
            }
        }
        if start < chars.len() {
            words.push(chars[start..].iter().collect());
        }
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
    }
}

fn pascal_case(words: &[String]) -> String {
    words.iter().map(|word| capitalize(word)).collect()
}

fn camel_case(words: &[String]) -> String {
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i == 0 {
            out.push_str(&word.to_lowercase());
        } else {
            out.push_str(&capitalize(word));
        }
    }
    out
}

fn join_lower(words: &[String], sep: char) -> String {
    words
        .iter()
        .map(|word| word.to_lowercase())
        .collect::<Vec<String>>()
        .join(&sep.to_string())
}

/// camelCase rendering of an arbitrary name, used for custom file type keys.
pub fn to_camel_case(s: &str) -> String {
    camel_case(&split_words(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convertors_for_camel_name() {
        let convertors = Convertors::new("myButton");
        let expected = [
            ("templatename", "myButton"),
            ("TemplateName", "MyButton"),
            ("templateName", "myButton"),
            ("template-name", "my-button"),
            ("template_name", "my_button"),
            ("TEMPLATE_NAME", "MY_BUTTON"),
        ];
        assert_eq!(convertors.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn split_words_handles_acronyms_digits_and_separators() {
        assert_eq!(split_words("HTMLParser"), ["HTML", "Parser"]);
        assert_eq!(split_words("user-card_item"), ["user", "card", "item"]);
        assert_eq!(split_words("button2Large"), ["button", "2", "Large"]);
        assert_eq!(split_words("Card"), ["Card"]);
        assert!(split_words("").is_empty());
    }

    #[test]
    fn pascal_and_kebab_from_kebab_name() {
        let convertors = Convertors::new("user-card");
        assert_eq!(convertors.get("TemplateName"), Some("UserCard"));
        assert_eq!(convertors.get("templateName"), Some("userCard"));
        assert_eq!(convertors.get("template-name"), Some("user-card"));
        assert_eq!(convertors.get("TEMPLATE_NAME"), Some("USER_CARD"));
        assert_eq!(convertors.get("unknown"), None);
    }

    #[test]
    fn substitute_replaces_all_occurrences() {
        let convertors = Convertors::new("myButton");
        let text = "const TemplateName = 'template-name'; // TemplateName TEMPLATE_NAME";
        assert_eq!(
            convertors.substitute(text),
            "const MyButton = 'my-button'; // MyButton MY_BUTTON"
        );
    }

    #[test]
    fn substitute_is_idempotent() {
        let convertors = Convertors::new("myButton");
        let text = "templatename TemplateName templateName template-name template_name TEMPLATE_NAME";
        let once = convertors.substitute(text).into_owned();
        let twice = convertors.substitute(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn replacement_text_is_not_rescanned() {
        // the raw name itself looks like a token
        let convertors = Convertors::new("templateName");
        assert_eq!(convertors.substitute("templatename"), "templateName");
    }

    #[test]
    fn substitution_is_case_sensitive() {
        let convertors = Convertors::new("card");
        assert_eq!(convertors.substitute("TEMPLATEname"), "TEMPLATEname");
        assert!(!Convertors::contains_token("components/static"));
        assert!(Convertors::contains_token("components/TemplateName"));
    }

    #[test]
    fn camel_case_of_custom_type() {
        assert_eq!(to_camel_case("Story"), "story");
        assert_eq!(to_camel_case("story-book"), "storyBook");
        assert_eq!(to_camel_case("StoryBook"), "storyBook");
    }
}
