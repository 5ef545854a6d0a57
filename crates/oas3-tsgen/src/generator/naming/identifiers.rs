use std::sync::LazyLock;

use any_ascii::any_ascii;
use inflections::Inflect;
use itertools::Itertools;
use regex::Regex;

use crate::generator::EnumStyle;

static NON_WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static BARE_IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z][A-Za-z0-9_]+$").unwrap());

/// Transliterates to ASCII and collapses every run of non-word characters into `_`.
/// With `guard_leading_digit`, a leading digit gets a `_` prefix.
#[must_use]
pub fn basic_chars(text: &str, guard_leading_digit: bool) -> String {
  let ascii = any_ascii(text.trim());
  let replaced = NON_WORD_RE.replace_all(&ascii, "_").into_owned();
  if guard_leading_digit && replaced.starts_with(|c: char| c.is_ascii_digit()) {
    format!("_{replaced}")
  } else {
    replaced
  }
}

/// Splits into words on separators, lower-to-upper transitions, the end of an acronym
/// (`XMLParser` -> `XML`, `Parser`) and letter/digit transitions.
#[must_use]
pub fn split_words(text: &str) -> Vec<String> {
  let mut words = vec![];

  for chunk in text.split(|c: char| !c.is_ascii_alphanumeric()).filter(|s| !s.is_empty()) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
      if !current.is_empty() {
        let prev = chars[i - 1];
        let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
        let boundary = (prev.is_ascii_lowercase() && ch.is_ascii_uppercase())
          || (prev.is_ascii_uppercase() && ch.is_ascii_uppercase() && next_is_lower)
          || prev.is_ascii_digit() != ch.is_ascii_digit();
        if boundary {
          words.push(std::mem::take(&mut current));
        }
      }
      current.push(ch);
    }

    if !current.is_empty() {
      words.push(current);
    }
  }

  words
}

/// Lowercase words joined by spaces, the form the `Inflect` conversions below start from.
fn phrase(text: &str) -> String {
  split_words(text).iter().map(|word| word.to_ascii_lowercase()).join(" ")
}

#[must_use]
pub fn upper_first(text: &str) -> String {
  let mut chars = text.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}

#[must_use]
pub fn camel_case(text: &str) -> String {
  phrase(text).to_camel_case()
}

/// camelCase identifier for operations and methods.
#[must_use]
pub fn method_name(name: &str) -> String {
  camel_case(&basic_chars(name, true))
}

/// PascalCase identifier for types.
#[must_use]
pub fn type_name(name: &str) -> String {
  phrase(&basic_chars(name, true)).to_pascal_case()
}

/// kebab-case file name, without extension.
#[must_use]
pub fn file_name(text: &str) -> String {
  phrase(&basic_chars(text, false)).to_kebab_case()
}

/// Name of an enum member derived from its literal value.
#[must_use]
pub fn enum_member_name(value: &str, style: EnumStyle) -> String {
  let words = phrase(&basic_chars(value, true));
  let name = match style {
    EnumStyle::Upper => words.to_constant_case(),
    EnumStyle::Pascal | EnumStyle::Alias => words.to_pascal_case(),
  };

  if name.is_empty() {
    match style {
      EnumStyle::Upper => "EMPTY".to_string(),
      EnumStyle::Pascal | EnumStyle::Alias => "Empty".to_string(),
    }
  } else if name.starts_with(|c: char| c.is_ascii_digit()) {
    format!("${name}")
  } else {
    name
  }
}

/// Property key as it may appear in a type literal: bare when it is a plain identifier,
/// single-quoted otherwise.
#[must_use]
pub fn escape_identifier(name: &str) -> String {
  if BARE_IDENTIFIER_RE.is_match(name) {
    name.to_string()
  } else {
    format!("'{}'", name.replace('\'', "\\'"))
  }
}
