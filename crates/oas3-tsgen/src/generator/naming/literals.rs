use std::fmt::Write;

/// Single-quoted string literal with backslash escapes for the quote, the backslash and
/// control characters. Non-ASCII characters become `\uXXXX` escapes.
#[must_use]
pub fn quoted(value: &str) -> String {
  let mut out = String::with_capacity(value.len() + 2);
  out.push('\'');
  for ch in value.chars() {
    match ch {
      '\'' => out.push_str("\\'"),
      '\\' => out.push_str("\\\\"),
      '\n' => out.push_str("\\n"),
      '\r' => out.push_str("\\r"),
      '\t' => out.push_str("\\t"),
      '\u{08}' => out.push_str("\\b"),
      '\u{0c}' => out.push_str("\\f"),
      c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
      c => {
        let mut units = [0u16; 2];
        for unit in c.encode_utf16(&mut units) {
          let _ = write!(out, "\\u{unit:04X}");
        }
      }
    }
  }
  out.push('\'');
  out
}
