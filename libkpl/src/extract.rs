//! Property value extraction.
//!
//! A single pass over a key-property list (`key1=value1,key2="value, 2"`)
//! driven by a three-state automaton:
//!
//! | State             | Input        | Action                          | Next              |
//! |-------------------|--------------|---------------------------------|-------------------|
//! | `ScanningKey`     | `=` then `"` | consume both                    | `InQuotedValue`   |
//! | `ScanningKey`     | `=`          | consume                         | `InUnquotedValue` |
//! | `ScanningKey`     | `,`          | clear key                       | `ScanningKey`     |
//! | `ScanningKey`     | other        | append to key                   | `ScanningKey`     |
//! | `InUnquotedValue` | `,`          | emit                            | `ScanningKey`     |
//! | `InUnquotedValue` | other        | append to value                 | `InUnquotedValue` |
//! | `InQuotedValue`   | `\` + c      | append decoded escape           | `InQuotedValue`   |
//! | `InQuotedValue`   | `"`          | emit                            | `ScanningKey`     |
//! | `InQuotedValue`   | other        | append to value                 | `InQuotedValue`   |
//!
//! At end of input a value still in progress is emitted as-is. Malformed
//! input never produces an error, only a best-effort result.

use tracing::trace;

use crate::cursor::{Cursor, BACKSLASH};

/// Separates a key from its value.
const EQUALS: char = '=';
/// Separates key/value pairs outside quoted values.
const COMMA: char = ',';
/// Opens and closes a quoted value.
const QUOTE: char = '"';

/// A key and its decoded value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    pub key: String,
    pub value: String,
}

/// Scanner state. The value states own the text collected so far.
#[derive(Debug)]
enum State {
    ScanningKey { key: String },
    InUnquotedValue { key: String, value: String },
    InQuotedValue { key: String, value: String },
}

impl State {
    fn start() -> Self {
        State::ScanningKey { key: String::new() }
    }

    /// Feed one character (plus any character it pulls from the cursor).
    fn step(self, c: char, cursor: &mut Cursor<'_>, out: &mut Vec<Property>) -> State {
        match self {
            State::ScanningKey { mut key } => match c {
                EQUALS => {
                    if cursor.peek() == Some(QUOTE) {
                        cursor.advance();
                        State::InQuotedValue {
                            key,
                            value: String::new(),
                        }
                    } else {
                        State::InUnquotedValue {
                            key,
                            value: String::new(),
                        }
                    }
                }
                COMMA => {
                    key.clear();
                    State::ScanningKey { key }
                }
                c => {
                    key.push(c);
                    State::ScanningKey { key }
                }
            },
            State::InUnquotedValue { key, mut value } => match c {
                COMMA => {
                    out.push(Property { key, value });
                    State::start()
                }
                c => {
                    value.push(c);
                    State::InUnquotedValue { key, value }
                }
            },
            State::InQuotedValue { key, mut value } => match c {
                // The escaped character is taken here and never seen as a terminator.
                BACKSLASH => {
                    value.push(cursor.next_escaped());
                    State::InQuotedValue { key, value }
                }
                QUOTE => {
                    out.push(Property { key, value });
                    State::start()
                }
                c => {
                    value.push(c);
                    State::InQuotedValue { key, value }
                }
            },
        }
    }

    /// The value in progress at end of input, if any.
    fn finish(self) -> Option<Property> {
        match self {
            State::ScanningKey { .. } => None,
            State::InUnquotedValue { key, value } => Some(Property { key, value }),
            State::InQuotedValue { key, value } => {
                trace!(key = %key, "unterminated quoted value at end of input");
                Some(Property { key, value })
            }
        }
    }
}

/// Extract the keys and decoded values of a key-property list, in order.
///
/// Keys are reported as written, without validation or trimming.
///
/// # Example
///
/// ```
/// use libkpl::extract_properties;
///
/// let props = extract_properties("type=Cat,name=\"Tom, the cat\"");
/// assert_eq!(props[1].key, "name");
/// assert_eq!(props[1].value, "Tom, the cat");
/// ```
pub fn extract_properties(input: &str) -> Vec<Property> {
    let mut cursor = Cursor::new(input);
    let mut out = Vec::new();
    let mut state = State::start();

    while let Some(c) = cursor.advance() {
        state = state.step(c, &mut cursor, &mut out);
    }
    out.extend(state.finish());

    out
}

/// Extract the decoded values of a key-property list, in order.
///
/// # Example
///
/// ```
/// use libkpl::extract_values;
///
/// assert_eq!(extract_values("type=Cat,name=Tom"), vec!["Cat", "Tom"]);
/// ```
pub fn extract_values(input: &str) -> Vec<String> {
    extract_properties(input)
        .into_iter()
        .map(|p| p.value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(input: &str) -> Vec<String> {
        extract_values(input)
    }

    #[test]
    fn test_empty() {
        assert!(values("").is_empty());
    }

    #[test]
    fn test_unquoted() {
        assert_eq!(values("type=Cat,name=Tom"), vec!["Cat", "Tom"]);
    }

    #[test]
    fn test_single_pair() {
        assert_eq!(values("type=Cat"), vec!["Cat"]);
    }

    #[test]
    fn test_quoted_comma_does_not_split() {
        assert_eq!(
            values("type=Cat,name=\"Tom, the cat\""),
            vec!["Cat", "Tom, the cat"]
        );
    }

    #[test]
    fn test_escaped_quote_is_literal() {
        assert_eq!(values(r#"type=Cat,name="a\"b""#), vec!["Cat", "a\"b"]);
    }

    #[test]
    fn test_escaped_quote_at_value_end() {
        assert_eq!(values(r#"name="ab\"",x=1"#), vec!["ab\"", "1"]);
    }

    #[test]
    fn test_escaped_newline() {
        assert_eq!(
            values(r#"type=Cat,note="line1\nline2""#),
            vec!["Cat", "line1\nline2"]
        );
    }

    #[test]
    fn test_escaped_backslash_then_quote_terminates() {
        assert_eq!(values(r#"a="x\\",b=y"#), vec!["x\\", "y"]);
    }

    #[test]
    fn test_escaped_comma_and_other() {
        assert_eq!(values(r#"a="x\,y\qz""#), vec!["x,yqz"]);
    }

    #[test]
    fn test_trailing_empty_value() {
        assert_eq!(values("type=Cat,name="), vec!["Cat", ""]);
    }

    #[test]
    fn test_empty_values_between() {
        assert_eq!(values("a=,b=,c="), vec!["", "", ""]);
    }

    #[test]
    fn test_empty_quoted_value() {
        assert_eq!(values("a=\"\",b=x"), vec!["", "x"]);
    }

    #[test]
    fn test_unterminated_quote_flushes() {
        assert_eq!(
            values("type=Cat,name=\"incomplete"),
            vec!["Cat", "incomplete"]
        );
    }

    #[test]
    fn test_lone_open_quote() {
        assert_eq!(values("a=\""), vec![""]);
    }

    #[test]
    fn test_trailing_backslash_in_quoted() {
        assert_eq!(values("a=\"x\\"), vec!["x\\"]);
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(values("a=1,"), vec!["1"]);
    }

    #[test]
    fn test_key_without_equals_is_skipped() {
        assert_eq!(values("junk,a=1"), vec!["1"]);
        assert!(values("no-equals-here").is_empty());
    }

    #[test]
    fn test_equals_inside_unquoted_value() {
        assert_eq!(values("a=b=c,d=e"), vec!["b=c", "e"]);
    }

    #[test]
    fn test_quote_inside_unquoted_value_is_literal() {
        assert_eq!(values("a=x\"y,b=z"), vec!["x\"y", "z"]);
    }

    #[test]
    fn test_backslash_in_unquoted_value_is_literal() {
        assert_eq!(values(r"a=x\ny"), vec![r"x\ny"]);
    }

    #[test]
    fn test_text_after_closing_quote_is_skipped() {
        assert_eq!(values("a=\"x\"junk,b=y"), vec!["x", "y"]);
    }

    #[test]
    fn test_duplicate_values() {
        assert_eq!(values("a=1,b=1"), vec!["1", "1"]);
    }

    #[test]
    fn test_unicode() {
        assert_eq!(values("név=Kató,ключ=\"зна,чение\""), vec!["Kató", "зна,чение"]);
    }

    #[test]
    fn test_properties_keys() {
        let props = extract_properties("type=Cat,name=\"Tom\",x=1");
        let keys: Vec<&str> = props.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["type", "name", "x"]);
    }

    #[test]
    fn test_properties_key_reset_by_comma() {
        let props = extract_properties("a=\"x\"junk,b=y,c,d=z");
        let keys: Vec<&str> = props.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "d"]);
    }

    #[test]
    fn test_properties_unterminated() {
        assert_eq!(
            extract_properties("name=\"part"),
            vec![Property {
                key: "name".to_string(),
                value: "part".to_string(),
            }]
        );
    }

    #[test]
    fn test_idempotent() {
        let input = r#"type=Cat,name="a\"b",note="x\ny""#;
        assert_eq!(values(input), values(input));
    }
}
