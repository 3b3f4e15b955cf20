use std::iter::Peekable;

use thiserror::Error;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::model::Arity;
use crate::types::{NUMBER_TYPE, STRING_TYPE};

mod lexer;

use lexer::{IllegalCharacter, Lexer, Token};

/// Errors raised while parsing an option spec string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpecError {
    /// The spec string does not follow `NAME[ATTR][=TYPE]`.
    #[error("malformed option spec '{spec}' at offset {offset}: {reason}.")]
    Malformed {
        /// The spec string.
        spec: String,
        /// Byte offset of the problem within `spec`.
        offset: usize,
        /// What went wrong.
        reason: String,
    },
    /// The spec string uses a recognized, but not implemented, arity marker.
    #[error("option spec '{spec}' uses the '{marker}' attribute, which is not implemented.")]
    UnsupportedAttribute {
        /// The spec string.
        spec: String,
        /// The unsupported marker.
        marker: char,
    },
}

/// The structured result of parsing a spec string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSpec {
    /// The single character name.
    pub short: Option<char>,
    /// The multi character name.
    pub long: Option<String>,
    /// The arity, resolved from the attribute markers.
    pub arity: Arity,
    /// The value type name, resolved from the `=TYPE` suffix.
    pub value_type: Option<&'static str>,
}

impl std::str::FromStr for ParsedSpec {
    type Err = SpecError;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        parse_spec(spec)
    }
}

struct SpecParser<'a> {
    spec: &'a str,
    tokens: Peekable<std::vec::IntoIter<Token>>,
}

impl<'a> SpecParser<'a> {
    fn new(spec: &'a str) -> Result<Self, SpecError> {
        let tokens: Vec<Token> = Lexer::new(spec)
            .collect::<Result<Vec<Token>, IllegalCharacter>>()
            .map_err(|IllegalCharacter { offset, character }| SpecError::Malformed {
                spec: spec.to_string(),
                offset,
                reason: format!("illegal character '{character}'"),
            })?;

        Ok(Self {
            spec,
            tokens: tokens.into_iter().peekable(),
        })
    }

    fn malformed(&self, offset: usize, reason: impl Into<String>) -> SpecError {
        SpecError::Malformed {
            spec: self.spec.to_string(),
            offset,
            reason: reason.into(),
        }
    }

    fn word(&mut self) -> Option<(usize, String)> {
        match self
            .tokens
            .next_if(|token| matches!(token, Token::Word(..)))
        {
            Some(Token::Word(offset, word)) => Some((offset, word)),
            _ => None,
        }
    }

    fn pipe(&mut self) -> Option<usize> {
        self.tokens
            .next_if(|token| matches!(token, Token::Pipe(_)))
            .map(|token| token.offset())
    }

    // NAME := word | word? '|' word?
    fn names(&mut self) -> Result<(Option<char>, Option<String>), SpecError> {
        let first = self.word();

        if self.pipe().is_none() {
            return match first {
                Some((_, word)) => {
                    let mut characters = word.chars();
                    match (characters.next(), characters.next()) {
                        (Some(c), None) => Ok((Some(c), None)),
                        _ => Ok((None, Some(word))),
                    }
                }
                None => {
                    let offset = self.offset();
                    Err(self.malformed(offset, "missing option name"))
                }
            };
        }

        let second = self.word();

        if let Some(offset) = self.pipe() {
            return Err(self.malformed(offset, "more than one '|' in option name"));
        }

        let short = match first {
            Some((offset, word)) => {
                let mut characters = word.chars();
                match (characters.next(), characters.next()) {
                    (Some(c), None) => Some(c),
                    _ => {
                        return Err(self.malformed(
                            offset,
                            format!("short name '{word}' must be a single character"),
                        ));
                    }
                }
            }
            None => None,
        };
        let long = second.map(|(_, word)| word);

        if short.is_none() && long.is_none() {
            return Err(self.malformed(0, "missing option name"));
        }

        Ok((short, long))
    }

    // ATTR := [:+?*]*
    // Markers are resolved by priority, not by position: require > multiple > optional > '*' > flag.
    fn arity(&mut self) -> Result<Arity, SpecError> {
        let mut markers = Vec::default();

        while let Some(Token::Marker(_, marker)) = self.tokens.peek() {
            markers.push(*marker);
            self.tokens.next();
        }

        for candidate in [':', '+', '?'] {
            if markers.contains(&candidate) {
                return Ok(Arity::from_marker(candidate)
                    .expect("internal error - candidate must be a supported marker"));
            }
        }

        if markers.contains(&'*') {
            return Err(SpecError::UnsupportedAttribute {
                spec: self.spec.to_string(),
                marker: '*',
            });
        }

        Ok(Arity::Flag)
    }

    // TYPE := '=' ( s | string | i | integer )
    fn value_type(&mut self) -> Result<Option<&'static str>, SpecError> {
        let equals = match self.tokens.peek() {
            Some(Token::Equals(offset)) => *offset,
            _ => return Ok(None),
        };
        self.tokens.next();

        match self.word() {
            Some((_, word)) if word == "s" || word == "string" => Ok(Some(STRING_TYPE)),
            Some((_, word)) if word == "i" || word == "integer" => Ok(Some(NUMBER_TYPE)),
            Some((offset, word)) => {
                Err(self.malformed(offset, format!("unknown value type '{word}'")))
            }
            None => Err(self.malformed(equals + 1, "missing value type after '='")),
        }
    }

    fn finish(&mut self) -> Result<(), SpecError> {
        match self.tokens.next() {
            Some(token) => Err(self.malformed(token.offset(), format!("unexpected {token}"))),
            None => Ok(()),
        }
    }

    fn offset(&mut self) -> usize {
        match self.tokens.peek() {
            Some(token) => token.offset(),
            None => self.spec.len(),
        }
    }
}

/// Parse a spec string of the form `NAME[ATTR][=TYPE]`.
///
/// * `NAME`: `short`, `long`, or `short|long` (alphanumeric and `-`).
/// Without a `|`, a single character name is the short name, otherwise it is the long name.
/// * `ATTR`: `:` (require), `+` (multiple), `?` (optional), or nothing (flag).
/// When several markers are present, the first in that order wins.
/// The zero-or-more marker `*` is rejected with [`SpecError::UnsupportedAttribute`], but only when it is the highest priority marker present (ex: `x*:` is a require option).
/// * `TYPE`: `s`/`string` or `i`/`integer`.
///
/// ### Example
/// ```
/// # use optspec_core as optspec;
/// use optspec::{parse_spec, Arity, SpecError};
///
/// let parsed = parse_spec("o|output:=s").unwrap();
/// assert_eq!(parsed.short, Some('o'));
/// assert_eq!(parsed.long.as_deref(), Some("output"));
/// assert_eq!(parsed.arity, Arity::Require);
/// assert_eq!(parsed.value_type, Some("string"));
///
/// assert_eq!(parse_spec("x*:").unwrap().arity, Arity::Require);
/// assert!(matches!(parse_spec("x*"), Err(SpecError::UnsupportedAttribute { .. })));
/// ```
pub fn parse_spec(spec: &str) -> Result<ParsedSpec, SpecError> {
    let mut parser = SpecParser::new(spec)?;
    let (short, long) = parser.names()?;
    let arity = parser.arity()?;
    let value_type = parser.value_type()?;
    parser.finish()?;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Parsed spec '{spec}': short={short:?}, long={long:?}, arity={arity:?}, type={value_type:?}.");
    }

    Ok(ParsedSpec {
        short,
        long,
        arity,
        value_type,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::distributions::Alphanumeric;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn parsed(
        short: Option<char>,
        long: Option<&str>,
        arity: Arity,
        value_type: Option<&'static str>,
    ) -> ParsedSpec {
        ParsedSpec {
            short,
            long: long.map(str::to_string),
            arity,
            value_type,
        }
    }

    #[rstest]
    #[case("v", parsed(Some('v'), None, Arity::Flag, None))]
    #[case("verbose", parsed(None, Some("verbose"), Arity::Flag, None))]
    #[case("v|verbose", parsed(Some('v'), Some("verbose"), Arity::Flag, None))]
    #[case("dry-run", parsed(None, Some("dry-run"), Arity::Flag, None))]
    #[case("1", parsed(Some('1'), None, Arity::Flag, None))]
    #[case("f:", parsed(Some('f'), None, Arity::Require, None))]
    #[case("file:", parsed(None, Some("file"), Arity::Require, None))]
    #[case("f|file:", parsed(Some('f'), Some("file"), Arity::Require, None))]
    #[case("i|include+", parsed(Some('i'), Some("include"), Arity::Multiple, None))]
    #[case("c|color?", parsed(Some('c'), Some("color"), Arity::Optional, None))]
    #[case("a|alpha=i", parsed(Some('a'), Some("alpha"), Arity::Flag, Some(NUMBER_TYPE)))]
    #[case("a|alpha:=integer", parsed(Some('a'), Some("alpha"), Arity::Require, Some(NUMBER_TYPE)))]
    #[case("o|output:=s", parsed(Some('o'), Some("output"), Arity::Require, Some(STRING_TYPE)))]
    #[case("name+=string", parsed(None, Some("name"), Arity::Multiple, Some(STRING_TYPE)))]
    fn parse(#[case] spec: &str, #[case] expected: ParsedSpec) {
        assert_eq!(parse_spec(spec).unwrap(), expected);
        assert_eq!(spec.parse::<ParsedSpec>().unwrap(), expected);
    }

    #[rstest]
    #[case("|verbose", None, Some("verbose"))]
    #[case("v|", Some('v'), None)]
    #[case("v|:", Some('v'), None)]
    fn empty_name_component(
        #[case] spec: &str,
        #[case] short: Option<char>,
        #[case] long: Option<&str>,
    ) {
        let result = parse_spec(spec).unwrap();
        assert_eq!(result.short, short);
        assert_eq!(result.long.as_deref(), long);
    }

    #[rstest]
    // Require beats everything.
    #[case("x:+", Arity::Require)]
    #[case("x+:", Arity::Require)]
    #[case("x?:", Arity::Require)]
    #[case("x?+:", Arity::Require)]
    #[case("x*:", Arity::Require)]
    // Multiple beats optional.
    #[case("x?+", Arity::Multiple)]
    #[case("x+?", Arity::Multiple)]
    #[case("x*+", Arity::Multiple)]
    // Optional beats zero-or-more.
    #[case("x*?", Arity::Optional)]
    #[case("x??", Arity::Optional)]
    fn marker_priority(#[case] spec: &str, #[case] expected: Arity) {
        assert_eq!(parse_spec(spec).unwrap().arity, expected);
    }

    #[rstest]
    #[case("x*")]
    #[case("x|xs*")]
    #[case("xs**=i")]
    fn unsupported(#[case] spec: &str) {
        assert_eq!(
            parse_spec(spec).unwrap_err(),
            SpecError::UnsupportedAttribute {
                spec: spec.to_string(),
                marker: '*',
            }
        );
    }

    #[rstest]
    #[case("", 0)]
    #[case(":", 0)]
    #[case("|", 0)]
    #[case("|:", 0)]
    #[case("=i", 0)]
    #[case(" v", 0)]
    #[case("v ", 1)]
    #[case("v_x", 1)]
    #[case("a|b|c", 3)]
    #[case("ab|abc", 0)]
    #[case("a|abc=", 6)]
    #[case("a|abc=x", 6)]
    #[case("a|abc=int", 6)]
    #[case("a|abc=i:", 7)]
    #[case("a|abc=i=s", 7)]
    #[case("a:b", 2)]
    fn malformed(#[case] spec: &str, #[case] expected_offset: usize) {
        assert_matches!(
            parse_spec(spec).unwrap_err(),
            SpecError::Malformed { spec: s, offset, .. } if s == spec && offset == expected_offset
        );
    }

    #[test]
    fn malformed_reason() {
        let error = parse_spec("a|abc=x").unwrap_err();
        assert_eq!(
            error.to_string(),
            "malformed option spec 'a|abc=x' at offset 6: unknown value type 'x'."
        );

        let error = parse_spec("x*").unwrap_err();
        assert_eq!(
            error.to_string(),
            "option spec 'x*' uses the '*' attribute, which is not implemented."
        );
    }

    #[test]
    fn random_names() {
        for _ in 0..100 {
            let length = thread_rng().gen_range(2..16);
            let long: String = thread_rng()
                .sample_iter(&Alphanumeric)
                .take(length)
                .map(char::from)
                .collect();
            let short = char::from(thread_rng().sample(&Alphanumeric));

            let result = parse_spec(&format!("{long}:")).unwrap();
            assert_eq!(result, parsed(None, Some(&long), Arity::Require, None));

            let result = parse_spec(&format!("{short}:")).unwrap();
            assert_eq!(result, parsed(Some(short), None, Arity::Require, None));

            let result = parse_spec(&format!("{short}|{long}=i")).unwrap();
            assert_eq!(
                result,
                parsed(Some(short), Some(&long), Arity::Flag, Some(NUMBER_TYPE))
            );
        }
    }
}
