use std::iter::Peekable;
use std::str::CharIndices;

/// A lexical unit of a spec string, along with its byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    /// `[A-Za-z0-9-]+`
    Word(usize, String),
    /// `|`
    Pipe(usize),
    /// One of `:`, `+`, `?`, `*`.
    Marker(usize, char),
    /// `=`
    Equals(usize),
}

impl Token {
    pub(crate) fn offset(&self) -> usize {
        match self {
            Token::Word(offset, _)
            | Token::Pipe(offset)
            | Token::Marker(offset, _)
            | Token::Equals(offset) => *offset,
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Word(_, word) => write!(f, "'{word}'"),
            Token::Pipe(_) => write!(f, "'|'"),
            Token::Marker(_, marker) => write!(f, "'{marker}'"),
            Token::Equals(_) => write!(f, "'='"),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct IllegalCharacter {
    pub(crate) offset: usize,
    pub(crate) character: char,
}

pub(crate) const MARKERS: [char; 4] = [':', '+', '?', '*'];

fn is_word_character(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

pub(crate) struct Lexer<'a> {
    characters: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(spec: &'a str) -> Self {
        Self {
            characters: spec.char_indices().peekable(),
        }
    }

    fn word(&mut self, offset: usize, first: char) -> Token {
        let mut word = String::from(first);

        while let Some((_, c)) = self.characters.peek() {
            if !is_word_character(*c) {
                break;
            }

            word.push(*c);
            self.characters.next();
        }

        Token::Word(offset, word)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, IllegalCharacter>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, c) = self.characters.next()?;

        let token = match c {
            '|' => Token::Pipe(offset),
            '=' => Token::Equals(offset),
            c if MARKERS.contains(&c) => Token::Marker(offset, c),
            c if is_word_character(c) => self.word(offset, c),
            character => {
                return Some(Err(IllegalCharacter { offset, character }));
            }
        };

        Some(Ok(token))
    }
}
