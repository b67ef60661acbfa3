//! Command line tokenizer
//!
//! Splits a raw line into words on whitespace. A quoted span ("..." or
//! '...') stays inside one word, quotes included, so handlers can decide
//! what the quotes mean. Handlers unquote operands with [`strip_quotes`].
//! An unterminated quote runs to the end of the line; the simulator never
//! rejects a line at this stage.

use std::iter::Peekable;
use std::str::Chars;

/// Tokenizer for simulator input
struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn next_word(&mut self) -> Option<String> {
        self.skip_whitespace();
        let mut word = String::new();

        while let Some(&c) = self.chars.peek() {
            match c {
                c if c.is_whitespace() => break,
                // Quotes can appear mid-word: -m"msg"
                '"' | '\'' => {
                    self.chars.next();
                    word.push(c);
                    self.read_quoted(c, &mut word);
                }
                _ => {
                    word.push(c);
                    self.chars.next();
                }
            }
        }

        if word.is_empty() { None } else { Some(word) }
    }

    fn read_quoted(&mut self, quote: char, word: &mut String) {
        for c in self.chars.by_ref() {
            word.push(c);
            if c == quote {
                return;
            }
        }
    }
}

/// Split a command line into words
pub fn tokenize(input: &str) -> Vec<String> {
    let mut lexer = Lexer::new(input);
    std::iter::from_fn(|| lexer.next_word()).collect()
}

/// Remove the quoting from a word the way a shell would.
///
/// Both quote kinds delimit a span and are dropped; inside a span the other
/// kind is literal, so `"don't"` becomes `don't`.
pub fn strip_quotes(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut open: Option<char> = None;

    for c in word.chars() {
        match (open, c) {
            (None, '"' | '\'') => open = Some(c),
            (Some(q), c) if c == q => open = None,
            _ => out.push(c),
        }
    }
    out
}
