use std::iter::Peekable;
use std::path::Path;
use std::str::CharIndices;

use super::{ImportScanner, ScanMode};
use crate::error::ExtractError;

/// Recognises `import [static] a.b.C;` and `import a.b.*;` statements from a
/// token stream, so comments are ignored and statements may span lines.
pub struct TokenScanner;

impl TokenScanner {
    pub fn new() -> Self {
        Self
    }
}

impl ImportScanner for TokenScanner {
    fn scan_source(&self, source: &str, _file_path: &Path) -> Result<Vec<String>, ExtractError> {
        let tokens: Vec<Token<'_>> = Lexer::new(source).collect();
        Ok(parse_imports(&tokens))
    }

    fn mode(&self) -> ScanMode {
        ScanMode::Tokens
    }
}

impl Default for TokenScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Ident(&'a str),
    Dot,
    Star,
    Semi,
    /// String, char, text-block or numeric literal.
    Literal,
    Punct(char),
}

struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    fn take_ident(&mut self, start: usize) -> &'a str {
        while self.peek_char().is_some_and(is_ident_part) {
            self.chars.next();
        }
        let end = self
            .chars
            .peek()
            .map_or(self.source.len(), |&(idx, _)| idx);
        &self.source[start..end]
    }

    fn skip_line(&mut self) {
        for (_, c) in self.chars.by_ref() {
            if c == '\n' {
                break;
            }
        }
    }

    fn skip_block_comment(&mut self) {
        while let Some((_, c)) = self.chars.next() {
            if c == '*' && self.peek_char() == Some('/') {
                self.chars.next();
                return;
            }
        }
    }

    /// Called after the opening `"`.
    fn skip_string(&mut self) {
        let mut ahead = self.chars.clone();
        let text_block = matches!(
            (ahead.next(), ahead.next()),
            (Some((_, '"')), Some((_, '"')))
        );
        if !text_block {
            self.skip_quoted('"');
            return;
        }

        self.chars.next();
        self.chars.next();
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                '"' => {
                    let mut ahead = self.chars.clone();
                    if matches!(
                        (ahead.next(), ahead.next()),
                        (Some((_, '"')), Some((_, '"')))
                    ) {
                        self.chars.next();
                        self.chars.next();
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    /// Called after the opening quote. Stops at an unterminated line end.
    fn skip_quoted(&mut self, quote: char) {
        while let Some((_, c)) = self.chars.next() {
            match c {
                '\\' => {
                    self.chars.next();
                }
                '\n' => return,
                c if c == quote => return,
                _ => {}
            }
        }
    }

    fn skip_number(&mut self) {
        while self
            .peek_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            self.chars.next();
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            let (start, c) = self.chars.next()?;
            let token = match c {
                c if c.is_whitespace() || c == '\u{feff}' => continue,
                '/' => match self.peek_char() {
                    Some('/') => {
                        self.skip_line();
                        continue;
                    }
                    Some('*') => {
                        self.chars.next();
                        self.skip_block_comment();
                        continue;
                    }
                    _ => Token::Punct('/'),
                },
                '"' => {
                    self.skip_string();
                    Token::Literal
                }
                '\'' => {
                    self.skip_quoted('\'');
                    Token::Literal
                }
                '.' => Token::Dot,
                '*' => Token::Star,
                ';' => Token::Semi,
                c if c.is_ascii_digit() => {
                    self.skip_number();
                    Token::Literal
                }
                c if is_ident_start(c) => Token::Ident(self.take_ident(start)),
                other => Token::Punct(other),
            };
            return Some(token);
        }
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn parse_imports(tokens: &[Token<'_>]) -> Vec<String> {
    let mut imports = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let at_statement_start = i == 0
            || matches!(
                tokens[i - 1],
                Token::Semi | Token::Punct('{') | Token::Punct('}')
            );
        if at_statement_start && tokens[i] == Token::Ident("import") {
            if let Some((name, next)) = parse_import(tokens, i + 1) {
                imports.push(name);
                i = next;
                continue;
            }
        }
        i += 1;
    }

    imports
}

/// Parse the rest of an import after the `import` keyword. Returns the
/// imported name and the index after the closing `;`.
fn parse_import(tokens: &[Token<'_>], mut i: usize) -> Option<(String, usize)> {
    if tokens.get(i) == Some(&Token::Ident("static")) {
        i += 1;
    }

    let mut name = match tokens.get(i)? {
        Token::Ident(first) => first.to_string(),
        _ => return None,
    };
    i += 1;

    loop {
        match tokens.get(i)? {
            Token::Semi => return Some((name, i + 1)),
            Token::Dot => match tokens.get(i + 1)? {
                Token::Ident(segment) => {
                    name.push('.');
                    name.push_str(segment);
                    i += 2;
                }
                Token::Star if tokens.get(i + 2) == Some(&Token::Semi) => {
                    name.push_str(".*");
                    return Some((name, i + 3));
                }
                _ => return None,
            },
            _ => return None,
        }
    }
}
