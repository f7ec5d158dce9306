use std::str::Chars;

use peekmore::{PeekMore, PeekMoreIterator};

use crate::error::{Error, ScanError};
use crate::literal::Literal;
use crate::token::{Location, Token, Type};

/// Converts source text into an ordered sequence of tokens, terminated by
/// an EOF sentinel. Never fails catastrophically: lexical errors are
/// reported through the error reporter and scanning continues.
pub struct Scanner<'a> {
    source: PeekMoreIterator<Chars<'a>>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over `source`.
    pub fn new(source: &'a str) -> Scanner<'a> {
        Scanner {
            source: source.chars().peekmore(),
            tokens: vec![],
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the source code and returns the full vector of tokens.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        self.tokens.push(Token::new(Type::EOF, String::from(""), None, Location::new(self.line)));

        log::trace!("scanned {} tokens", self.tokens.len());

        self.tokens.clone()
    }

    fn advance(&mut self) -> char {
        match self.source.next() {
            Some(char) => {
                self.current += 1;
                char
            },
            None => panic!("tried to advance past end of the file."),
        }
    }

    fn peek(&mut self) -> &char {
        match self.source.peek() {
            Some(char) => char,
            None => panic!("tried to peek past end of the file."),
        }
    }

    fn peek_next(&mut self) -> &char {
        match self.source.peek_next() {
            Some(char) => char,
            None => panic!("tried to peek next past end of the file."),
        }
    }

    /// Returns if the next character is the expected character.
    fn match_next(&mut self, expected: char) -> bool {
        matches!(self.source.peek_next(), Some(char) if *char == expected)
    }

    fn add_token(&mut self, r#type: Type, lexeme: String, literal: Option<Literal>) {
        self.tokens.push(Token::new(r#type, lexeme, literal, Location::new(self.line)));
    }

    fn add_single_char_token(&mut self, r#type: Type) {
        let c = self.advance();
        self.add_token(r#type, c.to_string(), None);
    }

    fn add_double_char_token(&mut self, r#type: Type) {
        let first = self.advance();
        let second = self.advance();

        self.add_token(r#type, format!("{first}{second}"), None);
    }

    fn is_at_end(&mut self) -> bool {
        self.source.peek().is_none()
    }

    /// Handles a string literal. Multi-line strings are allowed; there are
    /// no escape sequences.
    fn string(&mut self) {
        self.advance(); // Move past the opening double quote.
        let start_line = self.line;

        let mut value = Vec::new();
        while !self.is_at_end() {
            match self.source.next_if(|&x| x != '"') {
                Some(c) => {
                    self.current += 1;
                    value.push(c);

                    if c == '\n' {
                        self.line += 1;
                    }
                },
                None => break,
            }
        }

        if self.is_at_end() {
            ScanError { line: start_line, message: "Unterminated string.".to_string() }.throw();
            return;
        }

        self.advance(); // Move past the closing double quote.

        let value: String = value.into_iter().collect();

        // The literal does not include the surrounding quotes, unlike the lexeme.
        self.add_token(Type::String, value.clone(), Some(Literal::String(value)));
    }

    /// Handles a number literal: digits, with an optional fractional part
    /// of a dot followed by at least one digit. A trailing dot with no
    /// following digit is left unconsumed (it scans as a separate `.`
    /// token on the next call, e.g. for a later method-call syntax).
    fn number(&mut self) {
        let mut value = Vec::new();

        while self.peek().is_ascii_digit() {
            value.push(self.advance());
        }

        if *self.peek() == '.' && self.peek_next().is_ascii_digit() {
            value.push(self.advance()); // Consume the dot.

            while self.peek().is_ascii_digit() {
                value.push(self.advance());
            }
        }

        let value: String = value.into_iter().collect();
        let value_num: f64 = value.parse().expect("scanned digits to form a valid float");

        self.add_token(Type::Number, value, Some(Literal::Number(value_num)));
    }

    /// Handles an identifier or a keyword.
    fn identifier(&mut self) {
        let mut value = Vec::new();

        while matches!(self.peek(), c if c.is_alphanumeric() || *c == '_') {
            value.push(self.advance());
        }

        let value = String::from_iter(value);
        let token_type = match value.as_str() {
            "and"    => Type::And,
            "class"  => Type::Class,
            "else"   => Type::Else,
            "false"  => Type::False,
            "for"    => Type::For,
            "fun"    => Type::Fun,
            "if"     => Type::If,
            "nil"    => Type::Nil,
            "or"     => Type::Or,
            "print"  => Type::Print,
            "return" => Type::Return,
            "super"  => Type::Super,
            "this"   => Type::This,
            "true"   => Type::True,
            "var"    => Type::Var,
            "while"  => Type::While,
            _        => Type::Identifier,
        };

        self.add_token(token_type, value, None);
    }

    /// Scans the next token.
    fn scan_token(&mut self) {
        let c = *self.peek();
        match c {
            '(' => self.add_single_char_token(Type::LeftParen),
            ')' => self.add_single_char_token(Type::RightParen),
            '{' => self.add_single_char_token(Type::LeftBrace),
            '}' => self.add_single_char_token(Type::RightBrace),
            ',' => self.add_single_char_token(Type::Comma),
            '.' => self.add_single_char_token(Type::Dot),
            '-' => self.add_single_char_token(Type::Minus),
            '+' => self.add_single_char_token(Type::Plus),
            ';' => self.add_single_char_token(Type::Semicolon),
            '*' => self.add_single_char_token(Type::Star),

            '!' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::BangEqual);
                } else {
                    self.add_single_char_token(Type::Bang);
                }
            },
            '=' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::EqualEqual);
                } else {
                    self.add_single_char_token(Type::Equal);
                }
            },
            '<' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::LessEqual);
                } else {
                    self.add_single_char_token(Type::Less);
                }
            },
            '>' => {
                if self.match_next('=') {
                    self.add_double_char_token(Type::GreaterEqual);
                } else {
                    self.add_single_char_token(Type::Greater);
                }
            },
            '/' => {
                if self.match_next('/') {
                    while *self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_single_char_token(Type::Slash);
                }
            },

            ' ' | '\r' | '\t' => {
                self.advance();
            },

            '\n' => {
                self.advance();
                self.line += 1;
            },

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),

            c if c.is_alphabetic() || c == '_' => self.identifier(),

            _ => {
                self.advance();

                ScanError { line: self.line, message: "Unexpected character.".to_string() }.throw();
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error;

    #[test]
    fn scans_single_and_double_char_tokens() {
        let mut scanner = Scanner::new("!= == <= >= ! < > =");
        let types: Vec<Type> = scanner.scan_tokens().iter().map(|t| t.r#type).collect();

        assert_eq!(types, vec![
            Type::BangEqual, Type::EqualEqual, Type::LessEqual, Type::GreaterEqual,
            Type::Bang, Type::Less, Type::Greater, Type::Equal, Type::EOF,
        ]);
    }

    #[test]
    fn scans_string_literal_across_lines() {
        let mut scanner = Scanner::new("\"foo\nbar\"");
        let tokens = scanner.scan_tokens();

        assert_eq!(tokens[0].r#type, Type::String);
        assert_eq!(tokens[0].literal, Some(Literal::String("foo\nbar".to_string())));
        assert_eq!(tokens[1].location.line, 2);
    }

    #[test]
    fn number_with_trailing_dot_leaves_dot_unconsumed() {
        let mut scanner = Scanner::new("123.");
        let tokens = scanner.scan_tokens();

        assert_eq!(tokens[0].literal, Some(Literal::Number(123.0)));
        assert_eq!(tokens[1].r#type, Type::Dot);
    }

    #[test]
    fn unterminated_string_reports_compile_error_and_emits_no_token() {
        error::reset_error();

        let mut scanner = Scanner::new("\"unterminated");
        let tokens = scanner.scan_tokens();

        assert!(error::did_error());
        assert_eq!(tokens.len(), 1); // only the EOF token
        error::reset_error();
    }

    #[test]
    fn keywords_are_recognized() {
        let mut scanner = Scanner::new("and class else false for fun if nil or print return super this true var while unrelated");
        let types: Vec<Type> = scanner.scan_tokens().iter().map(|t| t.r#type).collect();

        assert_eq!(types, vec![
            Type::And, Type::Class, Type::Else, Type::False, Type::For, Type::Fun,
            Type::If, Type::Nil, Type::Or, Type::Print, Type::Return, Type::Super,
            Type::This, Type::True, Type::Var, Type::While, Type::Identifier, Type::EOF,
        ]);
    }
}
