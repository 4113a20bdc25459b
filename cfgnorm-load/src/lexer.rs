use std::str::Chars;

use crate::LoadError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Token {
    Ident(String),
    Directive(String),
    BnfOp,
    Pipe,
    Semicolon,
    Newline,
}

impl Token {
    pub(crate) fn describe(&self) -> String {
        match self {
            Token::Ident(name) => format!("`{}`", name),
            Token::Directive(name) => format!("`%{}`", name),
            Token::BnfOp => "`::=`".to_string(),
            Token::Pipe => "`|`".to_string(),
            Token::Semicolon => "`;`".to_string(),
            Token::Newline => "end of line".to_string(),
        }
    }
}

/// A token with its one-indexed line and column.
pub(crate) type Spanned = (Token, u32, u32);

pub(crate) struct Lexer<'a> {
    chars: Chars<'a>,
    line_no: u32,
    col_no: u32,
}

impl<'a> Lexer<'a> {
    pub(crate) fn tokenize(bnf: &'a str) -> Result<Vec<Spanned>, LoadError> {
        let mut lexer = Lexer {
            chars: bnf.chars(),
            line_no: 1,
            col_no: 1,
        };
        let mut result = vec![];
        while let Some(ch) = lexer.peek() {
            let (line_no, col_no) = (lexer.line_no, lexer.col_no);
            if let Some(token) = lexer.eat(ch)? {
                result.push((token, line_no, col_no));
            }
        }
        Ok(result)
    }

    fn eat(&mut self, ch: char) -> Result<Option<Token>, LoadError> {
        let token = match ch {
            '#' => {
                while let Some(ch) = self.peek() {
                    if ch == '\n' {
                        break;
                    }
                    self.advance();
                }
                return Ok(None);
            }
            '\n' => {
                self.advance();
                Token::Newline
            }
            ch if ch.is_whitespace() => {
                self.advance();
                return Ok(None);
            }
            '|' => {
                self.advance();
                Token::Pipe
            }
            ';' => {
                self.advance();
                Token::Semicolon
            }
            ':' if self.chars.as_str().starts_with("::=") => {
                self.advance();
                self.advance();
                self.advance();
                Token::BnfOp
            }
            '%' => {
                let (line, col) = (self.line_no, self.col_no);
                self.advance();
                let name = self.eat_name();
                if name.is_empty() {
                    return Err(LoadError::Syntax {
                        reason: "expected a directive name after `%`".to_string(),
                        line,
                        col,
                    });
                }
                Token::Directive(name)
            }
            _ => Token::Ident(self.eat_name()),
        };
        Ok(Some(token))
    }

    /// Names run until whitespace, punctuation or `::=`.
    fn eat_name(&mut self) -> String {
        let substring = self.chars.as_str();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace()
                || matches!(ch, '|' | ';' | '#')
                || self.chars.as_str().starts_with("::=")
            {
                break;
            }
            self.advance();
        }
        substring[..substring.len() - self.chars.as_str().len()].to_string()
    }

    fn advance(&mut self) {
        match self.chars.next() {
            Some('\n') => {
                self.line_no += 1;
                self.col_no = 1;
            }
            Some(_) => {
                self.col_no += 1;
            }
            None => {}
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.as_str().chars().next()
    }
}
