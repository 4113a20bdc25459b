use std::iter::Peekable;
use std::vec::IntoIter;

use log::trace;

use cfgnorm_grammar::{Grammar, GrammarBuilder};

use crate::lexer::{Spanned, Token};
use crate::LoadError;

pub(crate) struct Parser {
    tokens: Peekable<IntoIter<Spanned>>,
    builder: GrammarBuilder,
    terminals: Option<Vec<String>>,
    line: u32,
    col: u32,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Spanned>) -> Self {
        Parser {
            tokens: tokens.into_iter().peekable(),
            builder: GrammarBuilder::new(),
            terminals: None,
            line: 1,
            col: 1,
        }
    }

    pub(crate) fn parse(mut self) -> Result<Grammar, LoadError> {
        while let Some((token, line, col)) = self.next() {
            match token {
                Token::Newline | Token::Semicolon => {}
                Token::Directive(name) => self.directive(&name, line, col)?,
                Token::Ident(lhs) => self.rule(lhs)?,
                other => {
                    return Err(self.error(
                        format!("expected a rule or a directive, found {}", other.describe()),
                        line,
                        col,
                    ))
                }
            }
        }
        let grammar = match self.terminals {
            Some(terminals) => self.builder.terminals(terminals).build()?,
            None => self.builder.build_classified_by_keys()?,
        };
        Ok(grammar)
    }

    fn directive(&mut self, name: &str, line: u32, col: u32) -> Result<(), LoadError> {
        let args = self.names_until_end();
        trace!("DIRECTIVE %{} {:?}", name, args);
        match name {
            "start" => match &args[..] {
                [start] => {
                    self.builder = std::mem::take(&mut self.builder).start(start.clone());
                    Ok(())
                }
                _ => Err(self.error(
                    "`%start` takes exactly one name".to_string(),
                    line,
                    col,
                )),
            },
            "terminals" => {
                self.terminals.get_or_insert_with(Vec::new).extend(args);
                Ok(())
            }
            _ => Err(self.error(format!("unknown directive `%{}`", name), line, col)),
        }
    }

    fn rule(&mut self, lhs: String) -> Result<(), LoadError> {
        match self.next() {
            Some((Token::BnfOp, _, _)) => {}
            Some((other, line, col)) => {
                return Err(self.error(
                    format!("expected `::=` after `{}`, found {}", lhs, other.describe()),
                    line,
                    col,
                ))
            }
            None => {
                let (line, col) = (self.line, self.col);
                return Err(self.error(
                    format!("expected `::=` after `{}`, found end of input", lhs),
                    line,
                    col,
                ));
            }
        }
        let mut builder = std::mem::take(&mut self.builder).rule(lhs);
        loop {
            let alternative = self.names_until_end();
            builder = builder.rhs(alternative);
            match self.next() {
                Some((Token::Pipe, _, _)) => continue,
                Some((Token::Newline, _, _)) => {
                    self.skip_newlines();
                    if let Some((Token::Pipe, _, _)) = self.tokens.peek() {
                        self.next();
                        continue;
                    }
                    break;
                }
                Some((Token::Semicolon, _, _)) | None => break,
                Some((other, line, col)) => {
                    self.builder = builder;
                    return Err(self.error(
                        format!("unexpected {} in alternative", other.describe()),
                        line,
                        col,
                    ));
                }
            }
        }
        self.builder = builder;
        Ok(())
    }

    /// Collects names up to, but not including, the next other token.
    fn names_until_end(&mut self) -> Vec<String> {
        let mut names = vec![];
        while let Some((Token::Ident(_), _, _)) = self.tokens.peek() {
            if let Some((Token::Ident(name), _, _)) = self.next() {
                names.push(name);
            }
        }
        names
    }

    fn skip_newlines(&mut self) {
        while let Some((Token::Newline, _, _)) = self.tokens.peek() {
            self.next();
        }
    }

    fn next(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.next();
        if let Some((_, line, col)) = &spanned {
            self.line = *line;
            self.col = *col;
        }
        spanned
    }

    fn error(&self, reason: String, line: u32, col: u32) -> LoadError {
        LoadError::Syntax { reason, line, col }
    }
}
