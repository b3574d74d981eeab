use std::rc::Rc;

use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: i32,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            pos: 0,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\"[^\"]*\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
            ],
            source,
            file: file_name,
        }
    }

    pub fn advance_n(&mut self, n: i32) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.source.as_bytes()[self.pos as usize] as char
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos as usize..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // A fractional part decides between the two literal kinds
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    lexer.push(MK_TOKEN!(
        kind,
        matched.clone(),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + matched.len() as i32) as u32, Rc::clone(&lexer.file))
        }
    ));
    lexer.advance_n(matched.len() as i32);
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().end();
    lexer.advance_n(matched as i32);
}

fn string_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = String::from(lexer.remainder());
    let matched = regex.find(&remaining).unwrap();
    let raw = &remaining[(matched.start() + 1)..(matched.end() - 1)];

    let start = lexer.pos as u32;
    lexer.advance_n(raw.len() as i32 + 2);

    let mut value = String::new();
    let mut chars = raw.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            value.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => value.push('\n'),
            Some('t') => value.push('\t'),
            Some('r') => value.push('\r'),
            Some('0') => value.push('\0'),
            Some('"') => value.push('"'),
            Some('\\') => value.push('\\'),
            Some(other) => {
                // Unknown escape, keep the backslash
                value.push('\\');
                value.push(other);
            }
            None => value.push('\\'),
        }
    }

    lexer.push(MK_TOKEN!(
        TokenKind::String,
        value,
        Span {
            start: Position(start, Rc::clone(&lexer.file)),
            end: Position(lexer.pos as u32, Rc::clone(&lexer.file))
        }
    ));
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let remaining = String::from(lexer.remainder());
    let value = regex.find(&remaining).unwrap();

    let kind = if let Some(reserved) = RESERVED_LOOKUP.get(value.as_str()) {
        *reserved
    } else {
        TokenKind::Identifier
    };

    lexer.push(MK_TOKEN!(
        kind,
        String::from(value.as_str()),
        Span {
            start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
            end: Position((lexer.pos + value.len() as i32) as u32, Rc::clone(&lexer.file))
        }
    ));

    lexer.advance_n(value.len() as i32);
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.patterns.clone().iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                Position(lex.pos as u32, Rc::clone(&lex.file)),
            ));
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: Position(lex.pos as u32, Rc::clone(&lex.file)),
            end: Position(lex.pos as u32, Rc::clone(&lex.file))
        }
    ));
    Ok(lex.tokens)
}
