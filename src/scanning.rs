use crate::error_handling::*;

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    number, operator, punctuation
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub content: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(content: String, kind: TokenKind) -> Self {
        Self{content, kind}
    }
}

pub trait Scanner {
    fn get_current(&self) -> Option<Token>;
    fn advance(&mut self) -> Result<()>;
    fn is_valid(&self) -> bool;
}

/// Scans normalized arithmetic text, one token ahead.
pub struct StringScanner {
    string: String,
    token: Option<Token>,
    index: usize,
}

fn is_operator(character: char) -> bool {
    matches!(character, '+' | '-' | '*' | '/' | '%')
}

fn is_punctuation(character: char) -> bool {
    matches!(character, '(' | ')')
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

impl StringScanner {
    pub fn new(string: String) -> Result<Self> {
        let mut source = Self {
            string,
            token: None,
            index: 0,
        };
        source.advance()?;
        Ok(source)
    }

    /// Byte length of the run at the current index matching `predicate`.
    fn count<P: Fn(char) -> bool>(&self, predicate: P) -> usize {
        self.view()
            .chars()
            .take_while(|&c| predicate(c))
            .map(char::len_utf8)
            .sum()
    }

    fn view(&self) -> &str {
        &self.string[self.index..]
    }

    fn skip_whitespace(&mut self) {
        let count = self.count(char::is_whitespace);
        self.index += count;
    }

    fn get_number(&self) -> Token {
        let count = self.count(is_digit_or_dot);
        Token::new(self.string[self.index..(self.index + count)].into(), TokenKind::number)
    }

    fn get_single(&self, kind: TokenKind) -> Token {
        Token::new(self.string[self.index..(self.index + 1)].into(), kind)
    }

    fn get_token(&mut self) -> Result<Option<Token>> {
        match self.view().chars().next() {
            None => Ok(None),
            Some(c) if is_digit_or_dot(c) => Ok(Some(self.get_number())),
            Some(c) if is_operator(c) => Ok(Some(self.get_single(TokenKind::operator))),
            Some(c) if is_punctuation(c) => Ok(Some(self.get_single(TokenKind::punctuation))),
            Some(c) => Err(CalcError::invalid_character(c.to_string())),
        }
    }
}

impl Scanner for StringScanner {
    fn get_current(&self) -> Option<Token> {
        self.token.clone()
    }

    fn advance(&mut self) -> Result<()> {
        self.skip_whitespace();
        let token = self.get_token()?;
        if let Some(token) = &token {
            self.index += token.content.len();
        }
        self.token = token;
        Ok(())
    }

    fn is_valid(&self) -> bool {
        self.token.is_some()
    }
}
