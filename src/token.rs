use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Long,
    Short,
    Bare,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) text: String,
}

/// The token queue one parse chews through, front to back.
pub(crate) struct Tokens {
    rtoks: Vec<Token>,
}

impl Tokens {
    pub(crate) fn new(args: Vec<String>) -> Tokens {
        let mut toks = Vec::with_capacity(args.len());
        let mut after_double_dash = false;
        for arg in args {
            if after_double_dash {
                toks.push(Token { kind: TokenKind::Bare, text: arg });
                continue;
            }
            if arg == "--" {
                after_double_dash = true;
                continue;
            }
            let tok = match arg.strip_prefix("--") {
                Some(rest) => Token { kind: TokenKind::Long, text: rest.to_string() },
                // a lone `-` is the conventional stdin placeholder, keep it bare
                None if arg.starts_with('-') && arg != "-" => {
                    Token { kind: TokenKind::Short, text: arg[1..].to_string() }
                }
                None => Token { kind: TokenKind::Bare, text: arg },
            };
            toks.push(tok);
        }
        toks.reverse();
        Tokens { rtoks: toks }
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.rtoks.pop()
    }

    fn peek_option(&self) -> bool {
        matches!(self.rtoks.last(), Some(tok) if tok.kind != TokenKind::Bare)
    }

    /// Takes the value token following `option`; anything option-shaped
    /// (or an exhausted queue) is a missing argument.
    pub(crate) fn next_value(&mut self, option: &str) -> Result<String> {
        if self.peek_option() {
            return Err(Error::MissingArgument { option: option.to_string() });
        }
        match self.rtoks.pop() {
            Some(tok) => Ok(tok.text),
            None => Err(Error::MissingArgument { option: option.to_string() }),
        }
    }
}
