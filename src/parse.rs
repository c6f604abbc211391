use crate::schema::Cmd;
use crate::token::{TokenKind, Tokens};
use crate::{Error, Result};

/// What one command level produced: the populated option struct, the
/// selected child (if this level is nonterminal and one was named) and the
/// bare arguments gathered at or below this level, in encounter order.
#[derive(Debug)]
pub struct Outcome<C, S> {
    pub cmd: C,
    pub sub: Option<S>,
    pub bare: Vec<String>,
}

impl<C: Default, S> Cmd<C, S> {
    /// Parses a full argument vector, program name first. An empty vector
    /// is a malformed invocation; a vector of just the program name parses
    /// to all defaults.
    pub fn parse_argv(&self, argv: Vec<String>) -> Result<Outcome<C, S>> {
        if argv.is_empty() {
            return Err(Error::MalformedInvocation);
        }
        self.parse_vec(argv.into_iter().skip(1).collect())
    }

    /// Parses the arguments following the program name.
    pub fn parse_vec(&self, args: Vec<String>) -> Result<Outcome<C, S>> {
        let mut toks = Tokens::new(args);
        self.run(&mut toks)
    }

    /// Parses the current process's arguments.
    pub fn parse_env(&self) -> Result<Outcome<C, S>> {
        self.parse_argv(std::env::args().collect())
    }

    pub(crate) fn run(&self, toks: &mut Tokens) -> Result<Outcome<C, S>> {
        let mut cmd = C::default();
        let mut sub = None;
        let mut bare = Vec::new();

        while let Some(tok) = toks.pop() {
            match tok.kind {
                TokenKind::Long => self.apply_long(&tok.text, &mut cmd, toks)?,
                TokenKind::Short => self.apply_stack(&tok.text, &mut cmd, toks)?,
                TokenKind::Bare if self.is_terminal() => bare.push(tok.text),
                TokenKind::Bare => {
                    // the selector; from here on the queue belongs to the
                    // chosen child, so the loop ends with it drained
                    let child = match self.children.iter().find(|it| it.name == tok.text) {
                        Some(child) => child,
                        None => return Err(Error::UnknownSubcommand { name: tok.text }),
                    };
                    let (picked, mut below) = (child.run)(toks)?;
                    sub = Some(picked);
                    bare.append(&mut below);
                }
            }
        }

        Ok(Outcome { cmd, sub, bare })
    }

    fn apply_long(&self, name: &str, cmd: &mut C, toks: &mut Tokens) -> Result<()> {
        let spelled = format!("--{name}");
        let opt = self
            .lookup_long(name)
            .ok_or_else(|| Error::UnknownOption { option: spelled.clone() })?;
        opt.apply(cmd, toks, &spelled)
    }

    /// A short token is one or more stacked shorthands; only the last one
    /// in the stack may take a value.
    fn apply_stack(&self, stack: &str, cmd: &mut C, toks: &mut Tokens) -> Result<()> {
        let mut chars = stack.chars().peekable();
        while let Some(short) = chars.next() {
            let spelled = format!("-{short}");
            let opt = self
                .lookup_short(short)
                .ok_or_else(|| Error::UnknownOption { option: spelled.clone() })?;
            if opt.kind().takes_value() && chars.peek().is_some() {
                return Err(Error::StackedValueOption {
                    option: spelled,
                    stack: format!("-{stack}"),
                });
            }
            opt.apply(cmd, toks, &spelled)?;
        }
        Ok(())
    }
}
