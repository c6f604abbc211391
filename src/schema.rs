use std::fmt;
use std::str::FromStr;

use crate::parse::Outcome;
use crate::token::Tokens;
use crate::{Error, Result};

/// Wire-level shape of an option's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Flag,
    String,
    Integer,
}

impl ValueKind {
    pub(crate) fn takes_value(self) -> bool {
        self != ValueKind::Flag
    }

    pub(crate) fn placeholder(self) -> Option<&'static str> {
        match self {
            ValueKind::Flag => None,
            ValueKind::String => Some("string"),
            ValueKind::Integer => Some("int"),
        }
    }
}

enum Bind<C> {
    Flag(Box<dyn Fn(&mut C)>),
    Text(Box<dyn Fn(&mut C, String)>),
    Parsed(Box<dyn Fn(&mut C, &str) -> Result<(), String>>),
}

/// One named option of one command, bound to a field of `C` through a
/// setter closure. A repeated occurrence runs the setter again, so the
/// last occurrence wins.
pub struct Opt<C> {
    long: &'static str,
    short: Option<char>,
    usage: &'static str,
    kind: ValueKind,
    bind: Bind<C>,
}

impl<C> Opt<C> {
    /// A switch taking no value. The setter decides what "present" means,
    /// typically `|c| c.field = true`.
    pub fn flag(
        long: &'static str,
        short: Option<char>,
        usage: &'static str,
        set: impl Fn(&mut C) + 'static,
    ) -> Opt<C> {
        Opt { long, short, usage, kind: ValueKind::Flag, bind: Bind::Flag(Box::new(set)) }
    }

    /// An option taking one following token, stored verbatim.
    pub fn string(
        long: &'static str,
        short: Option<char>,
        usage: &'static str,
        set: impl Fn(&mut C, String) + 'static,
    ) -> Opt<C> {
        Opt { long, short, usage, kind: ValueKind::String, bind: Bind::Text(Box::new(set)) }
    }

    /// An option taking one following token, parsed as a base-10 integer.
    /// Works for any fixed-width integer type; binding into an `Option`
    /// field gives "absent unless supplied" semantics for free.
    pub fn int<T>(
        long: &'static str,
        short: Option<char>,
        usage: &'static str,
        set: impl Fn(&mut C, T) + 'static,
    ) -> Opt<C>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let parse = move |cmd: &mut C, raw: &str| match raw.parse::<T>() {
            Ok(value) => {
                set(cmd, value);
                Ok(())
            }
            Err(err) => Err(err.to_string()),
        };
        Opt { long, short, usage, kind: ValueKind::Integer, bind: Bind::Parsed(Box::new(parse)) }
    }

    pub fn long(&self) -> &'static str {
        self.long
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Resolves this option against `cmd`, pulling a value token off the
    /// queue when the kind calls for one. `spelled` is the form the user
    /// actually typed (`--mem` or `-m`), used in error messages.
    pub(crate) fn apply(&self, cmd: &mut C, toks: &mut Tokens, spelled: &str) -> Result<()> {
        match &self.bind {
            Bind::Flag(set) => {
                set(cmd);
                Ok(())
            }
            Bind::Text(set) => {
                let value = toks.next_value(spelled)?;
                set(cmd, value);
                Ok(())
            }
            Bind::Parsed(set) => {
                let value = toks.next_value(spelled)?;
                set(cmd, &value).map_err(|reason| Error::InvalidArgument {
                    option: spelled.to_string(),
                    value,
                    reason,
                })
            }
        }
    }

    fn meta(&self) -> OptMeta {
        OptMeta { long: self.long, short: self.short, usage: self.usage, kind: self.kind }
    }
}

pub(crate) struct Child<S> {
    pub(crate) name: &'static str,
    pub(crate) meta: CmdMeta,
    pub(crate) run: Box<dyn Fn(&mut Tokens) -> Result<(S, Vec<String>)>>,
}

/// One level of the command tree. `C` is the caller's option struct
/// (`Default` supplies the declared defaults), `S` the caller's enum with
/// one variant per declared child; terminal commands use `()`.
///
/// The tree is immutable once assembled and may be parsed any number of
/// times; every parse gets a fresh `C`.
pub struct Cmd<C, S> {
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) options: Vec<Opt<C>>,
    pub(crate) children: Vec<Child<S>>,
}

impl<C, S> Cmd<C, S> {
    pub fn new(name: &'static str, usage: &'static str) -> Cmd<C, S> {
        Cmd { name, usage, options: Vec::new(), children: Vec::new() }
    }

    /// Declares an option. Longhands and shorthands must be unique within
    /// one command; a duplicate is a bug in the schema, not an input error,
    /// so it panics right here at assembly time.
    pub fn opt(mut self, opt: Opt<C>) -> Cmd<C, S> {
        if self.options.iter().any(|it| it.long == opt.long) {
            panic!("duplicate option `--{}` in command `{}`", opt.long, self.name);
        }
        if let Some(short) = opt.short {
            if self.options.iter().any(|it| it.short == Some(short)) {
                panic!("duplicate shorthand `-{}` in command `{}`", short, self.name);
            }
        }
        self.options.push(opt);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn usage(&self) -> &'static str {
        self.usage
    }

    /// No children means bare arguments are data; otherwise the first bare
    /// argument selects a child.
    pub fn is_terminal(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn lookup_long(&self, name: &str) -> Option<&Opt<C>> {
        self.options.iter().find(|it| it.long == name)
    }

    pub(crate) fn lookup_short(&self, short: char) -> Option<&Opt<C>> {
        self.options.iter().find(|it| it.short == Some(short))
    }

    pub(crate) fn meta(&self) -> CmdMeta {
        CmdMeta {
            name: self.name,
            usage: self.usage,
            options: self.options.iter().map(Opt::meta).collect(),
            children: self.children.iter().map(|it| it.meta.clone()).collect(),
        }
    }
}

impl<C, S> Cmd<C, S> {
    /// Declares a child command. `wrap` lifts the child's parse result into
    /// this command's subcommand enum, e.g. a plain variant constructor for
    /// nonterminal children or `|cmd, _| Sub::Foo(cmd)` for terminal ones.
    pub fn child<K, T>(
        mut self,
        sub: Cmd<K, T>,
        wrap: impl Fn(K, Option<T>) -> S + 'static,
    ) -> Cmd<C, S>
    where
        K: Default + 'static,
        T: 'static,
    {
        if self.children.iter().any(|it| it.name == sub.name) {
            panic!("duplicate subcommand `{}` in command `{}`", sub.name, self.name);
        }
        let name = sub.name;
        let meta = sub.meta();
        let run = Box::new(move |toks: &mut Tokens| {
            let out: Outcome<K, T> = sub.run(toks)?;
            Ok((wrap(out.cmd, out.sub), out.bare))
        });
        self.children.push(Child { name, meta, run });
        self
    }
}

/// Plain description of a command subtree, shared by the resolver's schema
/// and the usage renderer.
#[derive(Debug, Clone)]
pub(crate) struct CmdMeta {
    pub(crate) name: &'static str,
    pub(crate) usage: &'static str,
    pub(crate) options: Vec<OptMeta>,
    pub(crate) children: Vec<CmdMeta>,
}

#[derive(Debug, Clone)]
pub(crate) struct OptMeta {
    pub(crate) long: &'static str,
    pub(crate) short: Option<char>,
    pub(crate) usage: &'static str,
    pub(crate) kind: ValueKind,
}
