//! Moderately simple nested-subcommand command line arguments parser.
//!
//! A schema is an ordinary runtime value: a tree of [`Cmd`]s, each carrying
//! typed [`Opt`]ions bound to fields of the caller's own structs through
//! setter closures. One [`Cmd::parse_vec`] call walks the argument vector
//! once, left to right, and hands back the populated structs, the selected
//! subcommand (if any) and the leftover bare arguments.
//!
//! ```
//! use cmdtree::{Cmd, Opt};
//!
//! #[derive(Debug, Default)]
//! struct Greet {
//!     loud: bool,
//!     times: Option<u32>,
//! }
//!
//! let schema: Cmd<Greet, ()> = Cmd::new("greet", "prints a greeting")
//!     .opt(Opt::flag("loud", Some('l'), "shout instead", |g: &mut Greet| g.loud = true))
//!     .opt(Opt::int("times", Some('t'), "how often", |g: &mut Greet, n| g.times = Some(n)));
//!
//! let out = schema.parse_vec(vec!["-l".into(), "world".into()])?;
//! assert!(out.cmd.loud);
//! assert_eq!(out.cmd.times, None);
//! assert_eq!(out.bare, ["world"]);
//! # Ok::<(), cmdtree::Error>(())
//! ```
//!
//! Commands with children are *nonterminal*: the first bare argument at such
//! a level names the child to descend into, and everything after it belongs
//! to that child's subtree. Commands without children are *terminal* and
//! keep their bare arguments, options interleaved or not.

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong during one parse.
///
/// Each variant aborts the whole parse; there are no partial results.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The argument vector was empty, without even a program name.
    #[error("malformed argument vector: missing program name")]
    MalformedInvocation,
    #[error("unknown option: `{option}`")]
    UnknownOption { option: String },
    #[error("unknown subcommand: `{name}`")]
    UnknownSubcommand { name: String },
    #[error("expected a value for `{option}`")]
    MissingArgument { option: String },
    #[error("can't parse value `{value}` for `{option}`: {reason}")]
    InvalidArgument { option: String, value: String, reason: String },
    /// A value-taking option sat anywhere but last in a shorthand stack.
    #[error("option `{option}` takes a value and must come last in `{stack}`")]
    StackedValueOption { option: String, stack: String },
}

mod help;
mod parse;
mod schema;
mod token;

pub use crate::help::render;
pub use crate::parse::Outcome;
pub use crate::schema::{Cmd, Opt, ValueKind};
