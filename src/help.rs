//! Usage-text rendering over the same schema the resolver consumes.

use std::fmt::Write;

use crate::schema::{Cmd, CmdMeta};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Renders the usage text for a whole command tree: name and usage line,
/// an OPTIONS section per command and a recursive SUBCOMMANDS listing with
/// parent-name prefixes.
pub fn render<C, S>(cmd: &Cmd<C, S>) -> String {
    let mut buf = String::new();
    render_rec(&mut buf, "", &cmd.meta());
    buf
}

fn render_rec(buf: &mut String, prefix: &str, cmd: &CmdMeta) {
    w!(buf, "{}{}\n", prefix, cmd.name);
    w!(buf, "  {}\n", cmd.usage);
    let indent = if prefix.is_empty() { "" } else { "  " };

    if !cmd.options.is_empty() {
        w!(buf, "\n{}OPTIONS:\n", indent);

        let mut blank = "";
        for opt in &cmd.options {
            w!(buf, "{}", blank);
            blank = "\n";

            let short = opt.short.map(|it| format!("-{}, ", it)).unwrap_or_default();
            let value = opt.kind.placeholder().map(|it| format!(" <{}>", it)).unwrap_or_default();
            w!(buf, "    {}--{}{}\n", short, opt.long, value);
            w!(buf, "      {}\n", opt.usage);
        }
    }

    if prefix.is_empty() && !cmd.children.is_empty() {
        w!(buf, "\nSUBCOMMANDS:");
    }

    let prefix = format!("{}{} ", prefix, cmd.name);
    for sub in &cmd.children {
        w!(buf, "\n\n");
        render_rec(buf, &prefix, sub);
    }
}
