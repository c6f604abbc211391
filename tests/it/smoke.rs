use cmdtree::{Cmd, Opt};

#[derive(Debug, Default)]
pub struct Root {
    pub verbose: bool,
    pub mem: Option<u32>,
    pub path: String,
}

#[derive(Debug, Default)]
pub struct Foo {
    pub inner_verbose: bool,
}

#[derive(Debug)]
pub enum RootCmd {
    Foo(Foo),
}

pub fn schema() -> Cmd<Root, RootCmd> {
    Cmd::new("test", "exercises every option kind")
        .opt(Opt::flag("verbose", Some('v'), "prints verbosely", |it: &mut Root| {
            it.verbose = true
        }))
        .opt(Opt::int("mem", Some('m'), "memory ceiling in gigabytes", |it: &mut Root, n| {
            it.mem = Some(n)
        }))
        .opt(Opt::string("path", Some('p'), "sets the search path", |it: &mut Root, s| {
            it.path = s
        }))
        .child(foo(), |cmd, _| RootCmd::Foo(cmd))
}

pub fn foo() -> Cmd<Foo, ()> {
    Cmd::new("foo", "does the foo thing").opt(Opt::flag(
        "verbose",
        Some('v'),
        "prints verbosely, extra",
        |it: &mut Foo| it.inner_verbose = true,
    ))
}
