use cmdtree::{Cmd, Opt};

#[derive(Debug, Default)]
pub struct Analyzer {
    pub verbose: bool,
}

#[derive(Debug)]
pub enum AnalyzerCmd {
    Server(Server, Option<ServerCmd>),
    Stats(Stats),
}

#[derive(Debug, Default)]
pub struct Server {
    pub dir: Option<String>,
}

#[derive(Debug)]
pub enum ServerCmd {
    Launch(Launch),
    Watch(Watch),
}

#[derive(Debug, Default)]
pub struct Launch {
    pub log: bool,
}

#[derive(Debug, Default)]
pub struct Watch {
    pub interval: u32,
}

#[derive(Debug, Default)]
pub struct Stats {
    pub parallel: bool,
}

pub fn schema() -> Cmd<Analyzer, AnalyzerCmd> {
    let launch: Cmd<Launch, ()> = Cmd::new("launch", "starts the server").opt(Opt::flag(
        "log",
        None,
        "writes a log file",
        |it: &mut Launch| it.log = true,
    ));

    let watch: Cmd<Watch, ()> = Cmd::new("watch", "restarts the server on change").opt(Opt::int(
        "interval",
        Some('i'),
        "poll interval in seconds",
        |it: &mut Watch, n| it.interval = n,
    ));

    let server = Cmd::new("server", "runs the long-lived process")
        .opt(Opt::string("dir", None, "working directory", |it: &mut Server, s| {
            it.dir = Some(s)
        }))
        .child(launch, |cmd, _| ServerCmd::Launch(cmd))
        .child(watch, |cmd, _| ServerCmd::Watch(cmd));

    let stats: Cmd<Stats, ()> = Cmd::new("analysis-stats", "runs batch analysis").opt(Opt::flag(
        "parallel",
        None,
        "uses all cores",
        |it: &mut Stats| it.parallel = true,
    ));

    Cmd::new("analyzer", "toy language server")
        .opt(Opt::flag("verbose", Some('v'), "prints verbosely", |it: &mut Analyzer| {
            it.verbose = true
        }))
        .child(server, AnalyzerCmd::Server)
        .child(stats, |cmd, _| AnalyzerCmd::Stats(cmd))
}
