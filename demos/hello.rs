use cmdtree::{Cmd, Opt};

#[derive(Debug, Default)]
struct Hello {
    emoji: bool,
    repeat: Option<u32>,
}

fn main() {
    let schema: Cmd<Hello, ()> = Cmd::new("hello", "greets everyone named on the command line")
        .opt(Opt::flag("emoji", Some('e'), "punctuate with feeling", |h: &mut Hello| {
            h.emoji = true
        }))
        .opt(Opt::int("repeat", Some('r'), "how many greetings each", |h: &mut Hello, n| {
            h.repeat = Some(n)
        }));

    match schema.parse_env() {
        Ok(out) => {
            let bang = if out.cmd.emoji { "❣️" } else { "!" };
            let repeat = out.cmd.repeat.unwrap_or(1);
            let names = if out.bare.is_empty() { vec!["world".to_string()] } else { out.bare };
            for name in &names {
                for _ in 0..repeat {
                    println!("Hello {}{}", name, bang);
                }
            }
        }
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("{}", cmdtree::render(&schema));
            std::process::exit(1)
        }
    }
}
