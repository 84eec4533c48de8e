use clap::{Parser, Subcommand};
use company_map::console::{TextList, TextMap};
use company_map::{init_tracing, Controller, DatasetSource, FileSource, HttpSource};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Load companies and print the directory; optional REPL to filter it
    View {
        /// Path to companies.json
        #[arg(long, default_value = "static/companies.json", conflicts_with = "url")]
        data: String,
        /// Fetch the dataset from a running host instead
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        field: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        q: Option<String>,
        /// Start interactive REPL after the first render
        #[arg(long)]
        repl: bool,
    },
}

type Ctl = Controller<TextMap, TextList>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::View {
            data,
            url,
            field,
            location,
            q,
            repl,
        } => {
            let source: Box<dyn DatasetSource> = match url {
                Some(u) => Box::new(HttpSource::new(u)),
                None => Box::new(FileSource { path: data.into() }),
            };
            run_view(source.as_ref(), field, location, q, repl).await?
        }
    }
    Ok(())
}

async fn run_view(
    source: &dyn DatasetSource,
    field: Option<String>,
    location: Option<String>,
    q: Option<String>,
    repl: bool,
) -> anyhow::Result<()> {
    let mut ctl: Ctl = Controller::new(TextMap::default(), TextList::default());
    ctl.init(source).await?;
    for n in ctl.state().notices() {
        eprintln!("error: {n}");
    }

    if field.is_some() {
        ctl.set_field(field.as_deref());
    }
    if location.is_some() {
        ctl.set_location(location.as_deref());
    }
    if let Some(q) = q {
        ctl.set_search(&q);
    }
    print_view(&ctl);

    if repl {
        use std::io::{stdin, stdout, Write};
        let mut input = String::new();
        loop {
            input.clear();
            print!("filter> ");
            stdout().flush().ok();
            if stdin().read_line(&mut input).is_err() {
                break;
            }
            let line = input.trim();
            if line.is_empty() || line == ":q" || line == ":quit" {
                break;
            }
            match apply_command(&mut ctl, line) {
                Ok(true) => print_view(&ctl),
                Ok(false) => {}
                Err(msg) => println!("{msg}"),
            }
        }
    }
    Ok(())
}

/// `Ok(true)` — views changed and should be reprinted.
fn apply_command(ctl: &mut Ctl, line: &str) -> Result<bool, String> {
    let (cmd, arg) = match line.split_once(' ') {
        Some((c, a)) => (c, a.trim()),
        None => (line, ""),
    };
    let opt = (!arg.is_empty()).then_some(arg);
    match cmd {
        "field" => ctl.set_field(opt),
        "location" => ctl.set_location(opt),
        "search" => ctl.set_search(arg),
        "tag" if opt.is_some() => ctl.tag_clicked(arg),
        "clear" => ctl.clear_filters(),
        "open" | "hover" | "unhover" => {
            let n: usize = arg.parse().map_err(|_| format!("{cmd}: expected a card number"))?;
            let i = n.checked_sub(1).ok_or("cards are numbered from 1")?;
            let ok = match cmd {
                "open" => ctl.activate_card(i),
                "hover" => ctl.hover_card(i, true),
                _ => ctl.hover_card(i, false),
            };
            if !ok {
                return Err(format!("no card #{n}"));
            }
            println!("{}", ctl.view().map().summary());
            return Ok(false);
        }
        "fields" => {
            for f in &ctl.state().options().fields {
                println!("{f}");
            }
            return Ok(false);
        }
        "locations" => {
            for l in &ctl.state().options().locations {
                println!("{l}");
            }
            return Ok(false);
        }
        _ => {
            return Err(
                "commands: field [F] | location [L] | search [TEXT] | tag F | clear | open N | hover N | unhover N | fields | locations | :q"
                    .into(),
            )
        }
    };
    Ok(true)
}

fn print_view(ctl: &Ctl) {
    print!("{}", ctl.view().list().render());
    println!("{}", ctl.view().map().summary());
}
