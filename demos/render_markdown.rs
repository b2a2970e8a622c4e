use list_spans::markdown::convert_events;
use list_spans::render::render_plain;
use list_spans::{Geometry, LogFaultSink};
use pulldown_cmark::{Options, Parser};
use std::env;
use std::fs;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: render_markdown <file.md> [geometry.toml]");
        return;
    }
    let source = match fs::read_to_string(&args[1]) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("cannot read {}: {}", args[1], e);
            return;
        }
    };
    let geometry = match args.get(2).map(fs::read_to_string) {
        None => Geometry::default(),
        Some(Ok(cfg)) => match Geometry::from_toml_str(&cfg) {
            Ok(g) => g,
            Err(e) => {
                eprintln!("{}", e);
                return;
            }
        },
        Some(Err(e)) => {
            eprintln!("cannot read geometry: {}", e);
            return;
        }
    };

    let parser = Parser::new_ext(&source, Options::ENABLE_TASKLISTS);
    let (text, _) = convert_events(parser, geometry, LogFaultSink);

    eprintln!("--- spans ---");
    for (i, span) in text.spans().iter().enumerate() {
        eprintln!("{:03}: {:?} {:?}", i, span.range, span.style);
    }
    eprintln!("--- end spans ---");
    print!("{}", render_plain(&text, &geometry));
}
