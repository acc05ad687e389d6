use std::io::{Read, Write};
use std::process;

use clap::Parser;

use blockmark::{parse_blocks, MarkdownService, Options, Result};

#[derive(Parser, Debug)]
#[command(name = "blockmark", version, about = "Convert block editor JSON to Markdown")]
struct Cli {
    /// Editor JSON file, or `-` for stdin
    #[arg(default_value = "-")]
    input: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Write plain text instead of Markdown
    #[arg(long, conflicts_with = "excerpt")]
    plain_text: bool,

    /// Write a plain text excerpt of at most N characters
    #[arg(long, value_name = "N")]
    excerpt: Option<usize>,

    /// Marker for bullet and check list items
    #[arg(long, default_value_t = '-')]
    bullet_marker: char,

    /// Fence for code blocks
    #[arg(long, default_value = "```")]
    fence: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let source = read_input(&cli.input)?;
    let mut rendered = render(cli, &source)?;
    rendered.push('\n');

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)?,
        None => std::io::stdout().lock().write_all(rendered.as_bytes())?,
    }
    Ok(())
}

fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}

fn render(cli: &Cli, source: &str) -> Result<String> {
    let service = MarkdownService::with_options(Options {
        bullet_list_marker: cli.bullet_marker,
        fence: cli.fence.clone(),
        ..Options::default()
    });

    if cli.plain_text || cli.excerpt.is_some() {
        let blocks = parse_blocks(source)?;
        return Ok(match cli.excerpt {
            Some(max_chars) => service.excerpt(&blocks, max_chars),
            None => service.plain_text(&blocks),
        });
    }

    service.serialize_json(source)
}
