use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::{env, process};
use tau_docs_config::{Config, ModeSetting};
use tau_docs_engine::{HighlightMode, Highlighter, Keywords, highlight_page, io};
use tau_docs_syntax::{keywords, lexer};

const USAGE: &str = "highlight <file|-> | page <in.html> [out.html] | lex <file|-> | init";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Highlight(PathBuf),
    Page { input: PathBuf, output: Option<PathBuf> },
    Lex(PathBuf),
    Init,
}

fn parse_args(args: &[String]) -> Option<Command> {
    match args {
        [_, cmd, input] if cmd == "highlight" => Some(Command::Highlight(input.into())),
        [_, cmd, input] if cmd == "lex" => Some(Command::Lex(input.into())),
        [_, cmd, input] if cmd == "page" => Some(Command::Page {
            input: input.into(),
            output: None,
        }),
        [_, cmd, input, output] if cmd == "page" => Some(Command::Page {
            input: input.into(),
            output: Some(output.into()),
        }),
        [_, cmd] if cmd == "init" => Some(Command::Init),
        _ => None,
    }
}

fn program_name(args: &[String]) -> &str {
    args.first().map_or("tau-docs", String::as_str)
}

fn build_highlighter(config: &Config) -> Highlighter {
    let mut keywords = Keywords::builtin();
    for word in &config.highlight.extra_keywords {
        if let Err(e) = keywords.insert(word) {
            log::warn!("Skipping configured keyword: {e}");
        }
    }

    let mode = match config.highlight.mode {
        ModeSetting::Passes => HighlightMode::Passes,
        ModeSetting::Lexer => HighlightMode::Lexer,
    };
    Highlighter::new(keywords, mode)
}

/// `-` reads standard input.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read standard input")?;
        return Ok(buf);
    }
    Ok(io::read_source(path)?)
}

/// Explicit output path, else the configured output directory, else stdout.
fn page_destination(input: &Path, output: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    output.or_else(|| {
        let dir = config.page.output_dir.as_ref()?;
        Some(dir.join(input.file_name()?))
    })
}

fn run(command: Command, config: &Config) -> Result<()> {
    let highlighter = build_highlighter(config);
    let mut stdout = std::io::stdout().lock();

    match command {
        Command::Highlight(input) => {
            let source = read_input(&input)?;
            writeln!(stdout, "{}", highlighter.highlight(&source))?;
        }
        Command::Lex(input) => {
            let source = read_input(&input)?;
            let (tokens, spans): (Vec<_>, Vec<_>) =
                lexer::lex_with_spans(&source).into_iter().unzip();
            let classes = lexer::classify(&tokens, highlighter.keywords());
            for ((token, span), class) in tokens.iter().zip(spans).zip(classes) {
                write!(stdout, "{:?}@{span:?} {class:?} {:?}", token.kind, token.text)?;
                match keywords::role_of(token.text) {
                    Some(role) => writeln!(stdout, " ({role:?})")?,
                    None => writeln!(stdout)?,
                }
            }
        }
        Command::Page { input, output } => {
            let html = read_input(&input)?;
            let out = highlight_page(&html, &highlighter, &config.highlight.code_class);
            match page_destination(&input, output, config) {
                Some(path) => {
                    io::write_output(&path, &out.html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote {}", path.display());
                }
                None => write!(stdout, "{}", out.html)?,
            }
        }
        Command::Init => {
            let path = Config::config_path();
            if path.exists() {
                anyhow::bail!("{} already exists", path.display());
            }
            Config::default().save()?;
            log::info!("Wrote default config to {}", path.display());
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // Info by default, RUST_LOG overrides
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(command) = parse_args(&args) else {
        eprintln!("Usage: {} {USAGE}", program_name(&args));
        process::exit(1);
    };

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    run(command, &config)
}
