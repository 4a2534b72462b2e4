//! escaper - context-aware text escaping

use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use escaper::{Context, Escaper, EscaperConfig, QuoteMode};

#[derive(Parser)]
#[command(name = "escaper")]
#[command(version, long_about = None)]
#[command(about = "Escape text for HTML, attributes, CSS, JavaScript and URLs")]
#[command(after_help = "EXAMPLES:
    escaper css 'font-family: <Verdana>'    Escape a CSS token
    escaper attr --file value.txt           Escape a file's contents for an attribute
    echo -n 'a b' | escaper url             Percent-encode stdin
    escaper detect --file legacy.txt        Show the detected charset")]
struct Cli {
    /// What to do with the input
    #[arg(value_enum, value_name = "CONTEXT")]
    mode: Mode,

    /// Text to process (reads --file or stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    text: Option<String>,

    /// Read the input bytes from a file
    #[arg(short, long, value_name = "PATH")]
    file: Option<String>,

    /// Charset declared for HTML escaping
    #[arg(short, long, default_value = escaper::config::DEFAULT_ENCODING)]
    encoding: String,

    /// Which quotes HTML escaping converts
    #[arg(short, long, value_enum, default_value_t = Quote::Both)]
    quote: Quote,

    /// Print a JSON object instead of the bare result
    #[arg(long)]
    json: bool,

    /// Log detection and normalization decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Html,
    Attr,
    Css,
    Js,
    Url,
    Detect,
    Normalize,
}

#[derive(Clone, Copy, ValueEnum)]
enum Quote {
    None,
    Double,
    Both,
}

impl From<Quote> for QuoteMode {
    fn from(quote: Quote) -> Self {
        match quote {
            Quote::None => QuoteMode::None,
            Quote::Double => QuoteMode::DoubleQuotes,
            Quote::Both => QuoteMode::BothQuotes,
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    context: &'a str,
    encoding: &'a str,
    quote_mode: QuoteMode,
    output: Option<String>,
}

/// Exit status when the escaper had nothing to escape.
const EXIT_PASS_THROUGH: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(Some(())) => ExitCode::SUCCESS,
        Ok(None) => ExitCode::from(EXIT_PASS_THROUGH),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("escaper=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(cli: &Cli) -> Result<Vec<u8>, String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone().into_bytes());
    }
    if let Some(path) = &cli.file {
        return std::fs::read(path).map_err(|e| format!("{path}: {e}"));
    }
    let mut buf = Vec::new();
    io::stdin()
        .read_to_end(&mut buf)
        .map_err(|e| format!("stdin: {e}"))?;
    Ok(buf)
}

fn run(cli: &Cli) -> Result<Option<()>, String> {
    let config = EscaperConfig::new()
        .with_encoding(&cli.encoding)
        .map_err(|e| e.to_string())?
        .with_quote_mode(cli.quote.into());
    let escaper = Escaper::with_config(config);
    let input = read_input(cli)?;

    let (label, output) = match cli.mode {
        Mode::Detect => ("detect", escaper.detect_encoding(&input)),
        Mode::Normalize => {
            let utf32 = escaper.normalize_encoding(&input).map_err(|e| e.to_string())?;
            let hex = utf32
                .chunks(4)
                .map(|unit| unit.iter().map(|b| format!("{b:02x}")).collect::<String>())
                .collect::<Vec<_>>()
                .join(" ");
            ("normalize", Some(hex))
        }
        Mode::Html => ("html", escape(&escaper, Context::Html, &input)?),
        Mode::Attr => ("attr", escape(&escaper, Context::HtmlAttr, &input)?),
        Mode::Css => ("css", escape(&escaper, Context::Css, &input)?),
        Mode::Js => ("js", escape(&escaper, Context::Js, &input)?),
        Mode::Url => ("url", escape(&escaper, Context::Url, &input)?),
    };

    if cli.json {
        let report = Report {
            context: label,
            encoding: escaper.encoding(),
            quote_mode: escaper.html_quote_type(),
            output: output.clone(),
        };
        let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{json}");
    } else if let Some(out) = &output {
        println!("{out}");
    }

    Ok(output.map(|_| ()))
}

fn escape(escaper: &Escaper, context: Context, input: &[u8]) -> Result<Option<String>, String> {
    escaper.escape(context, input).map_err(|e| e.to_string())
}
