//! tabclip CLI - Copy TSV, CSV, Markdown, space-aligned or box-drawing tables as HTML

#[cfg(feature = "cli")]
use clap::{ArgAction, Parser, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use tabclip::{
    clipboard::CommandClipboard, convert, unescape_literals, wrap_html_document,
    ClipboardPayload, ClipboardSink, ConversionError, ConversionOutput, ConversionResult,
    ConvertOptions, Delimiter, Format,
};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tabclip")]
#[command(version)]
#[command(
    about = "Convert text tables (TSV, CSV, Markdown, space-separated, box-drawing) to clipboard HTML for spreadsheets",
    long_about = None
)]
#[command(after_help = "Examples:
  pbpaste | tabclip
  cat data.csv | tabclip
  echo \"A,B,C\" | tabclip --stdout")]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Table format (overrides auto-detection)
    #[arg(short, long, value_enum, group = "format_choice")]
    format: Option<FormatArg>,

    /// CSV format (overrides auto-detection)
    #[arg(long, group = "format_choice")]
    csv: bool,

    /// TSV format (overrides auto-detection)
    #[arg(long, group = "format_choice")]
    tsv: bool,

    /// Space-separated format (overrides auto-detection)
    #[arg(long, group = "format_choice")]
    spaces: bool,

    /// Markdown table format (overrides auto-detection)
    #[arg(long, visible_alias = "md", group = "format_choice")]
    markdown: bool,

    /// Box-drawing table format (overrides auto-detection)
    #[arg(long, group = "format_choice")]
    boxdraw: bool,

    /// Don't treat the first row as header
    #[arg(long)]
    no_header: bool,

    /// Keep literal \t, \n and \r sequences as they are
    #[arg(long)]
    no_unescape: bool,

    /// Detect and print the input format without converting
    #[arg(long)]
    detect: bool,

    /// Print the HTML to stdout instead of copying it
    #[arg(long)]
    stdout: bool,

    /// Write the HTML to a file instead of copying it
    #[arg(short, long)]
    output: Option<String>,

    /// Wrap printed or written HTML in a complete document
    #[arg(long)]
    document: bool,

    /// Strict mode: exit with error if any conversion warnings occur
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress status and warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Auto-detect based on content
    Auto,
    /// Tab-separated values
    Tsv,
    /// Comma-separated values
    Csv,
    /// Columns separated by two or more spaces
    Spaces,
    /// Markdown pipe table
    #[value(alias = "md")]
    Markdown,
    /// Unicode box-drawing table
    #[value(alias = "box")]
    Boxdraw,
}

#[cfg(feature = "cli")]
impl From<FormatArg> for Delimiter {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => Delimiter::Auto,
            FormatArg::Tsv => Delimiter::TSV,
            FormatArg::Csv => Delimiter::CSV,
            FormatArg::Spaces => Delimiter::SPACES,
            FormatArg::Markdown => Delimiter::MARKDOWN,
            FormatArg::Boxdraw => Delimiter::BOXDRAW,
        }
    }
}

#[cfg(feature = "cli")]
impl Cli {
    /// Requested format from `--format` or one of the shorthand flags
    fn delimiter(&self) -> Delimiter {
        if let Some(format) = self.format {
            return format.into();
        }
        let flags = [
            (self.csv, Format::Csv),
            (self.tsv, Format::Tsv),
            (self.spaces, Format::Spaces),
            (self.markdown, Format::Markdown),
            (self.boxdraw, Format::BoxDraw),
        ];
        flags
            .iter()
            .find(|(set, _)| *set)
            .map(|(_, format)| Delimiter::Fixed(*format))
            .unwrap_or_default()
    }

    fn options(&self) -> ConvertOptions {
        ConvertOptions {
            has_header: !self.no_header,
            delimiter: self.delimiter(),
            unescape_literals: !self.no_unescape,
        }
    }
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        match err {
            ConversionError::EmptyInput => {
                eprintln!("{}", err);
                eprintln!("Usage: pbpaste | tabclip");
                eprintln!("Run 'tabclip --help' for more options");
            }
            _ => eprintln!("Error: {}", err),
        }
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[cfg(feature = "cli")]
fn read_input(path: Option<&str>) -> ConversionResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> ConversionResult<()> {
    let input = read_input(cli.input_file.as_deref())?;
    let options = cli.options();

    // If detect mode, just print format and exit
    if cli.detect {
        let text = if options.unescape_literals {
            unescape_literals(&input)
        } else {
            input
        };
        if text.trim().is_empty() {
            return Err(ConversionError::EmptyInput);
        }
        println!("{}", options.delimiter.resolve(&text));
        return Ok(());
    }

    let output = convert(&input, &options)?;

    if !cli.quiet {
        print_status(&output);
    }

    if cli.strict && output.has_warnings() {
        return Err(ConversionError::invalid(format!(
            "{} conversion warning(s) in strict mode",
            output.warnings.len()
        )));
    }

    let rendered = if cli.document {
        wrap_html_document(&output.html)
    } else {
        output.html.clone()
    };

    if let Some(ref path) = cli.output {
        fs::write(path, format!("{}\n", rendered))?;
        if !cli.quiet {
            eprintln!("✓ Output written to: {}", path);
        }
    } else if cli.stdout {
        println!("{}", rendered);
    } else {
        let sink = CommandClipboard::platform_default()?;
        sink.copy(&ClipboardPayload::new(output.html))?;
        log::debug!("copied with {}", sink.name());
        if !cli.quiet {
            eprintln!("Copied to clipboard!");
        }
    }

    Ok(())
}

/// Print the resolved format and any warnings to stderr
#[cfg(feature = "cli")]
fn print_status(output: &ConversionOutput) {
    eprintln!(
        "Format: {} ({})",
        output.format.name().to_uppercase(),
        if output.detected {
            "auto-detected"
        } else {
            "specified"
        }
    );

    for warning in &output.warnings {
        eprintln!("  {}", warning);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tabclip --features cli");
    eprintln!("  tabclip [OPTIONS] [INPUT_FILE]");
}
