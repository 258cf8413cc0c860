use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use segment::detect::{DetectorRegistry, SharedDetector};
use segment::{Segmenter, SegmenterConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "segment", about = "Split text into segments using pluggable boundary detectors")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace every step). `RUST_LOG` replaces the level.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the segments of a file, one per line.
    Split {
        /// Input file, or `-` for stdin.
        input: PathBuf,
        /// Detector to use (see `segment detectors`).
        #[arg(short, long, default_value = "whitespace")]
        detector: String,
        /// Prefix each segment with `<start>\t<end>\t`.
        #[arg(long)]
        spans: bool,
        /// Print segments last to first by stepping back through history.
        #[arg(long)]
        reverse: bool,
    },
    /// List the available detectors.
    Detectors,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let registry = DetectorRegistry::with_builtins();

    match cli.command {
        Commands::Split {
            input,
            detector,
            spans,
            reverse,
        } => {
            let detector = registry.get(&detector).with_context(|| {
                format!("unknown detector '{detector}' (run `segment detectors` for a list)")
            })?;
            run_split(&input, detector, SegmenterConfig::default(), spans, reverse)?
        }
        Commands::Detectors => {
            for info in registry.list() {
                println!("{:<12}{}", info.name, info.description);
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_split(
    input: &Path,
    detector: SharedDetector,
    config: SegmenterConfig,
    spans: bool,
    reverse: bool,
) -> Result<()> {
    let text = read_input(input)?;
    let mut seg = Segmenter::with_config(detector, config);
    seg.set_text(&text);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut count = 0usize;
    while seg.next() {
        count += 1;
        if !reverse {
            print_segment(&mut out, &seg, spans)?;
        }
    }

    if let Some(err) = seg.err() {
        bail!(
            "segmentation of {} failed after byte {}: {err}",
            input.display(),
            seg.end()
        );
    }

    if reverse && count > 0 {
        print_segment(&mut out, &seg, spans)?;
        while seg.previous() {
            print_segment(&mut out, &seg, spans)?;
        }
    }

    out.flush()?;
    tracing::debug!(segments = count, bytes = text.len(), "done");
    Ok(())
}

fn print_segment<W: Write>(
    out: &mut W,
    seg: &Segmenter<'_, SharedDetector>,
    spans: bool,
) -> io::Result<()> {
    if spans {
        write!(out, "{}\t{}\t", seg.start(), seg.end())?;
    }
    out.write_all(seg.bytes())?;
    out.write_all(b"\n")
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}
