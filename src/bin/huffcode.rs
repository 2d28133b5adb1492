use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use huffcode::{CodecConfig, Encoded, HuffmanCodec};

#[derive(Parser, Debug)]
#[command(name = "huffcode")]
#[command(about = "Build a Huffman code for the input and show the encoded and decoded result")]
#[command(version)]
struct Args {
    /// Text to encode
    #[arg(required_unless_present = "input", conflicts_with = "input")]
    text: Option<String>,

    /// Read the input from a file instead (use - for stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also print the packed stream as hex
    #[arg(long)]
    hex: bool,

    /// Decode after encoding and fail if the result differs
    #[arg(long)]
    verify: bool,

    /// Show verbose statistics
    #[arg(short, long)]
    verbose: bool,
}

const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let input = read_input(&args)?;
    let config = CodecConfig { verify: args.verify, ..Default::default() };

    let start = std::time::Instant::now();
    let encoded = HuffmanCodec::new(config).compress(&input)?;
    let decoded = encoded.decode()?;
    let elapsed = start.elapsed();

    let mut stdout = io::stdout().lock();
    print_result(&mut stdout, &encoded, &decoded, args.hex)?;

    if args.verbose {
        let stats = encoded.stats();
        eprintln!("Coding complete:");
        eprintln!("  Input symbols:    {}", stats.input_symbols);
        eprintln!("  Distinct symbols: {}", stats.distinct_symbols);
        eprintln!("  Encoded bits:     {}", stats.encoded_bits);
        eprintln!("  Fixed-width bits: {}", stats.fixed_width_bits);
        eprintln!("  Packed bytes:     {}", stats.packed_bytes);
        eprintln!("  Bits per symbol:  {:.3}", stats.bits_per_symbol());
        if let Some(tree) = encoded.tree() {
            eprintln!("  Tree depth:       {}", tree.depth());
        }
        eprintln!("  Time:             {:.2?}", elapsed);
    }

    Ok(())
}

fn read_input(args: &Args) -> io::Result<Vec<u8>> {
    match (&args.text, &args.input) {
        (Some(text), _) => Ok(text.clone().into_bytes()),
        (None, Some(path)) if path.to_str() == Some("-") => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            Ok(buf)
        }
        (None, Some(path)) => fs::read(path),
        (None, None) => Ok(Vec::new()),
    }
}

fn print_result<W: Write>(
    out: &mut W,
    encoded: &Encoded,
    decoded: &[u8],
    hex: bool,
) -> io::Result<()> {
    writeln!(out, "symbol codes:")?;
    for (symbol, code) in encoded.table().iter() {
        writeln!(out, "{}: {}", display_symbol(symbol), code)?;
    }
    writeln!(out, "coded string: {}", encoded.stream())?;

    if hex {
        let (bytes, bit_len) = encoded.packed();
        let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        writeln!(out, "packed ({} bits): {}", bit_len, hex)?;
    }

    writeln!(out, "decoded string: {}", String::from_utf8_lossy(decoded))?;
    out.flush()
}

fn display_symbol(symbol: u8) -> String {
    if symbol.is_ascii_graphic() || symbol == b' ' {
        format!("'{}'", symbol as char)
    } else {
        format!("0x{:02x}", symbol)
    }
}
