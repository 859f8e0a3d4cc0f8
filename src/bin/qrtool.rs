use clap::{Args, Parser, Subcommand};
use rust_qr_gen::encoder::tables::ec_block_info;
use rust_qr_gen::{
    ECLevel, MaskPattern, MaskSelection, Mode, RenderOptions, Symbol, SymbolOptions,
};
use std::error::Error;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "QR code encoder CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and print the symbol
    Encode {
        #[command(flatten)]
        symbol: SymbolArgs,
        /// Mark reserved light modules
        #[arg(long)]
        debug: bool,
        /// Show the codeword index of each data module
        #[arg(long)]
        codewords: bool,
    },
    /// Print version, block layout and codewords for a text
    Info {
        #[command(flatten)]
        symbol: SymbolArgs,
    },
    /// Print the penalty of every mask pattern
    Masks {
        #[command(flatten)]
        symbol: SymbolArgs,
    },
}

#[derive(Args)]
struct SymbolArgs {
    /// Text to encode
    text: String,
    /// auto, numeric, alphanumeric or byte
    #[arg(long, default_value = "auto")]
    mode: String,
    /// Error correction level: L, M, Q or H
    #[arg(long, default_value = "M")]
    level: ECLevel,
    /// auto or a pattern index 0-7
    #[arg(long, default_value = "auto")]
    mask: String,
}

impl SymbolArgs {
    fn options(&self) -> Result<SymbolOptions, Box<dyn Error>> {
        let mut options = Symbol::builder().level(self.level);
        if !self.mode.eq_ignore_ascii_case("auto") {
            options = options.mode(self.mode.parse::<Mode>()?);
        }
        if !self.mask.eq_ignore_ascii_case("auto") {
            let index: u8 = self
                .mask
                .trim()
                .parse()
                .map_err(|_| format!("invalid mask '{}' (expected auto or 0-7)", self.mask))?;
            options = options.mask(MaskSelection::Fixed(MaskPattern::new(index)?));
        }
        Ok(options)
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Encode {
            symbol,
            debug,
            codewords,
        } => encode_cmd(&symbol, debug, codewords),
        Command::Info { symbol } => info_cmd(&symbol),
        Command::Masks { symbol } => masks_cmd(&symbol),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn encode_cmd(args: &SymbolArgs, debug: bool, codewords: bool) -> Result<(), Box<dyn Error>> {
    let start = Instant::now();
    let symbol = args.options()?.debug(debug).build(&args.text)?;
    let elapsed = start.elapsed();

    let render = RenderOptions {
        debug,
        codeword_labels: codewords,
    };
    print!("{}", symbol.render(&render));
    eprintln!(
        "version={} level={} mode={} mask={} penalty={} ({:.2} ms)",
        symbol.version(),
        symbol.level(),
        symbol.mode(),
        symbol.mask(),
        symbol.penalty(),
        elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

fn info_cmd(args: &SymbolArgs) -> Result<(), Box<dyn Error>> {
    let symbol = args.options()?.build(&args.text)?;
    let blocks = ec_block_info(symbol.version().number(), symbol.level())?;

    println!("Text: {:?}", symbol.text());
    println!(
        "Version: {} ({}x{} modules, {}x{} with quiet zone)",
        symbol.version(),
        symbol.size(),
        symbol.size(),
        symbol.width(),
        symbol.width()
    );
    println!("Mode: {}", symbol.mode());
    println!("Level: {}", symbol.level());
    println!("Mask: {} (penalty {})", symbol.mask(), symbol.penalty());
    println!(
        "Blocks: {} short x {} + {} long x {}, {} correction codewords each",
        blocks.num_blocks - blocks.long_blocks(),
        blocks.short_block_len(),
        blocks.long_blocks(),
        blocks.short_block_len() + 1,
        blocks.ecc_per_block
    );
    println!(
        "Data codewords ({}): {}",
        symbol.data_codewords().len(),
        hex(symbol.data_codewords())
    );
    println!(
        "Final codewords ({}): {}",
        symbol.codewords().len(),
        hex(symbol.codewords())
    );
    Ok(())
}

fn masks_cmd(args: &SymbolArgs) -> Result<(), Box<dyn Error>> {
    let symbol = args.options()?.build(&args.text)?;
    println!("Version {}-{}, mode {}", symbol.version(), symbol.level(), symbol.mode());
    for (mask, penalty) in symbol.mask_penalties() {
        let marker = if mask == symbol.mask() { " *" } else { "" };
        println!("  mask {}: penalty {}{}", mask, penalty, marker);
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(" ")
}
