//! tinyvm command-line front end.
//!
//! This binary provides a single entry point for working with program images. It performs:
//! 1. **Run:** Load an image at the configured base, set up the stack, and execute it with
//!    the process's standard input and output as the console.
//! 2. **Disassemble:** Print every instruction triple in an image with its address.
//!
//! Diagnostics go to stderr through `tracing`; the program's own output owns stdout.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tinyvm_core::Config;
use tinyvm_core::common::INSTRUCTION_SIZE;
use tinyvm_core::isa::disasm;
use tinyvm_core::sim::loader;
use tinyvm_core::soc::StreamConsole;

#[derive(Parser, Debug)]
#[command(
    name = "tinyvm",
    author,
    version,
    about = "Fixed-width instruction virtual machine",
    long_about = "Run or disassemble a raw program image of 12-byte instructions.\n\nExamples:\n  tinyvm run program.bin\n  tinyvm run program.bin --base 0x2000 --stack 0x8000 --stats\n  tinyvm run program.bin --config vm.json --trace\n  tinyvm disasm program.bin"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and execute a program image.
    Run {
        /// Raw program image.
        image: PathBuf,

        /// JSON configuration file; command-line flags override its values.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Load address of the image (decimal or 0x-prefixed hex).
        #[arg(long, value_parser = parse_u32)]
        base: Option<u32>,

        /// Initial stack pointer (decimal or 0x-prefixed hex).
        #[arg(long, value_parser = parse_u32)]
        stack: Option<u32>,

        /// Memory size in bytes (decimal or 0x-prefixed hex).
        #[arg(long, value_parser = parse_usize)]
        memory: Option<usize>,

        /// Maximum number of instructions before the run is aborted.
        #[arg(long)]
        max_steps: Option<u64>,

        /// Log every executed instruction to stderr.
        #[arg(long)]
        trace: bool,

        /// Print run statistics to stderr when the run ends.
        #[arg(long)]
        stats: bool,
    },

    /// Disassemble a program image.
    Disasm {
        /// Raw program image.
        image: PathBuf,

        /// Address the listing starts at (decimal or 0x-prefixed hex).
        #[arg(long, value_parser = parse_u32)]
        base: Option<u32>,
    },
}

/// Options of the `run` subcommand after parsing.
#[derive(Debug)]
struct RunArgs {
    image: PathBuf,
    config: Option<PathBuf>,
    base: Option<u32>,
    stack: Option<u32>,
    memory: Option<usize>,
    max_steps: Option<u64>,
    trace: bool,
    stats: bool,
}

fn main() {
    let cli = Cli::parse();

    let trace = matches!(cli.command, Commands::Run { trace: true, .. });
    init_logging(trace);

    match cli.command {
        Commands::Run {
            image,
            config,
            base,
            stack,
            memory,
            max_steps,
            trace,
            stats,
        } => cmd_run(&RunArgs {
            image,
            config,
            base,
            stack,
            memory,
            max_steps,
            trace,
            stats,
        }),
        Commands::Disasm { image, base } => cmd_disasm(&image, base),
    }
}

/// Installs a stderr subscriber; `RUST_LOG` wins over the default level.
fn init_logging(trace: bool) {
    let default = if trace { "trace" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Parses an unsigned value written in decimal or with a `0x` prefix.
fn parse_u64(text: &str) -> Result<u64, String> {
    let text = text.trim();
    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
        None => text.replace('_', "").parse(),
    };
    parsed.map_err(|e| format!("invalid number `{text}`: {e}"))
}

fn parse_u32(text: &str) -> Result<u32, String> {
    let value = parse_u64(text)?;
    u32::try_from(value).map_err(|_| format!("`{text}` does not fit in 32 bits"))
}

fn parse_usize(text: &str) -> Result<usize, String> {
    let value = parse_u64(text)?;
    usize::try_from(value).map_err(|_| format!("`{text}` is too large"))
}

/// Builds the effective configuration: file (or defaults), then flag overrides.
fn build_config(args: &RunArgs) -> Result<Config, tinyvm_core::VmError> {
    let mut config = args
        .config
        .as_ref()
        .map_or_else(|| Ok(Config::default()), Config::from_file)?;

    if let Some(base) = args.base {
        config.system.load_base = base;
    }
    if let Some(stack) = args.stack {
        config.system.stack_top = stack;
    }
    if let Some(size) = args.memory {
        config.memory.size = size;
    }
    if let Some(max_steps) = args.max_steps {
        config.general.max_steps = max_steps;
    }
    config.general.trace_instructions |= args.trace;

    Ok(config)
}

/// Runs an image to completion; on a fault dumps the machine state and exits with code 1.
fn cmd_run(args: &RunArgs) {
    let config = match build_config(args) {
        Ok(config) => config,
        Err(e) => fatal(&format!("configuration: {e}")),
    };

    let image = match loader::load_binary(&args.image) {
        Ok(image) => image,
        Err(e) => fatal(&format!("{}: {e}", args.image.display())),
    };

    let mut cpu = match loader::setup(&config, &image) {
        Ok(cpu) => cpu,
        Err(e) => fatal(&e.to_string()),
    };

    info!(
        image = %args.image.display(),
        base = format_args!("{:#x}", config.system.load_base),
        stack = format_args!("{:#x}", config.system.stack_top),
        memory = config.memory.size,
        "starting run"
    );

    let mut console = StreamConsole::stdio();
    let result = cpu.run(config.general.max_steps, &mut console);
    let _ = flush_output(&mut std::io::stdout());

    match result {
        Ok(()) => {
            debug!(retired = cpu.stats.instructions_retired, "program exited");
            if args.stats {
                cpu.stats.print();
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            cpu.dump_state();
            if args.stats {
                cpu.stats.print();
            }
            process::exit(1);
        }
    }
}

/// Prints one line per instruction triple: address, raw words, and mnemonic.
fn cmd_disasm(path: &Path, base: Option<u32>) {
    let image = match loader::load_binary(path) {
        Ok(image) => image,
        Err(e) => fatal(&format!("{}: {e}", path.display())),
    };
    let base = base.unwrap_or_else(|| Config::default().system.load_base);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (addr, raw, text) in disasm::disassemble_image(&image, base) {
        if writeln!(
            out,
            "{addr:#010x}:  {:08x} {:08x} {:08x}  {text}",
            raw.opcode, raw.a, raw.b
        )
        .is_err()
        {
            process::exit(1);
        }
    }

    let tail = image.len() % INSTRUCTION_SIZE as usize;
    if tail != 0 {
        eprintln!("[!] {tail} trailing byte(s) do not form a whole instruction");
    }
}

/// Flushes program output, logging a failure; returns whether the flush succeeded.
fn flush_output(out: &mut impl Write) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to flush program output");
            false
        }
    }
}

fn fatal(message: &str) -> ! {
    eprintln!("[!] FATAL: {message}");
    process::exit(1);
}
