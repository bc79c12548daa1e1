//! allude_console 命令行入口
//!
//! - `decode`: 解码指令字
//! - `catalog`: 列出指令表，`--check` 检查表项优先级
//! - `interact`: 在标准输入上运行交互会话

use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use allude_console::hart::NoHart;
use allude_console::interact::{Session, parse_number};
use allude_console::isa::{Catalog, Decoder, inst_size};
use allude_console::SessionConfig;

#[derive(Parser, Debug)]
#[command(
    name = "allude_console_cli",
    about = "RISC-V instruction decoder and interactive simulator console"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode instruction words given in hex
    Decode {
        /// Address of the first word
        #[arg(long, value_name = "ADDR", default_value = "0", value_parser = parse_address)]
        address: u64,

        /// Instruction words, hex with or without 0x
        #[arg(required = true, value_parser = parse_word)]
        words: Vec<u32>,
    },

    /// List the instruction catalog
    Catalog {
        /// Report entries shadowed by an earlier entry and exit non-zero if any
        #[arg(long, action = clap::ArgAction::SetTrue)]
        check: bool,
    },

    /// Run an interactive session on stdin
    Interact {
        /// Session config (TOML)
        #[arg(long, value_name = "PATH")]
        config: Option<PathBuf>,

        /// Write one line per retired instruction to this file
        #[arg(long, value_name = "PATH")]
        trace: Option<PathBuf>,

        /// Echo successful commands to this file
        #[arg(long, value_name = "PATH")]
        command_log: Option<PathBuf>,

        /// Replay this command file instead of reading stdin
        #[arg(long, value_name = "PATH")]
        replay: Option<PathBuf>,
    },
}

fn parse_address(s: &str) -> Result<u64, String> {
    parse_number(s).map_err(|e| e.to_string())
}

fn parse_word(s: &str) -> Result<u32, String> {
    let hex = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
    u32::from_str_radix(hex, 16).map_err(|e| format!("invalid instruction word {s}: {e}"))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Decode { address, words } => decode(address, &words),
        Command::Catalog { check } => catalog(check),
        Command::Interact {
            config,
            trace,
            command_log,
            replay,
        } => interact(config, trace, command_log, replay),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("allude_console_cli: {err}");
            ExitCode::from(2)
        }
    }
}

fn decode(address: u64, words: &[u32]) -> Result<bool, Box<dyn std::error::Error>> {
    let decoder = Decoder::new(Arc::new(Catalog::new()));
    let mut out = io::stdout().lock();
    let mut addr = address;
    let mut all_legal = true;

    for &word in words {
        let size = inst_size(word);
        let di = decoder.decode(addr, word, size);
        all_legal &= !di.is_illegal();
        writeln!(out, "{:08x} {:08x} {}", addr, word, di)?;
        addr = addr.wrapping_add(u64::from(size));
    }
    Ok(all_legal)
}

fn catalog(check: bool) -> Result<bool, Box<dyn std::error::Error>> {
    let catalog = Catalog::new();
    let mut out = io::stdout().lock();

    if !check {
        for (index, entry) in catalog.entries().iter().enumerate() {
            writeln!(
                out,
                "{:3} {:<14} code=0x{:08x} mask=0x{:08x} {:?}",
                index, entry.name, entry.code, entry.mask, entry.inst_type
            )?;
        }
        return Ok(true);
    }

    let violations = catalog.priority_violations();
    for v in &violations {
        writeln!(out, "{v}")?;
    }
    writeln!(
        out,
        "{} entries, {} priority violation(s)",
        catalog.len(),
        violations.len()
    )?;
    Ok(violations.is_empty())
}

fn interact(
    config: Option<PathBuf>,
    trace: Option<PathBuf>,
    command_log: Option<PathBuf>,
    replay: Option<PathBuf>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match config {
        Some(path) => SessionConfig::from_file(path)?,
        None => SessionConfig::default(),
    };

    let mut trace_file = trace.map(File::create).transpose()?.map(BufWriter::new);
    let mut log_file = command_log.map(File::create).transpose()?.map(BufWriter::new);

    warn!("no execution engine attached, hart commands will report no current hart");
    let mut session: Session<NoHart> = Session::new(Vec::new(), Arc::new(Catalog::new()), config);

    // 回放读到文件末尾即结束会话
    let input: Box<dyn BufRead> = match replay {
        Some(path) => {
            session.bind_replay_file(path)?;
            Box::new(io::Cursor::new("replay\n"))
        }
        None => Box::new(io::stdin().lock()),
    };

    let ok = session.interact(
        input,
        trace_file.as_mut().map(|f| f as &mut dyn Write),
        log_file.as_mut().map(|f| f as &mut dyn Write),
    );

    if let Some(f) = trace_file.as_mut() {
        f.flush()?;
    }
    if let Some(f) = log_file.as_mut() {
        f.flush()?;
    }
    Ok(ok)
}
