use std::path::PathBuf;

use thiserror::Error;

use crate::hart::HartError;

/// 命令执行错误
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("invalid {command} command, usage: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },
    #[error("invalid number: {0}")]
    BadNumber(String),
    #[error("unknown {kind} register: {name}")]
    UnknownRegister { kind: &'static str, name: String },
    #[error("unknown peek/poke resource: {0}")]
    UnknownResource(String),
    #[error("unknown exception kind: {0}")]
    UnknownException(String),
    #[error("no help for: {0}")]
    UnknownTopic(String),
    #[error("cannot resolve address or symbol: {0}")]
    UnresolvedSymbol(String),
    #[error("no current hart")]
    NoCurrentHart,
    #[error("hart {id} out of range, {count} hart(s) attached")]
    HartOutOfRange { id: u64, count: usize },
    #[error("no replay file bound, use replay_file <path>")]
    ReplayNotBound,
    #[error("{0} is not allowed inside a replay")]
    NestedReplay(&'static str),
    #[error("failed to open replay file {}: {source}", path.display())]
    ReplayOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line} is not valid UTF-8")]
    BadEncoding { line: u64 },
    #[error("replay stopped at {}:{line}: {source}", path.display())]
    ReplayStopped {
        path: PathBuf,
        line: u64,
        #[source]
        source: Box<CommandError>,
    },
    #[error(transparent)]
    Hart(#[from] HartError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
