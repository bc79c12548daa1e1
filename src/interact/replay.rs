//! 命令回放
//!
//! `replay_file` 绑定一个命令文件，`replay` 从上次停下的位置继续读。
//! 读到文件末尾时会话结束。回放过程中不允许再次 `replay` 或
//! `replay_file`。

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::mem;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::FailurePolicy;
use crate::hart::Hart;

use super::commands::usage_error;
use super::error::CommandError;
use super::parse::parse_number;
use super::{Session, Sinks};

/// 回放文件绑定状态
#[derive(Debug, Default)]
pub(crate) enum ReplayBinding {
    #[default]
    Idle,
    Bound {
        path: PathBuf,
        reader: BufReader<File>,
        /// 已读取的行数
        line: u64,
    },
}

/// 一次 `replay` 的停止条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReplayLimit {
    /// 执行 n 条命令（空行和注释不计）
    Lines(u64),
    /// 执行到第 n 条 `step` 命令
    Steps(u64),
}

impl<H: Hart> Session<H> {
    pub(super) fn cmd_replay_file(&mut self, args: &[&str]) -> Result<(), CommandError> {
        if self.replaying {
            return Err(CommandError::NestedReplay("replay_file"));
        }
        let [path] = args else {
            return Err(usage_error("replay_file"));
        };
        self.bind_replay_file(*path)
    }

    /// 绑定回放文件，替换之前的绑定；打开失败时保留原绑定
    ///
    /// 与 `replay_file` 命令相同，但路径不经过命令分词，可以包含空白。
    pub fn bind_replay_file<P: Into<PathBuf>>(&mut self, path: P) -> Result<(), CommandError> {
        let path = path.into();
        let file = File::open(&path).map_err(|source| CommandError::ReplayOpen {
            path: path.clone(),
            source,
        })?;

        info!(path = %path.display(), "bound replay file");
        self.replay = ReplayBinding::Bound {
            path,
            reader: BufReader::new(file),
            line: 0,
        };
        Ok(())
    }

    pub(super) fn cmd_replay(
        &mut self,
        args: &[&str],
        sinks: &mut Sinks<'_, '_>,
    ) -> Result<(), CommandError> {
        if self.replaying {
            return Err(CommandError::NestedReplay("replay"));
        }
        let limit = match args {
            [] => ReplayLimit::Lines(u64::MAX),
            ["step", n] => ReplayLimit::Steps(parse_number(n)?),
            ["step"] => return Err(usage_error("replay")),
            [n] => ReplayLimit::Lines(parse_number(n)?),
            _ => return Err(usage_error("replay")),
        };

        let ReplayBinding::Bound {
            path,
            mut reader,
            mut line,
        } = mem::take(&mut self.replay)
        else {
            return Err(CommandError::ReplayNotBound);
        };

        self.replaying = true;
        let result = self.replay_lines(&path, &mut reader, &mut line, limit, sinks);
        self.replaying = false;

        self.replay = ReplayBinding::Bound { path, reader, line };
        result
    }

    fn replay_lines(
        &mut self,
        path: &Path,
        reader: &mut BufReader<File>,
        line: &mut u64,
        limit: ReplayLimit,
        sinks: &mut Sinks<'_, '_>,
    ) -> Result<(), CommandError> {
        let mut commands = 0u64;
        let mut steps = 0u64;
        let mut raw = Vec::new();

        loop {
            let finished = match limit {
                ReplayLimit::Lines(n) => commands >= n,
                ReplayLimit::Steps(n) => steps >= n,
            };
            if finished {
                break;
            }

            raw.clear();
            if reader.read_until(b'\n', &mut raw)? == 0 {
                debug!(path = %path.display(), line = *line, "replay reached end of file");
                self.done = true;
                break;
            }
            *line += 1;

            let mut is_step = false;
            let result = match std::str::from_utf8(&raw) {
                Ok(text) => {
                    let text = text.trim();
                    if text.is_empty() || text.starts_with('#') {
                        continue;
                    }
                    is_step = text.split_whitespace().next() == Some("step");
                    self.execute_line(text, sinks)
                }
                Err(_) => Err(CommandError::BadEncoding { line: *line }),
            };
            commands += 1;

            if let Err(e) = result {
                // 停止时由外层报告一次，原因附在 ReplayStopped 中
                if self.config.on_replay_error == FailurePolicy::Stop {
                    return Err(CommandError::ReplayStopped {
                        path: path.to_path_buf(),
                        line: *line,
                        source: Box::new(e),
                    });
                }
                self.report(&e);
            }
            if is_step {
                steps += 1;
            }
            if self.done {
                break;
            }
        }
        Ok(())
    }
}
