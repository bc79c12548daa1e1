//! 命令帮助

/// 一条命令的用法说明
#[derive(Debug, Clone, Copy)]
pub struct CommandHelp {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub const COMMANDS: &[CommandHelp] = &[
    CommandHelp {
        name: "step",
        usage: "step [n]",
        summary: "Execute n instructions (default 1) on the current hart.",
    },
    CommandHelp {
        name: "until",
        usage: "until <address|symbol>",
        summary: "Run the current hart until pc reaches the target or the hart halts.",
    },
    CommandHelp {
        name: "peek",
        usage: "peek r <reg> | peek f <reg> | peek c <csr> | peek m <addr> | peek pc",
        summary: "Print an integer/fp register, a CSR, a memory word, or the pc.",
    },
    CommandHelp {
        name: "poke",
        usage: "poke r <reg> <value> | poke f <reg> <value> | poke c <csr> <value> | poke m <addr> <value> | poke pc <value>",
        summary: "Write a register, CSR, memory word, or the pc. Nothing is written if any argument is invalid.",
    },
    CommandHelp {
        name: "disas",
        usage: "disas <address|symbol> [count]",
        summary: "Disassemble count instructions (default 1) starting at the address.",
    },
    CommandHelp {
        name: "elf",
        usage: "elf <path>",
        summary: "Load an ELF program into the current hart and read its symbols.",
    },
    CommandHelp {
        name: "hex",
        usage: "hex <path>",
        summary: "Load a hex image into the current hart.",
    },
    CommandHelp {
        name: "reset",
        usage: "reset [pc]",
        summary: "Reset the current hart, then optionally set the pc.",
    },
    CommandHelp {
        name: "exception",
        usage: "exception inst <addr> | exception data <addr> | exception store <addr> | exception load <addr> <tag> | exception nmi <cause>",
        summary: "Queue an exception to be taken at the next retired instruction.",
    },
    CommandHelp {
        name: "load_finished",
        usage: "load_finished <tag>",
        summary: "Complete the pending non-blocking load with the given tag.",
    },
    CommandHelp {
        name: "hart",
        usage: "hart [id]",
        summary: "Print the current hart, or select hart id.",
    },
    CommandHelp {
        name: "replay_file",
        usage: "replay_file <path>",
        summary: "Open a command file for replay, replacing any previous one.",
    },
    CommandHelp {
        name: "replay",
        usage: "replay [n] | replay step <n>",
        summary: "Replay n lines (default all) from the replay file, or replay until n step commands ran.",
    },
    CommandHelp {
        name: "help",
        usage: "help [command]",
        summary: "List commands, or describe one command.",
    },
    CommandHelp {
        name: "quit",
        usage: "quit",
        summary: "End the session.",
    },
];

pub fn find(name: &str) -> Option<&'static CommandHelp> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// 用法字符串，命令名不在表中时返回命令名本身
pub fn usage(name: &'static str) -> &'static str {
    find(name).map_or(name, |c| c.usage)
}
