pub const TYPING_DELAY_MAX_MS: u64 = 16;      // Upper bound (exclusive) for the per-character pause (ms)
pub const FALLBACK_WIDTH: u16 = 80;           // Terminal width used when the real size cannot be probed

pub const PROMPT: &str = "> ";                // Prefix typed before a live command invocation
pub const COMMAND_CLOSE: &str = ">";          // Printed once a command has exited
pub const EXECUTION_SKIPPED: &str = "[EXECUTION SKIPPED]";
pub const INSPECT_SKIPPED: &str = "[INSPECT SKIPPED]";

pub const PROJECT_MARKER: &str = "Cargo.toml"; // File that marks the project root for command working dirs
