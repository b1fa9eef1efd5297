//! CLI 層（引数解析・対話コマンド・対話ループ）

pub mod args;
pub mod command;
pub mod repl;

pub use args::{parse_args, print_completion, Config, ParseOutcome};
pub use repl::{run_repl, spawn_stdin_reader};
