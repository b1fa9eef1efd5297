//! Outbound ポート: アプリが外界（ソルバー・クリップボード・割り込み）を使うための trait

pub mod clipboard;
pub mod interrupt_checker;
pub mod solver;

pub use clipboard::Clipboard;
pub use interrupt_checker::InterruptChecker;
pub use solver::Solver;
