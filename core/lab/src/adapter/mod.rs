//! lab のアダプタ（Outbound ポートの実装と端末描画）

#[cfg(test)]
mod fixed_clock;
#[cfg(test)]
mod memory_clipboard;
#[cfg(test)]
mod memory_log;
mod osc52_clipboard;
mod sigint_checker;
#[cfg(test)]
mod stub_solver;
pub mod terminal_view;

#[cfg(test)]
pub use fixed_clock::FixedClock;
#[cfg(test)]
pub use memory_clipboard::MemoryClipboard;
#[cfg(test)]
pub use memory_log::MemoryLog;
pub use osc52_clipboard::Osc52Clipboard;
pub use sigint_checker::{NoopInterruptChecker, SigintChecker};
#[cfg(test)]
pub use stub_solver::StubSolver;
