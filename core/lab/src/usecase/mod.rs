//! ユースケース層（ポート越しに外界を使い、ドメインの状態遷移を進める）

pub mod session;
pub mod solver;

pub use session::SessionController;
pub use solver::LlmSolver;
