//! lab 固有のドメイン型（型と不変条件、純粋な状態遷移）

pub mod category;
pub mod error;
pub mod export;
pub mod i18n;
pub mod language;
pub mod loading;
pub mod notification;
pub mod problem;
pub mod prompt;
pub mod reply;
pub mod session;
pub mod solution;
pub mod technique;

pub use category::CategoryFilter;
pub use error::SolveError;
pub use language::{Direction, Language};
pub use notification::{Notification, Severity};
pub use problem::ProblemText;
pub use session::{reduce, Effect, Phase, ResultView, SessionEvent, SessionState, Status};
pub use solution::{AnalysisResult, Score, Solution};
pub use technique::{Technique, TechniqueId};
