//! セッションの進行役
//!
//! 状態を所有し、イベントを reduce に通して返ってきた Effect を実行する。
//! ソルバー呼び出しはワーカースレッドで行い、結果はチャネル経由で pump が受け取る。
//! 同時に飛んでいる solve は高々 1 件（Loading 中の Submit は reduce が無視する）。

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};

use crate::domain::{
    reduce, AnalysisResult, Effect, Language, ProblemText, SessionEvent, SessionState, SolveError,
};
use crate::ports::outbound::{Clipboard, Solver};

type SolveOutcome = Result<AnalysisResult, SolveError>;

pub struct SessionController {
    state: SessionState,
    solver: Arc<dyn Solver>,
    clipboard: Arc<dyn Clipboard>,
    clock: Arc<dyn Clock>,
    logger: Arc<dyn Log>,
    tx: Sender<SolveOutcome>,
    rx: Receiver<SolveOutcome>,
}

impl SessionController {
    pub fn new(
        language: Language,
        solver: Arc<dyn Solver>,
        clipboard: Arc<dyn Clipboard>,
        clock: Arc<dyn Clock>,
        logger: Arc<dyn Log>,
    ) -> Self {
        let (tx, rx) = channel();
        Self {
            state: SessionState::new(language),
            solver,
            clipboard,
            clock,
            logger,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase").kind("session"));
    }

    /// イベントを1つ適用し、要求された Effect を実行する
    pub fn dispatch(&mut self, event: SessionEvent) {
        let now = self.clock.now_ms();
        let before = self.state.status();
        let state = std::mem::take(&mut self.state);
        let (next, effects) = reduce(state, event, now);
        self.state = next;
        let after = self.state.status();
        if before != after {
            self.log(
                LogRecord::new(LogLevel::Debug, "state changed")
                    .field("from", before.as_str())
                    .field("to", after.as_str()),
            );
        }
        for effect in effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Solve { problem, language } => self.spawn_solve(problem, language),
            Effect::CopyToClipboard(text) => {
                if let Err(e) = self.clipboard.write_text(&text) {
                    self.log(
                        LogRecord::new(LogLevel::Warn, "clipboard write failed")
                            .field("error", e.to_string()),
                    );
                }
            }
        }
    }

    fn spawn_solve(&self, problem: ProblemText, language: Language) {
        let solver = Arc::clone(&self.solver);
        let tx = self.tx.clone();
        self.log(LogRecord::new(LogLevel::Info, "solve requested").field("language", language.tag()));
        std::thread::spawn(move || {
            let outcome = solver.solve(&problem, language);
            // 受信側が先に終わっていれば結果は捨てる
            let _ = tx.send(outcome);
        });
    }

    /// ソルバーの結果を最大 timeout 待つ。届けば適用して true、届かなければ Tick を適用して false。
    pub fn pump(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => {
                let event = match outcome {
                    Ok(result) => SessionEvent::SolveSucceeded(result),
                    Err(e) => SessionEvent::SolveFailed(e),
                };
                self.dispatch(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                self.dispatch(SessionEvent::Tick);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{FixedClock, MemoryClipboard, MemoryLog, StubSolver};
    use crate::domain::{Severity, Status, TechniqueId};

    struct Harness {
        ctl: SessionController,
        solver: Arc<StubSolver>,
        clipboard: Arc<MemoryClipboard>,
        clock: Arc<FixedClock>,
    }

    fn harness(solver: StubSolver) -> Harness {
        let solver = Arc::new(solver);
        let clipboard = Arc::new(MemoryClipboard::new());
        let clock = Arc::new(FixedClock::new(1_000));
        let ctl = SessionController::new(
            Language::En,
            solver.clone(),
            clipboard.clone(),
            clock.clone(),
            Arc::new(MemoryLog::new()),
        );
        Harness {
            ctl,
            solver,
            clipboard,
            clock,
        }
    }

    fn submit(h: &mut Harness, text: &str) {
        h.ctl.dispatch(SessionEvent::InputChanged(text.to_string()));
        h.ctl.dispatch(SessionEvent::Submit { example: None });
    }

    #[test]
    fn test_submit_runs_solver_on_worker_and_pump_applies_result() {
        let mut h = harness(StubSolver::succeeding(TechniqueId::Scamper, &["A", "B"]));
        submit(&mut h, "reduce food waste");
        assert_eq!(h.ctl.state().status(), Status::Loading);
        assert!(h.ctl.pump(Duration::from_secs(5)));
        assert_eq!(h.ctl.state().status(), Status::Ready);
        assert_eq!(h.solver.calls(), vec!["reduce food waste".to_string()]);
        assert_eq!(h.ctl.state().result().unwrap().solutions.len(), 2);
    }

    #[test]
    fn test_pump_without_result_ticks() {
        let mut h = harness(StubSolver::succeeding(TechniqueId::Scamper, &["A"]));
        h.ctl.dispatch(SessionEvent::Submit { example: None });
        assert_eq!(h.ctl.state().notifications.len(), 1);
        h.clock.advance(3_001);
        assert!(!h.ctl.pump(Duration::from_millis(1)));
        assert!(h.ctl.state().notifications.is_empty());
        assert!(h.solver.calls().is_empty());
    }

    #[test]
    fn test_copy_writes_clipboard() {
        let mut h = harness(StubSolver::succeeding(TechniqueId::Triz, &["A", "B"]));
        submit(&mut h, "x");
        h.ctl.pump(Duration::from_secs(5));
        h.ctl.dispatch(SessionEvent::CopyAll);
        assert_eq!(h.clipboard.contents().len(), 1);
        assert!(h.clipboard.contents()[0].starts_with("[A-title]"));
    }

    #[test]
    fn test_clipboard_failure_is_not_fatal() {
        let solver = Arc::new(StubSolver::succeeding(TechniqueId::Triz, &["A"]));
        let clipboard = Arc::new(MemoryClipboard::failing());
        let log = Arc::new(MemoryLog::new());
        let mut ctl = SessionController::new(
            Language::En,
            solver,
            clipboard,
            Arc::new(FixedClock::new(0)),
            log.clone(),
        );
        ctl.dispatch(SessionEvent::InputChanged("x".to_string()));
        ctl.dispatch(SessionEvent::Submit { example: None });
        ctl.pump(Duration::from_secs(5));
        ctl.dispatch(SessionEvent::CopySolution(0));
        assert_eq!(ctl.state().status(), Status::Ready);
        assert_eq!(ctl.state().notifications.active()[0].severity, Severity::Success);
        assert!(log.messages().contains(&"clipboard write failed".to_string()));
    }
}
