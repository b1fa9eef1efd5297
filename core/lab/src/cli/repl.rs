//! 対話ループ
//!
//! 入力はチャネル経由で受け取り、Loading 中はソルバー結果を短い間隔で待ちながら
//! ローディング表示を更新する。どちらの待ちでも毎周 Ctrl+C を確認する。
//! Loading 中の入力はその場で読み、課題の再送信は断る（:quit と :lang だけ受け付ける）。

use std::io::{BufRead, Write};
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::Duration;

use common::error::Error;

use crate::adapter::terminal_view::{help_text, render, render_busy, render_loading};
use crate::cli::command::{parse_line, ReplCommand};
use crate::domain::{SessionEvent, Status};
use crate::ports::outbound::InterruptChecker;
use crate::usecase::SessionController;

const LOADING_POLL: Duration = Duration::from_millis(200);
const INPUT_POLL: Duration = Duration::from_millis(250);
const PROMPT: &str = "> ";

/// ループを抜けた理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    Quit,
    EndOfInput,
    Interrupted,
}

impl ReplExit {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Quit | Self::EndOfInput => 0,
            Self::Interrupted => 130,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quit => "quit",
            Self::EndOfInput => "eof",
            Self::Interrupted => "interrupted",
        }
    }
}

/// 標準入力を1行ずつ読むスレッドを起動する（EOF で送信側が閉じる）
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if tx.send(l).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });
    rx
}

fn show(ctl: &SessionController, out: &mut dyn Write) -> Result<(), Error> {
    write!(out, "{}\n{}", render(ctl.state()), PROMPT)?;
    out.flush()?;
    Ok(())
}

/// Loading 中に届いた1行を処理する。再送信は受け付けず、:quit はすぐに抜ける。
fn handle_while_loading(
    ctl: &mut SessionController,
    line: &str,
    out: &mut dyn Write,
) -> Result<Option<ReplExit>, Error> {
    match parse_line(line) {
        Ok(ReplCommand::Quit) => return Ok(Some(ReplExit::Quit)),
        Ok(ReplCommand::Empty) => {}
        Ok(ReplCommand::Help) => write!(out, "{}", help_text())?,
        Ok(ReplCommand::Lang) => ctl.dispatch(SessionEvent::ToggleLanguage),
        Ok(_) => write!(out, "{}", render_busy(ctl.state().language))?,
        Err(e) => writeln!(out, "lab: {}", e)?,
    }
    out.flush()?;
    Ok(None)
}

/// Loading を抜けるまで待つ。表示は内容が変わったときだけ書き直す。
fn wait_loading(
    ctl: &mut SessionController,
    input: &Receiver<String>,
    interrupt: &dyn InterruptChecker,
    out: &mut dyn Write,
) -> Result<Option<ReplExit>, Error> {
    let mut last_frame = String::new();
    while ctl.state().status() == Status::Loading {
        if interrupt.is_interrupted() {
            return Ok(Some(ReplExit::Interrupted));
        }
        // 溜まった入力はここで消費し、Loading が終わった後に再生しない
        while let Ok(line) = input.try_recv() {
            if let Some(exit) = handle_while_loading(ctl, &line, out)? {
                return Ok(Some(exit));
            }
            last_frame.clear();
        }
        let frame = render_loading(ctl.state(), ctl.now_ms());
        if frame != last_frame {
            write!(out, "{}", frame)?;
            out.flush()?;
            last_frame = frame;
        }
        ctl.pump(LOADING_POLL);
    }
    writeln!(out)?;
    show(ctl, out)?;
    Ok(None)
}

pub fn run_repl(
    ctl: &mut SessionController,
    input: Receiver<String>,
    interrupt: &dyn InterruptChecker,
    out: &mut dyn Write,
) -> Result<ReplExit, Error> {
    if ctl.state().status() == Status::Loading {
        if let Some(exit) = wait_loading(ctl, &input, interrupt, out)? {
            return Ok(exit);
        }
    } else {
        show(ctl, out)?;
    }

    loop {
        if interrupt.is_interrupted() {
            return Ok(ReplExit::Interrupted);
        }
        let line = match input.recv_timeout(INPUT_POLL) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => {
                let shown = ctl.state().notifications.len();
                ctl.pump(Duration::ZERO);
                // 期限切れで通知が消えたら描き直す
                if ctl.state().notifications.len() != shown {
                    show(ctl, out)?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => return Ok(ReplExit::EndOfInput),
        };
        let cmd = match parse_line(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                write!(out, "lab: {}\n{}", e, PROMPT)?;
                out.flush()?;
                continue;
            }
        };
        match cmd {
            ReplCommand::Quit => return Ok(ReplExit::Quit),
            ReplCommand::Help => {
                write!(out, "{}{}", help_text(), PROMPT)?;
                out.flush()?;
            }
            cmd => {
                for event in cmd.events(ctl.state()) {
                    ctl.dispatch(event);
                }
                if ctl.state().status() == Status::Loading {
                    if let Some(exit) = wait_loading(ctl, &input, interrupt, out)? {
                        return Ok(exit);
                    }
                } else {
                    show(ctl, out)?;
                }
            }
        }
    }
}
