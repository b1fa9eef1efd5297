//! OSC 52 エスケープによるクリップボード書き込み
//!
//! 端末（ssh 越しや tmux の中でも）にクリップボードへの書き込みを依頼する。
//! 端末が対応していなければ何も起きないが、書き込み側からは判別できない。

use std::io::Write;
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::error::Error;

use crate::ports::outbound::Clipboard;

/// OSC 52 シーケンスを組み立てる（c = クリップボード選択、BEL 終端）
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

pub struct Osc52Clipboard {
    out: Mutex<Box<dyn Write + Send>>,
}

impl Osc52Clipboard {
    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// 標準出力へ書き出す
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }
}

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| Error::system("clipboard lock poisoned"))?;
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
