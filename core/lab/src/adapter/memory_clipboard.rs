//! テスト用: メモリ上に書き込みを貯めるクリップボード

use std::sync::Mutex;

use common::error::Error;

use crate::ports::outbound::Clipboard;

#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Vec<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// 常に書き込みに失敗する
    pub fn failing() -> Self {
        Self {
            contents: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// これまでに書き込まれた内容（古い順）
    pub fn contents(&self) -> Vec<String> {
        self.contents.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        if self.fail {
            return Err(Error::system("clipboard unavailable"));
        }
        self.contents
            .lock()
            .map_err(|_| Error::system("clipboard lock poisoned"))?
            .push(text.to_string());
        Ok(())
    }
}
