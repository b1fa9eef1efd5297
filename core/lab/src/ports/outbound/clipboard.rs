//! クリップボード書き込みの Outbound ポート（書きっぱなしで読み戻さない）

use common::error::Error;

pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), Error>;
}
