//! 一時通知（トースト）
//!
//! 各通知は自分の作成時刻だけで寿命が決まり、他の通知の期限には影響されない。

/// 通知の表示時間（ミリ秒）
pub const NOTIFICATION_TTL_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
    pub created_at_ms: u64,
}

impl Notification {
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.created_at_ms) >= NOTIFICATION_TTL_MS
    }
}

/// 表示中の通知の集合。id は単調増加で再利用しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 通知を追加して id を返す
    pub fn push(&mut self, message: impl Into<String>, severity: Severity, now_ms: u64) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            message: message.into(),
            severity,
            created_at_ms: now_ms,
        });
        id
    }

    /// 期限切れを取り除き、取り除いた件数を返す
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now_ms));
        before - self.items.len()
    }

    pub fn active(&self) -> &[Notification] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
