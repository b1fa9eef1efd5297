//! Innovation Lab 共通ライブラリ
//!
//! `lab` コマンドが使う LLM プロバイダ・設定解決・ポートとアダプターを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// LLMドライバーとプロバイダ
pub mod llm;

/// Ports & Adapters のポート定義
pub mod ports;

/// ポートの標準実装
pub mod adapter;
