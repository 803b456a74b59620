//! ひらがな連接による文脈解析モジュール
//!
//! 日本語テキストではひらがなが助詞や活用語尾として短い連続で頻出し、
//! その2文字連接の分布には強い偏りがあります。この性質を利用して、
//! バイト列が候補エンコーディングで符号化されているかの確信度を
//! 推定します。
//!
//! # 構成
//!
//! 1. **頻度カテゴリ表** ([`table`]): ひらがな連接 83×83 の出現頻度
//!    カテゴリ (0〜5) を持つ定数表
//! 2. **文脈解析器** ([`ContextAnalysis`]): チャンク列を逐次受け取り、
//!    隣接ひらがな対のカテゴリをヒストグラムに集計
//!
//! # 使用例
//!
//! ```
//! use kanari::{Confidence, ContextAnalysis, ShiftJisOrder};
//!
//! let mut analysis = ContextAnalysis::new(ShiftJisOrder);
//! // 「こんにちはこんにちは」の Shift-JIS バイト列
//! analysis.handle_data(&[
//!     0x82, 0xB1, 0x82, 0xF1, 0x82, 0xC9, 0x82, 0xBF, 0x82, 0xCD,
//!     0x82, 0xB1, 0x82, 0xF1, 0x82, 0xC9, 0x82, 0xBF, 0x82, 0xCD,
//! ]);
//! match analysis.confidence() {
//!     Confidence::Score(score) => assert!(score > 0.9),
//!     Confidence::InsufficientData => unreachable!(),
//! }
//! ```

mod analyzer;
pub mod table;

// 公開インターフェース
pub use analyzer::{Confidence, ContextAnalysis};
