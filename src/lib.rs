//! kanari - ひらがな連接による日本語エンコーディング推定
//!
//! バイトストリームが Shift-JIS / EUC-JP で符号化されている確信度を、
//! 隣接ひらがな対の出現頻度から逐次的に推定するライブラリです。
//! 候補エンコーディングごとに解析器を1つ用意し、同じバイト列を
//! 任意のチャンク分割で与えると、いつでも確信度を取り出せます。
//!
//! ```
//! use kanari::{ContextAnalysis, EucJpOrder, ShiftJisOrder};
//!
//! let mut sjis = ContextAnalysis::new(ShiftJisOrder);
//! let mut eucjp = ContextAnalysis::new(EucJpOrder);
//!
//! // 「ことばことばことば」の EUC-JP バイト列を分割して入力
//! let bytes = [
//!     0xA4, 0xB3, 0xA4, 0xC8, 0xA4, 0xD0, 0xA4, 0xB3, 0xA4, 0xC8,
//!     0xA4, 0xD0, 0xA4, 0xB3, 0xA4, 0xC8, 0xA4, 0xD0,
//! ];
//! for chunk in bytes.chunks(7) {
//!     sjis.handle_data(chunk);
//!     eucjp.handle_data(chunk);
//! }
//!
//! let eucjp_score = eucjp.confidence().score().unwrap();
//! assert!(eucjp_score > 0.9);
//! // Shift-JIS としてはひらがな対が観測されない
//! assert!(sjis.confidence().score().unwrap_or(0.0) < eucjp_score);
//! ```
//!
//! どのエンコーディングを採用するかの選択は呼び出し側の責務です。
//! 確信度が [`Confidence::InsufficientData`] のものは数値比較の対象に
//! 含めないでください。

pub mod config;
pub mod context;
pub mod encoding;

pub use config::AnalyzerConfig;
pub use context::{Confidence, ContextAnalysis};
pub use encoding::{CharOrder, EucJpOrder, OrderResolver, ShiftJisOrder};
