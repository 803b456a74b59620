//! エンコーディング別の文字順位解決モジュール
//!
//! バイト列の先頭文字について、対象エンコーディングでの文字長と、
//! その文字がひらがなであれば正準順位 (0〜82) を求めます。
//! 順位空間はエンコーディングに依存しない共通語彙で、
//! 文脈解析器 ([`crate::context::ContextAnalysis`]) との唯一の接点です。

mod eucjp;
mod sjis;

// 公開インターフェース
pub use eucjp::EucJpOrder;
pub use sjis::ShiftJisOrder;

/// 先頭文字の解決結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharOrder {
    /// 先頭文字が占めるバイト長 (1〜3)
    pub len: usize,
    /// ひらがなであれば正準順位 (0〜82)、それ以外は `None`
    pub order: Option<u8>,
}

/// エンコーディング別の順位解決器
///
/// 実装は先頭 1〜3 バイトのみを検査し、スライス範囲外は読みません。
/// どんなバイト列に対しても失敗せず、認識できない並びは
/// 「1バイト・ひらがなでない」として扱います。
pub trait OrderResolver {
    /// エンコーディング名 (表示・ログ用)
    fn name(&self) -> &'static str;

    /// `buf` の先頭文字の長さとひらがな順位を求める
    ///
    /// 宣言した文字長ぶんのバイトが `buf` に揃っていない場合でも
    /// 長さは正しく返します。このとき順位は `None` になりますが、
    /// 途切れた文字は解析器側で破棄されるため結果には影響しません。
    fn order(&self, buf: &[u8]) -> CharOrder;
}
