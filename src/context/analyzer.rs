//! ひらがな連接の文脈解析器
//!
//! バイトチャンク列を逐次受け取り、隣接するひらがな対の頻度カテゴリを
//! ヒストグラムに集計して、対象エンコーディングである確信度を算出します。

use log::debug;

use super::table::{JP2_CHAR_CONTEXT, NUM_CATEGORY};
use crate::config::AnalyzerConfig;
use crate::encoding::OrderResolver;

/// 確信度の算出結果
///
/// 観測数が閾値に満たない間は [`Confidence::InsufficientData`] を返します。
/// 「データ不足」を負値の番兵で表すと低スコアと取り違えやすいため、
/// 数値と混同できない列挙型で表現します。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Confidence {
    /// 確信度スコア (0.0〜1.0)
    Score(f32),
    /// 観測数不足。数値スコアと比較してはならない
    InsufficientData,
}

impl Confidence {
    /// スコアがあれば返す
    pub fn score(self) -> Option<f32> {
        match self {
            Confidence::Score(s) => Some(s),
            Confidence::InsufficientData => None,
        }
    }

    /// 観測数不足かどうか
    pub fn is_insufficient(self) -> bool {
        matches!(self, Confidence::InsufficientData)
    }
}

/// ひらがな連接の文脈解析器
///
/// 1つの入力ストリーム × 1つの候補エンコーディングにつき1インスタンス。
/// チャンクの分割位置に制約はなく、文字の途中で切れていても構いません。
/// 境界で途切れた文字は再構成せず破棄します (1文字の寄与は小さく、
/// 破棄する方が状態管理が単純になる)。
///
/// 同期機構は持たないため、1インスタンスへの呼び出しは単一スレッドから
/// 順序どおりに行ってください。頻度表は定数なので、エンコーディング別の
/// 複数インスタンスを並行に動かすのは問題ありません。
#[derive(Debug, Clone)]
pub struct ContextAnalysis<R> {
    /// エンコーディング別の順位解決器
    resolver: R,
    /// 閾値設定
    config: AnalyzerConfig,
    /// ひらがな→ひらがな連接の観測総数
    total_rel: u32,
    /// 頻度カテゴリ別の観測数
    rel_sample: [u32; NUM_CATEGORY],
    /// 次チャンク先頭で読み飛ばすバイト数
    /// (前チャンク末尾で途切れた文字の残り)
    need_skip: usize,
    /// 直前に完全復号した文字のひらがな順位
    last_order: Option<u8>,
    /// 観測数上限に達して解析を打ち切ったか
    done: bool,
}

impl<R: OrderResolver> ContextAnalysis<R> {
    /// 既定の設定で解析器を生成
    pub fn new(resolver: R) -> Self {
        Self::with_config(resolver, AnalyzerConfig::default())
    }

    /// 設定を指定して解析器を生成
    pub fn with_config(resolver: R, config: AnalyzerConfig) -> Self {
        Self {
            resolver,
            config,
            total_rel: 0,
            rel_sample: [0; NUM_CATEGORY],
            need_skip: 0,
            last_order: None,
            done: false,
        }
    }

    /// ストリームの次のチャンクを解析する
    ///
    /// チャンクは元のバイト列を分割も重複もなく順番どおりに渡すこと。
    /// 打ち切り済み (`is_done`) の場合は何もしません。
    pub fn handle_data(&mut self, chunk: &[u8]) {
        if self.done {
            return;
        }

        // 前チャンク末尾で途切れた文字の残りを読み飛ばす。
        // チャンクが残り分より短ければ読み飛ばしを次へ持ち越す。
        if self.need_skip >= chunk.len() {
            self.need_skip -= chunk.len();
            return;
        }
        let mut i = self.need_skip;
        self.need_skip = 0;

        while i < chunk.len() {
            let ch = self.resolver.order(&chunk[i..]);
            let next = i + ch.len;

            if next > chunk.len() {
                // 文字がチャンク末尾で途切れている。再構成はせず、
                // 次チャンク先頭の残りバイトを読み飛ばす。
                self.need_skip = next - chunk.len();
                self.last_order = None;
                break;
            }

            if let (Some(prev), Some(cur)) = (self.last_order, ch.order) {
                self.total_rel += 1;
                if self.total_rel > self.config.max_relations {
                    debug!(
                        "{}: 観測数が上限 {} を超過、解析を打ち切り",
                        self.resolver.name(),
                        self.config.max_relations
                    );
                    self.done = true;
                    break;
                }
                let category = JP2_CHAR_CONTEXT[prev as usize][cur as usize];
                self.rel_sample[category as usize] += 1;
            }

            // ひらがな以外の文字は None を伝播させ、連接を断ち切る
            self.last_order = ch.order;
            i = next;
        }
    }

    /// 状態を生成直後の値に戻す
    ///
    /// 同じインスタンスを別ストリームに使い回すときに呼びます。
    /// 閾値設定は保持されます。
    pub fn reset(&mut self) {
        self.total_rel = 0;
        self.rel_sample = [0; NUM_CATEGORY];
        self.need_skip = 0;
        self.last_order = None;
        self.done = false;
    }

    /// 現在までの観測から確信度を算出
    ///
    /// カテゴリ0 (統計的にほぼ出現しない連接) 以外が占める割合を返します:
    /// `(total_rel − rel_sample[0]) / total_rel`。
    /// 較正された尤度ではなく、経験的にうまく働く密度スコアです。
    /// 誤ったエンコーディングで復号するとひらがな対がほぼ出現しないか、
    /// 出現してもカテゴリ0に集中するため、スコアは低くなります。
    pub fn confidence(&self) -> Confidence {
        if self.total_rel > self.config.min_relations {
            let score = (self.total_rel - self.rel_sample[0]) as f32 / self.total_rel as f32;
            Confidence::Score(score)
        } else {
            Confidence::InsufficientData
        }
    }

    /// これまでに観測した連接数
    pub fn total_relations(&self) -> u32 {
        self.total_rel
    }

    /// 観測数上限に達して打ち切ったか
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// 対象エンコーディング名
    pub fn encoding_name(&self) -> &'static str {
        self.resolver.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::{EucJpOrder, ShiftJisOrder};

    /// Shift-JIS で順位 `order` のひらがなを `n` 回並べたバイト列
    fn sjis_run(order: u8, n: usize) -> Vec<u8> {
        let mut buf = Vec::with_capacity(n * 2);
        for _ in 0..n {
            buf.push(0x82);
            buf.push(0x9F + order);
        }
        buf
    }

    #[test]
    fn test_empty_input() {
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(&[]);
        assert_eq!(a.total_relations(), 0);
        assert!(a.confidence().is_insufficient());
    }

    #[test]
    fn test_no_hiragana_input() {
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(b"hello, world! 12345");
        assert_eq!(a.total_relations(), 0);
        assert!(a.confidence().is_insufficient());
    }

    #[test]
    fn test_all_zero_category_confidence() {
        // 順位4の連続: (4,4) はカテゴリ0 → スコアは 0.0 ちょうど
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(&sjis_run(4, 10)); // 連接9回 > 既定閾値4
        assert_eq!(a.total_relations(), 9);
        assert_eq!(a.confidence(), Confidence::Score(0.0));
    }

    #[test]
    fn test_all_nonzero_category_confidence() {
        // 順位1の連続: (1,1) はカテゴリ4 → スコアは 1.0 ちょうど
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(&sjis_run(1, 10));
        assert_eq!(a.total_relations(), 9);
        assert_eq!(a.confidence(), Confidence::Score(1.0));
    }

    #[test]
    fn test_insufficient_below_threshold() {
        // 連接数が min_relations 以下の間は InsufficientData
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(&sjis_run(1, 5)); // 連接4回 = 既定閾値
        assert_eq!(a.total_relations(), 4);
        assert!(a.confidence().is_insufficient());

        a.handle_data(&sjis_run(1, 1)); // 5回目で閾値超過
        assert_eq!(a.total_relations(), 5);
        assert!(a.confidence().score().is_some());
    }

    #[test]
    fn test_non_hiragana_breaks_relation() {
        // ひらがなの間に ASCII が挟まると連接は数えない
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        let mut buf = Vec::new();
        for _ in 0..10 {
            buf.extend_from_slice(&[0x82, 0xA0]); // ひらがな
            buf.push(b'x');
        }
        a.handle_data(&buf);
        assert_eq!(a.total_relations(), 0);
        assert!(a.confidence().is_insufficient());
    }

    #[test]
    fn test_truncated_char_dropped() {
        // チャンク末尾で途切れた2バイト文字は破棄され、
        // 次チャンク先頭の残りバイトは読み飛ばされる
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        let buf = sjis_run(1, 4); // 8バイト
        a.handle_data(&buf[..3]); // 2文字目が途切れる
        a.handle_data(&buf[3..]);
        // 1文字目→(破棄)→3文字目 は連接にならず、3→4 の1回のみ
        assert_eq!(a.total_relations(), 1);
    }

    #[test]
    fn test_skip_longer_than_chunk() {
        // 読み飛ばしが次チャンク全体より長い場合は持ち越される
        let mut a = ContextAnalysis::new(EucJpOrder);
        // 3バイト文字 (補助漢字) の先頭1バイトだけ渡す
        a.handle_data(&[0x8F]);
        // 残り2バイトを1バイトずつ: どちらも読み飛ばし対象
        a.handle_data(&[0xA1]);
        a.handle_data(&[0xA1]);
        // 読み飛ばし完了後は通常どおり解析が再開する
        let mut buf = Vec::new();
        for _ in 0..6 {
            buf.extend_from_slice(&[0xA4, 0xA2]); // ひらがな順位1
        }
        a.handle_data(&buf);
        assert_eq!(a.total_relations(), 5);
        assert_eq!(a.confidence(), Confidence::Score(1.0));
    }

    #[test]
    fn test_max_relations_cutoff() {
        let config = AnalyzerConfig::default().with_max_relations(100);
        let mut a = ContextAnalysis::with_config(ShiftJisOrder, config);
        a.handle_data(&sjis_run(1, 200)); // 連接199回 > 上限100
        assert!(a.is_done());
        assert_eq!(a.total_relations(), 101); // 上限超過の1回で停止

        // 打ち切り後の入力は無視され、確信度は変わらない
        let before = a.confidence();
        a.handle_data(&sjis_run(4, 50)); // カテゴリ0の連接
        assert_eq!(a.confidence(), before);
        assert_eq!(a.total_relations(), 101);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(&sjis_run(1, 10));
        assert!(a.confidence().score().is_some());

        a.reset();
        assert_eq!(a.total_relations(), 0);
        assert!(a.confidence().is_insufficient());
        assert!(!a.is_done());

        // リセット後に同じ入力を与えると同じ結果になる
        a.handle_data(&sjis_run(1, 10));
        assert_eq!(a.confidence(), Confidence::Score(1.0));
    }

    #[test]
    fn test_eucjp_hiragana_pairs() {
        // 「かなかな…」の EUC-JP バイト列: (か,な) も (な,か) も高頻度
        let mut a = ContextAnalysis::new(EucJpOrder);
        let mut buf = Vec::new();
        for _ in 0..5 {
            buf.extend_from_slice(&[0xA4, 0xAB, 0xA4, 0xCA]); // かな
        }
        a.handle_data(&buf);
        assert_eq!(a.total_relations(), 9);
        assert_eq!(a.confidence(), Confidence::Score(1.0));
    }

    #[test]
    fn test_confidence_mixed_categories() {
        // カテゴリ0 と非0 が混ざったときの割合計算
        let mut a = ContextAnalysis::new(ShiftJisOrder);
        a.handle_data(&sjis_run(1, 6)); // 連接5回、全て非0
        a.handle_data(&sjis_run(4, 6)); // (1,4) と (4,4)×5 は全てカテゴリ0
        assert_eq!(a.total_relations(), 11);
        let score = a.confidence().score().unwrap();
        assert!((score - 5.0 / 11.0).abs() < 1e-6);
    }
}
