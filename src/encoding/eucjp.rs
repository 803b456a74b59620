//! EUC-JP 用の順位解決器

use super::{CharOrder, OrderResolver};

/// EUC-JP の順位解決器
///
/// 先頭バイトが 0x8E (半角カナ) または 0xA1〜0xFE なら2バイト文字、
/// 0x8F (補助漢字) なら3バイト文字、それ以外は1バイト。
/// ひらがなは 0xA4 0xA1 (ぁ) 〜 0xA4 0xF3 (ん) で、
/// 順位 = 第2バイト − 0xA1。
#[derive(Debug, Clone, Copy, Default)]
pub struct EucJpOrder;

impl OrderResolver for EucJpOrder {
    fn name(&self) -> &'static str {
        "EUC-JP"
    }

    fn order(&self, buf: &[u8]) -> CharOrder {
        let len = match buf.first().copied() {
            Some(0x8E) | Some(0xA1..=0xFE) => 2,
            Some(0x8F) => 3,
            _ => 1,
        };

        let order = match (buf.first().copied(), buf.get(1).copied()) {
            (Some(0xA4), Some(second @ 0xA1..=0xF3)) => Some(second - 0xA1),
            _ => None,
        };

        CharOrder { len, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_range() {
        let r = EucJpOrder;
        // ぁ (先頭) と ん (末尾)
        assert_eq!(r.order(&[0xA4, 0xA1]), CharOrder { len: 2, order: Some(0) });
        assert_eq!(r.order(&[0xA4, 0xF3]), CharOrder { len: 2, order: Some(82) });
        // か
        assert_eq!(r.order(&[0xA4, 0xAB]).order, Some(10));
    }

    #[test]
    fn test_non_hiragana_double_byte() {
        let r = EucJpOrder;
        // カタカナ行 (0xA5) は2バイトだが順位なし
        assert_eq!(r.order(&[0xA5, 0xA1]), CharOrder { len: 2, order: None });
        // 0xA4 でもひらがな範囲外
        assert_eq!(r.order(&[0xA4, 0xF4]), CharOrder { len: 2, order: None });
        // 半角カナ
        assert_eq!(r.order(&[0x8E, 0xB1]), CharOrder { len: 2, order: None });
    }

    #[test]
    fn test_three_byte_lead() {
        let r = EucJpOrder;
        // 補助漢字は3バイト
        assert_eq!(r.order(&[0x8F, 0xA1, 0xA1]), CharOrder { len: 3, order: None });
        // 後続が揃っていなくても長さは 3
        assert_eq!(r.order(&[0x8F]), CharOrder { len: 3, order: None });
    }

    #[test]
    fn test_single_byte() {
        let r = EucJpOrder;
        assert_eq!(r.order(&[0x41]), CharOrder { len: 1, order: None }); // 'A'
        assert_eq!(r.order(&[0x7F]), CharOrder { len: 1, order: None });
        assert_eq!(r.order(&[0xA0]), CharOrder { len: 1, order: None });
        assert_eq!(r.order(&[0xFF]), CharOrder { len: 1, order: None });
    }

    #[test]
    fn test_truncated_input() {
        let r = EucJpOrder;
        assert_eq!(r.order(&[0xA4]), CharOrder { len: 2, order: None });
        assert_eq!(r.order(&[]), CharOrder { len: 1, order: None });
    }
}
