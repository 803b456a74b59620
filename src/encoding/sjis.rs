//! Shift-JIS 用の順位解決器

use super::{CharOrder, OrderResolver};

/// Shift-JIS の順位解決器
///
/// 先頭バイトが 0x81〜0x9F または 0xE0〜0xFC なら2バイト文字、
/// それ以外は1バイト。ひらがなは 0x82 0x9F (ぁ) 〜 0x82 0xF1 (ん) で、
/// 順位 = 第2バイト − 0x9F。
#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftJisOrder;

impl OrderResolver for ShiftJisOrder {
    fn name(&self) -> &'static str {
        "Shift_JIS"
    }

    fn order(&self, buf: &[u8]) -> CharOrder {
        let len = match buf.first().copied() {
            Some(0x81..=0x9F) | Some(0xE0..=0xFC) => 2,
            _ => 1,
        };

        let order = match (buf.first().copied(), buf.get(1).copied()) {
            (Some(0x82), Some(second @ 0x9F..=0xF1)) => Some(second - 0x9F),
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
        let r = ShiftJisOrder;
        // ぁ (先頭) と ん (末尾)
        assert_eq!(r.order(&[0x82, 0x9F]), CharOrder { len: 2, order: Some(0) });
        assert_eq!(r.order(&[0x82, 0xF1]), CharOrder { len: 2, order: Some(82) });
        assert_eq!(r.order(&[0x82, 0xA0]).order, Some(1));
    }

    #[test]
    fn test_non_hiragana_double_byte() {
        let r = ShiftJisOrder;
        // 0x82 でもひらがな範囲外 (カタカナ等) は順位なし
        assert_eq!(r.order(&[0x82, 0x9E]), CharOrder { len: 2, order: None });
        assert_eq!(r.order(&[0x82, 0xF2]), CharOrder { len: 2, order: None });
        // 漢字領域の先頭バイト
        assert_eq!(r.order(&[0x88, 0xA0]), CharOrder { len: 2, order: None });
        assert_eq!(r.order(&[0xE0, 0x40]), CharOrder { len: 2, order: None });
    }

    #[test]
    fn test_single_byte() {
        let r = ShiftJisOrder;
        assert_eq!(r.order(&[0x41]), CharOrder { len: 1, order: None }); // 'A'
        assert_eq!(r.order(&[0x00]), CharOrder { len: 1, order: None });
        assert_eq!(r.order(&[0xA0]), CharOrder { len: 1, order: None }); // 半角カナ領域
        assert_eq!(r.order(&[0xFD]), CharOrder { len: 1, order: None });
    }

    #[test]
    fn test_truncated_input() {
        let r = ShiftJisOrder;
        // 第2バイトがなくても長さは返し、順位は None
        assert_eq!(r.order(&[0x82]), CharOrder { len: 2, order: None });
        assert_eq!(r.order(&[]), CharOrder { len: 1, order: None });
    }
}
