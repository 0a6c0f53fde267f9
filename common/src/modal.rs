//! 詳細モーダルの開閉世代
//!
//! 開閉のたびに世代を進め、遅延処理（表示アニメーション開始・閉じた後の後片付け）は
//! 予約時の世代がまだ最新のときだけ実行する。

/// 遅延処理が予約時に受け取る世代番号
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTicket(u64);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalGeneration {
    current: u64,
}

impl ModalGeneration {
    /// 開く・閉じる操作ごとに呼ぶ
    pub fn advance(&mut self) -> ModalTicket {
        self.current = self.current.wrapping_add(1);
        ModalTicket(self.current)
    }

    /// 予約後に他の開閉操作が無かったか
    pub fn is_current(&self, ticket: ModalTicket) -> bool {
        self.current == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_is_current_until_next_transition() {
        let mut generation = ModalGeneration::default();
        let open = generation.advance();
        assert!(generation.is_current(open));

        let close = generation.advance();
        assert!(!generation.is_current(open));
        assert!(generation.is_current(close));
    }

    #[test]
    fn test_reopen_before_close_cleanup_cancels_it() {
        let mut generation = ModalGeneration::default();
        generation.advance(); // 1件目を開く
        let close = generation.advance();
        // 閉じた直後、表示フラグが立つ前に別カードを開く
        let reopen = generation.advance();

        assert!(!generation.is_current(close), "閉じた後の後片付けは取り消される");
        assert!(generation.is_current(reopen));
    }
}
