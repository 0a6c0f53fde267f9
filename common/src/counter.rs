//! 実績カウンタのアニメーション
//!
//! 16ms ごとに `target / (duration / 16)` ずつ増やし、最後は目標値ちょうどで止める。

pub const FRAME_MS: u32 = 16;

#[derive(Debug, Clone, PartialEq)]
pub struct CounterAnimation {
    target: u64,
    step: f64,
    current: f64,
    done: bool,
}

impl CounterAnimation {
    pub fn new(target: u64, duration_ms: u32) -> Self {
        let frames = (f64::from(duration_ms) / f64::from(FRAME_MS)).max(1.0);
        Self {
            target,
            step: target as f64 / frames,
            current: 0.0,
            done: false,
        }
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl Iterator for CounterAnimation {
    type Item = u64;

    /// 次のフレームで表示する値
    fn next(&mut self) -> Option<u64> {
        if self.done {
            return None;
        }
        self.current += self.step;
        if self.current < self.target as f64 {
            Some(self.current.floor() as u64)
        } else {
            self.done = true;
            Some(self.target)
        }
    }
}

/// 3桁区切り (`12500` → `"12,500"`)
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
