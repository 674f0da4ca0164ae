// crates/domain/src/placement.rs
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use word_counter_shared_kernel::DomainError;

/// 選択範囲とツールチップの間隔（px）
pub const TOOLTIP_GAP: f64 = 10.0;
/// ツールチップ上端がこれより上に出る場合は選択範囲の下に出す（px）
pub const MIN_VIEWPORT_TOP: f64 = 50.0;

/// 選択範囲の外接矩形（ビューポート座標）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SelectionRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// 幅・高さのどちらかが 0 の矩形には表示しない。
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// `left,top,width,height` 形式。
impl FromStr for SelectionRect {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |details: &str| DomainError::InvalidRect { value: s.to_string(), details: details.to_string() };

        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| invalid(&e.to_string()))?;

        match parts.as_slice() {
            &[left, top, width, height] => {
                if parts.iter().any(|v| !v.is_finite()) {
                    return Err(invalid("values must be finite"));
                }
                if width < 0.0 || height < 0.0 {
                    return Err(invalid("width and height must not be negative"));
                }
                Ok(Self::new(left, top, width, height))
            }
            _ => Err(invalid("expected four comma-separated numbers")),
        }
    }
}

/// ツールチップを出す側。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// 下端を `top` に合わせる
    Above,
    /// 上端を `top` に合わせる
    Below,
}

/// ツールチップの位置。`left` は水平中心。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub anchor: Anchor,
}

/// 選択範囲の上に置き、上端に近すぎる場合は下に置く。
#[must_use]
pub fn place_tooltip(rect: &SelectionRect) -> Placement {
    let left = rect.left + rect.width / 2.0;
    let above = rect.top - TOOLTIP_GAP;
    if above < MIN_VIEWPORT_TOP {
        Placement { left, top: rect.bottom() + TOOLTIP_GAP, anchor: Anchor::Below }
    } else {
        Placement { left, top: above, anchor: Anchor::Above }
    }
}
