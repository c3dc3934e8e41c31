//! 运行参数
//!
//! 计时器周期与布局断点，默认值与网页版一致

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// 同时存在的装饰行上限
pub const MAX_DECORATIVE_LINES: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 装饰行生成周期
    pub line_interval_ms: u64,
    /// 光标闪烁周期
    pub blink_interval_ms: u64,
    /// 窄布局断点（逻辑像素）
    pub compact_breakpoint_px: u32,
    /// 一个终端字符格折算的逻辑像素宽度
    pub cell_width_px: u32,
    /// 装饰行从右滚到左所需时间
    pub scroll_duration_ms: u64,
    pub max_decorative_lines: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            line_interval_ms: 4000,
            blink_interval_ms: 1000,
            compact_breakpoint_px: 1024,
            cell_width_px: 8,
            scroll_duration_ms: 20_000,
            max_decorative_lines: MAX_DECORATIVE_LINES,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ContentError> {
        let positive = [
            ("line_interval_ms", self.line_interval_ms),
            ("blink_interval_ms", self.blink_interval_ms),
            ("compact_breakpoint_px", u64::from(self.compact_breakpoint_px)),
            ("cell_width_px", u64::from(self.cell_width_px)),
            ("scroll_duration_ms", self.scroll_duration_ms),
            ("max_decorative_lines", self.max_decorative_lines as u64),
        ];

        for (name, value) in positive {
            if value == 0 {
                return Err(ContentError::InvalidSetting {
                    name,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }

        if self.max_decorative_lines > MAX_DECORATIVE_LINES {
            return Err(ContentError::InvalidSetting {
                name: "max_decorative_lines",
                reason: format!("must be between 1 and {MAX_DECORATIVE_LINES}"),
            });
        }
        Ok(())
    }

    pub fn line_interval(&self) -> Duration {
        Duration::from_millis(self.line_interval_ms)
    }

    pub fn blink_interval(&self) -> Duration {
        Duration::from_millis(self.blink_interval_ms)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    /// 终端列数折算为逻辑像素
    pub fn viewport_width_px(&self, columns: u16) -> u32 {
        u32::from(columns).saturating_mul(self.cell_width_px)
    }
}
