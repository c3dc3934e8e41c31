//! Action 枚举定义 (Intent)
//!
//! 用户交互、窗口变化和计时器转化为明确的语义化 Action

use crate::models::SectionKey;

/// 状态变更操作枚举
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,

    // 标签页
    SelectSection(SectionKey),
    NextSection,
    PreviousSection,

    /// 视口宽度（逻辑像素）
    Resize(u32),

    // 计时器
    TickDecorativeLine,
    TickCursorBlink,
}
