//! 状态转换 (Update/Dispatch)
//!
//! 四条状态转换规则：切换分区、视口变化、装饰行计时、光标闪烁

use std::time::Instant;

use super::actions::Action;
use super::state::App;
use crate::models::SectionKey;

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.quit = true,

            Action::SelectSection(key) => {
                self.select_section(key);
            }
            Action::NextSection => {
                self.select_section(self.selected.next());
            }
            Action::PreviousSection => {
                self.select_section(self.selected.previous());
            }

            Action::Resize(width_px) => self.on_viewport_resize(width_px),

            Action::TickDecorativeLine => self.tick_decorative_line(Instant::now()),
            Action::TickCursorBlink => self.tick_cursor_blink(),
        }
        self.quit
    }

    // ============ 标签页 ============

    /// 切换分区，相同分区为空操作；返回是否发生变化
    pub fn select_section(&mut self, key: SectionKey) -> bool {
        if key == self.selected {
            return false;
        }
        tracing::debug!(from = %self.selected, to = %key, "section selected");
        self.selected = key;
        self.section_entered_at = Instant::now();
        self.version += 1;
        true
    }

    // ============ 布局 ============

    /// 重新计算窄布局标志
    pub fn on_viewport_resize(&mut self, width_px: u32) {
        let compact = width_px < self.settings.compact_breakpoint_px;
        if compact != self.compact {
            tracing::debug!(width_px, compact, "layout mode changed");
            self.compact = compact;
            self.version += 1;
        }
    }

    // ============ 计时器 ============

    /// 追加一条装饰行，超过上限时淘汰最旧的
    pub fn tick_decorative_line(&mut self, now: Instant) {
        let line = self.feed.next_line(now);
        self.decorative_lines.push_back(line);
        while self.decorative_lines.len() > self.settings.max_decorative_lines {
            self.decorative_lines.pop_front();
        }
        self.version += 1;
    }

    /// 切换光标可见性
    pub fn tick_cursor_blink(&mut self) {
        self.cursor_visible = !self.cursor_visible;
        self.version += 1;
    }
}
