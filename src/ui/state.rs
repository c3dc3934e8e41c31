//! App 状态定义 (Model)
//!
//! 包含视图状态结构体：选中分区、装饰行队列、光标、布局模式

use std::collections::VecDeque;
use std::time::Instant;

use ratatui::layout::{Position, Rect};

use crate::models::{
    DecorativeLine, MenuItem, MenuSection, PortfolioContent, SectionKey, SnippetFeed,
};
use crate::settings::Settings;

/// 应用状态
pub struct App {
    pub content: PortfolioContent,
    pub settings: Settings,
    pub selected: SectionKey,
    pub decorative_lines: VecDeque<DecorativeLine>,
    pub cursor_visible: bool,
    pub compact: bool,
    /// 每次真实状态变更递增
    pub version: u64,
    /// 分区切换时刻，用于重新播放进入动画
    pub section_entered_at: Instant,
    /// 上一次渲染记录的标签页点击区域
    pub tab_hitboxes: Vec<(Rect, SectionKey)>,
    pub quit: bool,
    pub(super) feed: SnippetFeed,
}

impl App {
    /// 创建新的应用实例
    pub fn new(content: PortfolioContent, settings: Settings, feed: SnippetFeed) -> Self {
        let selected = content.catalog.first_key();
        let capacity = settings.max_decorative_lines;
        Self {
            content,
            settings,
            selected,
            decorative_lines: VecDeque::with_capacity(capacity.saturating_add(1)),
            cursor_visible: true,
            compact: false,
            version: 0,
            section_entered_at: Instant::now(),
            tab_hitboxes: Vec::new(),
            quit: false,
            feed,
        }
    }

    /// 当前选中的分区
    pub fn current_section(&self) -> &MenuSection {
        self.content.catalog.section(self.selected)
    }

    /// 当前可见的条目（按声明顺序）
    pub fn visible_items(&self) -> &[MenuItem] {
        &self.current_section().items
    }

    /// 屏幕坐标命中的标签页
    pub fn tab_at(&self, column: u16, row: u16) -> Option<SectionKey> {
        self.tab_hitboxes
            .iter()
            .find(|(rect, _)| rect.contains(Position::new(column, row)))
            .map(|(_, key)| *key)
    }
}
