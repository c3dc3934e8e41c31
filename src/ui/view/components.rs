//! 通用 UI 组件
//!
//! 标签栏、链接行、终端提示符、裁剪文本

use std::borrow::Cow;

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::models::{MenuCatalog, SectionKey};

pub const ACCENT: Color = Color::Rgb(0x6b, 0x5b, 0x73);
pub const MUTED: Color = Color::Rgb(0x99, 0x99, 0x99);
pub const FAINT: Color = Color::Rgb(0xcc, 0xcc, 0xcc);
pub const ITEM_NAME: Color = Color::Rgb(0x5a, 0x4f, 0x59);
pub const NIGHT: Color = Color::Rgb(0x0f, 0x17, 0x2a);
pub const MATRIX: Color = Color::Rgb(0x00, 0xff, 0x41);
pub const MATRIX_DIM: Color = Color::Rgb(0x0a, 0x4a, 0x22);
pub const PROMPT: Color = Color::Rgb(0x64, 0x95, 0xed);
pub const ORCHID: Color = Color::Rgb(0xda, 0x70, 0xd6);

const TAB_GAP: u16 = 3;

/// [组件] 标签栏，返回每个标签的点击区域
pub fn render_tab_bar(
    frame: &mut Frame,
    area: Rect,
    catalog: &MenuCatalog,
    selected: SectionKey,
) -> Vec<(Rect, SectionKey)> {
    let mut hitboxes = Vec::new();
    let mut x = area.x;

    for (key, _) in catalog.iter() {
        if x >= area.right() {
            break;
        }
        let label = key.label();
        let width = (label.chars().count() as u16).min(area.right() - x);
        let rect = Rect::new(x, area.y, width, 1);

        let style = if key == selected {
            Style::default()
                .fg(ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(MUTED)
        };
        frame.render_widget(Paragraph::new(label).style(style), rect);

        hitboxes.push((rect, key));
        x = x.saturating_add(width + TAB_GAP);
    }

    if area.height > 1 {
        let rule = "─".repeat(area.width as usize);
        let rule_area = Rect::new(area.x, area.y + 1, area.width, 1);
        frame.render_widget(
            Paragraph::new(rule).style(Style::default().fg(Color::DarkGray)),
            rule_area,
        );
    }

    hitboxes
}

/// [组件] "标签  目标" 链接行，目标原样显示
pub fn link_line<'a>(label: &'a str, target: &'a str, label_style: Style) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw("  "),
        Span::styled(target, Style::default().fg(FAINT)),
    ])
}

/// [组件] 终端提示符 "$ command"，可附带闪烁光标
pub fn prompt_line<'a>(command: impl Into<Cow<'a, str>>, cursor: Option<bool>) -> Line<'a> {
    let mut spans = vec![
        Span::styled("$ ", Style::default().fg(PROMPT)),
        Span::styled(command, Style::default().fg(MATRIX)),
    ];
    if let Some(visible) = cursor {
        spans.push(Span::styled(
            if visible { "_" } else { " " },
            Style::default().fg(MATRIX),
        ));
    }
    Line::from(spans)
}

/// 在 area 内从列偏移 x（可为负）开始写入文本，超出部分裁剪
pub fn draw_clipped(buf: &mut Buffer, area: Rect, x: i32, y: u16, text: &str, style: Style) {
    if y < area.y || y >= area.bottom() || x >= i32::from(area.width) {
        return;
    }
    let skip = if x < 0 { x.unsigned_abs() as usize } else { 0 };
    let visible: String = text.chars().skip(skip).collect();
    if visible.is_empty() {
        return;
    }
    let start = x.max(0) as u16;
    let max_width = (area.width - start) as usize;
    buf.set_stringn(area.x + start, y, visible, max_width, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width).map(|x| buf[(x, y)].symbol()).collect()
    }

    #[test]
    fn clipped_text_enters_from_the_right() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        draw_clipped(&mut buf, area, 7, 0, "abcdef", Style::default());
        assert_eq!(row(&buf, 0), "       abc");
    }

    #[test]
    fn clipped_text_leaves_on_the_left() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        draw_clipped(&mut buf, area, -4, 0, "abcdef", Style::default());
        assert_eq!(row(&buf, 0), "ef        ");
    }

    #[test]
    fn fully_offscreen_text_is_skipped() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        draw_clipped(&mut buf, area, -6, 0, "abcdef", Style::default());
        draw_clipped(&mut buf, area, 10, 0, "abcdef", Style::default());
        assert_eq!(row(&buf, 0), " ".repeat(10));
    }

    #[test]
    fn prompt_cursor_toggles() {
        let shown: String = prompt_line("connect", Some(true))
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        let hidden: String = prompt_line("connect", Some(false))
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(shown, "$ connect_");
        assert_eq!(hidden, "$ connect ");
    }
}
