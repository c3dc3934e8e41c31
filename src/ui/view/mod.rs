//! 视图层模块
//!
//! 包含主渲染入口和两个面板：左侧作品集，右侧终端窗口

pub mod components;
pub mod layouts;

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::state::App;
use crate::models::SectionKey;
use components::{
    ACCENT, FAINT, ITEM_NAME, MATRIX_DIM, MUTED, NIGHT, ORCHID, PROMPT, draw_clipped, link_line,
    prompt_line, render_tab_bar,
};
use layouts::{centered_box, split_panes};

/// 进入动画：第 i 个条目在 ENTRY_BASE + i * ENTRY_STAGGER 内以暗色显示
const ENTRY_BASE: Duration = Duration::from_millis(600);
const ENTRY_STAGGER: Duration = Duration::from_millis(100);

/// 终端窗口最大宽度（字符）
const TERMINAL_MAX_WIDTH: u16 = 64;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // 主体
            Constraint::Length(1), // 帮助
        ])
        .split(frame.area());

    let (left, right) = split_panes(chunks[0], app.compact);

    let hitboxes = render_portfolio(frame, app, left);
    app.tab_hitboxes = hitboxes;

    render_terminal_pane(frame, app, right);
    render_help(frame, app, chunks[1]);
}

// ============ 左侧：作品集 ============

fn render_portfolio(frame: &mut Frame, app: &App, area: Rect) -> Vec<(Rect, SectionKey)> {
    let border = if app.compact {
        Borders::BOTTOM
    } else {
        Borders::RIGHT
    };
    let block = Block::default()
        .borders(border)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(2)
        .constraints([
            Constraint::Length(5), // 标题
            Constraint::Length(2), // 标签栏
            Constraint::Min(3),    // 条目
            Constraint::Length(6), // 页脚
        ])
        .split(inner);

    render_header(frame, app, chunks[0]);
    let hitboxes = render_tab_bar(frame, chunks[1], &app.content.catalog, app.selected);
    render_items(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);

    hitboxes
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let profile = &app.content.profile;
    let label = Style::default().fg(MUTED);

    let lines = vec![
        Line::from(""),
        Line::styled(
            profile.heading.as_str(),
            Style::default().fg(MUTED).add_modifier(Modifier::BOLD),
        ),
        link_line("CONTACT", &app.content.contact.email, label),
        Line::from(""),
        Line::styled(
            "PORTFOLIO",
            Style::default().fg(MUTED).add_modifier(Modifier::UNDERLINED),
        ),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_items(frame: &mut Frame, app: &App, area: Rect) {
    let section = app.current_section();
    let elapsed = app.section_entered_at.elapsed();

    let mut lines = vec![
        Line::styled(
            section.title.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Line::styled(
            section.description.as_str(),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
    ];

    for (i, item) in app.visible_items().iter().enumerate() {
        let entering = elapsed < ENTRY_BASE + ENTRY_STAGGER * i as u32;
        let dim = if entering {
            Modifier::DIM
        } else {
            Modifier::empty()
        };

        lines.push(Line::styled(
            item.name.to_uppercase(),
            Style::default()
                .fg(ITEM_NAME)
                .add_modifier(Modifier::BOLD | dim),
        ));
        lines.push(Line::styled(
            item.description.as_str(),
            Style::default().add_modifier(dim),
        ));
        if !item.details.is_empty() {
            lines.push(Line::styled(
                item.details.as_str(),
                Style::default()
                    .fg(MUTED)
                    .add_modifier(Modifier::ITALIC | dim),
            ));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let contact = &app.content.contact;
    let link = Style::default().fg(MUTED);

    let lines = vec![
        Line::from(vec![
            Span::styled("DOWNLOAD RESUME ", link),
            Span::styled("●", Style::default().fg(ACCENT)),
            Span::raw("  "),
            Span::styled(contact.resume.as_str(), Style::default().fg(FAINT)),
        ]),
        Line::styled("CONNECT", Style::default().fg(FAINT)),
        link_line("GitHub Profile", &contact.github, link),
        link_line("LinkedIn Profile", &contact.linkedin, link),
        link_line("Email Contact", &contact.email, link),
    ];

    let footer = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(footer, area);
}

// ============ 右侧：终端 ============

fn render_terminal_pane(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(Block::default().style(Style::default().bg(NIGHT)), area);

    render_decorative_lines(frame, app, area, Instant::now());

    let lines = terminal_lines(app);
    let width = TERMINAL_MAX_WIDTH.min(area.width.saturating_sub(4));
    let inner_width = usize::from(width.saturating_sub(2).max(1));
    let rows: usize = lines
        .iter()
        .map(|l| l.width().max(1).div_ceil(inner_width))
        .sum();
    let height = u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(2);
    let window = centered_box(width, height, area);

    frame.render_widget(Clear, window);
    let terminal = Paragraph::new(lines)
        .style(Style::default().bg(Color::Black).fg(Color::White))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::DarkGray))
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(terminal, window);
}

/// 装饰行按生成时间从右向左循环滚动
fn render_decorative_lines(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let period = app.settings.scroll_duration().as_secs_f32();
    let style = Style::default().fg(MATRIX_DIM);
    let buf = frame.buffer_mut();

    for line in &app.decorative_lines {
        let row = area.y + ((line.top / 100.0) * f32::from(area.height)) as u16;
        let age = now.saturating_duration_since(line.spawned).as_secs_f32();
        let progress = (age / period).fract();
        let travel = f32::from(area.width) + line.text.chars().count() as f32;
        let x = f32::from(area.width) - progress * travel;
        draw_clipped(buf, area, x as i32, row, &line.text, style);
    }
}

fn terminal_lines(app: &App) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Rgb(0xff, 0x5f, 0x56))),
            Span::styled("● ", Style::default().fg(Color::Rgb(0xff, 0xbd, 0x2e))),
            Span::styled("●", Style::default().fg(Color::Rgb(0x27, 0xca, 0x3f))),
        ]),
        Line::from(""),
    ];

    for block in &app.content.terminal {
        lines.push(prompt_line(&block.command, None));
        lines.extend(block.lines.iter().map(|l| Line::from(l.as_str())));
        lines.push(Line::from(""));
    }

    let connect = format!("connect --{}", app.content.profile.handle);
    lines.push(prompt_line(connect, Some(app.cursor_visible)));
    lines.push(Line::from(vec![
        Span::styled("Email", Style::default().fg(ORCHID)),
        Span::raw("   "),
        Span::styled("LinkedIn", Style::default().fg(PROMPT)),
        Span::raw("   "),
        Span::styled("GitHub", Style::default().fg(MUTED)),
    ]));

    lines
}

// ============ 帮助 ============

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let layout = if app.compact { "compact" } else { "wide" };
    let text = format!("[1-3] section  [←/→ Tab] switch  [click] tab  [q] quit  |  {layout}");
    let help = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SnippetFeed;
    use crate::settings::Settings;
    use crate::storage::builtin_content;
    use crate::ui::input::handle_mouse_event;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        let content = builtin_content().unwrap();
        let feed =
            SnippetFeed::with_rng(content.snippets.clone(), StdRng::seed_from_u64(1)).unwrap();
        App::new(content, Settings::default(), feed)
    }

    fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buf = terminal.backend().buffer();
        (0..height)
            .map(|y| (0..width).map(|x| buf[(x, y)].symbol()).collect())
            .collect()
    }

    fn find(rows: &[String], needle: &str) -> Option<(usize, usize)> {
        rows.iter()
            .enumerate()
            .find_map(|(y, row)| row.find(needle).map(|x| (y, x)))
    }

    #[test]
    fn selecting_second_section_renders_its_items_in_order() {
        let mut app = app();
        assert_eq!(app.selected, app.content.catalog.first_key());

        let second = SectionKey::ALL[1];
        app.select_section(second);
        let rows = draw(&mut app, 200, 60);

        let expected: Vec<String> = app
            .content
            .catalog
            .section(second)
            .items
            .iter()
            .map(|i| i.name.to_uppercase())
            .collect();
        let positions: Vec<_> = expected
            .iter()
            .map(|name| find(&rows, name).expect("item rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0].0 < w[1].0));

        for (key, section) in app.content.catalog.iter() {
            if key == second {
                continue;
            }
            for item in &section.items {
                assert!(find(&rows, &item.name.to_uppercase()).is_none());
            }
        }
        assert_eq!(app.visible_items().len(), expected.len());
    }

    #[test]
    fn clicking_a_tab_selects_it() {
        let mut app = app();
        draw(&mut app, 200, 60);
        assert_eq!(app.tab_hitboxes.len(), 3);

        let (rect, key) = app.tab_hitboxes[2];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: rect.x + 1,
            row: rect.y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, click).unwrap();
        assert_eq!(app.selected, key);
        assert_eq!(key, SectionKey::Specialties);
    }

    #[test]
    fn clicking_outside_tabs_does_nothing() {
        let mut app = app();
        draw(&mut app, 200, 60);
        let version = app.version;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 199,
            row: 59,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_event(&mut app, click).unwrap();
        assert_eq!(app.version, version);
    }

    #[test]
    fn cursor_blinks_in_connect_prompt() {
        let mut app = app();
        let rows = draw(&mut app, 200, 60);
        assert!(find(&rows, "$ connect --lucas_").is_some());

        app.tick_cursor_blink();
        let rows = draw(&mut app, 200, 60);
        assert!(find(&rows, "$ connect --lucas").is_some());
        assert!(find(&rows, "$ connect --lucas_").is_none());
    }

    #[test]
    fn wide_layout_puts_terminal_on_the_right() {
        let mut app = app();
        app.on_viewport_resize(200 * 8);
        let rows = draw(&mut app, 200, 60);
        let (_, x) = find(&rows, "$ whoami").unwrap();
        assert!(x >= 100);
    }

    #[test]
    fn compact_layout_stacks_terminal_below() {
        let mut app = app();
        app.on_viewport_resize(100 * 8);
        assert!(app.compact);
        let rows = draw(&mut app, 100, 90);

        let (heading_y, _) = find(&rows, "Le Code - Lucas Pham").unwrap();
        let (whoami_y, x) = find(&rows, "$ whoami").unwrap();
        assert!(whoami_y > heading_y);
        assert!(x < 50);
    }

    #[test]
    fn links_are_rendered_verbatim() {
        let mut app = app();
        let rows = draw(&mut app, 200, 60);
        let contact = app.content.contact.clone();
        for target in [&contact.github, &contact.linkedin, &contact.resume, &contact.email] {
            assert!(find(&rows, target).is_some(), "missing {target}");
        }
    }

    #[test]
    fn decorative_lines_render_without_panicking_at_any_age() {
        let mut app = app();
        let start = Instant::now();
        for _ in 0..6 {
            app.tick_decorative_line(start);
        }
        for width in [20, 80, 200] {
            draw(&mut app, width, 30);
        }
    }
}
