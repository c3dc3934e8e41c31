//! 键盘/鼠标事件映射 (Input -> Action)

use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;
use crate::models::SectionKey;

/// 按键对应的 Action
pub fn get_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSection),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PreviousSection),
        KeyCode::Char(c) => SectionKey::from_digit(c).map(Action::SelectSection),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件：左键点击标签页
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) -> io::Result<bool> {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if let Some(key) = app.tab_at(mouse.column, mouse.row) {
            return Ok(app.dispatch(Action::SelectSection(key)));
        }
    }
    Ok(false)
}
