//! 布局计算

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 宽屏左右两栏，窄屏上下单列
pub fn split_panes(area: Rect, compact: bool) -> (Rect, Rect) {
    let (direction, constraints) = if compact {
        (
            Direction::Vertical,
            [Constraint::Percentage(60), Constraint::Percentage(40)],
        )
    } else {
        (
            Direction::Horizontal,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
    };

    let chunks = Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area);
    (chunks[0], chunks[1])
}

/// 在 r 中居中放置固定大小的矩形（超出时收缩到 r 内）
pub fn centered_box(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_layout_splits_columns() {
        let (left, right) = split_panes(Rect::new(0, 0, 200, 50), false);
        assert_eq!(left.y, right.y);
        assert_eq!(left.width, 100);
        assert_eq!(right.x, 100);
    }

    #[test]
    fn compact_layout_stacks_rows() {
        let (top, bottom) = split_panes(Rect::new(0, 0, 80, 50), true);
        assert_eq!(top.x, bottom.x);
        assert_eq!(top.width, 80);
        assert_eq!(bottom.y, top.bottom());
    }

    #[test]
    fn centered_box_clamps() {
        let r = Rect::new(10, 10, 20, 10);
        assert_eq!(centered_box(10, 4, r), Rect::new(15, 13, 10, 4));
        assert_eq!(centered_box(50, 50, r), r);
    }
}
