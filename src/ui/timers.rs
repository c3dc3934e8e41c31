//! 周期计时器
//!
//! 事件循环按截止时间轮询；Schedule 随循环作用域创建，退出时取消

use std::time::{Duration, Instant};

use super::actions::Action;
use crate::settings::Settings;

/// 固定周期的截止时间计时器
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
}

impl Interval {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            next_due: start + period,
        }
    }

    /// 到期则触发一次并对齐到下一个未来截止时间（错过多个周期只触发一次）
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        while self.next_due <= now {
            self.next_due += self.period;
        }
        true
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }
}

/// 装饰行与光标闪烁两个计时器
#[derive(Debug)]
pub struct Schedule {
    line: Interval,
    blink: Interval,
    cancelled: bool,
}

impl Schedule {
    pub fn new(settings: &Settings, start: Instant) -> Self {
        Self {
            line: Interval::new(settings.line_interval(), start),
            blink: Interval::new(settings.blink_interval(), start),
            cancelled: false,
        }
    }

    /// 收集到期的计时器动作
    pub fn due(&mut self, now: Instant) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.cancelled {
            return actions;
        }
        if self.blink.poll(now) {
            actions.push(Action::TickCursorBlink);
        }
        if self.line.poll(now) {
            actions.push(Action::TickDecorativeLine);
        }
        actions
    }

    /// 距离下一个计时器到期的时间
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.cancelled {
            return None;
        }
        Some(self.line.remaining(now).min(self.blink.remaining(now)))
    }

    pub fn cancel(&mut self) {
        if !self.is_cancelled() {
            self.cancelled = true;
            tracing::debug!("timers cancelled");
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Drop for Schedule {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn interval_fires_on_period() {
        let start = Instant::now();
        let mut interval = Interval::new(ms(1000), start);
        assert!(!interval.poll(start + ms(999)));
        assert!(interval.poll(start + ms(1000)));
        assert!(!interval.poll(start + ms(1500)));
        assert!(interval.poll(start + ms(2000)));
    }

    #[test]
    fn missed_periods_fire_once() {
        let start = Instant::now();
        let mut interval = Interval::new(ms(1000), start);
        assert!(interval.poll(start + ms(5500)));
        assert!(!interval.poll(start + ms(5900)));
        assert_eq!(interval.remaining(start + ms(5900)), ms(100));
    }

    #[test]
    fn schedule_emits_both_timers() {
        let start = Instant::now();
        let mut schedule = Schedule::new(&Settings::default(), start);

        assert!(schedule.due(start + ms(500)).is_empty());
        assert_eq!(schedule.due(start + ms(1000)), vec![Action::TickCursorBlink]);
        assert_eq!(schedule.time_until_next(start + ms(1000)), Some(ms(1000)));

        let blinks = (2..=4)
            .flat_map(|s| schedule.due(start + ms(s * 1000)))
            .collect::<Vec<_>>();
        assert_eq!(
            blinks,
            vec![
                Action::TickCursorBlink,
                Action::TickCursorBlink,
                Action::TickCursorBlink,
                Action::TickDecorativeLine,
            ]
        );
    }

    #[test]
    fn cancelled_schedule_fires_nothing() {
        let start = Instant::now();
        let mut schedule = Schedule::new(&Settings::default(), start);
        schedule.cancel();

        assert!(schedule.is_cancelled());
        assert!(schedule.due(start + ms(60_000)).is_empty());
        assert_eq!(schedule.time_until_next(start), None);
    }
}
