// Stopwatch state driven by start/pause/reset and a one-second tick
use std::rc::Rc;
use yew::Reducible;

use crate::util::format_clock;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StopwatchPhase {
    #[default]
    Stopped,
    Running,
    Paused,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stopwatch {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub phase: StopwatchPhase,
}

#[derive(Clone, Copy, Debug)]
pub enum StopwatchAction {
    Start,
    Pause,
    Reset,
    Tick,
}

impl Stopwatch {
    pub fn is_running(&self) -> bool {
        self.phase == StopwatchPhase::Running
    }

    pub fn display(&self) -> String {
        format_clock(self.hours, self.minutes, self.seconds)
    }

    fn advance(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes += 1;
            if self.minutes >= 60 {
                self.minutes = 0;
                self.hours = self.hours.saturating_add(1);
            }
        }
    }
}

impl Reducible for Stopwatch {
    type Action = StopwatchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use StopwatchAction::*;
        let mut new = (*self).clone();
        match action {
            Start => {
                if new.is_running() {
                    return self;
                }
                new.phase = StopwatchPhase::Running;
            }
            Pause => {
                if !new.is_running() {
                    return self;
                }
                new.phase = StopwatchPhase::Paused;
            }
            Reset => new = Stopwatch::default(),
            Tick => {
                // late ticks from a cleared interval are dropped
                if !new.is_running() {
                    return self;
                }
                new.advance();
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: Rc<Stopwatch>, actions: impl IntoIterator<Item = StopwatchAction>) -> Rc<Stopwatch> {
        actions.into_iter().fold(state, |s, a| s.reduce(a))
    }

    fn ticks(n: usize) -> impl Iterator<Item = StopwatchAction> {
        std::iter::repeat_n(StopwatchAction::Tick, n)
    }

    #[test]
    fn starts_stopped_and_zeroed() {
        let s = Stopwatch::default();
        assert_eq!(s.phase, StopwatchPhase::Stopped);
        assert_eq!(s.display(), "00:00:00");
    }

    #[test]
    fn sixty_one_ticks_carry_into_minutes() {
        let s = run(Rc::new(Stopwatch::default()), std::iter::once(StopwatchAction::Start).chain(ticks(61)));
        assert_eq!((s.hours, s.minutes, s.seconds), (0, 1, 1));
        assert_eq!(s.display(), "00:01:01");
    }

    #[test]
    fn hour_carry() {
        let s = run(Rc::new(Stopwatch::default()), std::iter::once(StopwatchAction::Start).chain(ticks(3661)));
        assert_eq!((s.hours, s.minutes, s.seconds), (1, 1, 1));
        assert!(s.seconds < 60 && s.minutes < 60);
    }

    #[test]
    fn ticks_ignored_unless_running() {
        let s = run(Rc::new(Stopwatch::default()), ticks(5));
        assert_eq!(s.seconds, 0);

        let s = run(s, [StopwatchAction::Start, StopwatchAction::Tick, StopwatchAction::Pause]);
        let s = run(s, ticks(10));
        assert_eq!(s.seconds, 1);
        assert_eq!(s.phase, StopwatchPhase::Paused);
    }

    #[test]
    fn resume_keeps_elapsed() {
        let s = run(
            Rc::new(Stopwatch::default()),
            [StopwatchAction::Start, StopwatchAction::Tick, StopwatchAction::Pause, StopwatchAction::Start, StopwatchAction::Tick],
        );
        assert_eq!(s.seconds, 2);
        assert!(s.is_running());
    }

    #[test]
    fn reset_from_any_phase() {
        for setup in [vec![], vec![StopwatchAction::Start], vec![StopwatchAction::Start, StopwatchAction::Pause]] {
            let s = run(Rc::new(Stopwatch::default()), setup.into_iter().chain(ticks(3)));
            let s = s.reduce(StopwatchAction::Reset);
            assert_eq!(*s, Stopwatch::default());
        }
    }

    #[test]
    fn pause_when_stopped_is_noop() {
        let s = Rc::new(Stopwatch::default());
        let after = s.clone().reduce(StopwatchAction::Pause);
        assert!(Rc::ptr_eq(&s, &after));
    }
}
