// Slide-out menu state machine
use std::rc::Rc;
use yew::Reducible;

/// Opening/Closing are the short windows while the CSS transition runs:
/// the panel is displayed but not yet (or no longer) active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub phase: MenuPhase,
    /// Bumped on every transition; a `Settle` for an older generation is stale.
    pub generation: u64,
    /// Bumped each time the panel becomes fully open so the map can resize.
    pub resize_epoch: u32,
}

#[derive(Clone, Copy, Debug)]
pub enum MenuAction {
    Toggle,
    DismissOutside,
    Settle { generation: u64 },
}

impl MenuState {
    /// Panel carries the `active` class.
    pub fn is_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }

    /// Panel takes up layout space (`display: block`).
    pub fn is_displayed(&self) -> bool {
        self.phase != MenuPhase::Closed
    }

    fn enter(&mut self, phase: MenuPhase) {
        self.phase = phase;
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MenuAction::*;
        use MenuPhase::*;
        let mut new = (*self).clone();
        match (self.phase, action) {
            (Closed | Closing, Toggle) => new.enter(Opening),
            (Open, Toggle | DismissOutside) => new.enter(Closing),
            (Opening, Settle { generation }) if generation == self.generation => {
                new.enter(Open);
                new.resize_epoch = new.resize_epoch.wrapping_add(1);
            }
            (Closing, Settle { generation }) if generation == self.generation => new.enter(Closed),
            _ => return self,
        }
        Rc::new(new)
    }
}
