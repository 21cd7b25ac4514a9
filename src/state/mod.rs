pub mod directory;
pub mod faq;
pub mod menu;
pub mod presenter;
pub mod request;
pub mod stopwatch;

pub use directory::filter_entries;
pub use faq::FaqState;
pub use menu::{MenuAction, MenuState};
pub use presenter::search_nearby;
pub use request::RequestGuard;
pub use stopwatch::{Stopwatch, StopwatchAction};
