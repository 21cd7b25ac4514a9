pub mod app;
pub mod directory;
pub mod facility_list;
pub mod faq;
pub mod map_panel;
pub mod menu;
pub mod stopwatch;
pub mod visitor_counter;
