mod components;
mod config;
mod error;
mod geo;
mod map;
mod model;
mod services;
mod state;
mod util;

use components::app::App;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();
    yew::Renderer::<App>::new().render();
}
