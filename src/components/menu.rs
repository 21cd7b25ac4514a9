use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, Node};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::menu::MenuPhase;
use crate::state::{MenuAction, MenuState};
use crate::util::set_timeout;

#[derive(Properties, PartialEq, Clone)]
pub struct MenuProps {
    pub state: UseReducerHandle<MenuState>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let toggle_ref = use_node_ref();
    let panel_ref = use_node_ref();

    // Finish Opening/Closing once the CSS transition had time to run
    {
        let menu = props.state.clone();
        let phase = props.state.phase;
        let generation = props.state.generation;
        let (open_delay, close_delay) = (config.menu.open_delay_ms, config.menu.close_delay_ms);
        use_effect_with((phase, generation), move |_| {
            let delay = match phase {
                MenuPhase::Opening => Some(open_delay),
                MenuPhase::Closing => Some(close_delay),
                _ => None,
            };
            if let Some(delay) = delay {
                let menu = menu.clone();
                set_timeout(delay, move || menu.dispatch(MenuAction::Settle { generation }));
            }
            || ()
        });
    }

    // Outside click dismissal
    {
        let menu = props.state.clone();
        let toggle_ref = toggle_ref.clone();
        let panel_ref = panel_ref.clone();
        use_effect_with((), move |_| {
            let document = web_sys::window().and_then(|w| w.document());
            let registered = document.map(|document| {
                let listener = Closure::wrap(Box::new(move |e: Event| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    let inside = [&toggle_ref, &panel_ref]
                        .iter()
                        .filter_map(|r| r.get())
                        .any(|n| n.contains(Some(&target)));
                    if !inside {
                        menu.dispatch(MenuAction::DismissOutside);
                    }
                }) as Box<dyn FnMut(Event)>);
                let _ = document
                    .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref());
                (document, listener)
            });
            move || {
                if let Some((document, listener)) = registered {
                    let _ = document.remove_event_listener_with_callback(
                        "click",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let on_toggle = {
        let menu = props.state.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            menu.dispatch(MenuAction::Toggle);
        })
    };

    let active = props.state.is_open();
    let display = if props.state.is_displayed() { "display:block;" } else { "display:none;" };
    html! {<>
        <button id="menuToggle" ref={toggle_ref} class={classes!("menu-toggle", active.then_some("active"))} onclick={on_toggle} aria-expanded={active.to_string()}>
            <i class={classes!("fas", if active { "fa-times" } else { "fa-bars" })}></i>
        </button>
        <div id="collapsibleSections" ref={panel_ref} class={classes!("collapsible-sections", active.then_some("active"))} style={display}>
            { props.children.clone() }
        </div>
    </>}
}
