use std::rc::Rc;
use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use super::facility_list::FacilityList;
use crate::config::SiteConfig;
use crate::error::{MapError, SearchError};
use crate::map::MapSession;
use crate::model::{Coordinate, RankedFacility};
use crate::services::{BrowserLocator, Locator, OverpassClient};
use crate::state::search_nearby;
use crate::util::{alert, format_radius, set_timeout};

const IDLE_MSG: &str = "Click \"Locate Me\" to find medical facilities near you.";
const LOCATED_MSG: &str =
    "Location found! Click \"Find Hospitals\" to search nearby medical facilities.";

#[derive(Clone, PartialEq)]
enum ListView {
    Message(String),
    Results(Vec<RankedFacility>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct MapPanelProps {
    /// Changes whenever the surrounding panel has just become visible.
    pub resize_epoch: u32,
}

#[function_component(MapPanel)]
pub fn map_panel(props: &MapPanelProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let session = use_mut_ref(MapSession::default);
    let ready = use_state(|| false);
    let locating = use_state(|| false);
    let searching = use_state(|| false);
    let list = use_state(|| ListView::Message(IDLE_MSG.to_string()));

    // Map setup + refresh when the tab becomes visible again
    {
        let session = session.clone();
        let ready = ready.clone();
        let config = config.clone();
        use_effect_with((), move |_| {
            match session.borrow_mut().attach(&config.map) {
                Ok(()) => ready.set(true),
                Err(MapError::MissingElement(id)) => info!("map element #{id} not found on this page"),
                Err(e) => error!("error initializing map: {e}"),
            }

            let document = web_sys::window().and_then(|w| w.document());
            let registered = document.map(|document| {
                let doc = document.clone();
                let delay = config.map.refresh_delay_ms;
                let listener = Closure::wrap(Box::new(move || {
                    if doc.hidden() {
                        return;
                    }
                    let session = session.clone();
                    set_timeout(100, move || {
                        set_timeout(delay, move || session.borrow().refresh());
                    });
                }) as Box<dyn FnMut()>);
                let _ = document.add_event_listener_with_callback(
                    "visibilitychange",
                    listener.as_ref().unchecked_ref(),
                );
                (document, listener)
            });
            move || {
                if let Some((document, listener)) = registered {
                    let _ = document.remove_event_listener_with_callback(
                        "visibilitychange",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    // Menu opened: the map was laid out while hidden
    {
        let session = session.clone();
        let delay = config.map.refresh_delay_ms;
        use_effect_with(props.resize_epoch, move |epoch| {
            if *epoch > 0 {
                set_timeout(delay, move || session.borrow().refresh());
            }
            || ()
        });
    }

    let on_locate = {
        let session = session.clone();
        let config = config.clone();
        let locating = locating.clone();
        let searching = searching.clone();
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            let ticket = session.borrow_mut().locate.begin();
            let Some(ticket) = ticket else {
                debug!("locate already in flight");
                return;
            };
            locating.set(true);
            let session = session.clone();
            let config = config.clone();
            let locating = locating.clone();
            let searching = searching.clone();
            let list = list.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = BrowserLocator::new(&config.geolocation).locate().await;
                let current = session.borrow_mut().locate.finish(ticket);
                locating.set(false);
                if !current {
                    return;
                }
                match result {
                    Ok(at) => {
                        info!(lat = at.lat, lng = at.lng, "location found");
                        session.borrow_mut().set_location(at, config.map.located_zoom);
                        searching.set(false);
                        list.set(ListView::Message(LOCATED_MSG.to_string()));
                    }
                    Err(e) => {
                        error!("geolocation error: {e:?}");
                        alert(&e.user_message());
                    }
                }
            });
        })
    };

    let on_find = {
        let session = session.clone();
        let config = config.clone();
        let searching = searching.clone();
        let list = list.clone();
        Callback::from(move |_: MouseEvent| {
            let location = session.borrow().location();
            let Some(center) = location else {
                alert(&SearchError::MissingLocation.user_message());
                return;
            };
            let ticket = session.borrow_mut().search.begin();
            let Some(ticket) = ticket else {
                debug!("search already in flight");
                return;
            };
            let radius_m = config.search.radius_m;
            let limit = config.search.display_limit;
            searching.set(true);
            list.set(ListView::Message(format!(
                "Searching for hospitals within {}...",
                format_radius(radius_m)
            )));
            session.borrow_mut().clear_facilities();

            let session = session.clone();
            let client = OverpassClient::new(&config.search);
            let searching = searching.clone();
            let list = list.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = search_nearby(&client, center, radius_m, limit).await;
                if !session.borrow_mut().search.finish(ticket) {
                    debug!("discarding results for a superseded search");
                    return;
                }
                searching.set(false);
                match result {
                    Ok(ranked) => {
                        session.borrow_mut().show_facilities(&ranked);
                        list.set(ListView::Results(ranked));
                    }
                    Err(e) => {
                        match &e {
                            SearchError::EmptyResult { .. } => info!("{e}"),
                            _ => error!("error fetching medical facilities: {e}"),
                        }
                        list.set(ListView::Message(e.user_message()));
                    }
                }
            });
        })
    };

    let on_select = {
        let session = session.clone();
        let zoom = config.map.focus_zoom;
        Callback::from(move |(id, at): (i64, Coordinate)| {
            if !session.borrow().focus(id, at, zoom) {
                warn!(id, "no marker for selected facility");
            }
        })
    };

    let body = match &*list {
        ListView::Message(msg) => html! { <div class="loading">{ msg.clone() }</div> },
        ListView::Results(entries) => html! { <FacilityList entries={entries.clone()} {on_select} /> },
    };

    html! {
        <div class="map-panel">
            <div id={config.map.element_id.clone()} class="map"></div>
            <div class="map-controls">
                <button id="locate-me" onclick={on_locate} disabled={!*ready || *locating}>
                    { if *locating { "Locating..." } else { "Locate Me" } }
                </button>
                <button id="find-hospitals" onclick={on_find} disabled={!*ready || *searching}>
                    { if *searching { "Searching..." } else { "Find Hospitals" } }
                </button>
            </div>
            <div id="hospital-list">{ body }</div>
        </div>
    }
}
