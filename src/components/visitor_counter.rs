use std::rc::Rc;
use tracing::{info, warn};
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::services::{LocalStore, record_visit};

#[function_component(VisitorCounter)]
pub fn visitor_counter() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let count = use_state(|| None::<u64>);

    // Exactly one read-modify-write per page load
    {
        let count = count.clone();
        let key = config.visitor_storage_key.clone();
        use_effect_with((), move |_| {
            match LocalStore::open().and_then(|store| record_visit(&store, &key)) {
                Ok(n) => {
                    info!(visits = n, "visitor counted");
                    count.set(Some(n));
                }
                Err(e) => warn!("visitor counter unavailable: {e}"),
            }
            || ()
        });
    }

    html! {
        <span id="visitor-count">{ count.map(|n| n.to_string()).unwrap_or_default() }</span>
    }
}
