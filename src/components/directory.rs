use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::filter_entries;

#[function_component(EmergencyDirectory)]
pub fn emergency_directory() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let query = use_state(String::new);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let matches = filter_entries(&config.directory, &query);
    let no_matches = matches.is_empty();
    html! {
        <section class="emergency">
            <input id="search-bar" type="search" placeholder="Search emergency services..." value={(*query).clone()} {oninput} />
            <div class="emergency-list">
                { for matches.into_iter().map(|e| html! {
                    <a class="emergency-button" key={e.number.clone()} href={format!("tel:{}", e.number)}>
                        <span class="emergency-label">{ e.label.clone() }</span>
                        <span class="emergency-number">{ e.number.clone() }</span>
                    </a>
                }) }
                if no_matches {
                    <div class="loading">{"No matching services."}</div>
                }
            </div>
        </section>
    }
}
