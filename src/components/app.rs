use std::rc::Rc;
use yew::prelude::*;

use super::{
    directory::EmergencyDirectory, faq::FaqList, map_panel::MapPanel, menu::Menu,
    stopwatch::StopwatchPanel, visitor_counter::VisitorCounter,
};
use crate::config::SiteConfig;
use crate::services::translate;
use crate::state::MenuState;

#[function_component(App)]
pub fn app() -> Html {
    let config: Rc<SiteConfig> = use_memo((), |_| SiteConfig::from_page());
    let menu = use_reducer(MenuState::default);

    {
        let translate_cfg = config.translate.clone();
        use_effect_with((), move |_| {
            translate::install(&translate_cfg);
            || ()
        });
    }

    html! {
        <ContextProvider<Rc<SiteConfig>> context={config.clone()}>
            <header class="site-header">
                <h1>{"Emergency Help"}</h1>
                <div id={config.translate.element_id.clone()}></div>
                <Menu state={menu.clone()}>
                    <section class="menu-section">
                        <h2>{"Nearby Hospitals"}</h2>
                        <MapPanel resize_epoch={menu.resize_epoch} />
                    </section>
                    <section class="menu-section">
                        <h2>{"Timer"}</h2>
                        <StopwatchPanel />
                    </section>
                </Menu>
            </header>
            <main>
                <EmergencyDirectory />
                <FaqList />
            </main>
            <footer class="site-footer">
                {"Visitors: "}<VisitorCounter />
            </footer>
        </ContextProvider<Rc<SiteConfig>>>
    }
}
