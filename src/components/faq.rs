use std::rc::Rc;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::state::FaqState;

#[function_component(FaqList)]
pub fn faq_list() -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let faq = use_state(FaqState::default);

    html! {
        <section class="faq">
            <h2>{"Frequently Asked Questions"}</h2>
            { for config.faq.iter().enumerate().map(|(i, item)| {
                let open = faq.is_open(i);
                let onclick = {
                    let faq = faq.clone();
                    Callback::from(move |_: MouseEvent| faq.set(faq.toggle(i)))
                };
                html! {
                    <div class="faq-item" key={i}>
                        <button class={classes!("faq-question", open.then_some("active"))} {onclick}>{ item.question.clone() }</button>
                        <div class={classes!("faq-answer", open.then_some("active"))}>{ item.answer.clone() }</div>
                    </div>
                }
            }) }
        </section>
    }
}
