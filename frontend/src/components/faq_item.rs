use yew::prelude::*;

use crate::content::Faq;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub id: usize,
    pub faq: &'static Faq,
    pub open: bool,
    pub on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div id={format!("faq-{}", props.id)} class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{props.faq.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            if props.open {
                <div class="faq-answer">
                    <p>{props.faq.answer}</p>
                </div>
            }
        </div>
    }
}
