use yew::prelude::*;

use crate::content::PRICE;
use crate::utils::checkout::checkout_callback;

#[derive(Properties, PartialEq)]
pub struct FloatingCtaProps {
    pub visible: bool,
    pub spots: u32,
}

/// Sticky purchase bar shown after the offer section scrolls away.
#[function_component(FloatingCta)]
pub fn floating_cta(props: &FloatingCtaProps) -> Html {
    if !props.visible {
        return html! {};
    }
    html! {
        <div class="floating-cta">
            <div class="floating-cta-text">
                <span class="floating-cta-price">{format!("Apenas {}", PRICE)}</span>
                <span class="floating-cta-spots">{format!("{} vagas restantes", props.spots)}</span>
            </div>
            <button class="cta-button" onclick={checkout_callback()}>
                {"QUERO GARANTIR AGORA"}
                <i class="fas fa-arrow-right"></i>
            </button>
        </div>
    }
}
