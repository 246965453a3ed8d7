use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpotsBadgeProps {
    pub spots: u32,
}

/// Pulsing "only N spots left" pill pinned to the hero's corner.
#[function_component(SpotsBadge)]
pub fn spots_badge(props: &SpotsBadgeProps) -> Html {
    html! {
        <div class="spots-badge">
            <div class="spots-badge-ping"></div>
            <div class="spots-badge-pill">
                <i class="fas fa-triangle-exclamation"></i>
                <span>{format!("Apenas {} vagas restantes!", props.spots)}</span>
            </div>
        </div>
    }
}
