use yew::prelude::*;

use crate::content::Bonus;

#[derive(Properties, PartialEq)]
pub struct RevealableBonusProps {
    pub index: usize,
    pub bonus: &'static Bonus,
    pub revealed: bool,
    pub on_reveal: Callback<usize>,
}

#[function_component(RevealableBonus)]
pub fn revealable_bonus(props: &RevealableBonusProps) -> Html {
    let bonus = props.bonus;
    let reveal = {
        let on_reveal = props.on_reveal.clone();
        let index = props.index;
        Callback::from(move |_: MouseEvent| on_reveal.emit(index))
    };

    html! {
        <div class={classes!("bonus-card", if props.revealed { "revealed" } else { "locked" })}>
            <div class="bonus-content">
                <div class="bonus-icon">
                    <i class={bonus.icon}></i>
                </div>
                <div>
                    <div class="bonus-title">
                        <h3>{bonus.title}</h3>
                        if props.revealed {
                            <span class="badge badge-free">{"GRÁTIS"}</span>
                        }
                    </div>
                    <p class="bonus-description">{bonus.description}</p>
                    <p class="bonus-value">
                        { if props.revealed { format!("Valor: {}", bonus.value) } else { "???".to_string() } }
                    </p>
                </div>
            </div>
            if !props.revealed {
                <button class="bonus-reveal-button" onclick={reveal}>
                    <i class="fas fa-lock"></i>
                    {format!("Revelar Bônus #{}", props.index + 1)}
                </button>
            }
        </div>
    }
}
