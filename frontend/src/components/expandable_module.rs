use yew::prelude::*;

use crate::content::CourseModule;

#[derive(Properties, PartialEq)]
pub struct ExpandableModuleProps {
    pub module: &'static CourseModule,
    pub expanded: bool,
    pub on_toggle: Callback<u32>,
}

#[function_component(ExpandableModule)]
pub fn expandable_module(props: &ExpandableModuleProps) -> Html {
    let module = props.module;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let number = module.number;
        Callback::from(move |_: MouseEvent| on_toggle.emit(number))
    };

    html! {
        <div class={classes!("module-card", props.expanded.then_some("expanded"))}>
            <div class="module-header" {onclick}>
                <div class="module-title-group">
                    <div class="module-number">{module.number.to_string()}</div>
                    <div>
                        <h3>{module.title}</h3>
                        if !props.expanded {
                            <p class="module-summary">{module.description}</p>
                        }
                    </div>
                </div>
                <div class="module-icons">
                    <span class="module-emoji">{module.icon}</span>
                    <i class={if props.expanded { "fas fa-chevron-up" } else { "fas fa-chevron-down" }}></i>
                </div>
            </div>
            if props.expanded {
                <div class="module-body">
                    <p>{module.description}</p>
                    <h4>{"O que você vai aprender:"}</h4>
                    <ul>
                        { for module.lessons.iter().map(|lesson| html! {
                            <li>
                                <i class="fas fa-circle-check"></i>
                                <span>{*lesson}</span>
                            </li>
                        }) }
                    </ul>
                </div>
            }
        </div>
    }
}
