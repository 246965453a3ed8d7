use yew::prelude::*;
use yew_router::prelude::*;

mod components;
mod config;
mod content;
mod error;
mod hooks;
mod pages;
mod utils;
mod widgets;

use pages::landing::Landing;
use pages::legal::{NotFound, Privacy, Terms};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/termos")]
    Terms,
    #[at("/privacidade")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::Terms => html! { <Terms /> },
        Route::Privacy => html! { <Privacy /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    // Attribution scripts are best-effort; the page renders either way.
    if let Err(e) = utils::tracking::install(&config::get().tracking) {
        log::warn!("Tracking scripts not installed: {}", e);
    }

    yew::Renderer::<App>::new().render();
}
