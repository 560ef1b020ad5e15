use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod scheduling;
mod styles;
mod assessment {
    pub mod analysis;
    pub mod flow;
    pub mod form;
    pub mod gemini;
}
mod components {
    pub mod background_particles;
    pub mod cookie_banner;
    pub mod legal_modal;
    pub mod neural_brain;
    pub mod section_wrapper;
}
mod pages {
    pub mod landing;
    pub mod strategy;
    pub mod termsprivacy;
}

use components::cookie_banner::CookieBanner;
use components::neural_brain::NeuralBrain;
use consent::ConsentStore;
use pages::landing::Landing;
use pages::termsprivacy::LegalDoc;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy modal");
            html! { <Landing legal={Some(LegalDoc::Privacy)} /> }
        }
        Route::Terms => {
            info!("Rendering Terms modal");
            html! { <Landing legal={Some(LegalDoc::Terms)} /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

pub fn scroll_to_section(id: &str) {
    let Some(element) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Anchor handler that smooth-scrolls instead of jumping to `#id`.
pub fn section_link(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let scroll_callback = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 20.0);
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    let _ = window.add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }

                move || {
                    if let Some(window) = &window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="container nav-content">
                <a href="#hero" onclick={section_link("hero")} class="brand">
                    <NeuralBrain class={classes!("brain-md")} />
                    <span class="brand-name">{"HyzaLabs"}</span>
                </a>
                <nav class="nav-links">
                    <a href="#gaps" onclick={section_link("gaps")}>{"Inefficiencies"}</a>
                    <a href="#solutions" onclick={section_link("solutions")}>{"Our Solutions"}</a>
                    <a href="#partnership" onclick={section_link("partnership")}>{"Onboarding"}</a>
                    <a href="#strategy" onclick={section_link("strategy")} class="nav-cta">{"Strategy Session"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let consent = use_memo(|_| ConsentStore::browser(), ());
    let consented = use_state(|| consent.has_consented());

    let accept_cookies = {
        let consent = consent.clone();
        let consented = consented.clone();
        Callback::from(move |_: ()| {
            consent.grant_consent();
            consented.set(true);
        })
    };

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            if !*consented {
                <CookieBanner on_accept={accept_cookies} />
            }
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
