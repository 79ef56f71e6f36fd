use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod clock;
mod config;
mod consent;
mod session;
mod storage;
#[cfg(test)]
mod testing;
mod analytics {
    pub mod dwell;
    pub mod event;
    pub mod tracker;
    pub mod transport;
    pub mod visitor;
}
mod interactions {
    pub mod binder;
    pub mod calculator;
    pub mod cta;
    pub mod intro;
    pub mod modal;
    pub mod region;
    pub mod stage;
}
mod components {
    pub mod hero;
    pub mod modals;
    pub mod privacy_banner;
    pub mod rent_calculator;
    pub mod stage_selector;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;
use session::{PageSession, SessionHandle};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(route: Route, session: SessionHandle) -> Html {
    match route {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing {session} /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        {"Back to managedby.app"}
                    </Link<Route>>
                </div>
            }
        },
    }
}


#[function_component]
fn App() -> Html {
    // One session per page load, shared by every component below
    let session = use_state(|| SessionHandle::new(PageSession::browser()));
    let session = (*session).clone();

    html! {
        <BrowserRouter>
            <Switch<Route> render={move |route: Route| switch(route, session.clone())} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting managedby landing page");
    yew::Renderer::<App>::new().render();
}
