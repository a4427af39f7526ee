use yew::prelude::*;
use yew_router::prelude::*;

pub mod components {
    pub mod counter;
    pub mod download;
    pub mod error_state;
    pub mod features;
    pub mod hero;
    pub mod modal;
    pub mod navbar;
    pub mod preview;
}
pub mod data {
    pub mod fetch;
    pub mod product;
}
pub mod pages {
    pub mod landing;
}
pub mod utils {
    pub mod format;
    pub mod observe;
}
pub mod config;
pub mod state;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <div class="not-found">
                <h1>{"404"}</h1>
                <p>{"This page does not exist."}</p>
                <a href="/">{"Back to the homepage"}</a>
            </div>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
