pub mod api;
pub mod base;
pub mod components;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    auth::{Auth, AuthMode},
    dashboard::Dashboard,
    home::Home,
    not_found::NotFound,
    play::WheelGamePage,
    settings::Settings,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/play/:wheel_id")]
    Play { wheel_id: String },
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Auth mode={AuthMode::Login} /> },
        Route::Signup => html! { <Auth mode={AuthMode::Signup} /> },
        Route::Play { wheel_id } => html! { <WheelGamePage {wheel_id} /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Settings => html! { <Settings /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
