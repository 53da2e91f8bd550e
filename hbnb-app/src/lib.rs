use leptos::*;
use leptos_router::*;

use hbnb_core::{listing::ListingState, session::PageKind};
use hbnb_frontend_api as api;

mod cookie;

mod pages;
use pages::*;

mod components;
use components::*;

const API_URL: &str = match option_env!("HBNB_API_URL") {
    Some(url) => url,
    None => api::DEFAULT_API_URL,
};

#[component]
#[must_use]
pub fn App() -> impl IntoView {
    // -- signals -- //

    let user_api = RwSignal::new(None::<api::UserApi>);
    let logged_in = Signal::derive(move || user_api.with(Option::is_some));
    let listing = RwSignal::new(ListingState::default());

    // -- init API -- //

    let public_api = api::PublicApi::new(API_URL);

    match cookie::read_token() {
        Ok(Some(token)) => {
            user_api.set(Some(api::UserApi::new(API_URL, token)));
        }
        Ok(None) => {
            log::debug!("No session token available");
        }
        Err(err) => {
            log::warn!("Unable to read session cookie: {err}");
        }
    }

    log::debug!("User is logged in: {}", logged_in.get_untracked());

    view! {
      <Router>
        <NavBar logged_in />
        <main>
          <Routes>
            <Route
              path=Page::Home.path()
              view=move || view! {
                <Home
                  public_api
                  user_api = user_api.into()
                  listing
                />
              }
            />
            <Route
              path=Page::Login.path()
              view=move || {
                let navigate = use_navigate();
                view! {
                  <Login
                    public_api
                    on_success = move |api: api::UserApi, navigate_to: PageKind| {
                        log::info!("Successfully logged in");
                        user_api.set(Some(api));
                        navigate(Page::from(navigate_to).path(), NavigateOptions::default());
                    } />
                }
              }
            />
            <Route
              path=Page::Place.path()
              view=move || view! { <PlaceDetails user_api = user_api.into() /> }
            />
          </Routes>
        </main>
      </Router>
    }
}
