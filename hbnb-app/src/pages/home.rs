use leptos::*;
use leptos_router::*;

use hbnb_core::{
    filter::PriceFilter,
    listing::ListingState,
    session::{ListingRequest, PageLoad},
};
use hbnb_frontend_api::{PublicApi, UserApi};

use crate::{components::*, Page};

#[component]
pub fn Home(
    public_api: PublicApi,
    user_api: Signal<Option<UserApi>>,
    listing: RwSignal<ListingState>,
) -> impl IntoView {
    // -- signals -- //

    let price_filter = create_rw_signal(PriceFilter::default());
    let fetch_error = create_rw_signal(None::<String>);

    // -- actions -- //

    let fetch_places = create_action(move |request: &ListingRequest| {
        let request = *request;
        async move {
            let Some(ticket) = listing.try_update(ListingState::begin_fetch) else {
                return;
            };
            let result = match (request, user_api.get_untracked()) {
                (ListingRequest::Authorized, Some(api)) => api.places().await,
                _ => public_api.places().await,
            };
            match result {
                Ok(places) => {
                    log::debug!("Fetched {} places", places.len());
                    listing.update(|state| {
                        if state.replace(ticket, places) {
                            fetch_error.set(None);
                        } else {
                            log::debug!("Discard outdated list of places");
                        }
                    });
                }
                Err(err) => {
                    log::warn!("Unable to fetch places: {err}");
                    if listing.with_untracked(|state| state.is_current(ticket)) {
                        fetch_error.set(Some(err.message()));
                    }
                }
            }
        }
    });

    // -- effects -- //

    create_effect(move |_| {
        let authenticated = user_api.with(Option::is_some);
        let load = PageLoad::plan(authenticated, Page::Home.into(), None);
        if let Some(request) = load.fetch_listings {
            fetch_places.dispatch(request);
        }
    });

    // -- memos -- //

    let visible_places =
        create_memo(move |_| listing.with(|state| state.filtered(price_filter.get())));

    // -- callbacks -- //

    let navigate = use_navigate();
    let on_details = move |id: String| {
        navigate(&Page::place_details(&id), NavigateOptions::default());
    };

    view! {
      <section class="container p-6 mx-auto">
        <div id="filter" class="flex justify-end mb-4">
          <PriceFilterSelect filter = price_filter />
        </div>
        { move || fetch_error.get().map(|err| view! {
            <p class="mb-4 text-red-700">{ err }</p>
        })}
        <div id="places-list" class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3">
          <For
            each = move || visible_places.get()
            key = |place| place.id.clone()
            children = move |place| {
              let on_details = on_details.clone();
              view! { <PlaceCard place on_details /> }
            }
          />
        </div>
        { move || {
            let nothing_to_show = listing.with(ListingState::is_loaded)
                && visible_places.with(Vec::is_empty);
            nothing_to_show.then(|| view! {
              <p class="py-2 text-gray-500">"No places match the selected price."</p>
            })
        }}
      </section>
    }
}
