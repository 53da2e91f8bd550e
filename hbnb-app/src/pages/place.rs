use leptos::*;
use leptos_router::*;

use hbnb_boundary::Place;
use hbnb_core::{
    place::{amenity_names, image_src, location_label, owner_name, price_label},
    session::PageLoad,
};
use hbnb_frontend_api::UserApi;

use crate::{components::*, Page};

#[component]
pub fn PlaceDetails(user_api: Signal<Option<UserApi>>) -> impl IntoView {
    // -- signals -- //

    let query = use_query_map();
    let place_id = create_memo(move |_| query.with(|q| q.get("id").cloned()));
    let place = create_rw_signal(None::<Place>);
    let fetch_error = create_rw_signal(None::<String>);

    // -- memos -- //

    let load = create_memo(move |_| {
        let authenticated = user_api.with(Option::is_some);
        place_id.with(|id| PageLoad::plan(authenticated, Page::Place.into(), id.as_deref()))
    });

    // -- actions -- //

    let fetch_place = create_action(move |id: &String| {
        let id = id.to_owned();
        async move {
            let Some(api) = user_api.get_untracked() else {
                log::warn!("Unable to fetch place {id}: not logged in");
                return;
            };
            match api.place(&id).await {
                Ok(p) => {
                    if p.id != id {
                        log::warn!("Requested place {id} but received place {}", p.id);
                    }
                    fetch_error.set(None);
                    place.set(Some(p));
                }
                Err(err) => {
                    log::warn!("Unable to fetch place {id}: {err}");
                    fetch_error.set(Some(err.message()));
                }
            }
        }
    });

    // -- effects -- //

    let navigate = use_navigate();
    create_effect(move |_| {
        let load = load.get();
        if load.redirect_home {
            log::info!("Place details are only available after login");
            let navigate = navigate.clone();
            request_animation_frame(move || {
                navigate(
                    Page::Home.path(),
                    NavigateOptions {
                        replace: true,
                        ..Default::default()
                    },
                );
            });
            return;
        }
        if let Some(id) = load.fetch_place {
            fetch_place.dispatch(id);
        }
    });

    // -- callbacks -- //

    let on_review_added = move |id: String| fetch_place.dispatch(id);

    view! {
      <section class="container p-6 mx-auto">
        { move || fetch_error.get().map(|err| view! {
            <p class="mb-4 text-red-700">{ err }</p>
        })}
        <div id="place-details">
        { move || {
            let pending = load.with(|l| l.fetch_place.is_some());
            match fetch_state(pending, fetch_error.with(Option::is_some), place.get()) {
              FetchState::Loaded(place) => view! { <PlaceInfo place /> }.into_view(),
              FetchState::Loading => view! { <p class="text-gray-500">"Loading..."</p> }.into_view(),
              FetchState::NotFound => view! {
                <h2 class="text-2xl font-bold text-gray-900">"Place not found"</h2>
              }.into_view(),
            }
          }
        }
        </div>
        <div id="reviews" class="mt-8">
          <h3 class="text-xl font-semibold mb-4">"Reviews"</h3>
          { move || place.with(|p| p.as_ref().map(|p| p.reviews.clone())).map(|reviews| view! {
              <ReviewList reviews />
          })}
        </div>
        { move || load.with(|l| l.show_review_form).then(|| {
            let place_id = load.with(|l| l.fetch_place.clone()).unwrap_or_default();
            view! {
              <div id="add-review" class="mt-8">
                <ReviewForm place_id user_api on_success = on_review_added />
              </div>
            }
        })}
      </section>
    }
}

#[derive(Debug, PartialEq)]
enum FetchState {
    Loading,
    Loaded(Place),
    NotFound,
}

fn fetch_state(pending: bool, failed: bool, place: Option<Place>) -> FetchState {
    match place {
        Some(place) => FetchState::Loaded(place),
        None if pending && !failed => FetchState::Loading,
        None => FetchState::NotFound,
    }
}

#[component]
fn PlaceInfo(place: Place) -> impl IntoView {
    let src = image_src(&place).to_string();
    let amenities = amenity_names(&place);
    let location = location_label(&place);
    let Place {
        title,
        description,
        price,
        owner,
        ..
    } = place;

    view! {
      <div class="place-info">
        <img src = src alt = "place image" class="placedetails-img w-full h-96 object-cover" />
        <h2 class="text-3xl font-bold tracking-tight text-gray-900 mt-4">{ title }</h2>
        <dl class="mt-6 grid grid-cols-1 gap-4 sm:grid-cols-2">
          { owner.map(|owner| view! {
            <div class="border-t border-gray-200 pt-4">
              <dt class="font-medium text-gray-900">"Host"</dt>
              <dd class="mt-2 text-sm text-gray-500">{ owner_name(&owner) }</dd>
            </div>
          })}
          { price.map(|price| view! {
            <div class="border-t border-gray-200 pt-4">
              <dt class="font-medium text-gray-900">"Price per night"</dt>
              <dd class="mt-2 text-sm text-gray-500">{ price_label(price) }</dd>
            </div>
          })}
          { description.map(|description| view! {
            <div class="border-t border-gray-200 pt-4">
              <dt class="font-medium text-gray-900">"Description"</dt>
              <dd class="mt-2 text-sm text-gray-500">{ description }</dd>
            </div>
          })}
          { location.map(|location| view! {
            <div class="border-t border-gray-200 pt-4">
              <dt class="font-medium text-gray-900">"Location"</dt>
              <dd class="mt-2 text-sm text-gray-500">{ location }</dd>
            </div>
          })}
          { (!amenities.is_empty()).then(|| view! {
            <div class="border-t border-gray-200 pt-4">
              <dt class="font-medium text-gray-900">"Amenities"</dt>
              <dd class="mt-2 text-sm text-gray-500">{ amenities }</dd>
            </div>
          })}
        </dl>
      </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place() -> Place {
        Place {
            id: "42".to_string(),
            title: "Beach house".to_string(),
            description: None,
            price: None,
            latitude: None,
            longitude: None,
            image: None,
            owner: None,
            amenities: vec![],
            reviews: vec![],
        }
    }

    #[test]
    fn loading_until_the_place_arrives() {
        assert_eq!(fetch_state(true, false, None), FetchState::Loading);
        assert_eq!(fetch_state(true, false, Some(place())), FetchState::Loaded(place()));
    }

    #[test]
    fn failed_fetch_is_not_loading() {
        assert_eq!(fetch_state(true, true, None), FetchState::NotFound);
    }

    #[test]
    fn missing_id_is_not_found() {
        assert_eq!(fetch_state(false, false, None), FetchState::NotFound);
    }

    #[test]
    fn keep_showing_a_loaded_place_after_a_failed_refetch() {
        assert_eq!(fetch_state(true, true, Some(place())), FetchState::Loaded(place()));
    }
}
