use leptos::*;

use hbnb_boundary::Place;
use hbnb_core::place::{image_src, price_label};

#[component]
pub fn PlaceCard<F>(place: Place, on_details: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let src = image_src(&place).to_string();
    let Place {
        id, title, price, ..
    } = place;

    view! {
      <div class="place-card bg-white shadow rounded-lg p-4">
        <h2 class="font-bold text-lg">{ title }</h2>
        <img src = src alt = "place image" class="place-img w-full h-48 object-cover my-2" />
        { price.map(|price| view! {
            <p>"Price per night: " <strong>{ price_label(price) }</strong></p>
        })}
        <button
          class="details-button mt-2 px-4 py-2 rounded bg-gray-100 hover:bg-gray-200"
          on:click = move |_| on_details(id.clone())
        >
          "View Details"
        </button>
      </div>
    }
}
