use leptos::*;

use hbnb_core::filter::PriceFilter;

#[component]
pub fn PriceFilterSelect(filter: RwSignal<PriceFilter>) -> impl IntoView {
    view! {
      <label for="price-filter" class="mr-2 text-gray-600">"Max price:"</label>
      <select
        id="price-filter"
        class="py-1 px-2 border border-gray-300 rounded"
        on:change = move |ev| {
          let value = event_target_value(&ev);
          match value.parse::<PriceFilter>() {
            Ok(selected) => filter.set(selected),
            Err(err) => log::warn!("{err}"),
          }
        }
      >
        { PriceFilter::OPTIONS
            .into_iter()
            .map(|option| view! {
              <option
                value = option.to_string()
                prop:selected = move || filter.get() == option
              >
                { option.to_string() }
              </option>
            })
            .collect_view()
        }
      </select>
    }
}
