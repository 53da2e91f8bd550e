use leptos::{ev, *};

use hbnb_boundary::NewReview;
use hbnb_core::{place::MAX_RATING, review::{ReviewDraft, SubmitOutcome}};
use hbnb_frontend_api::UserApi;

const DEFAULT_RATING: u8 = MAX_RATING;

#[component]
pub fn ReviewForm<F>(place_id: String, user_api: Signal<Option<UserApi>>, on_success: F) -> impl IntoView
where
    F: Fn(String) + 'static + Copy,
{
    let (text, set_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(DEFAULT_RATING.to_string());
    let (error, set_error) = create_signal(None::<String>);
    let (wait_for_response, set_wait_for_response) = create_signal(false);

    let submit_review = create_action(move |review: &NewReview| {
        let review = review.to_owned();
        async move {
            let Some(api) = user_api.get_untracked() else {
                set_error.set(Some("Please log in to add a review".to_string()));
                return;
            };
            set_wait_for_response.set(true);
            let result = api.create_review(&review).await.map_err(|err| err.message());
            set_wait_for_response.set(false);
            match SubmitOutcome::from_result(&review, result) {
                SubmitOutcome::Added { refetch_place } => {
                    log::info!("Added review for place {refetch_place}");
                    set_error.set(None);
                    set_text.set(String::new());
                    set_rating.set(DEFAULT_RATING.to_string());
                    on_success(refetch_place);
                }
                SubmitOutcome::Failed { message } => {
                    log::error!("Unable to add review for place {}: {message}", review.place_id);
                    set_error.set(Some(message));
                }
            }
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ReviewDraft {
            text: text.get_untracked(),
            rating: rating.get_untracked(),
        };
        match draft.validate(&place_id) {
            Ok(review) => submit_review.dispatch(review),
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
      <form id="review-form" on:submit = on_submit>
        <h3 class="text-xl font-semibold mb-4">"Add a review"</h3>
        { move || error.get().map(|err| view! {
          <p class="mb-4 text-red-700">{ err }</p>
        })}
        <div class="mb-4">
          <label for="review-text" class="block mb-1 text-gray-600">"Your review"</label>
          <textarea
            id="review-text"
            class="block w-full px-3 py-1.5 border border-gray-300 rounded"
            prop:value = move || text.get()
            prop:disabled = move || wait_for_response.get()
            on:input = move |ev| set_text.set(event_target_value(&ev))
          />
        </div>
        <div class="mb-4">
          <label for="rating" class="mr-2 text-gray-600">"Rating"</label>
          <select
            id="rating"
            class="py-1 px-2 border border-gray-300 rounded"
            prop:disabled = move || wait_for_response.get()
            on:change = move |ev| set_rating.set(event_target_value(&ev))
          >
            { (1..=MAX_RATING)
                .map(|value| {
                  let value = value.to_string();
                  let option_value = value.clone();
                  view! {
                    <option
                      value = value.clone()
                      prop:selected = move || rating.with(|r| *r == option_value)
                    >
                      { value }
                    </option>
                  }
                })
                .collect_view()
            }
          </select>
        </div>
        <button
          type="submit"
          prop:disabled = move || wait_for_response.get()
          class="px-6 py-2 rounded shadow-md bg-gray-100 hover:shadow-lg"
        >
          "Submit review"
        </button>
      </form>
    }
}
