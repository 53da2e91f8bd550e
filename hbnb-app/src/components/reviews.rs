use leptos::*;

use hbnb_boundary::Review;
use hbnb_core::place::{rating_label, rating_stars, reviewer_name};

#[component]
pub fn ReviewList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! { <p class="text-gray-500">"No reviews yet."</p> }.into_view();
    }
    reviews
        .into_iter()
        .map(|review| view! { <ReviewCard review /> })
        .collect_view()
}

#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let name = reviewer_name(&review);
    let Review { text, rating, .. } = review;

    view! {
      <div class="review-card border-t border-gray-200 py-4">
        <h4 class="font-medium text-gray-900">{ name }</h4>
        <p class="mt-1 text-gray-600">{ text }</p>
        <p class="mt-1 text-sm text-gray-500" title = rating_label(rating)>
          "Rating: " { rating_stars(rating) } " (" { rating_label(rating) } ")"
        </p>
      </div>
    }
}
