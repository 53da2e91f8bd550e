mod credentials;
mod navbar;
mod place_card;
mod price_filter;
mod review_form;
mod reviews;

pub use self::{
    credentials::*, navbar::*, place_card::*, price_filter::*, review_form::*, reviews::*,
};
