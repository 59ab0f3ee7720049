mod reviews;
mod set_active;

use crate::state::StateTrait;
use axum::{
    routing::{get, post},
    Router,
};

pub fn routes<S: StateTrait>() -> Router<S> {
    Router::new()
        .route("/setIsActive", post(set_active::set_is_active::<S>))
        .route("/getReview", get(reviews::get_user_reviews::<S>))
}
