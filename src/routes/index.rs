use crate::routes::students::LIST_STUDENTS_URL;
use axum::response::Redirect;

pub async fn get_index_route() -> Redirect {
    Redirect::to(LIST_STUDENTS_URL)
}
