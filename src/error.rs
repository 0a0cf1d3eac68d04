use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum TrackerError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    Migrate { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse env var `{}` as a number", name))]
    ParseEnvVar {
        source: ParseIntError,
        name: &'static str,
    },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i32 },
    #[snafu(display("Missing request parameter `{}`", name))]
    MissingParameter { name: &'static str },
    #[snafu(display("Unable to parse student ID {:?}", original))]
    ParseStudentId {
        source: ParseIntError,
        original: String,
    },
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let basic_error = |desc: String| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Student Tracker Error: "}
                    span {(desc)}
                }
            }
        };

        //every failure is a generic server error to the caller, the variant is only for the logs
        error!(?self, "Error!");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            basic_error(self.to_string()),
        )
            .into_response()
    }
}
