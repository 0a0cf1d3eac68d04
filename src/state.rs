use crate::{
    config::DbConfig,
    data::StudentStore,
    error::{MigrateSnafu, OpenDatabaseSnafu, TrackerResult},
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{ops::Deref, sync::Arc};

/// Opens the pool and brings the schema up to date. The caller owns the pool from then on.
pub async fn open_pool(options: PgPoolOptions, db_config: &DbConfig) -> TrackerResult<PgPool> {
    let pool = options
        .max_connections(db_config.max_connections())
        .connect(&db_config.get_db_path())
        .await
        .context(OpenDatabaseSnafu)?;

    sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

    Ok(pool)
}

#[derive(Clone, Debug)]
pub struct TrackerState {
    students: Arc<dyn StudentStore>,
}

impl TrackerState {
    pub fn new(students: Arc<dyn StudentStore>) -> Self {
        Self { students }
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, page_title: &str, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { (page_title) " - Student Tracker" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center py-8 text-white" {
                    header class="mb-8" {
                        a href="/" class="text-3xl font-bold hover:text-blue-400" {"Student Tracker"}
                    }
                    (markup)
                }
            }
        }
    }
}

impl Deref for TrackerState {
    type Target = dyn StudentStore;

    fn deref(&self) -> &Self::Target {
        self.students.as_ref()
    }
}
