//! The `/students` endpoint. Everything is driven by the `command` parameter, which picks exactly
//! one store operation and then either renders a page or redirects back to the list.

use crate::{
    data::{Student, StudentForm, StudentStore},
    error::{MissingParameterSnafu, ParseStudentIdSnafu, TrackerResult},
    routes::student_pages::{add_student_form, list_students, update_student_form},
    state::TrackerState,
};
use axum::{
    Form,
    extract::{Query, State, rejection::FormRejection},
    response::{IntoResponse, Redirect, Response},
};
use maud::Markup;
use snafu::{OptionExt, ResultExt};

pub const LIST_STUDENTS_URL: &str = "/students?command=LIST";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    List,
    Load,
    Update,
    Delete,
    Search,
    Add,
}

impl Command {
    /// Case-sensitive, `None` for anything unrecognised.
    pub fn parse(raw: &str) -> Option<Self> {
        Some(match raw {
            "LIST" => Self::List,
            "LOAD" => Self::Load,
            "UPDATE" => Self::Update,
            "DELETE" => Self::Delete,
            "SEARCH" => Self::Search,
            "ADD" => Self::Add,
            _ => return None,
        })
    }
}

/// Raw `key=value` pairs, in the order they were sent.
type ParamPairs = Vec<(String, String)>;

#[derive(Debug, Default)]
pub struct StudentParams {
    pub command: Option<String>,
    pub student_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub the_search_name: Option<String>,
}

impl StudentParams {
    fn command(&self) -> Option<Command> {
        self.command.as_deref().and_then(Command::parse)
    }

    fn student_id(&self) -> TrackerResult<i32> {
        let raw = self
            .student_id
            .as_deref()
            .context(MissingParameterSnafu { name: "studentId" })?;
        raw.parse().context(ParseStudentIdSnafu { original: raw })
    }

    fn into_student_form(self) -> TrackerResult<StudentForm> {
        Ok(StudentForm {
            first_name: self
                .first_name
                .context(MissingParameterSnafu { name: "firstName" })?,
            last_name: self
                .last_name
                .context(MissingParameterSnafu { name: "lastName" })?,
            email: self.email.context(MissingParameterSnafu { name: "email" })?,
        })
    }
}

/// Unknown keys are ignored, and when a key is repeated the first value wins.
impl FromIterator<(String, String)> for StudentParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "command" => &mut params.command,
                "studentId" => &mut params.student_id,
                "firstName" => &mut params.first_name,
                "lastName" => &mut params.last_name,
                "email" => &mut params.email,
                "theSearchName" => &mut params.the_search_name,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// What to send back once the command has run.
#[derive(Debug)]
pub enum StudentView {
    Listing {
        students: Vec<Student>,
        search: Option<String>,
    },
    EditForm(Student),
    RedirectToList,
}

impl StudentView {
    pub fn respond(self, state: &TrackerState) -> Response {
        match self {
            Self::Listing { students, search } => state
                .render("Students", list_students(students, search.as_deref()))
                .into_response(),
            Self::EditForm(student) => state
                .render("Update Student", update_student_form(&student))
                .into_response(),
            Self::RedirectToList => Redirect::to(LIST_STUDENTS_URL).into_response(),
        }
    }
}

pub async fn dispatch_get(state: &TrackerState, params: StudentParams) -> TrackerResult<StudentView> {
    let command = params.command();
    debug!(?command, raw = ?params.command, "Handling GET student command");

    match command {
        Some(Command::Load) => load_student(state, &params).await,
        Some(Command::Update) => update_student(state, params).await,
        Some(Command::Delete) => delete_student(state, &params).await,
        Some(Command::Search) => search_students(state, params).await,
        Some(Command::List | Command::Add) | None => list_all_students(state).await,
    }
}

pub async fn dispatch_post(
    state: &TrackerState,
    params: StudentParams,
) -> TrackerResult<StudentView> {
    let command = params.command();
    debug!(?command, raw = ?params.command, "Handling POST student command");

    match command {
        Some(Command::Add) => add_student(state, params).await,
        _ => list_all_students(state).await,
    }
}

async fn list_all_students(state: &TrackerState) -> TrackerResult<StudentView> {
    Ok(StudentView::Listing {
        students: state.get_all().await?,
        search: None,
    })
}

async fn load_student(state: &TrackerState, params: &StudentParams) -> TrackerResult<StudentView> {
    let id = params.student_id()?;
    Ok(StudentView::EditForm(state.get_by_id(id).await?))
}

async fn update_student(state: &TrackerState, params: StudentParams) -> TrackerResult<StudentView> {
    let id = params.student_id()?;
    let student = params.into_student_form()?.with_id(id);
    state.update(student).await?;

    list_all_students(state).await
}

async fn delete_student(state: &TrackerState, params: &StudentParams) -> TrackerResult<StudentView> {
    let id = params.student_id()?;
    state.remove(id).await?;

    list_all_students(state).await
}

async fn search_students(state: &TrackerState, params: StudentParams) -> TrackerResult<StudentView> {
    let search = params.the_search_name;
    let students = state.search_by_name(search.as_deref()).await?;

    Ok(StudentView::Listing { students, search })
}

async fn add_student(state: &TrackerState, params: StudentParams) -> TrackerResult<StudentView> {
    state.insert(params.into_student_form()?).await?;

    //redirect rather than render so that refreshing doesn't add them again
    Ok(StudentView::RedirectToList)
}

pub async fn get_students(
    State(state): State<TrackerState>,
    Query(query): Query<ParamPairs>,
) -> TrackerResult<Response> {
    let view = dispatch_get(&state, query.into_iter().collect()).await?;
    Ok(view.respond(&state))
}

pub async fn post_students(
    State(state): State<TrackerState>,
    Query(query): Query<ParamPairs>,
    form: Result<Form<ParamPairs>, FormRejection>,
) -> TrackerResult<Response> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "No usable form body, only using query parameters");
            Vec::new()
        }
    };

    //body parameters come first so they win over the query string
    let params = form.into_iter().chain(query).collect();
    let view = dispatch_post(&state, params).await?;
    Ok(view.respond(&state))
}

pub async fn get_add_student_form(State(state): State<TrackerState>) -> Markup {
    state.render("Add Student", add_student_form())
}
