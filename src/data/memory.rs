use crate::{
    data::{Student, StudentForm, StudentStore, name_search_pattern},
    error::{MissingStudentSnafu, TrackerResult},
};
use async_trait::async_trait;
use snafu::OptionExt;
use tokio::sync::Mutex;

/// In-memory [`StudentStore`] for exercising the routes without a database.
///
/// Mirrors the postgres store, including the suffix-only name search.
#[derive(Debug, Default)]
pub struct InMemoryStudentStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i32,
    students: Vec<Student>,
}

impl InMemoryStudentStore {
    pub async fn with_students(students: impl IntoIterator<Item = StudentForm>) -> Self {
        let store = Self::default();
        for student in students {
            store.insert(student).await.expect("in-memory insert can't fail");
        }
        store
    }
}

/// Postgres `LIKE` matching: `%` is any run of characters, `_` is exactly one, and `\` escapes.
fn like_matches(pattern: &str, value: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let value: Vec<char> = value.chars().collect();
    like_matches_from(&pattern, &value)
}

fn like_matches_from(pattern: &[char], value: &[char]) -> bool {
    match pattern {
        [] => value.is_empty(),
        ['%', rest @ ..] => (0..=value.len()).any(|skip| like_matches_from(rest, &value[skip..])),
        ['_', rest @ ..] => !value.is_empty() && like_matches_from(rest, &value[1..]),
        ['\\', literal, rest @ ..] | [literal, rest @ ..] => {
            value.first() == Some(literal) && like_matches_from(rest, &value[1..])
        }
    }
}

fn sorted_by_last_name(mut students: Vec<Student>) -> Vec<Student> {
    students.sort_by(|a, b| a.last_name.cmp(&b.last_name));
    students
}

#[async_trait]
impl StudentStore for InMemoryStudentStore {
    async fn get_all(&self) -> TrackerResult<Vec<Student>> {
        Ok(sorted_by_last_name(self.inner.lock().await.students.clone()))
    }

    async fn get_by_id(&self, id: i32) -> TrackerResult<Student> {
        self.inner
            .lock()
            .await
            .students
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .context(MissingStudentSnafu { id })
    }

    async fn insert(&self, to_be_added: StudentForm) -> TrackerResult<i32> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let id = inner.next_id;
        inner.students.push(to_be_added.with_id(id));
        Ok(id)
    }

    async fn update(&self, student: Student) -> TrackerResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(existing) = inner.students.iter_mut().find(|s| s.id == student.id) {
            *existing = student;
        }
        Ok(())
    }

    async fn remove(&self, id: i32) -> TrackerResult<()> {
        self.inner.lock().await.students.retain(|s| s.id != id);
        Ok(())
    }

    async fn search_by_name(&self, name: Option<&str>) -> TrackerResult<Vec<Student>> {
        let Some(pattern) = name_search_pattern(name) else {
            return self.get_all().await;
        };

        let matching = self
            .inner
            .lock()
            .await
            .students
            .iter()
            .filter(|s| {
                like_matches(&pattern, &s.first_name.to_lowercase())
                    || like_matches(&pattern, &s.last_name.to_lowercase())
            })
            .cloned()
            .collect();
        Ok(sorted_by_last_name(matching))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(first_name: &str, last_name: &str) -> StudentForm {
        StudentForm {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
        }
    }

    #[test]
    fn like_wildcards() {
        assert!(like_matches("%nolan", "mcnolan"));
        assert!(!like_matches("%nolan", "nolanne"));
        assert!(like_matches("%_olan", "nolan"));
        assert!(!like_matches("%_olan", "olan"));
        assert!(like_matches("%n%n", "nolan"));
        assert!(like_matches("%", ""));
        assert!(!like_matches("%\\_olan", "nolan"));
        assert!(like_matches("%\\_olan", "x_olan"));
    }

    #[tokio::test]
    async fn search_treats_underscore_as_any_character() {
        let store =
            InMemoryStudentStore::with_students([form("Amy", "Nolan"), form("Bob", "Smith")]).await;

        let found = store.search_by_name(Some("_olan")).await.unwrap();
        assert_eq!(found, [form("Amy", "Nolan").with_id(1)]);
    }

    #[tokio::test]
    async fn search_treats_percent_as_any_run() {
        let store = InMemoryStudentStore::with_students([
            form("Amy", "Nolan"),
            form("Nolanne", "Jones"),
            form("Bob", "Smith"),
        ])
        .await;

        let last_names: Vec<_> = store
            .search_by_name(Some("n%e"))
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.last_name)
            .collect();
        assert_eq!(last_names, ["Jones"]);
    }
}
