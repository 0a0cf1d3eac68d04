use crate::error::TrackerResult;
use async_trait::async_trait;
use std::fmt::Debug;

pub mod postgres;
pub mod student;

#[cfg(test)]
pub mod memory;

pub use student::{Student, StudentForm};

/// Storage for [`Student`]s. Every method is one statement against the store.
#[async_trait]
pub trait StudentStore: Debug + Send + Sync {
    /// All students, ordered by last name.
    async fn get_all(&self) -> TrackerResult<Vec<Student>>;
    /// Fails with [`crate::error::TrackerError::MissingStudent`] if no student has that ID.
    async fn get_by_id(&self, id: i32) -> TrackerResult<Student>;
    async fn insert(&self, to_be_added: StudentForm) -> TrackerResult<i32>;
    /// Updating an ID that doesn't exist is not an error, it just changes nothing.
    async fn update(&self, student: Student) -> TrackerResult<()>;
    async fn remove(&self, id: i32) -> TrackerResult<()>;
    /// Blank (or missing) names behave like [`StudentStore::get_all`].
    ///
    /// Otherwise matches students whose lowercased first or last name *ends with* the lowercased
    /// search text - see [`name_search_pattern`].
    async fn search_by_name(&self, name: Option<&str>) -> TrackerResult<Vec<Student>>;
}

/// The `LIKE` pattern for a name search, or `None` if the search should list everyone.
///
/// The wildcard only goes in front, so `"nolan"` matches `"McNolan"` but not `"Nolanne"`.
/// `%` and `_` in the search text are passed through as wildcards.
pub fn name_search_pattern(name: Option<&str>) -> Option<String> {
    let name = name?;
    if name.trim().is_empty() {
        return None;
    }

    Some(format!("%{}", name.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_search_lists_everyone() {
        assert_eq!(name_search_pattern(None), None);
        assert_eq!(name_search_pattern(Some("")), None);
        assert_eq!(name_search_pattern(Some("  \t ")), None);
    }

    #[test]
    fn search_pattern_is_a_lowercased_suffix_match() {
        assert_eq!(name_search_pattern(Some("Nolan")).as_deref(), Some("%nolan"));
        assert_eq!(name_search_pattern(Some("NOLAN")).as_deref(), Some("%nolan"));
    }

    #[test]
    fn like_wildcards_in_search_text_are_not_escaped() {
        assert_eq!(name_search_pattern(Some("_olan")).as_deref(), Some("%_olan"));
        assert_eq!(name_search_pattern(Some("N%n")).as_deref(), Some("%n%n"));
    }

    #[test]
    fn search_text_is_not_trimmed_once_non_blank() {
        assert_eq!(name_search_pattern(Some(" Amy ")).as_deref(), Some("% amy "));
    }
}
