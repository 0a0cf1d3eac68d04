use sqlx::FromRow;

/// A student row as stored in `public.student`.
#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// A student that has not been persisted yet, so has no ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl StudentForm {
    pub fn with_id(self, id: i32) -> Student {
        let Self {
            first_name,
            last_name,
            email,
        } = self;

        Student {
            id,
            first_name,
            last_name,
            email,
        }
    }
}
