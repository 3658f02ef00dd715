use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub deleted_at: Option<OffsetDateTime>,
    pub name: String,
    pub age: i64,
    pub class: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub age: i64,
    pub class: String,
    pub email: String,
}

/// Client-supplied fields. Anything absent (or `null`) is left alone, and unknown keys such as `id` are dropped.
#[derive(Debug, Default, Deserialize)]
pub struct StudentFields {
    pub name: Option<String>,
    pub age: Option<i64>,
    pub class: Option<String>,
    pub email: Option<String>,
}

impl StudentFields {
    pub fn merge_into(self, student: &mut Student) {
        let Self {
            name,
            age,
            class,
            email,
        } = self;

        if let Some(name) = name {
            student.name = name;
        }
        if let Some(age) = age {
            student.age = age;
        }
        if let Some(class) = class {
            student.class = class;
        }
        if let Some(email) = email {
            student.email = email;
        }
    }
}

impl From<StudentFields> for NewStudent {
    fn from(StudentFields { name, age, class, email }: StudentFields) -> Self {
        Self {
            name: name.unwrap_or_default(),
            age: age.unwrap_or_default(),
            class: class.unwrap_or_default(),
            email: email.unwrap_or_default(),
        }
    }
}
