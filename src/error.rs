use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RosterResult<T> = Result<T, RosterError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RosterError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse IP port"))]
    ParsePort { source: ParseIntError },
    #[snafu(display("{source}"))]
    ParseBody { source: serde_json::Error },
    #[snafu(display("Student not found"))]
    MissingStudent { id: String },
}

impl RosterError {
    pub fn status_code(&self) -> StatusCode {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        match self {
            Self::OpenDatabase { .. } | Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } | Self::ParsePort { .. } => ISE,
            Self::ParseBody { .. } => BI,
            Self::MissingStudent { .. } => NF,
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            error!(?self, "Error!");
        } else {
            warn!(?self, %status_code, "Rejected request");
        }

        // not-found from a raw RowNotFound still gets the student message
        let message = match &self {
            Self::MakeQuery {
                source: sqlx::Error::RowNotFound,
            } => "Student not found".to_string(),
            _ => self.to_string(),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_are_bad_requests_with_the_serde_message() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let expected = source.to_string();
        let err = RosterError::ParseBody { source };

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), expected);
    }

    #[test]
    fn missing_students_are_not_found() {
        let err = RosterError::MissingStudent { id: "7".into() };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Student not found");
    }

    #[test]
    fn row_not_found_maps_to_404_other_db_errors_to_500() {
        let nf = RosterError::MakeQuery {
            source: sqlx::Error::RowNotFound,
        };
        assert_eq!(nf.status_code(), StatusCode::NOT_FOUND);

        let closed = RosterError::MakeQuery {
            source: sqlx::Error::PoolClosed,
        };
        assert_eq!(closed.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
