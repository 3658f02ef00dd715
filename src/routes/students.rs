use crate::{
    data::student::{NewStudent, Student, StudentFields},
    error::{MissingStudentSnafu, ParseBodySnafu, RosterResult},
    state::RosterState,
};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
};
use serde_json::{Value, json};
use snafu::{OptionExt, ResultExt};

/// Looks up a live student by the raw path segment. Anything that isn't an integer id can't match a row.
async fn find_student(state: &RosterState, id: &str) -> RosterResult<Student> {
    let parsed = id.parse::<i64>().ok().context(MissingStudentSnafu { id })?;

    state
        .students()
        .get_from_db_by_id(parsed)
        .await?
        .context(MissingStudentSnafu { id })
}

//the body is read as raw bytes so a missing/odd content-type still gets parsed as JSON
fn parse_fields(body: &Bytes) -> RosterResult<StudentFields> {
    serde_json::from_slice(body).context(ParseBodySnafu)
}

pub async fn post_student(
    State(state): State<RosterState>,
    body: Bytes,
) -> RosterResult<Json<Student>> {
    let fields = parse_fields(&body)?;

    let student = state
        .students()
        .insert_into_database(NewStudent::from(fields))
        .await?;
    info!(id = student.id, "Created student");

    Ok(Json(student))
}

pub async fn get_students(State(state): State<RosterState>) -> RosterResult<Json<Vec<Student>>> {
    Ok(Json(state.students().get_all().await?))
}

pub async fn get_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Json<Student>> {
    Ok(Json(find_student(&state, &id).await?))
}

pub async fn put_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
    body: Bytes,
) -> RosterResult<Json<Student>> {
    let mut student = find_student(&state, &id).await?;

    parse_fields(&body)?.merge_into(&mut student);
    let student = state.students().save(&student).await?;
    info!(id = student.id, "Updated student");

    Ok(Json(student))
}

pub async fn delete_student(
    State(state): State<RosterState>,
    Path(id): Path<String>,
) -> RosterResult<Json<Value>> {
    let student = find_student(&state, &id).await?;

    state.students().soft_delete(student.id).await?;
    info!(id = student.id, "Soft-deleted student");

    Ok(Json(json!({ "message": "Student deleted successfully" })))
}
