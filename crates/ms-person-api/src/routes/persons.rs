//! Person submission and listing endpoints.

use axum::Json;
use axum::extract::State;
use ms_common::Person;

use crate::db;
use crate::error::ApiResult;
use crate::state::AppState;

/// POST /persons — store a person, replacing any record with the same id.
pub async fn add_person(
    State(state): State<AppState>,
    Json(person): Json<Person>,
) -> ApiResult<Json<Person>> {
    let saved: Person = if let Some(pool) = &state.pool {
        db::persons::upsert(pool, &(&person).into()).await?.into()
    } else {
        let mut persons = state.persons.write().await;
        persons.insert(person.id, person.clone());
        person
    };

    tracing::info!(id = saved.id, "person saved");

    Ok(Json(saved))
}

/// GET /persons — list every stored person.
pub async fn list_persons(State(state): State<AppState>) -> ApiResult<Json<Vec<Person>>> {
    let persons: Vec<Person> = if let Some(pool) = &state.pool {
        db::persons::list_all(pool)
            .await?
            .into_iter()
            .map(Person::from)
            .collect()
    } else {
        state.persons.read().await.values().cloned().collect()
    };

    tracing::debug!(count = persons.len(), "persons listed");

    Ok(Json(persons))
}
