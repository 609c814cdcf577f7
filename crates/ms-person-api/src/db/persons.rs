//! Person table queries.

use ms_common::Person;
use sqlx::PgPool;

/// Person row returned from the database.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PersonRow {
    pub id: i64,
    pub name: Option<String>,
    pub age: i32,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Person {
            id: row.id,
            name: row.name,
            age: row.age,
        }
    }
}

impl From<&Person> for PersonRow {
    fn from(person: &Person) -> Self {
        PersonRow {
            id: person.id,
            name: person.name.clone(),
            age: person.age,
        }
    }
}

/// Insert a person, replacing `name` and `age` if the id already exists.
/// Returns the row as stored.
pub async fn upsert(pool: &PgPool, row: &PersonRow) -> Result<PersonRow, sqlx::Error> {
    sqlx::query_as::<_, PersonRow>(
        "INSERT INTO person (id, name, age) VALUES ($1, $2, $3)
         ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, age = EXCLUDED.age
         RETURNING id, name, age",
    )
    .bind(row.id)
    .bind(&row.name)
    .bind(row.age)
    .fetch_one(pool)
    .await
}

/// List every person, in whatever order the table scan yields.
pub async fn list_all(pool: &PgPool) -> Result<Vec<PersonRow>, sqlx::Error> {
    sqlx::query_as::<_, PersonRow>("SELECT id, name, age FROM person")
        .fetch_all(pool)
        .await
}
