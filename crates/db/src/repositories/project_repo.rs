//! Repository for the `projects` table.

use makerfest_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{Project, UpsertProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, email, student_name, class_group, project_title, problem_statement, \
    project_idea, materials, how_it_works, challenges, lessons_learned, \
    future_scope, image_path, theme_id, status, poster_url, poster_public_id, \
    created_at";

/// Provides data access for project records.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a record by the submitter's email. The student self-view.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE email = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Find a record by its internal ID. The teacher-specific view.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new record, letting the database assign the id.
    ///
    /// A concurrent insert for the same email violates `uq_projects_email`;
    /// callers surface that as a conflict rather than retrying.
    pub async fn insert(pool: &PgPool, input: &UpsertProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (
                email, student_name, class_group, project_title, problem_statement,
                project_idea, materials, how_it_works, challenges, lessons_learned,
                future_scope, image_path, theme_id, status
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        bind_fields(sqlx::query_as::<_, Project>(&query), input)
            .fetch_one(pool)
            .await
    }

    /// Overwrite every caller-owned field of the record keyed by email.
    ///
    /// Full-replace semantics: the id, the poster reference pair, and
    /// `created_at` are untouched; everything else takes the new value.
    /// Returns `None` if no row with that email exists.
    pub async fn update_by_email(
        pool: &PgPool,
        input: &UpsertProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                student_name = $2, class_group = $3, project_title = $4,
                problem_statement = $5, project_idea = $6, materials = $7,
                how_it_works = $8, challenges = $9, lessons_learned = $10,
                future_scope = $11, image_path = $12, theme_id = $13, status = $14
             WHERE email = $1
             RETURNING {COLUMNS}"
        );
        bind_fields(sqlx::query_as::<_, Project>(&query), input)
            .fetch_optional(pool)
            .await
    }

    /// Submitted projects for the teacher list view, ordered by
    /// `(class_group, student_name)`, optionally narrowed to one class.
    pub async fn list_submitted(
        pool: &PgPool,
        class_filter: Option<&str>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        match class_filter {
            Some(class) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects
                     WHERE status = 'submitted' AND class_group = $1
                     ORDER BY class_group, student_name"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(class)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects
                     WHERE status = 'submitted'
                     ORDER BY class_group, student_name"
                );
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }

    /// Merge the published poster reference back into a record.
    ///
    /// Returns `true` if a row was updated.
    pub async fn set_poster(
        pool: &PgPool,
        id: DbId,
        poster_url: &str,
        poster_public_id: &str,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE projects SET poster_url = $2, poster_public_id = $3 WHERE id = $1")
                .bind(id)
                .bind(poster_url)
                .bind(poster_public_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}

/// Bind the shared `($1..$14)` field tuple for insert/update queries.
fn bind_fields<'q>(
    query: sqlx::query::QueryAs<'q, sqlx::Postgres, Project, sqlx::postgres::PgArguments>,
    input: &'q UpsertProject,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, Project, sqlx::postgres::PgArguments> {
    query
        .bind(&input.email)
        .bind(&input.student_name)
        .bind(&input.class_group)
        .bind(&input.project_title)
        .bind(&input.problem_statement)
        .bind(&input.project_idea)
        .bind(&input.materials)
        .bind(&input.how_it_works)
        .bind(&input.challenges)
        .bind(&input.lessons_learned)
        .bind(&input.future_scope)
        .bind(&input.image_path)
        .bind(&input.theme_id)
        .bind(&input.status)
}
