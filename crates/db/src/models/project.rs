//! Project entity model and DTOs.

use makerfest_core::poster::PosterContent;
use makerfest_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    /// The submitter's email: the sole natural key, unique across rows.
    pub email: String,
    pub student_name: String,
    pub class_group: String,
    pub project_title: String,
    pub problem_statement: String,
    pub project_idea: String,
    pub materials: String,
    pub how_it_works: String,
    pub challenges: String,
    pub lessons_learned: String,
    pub future_scope: String,
    /// Reference to the uploaded project photo, if any.
    pub image_path: Option<String>,
    /// Chosen poster theme id from the static catalog.
    pub theme_id: Option<String>,
    /// `draft` or `submitted`; re-settable by the owner.
    pub status: String,
    /// External poster reference, filled in after publish.
    pub poster_url: Option<String>,
    pub poster_public_id: Option<String>,
    pub created_at: Timestamp,
}

impl Project {
    /// The content slice the poster renderer consumes.
    pub fn poster_content(&self) -> PosterContent {
        PosterContent {
            project_title: self.project_title.clone(),
            student_name: self.student_name.clone(),
            class_group: self.class_group.clone(),
            problem_statement: self.problem_statement.clone(),
            project_idea: self.project_idea.clone(),
            how_it_works: self.how_it_works.clone(),
            challenges: self.challenges.clone(),
            lessons_learned: self.lessons_learned.clone(),
            materials: self.materials.clone(),
            future_scope: self.future_scope.clone(),
            image_ref: self.image_path.clone(),
        }
    }
}

/// Full-replace DTO for the single write path.
///
/// Every field is written on every save; the handler fills omitted form
/// fields with empty strings, so a partial submission blanks what it
/// leaves out. Callers must round-trip `image_path` themselves.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpsertProject {
    pub email: String,
    pub student_name: String,
    pub class_group: String,
    pub project_title: String,
    pub problem_statement: String,
    pub project_idea: String,
    pub materials: String,
    pub how_it_works: String,
    pub challenges: String,
    pub lessons_learned: String,
    pub future_scope: String,
    pub image_path: Option<String>,
    pub theme_id: Option<String>,
    pub status: String,
}
