//! The mirror's JSON copy of a project record.

use makerfest_core::export::ExportRecord;
use makerfest_db::models::project::Project;
use serde::{Deserialize, Serialize};

/// One document under `/projects/{id}` in the mirror store.
///
/// Documents are written as a whole on every sync, but partial documents
/// can exist: the poster fields arrive later via a merge, and a document
/// written by an older deployment may lack newer fields entirely. Every
/// non-key field therefore tolerates absence on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorDocument {
    /// Stringified canonical row id (the document key).
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub student_name: String,
    #[serde(default)]
    pub class_group: String,
    #[serde(default)]
    pub project_title: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub project_idea: String,
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub how_it_works: String,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub lessons_learned: String,
    #[serde(default)]
    pub future_scope: String,
    #[serde(default)]
    pub image_path: Option<String>,
    #[serde(default)]
    pub theme_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub poster_public_id: Option<String>,
    /// Unix millis when the poster reference was merged in.
    #[serde(default)]
    pub poster_uploaded_at: Option<i64>,
    /// Unix millis of the last full sync from the canonical store.
    #[serde(default)]
    pub synced_at: Option<i64>,
}

impl MirrorDocument {
    /// Build the document for a canonical record at sync time.
    ///
    /// The poster reference pair is carried over as-is; a mirror write
    /// that races ahead of the poster publish simply has `None` here and
    /// is completed later by the merge.
    pub fn from_project(project: &Project, synced_at_millis: i64) -> Self {
        Self {
            id: project.id.to_string(),
            email: project.email.clone(),
            student_name: project.student_name.clone(),
            class_group: project.class_group.clone(),
            project_title: project.project_title.clone(),
            problem_statement: project.problem_statement.clone(),
            project_idea: project.project_idea.clone(),
            materials: project.materials.clone(),
            how_it_works: project.how_it_works.clone(),
            challenges: project.challenges.clone(),
            lessons_learned: project.lessons_learned.clone(),
            future_scope: project.future_scope.clone(),
            image_path: project.image_path.clone(),
            theme_id: project.theme_id.clone(),
            status: Some(project.status.clone()),
            poster_url: project.poster_url.clone(),
            poster_public_id: project.poster_public_id.clone(),
            poster_uploaded_at: None,
            synced_at: Some(synced_at_millis),
        }
    }

    /// The slice of this document the spreadsheet export consumes.
    pub fn export_record(&self) -> ExportRecord {
        ExportRecord {
            student_name: self.student_name.clone(),
            class_group: self.class_group.clone(),
            project_title: self.project_title.clone(),
            status: self.status.clone(),
            synced_at_millis: self.synced_at,
            poster_url: self.poster_url.clone(),
        }
    }
}
