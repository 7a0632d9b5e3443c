// DataViz Pro - core/collaborators.rs
//
// Seams for the external services the product would delegate to:
// spreadsheet import, chart rendering, insight generation and user
// management. None of them is implemented in this repository; the
// `Unavailable` stub answers every call with `CollaboratorError::Unavailable`.

use crate::core::model::{AccountStatus, Role};
use crate::util::error::CollaboratorError;
use std::path::Path;

/// Parsed rectangular sheet data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Chart families offered by the chart builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Scatter,
}

/// What to plot and how.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartConfig {
    pub kind: ChartKind,
    pub title: String,
    pub x_column: Option<String>,
    pub y_column: Option<String>,
    pub three_d: bool,
}

/// A rendered chart, ready for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartArtifact {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
}

/// One generated insight.
#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub title: String,
    pub narrative: String,
    /// Confidence in percent (0-100).
    pub confidence: u8,
}

/// A managed user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
}

/// Accepts a spreadsheet file and returns its tabular contents.
pub trait UploadCollaborator {
    fn import(&self, path: &Path) -> Result<TabularData, CollaboratorError>;
}

/// Turns tabular data and a chart config into a renderable artifact.
pub trait ChartCollaborator {
    fn render(
        &self,
        data: &TabularData,
        config: &ChartConfig,
    ) -> Result<ChartArtifact, CollaboratorError>;
}

/// Produces narrative insights from tabular data.
pub trait InsightCollaborator {
    fn analyse(&self, data: &TabularData) -> Result<Vec<Insight>, CollaboratorError>;
}

/// CRUD over user accounts.
pub trait UserDirectory {
    fn list(&self) -> Result<Vec<UserRecord>, CollaboratorError>;
    fn create(&self, record: UserRecord) -> Result<UserRecord, CollaboratorError>;
    fn update(&self, record: UserRecord) -> Result<UserRecord, CollaboratorError>;
    fn delete(&self, id: u64) -> Result<(), CollaboratorError>;
}

/// Stub implementation of every collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Unavailable {
    pub const UPLOAD: &'static str = "Spreadsheet import";
    pub const CHARTS: &'static str = "Chart rendering";
    pub const INSIGHTS: &'static str = "AI insight generation";
    pub const USERS: &'static str = "User management";

    fn refuse<T>(collaborator: &'static str) -> Result<T, CollaboratorError> {
        Err(CollaboratorError::Unavailable { collaborator })
    }
}

impl UploadCollaborator for Unavailable {
    fn import(&self, path: &Path) -> Result<TabularData, CollaboratorError> {
        tracing::debug!(
            path = %path.display(),
            "Upload collaborator not attached; discarding file"
        );
        Self::refuse(Self::UPLOAD)
    }
}

impl ChartCollaborator for Unavailable {
    fn render(
        &self,
        _data: &TabularData,
        config: &ChartConfig,
    ) -> Result<ChartArtifact, CollaboratorError> {
        tracing::debug!(kind = ?config.kind, "Chart collaborator not attached");
        Self::refuse(Self::CHARTS)
    }
}

impl InsightCollaborator for Unavailable {
    fn analyse(&self, data: &TabularData) -> Result<Vec<Insight>, CollaboratorError> {
        tracing::debug!(rows = data.rows.len(), "Insight collaborator not attached");
        Self::refuse(Self::INSIGHTS)
    }
}

impl UserDirectory for Unavailable {
    fn list(&self) -> Result<Vec<UserRecord>, CollaboratorError> {
        Self::refuse(Self::USERS)
    }

    fn create(&self, _record: UserRecord) -> Result<UserRecord, CollaboratorError> {
        Self::refuse(Self::USERS)
    }

    fn update(&self, _record: UserRecord) -> Result<UserRecord, CollaboratorError> {
        Self::refuse(Self::USERS)
    }

    fn delete(&self, _id: u64) -> Result<(), CollaboratorError> {
        Self::refuse(Self::USERS)
    }
}

/// The set of collaborators the app talks to.
pub struct Collaborators {
    pub upload: Box<dyn UploadCollaborator>,
    pub charts: Box<dyn ChartCollaborator>,
    pub insights: Box<dyn InsightCollaborator>,
    pub users: Box<dyn UserDirectory>,
}

impl Collaborators {
    /// All four seams backed by the `Unavailable` stub.
    pub fn unavailable() -> Self {
        Self {
            upload: Box::new(Unavailable),
            charts: Box::new(Unavailable),
            insights: Box::new(Unavailable),
            users: Box::new(Unavailable),
        }
    }
}

impl Default for Collaborators {
    fn default() -> Self {
        Self::unavailable()
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unavailable(name: &'static str) -> CollaboratorError {
        CollaboratorError::Unavailable { collaborator: name }
    }

    #[test]
    fn test_stub_refuses_upload() {
        let result = Unavailable.import(&PathBuf::from("sales_data.xlsx"));
        assert_eq!(result, Err(unavailable(Unavailable::UPLOAD)));
    }

    #[test]
    fn test_stub_refuses_chart_and_insights() {
        let data = TabularData::default();
        assert_eq!(
            Unavailable.render(&data, &ChartConfig::default()),
            Err(unavailable(Unavailable::CHARTS))
        );
        assert_eq!(
            Unavailable.analyse(&data),
            Err(unavailable(Unavailable::INSIGHTS))
        );
    }

    #[test]
    fn test_stub_refuses_every_user_operation() {
        let record = UserRecord {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role: Role::User,
            status: AccountStatus::Active,
        };
        let expected = unavailable(Unavailable::USERS);
        assert_eq!(Unavailable.list(), Err(expected.clone()));
        assert_eq!(Unavailable.create(record.clone()), Err(expected.clone()));
        assert_eq!(Unavailable.update(record), Err(expected.clone()));
        assert_eq!(Unavailable.delete(1), Err(expected));
    }
}
