//! Navigation targets.
//!
//! Stores never navigate themselves; they record where the view should go
//! next and the presentation layer follows.

use std::fmt;

use campus_model::RecordId;

// =============================================================================
// ROUTE ENUM
// =============================================================================

/// A screen of the back office.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Stats and recent activity
    #[default]
    Dashboard,

    /// Student list
    Students,

    /// New student form
    AddStudent,

    /// Edit form for one student
    EditStudent(RecordId),

    /// Fee list and summary
    Fees,

    /// Inquiry list and summary
    Inquiries,

    /// New inquiry form
    AddInquiry,
}

impl Route {
    /// URL-style path of the screen.
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/dashboard".to_string(),
            Self::Students => "/students".to_string(),
            Self::AddStudent => "/add-student".to_string(),
            Self::EditStudent(id) => format!("/edit-student/{id}"),
            Self::Fees => "/fees".to_string(),
            Self::Inquiries => "/inquiries".to_string(),
            Self::AddInquiry => "/add-inquiry".to_string(),
        }
    }

    /// Parse a path produced by [`Route::path`]. `/` is the dashboard.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/dashboard" => Some(Self::Dashboard),
            "/students" => Some(Self::Students),
            "/add-student" => Some(Self::AddStudent),
            "/fees" => Some(Self::Fees),
            "/inquiries" => Some(Self::Inquiries),
            "/add-inquiry" => Some(Self::AddInquiry),
            other => other
                .strip_prefix("/edit-student/")
                .and_then(|id| id.parse().ok())
                .map(Self::EditStudent),
        }
    }

    /// Title shown in headers.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Students => "Students",
            Self::AddStudent => "Add Student",
            Self::EditStudent(_) => "Edit Student",
            Self::Fees => "Fees",
            Self::Inquiries => "Inquiries",
            Self::AddInquiry => "Add Inquiry",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
