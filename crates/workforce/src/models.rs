use mongodb::bson::{self, Bson, Document, doc};
use time::OffsetDateTime;

/// Converts a timestamp to a BSON datetime (millisecond precision).
pub fn to_bson_datetime(at: OffsetDateTime) -> bson::DateTime {
    bson::DateTime::from_millis((at.unix_timestamp_nanos() / 1_000_000) as i64)
}

/// Converts a BSON datetime back to a UTC timestamp.
pub fn from_bson_datetime(at: bson::DateTime) -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp_nanos(at.timestamp_millis() as i128 * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// Reads an integer out of a BSON value regardless of its stored width.
pub fn bson_as_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(v) => Some(i64::from(*v)),
        Bson::Int64(v) => Some(*v),
        Bson::Double(v) if v.fract() == 0.0 => Some(*v as i64),
        _ => None,
    }
}

/// Persisted cursor for a named id sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub key: String,
    pub value: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Counter {
    /// A counter positioned so that the next increment yields `start_at`.
    pub fn starting_at(key: impl Into<String>, start_at: i64) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            key: key.into(),
            value: start_at - 1,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_document(&self) -> Document {
        doc! {
            "key": self.key.clone(),
            "value": self.value,
            "createdAt": to_bson_datetime(self.created_at),
            "updatedAt": to_bson_datetime(self.updated_at),
        }
    }

    /// Parses a stored counter. Returns `None` when `key` or `value` is missing.
    pub fn from_document(document: &Document) -> Option<Self> {
        let key = document.get_str("key").ok()?.to_string();
        let value = document.get("value").and_then(bson_as_i64)?;
        let created_at = document
            .get_datetime("createdAt")
            .map(|t| from_bson_datetime(*t))
            .unwrap_or(OffsetDateTime::UNIX_EPOCH);
        let updated_at = document
            .get_datetime("updatedAt")
            .map(|t| from_bson_datetime(*t))
            .unwrap_or(created_at);

        Some(Self {
            key,
            value,
            created_at,
            updated_at,
        })
    }
}

/// Top-level department.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentDepartment {
    pub department_id: i64,
    pub name: String,
    pub description: String,
    pub created_at: OffsetDateTime,
}

impl ParentDepartment {
    pub fn to_document(&self) -> Document {
        doc! {
            "departmentId": self.department_id,
            "departmentName": self.name.clone(),
            "description": self.description.clone(),
            "createdAt": to_bson_datetime(self.created_at),
            "updatedAt": to_bson_datetime(self.created_at),
        }
    }
}

/// Team nested under a [`ParentDepartment`]. Employees belong to these.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildDepartment {
    pub child_dept_id: i64,
    pub name: String,
    pub parent_dept_id: i64,
    pub description: String,
    pub created_at: OffsetDateTime,
}

impl ChildDepartment {
    pub fn to_document(&self) -> Document {
        doc! {
            "childDeptId": self.child_dept_id,
            "departmentName": self.name.clone(),
            "parentDeptId": self.parent_dept_id,
            "description": self.description.clone(),
            "createdAt": to_bson_datetime(self.created_at),
            "updatedAt": to_bson_datetime(self.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub email: String,
    pub dept_id: Option<i64>,
    pub role: String,
    pub contact_no: String,
    /// Fixed synthetic fixture value, stored as-is. Never a real credential.
    pub password: String,
    pub is_active: bool,
    pub avatar_url: String,
    pub location: String,
    pub about: String,
    pub skills: Vec<String>,
    pub created_at: OffsetDateTime,
}

impl Employee {
    pub fn to_document(&self) -> Document {
        doc! {
            "employeeId": self.employee_id,
            "employeeName": self.name.clone(),
            "emailId": self.email.clone(),
            "deptId": self.dept_id,
            "role": self.role.clone(),
            "contactNo": self.contact_no.clone(),
            "password": self.password.clone(),
            "isActive": self.is_active,
            "avatarUrl": self.avatar_url.clone(),
            "location": self.location.clone(),
            "about": self.about.clone(),
            "skills": self.skills.clone(),
            "createdAt": to_bson_datetime(self.created_at),
            "updatedAt": to_bson_datetime(self.created_at),
        }
    }
}

/// Project lifecycle state, stored as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Draft,
    Completed,
    OnHold,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Draft,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
    ];

    /// Returns the stored string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Draft => "draft",
            ProjectStatus::Completed => "completed",
            ProjectStatus::OnHold => "on_hold",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectOverview {
    pub summary: String,
    pub objectives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub project_id: i64,
    pub name: String,
    pub client_name: String,
    pub start_date: OffsetDateTime,
    pub end_date: OffsetDateTime,
    pub lead_emp_id: Option<i64>,
    pub status: ProjectStatus,
    pub readiness_score: i32,
    pub progress: i32,
    pub overview: ProjectOverview,
    pub created_at: OffsetDateTime,
}

impl Project {
    pub fn to_document(&self) -> Document {
        doc! {
            "projectId": self.project_id,
            "projectName": self.name.clone(),
            "clientName": self.client_name.clone(),
            "startDate": to_bson_datetime(self.start_date),
            "endDate": to_bson_datetime(self.end_date),
            "leadByEmpId": self.lead_emp_id,
            "status": self.status.as_str(),
            "readinessScore": self.readiness_score,
            "progress": self.progress,
            "overview": {
                "summary": self.overview.summary.clone(),
                "objectives": self.overview.objectives.clone(),
            },
            "createdAt": to_bson_datetime(self.created_at),
            "updatedAt": to_bson_datetime(self.created_at),
        }
    }
}

/// Role an employee plays on a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentRole {
    Contributor,
    Reviewer,
    Lead,
}

impl AssignmentRole {
    pub const ALL: [AssignmentRole; 3] = [
        AssignmentRole::Contributor,
        AssignmentRole::Reviewer,
        AssignmentRole::Lead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentRole::Contributor => "Contributor",
            AssignmentRole::Reviewer => "Reviewer",
            AssignmentRole::Lead => "Lead",
        }
    }
}

/// Links one employee to one project (`ProjectEmployee` collection).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectAssignment {
    pub emp_project_id: i64,
    pub project_id: i64,
    pub emp_id: i64,
    pub role: AssignmentRole,
    pub is_active: bool,
    pub allocation_pct: i32,
    pub assigned_date: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

impl ProjectAssignment {
    pub fn to_document(&self) -> Document {
        doc! {
            "empProjectId": self.emp_project_id,
            "projectId": self.project_id,
            "empId": self.emp_id,
            "role": self.role.as_str(),
            "isActive": self.is_active,
            "allocationPct": self.allocation_pct,
            "assignedDate": to_bson_datetime(self.assigned_date),
            "createdAt": to_bson_datetime(self.created_at),
            "updatedAt": to_bson_datetime(self.created_at),
        }
    }
}
