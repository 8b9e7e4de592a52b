//! Change request entity - A proposed employee-data change awaiting HR review.
//!
//! Employees submit a change to one profile field; HR approves or rejects.
//! The old value is captured at submission time so the request doubles as a
//! history record once settled.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review status of a change request. Stored as a string column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Submitted, awaiting HR review
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Approved by HR; the employee record was updated - terminal state
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Rejected by HR - terminal state
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl RequestStatus {
    /// Stable string form, matching the stored column value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Change request database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "change_requests")]
pub struct Model {
    /// Unique identifier for the request
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the employee whose record would change
    pub employee_id: i64,
    /// Name of the field to change (e.g., `"phone"`, `"address"`)
    pub field: String,
    /// Value of the field at submission time
    pub old_value: String,
    /// Proposed new value
    pub new_value: String,
    /// Current review status
    pub status: RequestStatus,
    /// When the request was submitted
    pub submitted_at: DateTimeUtc,
    /// Employee ID of the HR reviewer, once settled
    pub reviewed_by: Option<i64>,
    /// When the request was settled
    pub reviewed_at: Option<DateTimeUtc>,
    /// Optional note from the reviewer
    pub review_note: Option<String>,
}

/// Defines relationships between `ChangeRequest` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each request belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
