//! Employee entity - Represents a plant employee (Karyawan).
//!
//! Each employee carries an employee number (`nik`), a department and
//! position, a role that gates workflow operations, and the pay parameters
//! (hourly rate, monthly allowance) payroll generation reads from.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Workflow role of an employee. Stored as a string column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    /// Executive (Direktur) - approves payroll batches
    #[sea_orm(string_value = "director")]
    Director,
    /// Head of HR - generates payroll, reviews change requests
    #[sea_orm(string_value = "hr_manager")]
    HrManager,
    /// HR staff - generates payroll, reviews change requests
    #[sea_orm(string_value = "hr_staff")]
    HrStaff,
    /// Manager of a production division (wood or steel)
    #[sea_orm(string_value = "production_manager")]
    ProductionManager,
    /// Finance - marks approved payroll batches as paid
    #[sea_orm(string_value = "finance")]
    Finance,
    /// Marketing staff
    #[sea_orm(string_value = "marketing")]
    Marketing,
    /// Production crew member
    #[sea_orm(string_value = "crew")]
    Crew,
}

impl EmployeeRole {
    /// Whether this role may generate payroll batches.
    #[must_use]
    pub const fn can_generate_payroll(self) -> bool {
        matches!(self, Self::HrManager | Self::HrStaff)
    }

    /// Whether this role may approve a pending payroll batch.
    #[must_use]
    pub const fn can_approve_payroll(self) -> bool {
        matches!(self, Self::Director)
    }

    /// Whether this role may mark an approved payroll batch as paid.
    #[must_use]
    pub const fn can_mark_paid(self) -> bool {
        matches!(self, Self::Finance)
    }

    /// Whether this role may approve or reject employee change requests.
    #[must_use]
    pub const fn can_review_changes(self) -> bool {
        matches!(self, Self::HrManager | Self::HrStaff)
    }

    /// Stable string form, matching the stored column value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Director => "director",
            Self::HrManager => "hr_manager",
            Self::HrStaff => "hr_staff",
            Self::ProductionManager => "production_manager",
            Self::Finance => "finance",
            Self::Marketing => "marketing",
            Self::Crew => "crew",
        }
    }
}

/// Employee database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Employee number (NIK), unique across the company
    #[sea_orm(unique)]
    pub nik: String,
    /// Full name
    pub name: String,
    /// Department (e.g., `"wood_production"`, `"steel_production"`, `"hr"`, `"finance"`)
    pub department: String,
    /// Job title (e.g., "Sawmill Operator", "Payroll Analyst")
    pub position: String,
    /// Workflow role gating payroll and approval operations
    pub role: EmployeeRole,
    /// Contact phone number, if provided
    pub phone: Option<String>,
    /// Home address, if provided
    pub address: Option<String>,
    /// Hourly pay rate
    pub hourly_rate: f64,
    /// Flat monthly allowance added to every payroll item
    pub monthly_allowance: f64,
    /// Soft deactivation flag - inactive employees keep their history
    pub is_active: bool,
}

/// Defines relationships between Employee and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One employee has many work schedules
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedules,
    /// One employee has many attendance records
    #[sea_orm(has_many = "super::attendance::Entity")]
    Attendances,
    /// One employee has many payroll items
    #[sea_orm(has_many = "super::payroll_item::Entity")]
    PayrollItems,
    /// One employee has many change requests
    #[sea_orm(has_many = "super::change_request::Entity")]
    ChangeRequests,
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attendances.def()
    }
}

impl Related<super::payroll_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PayrollItems.def()
    }
}

impl Related<super::change_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChangeRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
