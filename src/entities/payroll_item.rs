//! Payroll item entity - One employee's pay calculation inside a batch.
//!
//! All monetary components are stored explicitly so that
//! `net_pay = basic_pay + overtime_pay + allowances - deductions` can be
//! audited per row without recomputation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payroll item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payroll_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the batch this item belongs to
    pub batch_id: i64,
    /// ID of the employee being paid
    pub employee_id: i64,
    /// Hours worked within scheduled shift lengths
    pub regular_hours: f64,
    /// Hours worked beyond scheduled shift lengths
    pub overtime_hours: f64,
    /// Hourly rate at generation time (a later rate change must not rewrite history)
    pub hourly_rate: f64,
    /// `regular_hours * hourly_rate`
    pub basic_pay: f64,
    /// `overtime_hours * hourly_rate * 1.5`
    pub overtime_pay: f64,
    /// Flat allowances added for the period
    pub allowances: f64,
    /// Deductions subtracted for the period (late time priced at the hourly rate)
    pub deductions: f64,
    /// `basic_pay + overtime_pay + allowances - deductions`
    pub net_pay: f64,
}

/// Defines relationships between `PayrollItem` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each item belongs to one batch
    #[sea_orm(
        belongs_to = "super::payroll_batch::Entity",
        from = "Column::BatchId",
        to = "super::payroll_batch::Column::Id"
    )]
    Batch,
    /// Each item belongs to one employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmployeeId",
        to = "super::employee::Column::Id"
    )]
    Employee,
}

impl Related<super::payroll_batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
