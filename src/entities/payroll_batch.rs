//! Payroll batch entity - A pay period's grouped calculations with lifecycle status.
//!
//! A batch is generated by HR for a date range, approved by the director, and
//! marked paid by finance. The status machine is strictly
//! pending -> approved -> paid; transitions never move backward.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a payroll batch. Stored as a string column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// Generated by HR, awaiting director approval
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Approved by the director, awaiting payment
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Paid out by finance - terminal state
    #[sea_orm(string_value = "paid")]
    Paid,
}

impl BatchStatus {
    /// Stable string form, matching the stored column value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Paid => "paid",
        }
    }
}

/// Payroll batch database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payroll_batches")]
pub struct Model {
    /// Unique identifier for the batch
    #[sea_orm(primary_key)]
    pub id: i64,
    /// First day of the pay period (inclusive)
    pub period_start: Date,
    /// Last day of the pay period (inclusive)
    pub period_end: Date,
    /// Current lifecycle status
    pub status: BatchStatus,
    /// Employee ID of the HR member who generated the batch
    pub created_by: i64,
    /// Employee ID of the director who approved, once approved
    pub approved_by: Option<i64>,
    /// When the batch was approved
    pub approved_at: Option<DateTimeUtc>,
    /// When the batch was marked paid
    pub paid_at: Option<DateTimeUtc>,
    /// When the batch was generated
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `PayrollBatch` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One batch has many payroll items
    #[sea_orm(has_many = "super::payroll_item::Entity")]
    Items,
}

impl Related<super::payroll_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
