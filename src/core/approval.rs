//! Change-request business logic - the employee-data moderation queue.
//!
//! An employee proposes a change to one profile field; HR approves or
//! rejects. Approval applies the field to the employee record in the same
//! database transaction that settles the request, so the two can never
//! diverge. Settled requests are terminal.

use crate::{
    core::employee::{apply_field_change, current_field_value, require_employee},
    entities::{ChangeRequest, RequestStatus, change_request},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Submits a change request for one whitelisted profile field.
///
/// The current field value is captured as `old_value` so the settled request
/// doubles as a history record.
pub async fn submit_change_request(
    db: &DatabaseConnection,
    employee_id: i64,
    field: String,
    new_value: String,
) -> Result<change_request::Model> {
    let employee = require_employee(db, employee_id).await?;
    let old_value = current_field_value(&employee, &field)?;

    if new_value.trim().is_empty() {
        return Err(Error::Config {
            message: "Proposed value cannot be empty".to_string(),
        });
    }

    let model = change_request::ActiveModel {
        employee_id: Set(employee_id),
        field: Set(field),
        old_value: Set(old_value),
        new_value: Set(new_value.trim().to_string()),
        status: Set(RequestStatus::Pending),
        submitted_at: Set(Utc::now()),
        reviewed_by: Set(None),
        reviewed_at: Set(None),
        review_note: Set(None),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Approves a pending request and applies the change to the employee record.
///
/// Only HR roles may review. Both writes happen in one transaction; a settled
/// request fails with [`Error::InvalidTransition`].
pub async fn approve_change_request(
    db: &DatabaseConnection,
    request_id: i64,
    reviewer_id: i64,
    note: Option<String>,
) -> Result<change_request::Model> {
    let reviewer = require_employee(db, reviewer_id).await?;
    if !reviewer.role.can_review_changes() {
        return Err(Error::PermissionDenied {
            role: reviewer.role.as_str().to_string(),
            action: "review change requests".to_string(),
        });
    }

    let txn = db.begin().await?;

    let request = require_request(&txn, request_id).await?;
    if request.status != RequestStatus::Pending {
        return Err(Error::InvalidTransition {
            from: request.status.as_str().to_string(),
            to: RequestStatus::Approved.as_str().to_string(),
        });
    }

    apply_field_change(&txn, request.employee_id, &request.field, &request.new_value).await?;

    let mut active: change_request::ActiveModel = request.into();
    active.status = Set(RequestStatus::Approved);
    active.reviewed_by = Set(Some(reviewer_id));
    active.reviewed_at = Set(Some(Utc::now()));
    active.review_note = Set(note);
    let settled = active.update(&txn).await?;

    txn.commit().await?;

    info!(
        request_id = settled.id,
        employee_id = settled.employee_id,
        field = %settled.field,
        "change request approved"
    );

    Ok(settled)
}

/// Rejects a pending request. Only HR roles may review; the employee record
/// is untouched.
pub async fn reject_change_request(
    db: &DatabaseConnection,
    request_id: i64,
    reviewer_id: i64,
    note: Option<String>,
) -> Result<change_request::Model> {
    let reviewer = require_employee(db, reviewer_id).await?;
    if !reviewer.role.can_review_changes() {
        return Err(Error::PermissionDenied {
            role: reviewer.role.as_str().to_string(),
            action: "review change requests".to_string(),
        });
    }

    let request = require_request(db, request_id).await?;
    if request.status != RequestStatus::Pending {
        return Err(Error::InvalidTransition {
            from: request.status.as_str().to_string(),
            to: RequestStatus::Rejected.as_str().to_string(),
        });
    }

    let mut active: change_request::ActiveModel = request.into();
    active.status = Set(RequestStatus::Rejected);
    active.reviewed_by = Set(Some(reviewer_id));
    active.reviewed_at = Set(Some(Utc::now()));
    active.review_note = Set(note);
    active.update(db).await.map_err(Into::into)
}

/// Loads a request by ID or fails with [`Error::RequestNotFound`].
pub async fn require_request<C>(db: &C, request_id: i64) -> Result<change_request::Model>
where
    C: ConnectionTrait,
{
    ChangeRequest::find_by_id(request_id)
        .one(db)
        .await?
        .ok_or(Error::RequestNotFound { id: request_id })
}

/// Lists all pending requests, oldest first - the HR review queue.
pub async fn get_pending_requests(db: &DatabaseConnection) -> Result<Vec<change_request::Model>> {
    ChangeRequest::find()
        .filter(change_request::Column::Status.eq(RequestStatus::Pending))
        .order_by_asc(change_request::Column::SubmittedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Lists every request ever filed for one employee, newest first.
pub async fn get_requests_for_employee(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<Vec<change_request::Model>> {
    ChangeRequest::find()
        .filter(change_request::Column::EmployeeId.eq(employee_id))
        .order_by_desc(change_request::Column::SubmittedAt)
        .all(db)
        .await
        .map_err(Into::into)
}
