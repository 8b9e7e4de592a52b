//! Employee business logic - Handles all employee-related operations.
//!
//! Provides functions for creating, retrieving, and deactivating employees,
//! plus the whitelisted profile-field application used by the change-request
//! workflow. All functions are async and return Result types for error handling.

use crate::{
    entities::{Employee, EmployeeRole, employee},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Profile fields an employee may change via the change-request workflow.
/// Pay parameters and role are deliberately absent; those are HR-initiated edits.
pub const EDITABLE_FIELDS: [&str; 4] = ["name", "phone", "address", "position"];

/// Retrieves all active employees, ordered alphabetically by name.
pub async fn get_all_active_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .filter(employee::Column::IsActive.eq(true))
        .order_by_asc(employee::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by employee number (NIK), returning None if not found
/// or deactivated.
pub async fn get_employee_by_nik(
    db: &DatabaseConnection,
    nik: &str,
) -> Result<Option<employee::Model>> {
    Employee::find()
        .filter(employee::Column::Nik.eq(nik))
        .filter(employee::Column::IsActive.eq(true))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds an employee by its unique ID. Deactivated employees are still
/// returned here; history views need them.
pub async fn get_employee_by_id<C>(db: &C, employee_id: i64) -> Result<Option<employee::Model>>
where
    C: ConnectionTrait,
{
    Employee::find_by_id(employee_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Loads an employee by ID or fails with [`Error::EmployeeNotFound`].
/// Convenience for workflow code that needs the acting employee's role.
pub async fn require_employee<C>(db: &C, employee_id: i64) -> Result<employee::Model>
where
    C: ConnectionTrait,
{
    get_employee_by_id(db, employee_id)
        .await?
        .ok_or_else(|| Error::EmployeeNotFound {
            id: employee_id.to_string(),
        })
}

/// Creates a new employee, performing input validation.
///
/// Validates that the NIK and name are non-empty, that the NIK is not already
/// taken, and that the pay parameters are non-negative.
#[allow(clippy::too_many_arguments)]
pub async fn create_employee(
    db: &DatabaseConnection,
    nik: String,
    name: String,
    department: String,
    position: String,
    role: EmployeeRole,
    hourly_rate: f64,
    monthly_allowance: f64,
) -> Result<employee::Model> {
    // Validate inputs
    if nik.trim().is_empty() {
        return Err(Error::Config {
            message: "Employee NIK cannot be empty".to_string(),
        });
    }

    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Employee name cannot be empty".to_string(),
        });
    }

    if hourly_rate < 0.0 || !hourly_rate.is_finite() {
        return Err(Error::InvalidAmount {
            amount: hourly_rate,
        });
    }

    if monthly_allowance < 0.0 || !monthly_allowance.is_finite() {
        return Err(Error::InvalidAmount {
            amount: monthly_allowance,
        });
    }

    let existing = Employee::find()
        .filter(employee::Column::Nik.eq(nik.trim()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::Config {
            message: format!("Employee NIK already exists: {}", nik.trim()),
        });
    }

    let model = employee::ActiveModel {
        nik: Set(nik.trim().to_string()),
        name: Set(name.trim().to_string()),
        department: Set(department),
        position: Set(position),
        role: Set(role),
        phone: Set(None),
        address: Set(None),
        hourly_rate: Set(hourly_rate),
        monthly_allowance: Set(monthly_allowance),
        is_active: Set(true),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Deactivates an employee (soft delete). History records stay intact.
pub async fn deactivate_employee(
    db: &DatabaseConnection,
    employee_id: i64,
) -> Result<employee::Model> {
    let employee = require_employee(db, employee_id).await?;

    let mut active: employee::ActiveModel = employee.into();
    active.is_active = Set(false);
    active.update(db).await.map_err(Into::into)
}

/// Applies a single whitelisted profile-field change to an employee record.
///
/// Used by the change-request workflow (inside its transaction) once HR
/// approves a request. Non-whitelisted fields fail with
/// [`Error::FieldNotEditable`].
pub async fn apply_field_change<C>(
    db: &C,
    employee_id: i64,
    field: &str,
    new_value: &str,
) -> Result<employee::Model>
where
    C: ConnectionTrait,
{
    let employee = require_employee(db, employee_id).await?;

    let mut active: employee::ActiveModel = employee.into();
    match field {
        "name" => active.name = Set(new_value.to_string()),
        "phone" => active.phone = Set(Some(new_value.to_string())),
        "address" => active.address = Set(Some(new_value.to_string())),
        "position" => active.position = Set(new_value.to_string()),
        other => {
            return Err(Error::FieldNotEditable {
                field: other.to_string(),
            });
        }
    }

    active.update(db).await.map_err(Into::into)
}

/// Reads the current value of a whitelisted profile field as a string.
/// The change-request workflow captures this as `old_value` at submission.
pub fn current_field_value(employee: &employee::Model, field: &str) -> Result<String> {
    match field {
        "name" => Ok(employee.name.clone()),
        "phone" => Ok(employee.phone.clone().unwrap_or_default()),
        "address" => Ok(employee.address.clone().unwrap_or_default()),
        "position" => Ok(employee.position.clone()),
        other => Err(Error::FieldNotEditable {
            field: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{create_custom_employee, create_test_employee, setup_test_db};

    #[tokio::test]
    async fn test_create_employee_validation() -> Result<()> {
        let db = setup_test_db().await?;

        // Empty NIK
        let result = create_employee(
            &db,
            String::new(),
            "Name".to_string(),
            "wood_production".to_string(),
            "Operator".to_string(),
            EmployeeRole::Crew,
            10.0,
            0.0,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Empty name
        let result = create_employee(
            &db,
            "EMP-001".to_string(),
            "   ".to_string(),
            "wood_production".to_string(),
            "Operator".to_string(),
            EmployeeRole::Crew,
            10.0,
            0.0,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        // Negative rate
        let result = create_employee(
            &db,
            "EMP-001".to_string(),
            "Name".to_string(),
            "wood_production".to_string(),
            "Operator".to_string(),
            EmployeeRole::Crew,
            -5.0,
            0.0,
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -5.0 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_employee_duplicate_nik() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_employee(&db, "EMP-001", "First").await?;

        let result = create_employee(
            &db,
            "EMP-001".to_string(),
            "Second".to_string(),
            "steel_production".to_string(),
            "Welder".to_string(),
            EmployeeRole::Crew,
            12.0,
            0.0,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Config { message: _ }));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_employee_by_nik() -> Result<()> {
        let db = setup_test_db().await?;

        let created = create_test_employee(&db, "EMP-001", "Sawmill Sam").await?;

        let found = get_employee_by_nik(&db, "EMP-001").await?;
        assert_eq!(found.unwrap().id, created.id);

        let not_found = get_employee_by_nik(&db, "EMP-999").await?;
        assert!(not_found.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_active_employees_ordering() -> Result<()> {
        let db = setup_test_db().await?;

        let b = create_test_employee(&db, "EMP-002", "Bram").await?;
        let a = create_test_employee(&db, "EMP-001", "Agus").await?;

        let all = get_all_active_employees(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], a);
        assert_eq!(all[1], b);

        Ok(())
    }

    #[tokio::test]
    async fn test_deactivate_employee_hides_from_lookups() -> Result<()> {
        let db = setup_test_db().await?;

        let employee = create_test_employee(&db, "EMP-001", "Temp Worker").await?;
        let deactivated = deactivate_employee(&db, employee.id).await?;
        assert!(!deactivated.is_active);

        // Hidden from NIK lookup and active list
        assert!(get_employee_by_nik(&db, "EMP-001").await?.is_none());
        assert!(get_all_active_employees(&db).await?.is_empty());

        // Still reachable by id for history views
        assert!(get_employee_by_id(&db, employee.id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_apply_field_change() -> Result<()> {
        let db = setup_test_db().await?;
        let employee = create_test_employee(&db, "EMP-001", "Old Name").await?;

        let updated = apply_field_change(&db, employee.id, "name", "New Name").await?;
        assert_eq!(updated.name, "New Name");

        let updated = apply_field_change(&db, employee.id, "phone", "+62-811-000").await?;
        assert_eq!(updated.phone, Some("+62-811-000".to_string()));

        // Pay parameters are not reachable through this path
        let result = apply_field_change(&db, employee.id, "hourly_rate", "99.0").await;
        assert!(matches!(
            result.unwrap_err(),
            Error::FieldNotEditable { field: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_current_field_value() -> Result<()> {
        let db = setup_test_db().await?;
        let employee =
            create_custom_employee(&db, "EMP-001", "Rina", EmployeeRole::Finance, 20.0, 50.0)
                .await?;

        assert_eq!(current_field_value(&employee, "name")?, "Rina");
        // Unset optional fields read back as empty strings
        assert_eq!(current_field_value(&employee, "phone")?, "");
        assert!(current_field_value(&employee, "role").is_err());

        // Every whitelisted field must be readable and writable
        for field in EDITABLE_FIELDS {
            current_field_value(&employee, field)?;
            apply_field_change(&db, employee.id, field, "value").await?;
        }

        Ok(())
    }
}
