//! Initial employee seeding from a TOML configuration file.
//!
//! The employees defined in config.toml are used to seed the database on
//! first run; employees whose NIK already exists are left untouched, so
//! re-running the seed is safe.

use crate::{
    core::employee::create_employee,
    entities::{Employee, EmployeeRole, employee},
    errors::{Error, Result},
};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// List of employees to seed
    pub employees: Vec<EmployeeConfig>,
}

/// Configuration for a single employee
#[derive(Debug, Deserialize, Clone)]
pub struct EmployeeConfig {
    /// Employee number (NIK)
    pub nik: String,
    /// Full name
    pub name: String,
    /// Department (e.g., `"wood_production"`, `"steel_production"`)
    pub department: String,
    /// Job title
    pub position: String,
    /// Workflow role
    pub role: EmployeeRole,
    /// Hourly pay rate
    pub hourly_rate: f64,
    /// Flat monthly allowance
    #[serde(default)]
    pub monthly_allowance: f64,
}

/// Loads the employee seed configuration from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file: {e}"),
    })
}

/// Inserts every configured employee whose NIK is not yet in the database.
/// Returns the number of employees created.
pub async fn seed_employees(db: &DatabaseConnection, config: &SeedConfig) -> Result<usize> {
    let mut created = 0;

    for entry in &config.employees {
        let existing = Employee::find()
            .filter(employee::Column::Nik.eq(entry.nik.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        create_employee(
            db,
            entry.nik.clone(),
            entry.name.clone(),
            entry.department.clone(),
            entry.position.clone(),
            entry.role,
            entry.hourly_rate,
            entry.monthly_allowance,
        )
        .await?;
        created += 1;
    }

    if created > 0 {
        info!(created, "seeded initial employees");
    }

    Ok(created)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::setup_test_db;

    const SAMPLE: &str = r#"
        [[employees]]
        nik = "DIR-001"
        name = "Pak Direktur"
        department = "management"
        position = "Director"
        role = "director"
        hourly_rate = 60.0
        monthly_allowance = 500.0

        [[employees]]
        nik = "EMP-100"
        name = "Sawmill Sam"
        department = "wood_production"
        position = "Sawmill Operator"
        role = "crew"
        hourly_rate = 11.5
    "#;

    #[test]
    fn test_parse_seed_config() {
        let config: SeedConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.employees.len(), 2);

        let director = &config.employees[0];
        assert_eq!(director.nik, "DIR-001");
        assert_eq!(director.role, EmployeeRole::Director);
        assert_eq!(director.monthly_allowance, 500.0);

        // monthly_allowance defaults to zero when omitted
        let crew = &config.employees[1];
        assert_eq!(crew.role, EmployeeRole::Crew);
        assert_eq!(crew.monthly_allowance, 0.0);
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        let bad = r#"
            [[employees]]
            nik = "X-1"
            name = "X"
            department = "hr"
            position = "X"
            role = "janitor"
            hourly_rate = 1.0
        "#;
        assert!(toml::from_str::<SeedConfig>(bad).is_err());
    }

    #[tokio::test]
    async fn test_seed_employees_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config: SeedConfig = toml::from_str(SAMPLE).map_err(|e| Error::Config {
            message: e.to_string(),
        })?;

        let first = seed_employees(&db, &config).await?;
        assert_eq!(first, 2);

        // Second run finds both NIKs and inserts nothing
        let second = seed_employees(&db, &config).await?;
        assert_eq!(second, 0);

        Ok(())
    }
}
