use tracing::{debug, info};

use super::Store;
use crate::error::AppError;
use crate::model::employee::Employee;

impl Store {
    /// All employees in the order they were added.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>("SELECT id, name FROM employees ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    pub async fn add_employee(&self, name: &str) -> Result<Employee, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Employee name must not be empty"));
        }

        let result = sqlx::query("INSERT INTO employees (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        let employee = Employee {
            id: result.last_insert_rowid(),
            name: name.to_string(),
        };
        info!(employee_id = employee.id, name = %employee.name, "Employee added");

        Ok(employee)
    }

    /// Removes the employee and all of their leaves in one transaction.
    /// Unknown ids are a no-op; returns whether an employee row was removed.
    pub async fn delete_employee(&self, employee_id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let leaves_removed = sqlx::query("DELETE FROM leaves WHERE employee_id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let employees_removed = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(employee_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;

        if employees_removed > 0 {
            info!(employee_id, leaves_removed, "Employee removed");
        }
        Ok(employees_removed > 0)
    }
}
