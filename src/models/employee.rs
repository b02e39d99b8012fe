//! Employee model.
//!
//! This module defines the Employee struct representing a roster entry
//! whose day statuses are resolved by the engine.

use serde::{Deserialize, Serialize};

/// Represents an employee on the roster.
///
/// The engine only needs a stable identifier to correlate attendance and
/// leave records, plus a display name for rendered rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name for rendered rows and exports.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Arif Rahman"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.name, "Arif Rahman");
    }

    #[test]
    fn test_serialize_employee_round_trip() {
        let employee = Employee {
            id: "emp_002".to_string(),
            name: "Nadia Islam".to_string(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
