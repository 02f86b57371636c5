//! Equipment model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::enums::{EquipmentCondition, EquipmentStatus};

/// Equipment record
///
/// Field names serialize in camelCase so collections written by earlier
/// versions of the dashboard load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: String,
    pub name: String,
    pub category: String,
    pub condition: EquipmentCondition,
    pub status: EquipmentStatus,
    #[serde(default)]
    pub description: Option<String>,
    pub daily_rate: Decimal,
    pub date_added: NaiveDate,
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub category: String,
    pub condition: EquipmentCondition,
    pub description: Option<String>,
    #[validate(custom(function = "non_negative", message = "must not be negative"))]
    pub daily_rate: Decimal,
    /// Explicit initial status; defaults to Available.
    pub status: Option<EquipmentStatus>,
}

/// Update equipment request (partial merge, unvalidated by design)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    pub name: Option<String>,
    pub category: Option<String>,
    pub condition: Option<EquipmentCondition>,
    pub status: Option<EquipmentStatus>,
    pub description: Option<String>,
    pub daily_rate: Option<Decimal>,
}

impl UpdateEquipment {
    /// Merge the patch into an existing record. Absent fields are kept.
    pub fn apply_to(&self, equipment: &mut Equipment) {
        if let Some(ref name) = self.name {
            equipment.name = name.clone();
        }
        if let Some(ref category) = self.category {
            equipment.category = category.clone();
        }
        if let Some(condition) = self.condition {
            equipment.condition = condition;
        }
        if let Some(status) = self.status {
            equipment.status = status;
        }
        if let Some(ref description) = self.description {
            equipment.description = Some(description.clone());
        }
        if let Some(daily_rate) = self.daily_rate {
            equipment.daily_rate = daily_rate;
        }
    }
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_equipment_rejects_empty_and_negative() {
        let req = CreateEquipment {
            name: "".into(),
            category: "Tools".into(),
            condition: EquipmentCondition::Good,
            description: None,
            daily_rate: Decimal::from(-5),
            status: None,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("daily_rate"));
    }

    #[test]
    fn test_equipment_serializes_camel_case() {
        let eq = Equipment {
            id: "eq_1".into(),
            name: "Drill".into(),
            category: "Tools".into(),
            condition: EquipmentCondition::Good,
            status: EquipmentStatus::Available,
            description: None,
            daily_rate: Decimal::from(20),
            date_added: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        };
        let json = serde_json::to_value(&eq).unwrap();
        assert_eq!(json["dailyRate"], serde_json::json!("20"));
        assert_eq!(json["dateAdded"], "2025-06-01");
    }
}
