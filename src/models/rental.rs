//! Rental model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::RentalStatus;

/// Rental record
///
/// `equipment_name`, `customer_name` and `daily_rate` are snapshot fields
/// captured at creation time, so the ledger displays stable values even if
/// the source records change later. `total_cost` is always recomputable as
/// daily_rate x days_between(start_date, end_date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub equipment_id: String,
    pub customer_id: String,
    pub equipment_name: String,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: RentalStatus,
    pub daily_rate: Decimal,
    pub total_cost: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_date: DateTime<Utc>,
}

/// Create rental request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRental {
    pub equipment_id: String,
    pub customer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: Option<String>,
    /// Explicit initial status (Reserved or Rented); defaults to Reserved.
    pub status: Option<RentalStatus>,
}

/// Update rental request (partial merge; status changes go through the
/// transition table when enforcement is on)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRental {
    pub status: Option<RentalStatus>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl UpdateRental {
    /// Merge the patch into an existing record. Absent fields are kept.
    /// Does not recompute `total_cost`; the service owns that rule.
    pub fn apply_to(&self, rental: &mut Rental) {
        if let Some(status) = self.status {
            rental.status = status;
        }
        if let Some(start_date) = self.start_date {
            rental.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            rental.end_date = end_date;
        }
        if let Some(ref notes) = self.notes {
            rental.notes = Some(notes.clone());
        }
    }
}
