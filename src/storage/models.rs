//! Data models for the storage layer

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A row of the `students` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub favorite_food: String,
}

/// One property sale, converted from a CSV row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub street_address: String,
    pub city: String,
    pub zip_code: String,
    pub state: String,
    pub number_of_beds: i32,
    pub number_of_baths: i32,
    pub square_feet: i32,
    pub property_type: String,
    pub sale_date: DateTime<FixedOffset>,
    pub sale_price: i32,
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Average sale price for one property type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceByType {
    pub property_type: String,
    pub average_price: i64,
}
