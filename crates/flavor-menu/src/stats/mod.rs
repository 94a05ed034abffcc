//! Price statistics over extracted records.

mod error;

pub use error::StatsError;

use crate::model::FlavorRecord;

/// Statistics logged once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuStatistics {
    pub average_price: String,
    pub cheap_flavors: Vec<String>,
}

impl MenuStatistics {
    pub fn compute(records: &[FlavorRecord], cheap_threshold: f64) -> Result<Self, StatsError> {
        Ok(Self {
            average_price: average_price(records)?,
            cheap_flavors: cheap_flavors(records, cheap_threshold)?,
        })
    }
}

/// Mean price rounded half away from zero to cents, e.g. `"2.00"`.
pub fn average_price(records: &[FlavorRecord]) -> Result<String, StatsError> {
    if records.is_empty() {
        return Err(StatsError::EmptyListing);
    }
    let mut total = 0.0;
    for record in records {
        total += price_of(record)?;
    }
    let average = total / records.len() as f64;
    Ok(format!("{:.2}", (average * 100.0).round() / 100.0))
}

/// `"<name> costs <price>"` for every record priced strictly below
/// `threshold`, in record order.
pub fn cheap_flavors(records: &[FlavorRecord], threshold: f64) -> Result<Vec<String>, StatsError> {
    let mut cheap = Vec::new();
    for record in records {
        if price_of(record)? < threshold {
            cheap.push(format!("{} costs {}", record.name, record.price));
        }
    }
    Ok(cheap)
}

fn price_of(record: &FlavorRecord) -> Result<f64, StatsError> {
    record
        .price_value()
        .ok_or_else(|| StatsError::MalformedPrice {
            name: record.name.clone(),
            price: record.price.clone(),
        })
}
