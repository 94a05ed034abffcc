use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StatsError {
    #[error("No flavors to compute statistics over")]
    EmptyListing,

    #[error("Flavor '{name}' has a malformed price: '{price}'")]
    MalformedPrice { name: String, price: String },
}
