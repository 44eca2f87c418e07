use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}
