use crate::domain::property::PropertyRecord;

/// Ordered list of the raw feature names that follow the city indicator
/// columns in the encoded vector.
/// This order MUST match exactly the column order the encoder and model
/// artifacts were fitted with. Any change here is a breaking change for
/// existing artifacts.
pub const RAW_FEATURE_NAMES: &[&str] = &[
    "area",
    "rooms",
    "bathroom",
    "parking spaces",
    "floor",
    "animal",
    "furniture",
    "hoa (R$)",
    "rent amount (R$)",
    "property tax (R$)",
    "fire insurance (R$)",
];

/// Flattens the raw numeric fields of a record in schema order.
/// The city column is handled separately by the one-hot encoder.
pub fn record_to_raw_vector(record: &PropertyRecord) -> Vec<f64> {
    vec![
        record.area,
        record.rooms as f64,
        record.bathroom as f64,
        record.parking_spaces as f64,
        record.floor as f64,
        record.animal.as_flag(),
        record.furniture.as_flag(),
        record.hoa,
        record.rent_amount,
        record.property_tax,
        record.fire_insurance,
    ]
}
