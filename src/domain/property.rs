/// Whether the landlord accepts animals.
///
/// The Yes/No user selection is converted to this type once at the input
/// boundary; downstream code only ever sees the typed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetPolicy {
    Allowed,
    NotAllowed,
}

impl PetPolicy {
    /// Binary flag the model was fitted on (1 = allowed).
    pub fn as_flag(&self) -> f64 {
        match self {
            PetPolicy::Allowed => 1.0,
            PetPolicy::NotAllowed => 0.0,
        }
    }
}

impl std::str::FromStr for PetPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "allowed" => Ok(PetPolicy::Allowed),
            "no" | "not-allowed" => Ok(PetPolicy::NotAllowed),
            _ => anyhow::bail!("Invalid pet policy: {}. Must be 'yes' or 'no'", s),
        }
    }
}

/// Whether the property is rented furnished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Furnishing {
    Furnished,
    Unfurnished,
}

impl Furnishing {
    /// Binary flag the model was fitted on (1 = furnished).
    pub fn as_flag(&self) -> f64 {
        match self {
            Furnishing::Furnished => 1.0,
            Furnishing::Unfurnished => 0.0,
        }
    }
}

impl std::str::FromStr for Furnishing {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" | "furnished" => Ok(Furnishing::Furnished),
            "no" | "unfurnished" => Ok(Furnishing::Unfurnished),
            _ => anyhow::bail!("Invalid furnishing: {}. Must be 'yes' or 'no'", s),
        }
    }
}

/// One property as described by the user, before encoding.
///
/// The city stays a free string here: it is validated against the fitted
/// category set by the encoder, not by this type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub city: String,
    pub area: f64,
    pub rooms: u32,
    pub bathroom: u32,
    pub parking_spaces: u32,
    pub floor: u32,
    pub animal: PetPolicy,
    pub furniture: Furnishing,
    pub hoa: f64,
    pub rent_amount: f64,
    pub property_tax: f64,
    pub fire_insurance: f64,
}
