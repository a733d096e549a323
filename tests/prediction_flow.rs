use rentscope::application::prediction::{CityEncoder, LinearModel, PredictionService};
use rentscope::domain::errors::PredictionError;
use rentscope::domain::property::{Furnishing, PetPolicy, PropertyRecord};
use rentscope::infrastructure::artifacts;
use std::path::Path;

fn shipped_service() -> PredictionService {
    let encoder = artifacts::load_encoder(Path::new("data/encoder_city.json")).unwrap();
    let model = artifacts::load_model(Path::new("data/model.json")).unwrap();
    PredictionService::new(encoder, model).unwrap()
}

fn zero_record(city: &str) -> PropertyRecord {
    PropertyRecord {
        city: city.to_string(),
        area: 0.0,
        rooms: 0,
        bathroom: 0,
        parking_spaces: 0,
        floor: 0,
        animal: PetPolicy::NotAllowed,
        furniture: Furnishing::Unfurnished,
        hoa: 0.0,
        rent_amount: 0.0,
        property_tax: 0.0,
        fire_insurance: 0.0,
    }
}

#[test]
fn zero_record_reduces_to_intercept_plus_city_coefficient() {
    let encoder = artifacts::load_encoder(Path::new("data/encoder_city.json")).unwrap();
    let model = artifacts::load_model(Path::new("data/model.json")).unwrap();
    let categories = encoder.categories().to_vec();
    let coefficients = model.coefficients().to_vec();
    let intercept = model.intercept();

    let service = PredictionService::new(encoder, model).unwrap();

    for (i, city) in categories.iter().enumerate() {
        let prediction = service.predict(&zero_record(city)).unwrap();
        assert!(prediction.total.is_finite());
        assert!(
            (prediction.total - (intercept + coefficients[i])).abs() < 1e-9,
            "city {}",
            city
        );
    }
}

#[test]
fn campinas_scenario_yields_non_negative_estimate() {
    let service = shipped_service();
    let record = PropertyRecord {
        city: "Campinas".to_string(),
        area: 70.0,
        rooms: 2,
        bathroom: 1,
        parking_spaces: 1,
        floor: 3,
        animal: PetPolicy::Allowed,
        furniture: Furnishing::Unfurnished,
        hoa: 300.0,
        rent_amount: 2000.0,
        property_tax: 150.0,
        fire_insurance: 30.0,
    };

    let prediction = service.predict(&record).unwrap();
    assert!(prediction.total.is_finite());
    assert!(prediction.total >= 0.0);

    // The shipped model mostly passes the cost components through, so the
    // estimate should land near their sum
    assert!(prediction.total > 2000.0 && prediction.total < 3500.0);
}

#[test]
fn unknown_city_is_surfaced_not_encoded() {
    let service = shipped_service();
    let err = service.predict(&zero_record("Curitiba")).unwrap_err();
    assert!(matches!(
        err,
        PredictionError::UnknownCategory { city } if city == "Curitiba"
    ));
}

#[test]
fn importances_cover_every_encoded_column() {
    let service = shipped_service();
    let importances = service.importances();

    assert_eq!(importances.len(), service.encoder().feature_len());
    assert!(importances.iter().all(|(_, v)| *v >= 0.0));
    assert!(importances.windows(2).all(|w| w[0].1 >= w[1].1));
}

#[test]
fn mismatched_artifacts_fail_at_construction() {
    let encoder = CityEncoder::new(vec!["Campinas".to_string(), "São Paulo".to_string()]);
    let model = LinearModel::new(vec![1.0, 2.0, 3.0], 0.0);

    let err = PredictionService::new(encoder, model).unwrap_err();
    assert!(matches!(
        err,
        PredictionError::DimensionMismatch {
            encoded: 13,
            expected: 3
        }
    ));
}
