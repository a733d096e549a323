use rentscope::application::trends::{mean_total_by_city, mode_total_by_city};
use rentscope::infrastructure::dataset;
use rust_decimal_macros::dec;
use std::path::Path;

#[test]
fn shipped_dataset_aggregates() {
    let rentals = dataset::load_rentals(Path::new("data/houses_to_rent_v2.csv")).unwrap();
    assert!(!rentals.is_empty());

    let means = mean_total_by_city(&rentals);
    let modes = mode_total_by_city(&rentals);

    // One scalar per city, same grouping for both reductions
    assert_eq!(means.len(), 5);
    assert_eq!(modes.len(), 5);
    for (mean, mode) in means.iter().zip(modes.iter()) {
        assert_eq!(mean.city, mode.city);
    }

    // Sorted by city name
    let campinas_mean = means.iter().find(|s| s.city == "Campinas").unwrap();
    assert_eq!(campinas_mean.total, dec!(2363.75));

    let campinas_mode = modes.iter().find(|s| s.city == "Campinas").unwrap();
    assert_eq!(campinas_mode.total, dec!(1877));
}

#[test]
fn mode_tie_resolves_to_first_dataset_value() {
    let rentals = dataset::load_rentals(Path::new("data/houses_to_rent_v2.csv")).unwrap();
    let modes = mode_total_by_city(&rentals);

    // São Paulo has 5618 and 836 both twice; 5618 appears first in the file
    let sao_paulo = modes.iter().find(|s| s.city == "São Paulo").unwrap();
    assert_eq!(sao_paulo.total, dec!(5618));

    // Belo Horizonte totals are all distinct, so its mode is the first row
    let belo_horizonte = modes.iter().find(|s| s.city == "Belo Horizonte").unwrap();
    assert_eq!(belo_horizonte.total, dec!(1830));
}
