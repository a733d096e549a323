use clap::Parser;
use rentscope::application::prediction::PredictionService;
use rentscope::application::trends;
use rentscope::config::Config;
use rentscope::domain::property::{Furnishing, PetPolicy, PropertyRecord};
use rentscope::infrastructure::{artifacts, dataset};
use std::error::Error;

#[derive(Parser, Debug)]
#[command(author, version, about = "Estimate the total rental cost of a property", long_about = None)]
struct Args {
    /// City (must be one of the fitted categories, e.g. "Campinas")
    #[arg(long)]
    city: String,

    /// Area in m²
    #[arg(long, default_value_t = 0.0)]
    area: f64,

    /// Number of rooms
    #[arg(long, default_value_t = 0)]
    rooms: u32,

    /// Number of bathrooms
    #[arg(long, default_value_t = 0)]
    bathroom: u32,

    /// Number of parking spaces
    #[arg(long, default_value_t = 0)]
    parking_spaces: u32,

    /// Floor number
    #[arg(long, default_value_t = 0)]
    floor: u32,

    /// Animals allowed? (yes/no)
    #[arg(long, default_value = "no")]
    animal: PetPolicy,

    /// Furnished? (yes/no)
    #[arg(long, default_value = "no")]
    furniture: Furnishing,

    /// Homeowners association fee in R$
    #[arg(long, default_value_t = 0.0)]
    hoa: f64,

    /// Rent amount in R$
    #[arg(long, default_value_t = 0.0)]
    rent_amount: f64,

    /// Property tax in R$
    #[arg(long, default_value_t = 0.0)]
    property_tax: f64,

    /// Fire insurance in R$
    #[arg(long, default_value_t = 0.0)]
    fire_insurance: f64,

    /// Also print the per-city average and mode of the dataset totals
    #[arg(long)]
    trends: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let encoder = artifacts::load_encoder(&config.encoder_path)?;
    let model = artifacts::load_model(&config.model_path)?;
    let service = PredictionService::new(encoder, model)?;

    let record = PropertyRecord {
        city: args.city,
        area: args.area,
        rooms: args.rooms,
        bathroom: args.bathroom,
        parking_spaces: args.parking_spaces,
        floor: args.floor,
        animal: args.animal,
        furniture: args.furniture,
        hoa: args.hoa,
        rent_amount: args.rent_amount,
        property_tax: args.property_tax,
        fire_insurance: args.fire_insurance,
    };

    match service.predict(&record) {
        Ok(prediction) => {
            println!("Estimated total cost: R$ {:.2}", prediction.rounded());
        }
        Err(e) => {
            // Unknown city is a rejected input, not a crash
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }

    if args.trends {
        let rentals = dataset::load_rentals(&config.dataset_path)?;

        println!("\nAverage total by city:");
        for stat in trends::mean_total_by_city(&rentals) {
            println!("  {:<16} R$ {}", stat.city, stat.total);
        }

        println!("\nMost frequent total by city:");
        for stat in trends::mode_total_by_city(&rentals) {
            println!("  {:<16} R$ {}", stat.city, stat.total);
        }
    }

    Ok(())
}
