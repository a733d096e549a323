use crate::application::prediction::{Prediction, PredictionService};
use crate::application::trends::{self, CityStat, RentalRow};
use crate::domain::property::{Furnishing, PetPolicy, PropertyRecord};
use crate::interfaces::charts;
use eframe::egui;

/// The interactive form over the prediction service.
///
/// All derived data (importances, per-city aggregates) is computed once at
/// construction; per-frame work is widget rendering plus at most one
/// prediction per button press.
pub struct RentScopeApp {
    service: PredictionService,
    importances: Vec<(String, f64)>,
    mean_by_city: Vec<CityStat>,
    mode_by_city: Vec<CityStat>,

    // Form state
    city: String,
    area: f64,
    rooms: u32,
    bathroom: u32,
    parking_spaces: u32,
    floor: u32,
    animal: PetPolicy,
    furniture: Furnishing,
    hoa: f64,
    rent_amount: f64,
    property_tax: f64,
    fire_insurance: f64,

    // Last prediction, or the user-facing error that replaced it
    outcome: Option<Result<Prediction, String>>,
}

impl RentScopeApp {
    pub fn new(service: PredictionService, rentals: &[RentalRow]) -> Self {
        let importances = service.importances();
        let mean_by_city = trends::mean_total_by_city(rentals);
        let mode_by_city = trends::mode_total_by_city(rentals);
        let city = service
            .encoder()
            .categories()
            .first()
            .cloned()
            .unwrap_or_default();

        Self {
            service,
            importances,
            mean_by_city,
            mode_by_city,
            city,
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
            outcome: None,
        }
    }

    fn record_from_form(&self) -> PropertyRecord {
        PropertyRecord {
            city: self.city.clone(),
            area: self.area,
            rooms: self.rooms,
            bathroom: self.bathroom,
            parking_spaces: self.parking_spaces,
            floor: self.floor,
            animal: self.animal,
            furniture: self.furniture,
            hoa: self.hoa,
            rent_amount: self.rent_amount,
            property_tax: self.property_tax,
            fire_insurance: self.fire_insurance,
        }
    }

    fn numeric_input(ui: &mut egui::Ui, label: &str, value: &mut f64) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).speed(10.0).range(0.0..=f64::MAX));
        });
    }

    fn count_input(ui: &mut egui::Ui, label: &str, value: &mut u32) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).speed(1.0).range(0..=u32::MAX));
        });
    }
}

impl eframe::App for RentScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🏠 RentScope");
                ui.separator();
                ui.label("Total rental cost estimation");
            });
        });

        egui::SidePanel::left("property_form")
            .default_width(320.0)
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("Property details");
                ui.separator();

                let categories: Vec<String> = self.service.encoder().categories().to_vec();
                egui::ComboBox::from_label("City")
                    .selected_text(self.city.clone())
                    .show_ui(ui, |ui| {
                        for category in categories {
                            ui.selectable_value(&mut self.city, category.clone(), category.clone());
                        }
                    });

                Self::numeric_input(ui, "Area (m²)", &mut self.area);
                Self::count_input(ui, "Rooms", &mut self.rooms);
                Self::count_input(ui, "Bathrooms", &mut self.bathroom);
                Self::count_input(ui, "Parking spaces", &mut self.parking_spaces);
                Self::count_input(ui, "Floor", &mut self.floor);

                egui::ComboBox::from_label("Animals allowed?")
                    .selected_text(match self.animal {
                        PetPolicy::Allowed => "Yes",
                        PetPolicy::NotAllowed => "No",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.animal, PetPolicy::Allowed, "Yes");
                        ui.selectable_value(&mut self.animal, PetPolicy::NotAllowed, "No");
                    });

                egui::ComboBox::from_label("Furnished?")
                    .selected_text(match self.furniture {
                        Furnishing::Furnished => "Yes",
                        Furnishing::Unfurnished => "No",
                    })
                    .show_ui(ui, |ui| {
                        ui.selectable_value(&mut self.furniture, Furnishing::Furnished, "Yes");
                        ui.selectable_value(&mut self.furniture, Furnishing::Unfurnished, "No");
                    });

                Self::numeric_input(ui, "HOA (R$)", &mut self.hoa);
                Self::numeric_input(ui, "Rent amount (R$)", &mut self.rent_amount);
                Self::numeric_input(ui, "Property tax (R$)", &mut self.property_tax);
                Self::numeric_input(ui, "Fire insurance (R$)", &mut self.fire_insurance);

                ui.add_space(10.0);
                if ui.button("Estimate total cost").clicked() {
                    let record = self.record_from_form();
                    self.outcome = Some(self.service.predict(&record).map_err(|e| e.to_string()));
                }

                ui.add_space(10.0);
                match &self.outcome {
                    Some(Ok(prediction)) => {
                        ui.label(
                            egui::RichText::new(format!("R$ {:.2}", prediction.rounded()))
                                .heading()
                                .strong()
                                .color(egui::Color32::GREEN),
                        );
                    }
                    Some(Err(message)) => {
                        ui.colored_label(egui::Color32::RED, message.as_str());
                    }
                    None => {
                        ui.label(
                            egui::RichText::new("Fill in the details and press Estimate.")
                                .small()
                                .color(egui::Color32::GRAY),
                        );
                    }
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Feature importance");
                ui.add_space(5.0);
                charts::render_importance_bars(
                    ui,
                    &self.importances,
                    egui::Color32::from_rgb(100, 200, 255),
                    220.0,
                );

                ui.add_space(15.0);
                ui.separator();
                ui.heading("Average total by city");
                ui.add_space(5.0);
                charts::render_city_bars(
                    ui,
                    "mean_by_city",
                    "Mean total (R$)",
                    &self.mean_by_city,
                    egui::Color32::from_rgb(255, 165, 0),
                    220.0,
                );

                ui.add_space(15.0);
                ui.separator();
                ui.heading("Most frequent total by city");
                ui.add_space(5.0);
                charts::render_city_bars(
                    ui,
                    "mode_by_city",
                    "Mode total (R$)",
                    &self.mode_by_city,
                    egui::Color32::from_rgb(100, 255, 160),
                    220.0,
                );
            });
        });
    }
}
