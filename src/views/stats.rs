// src/views/stats.rs
//
// The four text fields next to the globe: country name, export bags,
// import bags, cups drunk.

use nannou::prelude::*;

use crate::models::CountryRecord;
use crate::utilities::format_thousands;

const LINE_HEIGHT: f32 = 20.0;
const FONT_SIZE: u32 = 14;

pub struct StatsPanel {
    country: String,
    export_bags: String,
    import_bags: String,
    cups: String,
}

impl StatsPanel {
    pub fn new() -> Self {
        Self {
            country: "-".to_string(),
            export_bags: "-".to_string(),
            import_bags: "-".to_string(),
            cups: "-".to_string(),
        }
    }

    pub fn set(&mut self, record: &CountryRecord) {
        self.country = record.name.clone();
        self.export_bags = format_thousands(record.export_bags);
        self.import_bags = format_thousands(record.import_bags);
        self.cups = match record.cups {
            Some(cups) => format_thousands(cups),
            None => "n/a".to_string(),
        };
    }

    pub fn draw(&self, draw: &Draw, origin: Point2) {
        let lines = [
            self.country.clone(),
            format!("Exports: {} bags", self.export_bags),
            format!("Imports: {} bags", self.import_bags),
            format!("Drunk: {} cups", self.cups),
        ];

        for (i, line) in lines.iter().enumerate() {
            draw.text(line)
                .x_y(origin.x + 90.0, origin.y - LINE_HEIGHT * i as f32)
                .w(180.0)
                .left_justify()
                .font_size(FONT_SIZE)
                .color(BLACK);
        }
    }
}

impl Default for StatsPanel {
    fn default() -> Self {
        Self::new()
    }
}
