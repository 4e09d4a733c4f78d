//! Writes a deterministic sample backend payload to `sample_payload.csv`,
//! shaped like the optimization service output: one row per community with
//! geometry columns and paired WITH/WITHOUT metric columns.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Average consumption proxy used for the synthetic CO2 columns.
const CO2_KG_PER_KM: f64 = 0.192;
/// Assumed rural driving speed for the synthetic duration columns.
const AVG_SPEED_KM_H: f64 = 70.0;

fn main() {
    let mut rng = SimpleRng::new(42);

    let communities = [
        "Birch Narrows",
        "Clearwater River",
        "Cumberland House",
        "Deschambault Lake",
        "Fond du Lac",
        "Lake View",
        "Montreal Lake",
        "Pelican Narrows",
        "Sandy Bay",
        "Southend",
        "Stanley Mission",
        "Wollaston Lake",
    ];

    // (name, lat, lng)
    let clinics = [
        ("Central Clinic", 53.20, -105.75),
        ("Northern Health Centre", 55.10, -105.28),
        ("Riverside Medical", 54.45, -103.90),
        ("Lakeland Clinic", 54.00, -106.60),
    ];

    let mut writer =
        csv::Writer::from_path("sample_payload.csv").expect("Failed to create output file");
    writer
        .write_record([
            "Title",
            "Latitude",
            "Longitude",
            "Nearest Clinic",
            "Clinic Latitude",
            "Clinic Longitude",
            "Google Distance (km)",
            "Duration (hours)",
            "WITH_total_distance (km)",
            "WITHOUT_total_distance (km)",
            "WITH_total_duration (hours)",
            "WITHOUT_total_duration (hours)",
            "WITH_total_CO2 (kg)",
            "WITHOUT_total_CO2 (kg)",
            "WITH_total_trips",
            "WITHOUT_total_trips",
        ])
        .expect("Failed to write header");

    for (i, name) in communities.iter().enumerate() {
        let lat = rng.gauss(54.3, 0.9);
        let lng = rng.gauss(-105.2, 1.1);

        let (clinic_name, clinic_lat, clinic_lng) =
            clinics[(rng.next_u64() as usize) % clinics.len()];

        let distance_km = rng.gauss(55.0, 18.0).abs().max(8.0);
        let duration_hours = distance_km / AVG_SPEED_KM_H;

        // Annual round trips to the clinic; the intervention (virtual care)
        // replaces a share of them.
        let without_trips = rng.gauss(140.0, 35.0).abs().max(20.0).round();
        let with_trips = (without_trips * rng.gauss(0.45, 0.08).clamp(0.2, 0.8)).round();

        let without_distance = without_trips * distance_km * 2.0;
        let with_distance = with_trips * distance_km * 2.0;
        let without_duration = without_distance / AVG_SPEED_KM_H;
        let with_duration = with_distance / AVG_SPEED_KM_H;
        let without_co2 = without_distance * CO2_KG_PER_KM;
        let with_co2 = with_distance * CO2_KG_PER_KM;

        writer
            .write_record([
                name.to_string(),
                format!("{lat:.4}"),
                format!("{lng:.4}"),
                clinic_name.to_string(),
                format!("{clinic_lat:.2}"),
                format!("{clinic_lng:.2}"),
                format!("{distance_km:.2}"),
                format!("{duration_hours:.2}"),
                format!("{with_distance:.2}"),
                format!("{without_distance:.2}"),
                format!("{with_duration:.2}"),
                format!("{without_duration:.2}"),
                format!("{with_co2:.2}"),
                format!("{without_co2:.2}"),
                format!("{with_trips:.0}"),
                format!("{without_trips:.0}"),
            ])
            .unwrap_or_else(|e| panic!("Failed to write row {i}: {e}"));
    }

    writer.flush().expect("Failed to flush output");

    println!(
        "Wrote {} community rows ({} clinics) to sample_payload.csv",
        communities.len(),
        clinics.len()
    );
}
