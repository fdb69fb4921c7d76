//! Writes a synthetic listings CSV shaped like the real export, so the
//! report can be exercised without shipping the dataset.
//!
//! Usage: gen_sample [path] [rows]

use std::error::Error;

use chrono::NaiveDate;
use rand::Rng;
use rand_distr::{Distribution, Normal, Poisson};

// (name, share of listings, price multiplier)
const BOROUGHS: [(&str, f64, f64); 5] = [
    ("Manhattan", 0.40, 1.5),
    ("Brooklyn", 0.35, 1.1),
    ("Queens", 0.15, 0.9),
    ("Bronx", 0.06, 0.7),
    ("Staten Island", 0.04, 0.8),
];

const ROOM_TYPES: [(&str, f64, f64); 4] = [
    ("Entire home/apt", 0.52, 1.3),
    ("Private room", 0.44, 0.7),
    ("Shared room", 0.03, 0.45),
    ("Hotel room", 0.01, 1.6),
];

struct Samplers {
    log_price: Normal<f64>,
    rating: Normal<f64>,
    reviews: Poisson<f64>,
}

fn samplers() -> Result<Samplers, Box<dyn Error>> {
    Ok(Samplers {
        log_price: Normal::new(4.6, 0.6)?,
        rating: Normal::new(4.7, 0.35)?,
        reviews: Poisson::new(24.0)?,
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "listings.csv".to_string());
    let rows: usize = match args.next() {
        Some(n) => n.parse()?,
        None => 800,
    };

    let mut rng = rand::rng();
    let dists = samplers()?;
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).ok_or("bad start date")?;

    let mut writer = csv::Writer::from_path(&path)?;
    writer.write_record([
        "id",
        "name",
        "neighbourhood_group",
        "room_type",
        "price",
        "review_scores_rating",
        "number_of_reviews",
        "host_is_superhost",
        "last_review",
    ])?;

    for id in 1..=rows {
        let (borough, borough_factor) = pick(&mut rng, &BOROUGHS);
        let (room_type, room_factor) = pick(&mut rng, &ROOM_TYPES);
        let superhost = rng.random_bool(0.22);

        let price = (dists.log_price.sample(&mut rng).exp() * borough_factor * room_factor).max(10.0);
        // A few rows come out dirty on purpose; cleaning has a job to do
        let price_text = match rng.random_range(0..100) {
            0 => String::new(),
            1 => "$0.00".to_string(),
            _ => dollars(price),
        };

        let rating = if rng.random_bool(0.12) {
            None
        } else {
            let bias = if superhost { 0.15 } else { 0.0 };
            Some((dists.rating.sample(&mut rng) + bias).clamp(1.0, 5.0))
        };

        let reviews = dists.reviews.sample(&mut rng) as u32;
        let last_review = if rng.random_bool(0.05) {
            None
        } else {
            start.checked_add_days(chrono::Days::new(rng.random_range(0..900)))
        };

        writer.write_record([
            id.to_string(),
            format!("{borough} stay #{id}"),
            borough.to_string(),
            room_type.to_string(),
            price_text,
            rating.map(|r| format!("{r:.2}")).unwrap_or_default(),
            reviews.to_string(),
            if superhost { "t" } else { "f" }.to_string(),
            last_review.map(|d| d.to_string()).unwrap_or_default(),
        ])?;
    }
    writer.flush()?;

    println!("wrote {rows} listings to {path}");
    Ok(())
}

fn pick<R: Rng>(rng: &mut R, table: &[(&'static str, f64, f64)]) -> (&'static str, f64) {
    let roll: f64 = rng.random_range(0.0..1.0);
    let mut acc = 0.0;
    for &(name, weight, factor) in table {
        acc += weight;
        if roll < acc {
            return (name, factor);
        }
    }
    let last = table[table.len() - 1];
    (last.0, last.2)
}

fn dollars(amount: f64) -> String {
    let cents = (amount * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;
    let mut digits = whole.to_string();
    let mut grouped = String::new();
    while digits.len() > 3 {
        let tail = digits.split_off(digits.len() - 3);
        grouped = if grouped.is_empty() {
            tail
        } else {
            format!("{tail},{grouped}")
        };
    }
    if !grouped.is_empty() {
        grouped = format!("{digits},{grouped}");
    } else {
        grouped = digits;
    }
    format!("${grouped}.{frac:02}")
}
