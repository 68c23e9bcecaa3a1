use data_loader::{Dataset, DatasetSource};
use std::time::Instant;

#[tokio::main]
async fn main() {
    let source = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<DatasetSource>().unwrap_or_default())
        .unwrap_or_else(DatasetSource::default);

    println!("Loading movie dataset from {}...\n", source);

    let start = Instant::now();
    let dataset = Dataset::load(&source).await.expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let invalid_dates = dataset
        .iter()
        .filter(|m| !m.release_date.is_valid())
        .count();
    let missing_posters = dataset.iter().filter(|m| m.poster_url.is_none()).count();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", dataset.len());
    println!("Invalid release dates: {}", invalid_dates);
    println!("Missing posters: {}", missing_posters);
}
