use rand::prelude::SliceRandom;
use rand::Rng;

use library_catalog::api::CreateBookDto;

/// Url of the catalog under test, `LIBRARY_CATALOG_URL` or local default
pub fn catalog_url() -> String {
    std::env::var("LIBRARY_CATALOG_URL").unwrap_or("http://127.0.0.1:8080".to_string())
}

pub fn generate_authors(rng: &mut impl Rng, no_of_authors: usize) -> Vec<String> {
    (0..no_of_authors)
        .filter_map(|_| {
            Some(format!(
                "{} {}",
                FIRST_NAMES.choose(rng)?,
                LAST_NAMES.choose(rng)?
            ))
        })
        .collect()
}

pub fn generate_books(
    rng: &mut impl Rng,
    no_of_books_to_generate: usize,
    authors: &[String],
) -> Vec<CreateBookDto> {
    (0..no_of_books_to_generate)
        .map(|no| CreateBookDto {
            name: Some(format!(
                "A tale of number {} and {}",
                no,
                rng.gen_range(0..1000)
            )),
            description: Some("Some long description that is long".to_string()),
            authors: Some(
                (0..rng.gen_range(1..3))
                    .filter_map(|_| authors.choose(rng))
                    .cloned()
                    .collect(),
            ),
            year_of_publication: rng.gen_range(1900..2025),
            number_of_words: rng.gen_range(1_000..500_000),
            rating: rng.gen_range(0..=10),
        })
        .collect()
}

const FIRST_NAMES: [&str; 16] = [
    "Ryan", "Dorothy", "Jacob", "Amy", "Nicholas", "Kathleen", "Gary", "Angela", "Eric",
    "Shirley", "Jonathan", "Anna", "Stephen", "Brenda", "Larry", "Pamela",
];

const LAST_NAMES: [&str; 16] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas",
];
