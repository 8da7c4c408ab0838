//! CSV loading for `people.csv`, `movies.csv` and `stars.csv`.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::dataset::{Dataset, DatasetBuilder};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    year: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Loads the three CSV files found in `directory`.
pub fn load_data(directory: &Path) -> Result<Dataset> {
    let people = File::open(directory.join("people.csv"))?;
    let movies = File::open(directory.join("movies.csv"))?;
    let stars = File::open(directory.join("stars.csv"))?;

    let dataset = load_from_readers(people, movies, stars)?;
    info!(
        "loaded {} people and {} movies from {}",
        dataset.len_people(),
        dataset.len_movies(),
        directory.display()
    );
    Ok(dataset)
}

/// Same as [`load_data`] but from any readers, each starting with its header row.
pub fn load_from_readers<P: Read, M: Read, S: Read>(people: P, movies: M, stars: S) -> Result<Dataset> {
    let mut builder = DatasetBuilder::new();

    for row in csv::Reader::from_reader(people).deserialize() {
        let row: PersonRow = row?;
        builder.add_person(row.id, row.name, non_empty(row.birth));
    }

    for row in csv::Reader::from_reader(movies).deserialize() {
        let row: MovieRow = row?;
        builder.add_movie(row.id, row.title, non_empty(row.year));
    }

    let mut skipped = 0;
    for row in csv::Reader::from_reader(stars).deserialize() {
        let row: StarRow = row?;
        if builder.add_star(&row.person_id, &row.movie_id).is_err() {
            skipped += 1; // credit for a person or movie we never saw
        }
    }
    if skipped > 0 {
        warn!("skipped {} star rows referencing unknown people or movies", skipped);
    }

    Ok(builder.build())
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DegreesError;
    use crate::search::shortest_path;
    use std::fs;
    use tempfile::TempDir;

    const PEOPLE: &str = "id,name,birth\n102,Kevin Bacon,1958\n129,Tom Cruise,1962\n144,Cary Elwes,\n158,Tom Hanks,1956\n";
    const MOVIES: &str = "id,title,year\n104257,A Few Good Men,1992\n112384,Apollo 13,1995\n";
    const STARS: &str = "person_id,movie_id\n102,104257\n129,104257\n102,112384\n158,112384\n999,112384\n158,404\n";

    fn write_dataset(dir: &Path) {
        fs::write(dir.join("people.csv"), PEOPLE).unwrap();
        fs::write(dir.join("movies.csv"), MOVIES).unwrap();
        fs::write(dir.join("stars.csv"), STARS).unwrap();
    }

    #[test]
    fn test_load_data() {
        let temp_dir = TempDir::new().unwrap();
        write_dataset(temp_dir.path());

        let dataset = load_data(temp_dir.path()).unwrap();
        assert_eq!(dataset.len_people(), 4);
        assert_eq!(dataset.len_movies(), 2);

        let bacon = dataset.person("102").unwrap();
        assert_eq!(bacon.name, "Kevin Bacon");
        assert_eq!(bacon.birth.as_deref(), Some("1958"));
        assert_eq!(bacon.movies.len(), 2);

        let apollo = dataset.movie("112384").unwrap();
        assert_eq!(apollo.year.as_deref(), Some("1995"));
        assert_eq!(apollo.stars.len(), 2); // unknown person 999 dropped
    }

    #[test]
    fn test_empty_birth_is_none() {
        let temp_dir = TempDir::new().unwrap();
        write_dataset(temp_dir.path());

        let dataset = load_data(temp_dir.path()).unwrap();
        assert_eq!(dataset.person("144").unwrap().birth, None);
        assert_eq!(dataset.person_ids_for_name("cary elwes"), vec!["144"]);
    }

    #[test]
    fn test_loaded_dataset_is_searchable() {
        let dataset = load_from_readers(PEOPLE.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap();
        let path = shortest_path(&dataset, "129", "158").unwrap().unwrap();
        assert_eq!(
            path,
            vec![
                ("104257".to_string(), "102".to_string()),
                ("112384".to_string(), "158".to_string()),
            ]
        );
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("people.csv"), PEOPLE).unwrap();

        let err = load_data(temp_dir.path()).unwrap_err();
        assert!(matches!(err, DegreesError::Io(_)));
    }

    #[test]
    fn test_malformed_row() {
        let people = "id,name,birth\n1,Only Two Fields\n";
        let err = load_from_readers(people.as_bytes(), MOVIES.as_bytes(), STARS.as_bytes()).unwrap_err();
        assert!(matches!(err, DegreesError::Csv(_)));
    }
}
