//! Degrees-of-separation narrative printed for a search result.

use std::io::Write;

use crate::dataset::{Dataset, MovieId, PersonId};
use crate::error::{DegreesError, Result};

/// Writes the degrees-of-separation narrative for a search result.
pub fn write_report<W: Write>(
    mut out: W,
    dataset: &Dataset,
    source: &str,
    path: Option<&[(MovieId, PersonId)]>,
) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => {
            writeln!(out, "Not connected.")?;
            return Ok(());
        }
    };

    writeln!(out, "{} degrees of separation.", path.len())?;
    let mut previous = source;
    for (i, (movie_id, person_id)) in path.iter().enumerate() {
        let person1 = person_name(dataset, previous)?;
        let person2 = person_name(dataset, person_id)?;
        let movie = dataset
            .movie(movie_id)
            .ok_or_else(|| DegreesError::UnknownMovie(movie_id.clone()))?;
        writeln!(out, "{}: {} and {} starred in {}", i + 1, person1, person2, movie.title)?;
        previous = person_id.as_str();
    }
    Ok(())
}

fn person_name<'a>(dataset: &'a Dataset, id: &str) -> Result<&'a str> {
    dataset
        .person(id)
        .map(|person| person.name.as_str())
        .ok_or_else(|| DegreesError::UnknownPerson(id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetBuilder;
    use crate::search::shortest_path;

    fn dataset() -> Dataset {
        let mut builder = DatasetBuilder::new();
        builder
            .add_person("1", "Tom Cruise", None)
            .add_person("2", "Kevin Bacon", None)
            .add_person("3", "Tom Hanks", None)
            .add_person("4", "Nobody", None)
            .add_movie("10", "A Few Good Men", None)
            .add_movie("11", "Apollo 13", None);
        for (person, movie) in [("1", "10"), ("2", "10"), ("2", "11"), ("3", "11")] {
            builder.add_star(person, movie).unwrap();
        }
        builder.build()
    }

    fn render(source: &str, target: &str) -> String {
        let dataset = dataset();
        let path = shortest_path(&dataset, source, target).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &dataset, source, path.as_deref()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_report_two_degrees() {
        assert_eq!(
            render("1", "3"),
            "2 degrees of separation.\n\
             1: Tom Cruise and Kevin Bacon starred in A Few Good Men\n\
             2: Kevin Bacon and Tom Hanks starred in Apollo 13\n"
        );
    }

    #[test]
    fn test_report_zero_degrees() {
        assert_eq!(render("2", "2"), "0 degrees of separation.\n");
    }

    #[test]
    fn test_report_not_connected() {
        assert_eq!(render("1", "4"), "Not connected.\n");
    }
}
