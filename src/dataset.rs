//! People, movies and the co-starring relation between them.
//!
//! A [`Dataset`] is assembled once through a [`DatasetBuilder`] and is read-only
//! afterwards, so any number of searches can borrow it at the same time.

use std::collections::{BTreeSet, HashMap};

use crate::error::{DegreesError, Result};

pub type PersonId = String;
pub type MovieId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<String>,
    pub movies: BTreeSet<MovieId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<String>,
    pub stars: BTreeSet<PersonId>,
}

/// Mutable staging area used by the loader and by tests.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a person. A repeated id replaces name and birth but keeps credits.
    pub fn add_person(
        &mut self,
        id: impl Into<PersonId>,
        name: impl Into<String>,
        birth: Option<String>,
    ) -> &mut Self {
        let id = id.into();
        let name = name.into();

        let movies = match self.people.remove(&id) {
            Some(previous) => {
                self.unindex_name(&previous.name, &id);
                previous.movies
            }
            None => BTreeSet::new(),
        };

        self.names
            .entry(name.to_lowercase())
            .or_default()
            .insert(id.clone());
        self.people.insert(
            id.clone(),
            Person {
                id,
                name,
                birth,
                movies,
            },
        );
        self
    }

    /// Registers a movie. A repeated id replaces title and year but keeps credits.
    pub fn add_movie(
        &mut self,
        id: impl Into<MovieId>,
        title: impl Into<String>,
        year: Option<String>,
    ) -> &mut Self {
        let id = id.into();
        let stars = self
            .movies
            .remove(&id)
            .map(|previous| previous.stars)
            .unwrap_or_default();

        self.movies.insert(
            id.clone(),
            Movie {
                id,
                title: title.into(),
                year,
                stars,
            },
        );
        self
    }

    /// Links a person and a movie in both directions. Both must already be registered.
    pub fn add_star(&mut self, person_id: &str, movie_id: &str) -> Result<&mut Self> {
        if !self.movies.contains_key(movie_id) {
            return Err(DegreesError::UnknownMovie(movie_id.to_string()));
        }
        let person = self
            .people
            .get_mut(person_id)
            .ok_or_else(|| DegreesError::UnknownPerson(person_id.to_string()))?;
        person.movies.insert(movie_id.to_string());

        if let Some(movie) = self.movies.get_mut(movie_id) {
            movie.stars.insert(person_id.to_string());
        }
        Ok(self)
    }

    pub fn build(self) -> Dataset {
        Dataset {
            people: self.people,
            movies: self.movies,
            names: self.names,
        }
    }

    fn unindex_name(&mut self, name: &str, id: &str) {
        let key = name.to_lowercase();
        if let Some(ids) = self.names.get_mut(&key) {
            ids.remove(id);
            if ids.is_empty() {
                self.names.remove(&key);
            }
        }
    }
}

/// Immutable people/movies graph plus the lower-cased name index.
#[derive(Debug, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Dataset {
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    /// Ids of everyone whose name matches case-insensitively, in id order.
    pub fn person_ids_for_name(&self, name: &str) -> Vec<&PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().collect())
            .unwrap_or_default()
    }

    pub fn len_people(&self) -> usize {
        self.people.len()
    }

    pub fn len_movies(&self) -> usize {
        self.movies.len()
    }

    /// Every (movie, co-star) pair reachable from `person_id` through one shared credit.
    ///
    /// The person appears as their own co-star in each of their movies. Pairs come
    /// back ordered by movie id then person id, which keeps searches reproducible.
    pub fn neighbors_for_person(&self, person_id: &str) -> Result<BTreeSet<(MovieId, PersonId)>> {
        let person = self
            .person(person_id)
            .ok_or_else(|| DegreesError::UnknownPerson(person_id.to_string()))?;

        let mut neighbors = BTreeSet::new();
        for movie_id in &person.movies {
            let movie = self
                .movie(movie_id)
                .ok_or_else(|| DegreesError::UnknownMovie(movie_id.clone()))?;
            for star in &movie.stars {
                neighbors.insert((movie_id.clone(), star.clone()));
            }
        }
        Ok(neighbors)
    }
}
