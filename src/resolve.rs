//! Turning a typed-in name into a person id.

use std::io::{BufRead, Write};

use serde::Deserialize;

use crate::dataset::{Dataset, PersonId};
use crate::error::{DegreesError, Result};

/// What to do when several people share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    /// List the candidates and ask for an id
    #[default]
    Prompt,
    /// Take the candidate with the smallest id
    First,
    /// Refuse to guess
    Strict,
}

/// Resolves `name` to a single person id, asking on `input`/`output` if the
/// policy is `Prompt` and the name is ambiguous.
pub fn resolve_person<R: BufRead, W: Write>(
    dataset: &Dataset,
    name: &str,
    policy: ResolutionPolicy,
    mut input: R,
    mut output: W,
) -> Result<PersonId> {
    let person_ids = dataset.person_ids_for_name(name);
    match person_ids.as_slice() {
        [] => Err(DegreesError::PersonNotFound(name.to_string())),
        [only] => Ok((*only).clone()),
        [first, ..] => match policy {
            ResolutionPolicy::First => Ok((*first).clone()),
            ResolutionPolicy::Strict => Err(DegreesError::AmbiguousName {
                name: name.to_string(),
                candidates: person_ids.iter().map(|id| (*id).clone()).collect(),
            }),
            ResolutionPolicy::Prompt => {
                writeln!(output, "Which '{}'?", name)?;
                for id in &person_ids {
                    if let Some(person) = dataset.person(id) {
                        writeln!(
                            output,
                            "ID: {}, Name: {}, Birth: {}",
                            id,
                            person.name,
                            person.birth.as_deref().unwrap_or("")
                        )?;
                    }
                }
                write!(output, "Intended Person ID: ")?;
                output.flush()?;

                let mut answer = String::new();
                input.read_line(&mut answer)?;
                let answer = answer.trim();
                person_ids
                    .iter()
                    .find(|id| id.as_str() == answer)
                    .map(|id| (*id).clone())
                    .ok_or_else(|| DegreesError::InvalidSelection(answer.to_string()))
            }
        },
    }
}
