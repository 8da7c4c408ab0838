//! Shortest co-starring path between two people.
//!
//! The graph is never materialised: each person's neighbours are generated from
//! the dataset when a node for that person is created. Nodes live in an arena
//! ([`SearchTree`]) and point at their parent by index, so the tree is dropped in
//! one piece when the search returns.

use std::collections::HashSet;

use log::{debug, trace};

use crate::dataset::{Dataset, MovieId, PersonId};
use crate::error::{DegreesError, Result};
use crate::frontier::{Frontier, QueueFrontier};

/// Position of a node inside its [`SearchTree`].
pub type NodeIndex = usize;

/// A person, and the movie they were reached through (`None` for the source).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub movie: Option<MovieId>,
    pub person: PersonId,
}

impl State {
    pub fn source(person: impl Into<PersonId>) -> Self {
        Self {
            movie: None,
            person: person.into(),
        }
    }

    pub fn reached(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: Some(movie.into()),
            person: person.into(),
        }
    }
}

/// One step of the search: a state, where it came from, and where it can go next.
#[derive(Debug, Clone)]
pub struct Node {
    state: State,
    parent: Option<NodeIndex>,
    candidates: Vec<State>,
}

impl Node {
    pub fn new(state: State, parent: Option<NodeIndex>, candidates: Vec<State>) -> Self {
        Self {
            state,
            parent,
            candidates,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn candidates(&self) -> &[State] {
        &self.candidates
    }
}

/// Arena owning every node created during one search.
#[derive(Debug, Default)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    pub fn push(&mut self, node: Node) -> NodeIndex {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    // indices handed out by `push` during the running search are always valid
    pub(crate) fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Follows parents from `index` up to the node for `source`, returning the
    /// (movie, person) links in source-to-target order. The source itself is excluded.
    pub fn path_to(&self, index: NodeIndex, source: &str) -> Vec<(MovieId, PersonId)> {
        let mut path = Vec::new();
        let mut current = self.get(index);
        while let Some(node) = current {
            if node.state.person == source {
                break;
            }
            if let Some(movie) = &node.state.movie {
                path.push((movie.clone(), node.state.person.clone()));
            }
            current = node.parent.and_then(|parent| self.get(parent));
        }
        path.reverse();
        path
    }
}

/// Search engine over a borrowed, read-only dataset.
///
/// Every call builds its own tree, frontier and explored set, so one `Search`
/// (or many, across threads) can serve any number of queries.
#[derive(Debug, Clone, Copy)]
pub struct Search<'a> {
    dataset: &'a Dataset,
}

impl<'a> Search<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    /// Fewest-links path from `source` to `target`, or `None` when they are not connected.
    pub fn shortest_path(&self, source: &str, target: &str) -> Result<Option<Vec<(MovieId, PersonId)>>> {
        self.find_path_with::<QueueFrontier<NodeIndex>>(source, target)
    }

    /// Runs the search loop with an arbitrary frontier discipline.
    ///
    /// Only a FIFO frontier guarantees the returned path is a shortest one.
    pub fn find_path_with<F>(&self, source: &str, target: &str) -> Result<Option<Vec<(MovieId, PersonId)>>>
    where
        F: Frontier<NodeIndex>,
    {
        for id in [source, target] {
            if !self.dataset.contains_person(id) {
                return Err(DegreesError::UnknownPerson(id.to_string()));
            }
        }
        if source == target {
            return Ok(Some(Vec::new()));
        }

        let mut tree = SearchTree::default();
        let mut frontier = F::default();
        let mut explored: HashSet<PersonId> = HashSet::new();
        let mut queued: HashSet<PersonId> = HashSet::new();

        debug!("searching {} -> {}", source, target);
        let root = tree.push(Node::new(
            State::source(source),
            None,
            self.candidates_for(source)?,
        ));
        explored.insert(source.to_string());
        self.expand(root, &mut tree, &mut frontier, &explored, &mut queued)?;

        loop {
            if frontier.is_empty() {
                debug!(
                    "{} and {} not connected ({} people explored)",
                    source,
                    target,
                    explored.len()
                );
                return Ok(None);
            }

            let index = frontier.remove()?;
            let person = tree.node(index).state().person.clone();
            queued.remove(&person);

            if person == target {
                let path = tree.path_to(index, source);
                debug!(
                    "found {} link(s) after exploring {} people ({} nodes)",
                    path.len(),
                    explored.len(),
                    tree.len()
                );
                return Ok(Some(path));
            }

            explored.insert(person);
            self.expand(index, &mut tree, &mut frontier, &explored, &mut queued)?;
        }
    }

    /// Creates a child node for every candidate whose person is neither explored
    /// nor already waiting in the frontier.
    fn expand<F>(
        &self,
        parent: NodeIndex,
        tree: &mut SearchTree,
        frontier: &mut F,
        explored: &HashSet<PersonId>,
        queued: &mut HashSet<PersonId>,
    ) -> Result<()>
    where
        F: Frontier<NodeIndex>,
    {
        let candidates = tree.node(parent).candidates().to_vec();
        for state in candidates {
            if explored.contains(&state.person) || queued.contains(&state.person) {
                continue;
            }
            let next = self.candidates_for(&state.person)?;
            queued.insert(state.person.clone());
            let index = tree.push(Node::new(state, Some(parent), next));
            frontier.add(index);
        }
        trace!(
            "expanded node {}: frontier {}, explored {}",
            parent,
            frontier.len(),
            explored.len()
        );
        Ok(())
    }

    fn candidates_for(&self, person: &str) -> Result<Vec<State>> {
        Ok(self
            .dataset
            .neighbors_for_person(person)?
            .into_iter()
            .map(|(movie, star)| State::reached(movie, star))
            .collect())
    }
}

/// Fewest-links path between two people in `dataset`.
pub fn shortest_path(dataset: &Dataset, source: &str, target: &str) -> Result<Option<Vec<(MovieId, PersonId)>>> {
    Search::new(dataset).shortest_path(source, target)
}
