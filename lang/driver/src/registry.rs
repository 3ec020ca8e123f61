use std::collections::BTreeMap;
use std::fmt;

use fxhash::FxHashMap as HashMap;
use serde::{Deserialize, Serialize};

/// What became of one module in a compile run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Compiled,
    /// An up-to-date artifact exists already.
    Unchanged,
    /// No reader supplied a source.
    Missing,
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Compiled => "compiled",
            Outcome::Unchanged => "unchanged",
            Outcome::Missing => "missing",
            Outcome::Failed => "failed",
        };
        f.write_str(s)
    }
}

enum State {
    Loading,
    Done(Outcome),
}

/// The state of every module name seen in one compile run.
///
/// A name enters as `Loading` and leaves as `Done`. Names are never removed,
/// so each module is loaded at most once per run.
#[derive(Default)]
pub struct Registry {
    entries: HashMap<String, State>,
}

impl Registry {
    /// Mark `name` as loading, unless it is known already.
    ///
    /// Returns `true` if the name was new.
    pub fn start(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }
        self.entries.insert(name.to_owned(), State::Loading);
        true
    }

    pub fn is_loading(&self, name: &str) -> bool {
        matches!(self.entries.get(name), Some(State::Loading))
    }

    pub fn finish(&mut self, name: &str, outcome: Outcome) {
        self.entries.insert(name.to_owned(), State::Done(outcome));
    }

    pub fn into_outcomes(self) -> BTreeMap<String, Outcome> {
        self.entries
            .into_iter()
            .filter_map(|(name, state)| match state {
                State::Done(outcome) => Some((name, outcome)),
                State::Loading => None,
            })
            .collect()
    }
}
