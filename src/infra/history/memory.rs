use std::collections::VecDeque;

use tracing::debug;

use crate::usecase::ports::history::AddressHistory;

const MAX_REPLACED: usize = 50;

/// Desktop stand-in for the browser location bar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    current: String,
    replaced: VecDeque<String>,
}

impl MemoryHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: normalize(&initial.into()),
            replaced: VecDeque::new(),
        }
    }

    /// Earlier addresses, oldest first.
    pub fn replaced(&self) -> impl Iterator<Item = &str> {
        self.replaced.iter().map(String::as_str)
    }

    /// Display form with the leading `?`.
    pub fn location(&self) -> String {
        if self.current.is_empty() {
            String::new()
        } else {
            format!("?{}", self.current)
        }
    }
}

fn normalize(query: &str) -> String {
    let query = query.trim();
    query.strip_prefix('?').unwrap_or(query).to_string()
}

impl AddressHistory for MemoryHistory {
    fn current(&self) -> String {
        self.current.clone()
    }

    fn replace(&mut self, query: String) {
        let query = normalize(&query);
        if query == self.current {
            return;
        }
        debug!(from = %self.current, to = %query, "replacing address");
        let previous = std::mem::replace(&mut self.current, query);
        self.replaced.push_back(previous);
        while self.replaced.len() > MAX_REPLACED {
            self.replaced.pop_front();
        }
    }
}
