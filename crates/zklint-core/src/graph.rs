//! Name-keyed call graph with reverse reachability.
//!
//! Call edges are recorded by textual callee name, with no scope
//! resolution. This is a deliberate approximation: two unrelated functions
//! sharing a name are conflated, and calls through aliases or higher-order
//! parameters are invisible. Cycles are handled by the graph traversal.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, Reversed};

/// A directed call graph over function names.
#[derive(Debug, Default)]
pub struct CallGraph {
    graph: DiGraph<String, ()>,
    indices: HashMap<String, NodeIndex>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.indices.insert(name.to_string(), idx);
        idx
    }

    /// Record that `caller` contains a call to `callee`. Duplicate edges
    /// are harmless for reachability.
    pub fn add_call(&mut self, caller: &str, callee: &str) {
        let from = self.intern(caller);
        let to = self.intern(callee);
        self.graph.add_edge(from, to, ());
    }

    /// Every function name from which at least one of `offenders` is
    /// reachable, including the offenders themselves (zero-hop case).
    /// Computed as a DFS over reversed edges, so cycles terminate.
    pub fn reaching_set<'a>(
        &mut self,
        offenders: impl IntoIterator<Item = &'a str>,
    ) -> HashSet<String> {
        let starts: Vec<NodeIndex> = offenders
            .into_iter()
            .map(|name| self.intern(name))
            .collect();

        let reversed = Reversed(&self.graph);
        let mut reaching = HashSet::new();
        for start in starts {
            let mut dfs = Dfs::new(reversed, start);
            while let Some(idx) = dfs.next(reversed) {
                reaching.insert(self.graph[idx].clone());
            }
        }
        reaching
    }
}
