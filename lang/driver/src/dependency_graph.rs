use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

/// Modules each compiled module requires, as found in one compile run.
#[derive(Default)]
pub struct DependencyGraph {
    graph: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn get(&self, module: &str) -> Option<&Vec<String>> {
        self.graph.get(module)
    }

    pub fn insert(&mut self, module: String, deps: Vec<String>) {
        self.graph.insert(module, deps);
    }

    /// Logs the dependency graph as an indented tree.
    ///
    /// Each module is printed with its dependencies indented below it.
    pub fn print_dependency_tree(&self) {
        let mut roots: Vec<_> = self.graph.keys().collect();
        roots.sort();
        let mut visited = HashSet::default();
        for module in roots {
            self.print_module_dependencies(module, &mut visited, 0);
        }
    }

    fn print_module_dependencies(&self, module: &str, visited: &mut HashSet<String>, depth: usize) {
        let indent = "  ".repeat(depth);

        // Cycles
        if !visited.insert(module.to_owned()) {
            log::trace!("{indent}{module} (already visited)");
            return;
        }

        log::trace!("{indent}{module}");

        if let Some(dependencies) = self.get(module) {
            for dep in dependencies {
                self.print_module_dependencies(dep, visited, depth + 1);
            }
        }

        // Unwinding the recursion
        visited.remove(module);
    }
}
