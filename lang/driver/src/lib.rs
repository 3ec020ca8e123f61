mod compiler;
mod dependency_graph;
mod reader;
mod registry;
mod render_reports;
mod result;
mod searcher;
mod writer;

pub use compiler::*;
pub use reader::*;
pub use registry::Outcome;
pub use render_reports::*;
pub use result::*;
pub use searcher::*;
pub use writer::*;
