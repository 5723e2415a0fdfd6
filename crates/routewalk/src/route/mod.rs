/// Route construction for file-based routing
///
/// Pure components that turn filesystem names into URL path pieces:
/// - `segment`: basename classification (`[id]` → `:id`, module-file
///   extension checks, declaration-file probing)
/// - `builder`: endpoint composition from accumulated route, segment,
///   and optional custom pattern

pub mod builder;
pub mod segment;

// Re-export commonly used items
pub use builder::build_endpoint;
pub use segment::{
    is_route_module_file, resolve_module_file, segment_from_stem, Segment, MODULE_EXTENSIONS,
};
