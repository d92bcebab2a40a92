//src/model/mod.rs
pub mod composition;
pub mod elements;
pub mod ordered;

// Re-exports for cleaner imports
pub use composition::{AggregatedResult, ComponentRecord, Compositions, GlassEntries, UnitTag};
pub use elements::molar_mass;
pub use ordered::OrderedMap;
