// src/chemistry/mod.rs

pub mod conversion;
pub mod stoichiometry;

pub use conversion::{convert, convert_glass, mole_value, MoleSource, OXYGEN};
pub use stoichiometry::{cation_coefficient, oxygen_coefficient};
