/// External representation of instances and solutions
pub mod ext_repr;

/// Conversion of internal solutions into their external representation
pub mod export;

/// Conversion of external instances into their internal representation
pub mod import;
