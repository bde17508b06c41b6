//! `Datum` represents one labeled observation.
//! A sample pool is simply a slice of them.

// Provides the feature value enum.
pub(crate) mod feature;
// Provides the datum struct.
pub(crate) mod datum;

// Provides a struct that reads a file.
pub(crate) mod reader;


pub use reader::SampleReader;
pub use datum::{Datum, Label};
pub use feature::Value;
