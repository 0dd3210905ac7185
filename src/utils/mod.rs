/// Useful enumerations for labelling the legs of a selected particle pair.
pub mod enums;
/// Shared kinematic formulas (azimuthal wrapping, transverse mass).
pub mod functions;
/// Expression-level three- and four-vector types.
pub mod vectors;
