//! Sentinel values written out when a quantity cannot be computed for an
//! event, either because a lookup index points outside its per-object array
//! or because an input four-momentum was flagged invalid by the upstream
//! selection (negative $`p_T`$).
//!
//! Downstream selections cut on these values, so they must stay identical
//! across every producer in the pipeline. Never inline the literals.

/// Default for float-valued quantities (kinematics, impact parameters, isolation, jet pt).
pub const DEFAULT_FLOAT: f32 = -10.0;
/// Default for integer-valued quantities (charge, decay mode).
pub const DEFAULT_INT: i32 = -10;
/// Default for PDG particle ids, outside the range of assigned codes.
pub const DEFAULT_PDGID: i32 = -999;
/// Default for unsigned-byte codes (generator match flags).
pub const DEFAULT_UCHAR: u8 = 255;
