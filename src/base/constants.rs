/// Defines the default isotropic scaling (c1) of the Guccione law
pub const DEFAULT_GUCCIONE_C1: f64 = 0.002;

/// Defines the default fiber-direction exponent weight (c2) of the Guccione law
pub const DEFAULT_GUCCIONE_C2: f64 = 8.0;

/// Defines the default cross-fiber exponent weight (c3) of the Guccione law
pub const DEFAULT_GUCCIONE_C3: f64 = 2.0;

/// Defines the default fiber-shear exponent weight (c4) of the Guccione law
pub const DEFAULT_GUCCIONE_C4: f64 = 4.0;

/// Defines the default active tension magnitude (TCa)
pub const DEFAULT_ACTIVE_TENSION: f64 = 3.0;

/// Defines the default length sensitivity (β) of the Hunter active law
pub const DEFAULT_HUNTER_BETA: f64 = 1.45;

/// Defines the number of nodes sharing the reaction on a face of the unit cube
///
/// The quarter-symmetric unit-square face is split into four equal
/// regions, one per corner node.
pub const NODES_PER_FACE: f64 = 4.0;
