/// Representation for the probability of choosing `true`
pub type PolarityLean = f64;

/// Representation for the probability of making a greedy move
pub type GreedyBias = f64;
