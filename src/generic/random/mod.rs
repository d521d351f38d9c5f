/*!
Sources of (pseudo)randomness.

Anything which implements the [Rng](rand::Rng) trait (together with [Default]) may be used as the source of randomness for a [GenericContext](crate::context::GenericContext), with [MinimalPCG32] the source fixed in a (plain) [Context](crate::context::Context).
*/

mod minimal_pcg;
pub use minimal_pcg::MinimalPCG32;
