// Candidate–job compatibility engine.
// Implements: requirement extraction, experience estimation, factor matching,
// weighted aggregation, and recommendation tiers. Pure computation throughout.

pub mod experience;
pub mod factors;
pub mod handlers;
pub mod recommendation;
pub mod requirements;
pub mod scoring;
