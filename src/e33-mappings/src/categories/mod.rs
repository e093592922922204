//! Category extractors.
//!
//! One module per output category. Each extractor is a pure pass over the
//! loaded rows (the Monoco skill graph additionally dereferences skill
//! asset files), producing the final, canonically ordered mapping for the
//! artifact emitter. Non-fatal anomalies go to the shared [`crate::diag`]
//! report.

pub mod characters;
pub mod cosmetics;
pub mod gradient;
pub mod journals;
pub mod levels;
pub mod manor;
pub mod monoco;
pub mod music;
pub mod pictos;
pub mod quest_items;
pub mod weapons;
