//! Gene definitions, genomes and the gene-to-trait expression pipeline.

pub mod accumulate;
pub mod cache;
pub mod defaults;
pub mod gene;
pub mod genome;
pub mod phenotype;
pub mod registry;
pub mod traits;

pub use accumulate::{accumulate_effect, AccumulatedEffect};
pub use cache::TraitCache;
pub use gene::GeneLogic;
pub use genome::{express_alleles, GenomeLogic};
pub use phenotype::Phenotype;
pub use registry::{GeneRegistry, TraitContribution};
