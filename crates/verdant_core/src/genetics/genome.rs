use super::gene::GeneLogic;
use super::registry::GeneRegistry;
use crate::error::{GeneticsError, Result};
use crate::rng::RandomExt;
use rand::Rng;
use verdant_data::{DominanceType, Gene, Genome};

/// Bonus fraction of the allele gap expressed by overdominant heterozygotes.
const OVERDOMINANCE_BONUS: f32 = 0.25;

/// Expressed value of an allele pair under its dominance pattern.
#[must_use]
pub fn express_alleles(alleles: [f32; 2], dominance: DominanceType) -> f32 {
    let [a, b] = alleles;
    match dominance {
        DominanceType::Complete => a.max(b),
        DominanceType::Incomplete => (a + b) * 0.5,
        DominanceType::Recessive => a.min(b),
        DominanceType::Overdominant => (a + b) * 0.5 + (a - b).abs() * OVERDOMINANCE_BONUS,
    }
}

pub trait GenomeLogic: Sized {
    /// One random allele pair per registered gene.
    fn random_with_rng<R: Rng>(registry: &GeneRegistry, rng: &mut R) -> Self;
    /// Expressed value of a gene, before any limit clamping.
    fn expressed_value(&self, gene_id: &str) -> Option<f32>;
    /// Similarity score in `[0, 1]`; 1 means identical expression.
    fn compare(&self, other: &Self) -> f32;
    /// Recombines two parents. `ratio` is the chance the first allele slot
    /// is drawn from `a`.
    fn crossover<R: Rng>(a: &Self, b: &Self, ratio: f32, rng: &mut R) -> Result<Self>;
    /// Creeps each allele with probability `rate`; returns how many changed.
    fn mutate<R: Rng>(&mut self, rate: f32, registry: &GeneRegistry, rng: &mut R) -> usize;
}

impl GenomeLogic for Genome {
    fn random_with_rng<R: Rng>(registry: &GeneRegistry, rng: &mut R) -> Self {
        let mut genome = Genome::new();
        for definition in registry.iter() {
            genome.insert(Gene {
                id: definition.id.clone(),
                alleles: [
                    definition.create_random_value(rng),
                    definition.create_random_value(rng),
                ],
                dominance: definition.dominance,
            });
        }
        genome
    }

    fn expressed_value(&self, gene_id: &str) -> Option<f32> {
        self.get(gene_id)
            .map(|gene| express_alleles(gene.alleles, gene.dominance))
    }

    fn compare(&self, other: &Self) -> f32 {
        let mut total = 0usize;
        let mut difference = 0.0f32;

        for (id, gene) in &self.genes {
            total += 1;
            match other.genes.get(id) {
                Some(theirs) => {
                    let mine = express_alleles(gene.alleles, gene.dominance);
                    let theirs = express_alleles(theirs.alleles, theirs.dominance);
                    let scale = mine.abs().max(theirs.abs());
                    if scale > f32::EPSILON {
                        difference += ((mine - theirs).abs() / scale).min(1.0);
                    }
                }
                None => difference += 1.0,
            }
        }
        for id in other.genes.keys() {
            if !self.genes.contains_key(id) {
                total += 1;
                difference += 1.0;
            }
        }

        if total == 0 {
            return 0.0;
        }
        (1.0 - difference / total as f32).clamp(0.0, 1.0)
    }

    fn crossover<R: Rng>(a: &Self, b: &Self, ratio: f32, rng: &mut R) -> Result<Self> {
        if !a.genes.keys().any(|id| b.genes.contains_key(id)) {
            return Err(GeneticsError::IncompatibleGenomes);
        }
        let ratio = ratio.clamp(0.0, 1.0);
        let mut child = Genome::new();

        for (id, gene_a) in &a.genes {
            let Some(gene_b) = b.genes.get(id) else {
                child.insert(gene_a.clone());
                continue;
            };
            let (first, second) = if rng.chance(ratio) {
                (gene_a, gene_b)
            } else {
                (gene_b, gene_a)
            };
            child.insert(Gene {
                id: id.clone(),
                alleles: [
                    first.alleles[rng.gen_range(0..2)],
                    second.alleles[rng.gen_range(0..2)],
                ],
                dominance: gene_a.dominance,
            });
        }
        for (id, gene_b) in &b.genes {
            if !child.contains(id) {
                child.insert(gene_b.clone());
            }
        }
        Ok(child)
    }

    fn mutate<R: Rng>(&mut self, rate: f32, registry: &GeneRegistry, rng: &mut R) -> usize {
        let mut mutated = 0;
        for (id, gene) in &mut self.genes {
            let Some(definition) = registry.get(id) else {
                continue;
            };
            for allele in &mut gene.alleles {
                if rng.chance(rate) {
                    *allele = definition.apply_creep(*allele, rng);
                    mutated += 1;
                }
            }
        }
        mutated
    }
}
