use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Chromosome / category tag grouping related genes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChromosomeType {
    Metabolism,
    Locomotion,
    Sensory,
    Behavior,
    Reproduction,
    Morphology,
    Defense,
}

/// Numeric bounds for a gene value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneLimits {
    pub min_value: f32,
    pub max_value: f32,
    /// Largest perturbation a single mutation step may apply.
    pub creep_amount: f32,
}

impl GeneLimits {
    #[must_use]
    pub const fn new(min_value: f32, max_value: f32, creep_amount: f32) -> Self {
        Self {
            min_value,
            max_value,
            creep_amount,
        }
    }
}

/// How a gene's contribution is folded into a trait value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    /// Overwrites the running value with `value * scale`.
    Direct,
    /// Adds `value * scale`.
    Additive,
    /// Multiplies by `value * scale`, starting from 1.0.
    Multiplicative,
    /// Adds the raw value only when it reaches `scale`.
    Threshold,
    /// Context-dependent contribution; currently additive.
    Conditional,
}

/// Binds a gene to one trait it influences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectBinding {
    pub target_trait: String,
    pub effect_type: EffectType,
    pub scale_factor: f32,
}

/// Rule used when blending two parental alleles into an expressed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DominanceType {
    /// Larger allele wins.
    Complete,
    /// Alleles blend to their midpoint.
    #[default]
    Incomplete,
    /// Smaller allele wins.
    Recessive,
    /// Heterozygotes express above the midpoint.
    Overdominant,
}

/// Whether the organism's age or health scales a gene's expressed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TraitModulation {
    #[default]
    Never,
    Age,
    Health,
    AgeAndHealth,
}

/// Immutable blueprint for one gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneDefinition {
    pub id: String,
    pub chromosome: ChromosomeType,
    pub limits: GeneLimits,
    pub dominance: DominanceType,
    pub effects: Vec<EffectBinding>,
    /// Energy cost of maintaining the gene at full expression.
    pub maintenance_cost: f32,
    /// Exponent applied to the expression level when computing upkeep.
    pub cost_scaling: f32,
    pub modulation: TraitModulation,
}

impl GeneDefinition {
    /// Starts a definition with no effects, incomplete dominance and linear upkeep.
    #[must_use]
    pub fn new(id: impl Into<String>, chromosome: ChromosomeType, limits: GeneLimits) -> Self {
        Self {
            id: id.into(),
            chromosome,
            limits,
            dominance: DominanceType::default(),
            effects: Vec::new(),
            maintenance_cost: 0.0,
            cost_scaling: 1.0,
            modulation: TraitModulation::default(),
        }
    }

    #[must_use]
    pub fn with_effect(
        mut self,
        target_trait: impl Into<String>,
        effect_type: EffectType,
        scale_factor: f32,
    ) -> Self {
        self.effects.push(EffectBinding {
            target_trait: target_trait.into(),
            effect_type,
            scale_factor,
        });
        self
    }

    #[must_use]
    pub fn with_dominance(mut self, dominance: DominanceType) -> Self {
        self.dominance = dominance;
        self
    }

    #[must_use]
    pub fn with_maintenance(mut self, base_cost: f32, scaling: f32) -> Self {
        self.maintenance_cost = base_cost;
        self.cost_scaling = scaling;
        self
    }

    #[must_use]
    pub fn with_modulation(mut self, modulation: TraitModulation) -> Self {
        self.modulation = modulation;
        self
    }
}

/// Allele pair carried for one gene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gene {
    pub id: String,
    pub alleles: [f32; 2],
    pub dominance: DominanceType,
}

impl Gene {
    #[must_use]
    pub fn homozygous(id: impl Into<String>, value: f32, dominance: DominanceType) -> Self {
        Self {
            id: id.into(),
            alleles: [value, value],
            dominance,
        }
    }
}

/// Heritable gene set of one organism, keyed by gene id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    pub genes: BTreeMap<String, Gene>,
}

impl Genome {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, gene: Gene) {
        self.genes.insert(gene.id.clone(), gene);
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Gene> {
        self.genes.get(id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.genes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}
