use super::defaults::universal_genes;
use super::gene::GeneLogic;
use crate::error::{GeneticsError, Result};
use std::collections::{BTreeMap, HashMap};
use verdant_data::{EffectType, GeneDefinition};

/// One gene's binding into a trait, as indexed by the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct TraitContribution {
    pub gene_id: String,
    pub effect_type: EffectType,
    pub scale_factor: f32,
}

/// All gene definitions known to a simulation run.
///
/// Built once and shared read-only (usually behind an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct GeneRegistry {
    genes: BTreeMap<String, GeneDefinition>,
    by_trait: HashMap<String, Vec<TraitContribution>>,
}

impl GeneRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the universal gene set.
    #[must_use]
    pub fn universal() -> Self {
        let mut registry = Self::new();
        for definition in universal_genes() {
            if let Err(e) = registry.register(definition) {
                tracing::error!(error = %e, "Failed to register universal gene");
            }
        }
        registry
    }

    pub fn register(&mut self, definition: GeneDefinition) -> Result<()> {
        definition.validate()?;
        if self.genes.contains_key(&definition.id) {
            return Err(GeneticsError::DuplicateGene(definition.id));
        }

        for effect in &definition.effects {
            self.by_trait
                .entry(effect.target_trait.clone())
                .or_default()
                .push(TraitContribution {
                    gene_id: definition.id.clone(),
                    effect_type: effect.effect_type,
                    scale_factor: effect.scale_factor,
                });
        }
        self.genes.insert(definition.id.clone(), definition);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, gene_id: &str) -> Option<&GeneDefinition> {
        self.genes.get(gene_id)
    }

    pub fn require(&self, gene_id: &str) -> Result<&GeneDefinition> {
        self.get(gene_id)
            .ok_or_else(|| GeneticsError::UnknownGene(gene_id.to_string()))
    }

    #[must_use]
    pub fn contains(&self, gene_id: &str) -> bool {
        self.genes.contains_key(gene_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Definitions in gene-id order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneDefinition> {
        self.genes.values()
    }

    /// Bindings targeting `trait_name`, in registration order.
    #[must_use]
    pub fn contributions(&self, trait_name: &str) -> &[TraitContribution] {
        self.by_trait
            .get(trait_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every trait at least one gene contributes to.
    pub fn trait_names(&self) -> impl Iterator<Item = &str> {
        self.by_trait.keys().map(String::as_str)
    }
}
