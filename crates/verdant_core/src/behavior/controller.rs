use super::{Behavior, BehaviorContext, BehaviorResult};
use crate::organism::Organism;
use verdant_data::OrganismId;

/// Picks and runs one applicable behavior per organism per tick.
///
/// Ranking is a stable sort on priority, so equal priorities resolve to
/// insertion order.
#[derive(Default)]
pub struct BehaviorController {
    behaviors: Vec<Box<dyn Behavior>>,
    current: Option<String>,
}

impl BehaviorController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a behavior; returns `false` if its id is already taken.
    pub fn add(&mut self, behavior: Box<dyn Behavior>) -> bool {
        if self.has(behavior.id()) {
            tracing::warn!(id = behavior.id(), "Duplicate behavior ignored");
            return false;
        }
        self.behaviors.push(behavior);
        true
    }

    pub fn remove(&mut self, id: &str) -> Option<Box<dyn Behavior>> {
        let index = self.behaviors.iter().position(|b| b.id() == id)?;
        if self.current.as_deref() == Some(id) {
            self.current = None;
        }
        Some(self.behaviors.remove(index))
    }

    #[must_use]
    pub fn has(&self, id: &str) -> bool {
        self.behaviors.iter().any(|b| b.id() == id)
    }

    pub fn clear(&mut self) {
        self.behaviors.clear();
        self.current = None;
    }

    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.behaviors.iter().map(|b| b.id()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Id of the behavior chosen by the last `update`.
    #[must_use]
    pub fn current_behavior(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn update(
        &mut self,
        organism: &mut Organism,
        ctx: &mut BehaviorContext<'_>,
    ) -> BehaviorResult {
        let mut ranked: Vec<(usize, f32)> = self
            .behaviors
            .iter()
            .enumerate()
            .filter(|(_, behavior)| behavior.is_applicable(organism, ctx))
            .map(|(index, behavior)| (index, behavior.priority(organism)))
            .collect();

        if ranked.is_empty() {
            self.current = None;
            return BehaviorResult::not_executed();
        }

        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        let (winner, priority) = ranked[0];
        let behavior = &mut self.behaviors[winner];
        self.current = Some(behavior.id().to_string());

        tracing::debug!(
            organism = %organism.id,
            behavior = behavior.id(),
            priority,
            candidates = ranked.len(),
            "Behavior selected"
        );
        behavior.execute(organism, ctx)
    }

    /// Forwards a death notice to every behavior.
    pub fn clear_organism_data(&mut self, id: OrganismId) {
        for behavior in &mut self.behaviors {
            behavior.clear_organism_data(id);
        }
    }

    #[must_use]
    pub fn find<T: Behavior>(&self) -> Option<&T> {
        self.behaviors
            .iter()
            .find_map(|b| b.as_any().downcast_ref::<T>())
    }

    pub fn find_mut<T: Behavior>(&mut self) -> Option<&mut T> {
        self.behaviors
            .iter_mut()
            .find_map(|b| b.as_any_mut().downcast_mut::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::test_support::organism_with_traits;
    use std::any::Any;
    use verdant_data::OrganismState;

    struct Fixed {
        id: &'static str,
        priority: f32,
        applicable: bool,
        runs: u32,
    }

    impl Fixed {
        fn boxed(id: &'static str, priority: f32, applicable: bool) -> Box<dyn Behavior> {
            Box::new(Self {
                id,
                priority,
                applicable,
                runs: 0,
            })
        }
    }

    impl Behavior for Fixed {
        fn id(&self) -> &str {
            self.id
        }

        fn is_applicable(&self, _: &Organism, _: &BehaviorContext<'_>) -> bool {
            self.applicable
        }

        fn priority(&self, _: &Organism) -> f32 {
            self.priority
        }

        fn execute(&mut self, _: &mut Organism, _: &mut BehaviorContext<'_>) -> BehaviorResult {
            self.runs += 1;
            BehaviorResult::completed(0.0, self.id)
        }

        fn energy_cost(&self, _: &Organism) -> f32 {
            0.0
        }

        fn as_any(&self) -> &dyn Any {
            self
        }

        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn run(controller: &mut BehaviorController) -> BehaviorResult {
        let mut organism = organism_with_traits(&[]);
        let mut rng = seeded(0);
        let mut ctx = BehaviorContext::new(OrganismState::default(), 0, &mut rng);
        controller.update(&mut organism, &mut ctx)
    }

    #[test]
    fn test_highest_priority_wins() {
        let mut controller = BehaviorController::new();
        controller.add(Fixed::boxed("A", 50.0, true));
        controller.add(Fixed::boxed("B", 75.0, true));

        for _ in 0..5 {
            let result = run(&mut controller);
            assert!(result.executed);
            assert_eq!(result.debug_info, "B");
            assert_eq!(controller.current_behavior(), Some("B"));
        }

        assert!(controller.remove("B").is_some());
        assert_eq!(controller.current_behavior(), None);
        assert_eq!(run(&mut controller).debug_info, "A");
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut controller = BehaviorController::new();
        controller.add(Fixed::boxed("first", 50.0, true));
        controller.add(Fixed::boxed("second", 50.0, true));
        assert_eq!(run(&mut controller).debug_info, "first");
    }

    #[test]
    fn test_inapplicable_behaviors_skipped() {
        let mut controller = BehaviorController::new();
        controller.add(Fixed::boxed("urgent", 100.0, false));
        controller.add(Fixed::boxed("calm", 10.0, true));
        assert_eq!(run(&mut controller).debug_info, "calm");

        controller.remove("calm");
        let result = run(&mut controller);
        assert!(!result.executed);
        assert_eq!(controller.current_behavior(), None);
    }

    #[test]
    fn test_registry_operations() {
        let mut controller = BehaviorController::new();
        assert!(controller.add(Fixed::boxed("a", 1.0, true)));
        assert!(!controller.add(Fixed::boxed("a", 2.0, true)));
        controller.add(Fixed::boxed("b", 1.0, true));
        assert_eq!(controller.ids(), vec!["a", "b"]);
        assert!(controller.has("b"));
        assert!(controller.remove("missing").is_none());

        run(&mut controller);
        assert_eq!(controller.find::<Fixed>().map(|f| f.runs), Some(1));

        controller.clear();
        assert!(controller.is_empty());
        assert_eq!(controller.current_behavior(), None);
    }
}
