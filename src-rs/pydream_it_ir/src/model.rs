//! The model as a whole

use crate::{
    kinetic::{KineticParameter, RateRole},
    rule::Rule,
};

/// A PySB model, reduced to its reaction rules
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Model {
    rules: Vec<Rule>,
}

impl Model {
    /// Creates a new model from its rules, in definition order.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Returns the rules of the model in definition order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the rate parameters of every rule, in rule order.
    ///
    /// Each rule contributes its forward rate, then its reverse rate, for
    /// the directions it defines. A parameter used by several rules appears
    /// once per use.
    #[must_use]
    pub fn kinetic_parameters(&self) -> Vec<KineticParameter> {
        self.rules
            .iter()
            .flat_map(|rule| {
                let forward = rule
                    .forward_rate()
                    .map(|rate| KineticParameter::from_parameter(rate, RateRole::Forward));
                let reverse = rule
                    .reverse_rate()
                    .map(|rate| KineticParameter::from_parameter(rate, RateRole::Reverse));
                forward.into_iter().chain(reverse)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Parameter;

    fn parameter(name: &str, value: f64) -> Parameter {
        Parameter::new(name.to_string(), value)
    }

    fn names(parameters: &[KineticParameter]) -> Vec<(&str, RateRole)> {
        parameters
            .iter()
            .map(|parameter| (parameter.name(), parameter.role()))
            .collect()
    }

    #[test]
    fn discovery_follows_rule_order() {
        let model = Model::new(vec![
            Rule::new(
                "R1".to_string(),
                Some(parameter("k1", 1.0)),
                Some(parameter("k2", 2.0)),
            ),
            Rule::new("R2".to_string(), Some(parameter("k3", 3.0)), None),
        ]);

        let discovered = model.kinetic_parameters();

        assert_eq!(
            names(&discovered),
            vec![
                ("k1", RateRole::Forward),
                ("k2", RateRole::Reverse),
                ("k3", RateRole::Forward),
            ]
        );
        assert!((discovered[2].value() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rule_without_rates_contributes_nothing() {
        let model = Model::new(vec![
            Rule::new("R1".to_string(), None, None),
            Rule::new("R2".to_string(), None, Some(parameter("kr", 0.5))),
        ]);

        assert_eq!(
            names(&model.kinetic_parameters()),
            vec![("kr", RateRole::Reverse)]
        );
    }

    #[test]
    fn shared_parameters_are_not_deduplicated() {
        let model = Model::new(vec![
            Rule::new("R1".to_string(), Some(parameter("k", 1.0)), None),
            Rule::new("R2".to_string(), Some(parameter("k", 1.0)), None),
        ]);

        assert_eq!(
            names(&model.kinetic_parameters()),
            vec![("k", RateRole::Forward), ("k", RateRole::Forward)]
        );
    }

    #[test]
    fn empty_model() {
        assert!(Model::default().kinetic_parameters().is_empty());
    }
}
