//! Resolution of the parameters to sample

use pydream_it_ir::{KineticParameter, RateRole};

use crate::{
    overrides::Overrides,
    prior::{PriorKind, PriorShape},
};

/// A kinetic parameter that will be sampled, with its prior shape
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameter {
    parameter: KineticParameter,
    prior: PriorShape,
}

impl ResolvedParameter {
    /// Creates a new resolved parameter.
    #[must_use]
    pub const fn new(parameter: KineticParameter, prior: PriorShape) -> Self {
        Self { parameter, prior }
    }

    /// Returns the name of the parameter.
    #[must_use]
    pub fn name(&self) -> &str {
        self.parameter.name()
    }

    /// Returns the nominal value of the parameter.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.parameter.value()
    }

    /// Returns the direction of the rule the parameter is a rate of.
    #[must_use]
    pub const fn role(&self) -> RateRole {
        self.parameter.role()
    }

    /// Returns the prior shape token.
    #[must_use]
    pub const fn prior(&self) -> &PriorShape {
        &self.prior
    }

    /// Returns the distribution the prior is emitted as.
    #[must_use]
    pub fn prior_kind(&self) -> PriorKind {
        self.prior.kind()
    }
}

/// Resolves the parameters to sample and their priors.
///
/// Excluded parameters are dropped first. Every remaining parameter without
/// a prior is then given `default_shape`, and the overrides with those
/// defaults filled in are returned alongside the resolved parameters.
/// Discovery order is kept, and a parameter that appears more than once is
/// resolved once per appearance.
#[must_use]
pub fn resolve_parameters(
    parameters: Vec<KineticParameter>,
    overrides: Overrides,
    default_shape: &PriorShape,
) -> (Vec<ResolvedParameter>, Overrides) {
    let sampled: Vec<KineticParameter> = parameters
        .into_iter()
        .filter(|parameter| !overrides.is_excluded(parameter.name()))
        .collect();

    let overrides = sampled.iter().fold(overrides, |overrides, parameter| {
        if overrides.prior(parameter.name()).is_some() {
            overrides
        } else {
            overrides.with_prior(parameter.name().to_string(), default_shape.clone())
        }
    });

    let resolved = sampled
        .into_iter()
        .map(|parameter| {
            let prior = overrides
                .prior(parameter.name())
                .cloned()
                .unwrap_or_else(|| default_shape.clone());
            ResolvedParameter::new(parameter, prior)
        })
        .collect();

    (resolved, overrides)
}

#[cfg(test)]
mod tests {
    use pydream_it_ir::{Model, Parameter, Rule};

    use super::*;
    use crate::directive::scan_directives;

    fn kinetic(name: &str, value: f64) -> KineticParameter {
        KineticParameter::new(name.to_string(), value, RateRole::Forward)
    }

    fn summary(resolved: &[ResolvedParameter]) -> Vec<(&str, f64, &str)> {
        resolved
            .iter()
            .map(|parameter| (parameter.name(), parameter.value(), parameter.prior().as_str()))
            .collect()
    }

    #[test]
    fn two_rule_example() {
        let model = Model::new(vec![
            Rule::new(
                "R1".to_string(),
                Some(Parameter::new("k1".to_string(), 1.0)),
                Some(Parameter::new("k2".to_string(), 2.0)),
            ),
            Rule::new(
                "R2".to_string(),
                Some(Parameter::new("k3".to_string(), 3.0)),
                None,
            ),
        ]);
        let source = "#PYDREAM_IT prior k1 uniform\n#PYDREAM_IT no-sample k2\n";
        let overrides = scan_directives(source).expect("directives should scan");

        let (resolved, overrides) =
            resolve_parameters(model.kinetic_parameters(), overrides, &PriorShape::default());

        assert_eq!(
            summary(&resolved),
            vec![("k1", 1.0, "uniform"), ("k3", 3.0, "normal")]
        );
        assert_eq!(resolved[0].prior_kind(), PriorKind::Uniform);
        assert_eq!(resolved[1].prior_kind(), PriorKind::Normal);
        assert_eq!(overrides.prior("k3"), Some(&PriorShape::from("normal")));
        assert!(overrides.prior("k2").is_none());
    }

    #[test]
    fn exclusion_wins_over_prior_in_either_order() {
        for source in [
            "#PYDREAM_IT no-sample kx\n#PYDREAM_IT prior kx uniform\n",
            "#PYDREAM_IT prior kx uniform\n#PYDREAM_IT no-sample kx\n",
        ] {
            let overrides = scan_directives(source).expect("directives should scan");
            let (resolved, _) = resolve_parameters(
                vec![kinetic("kx", 1.0), kinetic("ky", 2.0)],
                overrides,
                &PriorShape::default(),
            );

            assert_eq!(summary(&resolved), vec![("ky", 2.0, "normal")]);
        }
    }

    #[test]
    fn prior_for_unknown_parameter_has_no_effect() {
        let parameters = vec![kinetic("k1", 1.0)];

        let with_directive = scan_directives("#PYDREAM_IT prior k_missing uniform\n")
            .expect("directives should scan");
        let (resolved, overrides) =
            resolve_parameters(parameters.clone(), with_directive, &PriorShape::default());
        let (expected, _) =
            resolve_parameters(parameters, Overrides::new(), &PriorShape::default());

        assert_eq!(resolved, expected);
        assert_eq!(overrides.prior("k_missing"), Some(&PriorShape::from("uniform")));
    }

    #[test]
    fn unknown_shape_is_kept_and_emitted_as_normal() {
        let overrides = Overrides::new().with_prior("k1".to_string(), PriorShape::from("cauchy"));
        let (resolved, _) =
            resolve_parameters(vec![kinetic("k1", 1.0)], overrides, &PriorShape::default());

        assert_eq!(resolved[0].prior().as_str(), "cauchy");
        assert_eq!(resolved[0].prior_kind(), PriorKind::Normal);
    }

    #[test]
    fn duplicates_are_resolved_per_appearance() {
        let (resolved, _) = resolve_parameters(
            vec![kinetic("k", 1.0), kinetic("k", 1.0)],
            Overrides::new(),
            &PriorShape::default(),
        );
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn custom_default_shape() {
        let (resolved, _) = resolve_parameters(
            vec![kinetic("k", 1.0)],
            Overrides::new(),
            &PriorShape::from("uniform"),
        );
        assert_eq!(resolved[0].prior_kind(), PriorKind::Uniform);
    }

    mod randomized {
        use rand::{Rng, seq::IndexedRandom};

        use super::*;

        const NAMES: &[&str] = &["k0", "k1", "k2", "k3", "k4", "k5"];
        const SHAPES: &[&str] = &["uniform", "normal", "norm", "beta"];

        fn random_parameters(rng: &mut impl Rng) -> Vec<KineticParameter> {
            let count = rng.random_range(0..12);
            (0..count)
                .map(|index| {
                    let name = NAMES.choose(rng).copied().unwrap_or("k0");
                    let role = if rng.random_bool(0.5) {
                        RateRole::Forward
                    } else {
                        RateRole::Reverse
                    };
                    KineticParameter::new(name.to_string(), f64::from(index) + 0.5, role)
                })
                .collect()
        }

        fn random_directives(rng: &mut impl Rng) -> String {
            let count = rng.random_range(0..8);
            (0..count)
                .map(|_| {
                    let name = NAMES.choose(rng).copied().unwrap_or("k0");
                    match rng.random_range(0..3) {
                        0 => {
                            let shape = SHAPES.choose(rng).copied().unwrap_or("uniform");
                            format!("#PYDREAM_IT prior {name} {shape}\n")
                        }
                        1 => format!("#PYDREAM_IT no-sample {name}\n"),
                        _ => format!("# just a comment about {name}\n"),
                    }
                })
                .collect()
        }

        #[test]
        fn resolution_properties() {
            let mut rng = rand::rng();

            for _ in 0..500 {
                let parameters = random_parameters(&mut rng);
                let source = random_directives(&mut rng);
                let overrides = scan_directives(&source).expect("generated directives are valid");

                let (resolved, backfilled) =
                    resolve_parameters(parameters.clone(), overrides.clone(), &PriorShape::default());

                // names are the discovered names minus exclusions, in order
                let expected_names: Vec<&str> = parameters
                    .iter()
                    .map(KineticParameter::name)
                    .filter(|name| !overrides.is_excluded(name))
                    .collect();
                let names: Vec<&str> = resolved.iter().map(ResolvedParameter::name).collect();
                assert_eq!(names, expected_names, "directives:\n{source}");

                for parameter in &resolved {
                    let expected_prior = overrides
                        .prior(parameter.name())
                        .cloned()
                        .unwrap_or_default();
                    assert_eq!(parameter.prior(), &expected_prior, "directives:\n{source}");
                    assert_eq!(backfilled.prior(parameter.name()), Some(&expected_prior));
                }

                // explicit priors survive backfill untouched
                for (name, shape) in overrides.priors() {
                    assert_eq!(backfilled.prior(name), Some(shape));
                }
                assert_eq!(backfilled.excluded(), overrides.excluded());
            }
        }
    }
}
