#![no_main]

use libfuzzer_sys::{arbitrary, fuzz_target};
use pydream_it_ir::{KineticParameter, RateRole};
use pydream_it_resolver::{PriorShape, resolve_parameters, scan_directives};

#[derive(Debug, Clone, arbitrary::Arbitrary)]
pub struct FuzzData {
    names: Vec<String>,
    directives: String,
}

fuzz_target!(|data: FuzzData| {
    let Ok(overrides) = scan_directives(&data.directives) else {
        return;
    };

    let parameters: Vec<KineticParameter> = data
        .names
        .iter()
        .map(|name| KineticParameter::new(name.clone(), 1.0, RateRole::Forward))
        .collect();
    let expected = parameters
        .iter()
        .filter(|parameter| !overrides.is_excluded(parameter.name()))
        .count();

    let (resolved, backfilled) =
        resolve_parameters(parameters, overrides.clone(), &PriorShape::default());

    assert_eq!(resolved.len(), expected);
    for parameter in &resolved {
        assert!(
            !overrides.is_excluded(parameter.name()),
            "excluded parameter {:?} was resolved",
            parameter.name(),
        );
        assert_eq!(backfilled.prior(parameter.name()), Some(parameter.prior()));
    }
});
