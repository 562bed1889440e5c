//! Progress messages printed while generating a script

use std::path::Path;

use anstream::println;
use owo_colors::OwoColorize;
use pydream_it_ir::{KineticParameter, RateRole};
use pydream_it_resolver::{Overrides, PriorKind, PriorShape, ResolvedParameter};
use pydream_it_script::python_float;

use crate::stylesheet;

/// Prints a line announcing a step of the generator
fn stage(message: &str) {
    println!("{}", stylesheet::STAGE.style(message));
}

pub fn model_file(path: &Path) {
    stage(&format!("Using model from file: {}", path.display()));
}

pub fn default_prior(shape: &PriorShape) {
    stage(&format!("The default prior shape is: {shape}"));
}

pub fn scanning_directives() {
    stage("Parsing the model for any #PYDREAM_IT directives...");
}

pub fn inspecting_model() {
    stage("Inspecting the model and pulling out kinetic parameters...");
}

pub fn found_parameters(parameters: &[KineticParameter], overrides: &Overrides) {
    stage("Found the following kinetic parameters:");
    if parameters.is_empty() {
        println!("    (none)");
    }
    for parameter in parameters {
        let role = match parameter.role() {
            RateRole::Forward => "forward",
            RateRole::Reverse => "reverse",
        };
        let excluded = if overrides.is_excluded(parameter.name()) {
            ", not sampled"
        } else {
            ""
        };
        println!(
            "    {} = {} ({role}{excluded})",
            stylesheet::PARAMETER_NAME.style(parameter.name()),
            python_float(parameter.value()),
        );
    }
}

pub fn sampled_parameter(parameter: &ResolvedParameter) {
    let prior_style = match parameter.prior_kind() {
        PriorKind::Uniform => stylesheet::PRIOR_UNIFORM,
        PriorKind::Normal => stylesheet::PRIOR_NORMAL,
    };
    println!(
        "Will sample parameter {} with {} prior around {}",
        stylesheet::PARAMETER_NAME.style(parameter.name()),
        prior_style.style(parameter.prior()),
        python_float(parameter.value()),
    );
}

pub fn writing_script(path: &Path) {
    stage(&format!("Writing to PyDREAM run script: {}", path.display()));
}

pub fn complete() {
    println!("{}", "pydream_it is complete!".bold());
}
