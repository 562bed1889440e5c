//! Command line interface of the PyDREAM run script generator

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use anstream::ColorChoice;
use clap::Parser;
use pydream_it_model_loader::{ModelLoader, SourceLoader};
use pydream_it_resolver::{resolve_parameters, scan_directives};
use pydream_it_script::{Config, module_name, output_path, render_script, write_script};
use pydream_it_shared::error::{AsPydreamError, PydreamError};

use crate::command::CliCommand;

mod command;
mod file;
mod print_error;
mod report;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    if cli.no_colors {
        ColorChoice::Never.write_global();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            print_error::print(&error, cli.print_debug);
            ExitCode::FAILURE
        }
    }
}

/// Generates the run script for the model given on the command line.
///
/// Nothing is written unless every step before writing succeeds.
fn run(cli: &CliCommand) -> Result<(), PydreamError> {
    let path = cli.file.as_path();
    let config = Config {
        nchains: cli.nchains,
        niterations: cli.niterations,
        ..Config::default()
    };

    report::model_file(path);
    report::default_prior(&config.default_prior_shape);

    let source = file::read_model_source(path).map_err(|error| into_error(&error, path, None))?;
    let script = generate(cli, path, &source, &config)?;
    let script_path = output_path(path, &config).map_err(|error| into_error(&error, path, None))?;

    report::writing_script(&script_path);
    write_script(&script_path, &script).map_err(|error| into_error(&error, &script_path, None))?;

    report::complete();
    Ok(())
}

fn generate(
    cli: &CliCommand,
    path: &Path,
    source: &str,
    config: &Config,
) -> Result<String, PydreamError> {
    #[cfg(feature = "python")]
    if cli.python {
        return generate_script(&pydream_it_python::PythonLoader, path, source, config);
    }
    #[cfg(not(feature = "python"))]
    let _ = cli;

    generate_script(&SourceLoader::default(), path, source, config)
}

/// Loads the model, applies its directives, and renders the run script.
fn generate_script(
    loader: &impl ModelLoader,
    path: &Path,
    source: &str,
    config: &Config,
) -> Result<String, PydreamError> {
    let model = loader
        .load_model(path, source)
        .map_err(|error| into_error(&error, path, Some(source)))?;

    report::scanning_directives();
    let overrides =
        scan_directives(source).map_err(|error| into_error(&error, path, Some(source)))?;

    report::inspecting_model();
    let parameters = model.kinetic_parameters();
    report::found_parameters(&parameters, &overrides);

    let (resolved, _overrides) =
        resolve_parameters(parameters, overrides, &config.default_prior_shape);
    for parameter in &resolved {
        report::sampled_parameter(parameter);
    }

    let module = module_name(path).map_err(|error| into_error(&error, path, None))?;
    Ok(render_script(&resolved, &module, config))
}

fn into_error(error: &impl AsPydreamError, path: &Path, source: Option<&str>) -> PydreamError {
    PydreamError::from_error_with_optional_source(error, PathBuf::from(path), source)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODEL_SOURCE: &str = "\
from pysb import *

Model()

Monomer('A')
Monomer('B')

Parameter('k1', 1.0)
Parameter('k2', 2.0)
Parameter('k3', 3.0)

Rule('R1', A() | B(), k1, k2)
Rule('R2', B() >> None, k3)

#PYDREAM_IT prior k1 uniform
#PYDREAM_IT no-sample k2
";

    fn generate_from_source() -> String {
        generate_script(
            &SourceLoader::default(),
            Path::new("model.py"),
            MODEL_SOURCE,
            &Config::default(),
        )
        .expect("script should be generated")
    }

    #[test]
    fn directives_shape_sampled_parameters() {
        let script = generate_from_source();

        assert!(script.contains(
            "sp_k1 = SampledParam(uniform, loc=np.log10(1.0)-1.0, scale=2.0)\n\
             sampled_params_list.append(sp_k1)\n\
             sp_k3 = SampledParam(norm, loc=np.log10(3.0), scale=2.0)\n\
             sampled_params_list.append(sp_k3)\n"
        ));
        assert!(!script.contains("sp_k2"));
        assert!(script.contains("from model import model\n"));
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(generate_from_source(), generate_from_source());
    }
}
