use pydream_it_resolver::{PriorKind, ResolvedParameter};

use crate::config::Config;

/// Formats a value as a Python float literal.
///
/// Finite values use the shortest representation that reads back to the
/// same value (`1.0`, `0.001`, `1e-7`). Infinities and NaN, which have no
/// literal, are written as `float(...)` calls.
#[must_use]
pub fn python_float(value: f64) -> String {
    if value.is_nan() {
        "float('nan')".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "float('inf')".to_string()
        } else {
            "float('-inf')".to_string()
        }
    } else {
        format!("{value:?}")
    }
}

fn sampled_param_line(parameter: &ResolvedParameter) -> String {
    let name = parameter.name();
    let value = python_float(parameter.value());

    match parameter.prior_kind() {
        PriorKind::Uniform => {
            format!("sp_{name} = SampledParam(uniform, loc=np.log10({value})-1.0, scale=2.0)")
        }
        PriorKind::Normal => {
            format!("sp_{name} = SampledParam(norm, loc=np.log10({value}), scale=2.0)")
        }
    }
}

/// Renders the PyDREAM run script.
///
/// The output depends only on the arguments, so rendering the same model
/// twice gives the same text.
#[must_use]
pub fn render_script(parameters: &[ResolvedParameter], module_name: &str, config: &Config) -> String {
    let run_name = format!("dreamzs_{}chain", config.nchains);

    let mut lines: Vec<String> = vec![
        "from pydream.core import run_dream".to_string(),
        "from pysb.integrate import Solver".to_string(),
        "import numpy as np".to_string(),
        "from pydream.parameters import SampledParam".to_string(),
        "from scipy.stats import norm,uniform".to_string(),
        format!("from {module_name} import model"),
        String::new(),
        "# DREAM Settings".to_string(),
        "# Number of chains - should be at least 3.".to_string(),
        format!("nchains = {}", config.nchains),
        "# Number of iterations".to_string(),
        format!("niterations = {}", config.niterations),
        String::new(),
        "#Initialize PySB solver object for running simulations.  Simulation timespan should match experimental data.".to_string(),
        "tspan = np.linspace(0,10, num=100)".to_string(),
        "solver = Solver(model, tspan)".to_string(),
        "solver.run()".to_string(),
        String::new(),
        "# USER must add commands to import/load any experimental data for use in the likelihood function!".to_string(),
        "# USER must define a likelihood function!".to_string(),
        "def likelihood(param_vector):".to_string(),
        "    pass".to_string(),
        String::new(),
        "sampled_params_list = list()".to_string(),
    ];

    for parameter in parameters {
        lines.push(sampled_param_line(parameter));
        lines.push(format!("sampled_params_list.append(sp_{})", parameter.name()));
    }

    lines.extend([
        format!(
            "sampled_params, log_ps = run_dream(parameters=sampled_params_list, likelihood=likelihood, niterations=niterations, nchains=nchains, multitry=False, gamma_levels=4, adapt_gamma=True, history_thin=1, model_name='{run_name}', verbose=True)"
        ),
        "total_iterations = niterations".to_string(),
        "# Save sampling output (sampled parameter values and their corresponding logps).".to_string(),
        "for chain in range(len(sampled_params)):".to_string(),
        format!(
            "    np.save('{run_name}_sampled_params_chain_' + str(chain)+'_'+str(total_iterations), sampled_params[chain])"
        ),
        format!(
            "    np.save('{run_name}_logps_chain_' + str(chain)+'_'+str(total_iterations), log_ps[chain])"
        ),
    ]);

    let mut script = lines.join("\n");
    script.push('\n');
    script
}

#[cfg(test)]
mod tests {
    use pydream_it_ir::{KineticParameter, RateRole};
    use pydream_it_resolver::PriorShape;

    use super::*;

    fn resolved(name: &str, value: f64, prior: &str) -> ResolvedParameter {
        ResolvedParameter::new(
            KineticParameter::new(name.to_string(), value, RateRole::Forward),
            PriorShape::from(prior),
        )
    }

    #[test]
    fn float_literals() {
        assert_eq!(python_float(1.0), "1.0");
        assert_eq!(python_float(0.001), "0.001");
        assert_eq!(python_float(1e-7), "1e-7");
        assert_eq!(python_float(-2.5), "-2.5");
        assert_eq!(python_float(f64::INFINITY), "float('inf')");
        assert_eq!(python_float(f64::NEG_INFINITY), "float('-inf')");
        assert_eq!(python_float(f64::NAN), "float('nan')");
    }

    #[test]
    fn sampled_params_follow_priors() {
        let parameters = vec![resolved("k1", 1.0, "uniform"), resolved("k3", 3.0, "normal")];
        let script = render_script(&parameters, "two_rules", &Config::default());

        let expected = "\
sampled_params_list = list()
sp_k1 = SampledParam(uniform, loc=np.log10(1.0)-1.0, scale=2.0)
sampled_params_list.append(sp_k1)
sp_k3 = SampledParam(norm, loc=np.log10(3.0), scale=2.0)
sampled_params_list.append(sp_k3)
sampled_params, log_ps = run_dream(";
        assert!(script.contains(expected), "script was:\n{script}");
    }

    #[test]
    fn unknown_prior_is_normal() {
        let script = render_script(&[resolved("k", 0.5, "lognormal")], "m", &Config::default());
        assert!(script.contains("sp_k = SampledParam(norm, loc=np.log10(0.5), scale=2.0)\n"));
    }

    #[test]
    fn header_and_settings() {
        let config = Config {
            nchains: 3,
            niterations: 1000,
            ..Config::default()
        };
        let script = render_script(&[], "egfr", &config);

        assert!(script.starts_with("from pydream.core import run_dream\n"));
        assert!(script.contains("\nfrom egfr import model\n"));
        assert!(script.contains("\nnchains = 3\n"));
        assert!(script.contains("\nniterations = 1000\n"));
        assert!(script.contains("model_name='dreamzs_3chain'"));
        assert!(script.contains("np.save('dreamzs_3chain_logps_chain_'"));
        assert!(script.contains("\nsampled_params_list = list()\nsampled_params, log_ps"));
        assert!(script.ends_with("log_ps[chain])\n"));
    }

    #[test]
    fn default_settings() {
        let script = render_script(&[], "m", &Config::default());
        assert!(script.contains("\nnchains = 5\n"));
        assert!(script.contains("\nniterations = 50000\n"));
        assert!(script.contains("model_name='dreamzs_5chain'"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let parameters = vec![
            resolved("kf", 1e-3, "uniform"),
            resolved("kr", 0.1, "normal"),
            resolved("kf", 1e-3, "uniform"),
        ];
        let config = Config::default();

        let first = render_script(&parameters, "model", &config);
        let second = render_script(&parameters, "model", &config);
        assert_eq!(first, second);
        assert_eq!(first.matches("sampled_params_list.append(sp_kf)").count(), 2);
    }
}
