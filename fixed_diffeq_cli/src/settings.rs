use std::{
    fs::File,
    path::{Path, PathBuf},
};

use clap::{Args, ValueEnum};
use fixed_diffeq::{IntegrationConfig, Method, StageCoupling};
use ron::{Options, extensions::Extensions};
use serde::Deserialize;

use crate::error::CliError;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// RON file with any IntegrationConfig fields, missing fields keep the subcommand defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of steps (and samples) per method
    #[arg(long, allow_negative_numbers = true)]
    pub num_steps: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub t_init: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub t_end: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub y_init: Option<f64>,
    /// Method to run, repeatable (euler, midpoint, trapezoid, rk4). Defaults to all four
    #[arg(long = "method", value_name = "METHOD")]
    pub methods: Vec<Method>,
    /// Directory for one CSV file per method
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Run the methods concurrently
    #[arg(long)]
    pub parallel: bool,
}

/// Options for the paired subcommands.
#[derive(Debug, Args)]
pub struct PairedArgs {
    #[command(flatten)]
    pub run: RunArgs,
    #[arg(long, allow_negative_numbers = true)]
    pub v_init: Option<f64>,
    /// How intermediate stages offset the state
    #[arg(long, value_enum)]
    pub coupling: Option<CouplingArg>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CouplingArg {
    /// Each equation offsets both components by its own previous stage
    SelfStage,
    /// Standard coupled Runge-Kutta stages
    Textbook,
}

impl From<CouplingArg> for StageCoupling {
    fn from(value: CouplingArg) -> Self {
        match value {
            CouplingArg::SelfStage => StageCoupling::SelfStage,
            CouplingArg::Textbook => StageCoupling::Textbook,
        }
    }
}

impl RunArgs {
    /// Starts from `base`, applies the config file when given, then the flags.
    pub fn resolve(&self, base: IntegrationConfig) -> Result<IntegrationConfig, CliError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?.apply(base),
            None => base,
        };
        if let Some(num_steps) = self.num_steps {
            config.num_steps = num_steps;
        }
        if let Some(t_init) = self.t_init {
            config.t_init = t_init;
        }
        if let Some(t_end) = self.t_end {
            config.t_end = t_end;
        }
        if let Some(y_init) = self.y_init {
            config.y_init = y_init;
        }
        Ok(config)
    }

    /// Selected methods in comparison order, without duplicates.
    pub fn selected_methods(&self) -> Vec<Method> {
        Method::ALL
            .into_iter()
            .filter(|method| self.methods.is_empty() || self.methods.contains(method))
            .collect()
    }
}

impl PairedArgs {
    pub fn resolve(&self, base: IntegrationConfig) -> Result<IntegrationConfig, CliError> {
        let mut config = self.run.resolve(base)?;
        if let Some(v_init) = self.v_init {
            config.v_init = v_init;
        }
        if let Some(coupling) = self.coupling {
            config.coupling = coupling.into();
        }
        Ok(config)
    }
}

/// Fields read from a `--config` file. Only the ones present are applied.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub num_steps: Option<i64>,
    pub t_init: Option<f64>,
    pub t_end: Option<f64>,
    pub y_init: Option<f64>,
    pub v_init: Option<f64>,
    pub coupling: Option<StageCoupling>,
}

impl ConfigFile {
    pub fn apply(self, mut config: IntegrationConfig) -> IntegrationConfig {
        if let Some(num_steps) = self.num_steps {
            config.num_steps = num_steps;
        }
        if let Some(t_init) = self.t_init {
            config.t_init = t_init;
        }
        if let Some(t_end) = self.t_end {
            config.t_end = t_end;
        }
        if let Some(y_init) = self.y_init {
            config.y_init = y_init;
        }
        if let Some(v_init) = self.v_init {
            config.v_init = v_init;
        }
        if let Some(coupling) = self.coupling {
            config.coupling = coupling;
        }
        config
    }
}

/// Reads a RON config file. Values may be written bare (`num_steps: 200`)
/// or as `Some(..)`.
pub fn load_config(path: &Path) -> Result<ConfigFile, CliError> {
    let file = File::open(path).map_err(|source| CliError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConfigFile = Options::default()
        .with_default_extension(Extensions::IMPLICIT_SOME)
        .from_reader(file)
        .map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {config:?} from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn run_args() -> RunArgs {
        RunArgs {
            config: None,
            num_steps: None,
            t_init: None,
            t_end: None,
            y_init: None,
            methods: Vec::new(),
            output: None,
            parallel: false,
        }
    }

    #[test]
    fn test_flags_override_base() {
        let args = RunArgs {
            num_steps: Some(50),
            t_end: Some(-5.0),
            ..run_args()
        };
        let config = args.resolve(IntegrationConfig::default()).unwrap();
        assert_eq!(config.num_steps, 50);
        assert_eq!(config.t_init, 0.0);
        assert_eq!(config.t_end, -5.0);
    }

    #[test]
    fn test_paired_overrides() {
        let args = PairedArgs {
            run: run_args(),
            v_init: Some(0.25),
            coupling: Some(CouplingArg::Textbook),
        };
        let config = args.resolve(IntegrationConfig::default()).unwrap();
        assert_eq!(config.v_init, 0.25);
        assert_eq!(config.coupling, StageCoupling::Textbook);
    }

    #[test]
    fn test_selected_methods_keep_comparison_order() {
        let args = RunArgs {
            methods: vec![Method::Rk4, Method::Euler, Method::Rk4],
            ..run_args()
        };
        assert_eq!(args.selected_methods(), vec![Method::Euler, Method::Rk4]);
        assert_eq!(run_args().selected_methods(), Method::ALL.to_vec());
    }

    #[test]
    fn test_config_file_then_flags() {
        let dir = std::env::temp_dir().join(format!("fixed_diffeq_settings_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("run.ron");
        fs::write(&path, "(num_steps: 200, t_end: 4.0, coupling: Textbook)").unwrap();

        let args = RunArgs {
            config: Some(path.clone()),
            y_init: Some(3.0),
            ..run_args()
        };
        let config = args.resolve(IntegrationConfig::default().with_num_steps(7)).unwrap();
        assert_eq!(config.num_steps, 200);
        assert_eq!(config.t_end, 4.0);
        assert_eq!(config.y_init, 3.0);
        assert_eq!(config.v_init, 1.0);
        assert_eq!(config.coupling, StageCoupling::Textbook);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_config_file_keeps_subcommand_base() {
        let dir = std::env::temp_dir().join(format!("fixed_diffeq_partial_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("phase.ron");
        fs::write(&path, "(coupling: Textbook, v_init: Some(-0.5))").unwrap();

        let args = PairedArgs {
            run: RunArgs {
                config: Some(path),
                ..run_args()
            },
            v_init: None,
            coupling: None,
        };
        let base = IntegrationConfig::default()
            .with_num_steps(100)
            .with_span(0.0, 10.0);
        let config = args.resolve(base).unwrap();
        assert_eq!(config.num_steps, 100);
        assert_eq!(config.t_end, 10.0);
        assert_eq!(config.v_init, -0.5);
        assert_eq!(config.coupling, StageCoupling::Textbook);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_empty_config_file_changes_nothing() {
        assert_eq!(
            ConfigFile::default().apply(IntegrationConfig::default().with_y_init(2.0)),
            IntegrationConfig::default().with_y_init(2.0)
        );
    }

    #[test]
    fn test_missing_and_malformed_config() {
        let missing = Path::new("definitely/not/here.ron");
        assert!(matches!(load_config(missing), Err(CliError::ConfigRead { .. })));

        let dir = std::env::temp_dir().join(format!("fixed_diffeq_bad_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.ron");
        fs::write(&path, "(num_steps: \"many\")").unwrap();
        assert!(matches!(load_config(&path), Err(CliError::ConfigParse { .. })));
        fs::write(&path, "(steps: 10)").unwrap();
        assert!(matches!(load_config(&path), Err(CliError::ConfigParse { .. })));
        fs::remove_dir_all(&dir).unwrap();
    }
}
