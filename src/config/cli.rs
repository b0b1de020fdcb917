use crate::core::ConfigProvider;
use crate::utils::error::{DemoError, Result};
use crate::utils::validation::{validate_interface_name, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;

pub const INTERFACE_ENV: &str = "IDL_DEMO_INTERFACE";
pub const MANIFEST_ENV: &str = "IDL_DEMO_MANIFEST";
pub const BRACED_ENV: &str = "IDL_DEMO_BRACED";
pub const VERBOSE_ENV: &str = "IDL_DEMO_VERBOSE";

pub const DEFAULT_INTERFACE: &str = "ICalculator";

/// Command line: a single optional name. Every argument is taken verbatim,
/// including ones that look like flags, and anything after the first
/// argument is ignored.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "idl-demo")]
#[command(about = "Greets a user and reports the GUID of a generated IDL interface")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct CliArgs {
    #[arg(
        value_name = "NAME",
        value_parser = clap::value_parser!(OsString),
        num_args = 0..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub args: Vec<OsString>,
}

impl CliArgs {
    /// First argument, lossily converted so any byte sequence still greets.
    pub fn name(&self) -> Option<String> {
        self.args
            .first()
            .map(|arg| arg.to_string_lossy().into_owned())
    }
}

/// Resolved settings: the name from the command line, everything else from
/// `IDL_DEMO_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub name: Option<String>,
    pub interface: String,
    pub manifest: Option<String>,
    pub braced: bool,
    pub verbose: bool,
}

impl CliConfig {
    /// Parses the process arguments and reads the process environment.
    pub fn load() -> Result<Self> {
        Self::from_parts(&CliArgs::parse(), |key| std::env::var(key).ok())
    }

    pub fn from_parts<F>(args: &CliArgs, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            name: args.name(),
            interface: lookup(INTERFACE_ENV)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| DEFAULT_INTERFACE.to_string()),
            manifest: lookup(MANIFEST_ENV).filter(|value| !value.is_empty()),
            braced: parse_switch(BRACED_ENV, lookup(BRACED_ENV))?,
            verbose: parse_switch(VERBOSE_ENV, lookup(VERBOSE_ENV))?,
        })
    }
}

fn parse_switch(field_name: &str, value: Option<String>) -> Result<bool> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(DemoError::InvalidConfigValue {
            field: field_name.to_string(),
            value,
            reason: "Expected one of 1, true, yes, on, 0, false, no, off".to_string(),
        }),
    }
}

impl ConfigProvider for CliConfig {
    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn interface(&self) -> &str {
        &self.interface
    }

    fn braced(&self) -> bool {
        self.braced
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_interface_name(INTERFACE_ENV, &self.interface)?;
        if let Some(manifest) = &self.manifest {
            validate_path(MANIFEST_ENV, manifest)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn parse_args(args: &[&str]) -> CliArgs {
        let argv = std::iter::once("idl-demo").chain(args.iter().copied());
        CliArgs::try_parse_from(argv).unwrap()
    }

    fn config_with_env(args: &[&str], env: &[(&str, &str)]) -> Result<CliConfig> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_parts(&parse_args(args), |key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with_env(&[], &[]).unwrap();
        assert_eq!(config.name, None);
        assert_eq!(config.interface, "ICalculator");
        assert!(config.manifest.is_none());
        assert!(!config.braced);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_flag_like_names_are_taken_verbatim() {
        for name in ["-x", "--braced", "-v", "--help", "-h", "--version", "-", "--interface=IUnknown"] {
            let args = parse_args(&[name]);
            assert_eq!(args.name().as_deref(), Some(name), "{name}");
        }
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = parse_args(&["Ada", "--braced", "Grace"]);
        assert_eq!(args.name().as_deref(), Some("Ada"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name_is_converted_lossily() {
        use std::os::unix::ffi::OsStringExt;

        let raw = OsString::from_vec(b"Ad\xffa".to_vec());
        let args = CliArgs::try_parse_from([OsString::from("idl-demo"), raw]).unwrap();
        assert_eq!(args.name().as_deref(), Some("Ad\u{FFFD}a"));
    }

    #[test]
    fn test_settings_come_from_environment() {
        let config = config_with_env(
            &["Ada"],
            &[
                (INTERFACE_ENV, "IUnknown"),
                (MANIFEST_ENV, "interfaces.toml"),
                (BRACED_ENV, "yes"),
                (VERBOSE_ENV, "1"),
            ],
        )
        .unwrap();
        assert_eq!(ConfigProvider::name(&config), Some("Ada"));
        assert_eq!(ConfigProvider::interface(&config), "IUnknown");
        assert_eq!(config.manifest.as_deref(), Some("interfaces.toml"));
        assert!(config.braced);
        assert!(config.verbose);
    }

    #[test]
    fn test_empty_environment_values_fall_back() {
        let config = config_with_env(&[], &[(INTERFACE_ENV, ""), (MANIFEST_ENV, ""), (BRACED_ENV, "")]).unwrap();
        assert_eq!(config.interface, "ICalculator");
        assert!(config.manifest.is_none());
        assert!(!config.braced);
    }

    #[test]
    fn test_bad_switch_value() {
        let err = config_with_env(&[], &[(BRACED_ENV, "maybe")]).unwrap_err();
        assert!(matches!(err, DemoError::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_invalid_interface_name_fails_validation() {
        let config = config_with_env(&[], &[(INTERFACE_ENV, "not an id")]).unwrap();
        assert!(config.validate().is_err());
    }
}
