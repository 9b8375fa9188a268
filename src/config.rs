//! This module provides the configuration for the update check.

//		Modules

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;



//		Packages

use crate::{
	policy::{DISABLE_UPDATE_CHECK_ENV, UpdatePolicy},
	source::DEFAULT_TIMEOUT,
};
use core::time::Duration;
use std::{
	env,
	ffi::OsStr,
};



//		Constants

/// The version of this application, as compiled in.
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The location of the published version manifest.
pub const DEFAULT_VERSION_URL: &str = "https://raw.githubusercontent.com/HewlettPackard/hpecli/master/update/version.json";



//		Structs

//		Config																	
/// The configuration options for the update check.
/// 
/// The [`Default`] configuration checks the published manifest against the
/// compiled-in version, with the check enabled. [`Config::from_env()`] does the
/// same, but honours the [`DISABLE_UPDATE_CHECK_ENV`] environment variable.
/// 
#[allow(clippy::exhaustive_structs, reason = "Provided for configuration")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
	//		Public properties													
	/// The current version of the application. This must be a non-empty
	/// semantic version.
	pub version:              String,
	
	/// The location of the version manifest. This is validated when fetching,
	/// not when configuring.
	pub url:                  String,
	
	/// How long to wait for the manifest before giving up.
	pub timeout:              Duration,
	
	/// Whether to skip the update check entirely.
	pub disable_update_check: bool,
}

//󰭅		Config																	
impl Config {
	//		from_env															
	/// Creates the default configuration, reading the disable toggle from the
	/// process environment.
	/// 
	/// The environment is read on every call, so a change to it between two
	/// checks is honoured by the second.
	/// 
	#[must_use]
	pub fn from_env() -> Self {
		Self::from_env_value(env::var_os(DISABLE_UPDATE_CHECK_ENV).as_deref())
	}
	
	//		from_env_value														
	/// Creates the default configuration, with the disable toggle taken from
	/// the raw value of [`DISABLE_UPDATE_CHECK_ENV`].
	/// 
	/// # Parameters
	/// 
	/// * `value` - The variable's value, or [`None`] if it is not set.
	/// 
	#[must_use]
	pub fn from_env_value(value: Option<&OsStr>) -> Self {
		Self {
			disable_update_check: UpdatePolicy::from_env_value(value).should_skip(),
			..Self::default()
		}
	}
}

//󰭅		Default																	
impl Default for Config {
	//		default																
	fn default() -> Self {
		Self {
			version:              CURRENT_VERSION.to_owned(),
			url:                  DEFAULT_VERSION_URL.to_owned(),
			timeout:              DEFAULT_TIMEOUT,
			disable_update_check: false,
		}
	}
}
