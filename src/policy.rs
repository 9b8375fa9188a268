//! This module provides the gate that can switch the update check off.

//		Modules

#[cfg(test)]
#[path = "tests/policy.rs"]
mod tests;



//		Packages

use crate::config::Config;
use std::ffi::OsStr;



//		Constants

/// The environment variable that disables the update check when set to a
/// truthy value.
pub const DISABLE_UPDATE_CHECK_ENV: &str = "HPECLI_DISABLE_UPDATE_CHECK";



//		Structs

//		UpdatePolicy															
/// Decides whether an update check should run at all.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct UpdatePolicy {
	//		Private properties													
	/// Whether the check is disabled.
	disabled: bool,
}

//󰭅		UpdatePolicy															
impl UpdatePolicy {
	//		Constructors														
	
	//		new																	
	/// Creates a policy that skips the check when `disabled` is set.
	#[must_use]
	pub const fn new(disabled: bool) -> Self {
		Self { disabled }
	}
	
	//		from_config															
	/// Creates a policy from the check configuration.
	#[must_use]
	pub const fn from_config(config: &Config) -> Self {
		Self::new(config.disable_update_check)
	}
	
	//		from_env_value														
	/// Creates a policy from the raw value of [`DISABLE_UPDATE_CHECK_ENV`], as
	/// returned by [`std::env::var_os()`]. A value that is not valid UTF-8 is
	/// not truthy.
	#[must_use]
	pub fn from_env_value(value: Option<&OsStr>) -> Self {
		Self::new(value.and_then(OsStr::to_str).is_some_and(is_truthy))
	}
	
	//		Public methods														
	
	//		should_skip															
	/// Whether the check should be skipped, returning an empty response
	/// without touching the network.
	#[must_use]
	pub const fn should_skip(&self) -> bool {
		self.disabled
	}
	
	//																			
}



//		Functions

//		is_truthy																
/// Whether a toggle value switches its option on.
/// 
/// `1`, `true`, `yes`, and `on` are truthy, ignoring case and surrounding
/// whitespace. Everything else, including an empty value, is not.
/// 
#[must_use]
pub fn is_truthy(value: &str) -> bool {
	matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
