//! This module provides semantic-version comparison.
//!
//! Versions are compared by [Semantic Versioning](https://semver.org/)
//! precedence: numeric fields are compared in turn, a pre-release orders before
//! the release of the same `MAJOR.MINOR.PATCH`, and build metadata is ignored.
//!

//		Modules

#[cfg(test)]
#[path = "tests/version.rs"]
mod tests;



//		Packages

use crate::errors::VersionError;
use core::cmp::Ordering;
use semver::Version;



//		Functions

//		parse_version															
/// Parses a semantic-version string.
/// 
/// Surrounding whitespace is ignored. An empty string is invalid, and does not
/// stand in for "older than everything".
/// 
/// # Errors
/// 
/// * [`VersionError::InvalidFormat`]
/// 
pub fn parse_version(input: &str) -> Result<Version, VersionError> {
	Version::parse(input.trim()).map_err(|err|
		VersionError::InvalidFormat(input.to_owned(), err.to_string())
	)
}

//		compare																	
/// Compares a local version against a remote one.
/// 
/// Returns [`Ordering::Less`] when the local version precedes the remote one,
/// i.e. when the remote version is newer.
/// 
/// # Parameters
/// 
/// * `local`  - The version of the running application.
/// * `remote` - The version reported by the manifest.
/// 
/// # Errors
/// 
/// * [`VersionError::InvalidFormat`]
/// 
pub fn compare(local: &str, remote: &str) -> Result<Ordering, VersionError> {
	let local  = parse_version(local)?;
	let remote = parse_version(remote)?;
	Ok(local.cmp_precedence(&remote))
}

//		is_newer																
/// Whether the remote version is newer than the local one.
/// 
/// # Errors
/// 
/// * [`VersionError::InvalidFormat`]
/// 
pub fn is_newer(local: &str, remote: &str) -> Result<bool, VersionError> {
	Ok(compare(local, remote)? == Ordering::Less)
}
