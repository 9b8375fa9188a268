//! This module provides the update check itself.
//! 
//! There are two ways in. [`check_update()`] is the detailed path: it reports
//! everything the manifest says, and returns every failure to its caller.
//! [`is_update_available()`] is the convenience path: it answers yes or no, and
//! never fails. Any problem with the check is logged at debug level and treated
//! as "no update", so that an unreachable or broken manifest can never get in
//! the way of the application itself.
//! 
//! Neither path downloads, verifies, or installs anything. The response carries
//! the download location, public key, and checksum so that a separate verifier
//! can do that.
//! 

//		Modules

#[cfg(test)]
#[path = "tests/checker.rs"]
mod tests;



//		Packages

use crate::{
	config::Config,
	errors::{PreconditionError, UpdateError},
	manifest::RemoteManifest,
	policy::UpdatePolicy,
	source::{HttpSource, VersionSource},
	version::is_newer,
};
use serde::{Serialize, Serializer};
use tokio::{spawn, task::JoinHandle};
use tracing::{debug, info};



//		Structs

//		CheckResponse															
/// The result of a version check.
/// 
/// A skipped check produces the [`Default`] value, which is indistinguishable
/// from a check that found nothing. Every field other than
/// [`update_available`](Self::update_available) is copied verbatim from the
/// manifest.
/// 
#[allow(clippy::exhaustive_structs, reason = "Plain result data")]
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CheckResponse {
	//		Public properties													
	/// Whether the remote version is newer than the local one.
	pub update_available: bool,
	
	/// The version reported by the manifest.
	pub remote_version:   String,
	
	/// A human-readable release note, or empty.
	pub message:          String,
	
	/// The download location of the update artifact, or empty.
	pub url:              String,
	
	/// The public key for verifying the update artifact, or empty.
	#[serde(serialize_with = "serialize_public_key")]
	pub public_key:       Vec<u8>,
	
	/// The expected checksum of the update artifact, or empty.
	pub checksum:         String,
}

//󰭅		CheckResponse															
impl CheckResponse {
	//		from_manifest														
	/// Creates a response from a decoded manifest.
	/// 
	/// # Parameters
	/// 
	/// * `manifest`         - The manifest to take the details from.
	/// * `update_available` - Whether the manifest's version is newer than the
	///                        local one.
	/// 
	#[must_use]
	pub fn from_manifest(manifest: RemoteManifest, update_available: bool) -> Self {
		Self {
			update_available,
			remote_version: manifest.version,
			message:        manifest.message,
			url:            manifest.url,
			public_key:     manifest.public_key,
			checksum:       manifest.checksum,
		}
	}
}



//		Functions

//		check_update															
/// Checks whether an update is available.
/// 
/// When the policy says to skip the check, an empty response is returned
/// straight away, and the source is never touched.
/// 
/// # Parameters
/// 
/// * `policy`        - Decides whether the check runs at all.
/// * `source`        - Where to fetch the version manifest from.
/// * `local_version` - The version of the running application.
/// 
/// # Errors
/// 
/// * [`UpdateError::Precondition`] - `local_version` is empty.
/// * [`UpdateError::Source`]       - The manifest could not be fetched.
/// * [`UpdateError::Manifest`]     - The manifest is malformed or has no
///                                   version.
/// * [`UpdateError::Version`]      - Either version is not a valid semantic
///                                   version.
/// 
pub async fn check_update<S>(
	policy:        &UpdatePolicy,
	source:        &S,
	local_version: &str,
) -> Result<CheckResponse, UpdateError>
where
	S: VersionSource + ?Sized,
{
	//		Apply policy														
	if policy.should_skip() {
		debug!("Update check is disabled");
		return Ok(CheckResponse::default());
	}
	if local_version.trim().is_empty() {
		return Err(PreconditionError::MissingLocalVersion.into());
	}
	//		Get latest version													
	let bytes    = source.fetch().await?;
	let manifest = RemoteManifest::parse(&bytes)?;
	//		Compare to current version											
	let update_available = is_newer(local_version, &manifest.version)?;
	if update_available {
		info!("New version {} available", manifest.version);
	} else {
		info!("The current version {local_version} is the latest available");
	}
	Ok(CheckResponse::from_manifest(manifest, update_available))
}

//		check_update_with														
/// Checks whether an update is available, fetching the manifest over HTTP as
/// configured.
/// 
/// # Errors
/// 
/// As for [`check_update()`].
/// 
pub async fn check_update_with(config: &Config) -> Result<CheckResponse, UpdateError> {
	let policy = UpdatePolicy::from_config(config);
	let source = HttpSource::new(config.url.clone(), config.timeout);
	check_update(&policy, &source, &config.version).await
}

//		is_update_available														
/// Whether an update is available for this application.
/// 
/// This uses the published manifest and the compiled-in version, and reads the
/// disable toggle from the environment afresh on each call. It never fails:
/// any problem with the check results in `false`.
/// 
pub async fn is_update_available() -> bool {
	is_update_available_with(&Config::from_env()).await
}

//		is_update_available_with												
/// Whether an update is available, as configured.
/// 
/// Any failure is logged at debug level and results in `false`.
/// 
pub async fn is_update_available_with(config: &Config) -> bool {
	match check_update_with(config).await {
		Ok(response) => response.update_available,
		Err(err)     => {
			debug!("Error checking for updates: {err}");
			false
		},
	}
}

//		spawn_update_check														
/// Runs the convenience check as a one-shot background task.
/// 
/// This allows the check to be started early, e.g. at startup, and its answer
/// collected once it is needed. The task may also simply be abandoned.
/// 
/// # Panics
/// 
/// Panics if called outside of a Tokio runtime.
/// 
#[must_use]
pub fn spawn_update_check(config: Config) -> JoinHandle<bool> {
	spawn(async move {
		is_update_available_with(&config).await
	})
}

//		serialize_public_key													
/// Serialises the public key as text, so that it reads as it did in the
/// manifest.
fn serialize_public_key<S: Serializer>(key: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(&String::from_utf8_lossy(key))
}
