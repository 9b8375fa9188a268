//! Errors that can occur while checking for updates.
//!
//! Every failure mode of the update check maps to one of four families,
//! wrapped by [`UpdateError`]. The detailed check path surfaces these to its
//! caller; the convenience path logs and discards them.
//!

//		Packages

use reqwest::{StatusCode, Url};
use std::path::PathBuf;
use thiserror::Error as ThisError;



//		Enums

//		UpdateError																
/// Errors that can occur when checking for updates.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum UpdateError {
	/// The manifest could not be fetched from its location.
	#[error("Unable to fetch version manifest: {0}")]
	Source(#[from] SourceError),
	
	/// The fetched manifest could not be used.
	#[error("Unusable version manifest: {0}")]
	Manifest(#[from] ManifestError),
	
	/// A version string is not valid semantic-version syntax.
	#[error("Invalid version: {0}")]
	Version(#[from] VersionError),
	
	/// The embedding program did not supply what the check requires. This is
	/// a build or packaging defect rather than a transient condition.
	#[error("Update check precondition failed: {0}")]
	Precondition(#[from] PreconditionError),
}

//		SourceError																
/// Errors that can occur when fetching the raw manifest bytes.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum SourceError {
	/// The HTTP client could not be constructed.
	#[error("Unable to create HTTP client: {0}")]
	HttpClient(String),
	
	/// An HTTP error occurred, i.e. the status code returned is not a success
	/// code.
	#[error("HTTP status code {1} received when calling {0}")]
	HttpError(Url, StatusCode),
	
	/// The HTTP request failed at the transport level, including timeouts.
	#[error("HTTP request to {0} failed: {1}")]
	HttpRequestFailed(Url, String),
	
	/// The body of a successful response could not be read.
	#[error("Invalid HTTP body received from {0}: {1}")]
	InvalidBody(Url, String),
	
	/// The location is not a well-formed fetchable address.
	#[error(r#"Invalid URL specified: "{0}": {1}"#)]
	InvalidUrl(String, String),
	
	/// The manifest is larger than any genuine manifest could be.
	#[error("Manifest from {0} exceeds the maximum size of {1} bytes")]
	TooLarge(String, usize),
	
	/// A manifest file on the local filesystem could not be read.
	#[error(r#"Unable to read manifest file "{}": {}"#, .0.display(), .1)]
	UnreadableFile(PathBuf, String),
}

//		ManifestError															
/// Errors that can occur when decoding the manifest.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum ManifestError {
	/// The document could not be decoded at all, or a known key holds a value
	/// of the wrong type.
	#[error("Malformed manifest: {0}")]
	Malformed(String),
	
	/// The required `version` key is absent or empty.
	#[error("Manifest does not specify a version")]
	MissingVersion,
}

//		VersionError															
/// Errors that can occur when interpreting a version string.
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum VersionError {
	/// The string cannot be parsed as a semantic version.
	#[error(r#"Invalid semantic version "{0}": {1}"#)]
	InvalidFormat(String, String),
}

//		PreconditionError														
/// Errors caused by the embedding program not meeting the check's contract.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ThisError)]
#[non_exhaustive]
pub enum PreconditionError {
	/// No local version was supplied.
	#[error("The local application version is missing")]
	MissingLocalVersion,
}
