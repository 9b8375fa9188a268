//! This module provides decoding of the remote version manifest.
//!
//! The manifest is a small JSON document describing the latest release that is
//! available. Only `version` is required. The remaining keys are optional and
//! are carried through verbatim so that a separate verifier can make use of
//! them. Unrecognised keys are ignored, so that the manifest format can grow
//! without breaking older clients.
//!

//		Modules

#[cfg(test)]
#[path = "tests/manifest.rs"]
mod tests;



//		Packages

use crate::errors::ManifestError;
use serde::Deserialize;
use serde_json::{Map as JsonMap, Value as JsonValue};



//		Structs

//		RemoteManifest															
/// The latest available version, as described by the remote manifest.
/// 
/// Optional keys that are absent or `null` in the document are represented as
/// empty values.
/// 
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub struct RemoteManifest {
	//		Public properties													
	/// The version string reported by the manifest, exactly as given.
	pub version:    String,
	
	/// A human-readable release note.
	pub message:    String,
	
	/// The download location of the update artifact.
	pub url:        String,
	
	/// The public key material for verifying the update artifact. This is the
	/// raw bytes of the manifest's text, with no decoding applied.
	pub public_key: Vec<u8>,
	
	/// The expected checksum of the update artifact.
	pub checksum:   String,
}

//󰭅		RemoteManifest															
impl RemoteManifest {
	//		parse																
	/// Decodes the raw bytes of a manifest.
	/// 
	/// # Parameters
	/// 
	/// * `bytes` - The manifest document, as fetched from its source.
	/// 
	/// # Errors
	/// 
	/// * [`ManifestError::Malformed`]
	/// * [`ManifestError::MissingVersion`]
	/// 
	pub fn parse(bytes: &[u8]) -> Result<Self, ManifestError> {
		//	Decoding into a map first rejects arrays, which serde would otherwise
		//	accept as a positional struct
		let document: JsonMap<String, JsonValue> = serde_json::from_slice(bytes).map_err(|err|
			ManifestError::Malformed(err.to_string())
		)?;
		let raw: ManifestDocument = serde_json::from_value(JsonValue::Object(document)).map_err(|err|
			ManifestError::Malformed(err.to_string())
		)?;
		let version = raw.version
			.filter(|version| !version.trim().is_empty())
			.ok_or(ManifestError::MissingVersion)?
		;
		Ok(Self {
			version,
			message:    raw.message.unwrap_or_default(),
			url:        raw.url.unwrap_or_default(),
			public_key: raw.publickey.map(String::into_bytes).unwrap_or_default(),
			checksum:   raw.checksum.unwrap_or_default(),
		})
	}
}

//		ManifestDocument														
/// The wire form of the manifest, before the required keys are enforced.
#[derive(Clone, Debug, Deserialize)]
struct ManifestDocument {
	//		Private properties													
	/// The latest version available.
	version:   Option<String>,
	
	/// The release note.
	message:   Option<String>,
	
	/// The download location.
	url:       Option<String>,
	
	/// The public key, as text.
	publickey: Option<String>,
	
	/// The expected checksum.
	checksum:  Option<String>,
}
