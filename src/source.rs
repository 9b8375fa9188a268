//! This module provides the sources that the version manifest is fetched from.
//!
//! A source knows only how to obtain the raw bytes of the manifest. It does not
//! interpret them, and it does not retry: a failure is reported once, and the
//! caller decides what to do about it.
//!

//		Modules

#[cfg(test)]
#[path = "tests/source.rs"]
mod tests;



//		Packages

use crate::errors::SourceError;
use async_trait::async_trait;
use core::time::Duration;
use reqwest::{Client, Url};
use std::path::PathBuf;
use tokio::{
	fs::File,
	io::AsyncReadExt as _,
};
use tracing::debug;

#[cfg(test)]
use mockall::automock;



//		Constants

/// The default amount of time to wait for the manifest to be fetched.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// The largest manifest that will be accepted. Real manifests are a few
/// hundred bytes.
pub const MAX_MANIFEST_SIZE: usize = 64 * 1024;



//		Traits

//§		VersionSource															
/// A location from which the raw version manifest can be fetched.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait VersionSource: Send + Sync {
	//		fetch																
	/// Fetches the raw bytes of the manifest.
	/// 
	/// # Errors
	/// 
	/// Returns a [`SourceError`] if the manifest cannot be obtained.
	/// 
	async fn fetch(&self) -> Result<Vec<u8>, SourceError>;
}



//		Structs

//		HttpSource																
/// Fetches the manifest from a URL with a single `GET` request.
/// 
/// The URL is kept as given and only validated when fetching, so that a
/// misconfigured location is reported in the same way as an unreachable one.
/// 
#[derive(Clone, Debug)]
pub struct HttpSource {
	//		Private properties													
	/// The location of the manifest.
	url:     String,
	
	/// The maximum time allowed for the whole request.
	timeout: Duration,
}

//󰭅		HttpSource																
impl HttpSource {
	//		Constructors														
	
	//		new																	
	/// Creates a new HTTP source.
	/// 
	/// # Parameters
	/// 
	/// * `url`     - The location of the manifest.
	/// * `timeout` - The maximum time allowed for the request.
	/// 
	#[must_use]
	pub fn new<S: Into<String>>(url: S, timeout: Duration) -> Self {
		Self {
			url: url.into(),
			timeout,
		}
	}
	
	//		Public methods														
	
	//		url																	
	/// The location of the manifest.
	#[must_use]
	pub fn url(&self) -> &str {
		&self.url
	}
	
	//		timeout																
	/// The maximum time allowed for the request.
	#[must_use]
	pub const fn timeout(&self) -> Duration {
		self.timeout
	}
	
	//																			
}

//󰭅		VersionSource															
#[async_trait]
impl VersionSource for HttpSource {
	//		fetch																
	/// Fetches the manifest over HTTP.
	/// 
	/// # Errors
	/// 
	/// * [`SourceError::HttpClient`]
	/// * [`SourceError::HttpError`]
	/// * [`SourceError::HttpRequestFailed`]
	/// * [`SourceError::InvalidBody`]
	/// * [`SourceError::InvalidUrl`]
	/// * [`SourceError::TooLarge`]
	/// 
	async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
		//		Prepare request													
		let url = Url::parse(&self.url).map_err(|err|
			SourceError::InvalidUrl(self.url.clone(), err.to_string())
		)?;
		if !matches!(url.scheme(), "http" | "https") {
			return Err(SourceError::InvalidUrl(self.url.clone(), format!("unsupported scheme {}", url.scheme())));
		}
		let client = Client::builder().timeout(self.timeout).build().map_err(|err|
			SourceError::HttpClient(err.to_string())
		)?;
		//		Perform request													
		debug!("Fetching version manifest from {url}");
		let mut response = client.get(url.clone()).send().await.map_err(|err|
			SourceError::HttpRequestFailed(url.clone(), err.to_string())
		)?;
		//		Check status													
		let status = response.status();
		if !status.is_success() {
			return Err(SourceError::HttpError(url, status));
		}
		if response.content_length().is_some_and(|length| length > MAX_MANIFEST_SIZE as u64) {
			return Err(SourceError::TooLarge(url.to_string(), MAX_MANIFEST_SIZE));
		}
		//		Read body														
		let mut body = Vec::new();
		//	Read in chunks, so that an oversized body is abandoned early
		while let Some(chunk) = response.chunk().await.map_err(|err|
			SourceError::InvalidBody(url.clone(), err.to_string())
		)? {
			if body.len().saturating_add(chunk.len()) > MAX_MANIFEST_SIZE {
				return Err(SourceError::TooLarge(url.to_string(), MAX_MANIFEST_SIZE));
			}
			body.extend_from_slice(&chunk);
		}
		Ok(body)
	}
}

//		FileSource																
/// Reads the manifest from the local filesystem.
#[derive(Clone, Debug)]
pub struct FileSource {
	//		Private properties													
	/// The path to the manifest file.
	path: PathBuf,
}

//󰭅		FileSource																
impl FileSource {
	//		new																	
	/// Creates a new file source.
	/// 
	/// # Parameters
	/// 
	/// * `path` - The path to the manifest file.
	/// 
	#[must_use]
	pub fn new<P: Into<PathBuf>>(path: P) -> Self {
		Self { path: path.into() }
	}
}

//󰭅		VersionSource															
#[async_trait]
impl VersionSource for FileSource {
	//		fetch																
	/// Reads the manifest file.
	/// 
	/// # Errors
	/// 
	/// * [`SourceError::TooLarge`]
	/// * [`SourceError::UnreadableFile`]
	/// 
	async fn fetch(&self) -> Result<Vec<u8>, SourceError> {
		debug!("Reading version manifest from {}", self.path.display());
		let file = File::open(&self.path).await.map_err(|err|
			SourceError::UnreadableFile(self.path.clone(), err.to_string())
		)?;
		//	Read one byte past the limit, to tell a full-sized file from an oversized one
		let mut body = Vec::new();
		let _read    = file.take(MAX_MANIFEST_SIZE as u64 + 1).read_to_end(&mut body).await.map_err(|err|
			SourceError::UnreadableFile(self.path.clone(), err.to_string())
		)?;
		if body.len() > MAX_MANIFEST_SIZE {
			return Err(SourceError::TooLarge(self.path.display().to_string(), MAX_MANIFEST_SIZE));
		}
		Ok(body)
	}
}
