#![allow(non_snake_case)]

//		Modules

#[allow(unused, reason = "Shared across test binaries")]
mod common;



//		Packages

use crate::common::server::{manifest_url, start_manifest_server};
use claims::{assert_ok, assert_ok_eq};
use core::time::Duration;
use hpecli::{
	CheckResponse,
	Config,
	FileSource,
	HttpSource,
	UpdateError,
	UpdatePolicy,
	check_update,
	errors::{ManifestError, PreconditionError, SourceError},
	is_update_available,
	is_update_available_with,
	policy::DISABLE_UPDATE_CHECK_ENV,
	spawn_update_check,
};
use rubedo::sugar::s;
use serde_json::json;
use std::{
	env,
	io::Write as _,
	process::Command,
};
use tempfile::NamedTempFile;



//		Constants

/// Marks the child process that runs the environment-dependent checks.
const CHILD_MARKER_ENV: &str = "HPECLI_TEST_ENV_CHILD";



//		Common

//		config_for																
/// Creates an enabled configuration for the given local version and URL.
fn config_for(version: &str, url: String) -> Config {
	Config {
		version: version.to_owned(),
		url,
		..Config::default()
	}
}



//		Tests

#[cfg(test)]
mod scenarios {
	use super::*;
	
	//		check_update														
	#[tokio::test]
	async fn check_update__remote_greater_than_local() {
		let server   = start_manifest_server(200, r#"{"version":"0.1.0"}"#, 1).await;
		let source   = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		let response = check_update(&UpdatePolicy::default(), &source, "0.0.1").await.unwrap();
		assert_eq!(response.update_available, true);
		assert_eq!(response.remote_version,   "0.1.0");
	}
	#[tokio::test]
	async fn check_update__remote_less_than_local() {
		let server   = start_manifest_server(200, r#"{"version":"0.0.1"}"#, 1).await;
		let source   = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		let response = check_update(&UpdatePolicy::default(), &source, "0.0.2").await.unwrap();
		assert_eq!(response.update_available, false);
		assert_eq!(response.remote_version,   "0.0.1");
	}
	#[tokio::test]
	async fn check_update__all_fields() {
		let body = json!({
			"version":   "0.1.1",
			"message":   "update available",
			"url":       "https://foo.bar/update",
			"publickey": "00001111",
			"checksum":  "120EA8A25E5D487BF68B5F7096440019",
		}).to_string();
		let server   = start_manifest_server(200, &body, 1).await;
		let source   = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		let response = check_update(&UpdatePolicy::default(), &source, "0.1.2").await.unwrap();
		assert_eq!(response, CheckResponse {
			update_available: false,
			remote_version:   s!("0.1.1"),
			message:          s!("update available"),
			url:              s!("https://foo.bar/update"),
			public_key:       b"00001111".to_vec(),
			checksum:         s!("120EA8A25E5D487BF68B5F7096440019"),
		});
	}
	#[tokio::test]
	async fn check_update__skipped() {
		let server = start_manifest_server(200, r#"{"version":"9.9.9"}"#, 0).await;
		let source = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		assert_ok_eq!(check_update(&UpdatePolicy::new(true), &source, "").await, CheckResponse::default());
	}
	#[tokio::test]
	async fn check_update__from_file() {
		let mut file = NamedTempFile::new().unwrap();
		file.write_all(br#"{"version":"2.0.0","message":"Major release"}"#).unwrap();
		let source   = FileSource::new(file.path());
		let response = assert_ok!(check_update(&UpdatePolicy::default(), &source, "1.9.9").await);
		assert_eq!(response.update_available, true);
		assert_eq!(response.message,          "Major release");
	}
	#[tokio::test]
	async fn check_update__err_missing_local_version() {
		let server = start_manifest_server(200, r#"{"version":"0.0.1"}"#, 0).await;
		let source = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		let err    = check_update(&UpdatePolicy::default(), &source, "").await.unwrap_err();
		assert_eq!(err, UpdateError::Precondition(PreconditionError::MissingLocalVersion));
	}
	#[tokio::test]
	async fn check_update__err_missing_remote_version() {
		let server = start_manifest_server(200, r#"{"message":"test will fail"}"#, 1).await;
		let source = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		let err    = check_update(&UpdatePolicy::default(), &source, "0.0.1").await.unwrap_err();
		assert_eq!(err, UpdateError::Manifest(ManifestError::MissingVersion));
	}
	#[tokio::test]
	async fn check_update__err_not_found() {
		let server = start_manifest_server(404, "", 1).await;
		let source = HttpSource::new(manifest_url(&server), Duration::from_secs(5));
		let err    = check_update(&UpdatePolicy::default(), &source, "0.0.1").await.unwrap_err();
		assert!(matches!(err, UpdateError::Source(SourceError::HttpError(..))), "Unexpected error: {err:?}");
	}
	
	//		is_update_available_with											
	#[tokio::test]
	async fn is_update_available_with() {
		let server = start_manifest_server(200, r#"{"version":"0.1.0"}"#, 1).await;
		assert!(super::is_update_available_with(&config_for("0.0.1", manifest_url(&server))).await, "Update should be available");
	}
	#[tokio::test]
	async fn is_update_available_with__invalid_url() {
		assert!(!super::is_update_available_with(&config_for("0.0.1", s!("://badScheme"))).await, "Invalid URL should report no update");
	}
	#[tokio::test]
	async fn is_update_available_with__server_error() {
		let server = start_manifest_server(500, r#"{"version":"0.1.0"}"#, 1).await;
		assert!(!super::is_update_available_with(&config_for("0.0.1", manifest_url(&server))).await, "Server error should report no update");
	}
	
	//		spawn_update_check													
	#[tokio::test]
	async fn spawn_update_check() {
		let server = start_manifest_server(200, r#"{"version":"0.1.0"}"#, 1).await;
		let handle = super::spawn_update_check(config_for("0.0.1", manifest_url(&server)));
		assert_ok_eq!(handle.await, true);
	}
	#[tokio::test]
	async fn spawn_update_check__err_swallowed() {
		let handle = super::spawn_update_check(config_for("", s!("://badScheme")));
		assert_ok_eq!(handle.await, false);
	}
}

#[cfg(test)]
mod environment {
	use super::*;
	
	//		is_update_available												
	#[test]
	fn is_update_available__disabled_by_env() {
		let output = Command::new(env::current_exe().unwrap())
			.args(["environment::is_update_available__disabled_in_child", "--exact", "--ignored"])
			.env(DISABLE_UPDATE_CHECK_ENV, "TRUE")
			.env(CHILD_MARKER_ENV, "1")
			.output()
			.unwrap()
		;
		let stdout = String::from_utf8_lossy(&output.stdout);
		assert!(output.status.success(),    "Child run failed: {stdout}");
		assert!(stdout.contains("1 passed"), "Child check did not run: {stdout}");
	}
	#[tokio::test]
	#[ignore = "Runs in a child process with the environment prepared"]
	async fn is_update_available__disabled_in_child() {
		if env::var_os(CHILD_MARKER_ENV).is_none() {
			return;
		}
		assert!(Config::from_env().disable_update_check, "Toggle should be read from the environment");
		assert!(!is_update_available().await,           "Disabled check should report no update");
	}
}
