//! The core library of the HPE command-line client.
//! 
//! At present this provides the client's self-update check: it fetches a small
//! version manifest, compares the version it describes against the running
//! client's, and reports whether an update is available along with the details
//! needed to obtain and verify it.
//! 
//! The check can be switched off by setting the
//! [`HPECLI_DISABLE_UPDATE_CHECK`](policy::DISABLE_UPDATE_CHECK_ENV) environment
//! variable to a truthy value.
//! 
//! # Examples
//! 
//! ```no_run
//! # async fn run() {
//! if hpecli::is_update_available().await {
//!     // Tell the user about it
//! }
//! # }
//! ```
//! 



//		Modules

pub mod checker;
pub mod config;
pub mod errors;
pub mod manifest;
pub mod policy;
pub mod source;
pub mod version;



//		Packages

pub use checker::{
	CheckResponse,
	check_update,
	check_update_with,
	is_update_available,
	is_update_available_with,
	spawn_update_check,
};
pub use config::Config;
pub use errors::UpdateError;
pub use policy::UpdatePolicy;
pub use source::{FileSource, HttpSource, VersionSource};
