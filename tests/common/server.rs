//! A stub manifest server for integration tests.

//		Packages

use std::{
	io::stdout,
	sync::Once,
};
use tracing::Level;
use tracing_subscriber::{
	EnvFilter,
	fmt::{layer, writer::MakeWriterExt},
	layer::SubscriberExt,
	registry,
	util::SubscriberInitExt,
};
use wiremock::{
	Mock,
	MockServer,
	ResponseTemplate,
	matchers::{method, path},
};



//		Constants

/// The path the stub server publishes the manifest at.
pub(crate) const MANIFEST_PATH: &str = "/update/version.json";



//		Statics

/// Guards the one-off logging setup.
static INIT: Once = Once::new();



//		Functions

//		initialize																
/// Sets up logging for the test process, once.
pub(crate) fn initialize() {
	INIT.call_once(|| {
		registry()
			.with(EnvFilter::new("hpecli=debug"))
			.with(layer().with_writer(stdout.with_max_level(Level::DEBUG)))
			.init()
		;
	});
}

//		start_manifest_server													
/// Starts a stub server that publishes the given manifest body.
/// 
/// # Parameters
/// 
/// * `status` - The HTTP status code to respond with.
/// * `body`   - The manifest document to serve.
/// * `calls`  - How many requests the server expects to receive. This is
///              verified when the server is dropped.
/// 
pub(crate) async fn start_manifest_server(status: u16, body: &str, calls: u64) -> MockServer {
	initialize();
	let server = MockServer::start().await;
	Mock::given(method("GET"))
		.and(path(MANIFEST_PATH))
		.respond_with(ResponseTemplate::new(status).set_body_raw(body.to_owned(), "application/json"))
		.expect(calls)
		.mount(&server)
		.await
	;
	server
}

//		manifest_url															
/// The full URL of the manifest on the given stub server.
pub(crate) fn manifest_url(server: &MockServer) -> String {
	format!("{}{MANIFEST_PATH}", server.uri())
}
