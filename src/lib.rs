pub mod generator;
pub mod library;
pub mod link;
pub mod package;
pub mod packages;
pub mod registry;
pub mod target;
pub mod test_executable;

use std::{
	fs, //
	path::Path,
	sync::Arc,
};

use serde::Deserialize;

use package::Package;
use registry::Registry;

pub const CDENV_TOML: &str = "cdenv.toml";

const DEFAULT_NAMESPACE: &str = "github.com/jurgen-kluft";

/// Composition-wide configuration. Carries what a descriptor would
/// otherwise hard-code as process-wide constants.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	#[serde(default = "default_namespace")]
	pub namespace: String,
}

fn default_namespace() -> String {
	DEFAULT_NAMESPACE.to_owned()
}

impl Default for Config {
	fn default() -> Config {
		Config { namespace: default_namespace() }
	}
}

impl Config {
	pub fn package_path(&self, name: &str) -> String {
		format!("{}/{}", self.namespace, name)
	}
}

pub(crate) fn err_msg<T>(msg: String) -> Result<T, anyhow::Error> {
	Err(anyhow::Error::msg(msg))
}

pub fn read_config(path: &Path) -> Result<Config, anyhow::Error> {
	let text = match fs::read_to_string(path) {
		Ok(x) => x,
		Err(e) => return err_msg(format!("Error opening {}: {}", path.display(), e)),
	};
	match toml::from_str::<Config>(&text) {
		Ok(x) => Ok(x),
		Err(e) => err_msg(format!("Error reading {}: {}", path.display(), e)),
	}
}

/// Compose the root csocket descriptor with the default builders.
pub fn compose(config: Config) -> Result<Arc<Package>, anyhow::Error> {
	let mut registry = Registry::with_default_builders(config);
	registry.get(packages::csocket::NAME)
}
