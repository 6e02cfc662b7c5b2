use std::{
	collections::BTreeMap, //
	sync::Arc,
};

use crate::{
	err_msg, //
	package::Package,
	packages,
	Config,
};

pub type BuilderFn = fn(&mut Registry) -> Result<Arc<Package>, anyhow::Error>;

/// Maps package names to their builder functions and memoizes the
/// descriptor each builder returns, so a package shared transitively is
/// composed once per invocation.
pub struct Registry {
	config: Config,
	builders: BTreeMap<String, BuilderFn>,
	built: BTreeMap<String, Arc<Package>>,
	building: Vec<String>,
}

impl Registry {
	pub fn new(config: Config) -> Registry {
		Registry {
			config,
			builders: BTreeMap::new(),
			built: BTreeMap::new(),
			building: Vec::new(),
		}
	}

	/// A registry preloaded with the builders of csocket and its
	/// dependencies.
	pub fn with_default_builders(config: Config) -> Registry {
		let mut registry = Registry::new(config);
		registry.register(packages::cbase::NAME, packages::cbase::get_package);
		registry.register(packages::chash::NAME, packages::chash::get_package);
		registry.register(packages::csocket::NAME, packages::csocket::get_package);
		registry.register(packages::ctime::NAME, packages::ctime::get_package);
		registry.register(packages::cunittest::NAME, packages::cunittest::get_package);
		registry.register(packages::cuuid::NAME, packages::cuuid::get_package);
		registry
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn register(&mut self, name: &str, builder: BuilderFn) {
		self.builders.insert(name.to_owned(), builder);
	}

	/// Fetch a package descriptor, composing it on first use.
	pub fn get(&mut self, name: &str) -> Result<Arc<Package>, anyhow::Error> {
		if let Some(package) = self.built.get(name) {
			return Ok(package.clone());
		}
		if self.building.iter().any(|x| x == name) {
			return err_msg(format!("Dependency cycle: {} -> {}", self.building.join(" -> "), name));
		}
		let builder = match self.builders.get(name) {
			Some(x) => *x,
			None => return err_msg(format!("No builder registered for package \"{}\"", name)),
		};
		self.building.push(name.to_owned());
		let package = builder(self)?;
		self.building.pop();
		log::debug!("Composed package descriptor \"{}\"", name);
		self.built.insert(name.to_owned(), package.clone());
		Ok(package)
	}
}
