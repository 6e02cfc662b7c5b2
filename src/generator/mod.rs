mod dot;
mod manifest;

use std::{
	collections::HashSet, //
	fs,
	path::Path,
	sync::Arc,
};

use crate::{
	err_msg, //
	library::LibKind,
	link::LinkRef,
	package::{self, Package},
	target::{LinkTarget, Target},
};

pub const MANIFEST_FILE: &str = "descriptor.toml";
pub const DOT_FILE: &str = "deps.dot";

pub enum Generator {
	Manifest,
	Dot,
}

impl Generator {
	pub fn from_name(name: &str) -> Option<Generator> {
		match name {
			"Manifest" => Some(Generator::Manifest),
			"Dot" => Some(Generator::Dot),
			_ => None,
		}
	}

	pub fn file_name(&self) -> &'static str {
		match self {
			Generator::Manifest => MANIFEST_FILE,
			Generator::Dot => DOT_FILE,
		}
	}

	/// Render the handoff descriptor for an external build-file emitter.
	/// Validates the graph first; a malformed graph renders nothing.
	pub fn render(&self, root: &Arc<Package>) -> Result<String, anyhow::Error> {
		validate(root)?;
		match self {
			Generator::Manifest => manifest::render(root),
			Generator::Dot => Ok(dot::render(root)),
		}
	}

	pub fn generate(&self, root: Arc<Package>, build_dir: &Path) -> Result<(), anyhow::Error> {
		let content = self.render(&root)?;
		let out_path = build_dir.join(self.file_name());
		if let Err(e) = fs::write(&out_path, content) {
			return err_msg(format!("Error writing {}: {}", out_path.display(), e));
		}
		log::info!("Wrote {}", out_path.display());
		Ok(())
	}
}

/// Checks the invariants builders cannot enforce locally:
/// - package names in the closure are unique,
/// - every link resolves, by identity, to a library owned by a package in
///   the closure,
/// - only test executables link a framework library,
/// - production libraries link only production libraries,
/// - every test executable links a framework library.
pub fn validate(root: &Arc<Package>) -> Result<(), anyhow::Error> {
	let closure = package::closure(root);

	let mut names = HashSet::new();
	for package in &closure {
		if !names.insert(package.info.name.as_str()) {
			return err_msg(format!("Duplicate package name \"{}\" in dependency graph", package.info.name));
		}
	}

	let mut owned = HashSet::new();
	for package in &closure {
		owned.insert(LinkRef(package.main_lib.clone()));
		if let Some(test_lib) = &package.test_lib {
			owned.insert(LinkRef(test_lib.clone()));
		}
	}

	for package in &closure {
		let mut libs = vec![&package.main_lib];
		if let Some(test_lib) = &package.test_lib {
			libs.push(test_lib);
		}
		for lib in libs {
			for link in lib.links() {
				if !owned.contains(link) {
					return err_msg(format!(
						"Library \"{}\" of package \"{}\" links \"{}\", which no registered sub-package owns",
						lib.name,
						package.info.name,
						link.name()
					));
				}
				if link.0.kind == LibKind::Framework {
					return err_msg(format!(
						"Library \"{}\" of package \"{}\" links the test framework \"{}\"; only test executables may",
						lib.name,
						package.info.name,
						link.name()
					));
				}
				if lib.kind == LibKind::Production && link.0.kind != LibKind::Production {
					return err_msg(format!(
						"Production library \"{}\" of package \"{}\" links non-production \"{}\"",
						lib.name,
						package.info.name,
						link.name()
					));
				}
			}
		}
		if let Some(unittest) = &package.unittest {
			for link in unittest.links() {
				if !owned.contains(link) {
					return err_msg(format!(
						"Test executable \"{}\" of package \"{}\" links \"{}\", which no registered sub-package owns",
						unittest.name,
						package.info.name,
						link.name()
					));
				}
			}
			if !unittest.links().iter().any(|x| x.0.kind == LibKind::Framework) {
				return err_msg(format!(
					"Test executable \"{}\" of package \"{}\" does not link a test framework library",
					unittest.name, package.info.name
				));
			}
		}
	}
	Ok(())
}
