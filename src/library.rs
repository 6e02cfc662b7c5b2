use std::sync::Arc;

use crate::{
	link::LinkRef, //
	target::{LinkTarget, Target},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LibKind {
	/// Production code, linkable by downstream packages.
	Production,
	/// Test-only support code aggregating a package's test-variant links.
	TestSupport,
	/// A unit-test framework. Only test executables link these.
	Framework,
}

impl LibKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			LibKind::Production => "lib",
			LibKind::TestSupport => "testlib",
			LibKind::Framework => "framework",
		}
	}
}

#[derive(Debug)]
pub struct Library {
	pub name: String,
	pub path: String,
	pub kind: LibKind,
	pub links: Vec<LinkRef>,
	pub source_globs: Vec<String>,
	pub include_dirs: Vec<String>,
	pub output_name: Option<String>,
}

impl Library {
	/// Production library with the conventional source layout.
	pub fn cpp_lib(name: &str, path: &str) -> Library {
		Library {
			name: name.to_owned(),
			path: path.to_owned(),
			kind: LibKind::Production,
			links: Vec::new(),
			source_globs: vec!["source/main/cpp/**/*.cpp".to_owned()],
			include_dirs: vec!["source/main/include".to_owned()],
			output_name: None,
		}
	}

	/// Test-support library. Compiles the package's test sources and sees
	/// the production headers as well as its own.
	pub fn cpp_test_lib(name: &str, path: &str) -> Library {
		Library {
			name: name.to_owned(),
			path: path.to_owned(),
			kind: LibKind::TestSupport,
			links: Vec::new(),
			source_globs: vec!["source/test/cpp/test_*.cpp".to_owned()],
			include_dirs: vec![
				"source/main/include".to_owned(), //
				"source/test/include".to_owned(),
			],
			output_name: None,
		}
	}

	/// Unit-test framework library.
	pub fn cpp_framework_lib(name: &str, path: &str) -> Library {
		Library {
			name: name.to_owned(),
			path: path.to_owned(),
			kind: LibKind::Framework,
			links: Vec::new(),
			source_globs: vec!["source/main/cpp/**/*.cpp".to_owned()],
			include_dirs: vec!["source/main/include".to_owned()],
			output_name: None,
		}
	}

	pub fn link(&mut self, lib: &Arc<Library>) {
		self.links.push(LinkRef(lib.clone()));
	}
}

impl Target for Library {
	fn name(&self) -> &str {
		&self.name
	}
	fn output_name(&self) -> &str {
		match &self.output_name {
			Some(output_name) => output_name,
			None => &self.name,
		}
	}
	fn path(&self) -> &str {
		&self.path
	}
}

impl LinkTarget for Library {
	fn links(&self) -> &[LinkRef] {
		&self.links
	}
	fn links_recursive(&self) -> Vec<LinkRef> {
		let mut links = Vec::new();
		// Breadth-first: direct links keep their declared order, transitive
		// links follow.
		for link in &self.links {
			if !links.contains(link) {
				links.push(link.clone());
			}
		}
		for link in &self.links {
			for transitive in link.links_recursive() {
				if !links.contains(&transitive) {
					links.push(transitive);
				}
			}
		}
		links
	}
}
