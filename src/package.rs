use core::fmt;
use std::sync::Arc;

use crate::{
	library::Library, //
	test_executable::TestExecutable,
};

#[derive(Debug)]
pub struct PackageInfo {
	pub name: String,
	pub path: String,
}

/// A named package: its sub-package dependencies in declaration order, its
/// production library, an optional test-support library and an optional
/// unit-test executable. Immutable once its builder returns it.
#[derive(Debug)]
pub struct Package {
	pub info: PackageInfo,
	pub dependencies: Vec<Arc<Package>>,
	pub main_lib: Arc<Library>,
	pub test_lib: Option<Arc<Library>>,
	pub unittest: Option<Arc<TestExecutable>>,
}

impl fmt::Display for Package {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			r#"Package{{
   name: {},
   dependencies: [{}],
   main_lib: {},
   test_lib: {},
   unittest: {},
}}"#,
			self.info.name,
			self.dependencies.iter().map(|x| x.info.name.clone()).collect::<Vec<String>>().join(", "),
			self.main_lib.name,
			self.test_lib.as_ref().map(|x| x.name.clone()).unwrap_or("None".to_owned()),
			self.unittest.as_ref().map(|x| x.name.clone()).unwrap_or("None".to_owned()),
		)
	}
}

impl Package {
	pub fn dependency(&self, name: &str) -> Option<&Arc<Package>> {
		self.dependencies.iter().find(|x| x.info.name == name)
	}

	/// The library downstream test-support code links: the test-support
	/// library when the package publishes one, otherwise the production
	/// library.
	pub fn test_lib_or_main(&self) -> &Arc<Library> {
		self.test_lib.as_ref().unwrap_or(&self.main_lib)
	}
}

/// Every package reachable from `root`, dependency-first, each exactly
/// once. `root` comes last.
pub fn closure(root: &Arc<Package>) -> Vec<Arc<Package>> {
	let mut out = Vec::new();
	closure_inner(root, &mut out);
	out
}

fn closure_inner(package: &Arc<Package>, out: &mut Vec<Arc<Package>>) {
	if out.iter().any(|x| Arc::ptr_eq(x, package)) {
		return;
	}
	for dep in &package.dependencies {
		closure_inner(dep, out);
	}
	out.push(package.clone());
}
