use std::sync::Arc;

use crate::{
	library::Library, //
	package::{Package, PackageInfo},
	registry::Registry,
};

pub const NAME: &str = "cunittest";

/// Returns the package descriptor of 'cunittest', the unit-test framework.
/// A leaf: everything else tests against it, it depends on nothing.
pub fn get_package(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	let path = registry.config().package_path(NAME);

	let mainlib = Arc::new(Library::cpp_framework_lib(NAME, &path));

	Ok(Arc::new(Package {
		info: PackageInfo { name: NAME.to_owned(), path },
		dependencies: Vec::new(),
		main_lib: mainlib,
		test_lib: None,
		unittest: None,
	}))
}
