use std::sync::Arc;

use crate::{
	library::Library,
	package::{Package, PackageInfo},
	registry::Registry,
	test_executable::TestExecutable,
};

pub const NAME: &str = "ctime";

/// Returns the package descriptor of 'ctime'. Publishes no test-support
/// library; its unittest executable links the production library directly
/// and consumers fall back to it too.
pub fn get_package(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	// Dependencies
	let unittestpkg = registry.get(super::cunittest::NAME)?;
	let basepkg = registry.get(super::cbase::NAME)?;

	let path = registry.config().package_path(NAME);

	// 'ctime' library
	let mut mainlib = Library::cpp_lib(NAME, &path);
	mainlib.link(&basepkg.main_lib);
	let mainlib = Arc::new(mainlib);

	// 'ctime' unittest executable
	let mut unittest = TestExecutable::cpp_test("ctime_unittest", &path);
	unittest.link(&unittestpkg.main_lib);
	unittest.link(&mainlib);
	let unittest = Arc::new(unittest);

	Ok(Arc::new(Package {
		info: PackageInfo { name: NAME.to_owned(), path },
		dependencies: vec![unittestpkg, basepkg],
		main_lib: mainlib,
		test_lib: None,
		unittest: Some(unittest),
	}))
}
