use std::sync::Arc;

use crate::{
	library::Library,
	package::{Package, PackageInfo},
	registry::Registry,
	test_executable::TestExecutable,
};

pub const NAME: &str = "cbase";

/// Returns the package descriptor of 'cbase'.
pub fn get_package(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	// Dependencies
	let unittestpkg = registry.get(super::cunittest::NAME)?;

	let path = registry.config().package_path(NAME);

	// 'cbase' library
	let mainlib = Arc::new(Library::cpp_lib(NAME, &path));

	// 'cbase' test-support library
	let mut testlib = Library::cpp_test_lib("cbase_test", &path);
	testlib.link(&mainlib);
	let testlib = Arc::new(testlib);

	// 'cbase' unittest executable
	let mut unittest = TestExecutable::cpp_test("cbase_unittest", &path);
	unittest.link(&unittestpkg.main_lib);
	unittest.link(&testlib);
	let unittest = Arc::new(unittest);

	Ok(Arc::new(Package {
		info: PackageInfo { name: NAME.to_owned(), path },
		dependencies: vec![unittestpkg],
		main_lib: mainlib,
		test_lib: Some(testlib),
		unittest: Some(unittest),
	}))
}
