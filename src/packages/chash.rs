use std::sync::Arc;

use crate::{
	library::Library,
	package::{Package, PackageInfo},
	registry::Registry,
	test_executable::TestExecutable,
};

pub const NAME: &str = "chash";

/// Returns the package descriptor of 'chash'.
pub fn get_package(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	// Dependencies
	let unittestpkg = registry.get(super::cunittest::NAME)?;
	let basepkg = registry.get(super::cbase::NAME)?;

	let path = registry.config().package_path(NAME);

	// 'chash' library
	let mut mainlib = Library::cpp_lib(NAME, &path);
	mainlib.link(&basepkg.main_lib);
	let mainlib = Arc::new(mainlib);

	// 'chash' test-support library
	let mut testlib = Library::cpp_test_lib("chash_test", &path);
	testlib.link(&mainlib);
	testlib.link(basepkg.test_lib_or_main());
	let testlib = Arc::new(testlib);

	// 'chash' unittest executable
	let mut unittest = TestExecutable::cpp_test("chash_unittest", &path);
	unittest.link(&unittestpkg.main_lib);
	unittest.link(&testlib);
	let unittest = Arc::new(unittest);

	Ok(Arc::new(Package {
		info: PackageInfo { name: NAME.to_owned(), path },
		dependencies: vec![unittestpkg, basepkg],
		main_lib: mainlib,
		test_lib: Some(testlib),
		unittest: Some(unittest),
	}))
}
