use std::sync::Arc;

use crate::{
	library::Library,
	package::{Package, PackageInfo},
	registry::Registry,
	test_executable::TestExecutable,
};

pub const NAME: &str = "csocket";

/// Returns the package descriptor of 'csocket'.
pub fn get_package(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	// Dependencies
	let unittestpkg = registry.get(super::cunittest::NAME)?;
	let basepkg = registry.get(super::cbase::NAME)?;
	let hashpkg = registry.get(super::chash::NAME)?;
	let timepkg = registry.get(super::ctime::NAME)?;
	let uuidpkg = registry.get(super::cuuid::NAME)?;

	let path = registry.config().package_path(NAME);

	// 'csocket' library
	let mut mainlib = Library::cpp_lib(NAME, &path);
	mainlib.link(&basepkg.main_lib);
	mainlib.link(&hashpkg.main_lib);
	mainlib.link(&timepkg.main_lib);
	mainlib.link(&uuidpkg.main_lib);
	let mainlib = Arc::new(mainlib);

	// 'csocket' test-support library
	let mut testlib = Library::cpp_test_lib("csocket_test", &path);
	testlib.link(&mainlib);
	testlib.link(basepkg.test_lib_or_main());
	testlib.link(hashpkg.test_lib_or_main());
	testlib.link(timepkg.test_lib_or_main());
	testlib.link(uuidpkg.test_lib_or_main());
	let testlib = Arc::new(testlib);

	// 'csocket' unittest executable
	let mut unittest = TestExecutable::cpp_test("csocket_unittest", &path);
	unittest.link(&unittestpkg.main_lib);
	unittest.link(&testlib);
	let unittest = Arc::new(unittest);

	Ok(Arc::new(Package {
		info: PackageInfo { name: NAME.to_owned(), path },
		dependencies: vec![unittestpkg, basepkg, hashpkg, timepkg, uuidpkg],
		main_lib: mainlib,
		test_lib: Some(testlib),
		unittest: Some(unittest),
	}))
}
