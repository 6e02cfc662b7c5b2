use std::{
	path::Path, //
	sync::Arc,
};

use cdenv::generator::{self, Generator};
use cdenv::library::{LibKind, Library};
use cdenv::package::{closure, Package, PackageInfo};
use cdenv::registry::Registry;
use cdenv::target::{LinkTarget, Target};
use cdenv::test_executable::TestExecutable;
use cdenv::{compose, read_config, Config};

#[test]
fn compose_csocket() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	assert_eq!(package.info.name, "csocket");
	assert_eq!(package.info.path, "github.com/jurgen-kluft/csocket");

	assert_eq!(package.dependencies.len(), 5);
	let dep_names = package.dependencies.iter().map(|x| x.info.name.as_str()).collect::<Vec<_>>();
	assert_eq!(dep_names, ["cunittest", "cbase", "chash", "ctime", "cuuid"]);

	let mainlib = &package.main_lib;
	assert_eq!(mainlib.name, "csocket");
	assert_eq!(mainlib.output_name(), "csocket");
	assert_eq!(mainlib.kind, LibKind::Production);
	assert_eq!(mainlib.links.len(), 4);
	assert_eq!(mainlib.links[0].name(), "cbase");
	assert_eq!(mainlib.links[1].name(), "chash");
	assert_eq!(mainlib.links[2].name(), "ctime");
	assert_eq!(mainlib.links[3].name(), "cuuid");

	let testlib = package.test_lib.as_ref().expect("csocket should have a test-support library");
	assert_eq!(testlib.name, "csocket_test");
	assert_eq!(testlib.kind, LibKind::TestSupport);
	assert_eq!(testlib.links.len(), 5);
	assert_eq!(testlib.links[0].name(), "csocket");
	assert_eq!(testlib.links[1].name(), "cbase_test");
	assert_eq!(testlib.links[2].name(), "chash_test");
	// ctime publishes no test-support library; its production library stands in
	assert_eq!(testlib.links[3].name(), "ctime");
	assert_eq!(testlib.links[4].name(), "cuuid_test");

	let unittest = package.unittest.as_ref().expect("csocket should have a unittest executable");
	assert_eq!(unittest.name, "csocket_unittest");
	assert_eq!(unittest.links.len(), 2);
	assert_eq!(unittest.links[0].name(), "cunittest");
	assert_eq!(unittest.links[1].name(), "csocket_test");
}

#[test]
fn main_lib_never_links_the_framework() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	for subpackage in closure(&package) {
		for link in subpackage.main_lib.links() {
			assert_ne!(link.0.kind, LibKind::Framework, "{} links {}", subpackage.main_lib.name, link.name());
		}
	}
}

#[test]
fn unittest_links_framework_first_then_test_lib() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	let unittest = package.unittest.as_ref().expect("csocket should have a unittest executable");
	assert_eq!(unittest.links[0].0.kind, LibKind::Framework);

	let order = unittest.links_recursive().iter().map(|x| x.name().to_owned()).collect::<Vec<_>>();
	assert_eq!(
		order,
		[
			"cunittest",
			"csocket_test",
			"csocket",
			"cbase_test",
			"chash_test",
			"ctime",
			"cuuid_test",
			"cbase",
			"chash",
			"cuuid",
		]
	);
}

#[test]
fn closure_is_dependency_first() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	let names = closure(&package).iter().map(|x| x.info.name.clone()).collect::<Vec<_>>();
	assert_eq!(names, ["cunittest", "cbase", "chash", "ctime", "cuuid", "csocket"]);
}

#[test]
fn shared_dependencies_are_memoized() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	let cbase = package.dependency("cbase").expect("csocket should depend on cbase");
	let chash = package.dependency("chash").expect("csocket should depend on chash");
	let cuuid = package.dependency("cuuid").expect("csocket should depend on cuuid");

	let cbase_via_chash = chash.dependency("cbase").expect("chash should depend on cbase");
	let cbase_via_cuuid = cuuid.dependency("cbase").expect("cuuid should depend on cbase");
	assert!(Arc::ptr_eq(cbase, cbase_via_chash));
	assert!(Arc::ptr_eq(cbase_via_chash, cbase_via_cuuid));
	assert!(Arc::ptr_eq(&cbase.main_lib, &cbase_via_cuuid.main_lib));
}

#[test]
fn composition_is_deterministic() {
	let a = compose(Config::default()).expect("Could not compose csocket");
	let b = compose(Config::default()).expect("Could not compose csocket");

	let manifest_a = Generator::Manifest.render(&a).expect("Could not render manifest");
	let manifest_b = Generator::Manifest.render(&b).expect("Could not render manifest");
	assert_eq!(manifest_a, manifest_b);

	let dot_a = Generator::Dot.render(&a).expect("Could not render dot");
	let dot_b = Generator::Dot.render(&b).expect("Could not render dot");
	assert_eq!(dot_a, dot_b);
}

#[test]
fn manifest_lists_packages_dependency_first() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	let manifest = Generator::Manifest.render(&package).expect("Could not render manifest");

	assert!(manifest.starts_with("root = \"csocket\""));
	let cunittest_pos = manifest.find("name = \"cunittest\"").expect("cunittest missing from manifest");
	let csocket_pos = manifest.find("name = \"csocket\"").expect("csocket missing from manifest");
	assert!(cunittest_pos < csocket_pos);

	assert!(manifest.contains("kind = \"framework\""));
	assert!(manifest.contains("kind = \"testlib\""));
	assert!(manifest.contains("kind = \"unittest\""));
	assert!(manifest.contains("guid = \""));
	assert!(manifest.contains("source/main/cpp/**/*.cpp"));
	assert!(manifest.contains("source/test/cpp/test_main.cpp"));
}

#[test]
fn dot_renders_clusters_and_edges() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	let dot = Generator::Dot.render(&package).expect("Could not render dot");

	assert!(dot.starts_with("digraph \"csocket\""));
	assert!(dot.contains("subgraph \"cluster_cunittest\""));
	assert!(dot.contains("\"csocket\" -> \"cbase\";"));
	assert!(dot.contains("\"csocket_unittest\" -> \"cunittest\";"));
	assert!(dot.contains("\"csocket_unittest\" [shape=ellipse];"));
}

#[test]
fn generate_writes_the_manifest() {
	let package = compose(Config::default()).expect("Could not compose csocket");
	let build_dir = std::env::temp_dir().join("cdenv_generate_test");
	std::fs::create_dir_all(&build_dir).expect("Could not create build dir");
	Generator::Manifest.generate(package, &build_dir).expect("Could not generate manifest");

	let written = std::fs::read_to_string(build_dir.join("descriptor.toml")).expect("Manifest not written");
	assert!(written.starts_with("root = \"csocket\""));
}

#[test]
fn validate_rejects_unregistered_links() {
	let foreign = Arc::new(Library::cpp_lib("rogue", "example.com/rogue"));
	let mut mainlib = Library::cpp_lib("solo", "example.com/solo");
	mainlib.link(&foreign);
	let package = Arc::new(Package {
		info: PackageInfo { name: "solo".to_owned(), path: "example.com/solo".to_owned() },
		dependencies: Vec::new(),
		main_lib: Arc::new(mainlib),
		test_lib: None,
		unittest: None,
	});

	let err = generator::validate(&package).expect_err("A link to an unregistered library should not validate");
	assert!(err.to_string().contains("rogue"), "{}", err);
}

#[test]
fn validate_rejects_framework_links_from_libraries() {
	let mut registry = Registry::with_default_builders(Config::default());
	let unittestpkg = registry.get("cunittest").expect("Could not compose cunittest");

	let mut mainlib = Library::cpp_lib("bad", "example.com/bad");
	mainlib.link(&unittestpkg.main_lib);
	let package = Arc::new(Package {
		info: PackageInfo { name: "bad".to_owned(), path: "example.com/bad".to_owned() },
		dependencies: vec![unittestpkg],
		main_lib: Arc::new(mainlib),
		test_lib: None,
		unittest: None,
	});

	let err = generator::validate(&package).expect_err("A production library linking the framework should not validate");
	assert!(err.to_string().contains("test framework"), "{}", err);
}

#[test]
fn validate_requires_a_framework_link_in_test_executables() {
	let mainlib = Arc::new(Library::cpp_lib("plain", "example.com/plain"));
	let mut unittest = TestExecutable::cpp_test("plain_unittest", "example.com/plain");
	unittest.link(&mainlib);
	let package = Arc::new(Package {
		info: PackageInfo { name: "plain".to_owned(), path: "example.com/plain".to_owned() },
		dependencies: Vec::new(),
		main_lib: mainlib,
		test_lib: None,
		unittest: Some(Arc::new(unittest)),
	});

	let err = generator::validate(&package).expect_err("A test executable without a framework link should not validate");
	assert!(err.to_string().contains("does not link a test framework"), "{}", err);
}

#[test]
fn registry_rejects_unknown_packages() {
	let mut registry = Registry::new(Config::default());
	let err = registry.get("nonesuch").expect_err("An unregistered package should not resolve");
	assert!(err.to_string().contains("nonesuch"), "{}", err);
}

fn loop_a(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	registry.get("loop_b")
}
fn loop_b(registry: &mut Registry) -> Result<Arc<Package>, anyhow::Error> {
	registry.get("loop_a")
}

#[test]
fn registry_rejects_builder_cycles() {
	let mut registry = Registry::new(Config::default());
	registry.register("loop_a", loop_a);
	registry.register("loop_b", loop_b);
	let err = registry.get("loop_a").expect_err("A builder cycle should not resolve");
	assert!(err.to_string().contains("loop_a -> loop_b -> loop_a"), "{}", err);
}

#[test]
fn config_overrides_the_namespace() {
	let config = read_config(Path::new("tests/test_data/cdenv.toml")).expect("Could not read config");
	assert_eq!(config.namespace, "example.org/acme");

	let package = compose(config).expect("Could not compose csocket");
	assert_eq!(package.info.path, "example.org/acme/csocket");
	assert_eq!(package.main_lib.path, "example.org/acme/csocket");
	let cbase = package.dependency("cbase").expect("csocket should depend on cbase");
	assert_eq!(cbase.info.path, "example.org/acme/cbase");
}

#[test]
fn config_rejects_unknown_keys() {
	let err = read_config(Path::new("tests/test_data/unknown_key.toml"))
		.expect_err("A config with unknown keys should not parse");
	assert!(err.to_string().contains("unknown_key.toml"), "{}", err);
}
