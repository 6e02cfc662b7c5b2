use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::{
	err_msg, //
	library::Library,
	package::{closure, Package},
	target::{LinkTarget, Target},
	test_executable::TestExecutable,
};

#[derive(Serialize)]
struct ManifestDoc {
	root: String,
	package: Vec<ManifestPackage>,
}

#[derive(Serialize)]
struct ManifestPackage {
	name: String,
	path: String,
	target: Vec<ManifestTarget>,
}

#[derive(Serialize)]
struct ManifestTarget {
	name: String,
	kind: &'static str,
	guid: String,
	sources: Vec<String>,
	include_dirs: Vec<String>,
	links: Vec<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	link_order: Option<Vec<String>>,
}

// The external emitter needs a GUID per project file. Derived from the
// target's namespace path so repeated runs emit identical descriptors.
fn target_guid(path: &str, name: &str) -> String {
	Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{}/{}", path, name).as_bytes())
		.to_string()
		.to_ascii_uppercase()
}

fn lib_target(lib: &Arc<Library>) -> ManifestTarget {
	ManifestTarget {
		name: lib.name.clone(),
		kind: lib.kind.as_str(),
		guid: target_guid(&lib.path, &lib.name),
		sources: lib.source_globs.clone(),
		include_dirs: lib.include_dirs.clone(),
		links: lib.links.iter().map(|x| x.name().to_owned()).collect(),
		link_order: None,
	}
}

fn test_target(exe: &Arc<TestExecutable>) -> ManifestTarget {
	ManifestTarget {
		name: exe.name.clone(),
		kind: "unittest",
		guid: target_guid(&exe.path, &exe.name),
		sources: exe.source_globs.clone(),
		include_dirs: exe.include_dirs.clone(),
		links: exe.links.iter().map(|x| x.name().to_owned()).collect(),
		// The flattened closure, in link order, for the emitter's linker line
		link_order: Some(exe.links_recursive().iter().map(|x| x.name().to_owned()).collect()),
	}
}

pub(super) fn render(root: &Arc<Package>) -> Result<String, anyhow::Error> {
	let doc = ManifestDoc {
		root: root.info.name.clone(),
		package: closure(root)
			.iter()
			.map(|package| {
				let mut targets = vec![lib_target(&package.main_lib)];
				if let Some(test_lib) = &package.test_lib {
					targets.push(lib_target(test_lib));
				}
				if let Some(unittest) = &package.unittest {
					targets.push(test_target(unittest));
				}
				ManifestPackage {
					name: package.info.name.clone(),
					path: package.info.path.clone(),
					target: targets,
				}
			})
			.collect(),
	};
	match toml::to_string_pretty(&doc) {
		Ok(x) => Ok(x),
		Err(e) => err_msg(format!("Error serializing descriptor for \"{}\": {}", root.info.name, e)),
	}
}
