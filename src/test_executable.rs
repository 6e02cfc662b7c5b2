use std::sync::Arc;

use crate::{
	library::Library, //
	link::LinkRef,
	target::{LinkTarget, Target},
};

#[derive(Debug)]
pub struct TestExecutable {
	pub name: String,
	pub path: String,
	pub links: Vec<LinkRef>,
	pub source_globs: Vec<String>,
	pub include_dirs: Vec<String>,
	pub output_name: Option<String>,
}

impl TestExecutable {
	/// Unit-test executable. Compiles the conventional test entry point;
	/// everything else comes in through its links.
	pub fn cpp_test(name: &str, path: &str) -> TestExecutable {
		TestExecutable {
			name: name.to_owned(),
			path: path.to_owned(),
			links: Vec::new(),
			source_globs: vec!["source/test/cpp/test_main.cpp".to_owned()],
			include_dirs: vec![
				"source/main/include".to_owned(), //
				"source/test/include".to_owned(),
			],
			output_name: None,
		}
	}

	pub fn link(&mut self, lib: &Arc<Library>) {
		self.links.push(LinkRef(lib.clone()));
	}
}

impl Target for TestExecutable {
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

impl LinkTarget for TestExecutable {
	fn links(&self) -> &[LinkRef] {
		&self.links
	}
	fn links_recursive(&self) -> Vec<LinkRef> {
		let mut links = Vec::new();
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
