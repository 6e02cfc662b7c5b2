use std::sync::Arc;

use crate::{
	package::{closure, Package},
	target::{LinkTarget, Target},
};

/// Graphviz rendering of the target link graph, one cluster per package.
pub(super) fn render(root: &Arc<Package>) -> String {
	let mut out = String::new();
	out.push_str(&format!("digraph \"{}\" {{\n", root.info.name));
	out.push_str("\tnode [shape=box];\n");

	let all = closure(root);

	for package in &all {
		out.push_str(&format!("\tsubgraph \"cluster_{}\" {{\n", package.info.name));
		out.push_str(&format!("\t\tlabel = \"{}\";\n", package.info.name));
		out.push_str(&format!("\t\t\"{}\";\n", package.main_lib.name));
		if let Some(test_lib) = &package.test_lib {
			out.push_str(&format!("\t\t\"{}\";\n", test_lib.name));
		}
		if let Some(unittest) = &package.unittest {
			out.push_str(&format!("\t\t\"{}\" [shape=ellipse];\n", unittest.name));
		}
		out.push_str("\t}\n");
	}

	for package in &all {
		let mut libs = vec![&package.main_lib];
		if let Some(test_lib) = &package.test_lib {
			libs.push(test_lib);
		}
		for lib in libs {
			for link in lib.links() {
				out.push_str(&format!("\t\"{}\" -> \"{}\";\n", lib.name, link.name()));
			}
		}
		if let Some(unittest) = &package.unittest {
			for link in unittest.links() {
				out.push_str(&format!("\t\"{}\" -> \"{}\";\n", unittest.name, link.name()));
			}
		}
	}

	out.push_str("}\n");
	out
}
