use core::{cmp, hash};
use std::sync::Arc;

use crate::{
	library::Library, //
	target::{LinkTarget, Target},
};

/// Shared handle to a library target. Equality and hashing go by pointer
/// identity: two handles are equal only when they refer to the same
/// descriptor object, not merely to targets with the same name.
#[derive(Clone, Debug)]
pub struct LinkRef(pub Arc<Library>);

impl cmp::PartialEq for LinkRef {
	fn eq(&self, other: &LinkRef) -> bool {
		core::ptr::eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
	}
}
impl cmp::Eq for LinkRef {}
impl hash::Hash for LinkRef {
	fn hash<H>(&self, hasher: &mut H)
	where
		H: std::hash::Hasher,
	{
		Arc::as_ptr(&self.0).hash(hasher)
	}
}

impl Target for LinkRef {
	fn name(&self) -> &str {
		self.0.name()
	}
	fn output_name(&self) -> &str {
		self.0.output_name()
	}
	fn path(&self) -> &str {
		self.0.path()
	}
}

impl LinkTarget for LinkRef {
	fn links(&self) -> &[LinkRef] {
		self.0.links()
	}
	fn links_recursive(&self) -> Vec<LinkRef> {
		self.0.links_recursive()
	}
}
