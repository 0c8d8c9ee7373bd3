//! Shared fixture: a style tree on disk plus a resolver over it.

pub mod style_tree;
