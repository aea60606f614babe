#[path = "helpers/mod.rs"]
mod helpers;

#[path = "parser/mod.rs"]
mod parser;

#[path = "hir/mod.rs"]
mod hir;

#[path = "rewrite/mod.rs"]
mod rewrite;
