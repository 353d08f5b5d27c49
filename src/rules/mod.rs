//! Built-in rule tables.
//!
//! Each submodule exposes `rules()`, returning the category table for one
//! language. The tables are plain data: adding a language means adding a
//! module here and registering it in `Registry::builtin`, never touching the
//! engine.

pub(crate) mod c;
pub(crate) mod go;
pub(crate) mod lua;
