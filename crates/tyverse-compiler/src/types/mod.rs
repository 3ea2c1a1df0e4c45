//! Type algebra: the schema values a domain is made of.
//!
//! - `kind` - type kinds and the three builtins
//! - `ty` - `Type`, products, sums, fields, and unresolved references

mod kind;
mod ty;


pub use kind::{BuiltinType, TypeKind};
pub use ty::{Encoding, Field, ProductType, SumType, Type, TypeRef};
