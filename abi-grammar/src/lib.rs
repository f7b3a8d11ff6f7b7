// Copyright 2021 Parity Technologies (UK) Ltd.
// This file is part of eth-abi.
//
// eth-abi is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// eth-abi is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with eth-abi.  If not, see <http://www.gnu.org/licenses/>.

//! Parses Ethereum ABI type strings such as `uint256`, `bytes32[]` or `(address,(bool,string))[2]`
//! into a structured [`AbiType`].
//!
//! The grammar is purely syntactic: `uint7` parses fine and is only rejected by
//! [`AbiType::validate`], which holds the rules a coder needs before it can be built.

#![forbid(unsafe_code)]

mod error;
mod regex;
mod validate;

pub use self::error::{ParseError, ValidationError};
pub use self::regex::{normalize, parse, MAX_DEPTH};

use std::fmt;

/// Every base name the grammar knows about. Anything else fails to parse.
pub const BASE_TYPES: &[&str] = &["uint", "int", "address", "bool", "ufixed", "fixed", "bytes", "function", "string"];

/// A single array dimension: `Some(k)` for `[k]`, `None` for `[]`.
pub type Dimension = Option<usize>;

/// A parsed type string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbiType {
	/// An elementary type, optionally with array dimensions, ie `uint256` or `bytes[][3]`.
	Basic(BasicType),
	/// A tuple of component types, optionally with array dimensions, ie `(bool,string)[]`.
	Tuple(TupleType),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicType {
	pub base: String,
	pub sub: Option<Sub>,
	/// Empty if this is not an array.
	pub arrlist: Vec<Dimension>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleType {
	pub components: Vec<AbiType>,
	/// Empty if this is not an array.
	pub arrlist: Vec<Dimension>,
}

/// The numeric qualifier following a base name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Sub {
	/// `uint256`, `bytes32`
	#[display(fmt = "{}", _0)]
	Size(usize),
	/// `ufixed128x18`
	#[display(fmt = "{}x{}", _0, _1)]
	Fixed(usize, usize),
}

impl AbiType {
	/// Array dimensions, outermost last.
	pub fn arrlist(&self) -> &[Dimension] {
		match self {
			AbiType::Basic(ty) => &ty.arrlist,
			AbiType::Tuple(ty) => &ty.arrlist,
		}
	}

	fn arrlist_mut(&mut self) -> &mut Vec<Dimension> {
		match self {
			AbiType::Basic(ty) => &mut ty.arrlist,
			AbiType::Tuple(ty) => &mut ty.arrlist,
		}
	}

	pub fn is_array(&self) -> bool {
		!self.arrlist().is_empty()
	}

	pub fn is_tuple(&self) -> bool {
		matches!(self, AbiType::Tuple(_))
	}

	/// The type of a single element if this is an array, ie `uint256[2]` for `uint256[2][]`.
	/// Returns `None` if this is not an array.
	pub fn item_type(&self) -> Option<AbiType> {
		let mut item = self.clone();
		item.arrlist_mut().pop()?;
		Some(item)
	}

	/// The outermost array dimension, if any.
	pub fn last_dimension(&self) -> Option<Dimension> {
		self.arrlist().last().copied()
	}

	/// Canonical string form of this type.
	pub fn to_type_str(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for AbiType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AbiType::Basic(ty) => {
				write!(f, "{}", ty.base)?;
				if let Some(sub) = ty.sub {
					write!(f, "{}", sub)?;
				}
				write_arrlist(f, &ty.arrlist)
			}
			AbiType::Tuple(ty) => {
				write!(f, "(")?;
				for (i, component) in ty.components.iter().enumerate() {
					if i > 0 {
						write!(f, ",")?;
					}
					write!(f, "{}", component)?;
				}
				write!(f, ")")?;
				write_arrlist(f, &ty.arrlist)
			}
		}
	}
}

fn write_arrlist(f: &mut fmt::Formatter<'_>, arrlist: &[Dimension]) -> fmt::Result {
	for dim in arrlist {
		match dim {
			Some(len) => write!(f, "[{}]", len)?,
			None => write!(f, "[]")?,
		}
	}
	Ok(())
}
