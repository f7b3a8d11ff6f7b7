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

//! Matchers over type strings, used as keys of a [`PredicateMapping`](crate::PredicateMapping).
//!
//! Predicates are plain values, so two predicates built from the same parameters compare equal.
//! That is what lets a mapping reject a second registration of the same rule and lets a
//! registration be removed by handing an equal predicate back.

use abi_grammar::{parse, AbiType};
use std::{
	fmt,
	hash::{Hash, Hasher},
};

/// Whether [`Predicate::BaseEquals`] cares about the sub component of a type, ie the `32` in `bytes32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubRequirement {
	Any,
	Present,
	Absent,
}

impl SubRequirement {
	fn accepts(self, has_sub: bool) -> bool {
		match self {
			SubRequirement::Any => true,
			SubRequirement::Present => has_sub,
			SubRequirement::Absent => !has_sub,
		}
	}
}

/// A named matcher function. Two custom predicates are equal iff their names are equal.
#[derive(Clone, Copy)]
pub struct CustomPredicate {
	name: &'static str,
	matcher: fn(&str) -> bool,
}

impl CustomPredicate {
	pub const fn new(name: &'static str, matcher: fn(&str) -> bool) -> Self {
		Self { name, matcher }
	}

	pub fn name(&self) -> &'static str {
		self.name
	}
}

impl PartialEq for CustomPredicate {
	fn eq(&self, other: &Self) -> bool {
		self.name == other.name
	}
}

impl Eq for CustomPredicate {}

impl Hash for CustomPredicate {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.name.hash(state)
	}
}

impl fmt::Debug for CustomPredicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("CustomPredicate").field(&self.name).finish()
	}
}

/// A boolean classifier over type strings.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
	/// Matches a type string equal to the given one.
	Equals(String),
	/// Matches a non-array basic type with the given base name,
	/// with the sub component present, absent, or either.
	/// Strings that do not parse never match.
	BaseEquals { base: String, with_sub: SubRequirement },
	/// Matches a basic type with at least one array dimension.
	HasArrlist,
	/// Matches any tuple type, including arrays of tuples.
	IsTupleType,
	Custom(CustomPredicate),
}

impl Predicate {
	pub fn equals(value: impl Into<String>) -> Self {
		Predicate::Equals(value.into())
	}

	/// Matches `base` whether or not a sub component is present.
	pub fn base(base: impl Into<String>) -> Self {
		Predicate::BaseEquals { base: base.into(), with_sub: SubRequirement::Any }
	}

	pub fn base_with_sub(base: impl Into<String>, with_sub: bool) -> Self {
		let with_sub = if with_sub { SubRequirement::Present } else { SubRequirement::Absent };
		Predicate::BaseEquals { base: base.into(), with_sub }
	}

	pub const fn custom(name: &'static str, matcher: fn(&str) -> bool) -> Self {
		Predicate::Custom(CustomPredicate::new(name, matcher))
	}

	/// Evaluate the predicate against `type_str`.
	pub fn matches(&self, type_str: &str) -> bool {
		match self {
			Predicate::Equals(value) => value == type_str,
			Predicate::BaseEquals { base, with_sub } => match parse(type_str) {
				Ok(AbiType::Basic(ty)) if ty.arrlist.is_empty() => {
					with_sub.accepts(ty.sub.is_some()) && ty.base == *base
				}
				// tuples, arrays and anything that does not parse
				_ => false,
			},
			Predicate::HasArrlist => matches!(parse(type_str), Ok(AbiType::Basic(ty)) if !ty.arrlist.is_empty()),
			Predicate::IsTupleType => matches!(parse(type_str), Ok(AbiType::Tuple(_))),
			Predicate::Custom(custom) => (custom.matcher)(type_str),
		}
	}

	fn variant_name(&self) -> &'static str {
		match self {
			Predicate::Equals(_) => "Equals",
			Predicate::BaseEquals { .. } => "BaseEquals",
			Predicate::HasArrlist => "HasArrlist",
			Predicate::IsTupleType => "IsTupleType",
			Predicate::Custom(_) => "Custom",
		}
	}
}

impl fmt::Display for Predicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Predicate::Equals(value) => write!(f, "(== {:?})", value),
			Predicate::BaseEquals { base, with_sub } => {
				write!(f, "(base == {:?}", base)?;
				match with_sub {
					SubRequirement::Any => write!(f, ")"),
					SubRequirement::Present => write!(f, " and sub is present)"),
					SubRequirement::Absent => write!(f, " and sub is absent)"),
				}
			}
			Predicate::HasArrlist => write!(f, "has_arrlist"),
			Predicate::IsTupleType => write!(f, "is_tuple_type"),
			Predicate::Custom(custom) => write!(f, "{}", custom.name),
		}
	}
}

impl fmt::Debug for Predicate {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "<{} {}>", self.variant_name(), self)
	}
}

/// What a registration is keyed on, or what a removal refers to.
///
/// For registration, a type string is shorthand for [`Predicate::Equals`] labelled with the same
/// string. For removal, a type string is a label and a predicate is removed by equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
	TypeStr(String),
	Predicate(Predicate),
}

impl From<&str> for Lookup {
	fn from(s: &str) -> Self {
		Lookup::TypeStr(s.to_string())
	}
}

impl From<String> for Lookup {
	fn from(s: String) -> Self {
		Lookup::TypeStr(s)
	}
}

impl From<Predicate> for Lookup {
	fn from(predicate: Predicate) -> Self {
		Lookup::Predicate(predicate)
	}
}

impl fmt::Display for Lookup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Lookup::TypeStr(s) => write!(f, "{:?}", s),
			Lookup::Predicate(predicate) => write!(f, "{}", predicate),
		}
	}
}
