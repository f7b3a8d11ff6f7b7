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

use crate::Predicate;
use abi_grammar::ParseError;
use thiserror::Error;

/// Errors raised while registering, removing or resolving coders.
///
/// `DuplicatePredicate`, `DuplicateLabel`, `PredicateNotFound`, `LabelNotFound` and the invalid
/// key errors point at a misconfigured registry. `NoMatchingCoder`, `MalformedTypeString`,
/// `AmbiguousMatch` and `InvalidCoderType` depend on the type string being resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("Matcher {predicate:?} already exists in {registry}")]
	DuplicatePredicate { predicate: Predicate, registry: &'static str },
	#[error("Matcher {predicate:?} with label '{label}' already exists in {registry}")]
	DuplicateLabel { predicate: Predicate, label: String, registry: &'static str },
	#[error("Matcher {predicate:?} not found in {registry}")]
	PredicateNotFound { predicate: Predicate, registry: &'static str },
	#[error("Label '{label}' not found in {registry}")]
	LabelNotFound { label: String, registry: &'static str },
	#[error("Key to be removed must be a predicate or a non-empty label")]
	InvalidRemovalKey,
	#[error("Lookup must be a predicate or a non-empty type string, and labels must not be empty")]
	InvalidLookupType,
	#[error("No matching entries for '{type_str}' in {registry}")]
	NoMatchingCoder { type_str: String, registry: &'static str },
	#[error("Malformed type string '{type_str}': {source}")]
	MalformedTypeString {
		type_str: String,
		#[source]
		source: ParseError,
	},
	#[error("Multiple matching entries for '{type_str}' in {registry}: {}", describe(.predicates))]
	AmbiguousMatch { type_str: String, registry: &'static str, predicates: Vec<Predicate> },
	#[error("Cannot build a coder for '{type_str}': {reason}")]
	InvalidCoderType { type_str: String, reason: String },
}

impl Error {
	/// The coder matched for `type_str` refused to be built from it.
	pub fn invalid_coder_type(type_str: &str, reason: impl ToString) -> Self {
		Error::InvalidCoderType { type_str: type_str.to_string(), reason: reason.to_string() }
	}

	pub fn malformed(type_str: &str, source: ParseError) -> Self {
		Error::MalformedTypeString { type_str: type_str.to_string(), source }
	}
}

fn describe(predicates: &[Predicate]) -> String {
	predicates.iter().map(|p| format!("{:?}", p)).collect::<Vec<_>>().join(", ")
}
