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

use thiserror::Error;

/// The type string is not valid ABI syntax.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("type string is empty")]
	Empty,
	#[error("'{0}' is not a valid type string")]
	Invalid(String),
	#[error("unknown base type '{0}'")]
	UnknownBase(String),
	#[error("unbalanced parentheses in '{0}'")]
	Unbalanced(String),
	#[error("empty tuple component in '{0}'")]
	EmptyComponent(String),
	#[error("'{0}' is not a valid size")]
	Number(String),
	#[error("tuples in '{type_str}' are nested deeper than {max} levels")]
	TooDeep { type_str: String, max: usize },
}

/// The type string parses, but names a type no coder can be built for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
	#[error("'{base}' requires a size")]
	MissingSub { base: String },
	#[error("'{base}' does not take a size")]
	UnexpectedSub { base: String },
	#[error("integer size must be a multiple of 8 in the range 8..=256, got {0}")]
	IntegerSize(usize),
	#[error("fixed point type must be written as <M>x<N>")]
	FixedSubExpected,
	#[error("fixed point exponent must be in the range 1..=80, got {0}")]
	FixedExponent(usize),
	#[error("bytes size must be in the range 1..=32, got {0}")]
	BytesSize(usize),
	#[error("'{base}' takes a single size, not <M>x<N>")]
	SizeExpected { base: String },
}
