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

//! Resolves an ABI type string like `uint256` or `(address,bytes)[]` to the encoder or decoder
//! responsible for it.
//!
//! Coders are registered in an [`AbiRegistry`] under a [`Predicate`] over type strings. Asking the
//! registry for a coder evaluates every registered predicate, and exactly one of them has to match.
//! Coders that depend on the shape of the type (arrays, tuples) are registered as factories and are
//! built on demand, asking the same registry for the coders of their element types. Resolved
//! coders are cached until the next registration or removal.
//!
//! See [`AbiRegistry`] for the registration and lookup API.

#![forbid(unsafe_code)]

mod coder;
mod error;
mod mapping;
mod predicate;
mod registry;
mod value;

pub use self::coder::{
	Coder, Decode, DecodeError, DecodeStream, Encode, EncodeError, Factory, FnDecoder, FnEncoder, WORD,
};
pub use self::error::Error;
pub use self::mapping::PredicateMapping;
pub use self::predicate::{CustomPredicate, Lookup, Predicate, SubRequirement};
pub use self::registry::{AbiRegistry, DecoderRef, EncoderRef};
pub use self::value::{Value, I256};

/// A re-export of the grammar crate, which predicates use to classify type strings.
pub use abi_grammar;
/// A re-export of [`primitive_types::U256`], the representation of unsigned integer values.
pub use primitive_types::U256;
