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


//! The standard Ethereum ABI coders and the rules that register them.
//!
//! [`register_defaults`] installs one rule per coder family into an [`AbiRegistry`]. The rule
//! predicates do not overlap, so every valid type string is matched by exactly one of them.

#![forbid(unsafe_code)]

mod address;
mod array;
mod boolean;
mod bytes;
mod numeric;
mod tuple;
mod util;

pub use self::address::AddressCoder;
pub use self::array::{ArrayDecoder, ArrayEncoder, MAX_EMPTY_ITEMS};
pub use self::boolean::BoolCoder;
pub use self::bytes::{BytesCoder, FixedBytesCoder, StringCoder};
pub use self::numeric::{SignedCoder, UnsignedCoder};
pub use self::tuple::{TupleDecoder, TupleEncoder};

use abi_registry::{AbiRegistry, Coder, Error, Predicate};
use std::sync::Arc;

/// Register the standard coders in `registry`, labelled by the family they cover.
///
/// Fails if any of the predicates or labels is already taken. Rules registered before the
/// failing one stay in place.
pub fn register_defaults(registry: &mut AbiRegistry) -> Result<(), Error> {
	registry.register(
		Predicate::base("uint"),
		Coder::Factory(numeric::unsigned_encoder),
		Coder::Factory(numeric::unsigned_decoder),
		Some("uint"),
	)?;
	registry.register(
		Predicate::base("int"),
		Coder::Factory(numeric::signed_encoder),
		Coder::Factory(numeric::signed_decoder),
		Some("int"),
	)?;
	registry.register(
		Predicate::base("address"),
		Coder::Direct(Arc::new(AddressCoder)),
		Coder::Direct(Arc::new(AddressCoder)),
		Some("address"),
	)?;
	registry.register(
		Predicate::base("bool"),
		Coder::Direct(Arc::new(BoolCoder)),
		Coder::Direct(Arc::new(BoolCoder)),
		Some("bool"),
	)?;
	registry.register(
		Predicate::base("ufixed"),
		Coder::Factory(numeric::unsigned_encoder),
		Coder::Factory(numeric::unsigned_decoder),
		Some("ufixed"),
	)?;
	registry.register(
		Predicate::base("fixed"),
		Coder::Factory(numeric::signed_encoder),
		Coder::Factory(numeric::signed_decoder),
		Some("fixed"),
	)?;
	registry.register(
		Predicate::base_with_sub("bytes", true),
		Coder::Factory(bytes::fixed_bytes_encoder),
		Coder::Factory(bytes::fixed_bytes_decoder),
		Some("bytes<M>"),
	)?;
	registry.register(
		Predicate::base_with_sub("bytes", false),
		Coder::Direct(Arc::new(BytesCoder)),
		Coder::Direct(Arc::new(BytesCoder)),
		Some("bytes"),
	)?;
	registry.register(
		Predicate::base("function"),
		Coder::Factory(bytes::fixed_bytes_encoder),
		Coder::Factory(bytes::fixed_bytes_decoder),
		Some("function"),
	)?;
	registry.register(
		Predicate::base("string"),
		Coder::Direct(Arc::new(StringCoder)),
		Coder::Direct(Arc::new(StringCoder)),
		Some("string"),
	)?;
	registry.register(
		Predicate::HasArrlist,
		Coder::Factory(array::encoder),
		Coder::Factory(array::decoder),
		Some("has_arrlist"),
	)?;
	registry.register(
		Predicate::IsTupleType,
		Coder::Factory(tuple::encoder),
		Coder::Factory(tuple::decoder),
		Some("is_tuple_type"),
	)?;
	log::debug!("Registered {} default encoders and decoders", registry.encoders().len());
	Ok(())
}

/// A new registry holding the standard coders.
pub fn default_registry() -> AbiRegistry {
	let mut registry = AbiRegistry::new();
	register_defaults(&mut registry).expect("default rules are registered into an empty registry; qed");
	registry
}
