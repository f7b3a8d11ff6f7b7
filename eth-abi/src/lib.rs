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


//! Encode and decode Ethereum ABI values.
//!
//! Every entry point resolves its coders through an [`AbiRegistry`]. The `*_with` functions take
//! the registry to use; the others use the process wide [`default_registry`].
//!
//! ```
//! use eth_abi::{decode, encode, Value};
//!
//! let values = vec![Value::uint(42u8), Value::String("hello".into())];
//! let encoded = encode(&["uint256", "string"], &values).unwrap();
//! assert_eq!(decode(&["uint256", "string"], &encoded).unwrap(), values);
//! ```

#![forbid(unsafe_code)]

mod error;

pub use self::error::Error;
pub use abi_coders::register_defaults;
pub use abi_registry::{
	abi_grammar, AbiRegistry, Coder, Decode, DecodeError, DecodeStream, DecoderRef, Encode, EncodeError, EncoderRef,
	Lookup, Predicate, Value, I256, U256,
};

use abi_coders::{TupleDecoder, TupleEncoder};
use parking_lot::RwLock;
use std::sync::OnceLock;

static DEFAULT_REGISTRY: OnceLock<RwLock<AbiRegistry>> = OnceLock::new();

/// The registry used by [`encode`], [`decode`] and the other functions without a registry
/// argument. It is populated with the standard coders on first use.
///
/// Take the write lock to register or remove coders. Resolutions running on other threads wait
/// until the change and the cache invalidation are both done.
pub fn default_registry() -> &'static RwLock<AbiRegistry> {
	DEFAULT_REGISTRY.get_or_init(|| {
		log::debug!("Initializing default ABI registry");
		RwLock::new(abi_coders::default_registry())
	})
}

/// Encode `values` as a tuple of `types`.
pub fn encode_with(registry: &AbiRegistry, types: &[&str], values: &[Value]) -> Result<Vec<u8>, Error> {
	if types.len() != values.len() {
		return Err(Error::ArgumentCount { types: types.len(), values: values.len() });
	}
	let encoders = types.iter().map(|ty| registry.get_encoder(ty)).collect::<Result<_, _>>()?;
	Ok(TupleEncoder::new(encoders).encode_values(values)?)
}

/// Decode a tuple of `types` from `data`. Bytes after the encoded tuple are ignored.
pub fn decode_with(registry: &AbiRegistry, types: &[&str], data: &[u8]) -> Result<Vec<Value>, Error> {
	let decoders = types.iter().map(|ty| registry.get_decoder(ty)).collect::<Result<_, _>>()?;
	Ok(TupleDecoder::new(decoders).decode_values(&mut DecodeStream::new(data))?)
}

/// Encode a single value of type `type_str`, without an enclosing tuple.
pub fn encode_single_with(registry: &AbiRegistry, type_str: &str, value: &Value) -> Result<Vec<u8>, Error> {
	Ok(registry.get_encoder(type_str)?.encode(value)?)
}

/// Decode a single value of type `type_str`, without an enclosing tuple.
pub fn decode_single_with(registry: &AbiRegistry, type_str: &str, data: &[u8]) -> Result<Value, Error> {
	Ok(registry.get_decoder(type_str)?.decode(&mut DecodeStream::new(data))?)
}

/// Whether `value` can be encoded as `type_str`.
///
/// Returns an error if no encoder can be resolved for `type_str`.
pub fn is_encodable_with(registry: &AbiRegistry, type_str: &str, value: &Value) -> Result<bool, Error> {
	let encoder = registry.get_encoder(type_str)?;
	match encoder.encode(value) {
		Ok(_) => Ok(true),
		Err(e) => {
			log::trace!("'{}' cannot encode {:?}: {}", type_str, value, e);
			Ok(false)
		}
	}
}

pub fn encode(types: &[&str], values: &[Value]) -> Result<Vec<u8>, Error> {
	encode_with(&default_registry().read(), types, values)
}

pub fn decode(types: &[&str], data: &[u8]) -> Result<Vec<Value>, Error> {
	decode_with(&default_registry().read(), types, data)
}

pub fn encode_single(type_str: &str, value: &Value) -> Result<Vec<u8>, Error> {
	encode_single_with(&default_registry().read(), type_str, value)
}

pub fn decode_single(type_str: &str, data: &[u8]) -> Result<Value, Error> {
	decode_single_with(&default_registry().read(), type_str, data)
}

pub fn is_encodable(type_str: &str, value: &Value) -> Result<bool, Error> {
	is_encodable_with(&default_registry().read(), type_str, value)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registry() -> AbiRegistry {
		let _ = pretty_env_logger::try_init();
		abi_coders::default_registry()
	}

	#[test]
	fn should_encode_arguments_as_tuple() {
		let registry = registry();
		let encoded = encode_with(&registry, &["uint256", "bool"], &[Value::uint(1u8), Value::Bool(true)]).unwrap();
		assert_eq!(
			hex::encode(&encoded),
			"0000000000000000000000000000000000000000000000000000000000000001\
			 0000000000000000000000000000000000000000000000000000000000000001"
		);
		assert_eq!(
			decode_with(&registry, &["uint256", "bool"], &encoded).unwrap(),
			vec![Value::uint(1u8), Value::Bool(true)]
		);
	}

	#[test]
	fn should_check_argument_count() {
		let registry = registry();
		assert_eq!(
			encode_with(&registry, &["uint256", "bool"], &[Value::uint(1u8)]),
			Err(Error::ArgumentCount { types: 2, values: 1 })
		);
	}

	#[test]
	fn should_encode_single_values_without_offsets() {
		let registry = registry();
		let encoded = encode_single_with(&registry, "string", &Value::String("hi".into())).unwrap();
		assert_eq!(
			hex::encode(&encoded),
			"0000000000000000000000000000000000000000000000000000000000000002\
			 6869000000000000000000000000000000000000000000000000000000000000"
		);
		assert_eq!(decode_single_with(&registry, "string", &encoded), Ok(Value::String("hi".into())));
	}

	#[test]
	fn should_ignore_trailing_bytes() {
		let registry = registry();
		let mut encoded = encode_with(&registry, &["address"], &[Value::Address([7; 20])]).unwrap();
		encoded.extend([0xff; 5]);
		assert_eq!(decode_with(&registry, &["address"], &encoded), Ok(vec![Value::Address([7; 20])]));
	}

	#[test]
	fn should_surface_errors_of_each_layer() {
		let registry = registry();
		assert!(matches!(
			encode_single_with(&registry, "notatype", &Value::Bool(true)),
			Err(Error::Registry(abi_registry::Error::MalformedTypeString { .. }))
		));
		assert!(matches!(encode_single_with(&registry, "bool", &Value::uint(1u8)), Err(Error::Encode(_))));
		assert!(matches!(decode_single_with(&registry, "bool", &[0u8; 31]), Err(Error::Decode(_))));
	}

	#[test]
	fn should_check_encodability() {
		let registry = registry();
		assert_eq!(is_encodable_with(&registry, "uint8", &Value::uint(255u32)), Ok(true));
		assert_eq!(is_encodable_with(&registry, "uint8", &Value::uint(256u32)), Ok(false));
		assert_eq!(is_encodable_with(&registry, "bytes2", &Value::Bytes(vec![1, 2, 3])), Ok(false));
		assert!(is_encodable_with(&registry, "uint999", &Value::uint(1u8)).is_err());
	}

	#[test]
	fn should_use_default_registry() {
		let encoded = encode_single("int8", &Value::int(-2)).unwrap();
		assert_eq!(decode_single("int8", &encoded), Ok(Value::int(-2)));
		assert_eq!(is_encodable("bool", &Value::Bool(false)), Ok(true));
		assert!(std::ptr::eq(default_registry(), default_registry()));
	}
}
