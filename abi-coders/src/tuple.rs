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


//! Tuple coders and the head/tail layout shared with arrays.
//!
//! A sequence of values is laid out as a head followed by a tail. Static values are stored in the
//! head. Dynamic values are stored in the tail, and the head holds their offset counted from the
//! start of the head.

use crate::{
	array,
	util::{encode_word, parse_type_str},
};
use abi_registry::{
	abi_grammar::AbiType, AbiRegistry, Decode, DecodeError, DecodeStream, DecoderRef, Encode, EncodeError, EncoderRef,
	Error, Value, U256, WORD,
};
use std::sync::Arc;

/// Lay out `items` as one head/tail sequence.
pub(crate) fn encode_components<'a>(
	items: impl Iterator<Item = (&'a EncoderRef, &'a Value)>,
) -> Result<Vec<u8>, EncodeError> {
	let encoded = items
		.map(|(coder, value)| Ok((coder.is_dynamic(), coder.encode(value)?)))
		.collect::<Result<Vec<_>, EncodeError>>()?;

	let head_len: usize = encoded.iter().map(|(dynamic, bytes)| if *dynamic { WORD } else { bytes.len() }).sum();
	let mut head = Vec::with_capacity(head_len);
	let mut tail = Vec::new();
	for (dynamic, bytes) in encoded {
		if dynamic {
			head.extend(encode_word(U256::from(head_len + tail.len())));
			tail.extend(bytes);
		} else {
			head.extend(bytes);
		}
	}
	head.extend(tail);
	Ok(head)
}

/// Read one value per coder from a head/tail sequence starting at the current position.
/// The stream is left after the head.
pub(crate) fn decode_components<'a>(
	coders: impl Iterator<Item = &'a DecoderRef>,
	stream: &mut DecodeStream<'_>,
) -> Result<Vec<Value>, DecodeError> {
	let frame = stream.frame();
	coders
		.map(|coder| {
			if coder.is_dynamic() {
				let offset = stream.read_offset()?;
				coder.decode(&mut frame.at_offset(offset)?)
			} else {
				coder.decode(stream)
			}
		})
		.collect()
}

#[derive(Debug, Clone)]
pub struct TupleEncoder {
	components: Vec<EncoderRef>,
}

impl TupleEncoder {
	pub fn new(components: Vec<EncoderRef>) -> Self {
		Self { components }
	}

	/// Encode one value per component.
	pub fn encode_values(&self, values: &[Value]) -> Result<Vec<u8>, EncodeError> {
		if values.len() != self.components.len() {
			return Err(EncodeError::WrongLength { expected: self.components.len(), got: values.len() });
		}
		encode_components(self.components.iter().zip(values))
	}
}

impl Encode for TupleEncoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		match value {
			Value::Tuple(values) => self.encode_values(values),
			other => Err(EncodeError::TypeMismatch { expected: "tuple", got: other.kind() }),
		}
	}

	fn is_dynamic(&self) -> bool {
		self.components.iter().any(|c| c.is_dynamic())
	}
}

#[derive(Debug, Clone)]
pub struct TupleDecoder {
	components: Vec<DecoderRef>,
}

impl TupleDecoder {
	pub fn new(components: Vec<DecoderRef>) -> Self {
		Self { components }
	}

	/// Decode one value per component.
	pub fn decode_values(&self, stream: &mut DecodeStream<'_>) -> Result<Vec<Value>, DecodeError> {
		decode_components(self.components.iter(), stream)
	}
}

impl Decode for TupleDecoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		self.decode_values(stream).map(Value::Tuple)
	}

	fn is_dynamic(&self) -> bool {
		self.components.iter().any(|c| c.is_dynamic())
	}

	fn head_size(&self) -> usize {
		if self.is_dynamic() {
			WORD
		} else {
			self.components.iter().map(|c| c.head_size()).sum()
		}
	}
}

/// Type strings of the components, or `None` if `type_str` is an array of tuples.
fn component_type_strs(type_str: &str) -> Result<Option<Vec<String>>, Error> {
	match parse_type_str(type_str)? {
		ty if ty.is_array() => Ok(None),
		AbiType::Tuple(ty) => Ok(Some(ty.components.iter().map(AbiType::to_type_str).collect())),
		AbiType::Basic(_) => Err(Error::invalid_coder_type(type_str, "expected a tuple type")),
	}
}

pub fn encoder(type_str: &str, registry: &AbiRegistry) -> Result<EncoderRef, Error> {
	let Some(components) = component_type_strs(type_str)? else {
		return array::encoder(type_str, registry);
	};
	log::trace!("Building tuple encoder for '{}' from {:?}", type_str, components);
	let components = components.iter().map(|c| registry.get_encoder(c)).collect::<Result<_, _>>()?;
	Ok(Arc::new(TupleEncoder::new(components)))
}

pub fn decoder(type_str: &str, registry: &AbiRegistry) -> Result<DecoderRef, Error> {
	let Some(components) = component_type_strs(type_str)? else {
		return array::decoder(type_str, registry);
	};
	log::trace!("Building tuple decoder for '{}' from {:?}", type_str, components);
	let components = components.iter().map(|c| registry.get_decoder(c)).collect::<Result<_, _>>()?;
	Ok(Arc::new(TupleDecoder::new(components)))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{BoolCoder, BytesCoder, StringCoder, UnsignedCoder};

	fn uint256() -> Arc<UnsignedCoder> {
		Arc::new(UnsignedCoder::from_type_str("uint256").unwrap())
	}

	#[test]
	fn should_keep_static_tuples_inline() {
		let encoder = TupleEncoder::new(vec![uint256() as EncoderRef, Arc::new(BoolCoder)]);
		assert!(!encoder.is_dynamic());
		let encoded = encoder.encode(&Value::Tuple(vec![Value::uint(1u8), Value::Bool(true)])).unwrap();
		assert_eq!(encoded.len(), 2 * WORD);
		assert_eq!(encoded[WORD - 1], 1);
		assert_eq!(encoded[2 * WORD - 1], 1);
	}

	#[test]
	fn should_store_dynamic_components_in_tail() {
		let encoder = TupleEncoder::new(vec![uint256() as EncoderRef, Arc::new(StringCoder)]);
		let decoder = TupleDecoder::new(vec![uint256() as DecoderRef, Arc::new(StringCoder)]);
		let value = Value::Tuple(vec![Value::uint(1u8), Value::String("hi".into())]);

		let encoded = encoder.encode(&value).unwrap();
		assert_eq!(
			hex::encode(&encoded),
			"0000000000000000000000000000000000000000000000000000000000000001\
			 0000000000000000000000000000000000000000000000000000000000000040\
			 0000000000000000000000000000000000000000000000000000000000000002\
			 6869000000000000000000000000000000000000000000000000000000000000"
		);
		assert!(encoder.is_dynamic() && decoder.is_dynamic());

		let mut stream = DecodeStream::new(&encoded);
		assert_eq!(decoder.decode(&mut stream), Ok(value));
		// only the head is consumed
		assert_eq!(stream.position(), 2 * WORD);
	}

	#[test]
	fn should_count_offsets_past_earlier_tails() {
		let encoder = TupleEncoder::new(vec![Arc::new(BytesCoder) as EncoderRef, Arc::new(BytesCoder)]);
		let encoded =
			encoder.encode(&Value::Tuple(vec![Value::Bytes(vec![1; 33]), Value::Bytes(vec![2])])).unwrap();
		let mut stream = DecodeStream::new(&encoded);
		assert_eq!(stream.read_offset().unwrap(), 0x40);
		// 0x40 + length word + two words of data
		assert_eq!(stream.read_offset().unwrap(), 0xa0);
	}

	#[test]
	fn should_check_arity() {
		let encoder = TupleEncoder::new(vec![uint256() as EncoderRef]);
		assert_eq!(encoder.encode(&Value::Tuple(vec![])), Err(EncodeError::WrongLength { expected: 1, got: 0 }));
		assert!(matches!(encoder.encode(&Value::Array(vec![])), Err(EncodeError::TypeMismatch { .. })));
	}

	#[test]
	fn should_encode_empty_tuple() {
		let encoder = TupleEncoder::new(vec![]);
		assert_eq!(encoder.encode(&Value::Tuple(vec![])), Ok(vec![]));
		assert!(!encoder.is_dynamic());
	}

	#[test]
	fn should_reject_offsets_past_the_data() {
		let decoder = TupleDecoder::new(vec![Arc::new(StringCoder) as DecoderRef]);
		let mut data = vec![0u8; 32];
		data[31] = 0x60;
		assert_eq!(decoder.decode(&mut DecodeStream::new(&data)), Err(DecodeError::InvalidOffset("96".into())));
	}
}
