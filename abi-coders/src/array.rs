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


use crate::{
	tuple::{decode_components, encode_components},
	util::{encode_word, parse_type_str},
};
use abi_registry::{
	abi_grammar::Dimension, AbiRegistry, Decode, DecodeError, DecodeStream, DecoderRef, Encode, EncodeError,
	EncoderRef, Error, Value, U256, WORD,
};
use std::{iter, sync::Arc};

/// Upper bound on the length of an array whose items take no bytes, eg `()[]`.
/// The encoding does not bound their count, so decoding one could otherwise allocate without limit.
pub const MAX_EMPTY_ITEMS: usize = 1 << 16;

/// Coder for `T[k]` (laid out as a tuple of `k` items) and `T[]` (a length word, then the items).
#[derive(Debug, Clone)]
pub struct ArrayEncoder {
	item: EncoderRef,
	len: Dimension,
}

impl ArrayEncoder {
	pub fn new(item: EncoderRef, len: Dimension) -> Self {
		Self { item, len }
	}
}

impl Encode for ArrayEncoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		let items = match value {
			Value::Array(items) => items,
			other => return Err(EncodeError::TypeMismatch { expected: "array", got: other.kind() }),
		};
		let mut encoded = match self.len {
			Some(len) if len != items.len() => return Err(EncodeError::WrongLength { expected: len, got: items.len() }),
			Some(_) => Vec::new(),
			None => encode_word(U256::from(items.len())),
		};
		encoded.extend(encode_components(iter::repeat(&self.item).zip(items))?);
		Ok(encoded)
	}

	fn is_dynamic(&self) -> bool {
		self.len.is_none() || self.item.is_dynamic()
	}
}

#[derive(Debug, Clone)]
pub struct ArrayDecoder {
	item: DecoderRef,
	len: Dimension,
}

impl ArrayDecoder {
	pub fn new(item: DecoderRef, len: Dimension) -> Self {
		Self { item, len }
	}
}

impl Decode for ArrayDecoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let item_size = self.item.head_size();
		let len = match self.len {
			Some(len) => len,
			None => {
				let len = stream.read_offset()?;
				// every item takes its head size of the remaining data
				if item_size > 0 && len.checked_mul(item_size).map_or(true, |needed| needed > stream.remaining()) {
					return Err(DecodeError::InvalidOffset(len.to_string()));
				}
				len
			}
		};
		if item_size == 0 && len > MAX_EMPTY_ITEMS {
			return Err(DecodeError::TooManyItems { len, max: MAX_EMPTY_ITEMS });
		}
		decode_components(iter::repeat(&self.item).take(len), stream).map(Value::Array)
	}

	fn is_dynamic(&self) -> bool {
		self.len.is_none() || self.item.is_dynamic()
	}

	fn head_size(&self) -> usize {
		match self.len {
			Some(len) if !self.item.is_dynamic() => len.saturating_mul(self.item.head_size()),
			_ => WORD,
		}
	}
}

/// The element type string and the outermost dimension of an array type.
fn split_array(type_str: &str) -> Result<(String, Dimension), Error> {
	let ty = parse_type_str(type_str)?;
	match (ty.item_type(), ty.last_dimension()) {
		(Some(item), Some(len)) => Ok((item.to_type_str(), len)),
		_ => Err(Error::invalid_coder_type(type_str, "expected an array type")),
	}
}

pub fn encoder(type_str: &str, registry: &AbiRegistry) -> Result<EncoderRef, Error> {
	let (item, len) = split_array(type_str)?;
	log::trace!("Building array encoder for '{}' over '{}'", type_str, item);
	Ok(Arc::new(ArrayEncoder::new(registry.get_encoder(&item)?, len)))
}

pub fn decoder(type_str: &str, registry: &AbiRegistry) -> Result<DecoderRef, Error> {
	let (item, len) = split_array(type_str)?;
	log::trace!("Building array decoder for '{}' over '{}'", type_str, item);
	Ok(Arc::new(ArrayDecoder::new(registry.get_decoder(&item)?, len)))
}
