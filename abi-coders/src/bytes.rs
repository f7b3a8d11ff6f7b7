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


//! Byte string coders: `bytes<M>` (and `function`, which is `bytes24`), `bytes` and `string`.

use crate::util::{basic_type, encode_word, ensure_zero, pad_right, padded_len};
use abi_registry::{
	abi_grammar::Sub, AbiRegistry, Decode, DecodeError, DecodeStream, DecoderRef, Encode, EncodeError, EncoderRef,
	Error, Value, U256,
};
use std::sync::Arc;

/// Coder for `bytes<M>`, right padded to one word. Shorter values are padded as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedBytesCoder {
	type_str: String,
	size: usize,
}

impl FixedBytesCoder {
	pub fn from_type_str(type_str: &str) -> Result<Self, Error> {
		match basic_type(type_str, &["bytes"])?.sub {
			Some(Sub::Size(size)) => Ok(Self { type_str: type_str.to_string(), size }),
			_ => Err(Error::invalid_coder_type(type_str, "expected a size")),
		}
	}

	pub fn size(&self) -> usize {
		self.size
	}
}

impl Encode for FixedBytesCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		match value {
			Value::Bytes(bytes) if bytes.len() > self.size => {
				Err(EncodeError::OutOfBounds { value: format!("0x{}", hex::encode(bytes)), type_str: self.type_str.clone() })
			}
			Value::Bytes(bytes) => Ok(pad_right(bytes)),
			other => Err(EncodeError::TypeMismatch { expected: "bytes", got: other.kind() }),
		}
	}
}

impl Decode for FixedBytesCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let word = stream.read_word()?;
		let (value, padding) = word.split_at(self.size);
		ensure_zero(padding)?;
		Ok(Value::Bytes(value.to_vec()))
	}
}

/// Coder for `bytes`: a length word followed by the right padded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BytesCoder;

impl Encode for BytesCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		match value {
			Value::Bytes(bytes) => Ok(encode_dynamic(bytes)),
			other => Err(EncodeError::TypeMismatch { expected: "bytes", got: other.kind() }),
		}
	}

	fn is_dynamic(&self) -> bool {
		true
	}
}

impl Decode for BytesCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		Ok(Value::Bytes(decode_dynamic(stream)?.to_vec()))
	}

	fn is_dynamic(&self) -> bool {
		true
	}
}

/// Coder for `string`, laid out like `bytes` holding the UTF-8 encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringCoder;

impl Encode for StringCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		match value {
			Value::String(s) => Ok(encode_dynamic(s.as_bytes())),
			other => Err(EncodeError::TypeMismatch { expected: "string", got: other.kind() }),
		}
	}

	fn is_dynamic(&self) -> bool {
		true
	}
}

impl Decode for StringCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let bytes = decode_dynamic(stream)?;
		let s = std::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)?;
		Ok(Value::String(s.to_string()))
	}

	fn is_dynamic(&self) -> bool {
		true
	}
}

fn encode_dynamic(bytes: &[u8]) -> Vec<u8> {
	let mut encoded = encode_word(U256::from(bytes.len()));
	encoded.extend(pad_right(bytes));
	encoded
}

fn decode_dynamic<'a>(stream: &mut DecodeStream<'a>) -> Result<&'a [u8], DecodeError> {
	let len = stream.read_offset()?;
	if len > stream.remaining() {
		return Err(DecodeError::InsufficientData { needed: len, available: stream.remaining() });
	}
	let data = stream.read(len)?;
	let padding = stream.read(padded_len(len) - len)?;
	ensure_zero(padding)?;
	Ok(data)
}

pub fn fixed_bytes_encoder(type_str: &str, _: &AbiRegistry) -> Result<EncoderRef, Error> {
	Ok(Arc::new(FixedBytesCoder::from_type_str(type_str)?))
}

pub fn fixed_bytes_decoder(type_str: &str, _: &AbiRegistry) -> Result<DecoderRef, Error> {
	Ok(Arc::new(FixedBytesCoder::from_type_str(type_str)?))
}
