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


//! Integer and fixed point coders. Fixed point values are carried as integers scaled by `10^N`,
//! so `ufixed<M>x<N>` shares the coder of `uint<M>` and `fixed<M>x<N>` that of `int<M>`.

use crate::util::{basic_type, bit_width, encode_word, ensure_zero};
use abi_registry::{
	AbiRegistry, Decode, DecodeError, DecodeStream, DecoderRef, Encode, EncodeError, EncoderRef, Error, Value, I256,
	U256, WORD,
};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsignedCoder {
	type_str: String,
	bits: usize,
}

impl UnsignedCoder {
	pub fn from_type_str(type_str: &str) -> Result<Self, Error> {
		let ty = basic_type(type_str, &["uint", "ufixed"])?;
		let bits = bit_width(&ty).ok_or_else(|| Error::invalid_coder_type(type_str, "missing bit width"))?;
		Ok(Self { type_str: type_str.to_string(), bits })
	}

	pub fn bits(&self) -> usize {
		self.bits
	}
}

impl Encode for UnsignedCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		let value = match value {
			Value::Uint(v) => *v,
			other => return Err(EncodeError::TypeMismatch { expected: "uint", got: other.kind() }),
		};
		if value.bits() > self.bits {
			return Err(EncodeError::OutOfBounds { value: value.to_string(), type_str: self.type_str.clone() });
		}
		Ok(encode_word(value))
	}
}

impl Decode for UnsignedCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let word = stream.read_word()?;
		ensure_zero(&word[..WORD - self.bits / 8])?;
		Ok(Value::Uint(U256::from_big_endian(word)))
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedCoder {
	type_str: String,
	bits: usize,
}

impl SignedCoder {
	pub fn from_type_str(type_str: &str) -> Result<Self, Error> {
		let ty = basic_type(type_str, &["int", "fixed"])?;
		let bits = bit_width(&ty).ok_or_else(|| Error::invalid_coder_type(type_str, "missing bit width"))?;
		Ok(Self { type_str: type_str.to_string(), bits })
	}

	pub fn bits(&self) -> usize {
		self.bits
	}
}

impl Encode for SignedCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		let value = match value {
			Value::Int(v) => *v,
			other => return Err(EncodeError::TypeMismatch { expected: "int", got: other.kind() }),
		};
		if !value.fits_bits(self.bits) {
			return Err(EncodeError::OutOfBounds { value: value.to_string(), type_str: self.type_str.clone() });
		}
		Ok(encode_word(value.into_raw()))
	}
}

impl Decode for SignedCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let word = stream.read_word()?;
		let start = WORD - self.bits / 8;
		// bytes above the value repeat its sign bit
		let fill = if word[start] & 0x80 == 0 { 0x00 } else { 0xff };
		if word[..start].iter().any(|b| *b != fill) {
			return Err(DecodeError::NonEmptyPadding);
		}
		Ok(Value::Int(I256::from_raw(U256::from_big_endian(word))))
	}
}

pub fn unsigned_encoder(type_str: &str, _: &AbiRegistry) -> Result<EncoderRef, Error> {
	Ok(Arc::new(UnsignedCoder::from_type_str(type_str)?))
}

pub fn unsigned_decoder(type_str: &str, _: &AbiRegistry) -> Result<DecoderRef, Error> {
	Ok(Arc::new(UnsignedCoder::from_type_str(type_str)?))
}

pub fn signed_encoder(type_str: &str, _: &AbiRegistry) -> Result<EncoderRef, Error> {
	Ok(Arc::new(SignedCoder::from_type_str(type_str)?))
}

pub fn signed_decoder(type_str: &str, _: &AbiRegistry) -> Result<DecoderRef, Error> {
	Ok(Arc::new(SignedCoder::from_type_str(type_str)?))
}
