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

//! The contract between the registry and the coders it hands out.

use crate::{AbiRegistry, Error, Value};
use primitive_types::U256;
use std::{fmt, sync::Arc};
use thiserror::Error;

/// Size in bytes of one ABI word.
pub const WORD: usize = 32;

/// Turns a [`Value`] into its ABI encoding.
pub trait Encode: Send + Sync + fmt::Debug {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError>;

	/// Dynamic values are stored in the tail of an enclosing tuple and referenced by offset.
	fn is_dynamic(&self) -> bool {
		false
	}
}

/// Reads a [`Value`] back from its ABI encoding.
pub trait Decode: Send + Sync + fmt::Debug {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError>;

	fn is_dynamic(&self) -> bool {
		false
	}

	/// Bytes the value occupies in the head of an enclosing tuple.
	/// Zero for static values without content, like `()`.
	fn head_size(&self) -> usize {
		WORD
	}
}

/// Builds a coder from the type string it was matched for.
/// The registry is handed in so element coders can be resolved.
pub type Factory<T> = fn(&str, &AbiRegistry) -> Result<Arc<T>, Error>;

/// What gets registered under a predicate.
pub enum Coder<T: ?Sized> {
	/// Handed out as is for every matching type string.
	Direct(Arc<T>),
	/// Called with the matching type string and the registry on resolution.
	Factory(Factory<T>),
}

impl Coder<dyn Encode> {
	/// Register a plain function as an encoder.
	pub fn encoder_fn(f: fn(&Value) -> Result<Vec<u8>, EncodeError>) -> Self {
		Coder::Direct(Arc::new(FnEncoder(f)))
	}
}

impl Coder<dyn Decode> {
	/// Register a plain function as a decoder.
	pub fn decoder_fn(f: fn(&mut DecodeStream<'_>) -> Result<Value, DecodeError>) -> Self {
		Coder::Direct(Arc::new(FnDecoder(f)))
	}
}

impl<T: ?Sized> Clone for Coder<T> {
	fn clone(&self) -> Self {
		match self {
			Coder::Direct(coder) => Coder::Direct(Arc::clone(coder)),
			Coder::Factory(factory) => Coder::Factory(*factory),
		}
	}
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Coder<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Coder::Direct(coder) => f.debug_tuple("Direct").field(coder).finish(),
			Coder::Factory(_) => f.write_str("Factory"),
		}
	}
}

/// A plain encoding function.
pub struct FnEncoder(pub fn(&Value) -> Result<Vec<u8>, EncodeError>);

impl Encode for FnEncoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		(self.0)(value)
	}
}

impl fmt::Debug for FnEncoder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("FnEncoder")
	}
}

/// A plain decoding function.
pub struct FnDecoder(pub fn(&mut DecodeStream<'_>) -> Result<Value, DecodeError>);

impl Decode for FnDecoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		(self.0)(stream)
	}
}

impl fmt::Debug for FnDecoder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("FnDecoder")
	}
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
	#[error("Expected a {expected} value, got {got}")]
	TypeMismatch { expected: &'static str, got: &'static str },
	#[error("Value {value} does not fit in {type_str}")]
	OutOfBounds { value: String, type_str: String },
	#[error("Expected {expected} items, got {got}")]
	WrongLength { expected: usize, got: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
	#[error("Tried to read {needed} bytes, only {available} available")]
	InsufficientData { needed: usize, available: usize },
	#[error("Padding bytes are not zero")]
	NonEmptyPadding,
	#[error("Invalid boolean encoding")]
	InvalidBool,
	#[error("Offset or length {0} is out of range")]
	InvalidOffset(String),
	#[error("String is not valid UTF-8")]
	InvalidUtf8,
	#[error("Array of {len} empty items exceeds the limit of {max}")]
	TooManyItems { len: usize, max: usize },
}

/// A cursor over ABI encoded bytes.
///
/// Offsets found in a head point into the frame they were read from, so composite decoders
/// open a new [`frame`](DecodeStream::frame) where their head begins.
#[derive(Debug, Clone, Copy)]
pub struct DecodeStream<'a> {
	data: &'a [u8],
	position: usize,
}

impl<'a> DecodeStream<'a> {
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, position: 0 }
	}

	/// Position relative to the start of the frame.
	pub fn position(&self) -> usize {
		self.position
	}

	pub fn remaining(&self) -> usize {
		self.data.len() - self.position
	}

	/// Read `len` bytes, moving the cursor forwards.
	pub fn read(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
		if len > self.remaining() {
			return Err(DecodeError::InsufficientData { needed: len, available: self.remaining() });
		}
		let bytes = &self.data[self.position..self.position + len];
		self.position += len;
		Ok(bytes)
	}

	pub fn read_word(&mut self) -> Result<&'a [u8], DecodeError> {
		self.read(WORD)
	}

	/// Read a word holding an offset or length.
	pub fn read_offset(&mut self) -> Result<usize, DecodeError> {
		let word = U256::from_big_endian(self.read_word()?);
		if word.bits() > 64 {
			return Err(DecodeError::InvalidOffset(word.to_string()));
		}
		usize::try_from(word.low_u64()).map_err(|_| DecodeError::InvalidOffset(word.to_string()))
	}

	/// A new frame starting at the current position.
	pub fn frame(&self) -> DecodeStream<'a> {
		DecodeStream { data: &self.data[self.position..], position: 0 }
	}

	/// A new frame starting `offset` bytes after the start of this one.
	pub fn at_offset(&self, offset: usize) -> Result<DecodeStream<'a>, DecodeError> {
		if offset > self.data.len() {
			return Err(DecodeError::InvalidOffset(offset.to_string()));
		}
		Ok(DecodeStream { data: &self.data[offset..], position: 0 })
	}

	pub fn advance(&mut self, len: usize) -> Result<(), DecodeError> {
		self.read(len).map(|_| ())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn should_read_words_and_offsets() {
		let mut data = vec![0u8; 64];
		data[31] = 0x40;
		data[63] = 7;
		let mut stream = DecodeStream::new(&data);
		assert_eq!(stream.read_offset().unwrap(), 0x40);
		assert_eq!(stream.read_word().unwrap()[31], 7);
		assert_eq!(stream.remaining(), 0);
		assert_eq!(stream.read(1), Err(DecodeError::InsufficientData { needed: 1, available: 0 }));
	}

	#[test]
	fn should_reject_huge_offsets() {
		let data = [0xffu8; 32];
		let mut stream = DecodeStream::new(&data);
		assert!(matches!(stream.read_offset(), Err(DecodeError::InvalidOffset(_))));
	}

	#[test]
	fn should_open_frames_relative_to_position() {
		let data: Vec<u8> = (0..96).collect();
		let mut stream = DecodeStream::new(&data);
		stream.advance(32).unwrap();
		let frame = stream.frame();
		assert_eq!(frame.position(), 0);
		assert_eq!(frame.remaining(), 64);
		let mut tail = frame.at_offset(32).unwrap();
		assert_eq!(tail.read(1).unwrap(), &[64]);
		assert!(frame.at_offset(65).is_err());
	}

	#[test]
	fn should_call_plain_functions() {
		fn always_true(_: &Value) -> Result<Vec<u8>, EncodeError> {
			Ok(vec![1])
		}
		let Coder::Direct(encoder) = Coder::encoder_fn(always_true) else { panic!("expected a direct coder") };
		assert_eq!(encoder.encode(&Value::Bool(false)).unwrap(), vec![1]);
		assert!(!encoder.is_dynamic());
	}
}
