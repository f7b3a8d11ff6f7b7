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


use crate::util::{encode_word, ensure_zero};
use abi_registry::{Decode, DecodeError, DecodeStream, Encode, EncodeError, Value, U256, WORD};

/// Coder for `bool`, encoded as the word `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolCoder;

impl Encode for BoolCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		match value {
			Value::Bool(b) => Ok(encode_word(U256::from(u8::from(*b)))),
			other => Err(EncodeError::TypeMismatch { expected: "bool", got: other.kind() }),
		}
	}
}

impl Decode for BoolCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let word = stream.read_word()?;
		ensure_zero(&word[..WORD - 1])?;
		match word[WORD - 1] {
			0 => Ok(Value::Bool(false)),
			1 => Ok(Value::Bool(true)),
			_ => Err(DecodeError::InvalidBool),
		}
	}
}
