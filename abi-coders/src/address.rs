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


use crate::util::ensure_zero;
use abi_registry::{Decode, DecodeError, DecodeStream, Encode, EncodeError, Value, WORD};

const ADDRESS_LEN: usize = 20;

/// Coder for `address`: 20 bytes, left padded with zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressCoder;

impl Encode for AddressCoder {
	fn encode(&self, value: &Value) -> Result<Vec<u8>, EncodeError> {
		match value {
			Value::Address(address) => {
				let mut word = vec![0u8; WORD - ADDRESS_LEN];
				word.extend_from_slice(address);
				Ok(word)
			}
			other => Err(EncodeError::TypeMismatch { expected: "address", got: other.kind() }),
		}
	}
}

impl Decode for AddressCoder {
	fn decode(&self, stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
		let word = stream.read_word()?;
		let (padding, raw) = word.split_at(WORD - ADDRESS_LEN);
		ensure_zero(padding)?;
		let mut address = [0u8; ADDRESS_LEN];
		address.copy_from_slice(raw);
		Ok(Value::Address(address))
	}
}
