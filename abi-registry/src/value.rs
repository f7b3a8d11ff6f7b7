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

use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that can be handed to an encoder or is produced by a decoder.
///
/// Fixed point values (`ufixed<M>x<N>`, `fixed<M>x<N>`) are carried as [`Value::Uint`] and
/// [`Value::Int`] holding the value scaled by `10^N`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
	Uint(U256),
	Int(I256),
	Bool(bool),
	Address([u8; 20]),
	/// Both fixed size (`bytes32`) and dynamic (`bytes`) byte strings.
	Bytes(Vec<u8>),
	String(String),
	/// Elements of a static or dynamic array.
	Array(Vec<Value>),
	Tuple(Vec<Value>),
}

impl Value {
	pub fn uint(v: impl Into<U256>) -> Value {
		Value::Uint(v.into())
	}

	pub fn int(v: i128) -> Value {
		Value::Int(I256::from_i128(v))
	}

	/// Name of the variant, used in error messages.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Uint(_) => "uint",
			Value::Int(_) => "int",
			Value::Bool(_) => "bool",
			Value::Address(_) => "address",
			Value::Bytes(_) => "bytes",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Tuple(_) => "tuple",
		}
	}
}

/// A signed 256-bit integer in two's complement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct I256(U256);

impl I256 {
	/// Interpret a 256-bit word as two's complement.
	pub fn from_raw(raw: U256) -> Self {
		I256(raw)
	}

	/// The two's complement representation, as it appears on the wire.
	pub fn into_raw(self) -> U256 {
		self.0
	}

	pub fn from_i128(v: i128) -> Self {
		let magnitude = U256::from(v.unsigned_abs());
		if v < 0 {
			I256(negate(magnitude))
		} else {
			I256(magnitude)
		}
	}

	pub fn is_negative(&self) -> bool {
		self.0.bit(255)
	}

	/// Absolute value. `-2^255` has no positive counterpart and comes back as `2^255`.
	pub fn unsigned_abs(&self) -> U256 {
		if self.is_negative() {
			negate(self.0)
		} else {
			self.0
		}
	}

	pub fn to_i128(&self) -> Option<i128> {
		if !self.fits_bits(128) {
			return None;
		}
		let abs = self.unsigned_abs().low_u128();
		Some(if self.is_negative() { (abs as i128).wrapping_neg() } else { abs as i128 })
	}

	/// Whether the value lies in `-2^(bits-1) ..= 2^(bits-1) - 1`.
	pub fn fits_bits(&self, bits: usize) -> bool {
		if bits >= 256 {
			return true;
		}
		if bits == 0 {
			return false;
		}
		let limit = U256::one() << (bits - 1);
		if self.is_negative() {
			self.unsigned_abs() <= limit
		} else {
			self.0 < limit
		}
	}
}

fn negate(v: U256) -> U256 {
	(!v).overflowing_add(U256::one()).0
}

impl From<i128> for I256 {
	fn from(v: i128) -> Self {
		I256::from_i128(v)
	}
}

impl fmt::Display for I256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_negative() {
			write!(f, "-{}", self.unsigned_abs())
		} else {
			write!(f, "{}", self.0)
		}
	}
}

impl fmt::Debug for I256 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "I256({})", self)
	}
}
