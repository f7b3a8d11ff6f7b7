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

use crate::{AbiType, BasicType, Sub, ValidationError};

impl AbiType {
	/// Check the rules that hold beyond syntax, ie that `uint` sizes are multiples of 8.
	/// Tuple components are checked recursively.
	pub fn validate(&self) -> Result<(), ValidationError> {
		match self {
			AbiType::Basic(ty) => ty.validate(),
			AbiType::Tuple(ty) => ty.components.iter().try_for_each(AbiType::validate),
		}
	}
}

impl BasicType {
	pub fn validate(&self) -> Result<(), ValidationError> {
		let base = self.base.as_str();
		match (base, self.sub) {
			("uint" | "int", Some(Sub::Size(bits))) => check_integer_size(bits),
			("uint" | "int", Some(Sub::Fixed(..))) => Err(ValidationError::SizeExpected { base: base.into() }),
			("uint" | "int" | "ufixed" | "fixed", None) => Err(ValidationError::MissingSub { base: base.into() }),

			("ufixed" | "fixed", Some(Sub::Fixed(bits, exponent))) => {
				check_integer_size(bits)?;
				if !(1..=80).contains(&exponent) {
					return Err(ValidationError::FixedExponent(exponent));
				}
				Ok(())
			}
			("ufixed" | "fixed", Some(Sub::Size(_))) => Err(ValidationError::FixedSubExpected),

			("bytes", Some(Sub::Size(size))) if !(1..=32).contains(&size) => Err(ValidationError::BytesSize(size)),
			("bytes", Some(Sub::Fixed(..))) => Err(ValidationError::SizeExpected { base: base.into() }),
			("bytes", _) => Ok(()),

			(_, Some(_)) => Err(ValidationError::UnexpectedSub { base: base.into() }),
			(_, None) => Ok(()),
		}
	}
}

fn check_integer_size(bits: usize) -> Result<(), ValidationError> {
	if bits == 0 || bits > 256 || bits % 8 != 0 {
		return Err(ValidationError::IntegerSize(bits));
	}
	Ok(())
}
