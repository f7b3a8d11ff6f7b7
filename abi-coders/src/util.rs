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


use abi_registry::{
	abi_grammar::{normalize, parse, AbiType, BasicType, Sub},
	DecodeError, Error, WORD, U256,
};

/// Normalize, parse and validate `type_str`. Errors are reported against the string as given.
pub(crate) fn parse_type_str(type_str: &str) -> Result<AbiType, Error> {
	let normalized = normalize(type_str);
	let ty = parse(&normalized).map_err(|e| Error::malformed(type_str, e))?;
	ty.validate().map_err(|e| Error::invalid_coder_type(type_str, e))?;
	Ok(ty)
}

/// Like [`parse_type_str`], for coders of a single elementary type.
pub(crate) fn basic_type(type_str: &str, bases: &[&str]) -> Result<BasicType, Error> {
	match parse_type_str(type_str)? {
		AbiType::Basic(ty) if ty.arrlist.is_empty() && bases.contains(&ty.base.as_str()) => Ok(ty),
		_ => Err(Error::invalid_coder_type(type_str, format!("expected one of {}", bases.join(", ")))),
	}
}

/// Bit width of an integer or fixed point type, ie `128` for `ufixed128x18`.
pub(crate) fn bit_width(ty: &BasicType) -> Option<usize> {
	match ty.sub? {
		Sub::Size(bits) | Sub::Fixed(bits, _) => Some(bits),
	}
}

pub(crate) fn encode_word(value: U256) -> Vec<u8> {
	let mut word = vec![0u8; WORD];
	value.to_big_endian(&mut word);
	word
}

/// `bytes` followed by zeros up to the next word boundary.
pub(crate) fn pad_right(bytes: &[u8]) -> Vec<u8> {
	let mut padded = bytes.to_vec();
	padded.resize(padded_len(bytes.len()), 0);
	padded
}

pub(crate) fn padded_len(len: usize) -> usize {
	(len + WORD - 1) / WORD * WORD
}

pub(crate) fn ensure_zero(padding: &[u8]) -> Result<(), DecodeError> {
	if padding.iter().any(|b| *b != 0) {
		return Err(DecodeError::NonEmptyPadding);
	}
	Ok(())
}
