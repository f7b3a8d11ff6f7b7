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


use abi_registry::{DecodeError, EncodeError, Error as RegistryError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error(transparent)]
	Registry(#[from] RegistryError),
	#[error("Encoding failed: {0}")]
	Encode(#[from] EncodeError),
	#[error("Decoding failed: {0}")]
	Decode(#[from] DecodeError),
	#[error("Got {values} values for {types} types")]
	ArgumentCount { types: usize, values: usize },
}
