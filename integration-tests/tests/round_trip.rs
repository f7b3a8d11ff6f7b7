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


use crate::test_suite::{init, words};
use eth_abi::{decode, encode, Value, I256, U256};

crate::round_trip_test! {
	[uint8_max, "uint8", Value::uint(255u32)]
	[uint256_max, "uint256", Value::Uint(U256::MAX)]
	[int256_min, "int256", Value::Int(I256::from_raw(U256::one() << 255))]
	[int24_negative, "int24", Value::int(-8_388_608)]
	[ufixed_scaled, "ufixed128x18", Value::uint(1_500_000_000_000_000_000u128)]
	[address, "address", Value::Address([0xaa; 20])]
	[bool, "bool", Value::Bool(false)]
	[bytes1, "bytes1", Value::Bytes(vec![0x01])]
	[function, "function", Value::Bytes(vec![0x12; 24])]
	[empty_bytes, "bytes", Value::Bytes(vec![])]
	[long_bytes, "bytes", Value::Bytes((0..100).collect())]
	[string, "string", Value::String("Ünïcödé".into())]
	[static_array, "int8[3]", Value::Array(vec![Value::int(-1), Value::int(0), Value::int(1)])]
	[nested_arrays, "uint16[][2]", Value::Array(vec![
		Value::Array(vec![Value::uint(1u8), Value::uint(2u8)]),
		Value::Array(vec![]),
	])]
	[string_array, "string[]", Value::Array(vec![Value::String("a".into()), Value::String("bc".into())])]
	[tuple_array, "(address,bytes)[]", Value::Array(vec![
		Value::Tuple(vec![Value::Address([1; 20]), Value::Bytes(vec![1, 2, 3])]),
		Value::Tuple(vec![Value::Address([2; 20]), Value::Bytes(vec![])]),
	])]
	[empty_tuple, "()", Value::Tuple(vec![])]
	[empty_tuple_array, "()[]", Value::Array(vec![Value::Tuple(vec![]), Value::Tuple(vec![])])]
	[empty_tuple_pairs, "()[2][]", Value::Array(vec![Value::Array(vec![Value::Tuple(vec![]); 2])])]
}

#[test]
fn should_match_static_reference_encoding() -> anyhow::Result<()> {
	init();
	let values = vec![Value::uint(69u8), Value::Bool(true)];
	let encoded = encode(&["uint32", "bool"], &values)?;
	assert_eq!(
		encoded,
		words(
			"0000000000000000000000000000000000000000000000000000000000000045
			 0000000000000000000000000000000000000000000000000000000000000001"
		)
	);
	assert_eq!(decode(&["uint32", "bool"], &encoded)?, values);
	Ok(())
}

#[test]
fn should_match_dynamic_reference_encoding() -> anyhow::Result<()> {
	init();
	let types = ["bytes", "bool", "uint256[]"];
	let values = vec![
		Value::Bytes(b"dave".to_vec()),
		Value::Bool(true),
		Value::Array(vec![Value::uint(1u8), Value::uint(2u8), Value::uint(3u8)]),
	];
	let encoded = encode(&types, &values)?;
	assert_eq!(
		encoded,
		words(
			"0000000000000000000000000000000000000000000000000000000000000060
			 0000000000000000000000000000000000000000000000000000000000000001
			 00000000000000000000000000000000000000000000000000000000000000a0
			 0000000000000000000000000000000000000000000000000000000000000004
			 6461766500000000000000000000000000000000000000000000000000000000
			 0000000000000000000000000000000000000000000000000000000000000003
			 0000000000000000000000000000000000000000000000000000000000000001
			 0000000000000000000000000000000000000000000000000000000000000002
			 0000000000000000000000000000000000000000000000000000000000000003"
		)
	);
	assert_eq!(decode(&types, &encoded)?, values);
	Ok(())
}

#[test]
fn should_match_mixed_reference_encoding() -> anyhow::Result<()> {
	init();
	let types = ["uint256", "uint32[]", "bytes10", "bytes"];
	let values = vec![
		Value::uint(0x123u32),
		Value::Array(vec![Value::uint(0x456u32), Value::uint(0x789u32)]),
		Value::Bytes(b"1234567890".to_vec()),
		Value::Bytes(b"Hello, world!".to_vec()),
	];
	let encoded = encode(&types, &values)?;
	assert_eq!(
		encoded,
		words(
			"0000000000000000000000000000000000000000000000000000000000000123
			 0000000000000000000000000000000000000000000000000000000000000080
			 3132333435363738393000000000000000000000000000000000000000000000
			 00000000000000000000000000000000000000000000000000000000000000e0
			 0000000000000000000000000000000000000000000000000000000000000002
			 0000000000000000000000000000000000000000000000000000000000000456
			 0000000000000000000000000000000000000000000000000000000000000789
			 000000000000000000000000000000000000000000000000000000000000000d
			 48656c6c6f2c20776f726c642100000000000000000000000000000000000000"
		)
	);
	assert_eq!(decode(&types, &encoded)?, values);
	Ok(())
}

#[test]
fn should_serialize_decoded_values() -> anyhow::Result<()> {
	init();
	let data = words(
		"0000000000000000000000000000000000000000000000000000000000000040
		 0000000000000000000000000000000000000000000000000000000000000001
		 0000000000000000000000000000000000000000000000000000000000000002
		 6869000000000000000000000000000000000000000000000000000000000000",
	);
	let decoded = decode(&["string", "bool"], &data)?;
	assert_eq!(decoded, vec![Value::String("hi".into()), Value::Bool(true)]);

	let json = serde_json::to_value(&decoded)?;
	assert_eq!(json, serde_json::json!([{ "String": "hi" }, { "Bool": true }]));
	assert_eq!(serde_json::from_value::<Vec<Value>>(json)?, decoded);
	Ok(())
}

#[test]
fn should_reject_truncated_input() {
	init();
	let data = words("0000000000000000000000000000000000000000000000000000000000000020");
	let err = decode(&["string"], &data).unwrap_err();
	assert_eq!(err.to_string(), "Decoding failed: Tried to read 32 bytes, only 0 available");
}
