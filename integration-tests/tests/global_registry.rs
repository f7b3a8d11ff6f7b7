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


use crate::test_suite::init;
use abi_registry::{Coder, DecodeError, DecodeStream, EncodeError, Error, Predicate, Value};
use eth_abi::{decode_single, default_registry, encode_single, is_encodable};
use std::thread;

fn encode_flag(value: &Value) -> Result<Vec<u8>, EncodeError> {
	match value {
		Value::Bool(b) => Ok(vec![u8::from(*b); 32]),
		other => Err(EncodeError::TypeMismatch { expected: "bool", got: other.kind() }),
	}
}

fn decode_flag(stream: &mut DecodeStream<'_>) -> Result<Value, DecodeError> {
	let word = stream.read_word()?;
	Ok(Value::Bool(word.iter().all(|b| *b == 1)))
}

#[test]
fn should_register_on_global_registry() -> anyhow::Result<()> {
	init();
	assert!(matches!(
		encode_single("flag", &Value::Bool(true)),
		Err(eth_abi::Error::Registry(Error::MalformedTypeString { .. }))
	));

	default_registry().write().register(
		"flag",
		Coder::encoder_fn(encode_flag),
		Coder::decoder_fn(decode_flag),
		None,
	)?;
	let encoded = encode_single("flag", &Value::Bool(true))?;
	assert_eq!(encoded, vec![1; 32]);
	assert_eq!(decode_single("flag", &encoded)?, Value::Bool(true));
	assert!(!is_encodable("flag", &Value::uint(1u8))?);

	default_registry().write().unregister("flag")?;
	assert!(encode_single("flag", &Value::Bool(true)).is_err());
	Ok(())
}

#[test]
fn should_resolve_while_other_threads_mutate() -> anyhow::Result<()> {
	init();
	thread::scope(|s| {
		let writer = s.spawn(|| -> Result<(), Error> {
			for _ in 0..50 {
				let mut registry = default_registry().write();
				registry.register_encoder(Predicate::equals("toggle"), Coder::encoder_fn(encode_flag), Some("toggle"))?;
				drop(registry);
				default_registry().write().unregister_encoder("toggle")?;
			}
			Ok(())
		});

		let readers: Vec<_> = (0..4)
			.map(|i| {
				s.spawn(move || -> anyhow::Result<()> {
					for n in 0..200u32 {
						let value = Value::uint(n + i);
						let encoded = encode_single("uint32", &value)?;
						assert_eq!(decode_single("uint32", &encoded)?, value);
					}
					Ok(())
				})
			})
			.collect();

		writer.join().expect("writer thread panicked")?;
		for reader in readers {
			reader.join().expect("reader thread panicked")?;
		}
		Ok(())
	})
}
