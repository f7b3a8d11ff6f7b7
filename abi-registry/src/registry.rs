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

use crate::{Coder, Decode, Encode, Error, Lookup, Predicate, PredicateMapping};
use parking_lot::RwLock;
use std::{collections::HashMap, fmt, sync::Arc};

/// An encoder as handed out by the registry.
pub type EncoderRef = Arc<dyn Encode>;
/// A decoder as handed out by the registry.
pub type DecoderRef = Arc<dyn Decode>;

type Cache<T> = RwLock<HashMap<String, Arc<T>>>;

/// Registry of encoders and decoders, each keyed on a [`Predicate`] over type strings.
///
/// Resolved coders are cached per type string. Registering or removing an encoder clears the
/// encoder cache, and the same goes for decoders; failed registrations leave the caches alone.
/// Failed resolutions are never cached.
///
/// Mutation needs `&mut self`. To share a registry that is still being changed, wrap it in a lock
/// that covers both the change and the cache invalidation, as `eth_abi::default_registry` does.
pub struct AbiRegistry {
	encoders: PredicateMapping<Coder<dyn Encode>>,
	decoders: PredicateMapping<Coder<dyn Decode>>,
	encoder_cache: Cache<dyn Encode>,
	decoder_cache: Cache<dyn Decode>,
}

impl AbiRegistry {
	/// An empty registry.
	pub fn new() -> Self {
		Self {
			encoders: PredicateMapping::new("encoder registry"),
			decoders: PredicateMapping::new("decoder registry"),
			encoder_cache: RwLock::new(HashMap::new()),
			decoder_cache: RwLock::new(HashMap::new()),
		}
	}

	pub fn encoders(&self) -> &PredicateMapping<Coder<dyn Encode>> {
		&self.encoders
	}

	pub fn decoders(&self) -> &PredicateMapping<Coder<dyn Decode>> {
		&self.decoders
	}

	/// Register `encoder` under `lookup`.
	///
	/// A type string lookup is registered as [`Predicate::Equals`] and labelled with the type
	/// string itself, so it can always be removed by that string; `label` is ignored in that case.
	pub fn register_encoder(
		&mut self,
		lookup: impl Into<Lookup>,
		encoder: Coder<dyn Encode>,
		label: Option<&str>,
	) -> Result<(), Error> {
		register_coder(&mut self.encoders, lookup.into(), encoder, label)?;
		self.encoder_cache.get_mut().clear();
		Ok(())
	}

	/// Register `decoder` under `lookup`. See [`register_encoder`](Self::register_encoder).
	pub fn register_decoder(
		&mut self,
		lookup: impl Into<Lookup>,
		decoder: Coder<dyn Decode>,
		label: Option<&str>,
	) -> Result<(), Error> {
		register_coder(&mut self.decoders, lookup.into(), decoder, label)?;
		self.decoder_cache.get_mut().clear();
		Ok(())
	}

	/// Register an encoder and a decoder under the same lookup and label.
	///
	/// # Note
	/// The two sides are registered one after the other. If the decoder cannot be registered,
	/// the encoder registration stays in place.
	pub fn register(
		&mut self,
		lookup: impl Into<Lookup>,
		encoder: Coder<dyn Encode>,
		decoder: Coder<dyn Decode>,
		label: Option<&str>,
	) -> Result<(), Error> {
		let lookup = lookup.into();
		self.register_encoder(lookup.clone(), encoder, label)?;
		self.register_decoder(lookup, decoder, label)
	}

	/// Remove an encoder by label (given a type string) or by equality (given a predicate).
	pub fn unregister_encoder(&mut self, lookup_or_label: impl Into<Lookup>) -> Result<(), Error> {
		unregister_coder(&mut self.encoders, lookup_or_label.into())?;
		self.encoder_cache.get_mut().clear();
		Ok(())
	}

	/// Remove a decoder by label (given a type string) or by equality (given a predicate).
	pub fn unregister_decoder(&mut self, lookup_or_label: impl Into<Lookup>) -> Result<(), Error> {
		unregister_coder(&mut self.decoders, lookup_or_label.into())?;
		self.decoder_cache.get_mut().clear();
		Ok(())
	}

	/// Remove the encoder and the decoder labelled `label`.
	///
	/// # Note
	/// Like [`register`](Self::register) this is not atomic: if no decoder carries the label,
	/// the encoder has already been removed when the error is returned.
	pub fn unregister(&mut self, label: &str) -> Result<(), Error> {
		if label.is_empty() {
			return Err(Error::InvalidRemovalKey);
		}
		self.unregister_encoder(label)?;
		self.unregister_decoder(label)
	}

	/// The encoder for `type_str`.
	pub fn get_encoder(&self, type_str: &str) -> Result<EncoderRef, Error> {
		self.resolve(&self.encoders, &self.encoder_cache, type_str)
	}

	/// The decoder for `type_str`.
	pub fn get_decoder(&self, type_str: &str) -> Result<DecoderRef, Error> {
		self.resolve(&self.decoders, &self.decoder_cache, type_str)
	}

	pub fn has_encoder(&self, type_str: &str) -> bool {
		self.get_encoder(type_str).is_ok()
	}

	pub fn has_decoder(&self, type_str: &str) -> bool {
		self.get_decoder(type_str).is_ok()
	}

	fn resolve<T: ?Sized>(
		&self,
		mapping: &PredicateMapping<Coder<T>>,
		cache: &Cache<T>,
		type_str: &str,
	) -> Result<Arc<T>, Error> {
		if let Some(coder) = cache.read().get(type_str) {
			log::trace!("'{}' found in {} cache", type_str, mapping.name());
			return Ok(Arc::clone(coder));
		}

		let coder = match mapping.find(type_str) {
			Ok(coder) => coder,
			Err(err @ Error::NoMatchingCoder { .. }) => {
				// a string that does not parse is reported as such, not as a missing coder
				if let Err(source) = abi_grammar::parse(type_str) {
					return Err(Error::malformed(type_str, source));
				}
				return Err(err);
			}
			Err(err) => return Err(err),
		};

		// the cache lock is not held here, factories resolve their element types through `self`
		let resolved = match coder {
			Coder::Direct(coder) => Arc::clone(coder),
			Coder::Factory(build) => build(type_str, self)?,
		};
		log::debug!("Resolved '{}' in {}", type_str, mapping.name());

		let mut cache = cache.write();
		Ok(Arc::clone(cache.entry(type_str.to_string()).or_insert(resolved)))
	}
}

fn register_coder<T: ?Sized>(
	mapping: &mut PredicateMapping<Coder<T>>,
	lookup: Lookup,
	coder: Coder<T>,
	label: Option<&str>,
) -> Result<(), Error> {
	if label == Some("") {
		return Err(Error::InvalidLookupType);
	}

	let description = lookup.to_string();
	match lookup {
		Lookup::Predicate(predicate) => mapping.add(predicate, coder, label.map(str::to_string))?,
		Lookup::TypeStr(type_str) if type_str.is_empty() => return Err(Error::InvalidLookupType),
		Lookup::TypeStr(type_str) => {
			if let Some(label) = label.filter(|label| *label != type_str) {
				log::warn!(
					"Ignoring label '{}', the type string '{}' labels its own registration",
					label,
					type_str
				);
			}
			mapping.add(Predicate::Equals(type_str.clone()), coder, Some(type_str))?
		}
	}

	log::debug!("Registered {} in {}", description, mapping.name());
	Ok(())
}

fn unregister_coder<T: ?Sized>(mapping: &mut PredicateMapping<Coder<T>>, lookup_or_label: Lookup) -> Result<(), Error> {
	let description = lookup_or_label.to_string();
	mapping.remove(lookup_or_label)?;
	log::debug!("Unregistered {} from {}", description, mapping.name());
	Ok(())
}

impl Default for AbiRegistry {
	fn default() -> Self {
		Self::new()
	}
}

/// Copies both mappings. The copy starts with empty caches.
impl Clone for AbiRegistry {
	fn clone(&self) -> Self {
		Self {
			encoders: self.encoders.clone(),
			decoders: self.decoders.clone(),
			encoder_cache: RwLock::new(HashMap::new()),
			decoder_cache: RwLock::new(HashMap::new()),
		}
	}
}

impl fmt::Debug for AbiRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AbiRegistry").field("encoders", &self.encoders).field("decoders", &self.decoders).finish()
	}
}
