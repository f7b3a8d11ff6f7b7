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

use crate::{Error, Lookup, Predicate};
use indexmap::IndexMap;
use std::collections::HashMap;

/// Maps predicates to values. A value is found when its predicate matches the queried type
/// string, and exactly one predicate may match. Predicates may be labelled to remove them by name.
///
/// Every label refers to a predicate in the mapping; all changes to the two indices go through
/// [`insert`](Self::insert) and [`take`](Self::take).
#[derive(Debug, Clone)]
pub struct PredicateMapping<V> {
	name: &'static str,
	values: IndexMap<Predicate, V>,
	labeled_predicates: HashMap<String, Predicate>,
}

impl<V> PredicateMapping<V> {
	pub fn new(name: &'static str) -> Self {
		Self { name, values: IndexMap::new(), labeled_predicates: HashMap::new() }
	}

	/// Name used in error messages, ie `encoder registry`.
	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Registered predicates, in insertion order.
	pub fn predicates(&self) -> impl Iterator<Item = &Predicate> {
		self.values.keys()
	}

	pub fn label_for(&self, predicate: &Predicate) -> Option<&str> {
		self.labeled_predicates.iter().find(|(_, p)| *p == predicate).map(|(label, _)| label.as_str())
	}

	/// Add `value` under `predicate`, optionally labelled.
	/// Nothing is inserted if the predicate or the label already exist.
	pub fn add(&mut self, predicate: Predicate, value: V, label: Option<String>) -> Result<(), Error> {
		if self.values.contains_key(&predicate) {
			return Err(Error::DuplicatePredicate { predicate, registry: self.name });
		}

		if let Some(label) = &label {
			if self.labeled_predicates.contains_key(label) {
				return Err(Error::DuplicateLabel { predicate, label: label.clone(), registry: self.name });
			}
		}

		self.insert(predicate, value, label);
		Ok(())
	}

	/// The value whose predicate matches `type_str`. It is an error if none or several match.
	pub fn find(&self, type_str: &str) -> Result<&V, Error> {
		let results: Vec<(&Predicate, &V)> = self
			.values
			.iter()
			.filter(|(predicate, _)| {
				let matched = predicate.matches(type_str);
				log::trace!("{:?} matches '{}': {}", predicate, type_str, matched);
				matched
			})
			.collect();

		match results.as_slice() {
			[] => Err(Error::NoMatchingCoder { type_str: type_str.to_string(), registry: self.name }),
			[(_, value)] => Ok(*value),
			_ => Err(Error::AmbiguousMatch {
				type_str: type_str.to_string(),
				registry: self.name,
				predicates: results.iter().map(|(predicate, _)| (*predicate).clone()).collect(),
			}),
		}
	}

	/// Remove the entry whose predicate equals `predicate`, along with its label.
	pub fn remove_by_equality(&mut self, predicate: &Predicate) -> Result<V, Error> {
		if !self.values.contains_key(predicate) {
			return Err(Error::PredicateNotFound { predicate: predicate.clone(), registry: self.name });
		}
		Ok(self.take(predicate))
	}

	/// Remove the entry labelled `label`.
	pub fn remove_by_label(&mut self, label: &str) -> Result<V, Error> {
		let predicate = match self.labeled_predicates.get(label) {
			Some(predicate) => predicate.clone(),
			None => return Err(Error::LabelNotFound { label: label.to_string(), registry: self.name }),
		};
		Ok(self.take(&predicate))
	}

	/// Remove by label if given a type string, by equality if given a predicate.
	pub fn remove(&mut self, key: Lookup) -> Result<V, Error> {
		match key {
			Lookup::Predicate(predicate) => self.remove_by_equality(&predicate),
			Lookup::TypeStr(label) if label.is_empty() => Err(Error::InvalidRemovalKey),
			Lookup::TypeStr(label) => self.remove_by_label(&label),
		}
	}

	fn insert(&mut self, predicate: Predicate, value: V, label: Option<String>) {
		if let Some(label) = label {
			self.labeled_predicates.insert(label, predicate.clone());
		}
		self.values.insert(predicate, value);
	}

	// caller checked that `predicate` is present
	fn take(&mut self, predicate: &Predicate) -> V {
		self.labeled_predicates.retain(|_, p| p != predicate);
		let (_, value) = self.values.shift_remove_entry(predicate).expect("presence checked by caller; qed");
		value
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn mapping() -> PredicateMapping<u32> {
		let mut mapping = PredicateMapping::new("test registry");
		mapping.add(Predicate::base("uint"), 1, Some("uint".into())).unwrap();
		mapping.add(Predicate::base("int"), 2, None).unwrap();
		mapping.add(Predicate::HasArrlist, 3, Some("array".into())).unwrap();
		mapping
	}

	#[test]
	fn should_find_single_match() {
		let mapping = mapping();
		assert_eq!(mapping.find("uint256"), Ok(&1));
		assert_eq!(mapping.find("int8"), Ok(&2));
		assert_eq!(mapping.find("uint256[]"), Ok(&3));
	}

	#[test]
	fn should_fail_on_no_match() {
		let err = mapping().find("bool").unwrap_err();
		assert_eq!(err, Error::NoMatchingCoder { type_str: "bool".into(), registry: "test registry" });
		assert_eq!(err.to_string(), "No matching entries for 'bool' in test registry");
	}

	#[test]
	fn should_name_every_match_when_ambiguous() {
		let mut mapping = mapping();
		mapping.add(Predicate::equals("uint256"), 4, None).unwrap();
		mapping.add(Predicate::custom("anything", |_| true), 5, None).unwrap();

		let err = mapping.find("uint256").unwrap_err();
		let Error::AmbiguousMatch { predicates, .. } = &err else { panic!("expected ambiguity, got {:?}", err) };
		assert_eq!(
			predicates,
			&vec![Predicate::base("uint"), Predicate::equals("uint256"), Predicate::custom("anything", |_| true)]
		);
		assert_eq!(
			err.to_string(),
			r#"Multiple matching entries for 'uint256' in test registry: <BaseEquals (base == "uint")>, <Equals (== "uint256")>, <Custom anything>"#
		);
	}

	#[test]
	fn should_reject_duplicate_predicate() {
		let mut mapping = mapping();
		let err = mapping.add(Predicate::base("uint"), 10, Some("other".into())).unwrap_err();
		assert!(matches!(err, Error::DuplicatePredicate { .. }));
		assert_eq!(mapping.find("uint8"), Ok(&1));
		assert_eq!(mapping.label_for(&Predicate::base("uint")), Some("uint"));
		// the label of the failed add was not installed
		assert!(mapping.remove_by_label("other").is_err());
	}

	#[test]
	fn should_reject_duplicate_label() {
		let mut mapping = mapping();
		let err = mapping.add(Predicate::base("bool"), 10, Some("uint".into())).unwrap_err();
		assert!(matches!(err, Error::DuplicateLabel { ref label, .. } if label == "uint"));
		assert_eq!(mapping.len(), 3);
		assert!(mapping.find("bool").is_err());
		assert_eq!(mapping.label_for(&Predicate::base("uint")), Some("uint"));
	}

	#[test]
	fn should_remove_by_equality_and_label() {
		let mut mapping = mapping();
		assert_eq!(mapping.remove_by_equality(&Predicate::base("uint")), Ok(1));
		assert!(mapping.remove_by_label("uint").is_err());
		assert!(mapping.find("uint8").is_err());

		assert_eq!(mapping.remove_by_label("array"), Ok(3));
		assert!(mapping.remove_by_equality(&Predicate::HasArrlist).is_err());
		assert_eq!(mapping.predicates().collect::<Vec<_>>(), vec![&Predicate::base("int")]);
	}

	#[test]
	fn should_remove_symmetrically() {
		let mut by_label = mapping();
		let mut by_predicate = mapping();
		by_label.remove(Lookup::from("array")).unwrap();
		by_predicate.remove(Lookup::from(Predicate::HasArrlist)).unwrap();

		assert_eq!(by_label.predicates().collect::<Vec<_>>(), by_predicate.predicates().collect::<Vec<_>>());
		assert_eq!(by_label.labeled_predicates, by_predicate.labeled_predicates);
	}

	#[test]
	fn should_fail_removing_missing_entries() {
		let mut mapping = mapping();
		assert_eq!(
			mapping.remove(Lookup::from("nope")),
			Err(Error::LabelNotFound { label: "nope".into(), registry: "test registry" })
		);
		assert!(matches!(mapping.remove(Lookup::from(Predicate::IsTupleType)), Err(Error::PredicateNotFound { .. })));
		assert_eq!(mapping.remove(Lookup::from("")), Err(Error::InvalidRemovalKey));
		assert_eq!(mapping.len(), 3);
	}

	#[test]
	fn should_keep_insertion_order_after_removal() {
		let mut mapping = mapping();
		mapping.remove_by_equality(&Predicate::base("int")).unwrap();
		mapping.add(Predicate::base("int"), 2, None).unwrap();
		let order: Vec<_> = mapping.predicates().cloned().collect();
		assert_eq!(order, vec![Predicate::base("uint"), Predicate::HasArrlist, Predicate::base("int")]);
	}
}
