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

use crate::{AbiType, BasicType, Dimension, ParseError, Sub, TupleType, BASE_TYPES};
use onig::Regex;
use std::sync::OnceLock;

/// Deepest tuple nesting [`parse`] accepts.
pub const MAX_DEPTH: usize = 64;

/// Match a basic type declaration like `bytes32[][2]`
///
/// # Note
/// captures may be indexed via Captures<'a>::at(pos: usize)
/// 1 is the base name, 2 the optional sub, 3 the (possibly empty) array list
fn basic_type_decl() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"\A([a-z]+)([0-9]+(?:x[0-9]+)?)?((?:\[[0-9]*\])*)\z")
			.expect("Regex expression should be infallible; qed")
	})
}

/// Match a list of array dimensions, including the empty list
fn arrlist_decl() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"\A(?:\[[0-9]*\])*\z").expect("Regex expression should be infallible; qed"))
}

/// Only captures a single dimension,
/// need to use `captures_iter` to get all of them
fn dimension_decl() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| Regex::new(r"\[([0-9]*)\]").expect("Regex expression should be infallible; qed"))
}

/// Match the shorthand names that have a canonical long form
fn shorthand_decl() -> &'static Regex {
	static RE: OnceLock<Regex> = OnceLock::new();
	RE.get_or_init(|| {
		Regex::new(r"\b(?:uint|int|ufixed|fixed|function)\b").expect("Regex expression should be infallible; qed")
	})
}

/// Parse a type string into an [`AbiType`].
pub fn parse(type_str: &str) -> Result<AbiType, ParseError> {
	log::trace!("parsing type string {}", type_str);
	if nesting_depth(type_str) > MAX_DEPTH {
		return Err(ParseError::TooDeep { type_str: type_str.to_string(), max: MAX_DEPTH });
	}
	parse_nested(type_str)
}

/// Deepest level of open parentheses anywhere in `s`.
fn nesting_depth(s: &str) -> usize {
	let (mut depth, mut max) = (0usize, 0);
	for c in s.chars() {
		match c {
			'(' => {
				depth += 1;
				max = max.max(depth);
			}
			')' => depth = depth.saturating_sub(1),
			_ => {}
		}
	}
	max
}

fn parse_nested(type_str: &str) -> Result<AbiType, ParseError> {
	if type_str.is_empty() {
		return Err(ParseError::Empty);
	}

	if type_str.starts_with('(') {
		parse_tuple(type_str).map(AbiType::Tuple)
	} else {
		parse_basic(type_str).map(AbiType::Basic)
	}
}

/// Expands shorthand names into their canonical form,
/// ie `(uint,function)[]` becomes `(uint256,bytes24)[]`
pub fn normalize(type_str: &str) -> String {
	let re = shorthand_decl();
	let mut normalized = String::with_capacity(type_str.len());
	let mut last = 0;
	for (start, end) in re.find_iter(type_str) {
		normalized.push_str(&type_str[last..start]);
		normalized.push_str(match &type_str[start..end] {
			"uint" => "uint256",
			"int" => "int256",
			"ufixed" => "ufixed128x18",
			"fixed" => "fixed128x18",
			"function" => "bytes24",
			other => other,
		});
		last = end;
	}
	normalized.push_str(&type_str[last..]);
	normalized
}

fn parse_basic(s: &str) -> Result<BasicType, ParseError> {
	let re = basic_type_decl();
	let caps = re.captures(s).ok_or_else(|| ParseError::Invalid(s.to_string()))?;
	let base = caps.at(1).ok_or_else(|| ParseError::Invalid(s.to_string()))?;
	if !BASE_TYPES.contains(&base) {
		return Err(ParseError::UnknownBase(base.to_string()));
	}

	let sub = caps.at(2).map(parse_sub).transpose()?;
	let arrlist = parse_arrlist(caps.at(3).unwrap_or_default())?;

	Ok(BasicType { base: base.to_string(), sub, arrlist })
}

fn parse_tuple(s: &str) -> Result<TupleType, ParseError> {
	let close = matching_paren(s)?;
	let inner = &s[1..close];
	let rest = &s[close + 1..];
	if !arrlist_decl().is_match(rest) {
		return Err(ParseError::Invalid(s.to_string()));
	}

	let components = if inner.is_empty() {
		Vec::new()
	} else {
		split_components(s, inner)?.into_iter().map(parse_nested).collect::<Result<Vec<_>, _>>()?
	};

	Ok(TupleType { components, arrlist: parse_arrlist(rest)? })
}

/// Index of the parenthesis closing the one `s` starts with.
fn matching_paren(s: &str) -> Result<usize, ParseError> {
	let mut depth = 0usize;
	for (i, c) in s.char_indices() {
		match c {
			'(' => depth += 1,
			')' => {
				depth -= 1;
				if depth == 0 {
					return Ok(i);
				}
			}
			_ => {}
		}
	}
	Err(ParseError::Unbalanced(s.to_string()))
}

/// Split the inside of a tuple on its top level commas.
fn split_components<'a>(s: &str, inner: &'a str) -> Result<Vec<&'a str>, ParseError> {
	let mut components = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (i, c) in inner.char_indices() {
		match c {
			'(' => depth += 1,
			')' => depth = depth.checked_sub(1).ok_or_else(|| ParseError::Unbalanced(s.to_string()))?,
			',' if depth == 0 => {
				components.push(&inner[start..i]);
				start = i + 1;
			}
			_ => {}
		}
	}
	components.push(&inner[start..]);

	if components.iter().any(|c| c.is_empty()) {
		return Err(ParseError::EmptyComponent(s.to_string()));
	}
	Ok(components)
}

fn parse_sub(s: &str) -> Result<Sub, ParseError> {
	match s.split_once('x') {
		Some((m, n)) => Ok(Sub::Fixed(parse_number(m)?, parse_number(n)?)),
		None => Ok(Sub::Size(parse_number(s)?)),
	}
}

fn parse_arrlist(s: &str) -> Result<Vec<Dimension>, ParseError> {
	let re = dimension_decl();
	re.captures_iter(s)
		.map(|caps| match caps.at(1) {
			Some(size) if !size.is_empty() => parse_number(size).map(Some),
			_ => Ok(None),
		})
		.collect()
}

// sizes are written without leading zeros, so `[0]` and `uint08` never parse
fn parse_number(s: &str) -> Result<usize, ParseError> {
	if s.starts_with('0') {
		return Err(ParseError::Number(s.to_string()));
	}
	s.parse::<usize>().map_err(|_| ParseError::Number(s.to_string()))
}
