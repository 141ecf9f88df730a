/*!
# Argline: Values.

This module holds the typed [`Value`] produced for each argument, the
[`ValueKind`] tags used to pick a converter, and the [`TypeRegistry`] that
maps one to the other.
*/

use crate::{
	ArgParser,
	ArgSpec,
	Scanner,
};
use std::{
	borrow::Cow,
	collections::BTreeMap,
	fmt,
	path::{
		Path,
		PathBuf,
	},
};



#[derive(Debug, Clone, PartialEq)]
/// # Parsed Value.
pub enum Value {
	/// # Boolean.
	Bool(bool),

	/// # Integer.
	Int(i64),

	/// # Float.
	Float(f64),

	/// # String.
	Str(String),

	/// # Path.
	Path(PathBuf),
}

impl From<bool> for Value {
	#[inline]
	fn from(src: bool) -> Self { Self::Bool(src) }
}

impl From<i64> for Value {
	#[inline]
	fn from(src: i64) -> Self { Self::Int(src) }
}

impl From<f64> for Value {
	#[inline]
	fn from(src: f64) -> Self { Self::Float(src) }
}

impl From<&str> for Value {
	#[inline]
	fn from(src: &str) -> Self { Self::Str(src.to_owned()) }
}

impl From<String> for Value {
	#[inline]
	fn from(src: String) -> Self { Self::Str(src) }
}

impl From<PathBuf> for Value {
	#[inline]
	fn from(src: PathBuf) -> Self { Self::Path(src) }
}

impl Value {
	#[must_use]
	/// # As Bool.
	pub const fn as_bool(&self) -> Option<bool> {
		if let Self::Bool(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Integer.
	pub const fn as_int(&self) -> Option<i64> {
		if let Self::Int(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As Float.
	pub const fn as_float(&self) -> Option<f64> {
		if let Self::Float(v) = self { Some(*v) } else { None }
	}

	#[must_use]
	/// # As String Slice.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::Str(v) = self { Some(v.as_str()) } else { None }
	}

	#[must_use]
	/// # As Path.
	///
	/// Strings are accepted too, since defaults are often written that way.
	pub fn as_path(&self) -> Option<&Path> {
		match self {
			Self::Path(v) => Some(v.as_path()),
			Self::Str(v) => Some(Path::new(v)),
			_ => None,
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// # Value Kind.
///
/// The declared type of an argument, used to look up its converter. The
/// built-in kinds come with converters out of the box; `Custom` kinds need
/// one registered before they can be parsed.
pub enum ValueKind {
	/// # Boolean.
	Bool,

	/// # Integer (`i64`).
	Int,

	/// # Float (`f64`).
	Float,

	/// # String.
	Str,

	/// # Path.
	Path,

	/// # Custom.
	Custom(&'static str),
}

impl fmt::Display for ValueKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl ValueKind {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::Str => "string",
			Self::Path => "path",
			Self::Custom(s) => *s,
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Conversion Error.
pub enum ValueError {
	/// # Nothing to Read.
	Missing,

	/// # Bad Value.
	Invalid(Cow<'static, str>),

	/// # No Converter.
	UnknownType(ValueKind),
}

impl std::error::Error for ValueError {}

impl fmt::Display for ValueError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Missing => f.write_str("missing value"),
			Self::Invalid(s) => f.write_str(s),
			Self::UnknownType(k) => write!(f, "no parser for value type {k}"),
		}
	}
}

impl ValueError {
	#[must_use]
	/// # New Invalid.
	pub fn invalid<S>(msg: S) -> Self
	where S: Into<Cow<'static, str>> { Self::Invalid(msg.into()) }
}



/// # Value Converter.
///
/// A converter reads its value from the scanner, starting at the cursor, and
/// must leave the cursor just past whatever it consumed.
///
/// Any `Fn(&ArgParser, &ArgSpec, &mut Scanner) -> Result<Value, ValueError>`
/// closure is a converter.
pub trait Converter: Send + Sync {
	/// # Convert.
	///
	/// ## Errors
	///
	/// Returns an error if the text at the cursor is missing or unusable.
	fn convert(&self, parser: &ArgParser, spec: &ArgSpec, scanner: &mut Scanner)
	-> Result<Value, ValueError>;
}

impl<F> Converter for F
where F: Fn(&ArgParser, &ArgSpec, &mut Scanner) -> Result<Value, ValueError> + Send + Sync {
	#[inline]
	fn convert(&self, parser: &ArgParser, spec: &ArgSpec, scanner: &mut Scanner)
	-> Result<Value, ValueError> {
		self(parser, spec, scanner)
	}
}



/// # Type Registry.
///
/// Converters by [`ValueKind`]. The default instance is pre-loaded with the
/// built-in kinds; [`TypeRegistry::empty`] starts from nothing.
pub struct TypeRegistry {
	/// # Converters.
	types: BTreeMap<ValueKind, Box<dyn Converter>>,
}

impl fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.types.keys()).finish()
	}
}

impl Default for TypeRegistry {
	fn default() -> Self {
		let mut out = Self::empty();
		out.define(ValueKind::Bool, convert_bool);
		out.define(ValueKind::Int, convert_int);
		out.define(ValueKind::Float, convert_float);
		out.define(ValueKind::Str, convert_str);
		out.define(ValueKind::Path, convert_path);
		out
	}
}

impl TypeRegistry {
	#[must_use]
	/// # Empty.
	pub const fn empty() -> Self {
		Self { types: BTreeMap::new() }
	}

	/// # Define.
	///
	/// Register a converter for `kind`, replacing any previous one.
	pub fn define<C>(&mut self, kind: ValueKind, converter: C)
	where C: Converter + 'static {
		self.types.insert(kind, Box::new(converter));
	}

	#[must_use]
	/// # Contains?
	pub fn contains(&self, kind: ValueKind) -> bool { self.types.contains_key(&kind) }

	/// # Parse.
	///
	/// Convert the text at the scanner's cursor according to the argument's
	/// declared kind.
	///
	/// ## Errors
	///
	/// Returns [`ValueError::UnknownType`] if there is no converter for the
	/// kind, otherwise whatever the converter itself returns.
	pub fn parse(&self, parser: &ArgParser, spec: &ArgSpec, scanner: &mut Scanner)
	-> Result<Value, ValueError> {
		let kind = spec.kind();
		self.types.get(&kind)
			.ok_or(ValueError::UnknownType(kind))?
			.convert(parser, spec, scanner)
	}
}



/// # Read Token.
///
/// Skip leading whitespace, then read either a bare run of non-whitespace or
/// a single- or double-quoted run. Within quotes, a backslash escapes the
/// character after it.
///
/// This is what the built-in converters use, and is public so custom
/// converters can share the same boundaries.
///
/// ## Errors
///
/// Returns [`ValueError::Missing`] at the end of input, or
/// [`ValueError::Invalid`] for an unterminated quote.
pub fn read_token(scanner: &mut Scanner) -> Result<String, ValueError> {
	scanner.skip_while(char::is_whitespace);
	match scanner.current() {
		None => Err(ValueError::Missing),
		Some(q @ ('\'' | '"')) => {
			let mut out = String::new();
			scanner.advance(1);
			loop {
				match scanner.current() {
					None => return Err(ValueError::invalid("unterminated quote")),
					Some(c) if c == q => {
						scanner.advance(1);
						return Ok(out);
					},
					Some('\\') => {
						if let Some(c) = scanner.advance(1) {
							out.push(c);
							scanner.advance(1);
						}
					},
					Some(c) => {
						out.push(c);
						scanner.advance(1);
					},
				}
			}
		},
		Some(_) => Ok(scanner.collect_while(|c| ! c.is_whitespace())),
	}
}

/// # Convert: Bool.
fn convert_bool(_: &ArgParser, _: &ArgSpec, scanner: &mut Scanner)
-> Result<Value, ValueError> {
	let raw = read_token(scanner)?;
	match raw.to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(Value::Bool(true)),
		"0" | "false" | "no" | "off" => Ok(Value::Bool(false)),
		_ => Err(ValueError::invalid(format!("{raw:?} is not a boolean"))),
	}
}

/// # Convert: Integer.
fn convert_int(_: &ArgParser, _: &ArgSpec, scanner: &mut Scanner)
-> Result<Value, ValueError> {
	let raw = read_token(scanner)?;
	raw.parse::<i64>()
		.map(Value::Int)
		.map_err(|e| ValueError::invalid(format!("{raw:?}: {e}")))
}

/// # Convert: Float.
fn convert_float(_: &ArgParser, _: &ArgSpec, scanner: &mut Scanner)
-> Result<Value, ValueError> {
	let raw = read_token(scanner)?;
	raw.parse::<f64>()
		.map(Value::Float)
		.map_err(|e| ValueError::invalid(format!("{raw:?}: {e}")))
}

/// # Convert: String.
fn convert_str(_: &ArgParser, _: &ArgSpec, scanner: &mut Scanner)
-> Result<Value, ValueError> {
	read_token(scanner).map(Value::Str)
}

/// # Convert: Path.
///
/// Backslash separators are normalized to forward slashes.
fn convert_path(_: &ArgParser, _: &ArgSpec, scanner: &mut Scanner)
-> Result<Value, ValueError> {
	let raw = read_token(scanner)?;
	if raw.is_empty() { return Err(ValueError::Missing); }
	Ok(Value::Path(PathBuf::from(raw.replace('\\', "/"))))
}
