/*!
# Argline: Argument Specifications.
*/

use crate::{
	ArgParser,
	Value,
	ValueKind,
};
use std::{
	fmt,
	sync::Arc,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Positional Placement.
pub enum Position {
	/// # Append.
	///
	/// Insert at the end of the positional list as it stands at the time of
	/// registration.
	Append,

	/// # At Index.
	///
	/// Non-negative values are indices; negative values are offsets from the
	/// end of the positional list as it stands at the time of registration.
	At(isize),
}

impl Position {
	#[must_use]
	/// # Insertion Index.
	///
	/// Resolve the placement against a list currently holding `len` entries.
	/// The result is always a valid insertion index, i.e. `0..=len`.
	///
	/// A negative offset that reaches past the start of the list wraps from
	/// the end once more before being floored at zero, the same way list
	/// insertion with a negative index behaves in most scripting languages.
	///
	/// ## Examples
	///
	/// ```
	/// use argline::Position;
	///
	/// assert_eq!(Position::Append.index(3), 3);
	/// assert_eq!(Position::At(0).index(3), 0);
	/// assert_eq!(Position::At(-1).index(3), 2);
	///
	/// // One step too far wraps around again.
	/// assert_eq!(Position::At(-4).index(3), 2);
	///
	/// // Anything further is clamped.
	/// assert_eq!(Position::At(9).index(3), 3);
	/// assert_eq!(Position::At(-9).index(3), 0);
	/// ```
	pub fn index(self, len: usize) -> usize {
		match self {
			Self::Append => len,
			Self::At(pos) if pos < 0 => {
				let len = isize::try_from(len).unwrap_or(isize::MAX);
				let mut idx = len.saturating_add(pos);
				if idx < 0 { idx = idx.saturating_add(len); }
				usize::try_from(idx).unwrap_or(0)
			},
			Self::At(pos) => pos.unsigned_abs().min(len),
		}
	}
}

/// # Resolve Positional Order.
///
/// Replay the registration sequence, inserting each entry at the index its
/// placement resolves to *at that moment*. Final order therefore depends on
/// registration order, not just on the declared positions.
pub(crate) fn positional_order<T, I>(src: I) -> Vec<T>
where I: IntoIterator<Item=(T, Position)> {
	let mut out = Vec::new();
	for (v, pos) in src {
		let idx = pos.index(out.len());
		out.insert(idx, v);
	}
	out
}



/// # Switch Handler.
///
/// Switches produce a value without reading any input. Any
/// `Fn(&ArgParser, &ArgSpec) -> Value` closure is a switch handler.
pub trait Switch: Send + Sync {
	/// # Invoke.
	fn invoke(&self, parser: &ArgParser, spec: &ArgSpec) -> Value;
}

impl<F> Switch for F
where F: Fn(&ArgParser, &ArgSpec) -> Value + Send + Sync {
	#[inline]
	fn invoke(&self, parser: &ArgParser, spec: &ArgSpec) -> Value { self(parser, spec) }
}



#[derive(Clone)]
/// # Argument Specification.
///
/// Every argument is exactly one of:
/// * A named value: `--name value`, `--name=value`, or `-cvalue`;
/// * A named switch: `--name` or `-c`, consuming nothing;
/// * A positional value, identified by its place among the non-flag tokens.
///
/// ## Examples
///
/// ```
/// use argline::{ArgSpec, Position, Value, ValueKind};
///
/// let file = ArgSpec::named("file", Some('F'), ValueKind::Path)
///     .with_default(Value::from("./module.json"));
/// let verbose = ArgSpec::flag("verbose", Some('v'));
/// let target = ArgSpec::positional("target", ValueKind::Str);
/// let first = ArgSpec::positional_at("mode", ValueKind::Str, 0);
///
/// assert!(verbose.is_switch());
/// assert_eq!(target.position(), Some(Position::Append));
/// assert_eq!(first.position(), Some(Position::At(0)));
/// ```
pub struct ArgSpec {
	/// # Name.
	name: &'static str,

	/// # Short Alias.
	short: Option<char>,

	/// # Declared Type.
	kind: ValueKind,

	/// # Switch Handler.
	switch: Option<Arc<dyn Switch>>,

	/// # Placement.
	position: Option<Position>,

	/// # Default Value.
	default: Option<Value>,
}

impl fmt::Debug for ArgSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ArgSpec")
			.field("name", &self.name)
			.field("short", &self.short)
			.field("kind", &self.kind)
			.field("switch", &self.switch.is_some())
			.field("position", &self.position)
			.field("default", &self.default)
			.finish()
	}
}

impl ArgSpec {
	#[must_use]
	/// # New Named Value.
	pub const fn named(name: &'static str, short: Option<char>, kind: ValueKind) -> Self {
		Self {
			name,
			short,
			kind,
			switch: None,
			position: None,
			default: None,
		}
	}

	#[must_use]
	/// # New Positional (Appended).
	pub const fn positional(name: &'static str, kind: ValueKind) -> Self {
		Self {
			name,
			short: None,
			kind,
			switch: None,
			position: Some(Position::Append),
			default: None,
		}
	}

	#[must_use]
	/// # New Positional (At).
	///
	/// See [`Position::At`] for how `pos` is interpreted.
	pub const fn positional_at(name: &'static str, kind: ValueKind, pos: isize) -> Self {
		Self {
			name,
			short: None,
			kind,
			switch: None,
			position: Some(Position::At(pos)),
			default: None,
		}
	}

	#[must_use]
	/// # New Switch.
	///
	/// The handler's return value is stored whenever the switch appears. The
	/// `kind` still matters for the explicit `--name=value` form, which
	/// bypasses the handler and converts the value instead.
	pub fn switch<F>(name: &'static str, short: Option<char>, kind: ValueKind, handler: F)
	-> Self
	where F: Fn(&ArgParser, &ArgSpec) -> Value + Send + Sync + 'static {
		Self::with_handler(name, short, kind, handler)
	}

	#[must_use]
	/// # New Switch (Trait Object).
	///
	/// Same as [`ArgSpec::switch`], for handlers implementing [`Switch`]
	/// directly.
	pub fn with_handler<S>(name: &'static str, short: Option<char>, kind: ValueKind, handler: S)
	-> Self
	where S: Switch + 'static {
		Self {
			name,
			short,
			kind,
			switch: Some(Arc::new(handler)),
			position: None,
			default: None,
		}
	}

	#[must_use]
	/// # New Boolean Flag.
	///
	/// A [`ValueKind::Bool`] switch that yields `true`.
	pub fn flag(name: &'static str, short: Option<char>) -> Self {
		Self::switch(name, short, ValueKind::Bool, |_: &ArgParser, _: &ArgSpec| Value::Bool(true))
	}

	#[must_use]
	/// # With Default.
	///
	/// Set the value used by [`ArgParser::defaults`] when the argument is
	/// never mentioned.
	pub fn with_default(mut self, value: Value) -> Self {
		self.default.replace(value);
		self
	}
}

impl ArgSpec {
	#[must_use]
	/// # Name.
	pub const fn name(&self) -> &'static str { self.name }

	#[must_use]
	/// # Short Alias.
	pub const fn short(&self) -> Option<char> { self.short }

	#[must_use]
	/// # Declared Type.
	pub const fn kind(&self) -> ValueKind { self.kind }

	#[must_use]
	/// # Placement.
	pub const fn position(&self) -> Option<Position> { self.position }

	#[must_use]
	/// # Default Value.
	pub const fn default_value(&self) -> Option<&Value> { self.default.as_ref() }

	#[must_use]
	/// # Is Switch?
	pub const fn is_switch(&self) -> bool { self.switch.is_some() }

	#[must_use]
	/// # Is Positional?
	pub const fn is_positional(&self) -> bool { self.position.is_some() }

	/// # Invoke Switch.
	///
	/// Returns `None` if this isn't a switch.
	pub(crate) fn invoke(&self, parser: &ArgParser) -> Option<Value> {
		self.switch.as_ref().map(|s| s.invoke(parser, self))
	}
}
