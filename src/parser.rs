/*!
# Argline: Parser.
*/

use crate::{
	ArglineError,
	ArgSpec,
	Converter,
	read_token,
	Scanner,
	spec::positional_order,
	TypeRegistry,
	utility::join_args,
	Value,
	ValueError,
	ValueKind,
};
use std::{
	collections::BTreeMap,
	sync::OnceLock,
};



/// # Parsed Arguments.
///
/// Values keyed by argument name.
pub type ArgMap = BTreeMap<&'static str, Value>;



#[derive(Debug, Default)]
/// # Argument Parser.
///
/// `ArgParser` holds the argument specifications and value converters for a
/// program, and turns a single command line into an [`ArgMap`].
///
/// Arguments are declared upfront with the builder-style `with_*` methods.
/// Once declared, the parser is only ever borrowed immutably, so the same
/// instance can serve any number of [`ArgParser::parse`] calls, concurrent
/// or otherwise.
///
/// The syntax is:
/// * `--name value` or `--name=value` for named values;
/// * `--name` for named switches;
/// * `-a`, or several at once like `-abc`, for short switches;
/// * `-F123` or `-F 123` for a short value, optionally after a run of switches, e.g. `-abF123`;
/// * Anything else is positional.
///
/// ## Examples
///
/// ```
/// use argline::{ArgMap, ArgParser, ArgSpec, Value, ValueKind};
///
/// let parser = ArgParser::new()
///     .with_args([
///         ArgSpec::named("count", Some('c'), ValueKind::Int),
///         ArgSpec::flag("verbose", Some('v')),
///         ArgSpec::positional("target", ValueKind::Str),
///     ])
///     .unwrap();
///
/// let mut out = ArgMap::new();
/// parser.parse("-vc 3 engine", &mut out).unwrap();
///
/// assert_eq!(out.get("count"), Some(&Value::Int(3)));
/// assert_eq!(out.get("verbose"), Some(&Value::Bool(true)));
/// assert_eq!(out.get("target"), Some(&Value::from("engine")));
/// ```
pub struct ArgParser {
	/// # Specs by Name.
	by_name: BTreeMap<&'static str, ArgSpec>,

	/// # Names by Short Character.
	by_char: BTreeMap<char, &'static str>,

	/// # Positional Names in Registration Order.
	declared: Vec<&'static str>,

	/// # Positional Names in Final Order.
	positional: OnceLock<Vec<&'static str>>,

	/// # Value Converters.
	types: TypeRegistry,
}

impl ArgParser {
	#[must_use]
	/// # New.
	///
	/// Create an empty parser with the built-in value converters.
	pub fn new() -> Self { Self::default() }

	/// # Define.
	///
	/// Register an argument.
	///
	/// ## Errors
	///
	/// This will return an error if the name or short character was already
	/// taken. Nothing is registered in that case.
	pub fn define(&mut self, spec: ArgSpec) -> Result<(), ArglineError> {
		let name = spec.name();
		if self.by_name.contains_key(name) {
			return Err(ArglineError::DuplicateName(name));
		}
		if let Some(c) = spec.short() {
			if self.by_char.contains_key(&c) { return Err(ArglineError::DuplicateChar(c)); }
			self.by_char.insert(c, name);
		}
		if spec.is_positional() {
			self.declared.push(name);
			self.positional.take();
		}

		tracing::debug!(
			name,
			short = ?spec.short(),
			kind = %spec.kind(),
			switch = spec.is_switch(),
			position = ?spec.position(),
			"argument defined"
		);
		self.by_name.insert(name, spec);
		Ok(())
	}

	/// # Define Type.
	///
	/// Register (or replace) the converter for a value kind.
	pub fn define_type<C>(&mut self, kind: ValueKind, converter: C)
	where C: Converter + 'static {
		tracing::debug!(kind = %kind, "value type defined");
		self.types.define(kind, converter);
	}

	/// # With Argument.
	///
	/// Builder-style [`ArgParser::define`].
	///
	/// ## Errors
	///
	/// This will return an error if the name or short character was already
	/// taken.
	pub fn with_arg(mut self, spec: ArgSpec) -> Result<Self, ArglineError> {
		self.define(spec)?;
		Ok(self)
	}

	/// # With Arguments.
	///
	/// Register several arguments, in order.
	///
	/// ## Errors
	///
	/// This will return an error if any name or short character was already
	/// taken.
	pub fn with_args<I>(self, specs: I) -> Result<Self, ArglineError>
	where I: IntoIterator<Item=ArgSpec> {
		specs.into_iter().try_fold(self, Self::with_arg)
	}

	#[must_use]
	/// # With Type.
	///
	/// Register a converter closure for a value kind.
	///
	/// ## Examples
	///
	/// ```
	/// use argline::{ArgMap, ArgParser, ArgSpec, Value, ValueKind, read_token};
	///
	/// let parser = ArgParser::new()
	///     .with_type(ValueKind::Custom("upper"), |_, _, scanner| {
	///         read_token(scanner).map(|s| Value::Str(s.to_uppercase()))
	///     })
	///     .with_arg(ArgSpec::named("os", None, ValueKind::Custom("upper")))
	///     .unwrap();
	///
	/// let mut out = ArgMap::new();
	/// parser.parse("--os=linux", &mut out).unwrap();
	/// assert_eq!(out.get("os"), Some(&Value::from("LINUX")));
	/// ```
	pub fn with_type<F>(mut self, kind: ValueKind, converter: F) -> Self
	where F: Fn(&Self, &ArgSpec, &mut Scanner) -> Result<Value, ValueError> + Send + Sync + 'static {
		self.define_type(kind, converter);
		self
	}

	#[must_use]
	/// # With Converter.
	///
	/// Same as [`ArgParser::with_type`], for types implementing [`Converter`]
	/// directly.
	pub fn with_converter<C>(mut self, kind: ValueKind, converter: C) -> Self
	where C: Converter + 'static {
		self.define_type(kind, converter);
		self
	}
}

impl ArgParser {
	#[must_use]
	/// # Get Spec by Name.
	pub fn get(&self, name: &str) -> Option<&ArgSpec> { self.by_name.get(name) }

	#[must_use]
	/// # Get Spec by Short Character.
	pub fn get_char(&self, c: char) -> Option<&ArgSpec> {
		self.by_char.get(&c).and_then(|n| self.by_name.get(n))
	}

	#[must_use]
	/// # Value Converters.
	pub const fn types(&self) -> &TypeRegistry { &self.types }

	/// # Positional Order.
	///
	/// Return the positional argument names in the order they are matched.
	/// This is worked out once, on first use, from the registration
	/// sequence; see [`Position`](crate::Position) for the details.
	pub fn positionals(&self) -> &[&'static str] {
		self.positional.get_or_init(|| {
			let out = positional_order(
				self.declared.iter().filter_map(|n|
					self.by_name.get(n).and_then(|s| s.position().map(|p| (*n, p)))
				)
			);
			tracing::trace!(order = ?out, "positional order resolved");
			out
		})
	}

	#[must_use]
	/// # Defaults.
	///
	/// Return a map holding every declared default value.
	pub fn defaults(&self) -> ArgMap {
		self.by_name.iter()
			.filter_map(|(k, v)| v.default_value().map(|d| (*k, d.clone())))
			.collect()
	}
}

impl ArgParser {
	/// # Parse.
	///
	/// Parse `src`, writing a value into `out` for each argument matched.
	/// Entries already in `out` are left alone unless the argument turns up,
	/// so it can be pre-seeded with defaults.
	///
	/// ## Errors
	///
	/// Parsing stops at the first error. Anything written to `out` before
	/// then stays written, so the map should be discarded rather than
	/// trusted.
	pub fn parse(&self, src: &str, out: &mut ArgMap) -> Result<(), ArglineError> {
		let mut scanner = Scanner::new(src);
		let positionals = self.positionals();
		let mut next_pos = 0;

		while ! scanner.is_done() {
			scanner.skip_while(char::is_whitespace);
			let Some(c) = scanner.current() else { break; };

			// Flags.
			if c == '-' {
				// Long.
				if scanner.advance(1) == Some('-') {
					scanner.advance(1);
					let name = scanner.collect_while(|c| c != ' ' && c != '=');
					let spec = self.get(&name)
						.ok_or(ArglineError::UnknownNamedArgument(name))?;

					let value =
						if ! spec.is_switch() || scanner.current() == Some('=') {
							scanner.advance(1);
							self.parse_value(spec, &mut scanner)?
						}
						else { self.invoke_switch(spec) };

					out.insert(spec.name(), value);
				}
				// Short.
				else {
					while let Some(c) = scanner.current() {
						if c.is_whitespace() { break; }
						let spec = self.get_char(c)
							.ok_or(ArglineError::UnknownCharArgument(c))?;

						// A value ends the run; whatever follows is the
						// value's problem.
						if ! spec.is_switch() {
							scanner.advance(1);
							let value = self.parse_value(spec, &mut scanner)?;
							out.insert(spec.name(), value);
							break;
						}

						out.insert(spec.name(), self.invoke_switch(spec));
						scanner.advance(1);
					}
				}
			}
			// Positional.
			else {
				let spec = positionals.get(next_pos)
					.and_then(|n| self.get(n))
					.ok_or_else(|| ArglineError::MissingPositionalArgument(peek_token(&scanner)))?;
				next_pos += 1;
				let value = self.parse_value(spec, &mut scanner)?;
				out.insert(spec.name(), value);
			}
		}

		Ok(())
	}

	/// # Parse With Defaults.
	///
	/// Same as [`ArgParser::parse`], but into a fresh map seeded with
	/// [`ArgParser::defaults`].
	///
	/// ## Errors
	///
	/// See [`ArgParser::parse`].
	pub fn parse_with_defaults(&self, src: &str) -> Result<ArgMap, ArglineError> {
		let mut out = self.defaults();
		self.parse(src, &mut out)?;
		Ok(out)
	}

	/// # Parse Arguments.
	///
	/// Join an argument list into a single line with [`join_args`] and parse
	/// that.
	///
	/// ## Examples
	///
	/// ```
	/// use argline::{ArgMap, ArgParser, ArgSpec, Value, ValueKind};
	///
	/// let parser = ArgParser::new()
	///     .with_arg(ArgSpec::named("workdir", Some('W'), ValueKind::Str))
	///     .unwrap();
	///
	/// let mut out = ArgMap::new();
	/// parser.parse_args(["-W", "My Documents"], &mut out).unwrap();
	/// assert_eq!(out.get("workdir"), Some(&Value::from("My Documents")));
	/// ```
	///
	/// ## Errors
	///
	/// See [`ArgParser::parse`].
	pub fn parse_args<I, S>(&self, args: I, out: &mut ArgMap) -> Result<(), ArglineError>
	where I: IntoIterator<Item=S>, S: AsRef<str> {
		self.parse(&join_args(args), out)
	}

	/// # Parse Value.
	fn parse_value(&self, spec: &ArgSpec, scanner: &mut Scanner)
	-> Result<Value, ArglineError> {
		let value = self.types.parse(self, spec, scanner).map_err(|e| match e {
			ValueError::UnknownType(k) => ArglineError::UnknownType(k),
			e => {
				tracing::warn!(argument = spec.name(), error = %e, "unable to parse value");
				ArglineError::ValueParseFailure(spec.name())
			},
		})?;
		tracing::debug!(argument = spec.name(), value = ?value, "value parsed");
		Ok(value)
	}

	/// # Invoke Switch.
	fn invoke_switch(&self, spec: &ArgSpec) -> Value {
		let value = spec.invoke(self).unwrap_or(Value::Bool(true));
		tracing::debug!(argument = spec.name(), value = ?value, "switch invoked");
		value
	}
}



/// # Peek Token.
///
/// Return the token at the cursor without moving it. Quoted tokens are
/// unquoted; an unterminated quote falls back to the raw run of
/// non-whitespace.
fn peek_token(scanner: &Scanner) -> String {
	read_token(&mut scanner.clone()).unwrap_or_else(|_|
		(0..).map_while(|i| scanner.peek(i).filter(|c| ! c.is_whitespace())).collect()
	)
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::Position;

	/// # Switch Yielding True.
	fn yes() -> impl Fn(&ArgParser, &ArgSpec) -> Value + Send + Sync + 'static {
		|_: &ArgParser, _: &ArgSpec| Value::Bool(true)
	}

	#[test]
	fn t_define() {
		let mut parser = ArgParser::new();
		parser.define(ArgSpec::named("file", Some('F'), ValueKind::Str)).unwrap();

		assert_eq!(
			parser.define(ArgSpec::named("file", None, ValueKind::Str)),
			Err(ArglineError::DuplicateName("file")),
		);
		assert_eq!(
			parser.define(ArgSpec::flag("force", Some('F'))),
			Err(ArglineError::DuplicateChar('F')),
		);

		// The failed attempts shouldn't have left anything behind.
		assert!(parser.get("force").is_none());
		assert_eq!(parser.get_char('F').map(ArgSpec::name), Some("file"));
	}

	#[test]
	fn t_positionals() {
		let parser = ArgParser::new()
			.with_args([
				ArgSpec::positional("A", ValueKind::Str),
				ArgSpec::positional_at("B", ValueKind::Str, 0),
				ArgSpec::positional_at("C", ValueKind::Str, -1),
			])
			.unwrap();
		assert_eq!(parser.positionals(), ["B", "C", "A"]);

		// Adding another resets the cached order.
		let parser = parser.with_arg(ArgSpec::positional_at("D", ValueKind::Str, 0)).unwrap();
		assert_eq!(parser.positionals(), ["D", "B", "C", "A"]);
		assert_eq!(parser.get("D").and_then(ArgSpec::position), Some(Position::At(0)));

		let mut out = ArgMap::new();
		parser.parse("d b c a", &mut out).unwrap();
		assert_eq!(out.get("A"), Some(&Value::from("a")));
		assert_eq!(out.get("B"), Some(&Value::from("b")));
		assert_eq!(out.get("C"), Some(&Value::from("c")));
		assert_eq!(out.get("D"), Some(&Value::from("d")));
	}

	#[test]
	fn t_long() {
		let parser = ArgParser::new()
			.with_arg(ArgSpec::named("count", None, ValueKind::Int))
			.unwrap();

		for src in ["--count=5", "--count 5", "  --count   5  "] {
			let mut out = ArgMap::new();
			parser.parse(src, &mut out).unwrap();
			assert_eq!(out.len(), 1);
			assert_eq!(out.get("count"), Some(&Value::Int(5)), "Failed: {src:?}");
		}

		// No value is a conversion failure.
		let mut out = ArgMap::new();
		assert_eq!(
			parser.parse("--count", &mut out),
			Err(ArglineError::ValueParseFailure("count")),
		);
		assert_eq!(
			parser.parse("--count=five", &mut out),
			Err(ArglineError::ValueParseFailure("count")),
		);
	}

	#[test]
	fn t_long_switch() {
		let parser = ArgParser::new()
			.with_args([
				ArgSpec::switch("level", None, ValueKind::Int, |_: &ArgParser, _: &ArgSpec| Value::Int(9)),
				ArgSpec::positional("target", ValueKind::Str),
			])
			.unwrap();

		// The handler runs without consuming anything.
		let mut out = ArgMap::new();
		parser.parse("--level app", &mut out).unwrap();
		assert_eq!(out.get("level"), Some(&Value::Int(9)));
		assert_eq!(out.get("target"), Some(&Value::from("app")));

		// An explicit value bypasses it.
		let mut out = ArgMap::new();
		parser.parse("--level=3 app", &mut out).unwrap();
		assert_eq!(out.get("level"), Some(&Value::Int(3)));
		assert_eq!(out.get("target"), Some(&Value::from("app")));
	}

	#[test]
	fn t_short() {
		let parser = ArgParser::new()
			.with_args([
				ArgSpec::switch("a", Some('a'), ValueKind::Bool, yes()),
				ArgSpec::switch("b", Some('b'), ValueKind::Bool, yes()),
				ArgSpec::named("F", Some('F'), ValueKind::Int),
				ArgSpec::named("S", Some('S'), ValueKind::Str),
				ArgSpec::positional("rest", ValueKind::Str),
			])
			.unwrap();

		let mut out = ArgMap::new();
		parser.parse("-ab", &mut out).unwrap();
		assert_eq!(out.len(), 2);
		assert_eq!(out.get("a"), Some(&Value::Bool(true)));
		assert_eq!(out.get("b"), Some(&Value::Bool(true)));

		let mut out = ArgMap::new();
		parser.parse("-abF123", &mut out).unwrap();
		assert_eq!(out.len(), 3);
		assert_eq!(out.get("F"), Some(&Value::Int(123)));

		// The value stops at the end of its token, leaving the next one for
		// the positional.
		let mut out = ArgMap::new();
		parser.parse("-abF123 tail", &mut out).unwrap();
		assert_eq!(out.len(), 4);
		assert_eq!(out.get("F"), Some(&Value::Int(123)));
		assert_eq!(out.get("rest"), Some(&Value::from("tail")));

		// And the converter leaves the cursor exactly at the end of the run.
		let mut scanner = Scanner::new("-abF123");
		scanner.advance(4);
		let spec = parser.get_char('F').unwrap();
		assert_eq!(parser.types().parse(&parser, spec, &mut scanner), Ok(Value::Int(123)));
		assert!(scanner.is_done());
		assert_eq!(scanner.pos(), 7);

		// Separate and spaced forms work too.
		let mut out = ArgMap::new();
		parser.parse("-a -b -F 123", &mut out).unwrap();
		assert_eq!(out.get("a"), Some(&Value::Bool(true)));
		assert_eq!(out.get("F"), Some(&Value::Int(123)));

		// A value flag swallows the rest of its run.
		let mut out = ArgMap::new();
		parser.parse("-Sab", &mut out).unwrap();
		assert_eq!(out.len(), 1);
		assert_eq!(out.get("S"), Some(&Value::from("ab")));

		// A lone dash is nothing.
		let mut out = ArgMap::new();
		parser.parse("- -a", &mut out).unwrap();
		assert_eq!(out.len(), 1);
	}

	#[test]
	fn t_unknown() {
		let parser = ArgParser::new()
			.with_arg(ArgSpec::flag("a", Some('a')))
			.unwrap();

		let mut out = ArgMap::new();
		assert_eq!(
			parser.parse("--zz=1", &mut out),
			Err(ArglineError::UnknownNamedArgument("zz".to_owned())),
		);
		assert_eq!(
			parser.parse("-q", &mut out),
			Err(ArglineError::UnknownCharArgument('q')),
		);

		// Partial results stick around.
		assert_eq!(
			parser.parse("-aq", &mut out),
			Err(ArglineError::UnknownCharArgument('q')),
		);
		assert_eq!(out.get("a"), Some(&Value::Bool(true)));

		assert_eq!(
			parser.parse("foo bar", &mut out),
			Err(ArglineError::MissingPositionalArgument("foo".to_owned())),
		);

		// Quoted tokens are reported whole.
		assert_eq!(
			parser.parse("'My Documents' bar", &mut out),
			Err(ArglineError::MissingPositionalArgument("My Documents".to_owned())),
		);
		assert_eq!(
			parser.parse("'oops bar", &mut out),
			Err(ArglineError::MissingPositionalArgument("'oops".to_owned())),
		);
	}

	#[test]
	fn t_unknown_type() {
		let parser = ArgParser::new()
			.with_arg(ArgSpec::named("ver", None, ValueKind::Custom("semver")))
			.unwrap();

		let mut out = ArgMap::new();
		assert_eq!(
			parser.parse("--ver 1.0", &mut out),
			Err(ArglineError::UnknownType(ValueKind::Custom("semver"))),
		);

		let parser = parser.with_type(ValueKind::Custom("semver"), |_, _, s| {
			crate::read_token(s).map(Value::Str)
		});
		parser.parse("--ver 1.0", &mut out).unwrap();
		assert_eq!(out.get("ver"), Some(&Value::from("1.0")));
	}

	#[test]
	fn t_context() {
		// Converters and switches get the parser, so can look at other specs.
		let parser = ArgParser::new()
			.with_type(ValueKind::Custom("count"), |p, _, _| {
				Ok(Value::Int(p.positionals().len() as i64))
			})
			.with_args([
				ArgSpec::switch("n", Some('n'), ValueKind::Int, |p: &ArgParser, s: &ArgSpec| {
					Value::from(format!("{}:{}", s.name(), p.positionals().len()))
				}),
				ArgSpec::named("m", Some('m'), ValueKind::Custom("count")),
				ArgSpec::positional("x", ValueKind::Str),
			])
			.unwrap();

		let mut out = ArgMap::new();
		parser.parse("-nm", &mut out).unwrap();
		assert_eq!(out.get("n"), Some(&Value::from("n:1")));
		assert_eq!(out.get("m"), Some(&Value::Int(1)));
	}

	#[test]
	fn t_defaults() {
		let parser = ArgParser::new()
			.with_args([
				ArgSpec::named("file", Some('F'), ValueKind::Str)
					.with_default(Value::from("./module.json")),
				ArgSpec::named("workdir", Some('W'), ValueKind::Str)
					.with_default(Value::from(".")),
				ArgSpec::flag("verbose", Some('v')),
			])
			.unwrap();

		let out = parser.parse_with_defaults("-F build.json").unwrap();
		assert_eq!(out.len(), 2);
		assert_eq!(out.get("file"), Some(&Value::from("build.json")));
		assert_eq!(out.get("workdir"), Some(&Value::from(".")));

		// Hand-seeded maps work the same way.
		let mut out = ArgMap::new();
		out.insert("workdir", Value::from("."));
		parser.parse("-v", &mut out).unwrap();
		assert_eq!(out.get("workdir"), Some(&Value::from(".")));
		assert_eq!(out.get("verbose"), Some(&Value::Bool(true)));
	}

	#[test]
	fn t_idempotent() {
		let parser = ArgParser::new()
			.with_args([
				ArgSpec::flag("verbose", Some('v')),
				ArgSpec::named("jobs", Some('j'), ValueKind::Int),
				ArgSpec::named("ratio", None, ValueKind::Float),
				ArgSpec::positional("src", ValueKind::Path),
			])
			.unwrap();

		let src = "-vj4 --ratio=0.5 src/main";
		let mut a = ArgMap::new();
		let mut b = ArgMap::new();
		parser.parse(src, &mut a).unwrap();
		parser.parse(src, &mut b).unwrap();
		assert_eq!(a, b);
		assert_eq!(a.len(), 4);
	}

	#[test]
	fn t_parse_args() {
		let parser = ArgParser::new()
			.with_args([
				ArgSpec::named("file", Some('F'), ValueKind::Str),
				ArgSpec::positional("target", ValueKind::Str),
			])
			.unwrap();

		let mut out = ArgMap::new();
		parser.parse_args(["--file", "it's here", ""], &mut out).unwrap();
		assert_eq!(out.get("file"), Some(&Value::from("it's here")));
		assert_eq!(out.get("target"), Some(&Value::from("")));

		// The shell hands over --key="spaced value" as one entry.
		let mut out = ArgMap::new();
		parser.parse_args(["--file=My Documents/module.json", "My Target"], &mut out).unwrap();
		assert_eq!(out.get("file"), Some(&Value::from("My Documents/module.json")));
		assert_eq!(out.get("target"), Some(&Value::from("My Target")));
	}

	#[test]
	fn t_failure_logged() {
		use std::{
			io::Write,
			sync::{
				Arc,
				Mutex,
			},
		};

		/// # Shared Log Buffer.
		#[derive(Clone, Default)]
		struct LogBuf(Arc<Mutex<Vec<u8>>>);

		impl Write for LogBuf {
			fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
				self.0.lock().unwrap().extend_from_slice(buf);
				Ok(buf.len())
			}

			fn flush(&mut self) -> std::io::Result<()> { Ok(()) }
		}

		let parser = ArgParser::new()
			.with_arg(ArgSpec::named("count", Some('c'), ValueKind::Int))
			.unwrap();

		let buf = LogBuf::default();
		let writer = buf.clone();
		let subscriber = tracing_subscriber::fmt()
			.with_writer(move || writer.clone())
			.with_ansi(false)
			.with_max_level(tracing::Level::WARN)
			.finish();

		let mut out = ArgMap::new();
		let res = tracing::subscriber::with_default(subscriber, || parser.parse("--count=five", &mut out));
		assert_eq!(res, Err(ArglineError::ValueParseFailure("count")));
		assert!(out.is_empty());

		// The converter's message only survives in the log.
		let log = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
		assert!(log.contains("WARN"), "Missing warning: {log}");
		assert!(log.contains("unable to parse value"), "Missing message: {log}");
		assert!(log.contains("count"), "Missing argument name: {log}");
		assert!(log.contains("five"), "Missing converter error: {log}");
	}

	#[test]
	fn t_empty() {
		let parser = ArgParser::new();
		let mut out = ArgMap::new();
		assert!(parser.parse("", &mut out).is_ok());
		assert!(parser.parse("   \t ", &mut out).is_ok());
		assert!(out.is_empty());
	}
}
