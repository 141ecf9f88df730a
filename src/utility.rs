/*!
# Argline: Utility Methods.
*/



/// # Join Arguments.
///
/// Stitch an argument list (e.g. `std::env::args().skip(1)`) into the single
/// line [`ArgParser::parse`](crate::ArgParser::parse) expects.
///
/// Entries are separated by a space. Any entry that is empty or contains
/// whitespace or quotes is wrapped in single quotes, with embedded `'` and
/// `\` escaped by a backslash, so it comes back out as one value. For
/// `--name=value` entries, only the value is quoted.
///
/// ## Examples
///
/// ```
/// assert_eq!(
///     argline::join_args(["-F", "My Docs/module.json", "", "it's"]),
///     r"-F 'My Docs/module.json' '' 'it\'s'",
/// );
/// assert_eq!(
///     argline::join_args(["--workdir=My Documents"]),
///     "--workdir='My Documents'",
/// );
/// ```
pub fn join_args<I, S>(args: I) -> String
where I: IntoIterator<Item=S>, S: AsRef<str> {
	let mut out = String::new();
	for (idx, arg) in args.into_iter().enumerate() {
		if idx != 0 { out.push(' '); }
		let arg = arg.as_ref();
		match split_long(arg) {
			Some((key, value)) => {
				out.push_str(key);
				out.push('=');
				esc_arg(value, &mut out);
			},
			None => esc_arg(arg, &mut out),
		}
	}
	out
}

/// # Split Long Key/Value.
///
/// Split `--name=value` at the first `=`, provided the name itself needs no
/// quoting.
fn split_long(src: &str) -> Option<(&str, &str)> {
	if ! src.starts_with("--") { return None; }
	let (key, value) = src.split_once('=')?;
	if needs_quote(key) { None }
	else { Some((key, value)) }
}

/// # Needs Quote?
fn needs_quote(src: &str) -> bool {
	src.is_empty() ||
	src.chars().any(|c| c.is_whitespace() || matches!(c, '\'' | '"'))
}

/// # Escape Arg.
///
/// Push `src` onto `out`, quoting it if needed.
fn esc_arg(src: &str, out: &mut String) {
	if needs_quote(src) {
		out.reserve(src.len() + 2);
		out.push('\'');
		for c in src.chars() {
			if matches!(c, '\'' | '\\') { out.push('\\'); }
			out.push(c);
		}
		out.push('\'');
	}
	else { out.push_str(src); }
}
