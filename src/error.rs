/*!
# Argline: Errors.
*/

use crate::ValueKind;
use std::fmt;



/// # Exit Code: Usage.
const EX_USAGE: i32 = 64;

/// # Exit Code: Software.
const EX_SOFTWARE: i32 = 70;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Error!
///
/// Registration errors (`Duplicate*`) are programming mistakes; everything
/// else is raised by [`ArgParser::parse`](crate::ArgParser::parse) in
/// response to bad input.
pub enum ArglineError {
	/// # Duplicate Name.
	DuplicateName(&'static str),

	/// # Duplicate Short Character.
	DuplicateChar(char),

	/// # Unknown `--name`.
	UnknownNamedArgument(String),

	/// # Unknown `-c`.
	UnknownCharArgument(char),

	/// # No Converter for Kind.
	UnknownType(ValueKind),

	/// # Too Many Positional Arguments.
	///
	/// This holds the token that had nowhere to go.
	MissingPositionalArgument(String),

	/// # Value Conversion Failed.
	///
	/// This holds the argument name. The converter's own message is logged
	/// but not kept.
	ValueParseFailure(&'static str),
}

impl std::error::Error for ArglineError {}

impl fmt::Display for ArglineError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::DuplicateName(s) => write!(f, "Duplicate argument name: {s}"),
			Self::DuplicateChar(c) => write!(f, "Duplicate argument character: -{c}"),
			Self::UnknownNamedArgument(s) => write!(f, "Unknown argument: --{s}"),
			Self::UnknownCharArgument(c) => write!(f, "Unknown argument: -{c}"),
			Self::UnknownType(k) => write!(f, "No parser for value type: {k}"),
			Self::MissingPositionalArgument(s) => write!(f, "Unexpected argument: {s}"),
			Self::ValueParseFailure(s) => write!(f, "Invalid value for argument: {s}"),
		}
	}
}

impl ArglineError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateName(_) => "Duplicate argument name.",
			Self::DuplicateChar(_) => "Duplicate argument character.",
			Self::UnknownNamedArgument(_) | Self::UnknownCharArgument(_) => "Unknown argument.",
			Self::UnknownType(_) => "Unknown value type.",
			Self::MissingPositionalArgument(_) => "Too many arguments.",
			Self::ValueParseFailure(_) => "Invalid argument value.",
		}
	}

	#[must_use]
	/// # Exit Code.
	///
	/// A suggested process exit code: `64` (`EX_USAGE`) for bad input, `70`
	/// (`EX_SOFTWARE`) for mistakes in the argument definitions themselves.
	pub const fn exit_code(&self) -> i32 {
		match self {
			Self::DuplicateName(_) | Self::DuplicateChar(_) | Self::UnknownType(_) => EX_SOFTWARE,
			_ => EX_USAGE,
		}
	}
}
