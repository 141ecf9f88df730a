/*!
# Argline

This crate provides a small, typed command-line parser called [`ArgParser`].
Rather than working through an argument _list_, it reads a single command
_line_ (one string) and turns it into a map of argument names to typed
[`Value`]s.

Arguments come in three styles, all resolved in one left-to-right pass:

* Named values: `--count 5`, `--count=5`, `-c5`, `-c 5`;
* Switches, which consume nothing: `--verbose`, `-v`, or several at once like `-abc`;
* Positionals: everything else, matched in a fixed order.

Value conversion is driven by each argument's [`ValueKind`]. Booleans,
integers, floats, strings and paths work out of the box; anything else can
be handled by registering a converter of your own.

What the values _mean_ is left entirely up to you.



## Example

A general setup might look something like the following.

```
use argline::{ArgParser, ArgSpec, Value, ValueKind};

let parser = ArgParser::new()
    .with_args([
        ArgSpec::named("file", Some('F'), ValueKind::Path)
            .with_default(Value::from("./module.json")),
        ArgSpec::named("workdir", Some('W'), ValueKind::Path),
        ArgSpec::named("jobs", Some('j'), ValueKind::Int),
        ArgSpec::flag("verbose", Some('v')),
        ArgSpec::positional("target", ValueKind::Str),
    ])
    .unwrap(); // An error will only occur if a name or
               // short character is used twice.

// Parse a line, starting from the declared defaults.
let args = parser.parse_with_defaults("-vj4 engine").unwrap();

assert_eq!(args.get("file").and_then(Value::as_path), Some(std::path::Path::new("./module.json")));
assert_eq!(args.get("jobs").and_then(Value::as_int), Some(4));
assert_eq!(args.get("verbose").and_then(Value::as_bool), Some(true));
assert_eq!(args.get("target").and_then(Value::as_str), Some("engine"));
assert!(args.get("workdir").is_none());
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]

#![cfg_attr(docsrs, feature(doc_cfg))]



mod error;
mod parser;
mod scanner;
mod spec;
mod utility;
mod value;

pub use error::ArglineError;
pub use parser::{
	ArgMap,
	ArgParser,
};
pub use scanner::Scanner;
pub use spec::{
	ArgSpec,
	Position,
	Switch,
};
pub use utility::join_args;
pub use value::{
	Converter,
	read_token,
	TypeRegistry,
	Value,
	ValueError,
	ValueKind,
};
