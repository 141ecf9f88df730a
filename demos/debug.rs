/*!
# Argline: Debug

This example declares the arguments of a small C/C++ build driver, parses
whatever is fed to it, and prints the results.

Try something like:
cargo run --example debug -- -v -F "My Project/module.json" engine
*/

use argline::{
	ArgParser,
	ArgSpec,
	Value,
	ValueKind,
};



fn main() {
	tracing_subscriber::fmt()
		.with_max_level(tracing::Level::DEBUG)
		.with_writer(std::io::stderr)
		.init();

	let parser = match ArgParser::new()
		.with_args([
			ArgSpec::named("file", Some('F'), ValueKind::Path)
				.with_default(Value::from("./module.json")),
			ArgSpec::named("workdir", Some('W'), ValueKind::Path),
			ArgSpec::flag("verbose", Some('v')),
			ArgSpec::flag("clean", Some('c')),
			ArgSpec::positional("target", ValueKind::Str),
		])
	{
		Ok(p) => p,
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(e.exit_code());
		},
	};

	let line = argline::join_args(std::env::args().skip(1));
	println!("\x1b[2mLINE:\x1b[0m");
	println!("{line}");
	println!();

	match parser.parse_with_defaults(&line) {
		Ok(args) => {
			println!("\x1b[2mPARSED:\x1b[0m");
			for (k, v) in &args {
				println!("{k:>10}  {v:?}");
			}
			println!();
		},
		Err(e) => {
			eprintln!("Error: {e}");
			std::process::exit(e.exit_code());
		},
	}
}
