use std::{
	fs, //
	path::{Path, PathBuf},
	process::ExitCode,
};

use clap::{Arg, Command};

use cdenv::generator::Generator;

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().filter_or("CDENV_LOG", "off"))
		.format_timestamp(None)
		.init();

	let matches = Command::new("cdenv")
		.about("Composes the csocket package descriptor and hands it to a build-file generator")
		.arg(
			Arg::new("build-dir")
				.short('B')
				.long("build-dir")
				.value_name("path-to-build")
				.required(true)
				.help("Specify the build directory"),
		)
		.arg(
			Arg::new("generator")
				.short('G')
				.long("generator")
				.value_name("generator-name")
				.default_value("Manifest")
				.help("Specify a descriptor generator (Manifest, Dot)"),
		)
		.arg(
			Arg::new("config")
				.short('C')
				.long("config")
				.value_name("path-to-config")
				.help("Specify a configuration file"),
		)
		.get_matches();

	let build_dir = PathBuf::from(matches.get_one::<String>("build-dir").unwrap());
	let generator_str = matches.get_one::<String>("generator").unwrap();

	println!("build-dir: {}", build_dir.display());
	println!("generator: {}", generator_str);

	let generator = match Generator::from_name(generator_str) {
		Some(x) => x,
		None => {
			println!("Error: Not a valid generator '{}'", generator_str);
			return ExitCode::FAILURE;
		}
	};

	let config = match matches.get_one::<String>("config") {
		Some(path) => match cdenv::read_config(Path::new(path)) {
			Ok(x) => x,
			Err(e) => {
				println!("{}", e);
				return ExitCode::FAILURE;
			}
		},
		None => {
			let default_path = Path::new(cdenv::CDENV_TOML);
			if default_path.exists() {
				match cdenv::read_config(default_path) {
					Ok(x) => x,
					Err(e) => {
						println!("{}", e);
						return ExitCode::FAILURE;
					}
				}
			} else {
				cdenv::Config::default()
			}
		}
	};

	// Check build dir can be created before composing anything
	if let Err(e) = fs::create_dir_all(&build_dir) {
		println!("Error creating directory: {} (path: {})", e, build_dir.display());
		return ExitCode::FAILURE;
	}

	let package = match cdenv::compose(config) {
		Ok(x) => x,
		Err(e) => {
			println!("{}", e);
			return ExitCode::FAILURE;
		}
	};
	log::debug!("{}", package);

	match generator.generate(package, &build_dir) {
		Ok(x) => x,
		Err(e) => {
			println!("{}", e);
			return ExitCode::FAILURE;
		}
	};

	ExitCode::SUCCESS
}
