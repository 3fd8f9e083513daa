use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;
use std::process;

use log::{debug, info};
use seahorse::{App, Context, Flag, FlagType};

use syllabi_readme::generate_readme;
use syllabi_readme::input::{Config, Output, DEFAULT_SOURCE};

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    let args: Vec<String> = env::args().collect();

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [args]", args[0]))
        .flag(
            Flag::new("source", FlagType::String)
                .description("[optional] Path to the data file. Default: `some-syllabi.yaml`")
                .alias("s"),
        )
        .flag(
            Flag::new("boilerplate", FlagType::String)
                .description(
                    "[optional] Path to the text in front of the table. Default: `<path to source>/BOILERPLATE.md`",
                )
                .alias("b"),
        )
        .flag(
            Flag::new("output", FlagType::String)
                .description(
                    "[optional] Path to the generated file, `-` for stdout. Default: `<path to source>/README.md`",
                )
                .alias("o"),
        )
        .flag(
            Flag::new("config", FlagType::String)
                .description("[optional] Path to a toml settings file. Flags take precedence.")
                .alias("c"),
        )
        .action(make_action);

    app.run(args);
}

trait ContextExt {
    fn context(&self) -> &Context;

    fn path_flag(&self, name: &str) -> Option<PathBuf> {
        self.context().string_flag(name).ok().map(PathBuf::from)
    }
}

impl ContextExt for Context {
    fn context(&self) -> &Context {
        self
    }
}

fn build_config(context: &Context) -> anyhow::Result<Config> {
    let mut builder = match context.path_flag("config") {
        Some(path) => Config::try_from_settings_file(path)?,
        None => Config::builder(DEFAULT_SOURCE),
    };

    if let Some(source) = context.path_flag("source") {
        builder.source(source);
    }

    if let Some(boilerplate) = context.path_flag("boilerplate") {
        builder.boilerplate(boilerplate);
    }

    if let Some(output) = context.path_flag("output") {
        builder.output(output);
    }

    let config = builder.build()?;
    debug!("config: {:?}", config);
    info!("finished building config");

    Ok(config)
}

fn make(context: &Context) -> anyhow::Result<()> {
    let config = build_config(context)?;
    let count = generate_readme(&config)?;

    let message = format!("Success: {} courses listed", count);
    // keep stdout clean when the README itself is written there
    if config.output() == &Output::Stdout {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }

    Ok(())
}

fn make_action(context: &Context) {
    if let Err(e) = make(context) {
        debug!("{:?}", e);
        eprintln!("Aborting...Error: {:#}", e);
        process::exit(1);
    }
}
