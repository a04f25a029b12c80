//! Fuzzbed - command line interface.

//
// Copyright (c) 2019 Fuzzbed Developers
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use clap::{value_t, App, AppSettings, Arg, ArgMatches, SubCommand};
use dirs;
use failure::{bail, format_err, Error};
use fuzzbed::amount::parse_amount;
use fuzzbed::checks;
use fuzzbed::config::{self, Config, ConfigError};
use fuzzbed::consts;
use fuzzbed_crypto::bignum::U256;
use log::*;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::Handle as LogHandle;
use std::path::PathBuf;
use std::process;

fn load_configuration(args: &ArgMatches<'_>) -> Result<Config, Error> {
    if let Some(cfg_path) = args.value_of_os("config") {
        // Use --config argument for configuration.
        return Ok(config::from_file(cfg_path)?);
    }

    // Use ./fuzzbed.toml, then ~/.config/fuzzbed.toml for configuration.
    let candidates = vec![
        PathBuf::from(consts::CONFIG_FILE_NAME),
        dirs::config_dir()
            .unwrap_or(PathBuf::from(r"."))
            .join(PathBuf::from(consts::CONFIG_FILE_NAME)),
    ];
    for cfg_path in candidates {
        match config::from_file(&cfg_path) {
            Ok(cfg) => return Ok(cfg),
            // Don't raise an error on missing configuration file.
            Err(ConfigError::NotFoundError) => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(Default::default())
}

fn initialize_logger(cfg: &Config) -> Result<LogHandle, SetLoggerError> {
    // Try to load log4rs config file
    let handle = match log4rs::load_config_file(
        PathBuf::from(&cfg.general.log4rs_config),
        Default::default(),
    ) {
        Ok(config) => log4rs::init_config(config)?,
        Err(e) => {
            let stdout = ConsoleAppender::builder()
                .encoder(Box::new(PatternEncoder::new(
                    "{d(%Y-%m-%d %H:%M:%S)(local)} [{t}] {h({l})} {M}: {m}{n}",
                )))
                .build();
            let config = LogConfig::builder()
                .appender(Appender::builder().build("stdout", Box::new(stdout)))
                .logger(Logger::builder().build("fuzzbed", LevelFilter::Info))
                .build(Root::builder().appender("stdout").build(LevelFilter::Warn))
                .expect("console logger should never fail");
            let handle = log4rs::init_config(config)?;
            debug!("Failed to read log4rs config file: {}", e);
            handle
        }
    };
    Ok(handle)
}

fn format_command(cfg: &Config, args: &ArgMatches<'_>) -> Result<(), Error> {
    let value = U256::from_hex(args.value_of("VALUE").unwrap_or_default())?;
    let mut fmt = cfg.format.as_format();
    if let Some(prefix) = args.value_of("prefix") {
        fmt.prefix = Some(prefix);
    }
    if let Some(suffix) = args.value_of("suffix") {
        fmt.suffix = Some(suffix);
    }
    if args.is_present("decimals") {
        fmt.decimals = value_t!(args, "decimals", u32)?;
    }
    if args.is_present("exponent") {
        fmt.exponent = value_t!(args, "exponent", i32)?;
    }
    if args.is_present("trailing") {
        fmt.trailing = true;
    }
    debug!("Formatting {:?} with {:?}", value, fmt);
    println!("{}", value.to_decimal(&fmt));
    Ok(())
}

fn digits_command(args: &ArgMatches<'_>) -> Result<(), Error> {
    let value = U256::from_hex(args.value_of("VALUE").unwrap_or_default())?;
    let base = value_t!(args, "base", u32)?;
    if base < 2 {
        bail!("Invalid base {}: must be at least 2", base);
    }
    let digits: Vec<String> = value.digits(base).iter().map(|d| d.to_string()).collect();
    println!("{}", digits.join(" "));
    Ok(())
}

fn parse_command(cfg: &Config, args: &ArgMatches<'_>) -> Result<(), Error> {
    let decimals = if args.is_present("decimals") {
        value_t!(args, "decimals", u32)?
    } else {
        cfg.format.decimals
    };
    let value = parse_amount(args.value_of("AMOUNT").unwrap_or_default(), decimals)?;
    println!("{}", value.to_hex());
    Ok(())
}

fn check_command(cfg: &Config, args: &ArgMatches<'_>) -> Result<(), Error> {
    let mut checks_cfg = cfg.checks.clone();
    if args.is_present("iterations") {
        checks_cfg.iterations = value_t!(args, "iterations", u32)?;
    }
    if args.is_present("seed") {
        checks_cfg.seed = value_t!(args, "seed", u64)?;
    }
    let report = checks::run(&checks_cfg);
    info!("Checks finished: {}", report);
    if !report.is_ok() {
        bail!("{} of {} checks failed", report.failures, report.checks);
    }
    Ok(())
}

fn run() -> Result<(), Error> {
    let name = "Fuzzbed";
    let version = env!("CARGO_PKG_VERSION");

    let decimals = Arg::with_name("decimals")
        .short("d")
        .long("decimals")
        .value_name("N")
        .help("Digits after the decimal point")
        .takes_value(true);
    let value = Arg::with_name("VALUE")
        .help("64-digit big-endian hex value")
        .required(true)
        .index(1);

    let args = App::new(name)
        .version(version)
        .author("Fuzzbed Developers")
        .about("256-bit integer engine, decimal formatter and property checks.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("Path to fuzzbed.toml configuration file")
                .takes_value(true),
        )
        .subcommand(
            SubCommand::with_name("format")
                .about("Print a value as a decorated decimal string")
                .arg(value.clone())
                .arg(
                    Arg::with_name("prefix")
                        .short("p")
                        .long("prefix")
                        .value_name("P")
                        .help("Text before the number")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("suffix")
                        .short("s")
                        .long("suffix")
                        .value_name("S")
                        .help("Text after the number")
                        .takes_value(true),
                )
                .arg(decimals.clone())
                .arg(
                    Arg::with_name("exponent")
                        .short("e")
                        .long("exponent")
                        .value_name("E")
                        .help("Power of ten applied before placing the point")
                        .allow_hyphen_values(true)
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("trailing")
                        .short("t")
                        .long("trailing")
                        .help("Keep trailing zeros of the fraction"),
                ),
        )
        .subcommand(
            SubCommand::with_name("digits")
                .about("Print base-D digits, least significant first")
                .arg(value)
                .arg(
                    Arg::with_name("base")
                        .short("b")
                        .long("base")
                        .value_name("D")
                        .help("Digit base")
                        .default_value("10")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("parse")
                .about("Parse a decimal amount and print its hex encoding")
                .arg(
                    Arg::with_name("AMOUNT")
                        .help("Decimal amount")
                        .required(true)
                        .index(1),
                )
                .arg(decimals),
        )
        .subcommand(
            SubCommand::with_name("check")
                .about("Run randomized property checks")
                .arg(
                    Arg::with_name("iterations")
                        .short("n")
                        .long("iterations")
                        .value_name("N")
                        .help("Random cases per law")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .value_name("S")
                        .help("RNG seed, 0 for entropy")
                        .takes_value(true),
                ),
        )
        .get_matches();

    // Parse configuration
    let cfg = load_configuration(&args)?;

    // Initialize logger
    initialize_logger(&cfg).map_err(|e| format_err!("Failed to initialize logger: {}", e))?;

    debug!("{} {}", name, version);

    match args.subcommand() {
        ("format", Some(m)) => format_command(&cfg, m),
        ("digits", Some(m)) => digits_command(m),
        ("parse", Some(m)) => parse_command(&cfg, m),
        ("check", Some(m)) => check_command(&cfg, m),
        _ => unreachable!("subcommand is required"),
    }
}

fn main() {
    if let Err(e) = run() {
        println!("Failed with error: {}", e); // Logger can be not yet initialized.
        error!("{}", e);
        process::exit(1)
    };
}
