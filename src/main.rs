use anyhow::{anyhow, bail, Result};
use std::path::PathBuf;

use t3s_utils::config::Config;
use t3s_utils::process::tss_path;
use t3s_utils::utils::logging::init_tracing;
use t3s_utils::{filename2key, get_prefix, hash_file, is_member_completion};

fn print_help() {
    println!("t3s-utils - helpers of the T3S TypeScript plugin");
    println!();
    println!("Usage:");
    println!("  t3s-utils key <file>            Print the cache key of a filename");
    println!("  t3s-utils hash <file>           Print the MD5 of a file's contents");
    println!("  t3s-utils prefix <kind>         Print the glyph for a member kind");
    println!("  t3s-utils member <line>         Whether <line> asks for member completion");
    println!("  t3s-utils tss [package_dir]     Print the language service script path");
    println!("  t3s-utils config                Print the commented default config");
    println!();
    println!("Environment:");
    println!("  T3S_LOG    tracing filter (default: info)");
    println!("  T3S_DEBUG  echo log lines to stderr");
}

fn arg(args: &[String], index: usize, name: &str) -> Result<String> {
    args.get(index)
        .cloned()
        .ok_or_else(|| anyhow!("missing argument <{}>", name))
}

fn run(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        print_help();
        return Ok(());
    };

    match command.as_str() {
        "key" => println!("{}", filename2key(&arg(args, 1, "file")?)),
        "hash" => println!("{}", hash_file(arg(args, 1, "file")?)?),
        "prefix" => println!("{}", get_prefix(&arg(args, 1, "kind")?)),
        "member" => println!("{}", is_member_completion(&arg(args, 1, "line")?)),
        "tss" => {
            let package_dir = match args.get(1) {
                Some(dir) => PathBuf::from(dir),
                None => {
                    let config = Config::load()?;
                    config.apply();
                    config.process.package_dir()?
                }
            };
            println!("{}", tss_path(&package_dir).display());
        }
        "config" => print!("{}", Config::create_default_with_comments()),
        "-h" | "--help" | "help" => print_help(),
        other => bail!("unknown command '{}' (try --help)", other),
    }

    Ok(())
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
