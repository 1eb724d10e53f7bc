// build.rs

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Common argument: add-on root directory
fn root_arg() -> Arg {
    Arg::new("root")
        .short('r')
        .long("root")
        .value_name("DIR")
        .help("Add-on root directory (overrides the config file)")
}

/// Common argument: transitive gathering depth
fn depth_arg() -> Arg {
    Arg::new("depth")
        .short('d')
        .long("depth")
        .value_name("N")
        .help("Maximum depth for transitive dependency gathering")
}

fn component_arg() -> Arg {
    Arg::new("component").required(true).help("Component name")
}

fn build_cli() -> Command {
    Command::new("addonscan")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Addonscan Contributors")
        .about("Check add-on dependencies: missing, transitive, and unused libraries")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Increase log verbosity (-v info, -vv debug)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .global(true)
                .help("Configuration file (default: $ADDONSCAN_CONFIG or the user config dir)"),
        )
        .subcommand(
            Command::new("scan")
                .about("Scan the add-on directory and print the full dependency report")
                .arg(root_arg())
                .arg(depth_arg())
                .arg(
                    Arg::new("format")
                        .short('f')
                        .long("format")
                        .value_parser(["text", "json"])
                        .help("Output format (overrides the config file)"),
                )
                .arg(
                    Arg::new("no_matrix")
                        .long("no-matrix")
                        .action(ArgAction::SetTrue)
                        .help("Skip the per-component dependency matrix"),
                ),
        )
        .subcommand(
            Command::new("deps")
                .about("Show the reduced transitive dependencies of one component")
                .arg(component_arg())
                .arg(root_arg())
                .arg(depth_arg()),
        )
        .subcommand(
            Command::new("info")
                .about("Show the manifest details of one component")
                .arg(component_arg())
                .arg(root_arg()),
        )
        .subcommand(
            Command::new("unused")
                .about("List libraries that no other component uses")
                .arg(root_arg()),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completion scripts")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(["bash", "elvish", "fish", "powershell", "zsh"])
                        .help("Shell type"),
                ),
        )
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => {
            println!("cargo:warning=CARGO_MANIFEST_DIR not set: {}", e);
            return;
        }
    };
    let man_dir = manifest_dir.join("man");

    if let Err(e) = fs::create_dir_all(&man_dir) {
        println!("cargo:warning=Failed to create man directory: {}", e);
        return;
    }

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();

    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=Failed to render man page: {}", e);
        return;
    }

    let man_path = man_dir.join("addonscan.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=Failed to write man page: {}", e);
    }
}
