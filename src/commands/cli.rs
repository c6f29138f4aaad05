//! Command-line definition shared by the binary and the command tests

use clap::{Arg, ArgAction, Command as ClapCommand};

fn offset_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("PIXELS")
        .allow_negative_numbers(true)
        .required(false)
}

/// Build the `runalign` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("runalign")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Align reference and series images per run and crop them to a common overlap window")
        .arg(
            Arg::new("input")
                .help("Base directory containing run<N> folders")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("run")
                .short('r')
                .long("run")
                .help("Only act on this run (e.g. run3)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .help("Alignment settings file (default: <BASE>/alignment.toml)")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Tool configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output-size")
                .long("output-size")
                .help("Size of the aligned images, e.g. 600x900")
                .value_name("WxH")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory for aligned images (default: next to the base directory)")
                .value_name("DIR")
                .required(false),
        )
        .arg(offset_arg("reference-x", "Horizontal offset of the reference image"))
        .arg(offset_arg("reference-y", "Vertical offset of the reference image"))
        .arg(offset_arg("series-x", "Horizontal offset of the series images"))
        .arg(offset_arg("series-y", "Vertical offset of the series images"))
        .arg(
            Arg::new("transparency")
                .short('t')
                .long("transparency")
                .help("Opacity of the series image in previews (0.0 - 1.0)")
                .value_name("ALPHA")
                .required(false),
        )
        .arg(
            Arg::new("apply")
                .short('a')
                .long("apply")
                .help("Crop the selected run, or every run with stored settings")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("preview")
                .short('p')
                .long("preview")
                .help("Write a blended preview of the selected run to this PNG file")
                .value_name("FILE")
                .conflicts_with("apply")
                .required(false),
        )
}
