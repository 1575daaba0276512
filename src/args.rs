use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("rsdecode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Reed-Solomon GF(256) codeword error correction")
        .arg(
            Arg::new("ec-symbols")
                .short('e')
                .long("ec-symbols")
                .help("Number of error correction symbols per codeword (2t)")
                .value_name("TWO_S")
                .required(true)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .help("Read codewords from a file, one per line")
                .value_name("PATH"),
        )
        .arg(
            Arg::new("data-matrix")
                .long("data-matrix")
                .help("Scale error magnitudes for Data Matrix codewords")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input-format")
                .long("input-format")
                .help("How to read codewords: auto picks decimal when a separator is present, else hex")
                .value_name("FORMAT")
                .value_parser(["auto", "hex", "decimal"])
                .default_value("auto"),
        )
        .arg(
            Arg::new("decimal")
                .long("decimal")
                .help("Print corrected codewords as comma separated decimal bytes")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("threads")
                .short('j')
                .long("threads")
                .help("Number of worker threads (0 = auto-detect)")
                .value_name("N")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("sequential")
                .long("sequential")
                .help("Decode on a single thread")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("codewords")
                .help(
                    "Codewords as hex or as comma/space separated decimal bytes \
                     (auto mode reads `255` as hex 02 55; see --input-format)",
                )
                .num_args(0..)
                .index(1),
        )
}

pub fn parse_args() -> clap::ArgMatches {
    build_cli().get_matches()
}
