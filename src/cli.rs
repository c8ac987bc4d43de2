use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "mutrun", version, about = "Mutant conformance test runner")]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON instead of progress lines")]
    pub json: bool,
    #[arg(
        long,
        default_value_t = false,
        help = "Abort the whole batch on the first mutant whose run fails"
    )]
    pub fail_fast: bool,
}
