use arbor::cmd;
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    version,
    author = "David K.",
    about = "A tree-walking interpreter for a small scheme"
)]
struct Opts {
    /// Program file to run; the REPL starts when omitted
    input: Option<String>,

    /// Arguments exposed to the program as the global `args` list
    args: Vec<String>,
}

fn main() {
    pretty_env_logger::init();

    let opts = Opts::parse();

    match &opts.input {
        Some(input) => cmd::run::execute(input, &opts.args),
        None => {
            if let Err(e) = cmd::repl::execute() {
                eprintln!("{}", e);
            }
        }
    }
}
