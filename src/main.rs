extern crate loggerv;
#[macro_use]
extern crate structopt;
extern crate lightsout;

use structopt::StructOpt;

use lightsout::lightsout::run;
use lightsout::lightsout::Result;

#[derive(StructOpt, Debug)]
struct Opt {
    #[structopt(short = "v", parse(from_occurrences))]
    verbose: u64,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    #[structopt(name = "solve")]
    Solve {
        /// JSON file holding an array of 0/1 rows
        #[structopt(long = "board")]
        board: Option<String>,
        /// Inline board, e.g. 101/010/101
        #[structopt(long = "rows")]
        rows: Option<String>,
        #[structopt(long = "output")]
        output: Option<String>,
        #[structopt(long = "trace")]
        trace: Option<String>,
        /// Print every elimination step
        #[structopt(long = "explain")]
        explain: bool,
        /// Fail instead of printing presses that leave lights on
        #[structopt(long = "strict")]
        strict: bool,
        #[structopt(long = "max-size", default_value = "8")]
        max_size: usize,
    },
    #[structopt(name = "verify")]
    Verify {
        #[structopt(long = "board")]
        board: Option<String>,
        #[structopt(long = "rows")]
        rows: Option<String>,
        /// JSON file holding the 0/1 press grid
        #[structopt(long = "presses")]
        presses: String,
    },
    #[structopt(name = "survey")]
    Survey {
        #[structopt(long = "max", default_value = "9")]
        max: usize,
    },
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    loggerv::init_with_verbosity(opt.verbose)?;
    match opt.cmd {
        Command::Solve {
            board,
            rows,
            output,
            trace,
            explain,
            strict,
            max_size,
        } => run::solve(
            board,
            rows,
            output,
            trace,
            &run::Config {
                max_size,
                strict,
                explain,
            },
        ),
        Command::Verify {
            board,
            rows,
            presses,
        } => run::check(board, rows, presses),
        Command::Survey { max } => run::survey(max),
    }
}
