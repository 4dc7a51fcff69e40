use cra_setup::{
    cli::{get_args, get_log_level_from_verbose, print_usage, run},
    error::{default_error_handler, Error},
};

fn main() {
    let args = get_args();
    let lvl = get_log_level_from_verbose(args.verbose);
    env_logger::Builder::new().filter_level(lvl).init();

    if let Err(err) = run(args) {
        if matches!(err, Error::MissingArgument) {
            print_usage();
        }
        default_error_handler(err);
    }
}
