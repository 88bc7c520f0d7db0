use apimock_dist::execute::execute_launch;
use apimock_dist::output;

fn main() {
    let termination = execute_launch(std::env::args_os().skip(1));
    if let Some(msg) = termination.diagnostic() {
        output::error(&msg);
    }
    std::process::exit(termination.code());
}
