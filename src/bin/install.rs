use clap::Parser;
use apimock_dist::cli::InstallCli;
use apimock_dist::execute::execute_install;
use apimock_dist::output;

fn main() {
    let cli = InstallCli::parse();
    if let Err(e) = execute_install(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
