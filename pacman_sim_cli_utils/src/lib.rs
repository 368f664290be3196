/// Command line options shared by the binaries
pub mod cli_args;
