use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "keysign-demo")]
#[command(about = "Generate a key pair, sign a message, and verify the signature")]
pub struct AppArgs {
    #[arg(
        long,
        default_value_t = 200,
        help = "Maximum number of lines kept in the on-screen log transcript"
    )]
    pub log_lines: usize,

    #[arg(long, help = "Tracing filter directive (or set RUST_LOG)")]
    pub filter: Option<String>,

    #[arg(long, help = "Do not echo transcript lines as they arrive")]
    pub quiet: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
