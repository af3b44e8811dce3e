pub mod args;
mod repl;
mod setup;

pub use args::AppArgs;

use anyhow::Result;

pub fn launch() -> Result<()> {
    launch_with_args(AppArgs::from_cli())
}

pub fn launch_with_args(args: AppArgs) -> Result<()> {
    let setup::PreparedApp { store, view } = setup::prepare(args)?;
    repl::Repl::new(store, view).run()
}
