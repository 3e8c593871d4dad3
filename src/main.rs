use anyhow::Result;

mod app;
mod logging;

fn main() -> Result<()> {
    let args = cmdfm::cli::parse();
    app::run(args)
}
