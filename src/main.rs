mod app;
mod logging;
mod logic;
mod models;
mod mvu;
mod ui;

fn main() -> anyhow::Result<()> {
    logging::init();
    app::run()
}
