mod app;
mod audio;
mod config;
mod library;
mod picker;
mod playlist;
mod runtime;
mod text;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
