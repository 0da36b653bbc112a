use std::process::ExitCode;

use iris_explorer::{pipeline, ui};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Analysis failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<()> {
    let loaded = pipeline::load()?;
    // Raw-table overview goes out before the cleaning status line.
    print!("{}", pipeline::render_overview(&loaded)?);
    let analysis = pipeline::analyze(loaded)?;
    print!("{}", pipeline::render_summary(&analysis.summary)?);
    ui::show_charts(analysis.charts)
}
