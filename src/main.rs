use std::process::ExitCode;

use particle_box::config::wall_clock_seed;

fn main() -> ExitCode {
    env_logger::init();

    match particle_box::run(wall_clock_seed()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
