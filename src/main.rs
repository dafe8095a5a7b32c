// nescore - main entry point
//
// Loads the ROM named on the command line and runs it in the display
// window. Logging goes through env_logger (RUST_LOG=debug for details).

use nescore::display::{run_display, WindowConfig};
use nescore::emulator::{Emulator, EmulatorConfig};
use std::env;
use std::process;

/// Default configuration file path
const CONFIG_FILE: &str = "nescore.toml";

fn main() {
    env_logger::init();

    let rom_path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: nescore <rom.nes>");
            process::exit(2);
        }
    };

    let config = EmulatorConfig::load_or_default(CONFIG_FILE);
    let window_config = WindowConfig::new()
        .with_scale(config.video.scale)
        .with_fps(config.video.fps)
        .with_vsync(config.video.vsync);

    let mut emulator = Emulator::with_config(config);
    if let Err(err) = emulator.load_rom(&rom_path) {
        eprintln!("failed to load {}: {}", rom_path, err);
        process::exit(1);
    }

    if let Err(err) = run_display(window_config, emulator) {
        eprintln!("display error: {}", err);
        process::exit(1);
    }
}
