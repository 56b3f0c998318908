// NES Emulator - Main Entry Point

use nes_rs::display::{run_display, run_emulator, WindowConfig};
use nes_rs::Emulator;
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("NES Emulator (nes-rs) v0.1.0");
    println!("==============================");
    println!();

    let args: Vec<String> = env::args().collect();

    match args.get(1) {
        Some(rom_path) => {
            let mut emulator = Emulator::new();
            emulator.load_rom(rom_path)?;

            let video = emulator.config().video.clone();
            let window_config = WindowConfig::new()
                .with_scale(video.scale)
                .with_fps(video.fps)
                .with_vsync(video.vsync);

            println!("Loaded ROM: {}", rom_path);
            println!("Press the close button or Ctrl+C to exit.");
            println!();

            run_emulator(window_config, emulator)?;
        }
        None => {
            println!("No ROM path given, showing a test pattern instead.");
            println!("Usage: nes-rs <path-to-rom.nes>");
            println!();

            let config = WindowConfig::new()
                .with_scale(3)
                .with_fps(60)
                .with_vsync(true);

            println!("Press the close button or Ctrl+C to exit.");
            println!();

            run_display(config)?;
        }
    }

    println!("Window closed.");
    Ok(())
}
