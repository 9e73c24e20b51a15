use tracing::{info, Level};

mod assets;
mod config;
mod editor;
mod flow;
mod gui;
mod input_system;
mod level;
mod render;
mod run_flag;
mod sdl_frontend;
mod text;
mod tile;

#[cfg(test)]
mod testing;

use config::EditorConfig;
use flow::MenuFlow;
use run_flag::RunFlag;
use sdl_frontend::SdlFrontend;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Level editor v{} starting", env!("CARGO_PKG_VERSION"));

    let config = EditorConfig::load();
    let (screen_width, screen_height) = config.screen_size();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG)?;

    let window = video_subsystem
        .window("Level Editor", screen_width, screen_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let event_pump = sdl_context.event_pump()?;

    // Digits for level ids arrive as text input events
    video_subsystem.text_input().start();

    let textures = assets::load_tile_textures(&texture_creator, &config.tiles_dir)?;
    let max_tile = assets::max_tile_id(&textures);

    let store = config.level_store();
    let run = RunFlag::new();
    let mut frontend = SdlFrontend::new(canvas, event_pump, &textures, config.target_fps);

    MenuFlow::new(&mut frontend, &store, &config, max_tile, &run).run()?;

    info!("Level editor shutting down");
    Ok(())
}
