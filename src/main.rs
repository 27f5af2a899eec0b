mod assets;
mod error;
mod event;
mod game;
mod geometry;
mod gui;
mod input_system;
mod settings;
mod table;
mod text;

use log::info;

use assets::AssetStore;
use error::AppError;
use game::{App, UiContext};
use settings::Settings;

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = Settings::default_path();
    let settings = Settings::load_or_default(&settings_path);

    let sdl_context = sdl2::init().map_err(AppError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(AppError::Sdl)?;
    let _image_context = sdl2::image::init(sdl2::image::InitFlag::PNG).map_err(AppError::Sdl)?;

    let window = video_subsystem
        .window(
            &settings.window_title,
            settings.window_width,
            settings.window_height,
        )
        .position_centered()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .build()
        .map_err(|e| AppError::Sdl(e.to_string()))?;

    let texture_creator = canvas.texture_creator();
    let assets = AssetStore::load(&texture_creator, &settings.asset_dir).map_err(AppError::from)?;
    info!(
        "Loaded {} textures from {}",
        assets.len(),
        settings.asset_dir.display()
    );

    let event_pump = sdl_context.event_pump().map_err(AppError::Sdl)?;

    let ctx = UiContext::new(settings, settings_path);
    App::new(canvas, event_pump, assets, ctx).run()?;
    Ok(())
}
