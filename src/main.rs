use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use raylib::prelude::*;

use carousel3d::config::{Args, Settings};
use carousel3d::constants::*;
use carousel3d::engine::Engine;
use carousel3d::manifest::load_slides;
use carousel3d::render::CarouselScene;

fn main() {
    env_logger::init();

    let settings = Settings::from(Args::parse());
    if let Err(e) = run(&settings) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(settings: &Settings) -> Result<()> {
    info!("Input path: {}", settings.image_dir.display());

    // --- Load Slides ---
    let slides = load_slides(&settings.image_dir, settings.manifest.as_deref())
        .with_context(|| format!("Error loading slides from '{}'", settings.image_dir.display()))?;

    let (mut rl, thread) = raylib::init()
        .size(settings.window_width, settings.window_height)
        .title("Project Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(settings.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut scene = CarouselScene::initialize(&mut rl, &thread, slides, settings)?;

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .context("Failed to create render texture")?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if !scene.render_frame(dt, &mut rl, &thread, &mut framebuffer) {
            break;
        }

        // Render texture is stored upside down
        let mut d = rl.begin_drawing(&thread);
        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    scene.shutdown();
    info!("Window closed");
    Ok(())
}
