use anyhow::Result;
use raylib::prelude::*;

use crate::config::Settings;
use crate::slide::Slide;

pub trait Engine {
    fn initialize(rl: &mut RaylibHandle, thread: &RaylibThread, slides: Vec<Slide>, settings: &Settings) -> Result<Self>
    where
        Self: Sized;
    /// Handles input, advances time by `dt` and draws into `framebuffer`. Returns false once finished.
    fn render_frame(&mut self, dt: f32, rl: &mut RaylibHandle, thread: &RaylibThread, framebuffer: &mut RenderTexture2D) -> bool;
    fn shutdown(&mut self);
}
