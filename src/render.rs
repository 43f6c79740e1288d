use anyhow::{anyhow, Context, Result};
use glutin_window::GlutinWindow;
use graphics::character::CharacterCache;
use graphics::{Context as DrawContext, Transformed};
use log::{info, warn};
use opengl_graphics::{GlGraphics, GlyphCache, OpenGL, TextureSettings};
use piston::event_loop::{EventLoop, EventSettings, Events};
use piston::input::{RenderEvent, UpdateEvent};
use piston::window::WindowSettings;

use crate::body::Body;
use crate::config::DisplayConfig;
use crate::system::System;
use crate::view::{self, Viewport};
use crate::Color;

const BACKGROUND: Color = [0.0, 0.0, 0.0, 1.0];
const LABEL_COLOR: Color = [1.0, 1.0, 1.0, 1.0];
const LABEL_SIZE: u32 = 16;
const TRAIL_RADIUS: f64 = 1.0;

/// Opens a window and steps `system` once per update until it is closed.
pub fn run_window(system: &mut System, display: &DisplayConfig) -> Result<()> {
    let opengl = OpenGL::V3_2;
    let mut window: GlutinWindow = WindowSettings::new(display.title.clone(), [display.width, display.height])
        .graphics_api(opengl)
        .exit_on_esc(true)
        .build()
        .map_err(|e| anyhow!("failed to open window: {}", e))?;

    let mut gl = GlGraphics::new(opengl);
    let mut glyphs = load_font(display);
    let viewport = Viewport::new(display.pixels_per_au, display.width, display.height);

    let mut events = Events::new(EventSettings::new().max_fps(display.fps).ups(display.fps));
    while let Some(e) = events.next(&mut window) {
        if let Some(args) = e.render_args() {
            gl.draw(args.viewport(), |c, g| draw_system(system, &viewport, glyphs.as_mut(), c, g))?;
        }

        if e.update_args().is_some() {
            system.step().context("simulation step failed")?;
        }
    }

    info!("Window closed at {}", system.elapsed_time());
    Ok(())
}

fn load_font(display: &DisplayConfig) -> Option<GlyphCache<'static>> {
    let path = display.font.as_ref()?;
    match GlyphCache::new(path, (), TextureSettings::new()) {
        Ok(cache) => Some(cache),
        Err(e) => {
            warn!("Could not load font {}: {}, distance labels disabled", path.display(), e);
            None
        }
    }
}

/// Clears the frame and draws trails, bodies and distance labels. A planet
/// has no label until the first step has measured its distance to the primary.
fn draw_system(
    system: &System,
    viewport: &Viewport,
    mut glyphs: Option<&mut GlyphCache<'static>>,
    c: DrawContext,
    g: &mut GlGraphics,
) -> Result<()> {
    graphics::clear(BACKGROUND, g);

    for body in system.bodies() {
        draw_trail(body, viewport, c, g);
    }

    for body in system.bodies() {
        let [x, y] = viewport.to_screen(body.position());
        let circle = graphics::ellipse::circle(x, y, body.radius() as f64);
        graphics::ellipse(body.color(), circle, c.transform, g);

        if let (Some(glyphs), Some(distance)) = (glyphs.as_deref_mut(), body.distance_to_primary()) {
            draw_label(&view::distance_label(distance), x, y, glyphs, c, g)?;
        }
    }

    Ok(())
}

fn draw_trail(body: &dyn Body, viewport: &Viewport, c: DrawContext, g: &mut GlGraphics) {
    let trail = body.trail();
    if !trail.is_drawable() {
        return
    }

    let points: Vec<[f64; 2]> = trail.iter().map(|p| viewport.to_screen(p)).collect();
    for w in points.windows(2) {
        graphics::line(
            body.color(),
            TRAIL_RADIUS,
            [w[0][0], w[0][1], w[1][0], w[1][1]],
            c.transform,
            g,
        );
    }
}

// Centred on (x, y)
fn draw_label(text: &str, x: f64, y: f64, glyphs: &mut GlyphCache<'static>, c: DrawContext, g: &mut GlGraphics) -> Result<()> {
    let width = glyphs.width(LABEL_SIZE, text).map_err(anyhow::Error::msg)?;
    let transform = c.transform.trans(x - width / 2.0, y + LABEL_SIZE as f64 / 2.0);
    graphics::text(LABEL_COLOR, LABEL_SIZE, text, glyphs, transform, g).map_err(anyhow::Error::msg)
}
