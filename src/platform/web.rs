//! Browser platform: Canvas 2D drawing and DOM HUD

use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use crate::error::{Error, Result};
use crate::renderer::{Color, Surface, palette};
use crate::sim::geometry::Rect;
use crate::sim::state::{GamePhase, Hud, HudSnapshot};

pub fn document() -> Result<Document> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(Error::MissingElement("document"))
}

/// Look up the game canvas by element id
pub fn canvas_by_id(id: &'static str) -> Result<HtmlCanvasElement> {
    document()?
        .get_element_by_id(id)
        .ok_or(Error::MissingElement(id))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| Error::MissingElement(id))
}

/// High resolution time in milliseconds
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// `Surface` over a canvas 2D context. One canvas pixel per CSS pixel.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|_| Error::ContextUnavailable)?
            .ok_or(Error::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| Error::ContextUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Match the backing store to the element's layout size; returns the new size
    pub fn fit_to_client(&self) -> (f32, f32) {
        let w = self.canvas.client_width().max(0) as u32;
        let h = self.canvas.client_height().max(0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        (w as f32, h as f32)
    }

    fn trace_circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        if let Err(e) = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
        {
            log::warn!("arc failed: {:?}", e);
        }
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f32, f32) {
        (self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let (w, h) = self.size();
        self.ctx.set_fill_style_str(palette::BACKGROUND.0);
        self.ctx.fill_rect(0.0, 0.0, w as f64, h as f64);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(color.0);
        self.ctx
            .fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.trace_circle(center, radius);
        self.ctx.set_fill_style_str(color.0);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Color, line_width: f32) {
        self.trace_circle(center, radius);
        self.ctx.set_stroke_style_str(color.0);
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color) {
        self.ctx.begin_path();
        self.ctx.move_to(center.x as f64, center.y as f64);
        if let Err(e) = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            end as f64,
        ) {
            log::warn!("arc failed: {:?}", e);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color.0);
        self.ctx.fill();
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.close_path();
        self.ctx.set_fill_style_str(color.0);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        self.ctx.set_font(&format!("bold {}px monospace", size.round()));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(color.0);
        if let Err(e) = self.ctx.fill_text(text, pos.x as f64, pos.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}

/// DOM mirror of the HUD counters.
///
/// Elements are looked up once; any that are missing are skipped.
pub struct DomHud {
    keys: Option<HtmlElement>,
    shards: Option<HtmlElement>,
    player_health: Option<HtmlElement>,
    health_bar: Option<HtmlElement>,
    end_text: Option<HtmlElement>,
}

fn html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    let el = document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());
    if el.is_none() {
        log::warn!("HUD element #{} not found", id);
    }
    el
}

impl DomHud {
    pub fn new(document: &Document) -> Self {
        Self {
            keys: html_element(document, "keys-count"),
            shards: html_element(document, "shards-count"),
            player_health: html_element(document, "player-health"),
            health_bar: html_element(document, "health-bar"),
            end_text: html_element(document, "end-text"),
        }
    }
}

fn set_text(el: &Option<HtmlElement>, text: &str) {
    if let Some(el) = el {
        el.set_text_content(Some(text));
    }
}

impl Hud for DomHud {
    fn update_counters(&mut self, hud: &HudSnapshot) {
        set_text(&self.keys, &hud.keys.to_string());
        set_text(&self.shards, &hud.shards.to_string());
        set_text(&self.player_health, &hud.player_health.to_string());
        let end = match hud.phase {
            GamePhase::Playing => "",
            GamePhase::Won => "System restored",
            GamePhase::Lost => "System failure",
        };
        set_text(&self.end_text, end);
    }

    fn update_health_bar(&mut self, hud: &HudSnapshot) {
        if let Some(bar) = &self.health_bar {
            let width = format!("{}%", hud.system_health);
            if let Err(e) = bar.style().set_property("width", &width) {
                log::warn!("Failed to size health bar: {:?}", e);
            }
        }
    }
}
