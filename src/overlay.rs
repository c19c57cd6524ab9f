use crate::color;
use crate::poller::{SharedSettings, TitleCache};
use eframe::egui;
use std::time::Duration;

/// Base font size in points before the configured scale is applied.
pub const FONT_SIZE: f32 = 16.0;
/// Gap between the right screen edge and auto-aligned text.
pub const PADDING: f32 = 10.0;
/// Marquee speed in pixels per second.
pub const SCROLL_SPEED: f32 = 30.0;
/// Blank space between the end of the text and its looped copy.
pub const SCROLL_GAP: f32 = 40.0;

/// Width actually used for the text box: the text itself, capped at the
/// configured maximum.
pub fn box_width(text_width: f32, max_box_width: f32) -> f32 {
    text_width.min(max_box_width)
}

/// Text that fits inside the box is drawn statically, everything longer
/// scrolls.
pub fn needs_scroll(text_width: f32, max_box_width: f32) -> bool {
    text_width > max_box_width
}

/// Resolve the configured X position. `-1` is the auto-align sentinel: right
/// aligned against the screen edge with a small padding.
pub fn resolve_x(configured_x: i32, screen_width: f32, box_width: f32, scale: f32) -> f32 {
    if configured_x == -1 {
        screen_width - box_width - PADDING * scale
    } else {
        configured_x as f32 * scale
    }
}

/// Wall-clock driven marquee offset in `[0, text_width + gap)`. Advances at
/// `SCROLL_SPEED` px/s and wraps at the full scroll distance so the loop is
/// seamless.
pub fn marquee_offset(time: f64, text_width: f32, scale: f32) -> f32 {
    let speed = (SCROLL_SPEED * scale) as f64;
    let span = (text_width + SCROLL_GAP * scale) as f64;
    ((time * speed) % span) as f32
}

pub struct OverlayApp {
    settings: SharedSettings,
    cache: TitleCache,
}

impl OverlayApp {
    pub fn new(settings: SharedSettings, cache: TitleCache) -> Self {
        Self { settings, cache }
    }
}

impl eframe::App for OverlayApp {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        egui::Rgba::TRANSPARENT.to_array()
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The cache is refreshed once per second; repaint a little faster so
        // the marquee animation stays smooth.
        ctx.request_repaint_after(Duration::from_millis(50));

        let settings = self.settings.lock().unwrap().clone();
        if !settings.enabled {
            return;
        }
        let Some(title) = self.cache.get() else {
            return;
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let scale = settings.scale;
                let text = format!("Playing: {title}");
                let font = egui::FontId::proportional(FONT_SIZE * scale);
                let text_color = color::to_color32(settings.color());
                let galley = ui.fonts(|f| f.layout_no_wrap(text, font, text_color));

                let text_w = galley.size().x;
                let line_h = galley.size().y;
                let max_w = settings.max_box_width as f32 * scale;
                let box_w = box_width(text_w, max_w);

                let screen_w = ctx.screen_rect().width();
                let x = resolve_x(settings.x, screen_w, box_w, scale);
                let y = settings.y as f32 * scale;

                if !needs_scroll(text_w, max_w) {
                    ui.painter().galley(egui::pos2(x, y), galley, text_color);
                    return;
                }

                let clip = egui::Rect::from_min_size(egui::pos2(x, y), egui::vec2(box_w, line_h));
                let painter = ui.painter().with_clip_rect(clip);
                let time = ui.input(|i| i.time);
                let offset = marquee_offset(time, text_w, scale);
                let span = text_w + SCROLL_GAP * scale;

                painter.galley(egui::pos2(x - offset, y), galley.clone(), text_color);
                // Second copy trails the first so the loop never shows a gap
                // inside the box.
                if text_w - offset < box_w {
                    painter.galley(egui::pos2(x - offset + span, y), galley, text_color);
                }
            });
    }
}
