use crate::constants::*;
use crate::field::{Projected, Segment};
use web_sys as web;

fn rgba(color: [u8; 3], alpha: f32) -> String {
    format!("rgba({}, {}, {}, {})", color[0], color[1], color[2], alpha)
}

pub fn clear(ctx: &web::CanvasRenderingContext2d, width: f32, height: f32) {
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
}

pub fn draw_segments(ctx: &web::CanvasRenderingContext2d, segments: &[Segment], color: [u8; 3]) {
    ctx.set_line_width(LINE_WIDTH as f64);
    for seg in segments {
        ctx.set_stroke_style_str(&rgba(color, seg.opacity));
        ctx.begin_path();
        ctx.move_to(seg.a.x as f64, seg.a.y as f64);
        ctx.line_to(seg.b.x as f64, seg.b.y as f64);
        ctx.stroke();
    }
}

pub fn draw_points(ctx: &web::CanvasRenderingContext2d, projected: &[Projected], color: [u8; 3]) {
    for p in projected {
        let radius = (POINT_RADIUS_SCALE * p.scale).max(POINT_RADIUS_MIN);
        let fill = rgba(color, p.alpha);

        ctx.begin_path();
        _ = ctx.arc(
            p.pos.x as f64,
            p.pos.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.set_fill_style_str(&fill);
        ctx.fill();

        // Near-camera points get a soft glow; the shadow is reset right
        // away so it does not bleed into later draws.
        if p.scale > GLOW_SCALE_THRESHOLD {
            ctx.set_shadow_blur((GLOW_BLUR_SCALE * p.scale) as f64);
            ctx.set_shadow_color(&fill);
            ctx.fill();
            ctx.set_shadow_blur(0.0);
        }
    }
}
