use crate::foundation::core::Canvas;
use crate::foundation::error::{IdenticonError, IdenticonResult};
use crate::pipeline::identity::Identity;
use crate::render::backend::{FrameRGBA, RenderBackend, RenderSettings};

/// CPU backend: fills each region with `vello_cpu`.
pub struct CpuBackend {
    settings: RenderSettings,
    width: u16,
    height: u16,
    ctx: Option<vello_cpu::RenderContext>,
}

impl CpuBackend {
    /// Validate `settings` and build a backend for them.
    pub fn new(settings: RenderSettings) -> IdenticonResult<Self> {
        Canvas::new(settings.canvas.width, settings.canvas.height)?;
        let width: u16 = settings
            .canvas
            .width
            .try_into()
            .map_err(|_| IdenticonError::validation("canvas width exceeds u16"))?;
        let height: u16 = settings
            .canvas
            .height
            .try_into()
            .map_err(|_| IdenticonError::validation("canvas height exceeds u16"))?;
        Ok(Self {
            settings,
            width,
            height,
            ctx: None,
        })
    }

    /// Settings this backend was built with.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(level = "debug", skip_all, fields(name = %identity.name))]
    fn render(&mut self, identity: &Identity) -> IdenticonResult<FrameRGBA> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) => ctx,
            None => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();

        let (w, h) = (f64::from(self.width), f64::from(self.height));
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
        }

        let [r, g, b, a] = identity.color.to_opaque_rgba();
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        let mut visible = 0usize;
        for region in &identity.regions {
            if region.top_left.x >= self.settings.canvas.width
                || region.top_left.y >= self.settings.canvas.height
            {
                continue;
            }
            ctx.fill_rect(&region.to_rect());
            visible += 1;
        }
        tracing::debug!(
            regions = identity.regions.len(),
            visible,
            "filled identicon regions"
        );

        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.ctx = Some(ctx);

        let data = pixmap.data_as_u8_slice().to_vec();
        let expected = self.settings.canvas.pixel_count() * 4;
        if data.len() != expected {
            return Err(IdenticonError::render(format!(
                "pixmap holds {} bytes, expected {expected}",
                data.len()
            )));
        }

        Ok(FrameRGBA {
            width: self.settings.canvas.width,
            height: self.settings.canvas.height,
            data,
            premultiplied: true,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
