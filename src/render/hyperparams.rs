use crate::error::{Result, VisualizerError};
use crate::param_guard::ParamGuard;

/// A verified set of figure parameters ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderValidParams {
    width: u32,
    height: u32,
    margin: u32,
    font_size: u32,
}

impl RenderValidParams {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn margin(&self) -> u32 {
        self.margin
    }

    pub fn font_size(&self) -> u32 {
        self.font_size
    }
}

/// Figure parameters during construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderParams(RenderValidParams);

impl Default for RenderParams {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderParams {
    pub fn new() -> RenderParams {
        Self(RenderValidParams {
            width: 640,
            height: 480,
            margin: 10,
            font_size: 14,
        })
    }

    /// Set the figure width in pixels.
    /// Defaults to `640` if not set.
    pub fn width(mut self, width: u32) -> Self {
        self.0.width = width;
        self
    }

    /// Set the figure height in pixels.
    /// Defaults to `480` if not set.
    pub fn height(mut self, height: u32) -> Self {
        self.0.height = height;
        self
    }

    /// Set the blank border around the chart in pixels.
    /// Defaults to `10` if not set.
    pub fn margin(mut self, margin: u32) -> Self {
        self.0.margin = margin;
        self
    }

    /// Set the size of tick labels and axis descriptions. The title is drawn
    /// slightly larger.
    /// Defaults to `14` if not set.
    pub fn font_size(mut self, font_size: u32) -> Self {
        self.0.font_size = font_size;
        self
    }
}

impl ParamGuard for RenderParams {
    type Checked = RenderValidParams;
    type Error = VisualizerError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.width == 0 || self.0.height == 0 {
            Err(VisualizerError::InvalidFigureSize(self.0.width, self.0.height))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
