use crate::draw::{Color, DEFAULT_POINT_COLOR, LINE_COLOR};

/// Configure a prediction error plot
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionErrorParams {
    point_color: Color,
    line_color: Color,
    title: Option<String>,
    random_state: Option<u64>,
}

impl Default for PredictionErrorParams {
    fn default() -> Self {
        Self::new()
    }
}

impl PredictionErrorParams {
    pub fn new() -> Self {
        PredictionErrorParams {
            point_color: DEFAULT_POINT_COLOR,
            line_color: LINE_COLOR,
            title: None,
            random_state: None,
        }
    }

    /// Set the color of the error points.
    /// Defaults to `#1f77b4` if not set.
    pub fn point_color(mut self, point_color: Color) -> Self {
        self.point_color = point_color;
        self
    }

    /// Set the color of the best fit line.
    /// Defaults to `#111111` if not set.
    pub fn line_color(mut self, line_color: Color) -> Self {
        self.line_color = line_color;
        self
    }

    /// Replace the default title written by `finalize`.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Seed of the train/test split performed by the quick method.
    /// The split is seeded from entropy if not set.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn get_point_color(&self) -> Color {
        self.point_color
    }

    pub fn get_line_color(&self) -> Color {
        self.line_color
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_random_state(&self) -> Option<u64> {
        self.random_state
    }
}

/// Configure a residuals plot
#[derive(Debug, Clone, PartialEq)]
pub struct ResidualsParams {
    train_color: Color,
    test_color: Color,
    line_color: Color,
    title: Option<String>,
    random_state: Option<u64>,
}

impl Default for ResidualsParams {
    fn default() -> Self {
        Self::new()
    }
}

impl ResidualsParams {
    pub fn new() -> Self {
        ResidualsParams {
            train_color: Color::BLUE,
            test_color: Color::GREEN,
            line_color: LINE_COLOR,
            title: None,
            random_state: None,
        }
    }

    /// Set the color of the training residuals. They are always drawn at half
    /// opacity so that test residuals stand out.
    /// Defaults to blue if not set.
    pub fn train_color(mut self, train_color: Color) -> Self {
        self.train_color = train_color;
        self
    }

    /// Set the color of the test residuals, drawn at full opacity.
    /// Defaults to green if not set.
    pub fn test_color(mut self, test_color: Color) -> Self {
        self.test_color = test_color;
        self
    }

    /// Set the color of the zero error line.
    /// Defaults to `#111111` if not set.
    pub fn line_color(mut self, line_color: Color) -> Self {
        self.line_color = line_color;
        self
    }

    /// Replace the default title written by `finalize`.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Seed of the train/test split performed by the quick method.
    /// The split is seeded from entropy if not set.
    pub fn random_state(mut self, random_state: u64) -> Self {
        self.random_state = Some(random_state);
        self
    }

    pub fn get_train_color(&self) -> Color {
        self.train_color
    }

    pub fn get_test_color(&self) -> Color {
        self.test_color
    }

    pub fn get_line_color(&self) -> Color {
        self.line_color
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn get_random_state(&self) -> Option<u64> {
        self.random_state
    }
}
