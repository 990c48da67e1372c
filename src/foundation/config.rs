use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{
    foundation::error::{DailyJokeError, DailyJokeResult},
    render::place::TextBoxLayout,
    text::fit::FitConstraints,
};

/// Immutable run configuration. `Default` reproduces the production constants.
///
/// Loaded from JSON, any subset of fields may be given; the rest keep their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DailyJokeConfig {
    /// Day on which catalog entry 0 is shown.
    pub start_date: NaiveDate,
    /// IANA zone whose civil calendar defines "today".
    pub timezone: String,

    /// Expected background width in pixels.
    pub image_width: u32,
    /// Expected background height in pixels.
    pub image_height: u32,
    /// Text box width; the box is anchored to the right edge of the image.
    pub text_box_width: u32,
    /// Text box height; the fitted text is centered vertically inside it.
    pub text_box_height: u32,

    /// Question font size the fit starts from.
    pub question_size_start: u32,
    /// Answer font size the fit starts from.
    pub answer_size_start: u32,
    /// Floor size; the fit stops shrinking once the question reaches it.
    pub min_font_size: u32,
    /// Amount both sizes shrink per fit iteration.
    pub size_step: u32,
    /// Extra pixels added below every line.
    pub line_spacing: u32,
    /// Gap between the question block and the answer block.
    pub block_spacing: u32,
    /// Straight (non-premultiplied) RGBA text color.
    pub text_color: [u8; 4],

    pub font_path: PathBuf,
    pub background_path: PathBuf,
    pub output_path: PathBuf,
    pub jokes_path: PathBuf,
}

impl Default for DailyJokeConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2026, 1, 25).unwrap_or_default(),
            timezone: "Europe/Amsterdam".to_string(),
            image_width: 2048,
            image_height: 512,
            text_box_width: 1140,
            text_box_height: 440,
            question_size_start: 64,
            answer_size_start: 44,
            min_font_size: 20,
            size_step: 2,
            line_spacing: 10,
            block_spacing: 24,
            text_color: [255, 255, 255, 255],
            font_path: PathBuf::from("assets/fonts/VT323-Regular.ttf"),
            background_path: PathBuf::from("assets/background.png"),
            output_path: PathBuf::from("dailyjoke/today.png"),
            jokes_path: PathBuf::from("data/jokes.json"),
        }
    }
}

impl DailyJokeConfig {
    /// Parse a JSON config document.
    pub fn from_json_str(json: &str) -> DailyJokeResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DailyJokeError::config(format!("parse config JSON: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_file(path: &Path) -> DailyJokeResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DailyJokeError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> DailyJokeResult<()> {
        self.timezone()?;

        if self.image_width == 0 || self.image_height == 0 {
            return Err(DailyJokeError::config("image width/height must be > 0"));
        }
        if self.image_width > u32::from(u16::MAX) || self.image_height > u32::from(u16::MAX) {
            return Err(DailyJokeError::config(format!(
                "image width/height must be <= {}",
                u16::MAX
            )));
        }
        if self.text_box_width == 0 || self.text_box_height == 0 {
            return Err(DailyJokeError::config("text box width/height must be > 0"));
        }
        if self.text_box_width > self.image_width || self.text_box_height > self.image_height {
            return Err(DailyJokeError::config("text box must fit inside the image"));
        }
        if self.min_font_size == 0 {
            return Err(DailyJokeError::config("min_font_size must be > 0"));
        }
        if self.size_step == 0 {
            return Err(DailyJokeError::config("size_step must be > 0"));
        }
        for (name, value) in [
            ("question_size_start", self.question_size_start),
            ("answer_size_start", self.answer_size_start),
        ] {
            if value < self.min_font_size {
                return Err(DailyJokeError::config(format!(
                    "{name} ({value}) must be >= min_font_size ({})",
                    self.min_font_size
                )));
            }
        }
        Ok(())
    }

    /// Resolve the configured zone name.
    pub fn timezone(&self) -> DailyJokeResult<chrono_tz::Tz> {
        self.timezone
            .parse::<chrono_tz::Tz>()
            .map_err(|_| DailyJokeError::config(format!("invalid timezone: {}", self.timezone)))
    }

    pub fn fit_constraints(&self) -> FitConstraints {
        FitConstraints {
            question_size_start: self.question_size_start,
            answer_size_start: self.answer_size_start,
            min_font_size: self.min_font_size,
            size_step: self.size_step,
            max_width: self.text_box_width as f32,
            max_height: to_i32(self.text_box_height),
            line_spacing: to_i32(self.line_spacing),
            block_spacing: to_i32(self.block_spacing),
        }
    }

    pub fn text_box_layout(&self) -> TextBoxLayout {
        TextBoxLayout {
            origin_x: to_i32(self.image_width.saturating_sub(self.text_box_width)),
            box_height: to_i32(self.text_box_height),
            block_spacing: to_i32(self.block_spacing),
        }
    }
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
