//! Dailyjoke renders a "joke of the day" image.
//!
//! A question/answer pair is picked from an ordered catalog by counting days since a
//! fixed start date, both strings are wrapped and shrunk until they fit a text box, and
//! the result is drawn over a background image and written as PNG.
//!
//! # Pipeline overview
//!
//! 1. **Select**: `JokeCatalog + date -> (DateCursor, Joke)`
//! 2. **Fit**: `Joke + TextMeasure -> FitResult` (greedy wrap + linear font-size descent)
//! 3. **Place**: `FitResult -> Vec<PlacedLine>` (right-anchored, vertically centered)
//! 4. **Render**: `PlacedLine`s over the background -> `FrameRGBA` (CPU backend)
//! 5. **Encode**: `FrameRGBA -> PNG`
//!
//! Every stage takes an explicit [`DailyJokeConfig`] and returns a [`DailyJokeResult`]
//! whose error variant names the failing stage.
#![forbid(unsafe_code)]

mod assets;
mod catalog;
mod encode;
mod foundation;
mod pipeline;
mod render;
mod text;

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;

pub use assets::decode::{PreparedImage, decode_background, load_background, load_font};
pub use catalog::model::{Joke, JokeCatalog};
pub use catalog::select::{DateCursor, days_passed, joke_index, today_in};
pub use encode::png::write_png;
pub use foundation::config::DailyJokeConfig;
pub use foundation::error::{DailyJokeError, DailyJokeResult};
pub use pipeline::{DailyJoke, RenderOutcome, prepare_daily_joke, render_daily_joke};
pub use render::composite::{over, over_in_place, unpremultiply_rgba8_in_place};
pub use render::cpu::{CpuTextRenderer, FrameRGBA};
pub use render::place::{PlacedLine, TextBoxLayout, place_lines};
pub use text::fit::{FitConstraints, FitResult, TextBlock, fit};
pub use text::measure::{FontMetrics, TextBrushRgba8, TextLayoutEngine, TextMeasure};
pub use text::wrap::wrap_text;
