use std::path::PathBuf;

use chrono::NaiveDate;

use crate::{
    assets::decode::{load_background, load_font},
    catalog::{
        model::{Joke, JokeCatalog},
        select::{DateCursor, today_in},
    },
    encode::png::write_png,
    foundation::{config::DailyJokeConfig, error::DailyJokeResult},
    render::{
        cpu::CpuTextRenderer,
        place::{PlacedLine, place_lines},
    },
    text::{
        fit::{FitResult, fit},
        measure::{TextLayoutEngine, TextMeasure},
    },
};

/// Everything decided for one date before any pixels are drawn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyJoke {
    pub date: NaiveDate,
    pub cursor: DateCursor,
    pub joke: Joke,
    pub fit: FitResult,
    pub lines: Vec<PlacedLine>,
}

/// Result of a full render run.
#[derive(Clone, Debug)]
pub struct RenderOutcome {
    pub daily: DailyJoke,
    pub output_path: PathBuf,
}

/// Select the joke for `today`, fit it to the text box and place its lines.
pub fn prepare_daily_joke<M: TextMeasure + ?Sized>(
    config: &DailyJokeConfig,
    catalog: &JokeCatalog,
    today: NaiveDate,
    measure: &mut M,
) -> DailyJokeResult<DailyJoke> {
    let (cursor, joke) = catalog.select(config.start_date, today)?;
    tracing::info!(
        %today,
        days_passed = cursor.days_passed,
        index = cursor.index,
        "selected joke"
    );

    let constraints = config.fit_constraints();
    let fitted = fit(measure, &joke.question, &joke.answer, &constraints)?;
    if fitted.overflows(constraints.max_height) {
        tracing::warn!(
            total_height = fitted.total_height,
            box_height = constraints.max_height,
            "text still overflows at the minimum font size"
        );
    }
    tracing::info!(
        question_size = fitted.question_font_size(),
        answer_size = fitted.answer_font_size(),
        total_height = fitted.total_height,
        "fitted text"
    );

    let lines = place_lines(&fitted, &config.text_box_layout());
    Ok(DailyJoke {
        date: today,
        cursor,
        joke: joke.clone(),
        fit: fitted,
        lines,
    })
}

/// Run the whole pipeline and write the PNG to `config.output_path`.
///
/// `today` defaults to the current date in the configured time zone.
#[tracing::instrument(skip(config), fields(output = %config.output_path.display()))]
pub fn render_daily_joke(
    config: &DailyJokeConfig,
    today: Option<NaiveDate>,
) -> DailyJokeResult<RenderOutcome> {
    config.validate()?;
    let today = match today {
        Some(date) => date,
        None => today_in(config.timezone()?),
    };

    let catalog = JokeCatalog::load(&config.jokes_path)?;
    let mut engine = TextLayoutEngine::from_font_bytes(load_font(&config.font_path)?)?;
    let background = load_background(&config.background_path)?;
    if (background.width, background.height) != (config.image_width, config.image_height) {
        tracing::warn!(
            actual_width = background.width,
            actual_height = background.height,
            expected_width = config.image_width,
            expected_height = config.image_height,
            "background size differs from configured image size"
        );
    }

    let daily = prepare_daily_joke(config, &catalog, today, &mut engine)?;

    let renderer = CpuTextRenderer::new(&engine);
    let frame = renderer.render(
        &mut engine,
        &background,
        &daily.lines,
        config.text_color.into(),
    )?;
    write_png(&frame, &config.output_path)?;

    Ok(RenderOutcome {
        daily,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
