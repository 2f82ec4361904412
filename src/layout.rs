//! Canvas geometry for a derived poster: where each bar, goal glyph, score mark and grain speck
//! lands. All lengths are in canvas pixels.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use tinyrand::Rand;
use tracing::debug;

use crate::config::PosterConfig;
use crate::gradient::GradientStop;
use crate::grid::{GoalGridPosition, COLUMNS, ROWS};
use crate::match_data::Side;
use crate::palette::Rgb;
use crate::poster::{PosterIr, Score};
use crate::stats::Metric;
use crate::timeline::GlyphShape;

/// The header above the data area takes `1 / HEADER_SPLIT` of the viewport height.
const HEADER_SPLIT: f64 = 2.9;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}
impl Rect {
    pub fn centre(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    /// Multiplier applied to every design unit (margins, marks, strokes).
    pub scale: f64,
}
impl Canvas {
    pub fn a3() -> Self {
        Self {
            width: 3502.0,
            height: 4962.0,
            scale: 5.0,
        }
    }

    pub fn units(&self, units: f64) -> f64 {
        units * self.scale
    }

    pub fn margin(&self) -> f64 {
        self.units(65.0)
    }
}

/// The fixed regions of a canvas: the viewport inside the margins and the data area holding the
/// gradient bars, divided into grid cells.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub viewport: Rect,
    pub data_area: Rect,
    pub bar_height: f64,
    pub cell_width: f64,
}
impl Frame {
    pub fn new(canvas: &Canvas) -> Self {
        let margin = canvas.margin();
        let viewport = Rect {
            x: margin,
            y: margin,
            width: canvas.width - margin * 2.0,
            height: canvas.height - margin * 2.0,
        };
        let header = viewport.height / HEADER_SPLIT;
        let data_top = (header + viewport.y).round();
        let data_height = (viewport.height - header).round() + 1.0;
        let bar_height = (data_height / ROWS as f64).round();
        Self {
            viewport,
            data_area: Rect {
                x: viewport.x,
                y: data_top,
                width: viewport.width,
                height: bar_height * ROWS as f64,
            },
            bar_height,
            cell_width: viewport.width / COLUMNS as f64,
        }
    }

    pub fn bar(&self, row: usize) -> Rect {
        Rect {
            x: self.data_area.x,
            y: self.data_area.y + row as f64 * self.bar_height,
            width: self.data_area.width,
            height: self.bar_height,
        }
    }

    pub fn cell(&self, position: &GoalGridPosition) -> Rect {
        Rect {
            x: self.data_area.x + (position.column - 1) as f64 * self.cell_width,
            y: self.data_area.y + (position.row - 1) as f64 * self.bar_height,
            width: self.cell_width,
            height: self.bar_height,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarLayout {
    pub metric: Metric,
    pub rect: Rect,
    pub stops: Vec<GradientStop>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalGlyph {
    pub minute: i32,
    pub side: Side,
    /// Cell punched out of the bars, filled with the background.
    pub cell: Rect,
    pub centre: Point,
    pub shape: GlyphShape,
    /// Radius of a circle, or side length of a diamond (a square turned 45°).
    pub size: f64,
    pub color: Rgb,
}

pub fn glyph_size(cell: &Rect, shape: GlyphShape) -> f64 {
    match shape {
        GlyphShape::Circle => cell.height / 3.9,
        GlyphShape::Diamond => cell.height / 2.5,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    pub centre: Point,
    pub radius: f64,
    pub side: Side,
}

/// The score, as one mark per goal: home goals in a row above a bar, away goals below it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolLayout {
    pub marks: Vec<Mark>,
    pub bar: Rect,
    pub color: Rgb,
}
impl SymbolLayout {
    pub fn new(score: &Score, canvas: &Canvas, frame: &Frame, color: Rgb) -> Self {
        let radius = canvas.units(4.0);
        let step = radius + canvas.units(10.0);
        let row_width = |goals: u8| {
            if goals == 0 {
                0.0
            } else {
                (goals - 1) as f64 * step + radius * 2.0
            }
        };
        let widest = f64::max(row_width(score.home), row_width(score.away));
        let bar_width = f64::max(widest + canvas.units(13.0), canvas.units(25.0));

        let mut top = frame.viewport.y;
        if score.home == 0 && score.away > 0 {
            top += canvas.units(13.0);
        }
        let centre_x = frame.viewport.right() - bar_width / 2.0;

        let mut marks = Vec::with_capacity(score.total() as usize);
        for (side, goals, row_top) in [
            (Side::Home, score.home, top),
            (Side::Away, score.away, top + canvas.units(25.0)),
        ] {
            let left = centre_x - row_width(goals) / 2.0;
            marks.extend((0..goals).map(|index| Mark {
                centre: Point {
                    x: left + radius + index as f64 * step,
                    y: row_top + radius,
                },
                radius,
                side,
            }));
        }

        let mut bar_top = top + radius + canvas.units(10.0);
        if score.total() == 0 {
            bar_top += canvas.units(21.0);
        }
        Self {
            marks,
            bar: Rect {
                x: centre_x - bar_width / 2.0,
                y: bar_top,
                width: bar_width,
                height: canvas.units(3.5),
            },
            color,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PosterLayout {
    pub canvas: Canvas,
    pub frame: Frame,
    pub background: Rgb,
    pub bars: Vec<BarLayout>,
    pub goals: Vec<GoalGlyph>,
    pub symbol: SymbolLayout,
    /// Overlay specks over the data area; empty when noise is off.
    pub grain: Vec<Point>,
}

/// Derives a repeatable generator seed from the match title and the configured seed.
pub fn grain_seed(title: &str, seed: u64) -> u64 {
    let mut hasher = FxHasher::default();
    title.hash(&mut hasher);
    seed.hash(&mut hasher);
    hasher.finish()
}

#[inline]
fn random_f64(rand: &mut impl Rand) -> f64 {
    rand.next_u64() as f64 / u64::MAX as f64
}

pub fn scatter(area: &Rect, specks: usize, rand: &mut impl Rand) -> Vec<Point> {
    (0..specks)
        .map(|_| Point {
            x: area.x + random_f64(rand) * area.width,
            y: area.y + random_f64(rand) * area.height,
        })
        .collect()
}

pub fn compose(ir: &PosterIr, canvas: &Canvas, config: &PosterConfig, rand: &mut impl Rand) -> PosterLayout {
    let frame = Frame::new(canvas);
    let bars = ir
        .bars
        .iter()
        .map(|bar| BarLayout {
            metric: bar.metric,
            rect: frame.bar(bar.metric.row()),
            stops: bar.stops.clone(),
        })
        .collect();
    let goals = ir
        .goals()
        .map(|(event, position)| {
            let shape = event.shape();
            let cell = frame.cell(position);
            GoalGlyph {
                minute: event.time,
                side: event.side,
                cell,
                centre: cell.centre(),
                shape,
                size: glyph_size(&cell, shape),
                color: ir.colors.side(event.side),
            }
        })
        .collect();
    let symbol = SymbolLayout::new(&ir.score, canvas, &frame, ir.colors.foreground);
    let grain = if config.noise {
        scatter(&frame.data_area, config.grain_specks, rand)
    } else {
        vec![]
    };
    debug!(
        "laid out {} on {}x{}: data area {:?}, {} grain specks",
        ir.title,
        canvas.width,
        canvas.height,
        frame.data_area,
        grain.len()
    );
    PosterLayout {
        canvas: *canvas,
        frame,
        background: ir.colors.background,
        bars,
        goals,
        symbol,
        grain,
    }
}
