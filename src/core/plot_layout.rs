use crate::core::{LinearScale, Viewport};
use crate::error::{TimelineError, TimelineResult};

/// Geometry inputs for the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub padding: f64,
    pub time_axis_width: f64,
    pub point_size: f64,
    pub point_max_margin: f64,
}

/// Pixel scales for one draw pass.
///
/// x maps the visible time domain across the padded width; y maps artist
/// playcount `[1, max]` bottom-up so every playcount rank gets an equally
/// spaced row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub point_margin: f64,
}

impl PlotScales {
    pub fn compute(
        viewport: Viewport,
        geometry: PlotGeometry,
        time_domain: (f64, f64),
        max_artist_playcount: u32,
    ) -> TimelineResult<Self> {
        if !viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let plot_bottom =
            height - geometry.padding - geometry.time_axis_width / 2.0 - geometry.point_size;
        let plot_max_height = plot_bottom - geometry.padding;
        let rows = f64::from(max_artist_playcount.max(1) - 1);

        let mut point_margin = geometry.point_max_margin.floor();
        let mut plot_height = plot_max_height;
        while point_margin >= 0.0 {
            let candidate = rows * (geometry.point_size + point_margin);
            if candidate > plot_max_height {
                point_margin -= 1.0;
            } else {
                plot_height = candidate;
                break;
            }
        }
        let plot_top = plot_bottom - plot_height;

        Ok(Self {
            x: LinearScale::rounded(time_domain, (geometry.padding, width - geometry.padding))?,
            y: LinearScale::rounded(
                (1.0, f64::from(max_artist_playcount.max(1))),
                (plot_bottom, plot_top),
            )?,
            point_margin: point_margin.max(0.0),
        })
    }

    #[must_use]
    pub fn project(&self, timestamp: i64, artist_playcount: u32) -> (f64, f64) {
        (
            self.x.map(timestamp as f64),
            self.y.map(f64::from(artist_playcount)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{PlotGeometry, PlotScales};
    use crate::core::Viewport;

    fn geometry() -> PlotGeometry {
        PlotGeometry {
            padding: 10.0,
            time_axis_width: 4.0,
            point_size: 4.0,
            point_max_margin: 3.0,
        }
    }

    #[test]
    fn margin_shrinks_until_rows_fit() {
        // plot bottom = 200 - 10 - 2 - 4 = 184, max height = 174
        // 29 rows * (4 + 2) = 174 fits once the margin drops to 2
        let scales = PlotScales::compute(Viewport::new(400, 200), geometry(), (0.0, 100.0), 30)
            .expect("scales");
        assert!((scales.point_margin - 2.0).abs() <= f64::EPSILON);
        assert!((scales.y.map(1.0) - 184.0).abs() <= f64::EPSILON);
        assert!((scales.y.map(30.0) - 10.0).abs() <= f64::EPSILON);
    }

    #[test]
    fn x_scale_spans_padded_width() {
        let scales = PlotScales::compute(Viewport::new(400, 200), geometry(), (0.0, 100.0), 5)
            .expect("scales");
        assert_eq!(scales.x.range(), (10.0, 390.0));
    }

    #[test]
    fn invalid_viewport_is_rejected() {
        assert!(PlotScales::compute(Viewport::new(0, 200), geometry(), (0.0, 1.0), 5).is_err());
    }
}
