//! Visual presenter - derives the age-versus-salary scatter view.

use crate::data::Person;

/// Fraction of the data range added on each side of the axis bounds.
const BOUNDS_PADDING: f64 = 0.15;

/// Dash pattern period, in interpolation steps, for gridlines.
const DASH_PERIOD: usize = 4;

/// Interpolation steps per gridline.
const GRID_STEPS: usize = 48;

/// One point per record with `(x, y) = (age, salary)`, plus padded axis
/// bounds. The view holds no other record attributes and computes nothing
/// beyond what rendering needs.
#[derive(Debug, Clone)]
pub struct ScatterView {
    points: Vec<(f64, f64)>,
    x_bounds: [f64; 2],
    y_bounds: [f64; 2],
}

impl ScatterView {
    /// Build the view from a record sequence.
    pub fn new(people: &[Person]) -> Self {
        let points: Vec<(f64, f64)> = people
            .iter()
            .map(|p| (f64::from(p.age), p.salary))
            .collect();
        let x_bounds = padded_bounds(points.iter().map(|&(x, _)| x));
        let y_bounds = padded_bounds(points.iter().map(|&(_, y)| y));
        Self {
            points,
            x_bounds,
            y_bounds,
        }
    }

    /// Plotted points, in input order.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the plot holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X-axis bounds (age).
    pub fn x_bounds(&self) -> [f64; 2] {
        self.x_bounds
    }

    /// Y-axis bounds (salary).
    pub fn y_bounds(&self) -> [f64; 2] {
        self.y_bounds
    }

    /// Points forming dashed gridlines at the interior tick positions of
    /// both axes.
    pub fn grid_points(&self) -> Vec<(f64, f64)> {
        let mut grid = Vec::new();
        for x in interior_ticks(self.x_bounds) {
            dashed_line(&mut grid, |t| (x, lerp(self.y_bounds, t)));
        }
        for y in interior_ticks(self.y_bounds) {
            dashed_line(&mut grid, |t| (lerp(self.x_bounds, t), y));
        }
        grid
    }
}

/// Min/max of the values, padded on both sides. An empty sequence falls
/// back to a unit range, as does a degenerate one.
fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
        (min.min(v), max.max(v))
    });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    let mut range = max - min;
    if range.abs() < 1e-10 {
        range = 1.0;
    }
    let padding = range * BOUNDS_PADDING;
    [min - padding, max + padding]
}

/// Tick positions strictly inside the bounds, at quarter divisions.
fn interior_ticks(bounds: [f64; 2]) -> [f64; 3] {
    let step = (bounds[1] - bounds[0]) / 4.0;
    [
        bounds[0] + step,
        bounds[0] + 2.0 * step,
        bounds[0] + 3.0 * step,
    ]
}

fn lerp(bounds: [f64; 2], t: f64) -> f64 {
    bounds[0] + t * (bounds[1] - bounds[0])
}

/// Sample a line into `out`, keeping half of each dash period.
fn dashed_line(out: &mut Vec<(f64, f64)>, point_at: impl Fn(f64) -> (f64, f64)) {
    for i in 0..=GRID_STEPS {
        if i % DASH_PERIOD < DASH_PERIOD / 2 {
            out.push(point_at(i as f64 / GRID_STEPS as f64));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Roster;

    #[test]
    fn one_point_per_record() {
        let roster = Roster::sample();
        let view = ScatterView::new(roster.people());
        assert_eq!(view.len(), roster.len());

        for (point, person) in view.points().iter().zip(roster.people()) {
            assert_eq!(*point, (f64::from(person.age), person.salary));
        }
    }

    #[test]
    fn bounds_pad_the_data_range() {
        let view = ScatterView::new(Roster::sample().people());

        // Ages span 22..50, salaries 48000..120000, padded by 15%.
        let [x_min, x_max] = view.x_bounds();
        assert!((x_min - 17.8).abs() < 1e-9);
        assert!((x_max - 54.2).abs() < 1e-9);

        let [y_min, y_max] = view.y_bounds();
        assert!((y_min - 37_200.0).abs() < 1e-6);
        assert!((y_max - 130_800.0).abs() < 1e-6);
    }

    #[test]
    fn empty_input_yields_empty_plot() {
        let view = ScatterView::new(&[]);
        assert!(view.is_empty());
        assert!(view.points().is_empty());
        assert_eq!(view.x_bounds(), [0.0, 1.0]);
        assert_eq!(view.y_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn single_record_gets_a_usable_range() {
        let roster = Roster::sample();
        let view = ScatterView::new(&roster.people()[..1]);
        assert_eq!(view.len(), 1);

        let [x_min, x_max] = view.x_bounds();
        assert!(x_min < 30.0 && 30.0 < x_max);
        let [y_min, y_max] = view.y_bounds();
        assert!(y_min < 85000.0 && 85000.0 < y_max);
    }

    #[test]
    fn gridlines_stay_within_bounds() {
        let view = ScatterView::new(Roster::sample().people());
        let grid = view.grid_points();
        assert!(!grid.is_empty());

        let [x_min, x_max] = view.x_bounds();
        let [y_min, y_max] = view.y_bounds();
        for &(x, y) in &grid {
            assert!(x >= x_min && x <= x_max);
            assert!(y >= y_min && y <= y_max);
        }
    }

    #[test]
    fn gridlines_are_dashed() {
        let view = ScatterView::new(Roster::sample().people());
        // Six lines, half of each dash period kept.
        let per_line = (0..=GRID_STEPS)
            .filter(|i| i % DASH_PERIOD < DASH_PERIOD / 2)
            .count();
        assert_eq!(view.grid_points().len(), 6 * per_line);
        assert!(per_line < GRID_STEPS);
    }
}
