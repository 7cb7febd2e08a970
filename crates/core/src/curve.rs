use crate::Point;

/// A pure real-to-real function that a [`Chart`](crate::Chart) can render.
///
/// Curves are small value types whose parameters are fixed at construction.
/// Evaluation never fails: degenerate parameters yield non-finite values,
/// which charts are expected to skip or display as they see fit.
pub trait Curve {
    /// Evaluates the curve at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Evaluates the curve at `n` evenly spaced points across `range`.
    ///
    /// Both ends of the range are included when `n >= 2`. A single sample is
    /// taken at the start of the range, and `n = 0` yields no points.
    #[allow(clippy::cast_precision_loss)]
    fn sample(&self, range: [f64; 2], n: usize) -> Vec<Point> {
        let [start, end] = range;
        match n {
            0 => Vec::new(),
            1 => vec![Point::new(start, self.eval(start))],
            _ => {
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let x = if i == n - 1 {
                            end
                        } else {
                            start + step * i as f64
                        };
                        Point::new(x, self.eval(x))
                    })
                    .collect()
            }
        }
    }
}

impl<C: Curve + ?Sized> Curve for Box<C> {
    fn eval(&self, x: f64) -> f64 {
        (**self).eval(x)
    }
}
