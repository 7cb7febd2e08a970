use std::{cell::RefCell, rc::Rc};

use crate::{Curve, Point};

/// The rendering collaborator an exercise draws into.
///
/// A chart holds one frame at a time: a set of curves plus any number of
/// point sets. Watchers redraw by calling [`clear`](Chart::clear), then
/// [`set_functions`](Chart::set_functions) and
/// [`draw_points`](Chart::draw_points) for the new frame.
pub trait Chart {
    /// Discards the current frame's curves and point sets.
    fn clear(&mut self);

    /// Replaces the rendered curve set.
    fn set_functions(&mut self, curves: Vec<Box<dyn Curve>>);

    /// Adds a point set to the current frame.
    fn draw_points(&mut self, points: &[Point]);
}

/// Allows a chart to be shared between a step and the code that displays it.
impl<C: Chart> Chart for Rc<RefCell<C>> {
    fn clear(&mut self) {
        self.borrow_mut().clear();
    }

    fn set_functions(&mut self, curves: Vec<Box<dyn Curve>>) {
        self.borrow_mut().set_functions(curves);
    }

    fn draw_points(&mut self, points: &[Point]) {
        self.borrow_mut().draw_points(points);
    }
}

impl<C: Chart + ?Sized> Chart for &mut C {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn set_functions(&mut self, curves: Vec<Box<dyn Curve>>) {
        (**self).set_functions(curves);
    }

    fn draw_points(&mut self, points: &[Point]) {
        (**self).draw_points(points);
    }
}
