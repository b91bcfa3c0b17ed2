use egui::Pos2;
use serde::{Deserialize, Serialize};

use crate::geometry::midpoint;
use crate::path::SignaturePath;

/// A single backend-independent drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Lift the pen and start a new subpath
    MoveTo(Pos2),
    LineTo(Pos2),
    QuadTo { ctrl: Pos2, end: Pos2 },
}

/// How consecutive vertices of a stroke are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Smoothing {
    /// Quadratic segments ending at the midpoint of each pair of vertices,
    /// using the earlier vertex as control point.
    #[default]
    Quadratic,
    /// Straight segments through every vertex.
    Linear,
}

/// Ordered drawing commands built from a [`SignaturePath`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorPath {
    commands: Vec<PathCommand>,
}

impl VectorPath {
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }
}

/// Build the smoothed vector path for `path`.
///
/// Produces exactly one command per vertex: a `MoveTo` for the first vertex
/// and for every vertex that starts a stroke, and a curve (or line) segment
/// otherwise. Since each quadratic segment ends at a midpoint, the stroke
/// stops half a segment short of its last recorded vertex.
pub fn build(path: &SignaturePath, smoothing: Smoothing) -> VectorPath {
    let vertices = path.vertices();
    let Some(&first) = vertices.first() else {
        return VectorPath::default();
    };

    let mut commands = Vec::with_capacity(vertices.len());
    commands.push(PathCommand::MoveTo(first));

    for i in 1..vertices.len() {
        let current = vertices[i];
        if path.is_break(i) {
            commands.push(PathCommand::MoveTo(current));
            continue;
        }

        let previous = vertices[i - 1];
        commands.push(match smoothing {
            Smoothing::Quadratic => PathCommand::QuadTo {
                ctrl: previous,
                end: midpoint(previous, current),
            },
            Smoothing::Linear => PathCommand::LineTo(current),
        });
    }

    VectorPath { commands }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_from(points: &[(f32, f32)]) -> SignaturePath {
        let mut path = SignaturePath::new();
        for &(x, y) in points {
            path.add_vertex(Pos2::new(x, y));
        }
        path
    }

    #[test]
    fn test_empty_path_builds_nothing() {
        let vector = build(&SignaturePath::new(), Smoothing::Quadratic);
        assert!(vector.is_empty());
    }

    #[test]
    fn test_single_vertex_is_a_lone_move() {
        let vector = build(&path_from(&[(4.0, 2.0)]), Smoothing::Quadratic);
        assert_eq!(vector.commands(), &[PathCommand::MoveTo(Pos2::new(4.0, 2.0))]);
    }

    #[test]
    fn test_quadratic_segments_end_at_midpoints() {
        let path = path_from(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let vector = build(&path, Smoothing::Quadratic);

        assert_eq!(
            vector.commands(),
            &[
                PathCommand::MoveTo(Pos2::new(0.0, 0.0)),
                PathCommand::QuadTo {
                    ctrl: Pos2::new(0.0, 0.0),
                    end: Pos2::new(5.0, 0.0),
                },
                PathCommand::QuadTo {
                    ctrl: Pos2::new(10.0, 0.0),
                    end: Pos2::new(10.0, 5.0),
                },
            ]
        );
    }

    #[test]
    fn test_break_lifts_the_pen_once() {
        let mut path = path_from(&[(0.0, 0.0), (10.0, 0.0)]);
        path.add_break();
        path.add_break();
        path.add_vertex(Pos2::new(20.0, 20.0));
        path.add_vertex(Pos2::new(30.0, 20.0));

        let vector = build(&path, Smoothing::Quadratic);
        assert_eq!(vector.len(), 4);
        assert_eq!(vector.commands()[2], PathCommand::MoveTo(Pos2::new(20.0, 20.0)));
        assert!(matches!(vector.commands()[3], PathCommand::QuadTo { .. }));
    }

    #[test]
    fn test_break_before_first_vertex_is_plain_move() {
        let mut path = SignaturePath::new();
        path.add_break();
        path.add_vertex(Pos2::new(1.0, 1.0));
        path.add_vertex(Pos2::new(3.0, 1.0));

        let vector = build(&path, Smoothing::Quadratic);
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.commands()[0], PathCommand::MoveTo(Pos2::new(1.0, 1.0)));
    }

    #[test]
    fn test_linear_smoothing_reaches_every_vertex() {
        let path = path_from(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]);
        let vector = build(&path, Smoothing::Linear);
        assert_eq!(
            vector.commands()[2],
            PathCommand::LineTo(Pos2::new(10.0, 10.0))
        );
    }
}
