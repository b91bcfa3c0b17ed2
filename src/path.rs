use egui::Pos2;
use std::sync::Arc;

/// Captured signature geometry: vertices in surface-local space plus the
/// indices at which a new stroke begins.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignaturePath {
    vertices: Vec<Pos2>,
    // Non-decreasing: always pushed as the current vertex count.
    breaks: Vec<usize>,
}

// Shared handle so a render holding the old path survives a clear
pub type PathRef = Arc<SignaturePath>;

impl SignaturePath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_ref() -> PathRef {
        Arc::new(Self::new())
    }

    pub fn add_vertex(&mut self, vertex: Pos2) {
        self.vertices.push(vertex);
    }

    /// Mark that the next appended vertex starts a new stroke.
    ///
    /// Calling this twice without an intervening vertex records the same
    /// index twice, which is harmless.
    pub fn add_break(&mut self) {
        self.breaks.push(self.vertices.len());
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[Pos2] {
        &self.vertices
    }

    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    /// Whether a stroke begins at `index`.
    pub fn is_break(&self, index: usize) -> bool {
        self.breaks.binary_search(&index).is_ok()
    }

    /// Largest x-coordinate among the vertices, or 0 for an empty path.
    pub fn max_x(&self) -> f32 {
        self.vertices.iter().fold(0.0_f32, |max, v| max.max(v.x))
    }

    /// Iterate over the contiguous vertex runs separated by breaks.
    pub fn strokes(&self) -> impl Iterator<Item = &[Pos2]> + '_ {
        let mut starts: Vec<usize> = std::iter::once(0)
            .chain(self.breaks.iter().copied())
            .filter(|&i| i < self.vertices.len())
            .collect();
        starts.dedup();

        let ends: Vec<usize> = starts
            .iter()
            .skip(1)
            .copied()
            .chain(std::iter::once(self.vertices.len()))
            .collect();

        starts
            .into_iter()
            .zip(ends)
            .map(move |(start, end)| &self.vertices[start..end])
            .filter(|stroke| !stroke.is_empty())
    }

    pub fn stroke_count(&self) -> usize {
        self.strokes().count()
    }
}
