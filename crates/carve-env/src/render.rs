//! Frame composition: problem base layer plus strategy overlay.

use carve_core::{PixelBuffer, StringMap};
use carve_prob::Problem;
use carve_rep::Representation;

/// Compose the rendered frame for the current level.
///
/// The problem renders the tile grid into the base frame; the strategy
/// then draws its decoration (cursor outlines) on top. Frame pixel
/// `(x·t, y·t)` is the top-left corner of cell `(x, y)`, with `t` the
/// problem's tile size.
pub(crate) fn compose(problem: &dyn Problem, rep: &dyn Representation) -> PixelBuffer {
    let map = StringMap::from_grid(rep.grid(), problem.tile_vocab());
    let mut frame = problem.render(&map);
    rep.render_overlay(&mut frame, problem.tile_size().max(1));
    frame
}
