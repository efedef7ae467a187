//! Plank union and the faces it bounds.
//!
//! Planks that overlap belong to one connected piece. Each piece is grown
//! plank by plank with polyline booleans: the outer boundary is or-ed with
//! the next plank, loops the or leaves enclosed become holes, and existing
//! holes lose whatever the plank covers. Planks that only meet at a corner
//! stay in separate pieces.

use cavalier_contours::polyline::{
    BooleanOp, BooleanResultInfo, PlineSource, PlineSourceMut, Polyline,
};
use fenestra_core::constants::EPS_LEN;
use fenestra_core::Point;
use std::collections::{BTreeSet, VecDeque};

use super::planks::Plank;

/// One connected piece of the union.
#[derive(Debug, Clone)]
pub struct Region {
    /// Counter-clockwise.
    pub outer: Polyline<f64>,
    /// Counter-clockwise, each inside `outer`.
    pub holes: Vec<Polyline<f64>>,
}

/// Union of a plank set.
#[derive(Debug, Clone)]
pub struct Union {
    /// Strokes that make up each component.
    pub components: Vec<BTreeSet<usize>>,
    /// Boundary of each component, same order.
    pub regions: Vec<Region>,
}

impl Union {
    /// Largest stroke count of any component.
    pub fn max_strokes(&self) -> usize {
        self.components.iter().map(BTreeSet::len).max().unwrap_or(0)
    }
}

fn plank_pline(plank: &Plank) -> Polyline<f64> {
    let mut pline = Polyline::new_closed();
    pline.add(plank.min.x, plank.min.y, 0.0);
    pline.add(plank.max.x, plank.min.y, 0.0);
    pline.add(plank.max.x, plank.max.y, 0.0);
    pline.add(plank.min.x, plank.max.y, 0.0);
    pline
}

fn ccw(mut pline: Polyline<f64>) -> Polyline<f64> {
    if pline.area() < 0.0 {
        pline.invert_direction_mut();
    }
    pline
}

fn merge(region: &mut Region, plank: &Polyline<f64>) {
    let joined = region.outer.boolean(plank, BooleanOp::Or);
    match joined.result_info {
        BooleanResultInfo::InvalidInput | BooleanResultInfo::Disjoint => {
            tracing::warn!("Plank does not join its piece: {:?}", joined.result_info);
            return;
        }
        _ => {}
    }
    let Some(outer) = joined
        .pos_plines
        .into_iter()
        .map(|r| r.pline)
        .max_by(|a, b| a.area().abs().total_cmp(&b.area().abs()))
    else {
        return;
    };

    let mut holes: Vec<Polyline<f64>> =
        joined.neg_plines.into_iter().map(|r| ccw(r.pline)).collect();
    for hole in &region.holes {
        let rest = hole.boolean(plank, BooleanOp::Not);
        holes.extend(rest.pos_plines.into_iter().map(|r| ccw(r.pline)));
    }
    region.outer = ccw(outer);
    region.holes = holes;
}

/// Merges overlapping planks into connected components.
pub fn unify_polys(planks: &[Plank]) -> Union {
    let mut seen = vec![false; planks.len()];
    let mut components = Vec::new();
    let mut regions = Vec::new();

    for start in 0..planks.len() {
        if seen[start] {
            continue;
        }
        seen[start] = true;
        let mut region = Region {
            outer: plank_pline(&planks[start]),
            holes: Vec::new(),
        };
        let mut strokes = BTreeSet::from([planks[start].stroke]);
        // every plank joins next to one already merged
        let mut queue = VecDeque::from([start]);
        while let Some(k) = queue.pop_front() {
            for next in 0..planks.len() {
                if seen[next] || !planks[k].overlaps(&planks[next]) {
                    continue;
                }
                seen[next] = true;
                merge(&mut region, &plank_pline(&planks[next]));
                strokes.insert(planks[next].stroke);
                queue.push_back(next);
            }
        }
        components.push(strokes);
        regions.push(region);
    }

    Union {
        components,
        regions,
    }
}

/// A closed region bounded by the union.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Counter-clockwise, collinear points merged.
    pub points: Vec<Point>,
    pub area: f64,
    /// Bounded from outside by plank material.
    pub is_hole: bool,
    pub component: usize,
}

impl Face {
    /// Boundary sides as point pairs, in loop order.
    pub fn sides(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }
}

fn to_face(pline: &Polyline<f64>, is_hole: bool, component: usize) -> Option<Face> {
    let clean = ccw(pline.remove_redundant(EPS_LEN)?);
    if clean.vertex_count() < 3 {
        return None;
    }
    let points = clean
        .vertex_data
        .iter()
        .map(|v| Point::new(v.x, v.y))
        .collect();
    Some(Face {
        points,
        area: clean.area(),
        is_hole,
        component,
    })
}

/// Every face of the union with area at least `min_area`, smallest first.
pub fn fetch_faces(union: &Union, min_area: f64) -> Vec<Face> {
    let mut faces = Vec::new();
    for (component, region) in union.regions.iter().enumerate() {
        let loops = std::iter::once((&region.outer, false))
            .chain(region.holes.iter().map(|h| (h, true)));
        for (pline, is_hole) in loops {
            match to_face(pline, is_hole, component) {
                Some(face) if face.area >= min_area => faces.push(face),
                _ => {}
            }
        }
    }
    faces.sort_by(|a, b| a.area.total_cmp(&b.area));
    faces
}
