//! G-code emission
//!
//! Moves are typed: a travel repositions the head without feeding
//! filament, an extrude deposits material on the way. Keeping the
//! distinction in the type means positioning hops between infill spans
//! never carry an E word, so no post-processing of emitted text is
//! needed and the extruder value never has to be re-parsed out of it.

use crate::extrusion::{extrusion_amount, ExtruderState};
use lamina_core::{round_coord, Contour, Line, Point, SliceOptions};
use lamina_slice::{infill_for_layer, layer_type, support_for_layer, LayerPlan};
use tracing::debug;

/// One planned head movement
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Move {
    /// Reposition without extruding
    Travel(Point),
    /// Deposit material along the way
    Extrude(Point),
}

/// Moves tracing one closed contour: travel to the start, extrude along
/// every edge and back to the start.
fn contour_moves(contour: &Contour, moves: &mut Vec<Move>) {
    let Some(first) = contour.first() else {
        return;
    };
    if contour.points.len() < 2 {
        return;
    }
    moves.push(Move::Travel(first));
    for point in &contour.points[1..] {
        moves.push(Move::Extrude(*point));
    }
    moves.push(Move::Extrude(first));
}

/// Moves covering a batch of raster spans.
///
/// Every other span is flipped so consecutive spans chain end-to-start;
/// the hop between spans is a travel, the span itself an extrude.
fn span_moves(spans: &[Line], moves: &mut Vec<Move>) {
    for (i, span) in spans.iter().enumerate() {
        let span = if i % 2 == 1 { span.flip() } else { *span };
        moves.push(Move::Travel(span.origin));
        moves.push(Move::Extrude(span.end()));
    }
}

/// All moves for one layer: contours, then infill, then support.
fn layer_moves(plan: &LayerPlan, opts: &SliceOptions) -> Vec<Move> {
    let mut moves = Vec::new();

    for contour in &plan.contours {
        contour_moves(contour, &mut moves);
    }

    let kind = layer_type(plan.from_bottom, plan.from_top, opts.layer_thickness);
    let infill = infill_for_layer(&plan.contours, kind, opts.infill_percent, plan.z);
    span_moves(&infill, &mut moves);

    let support = support_for_layer(&plan.contours, plan.z);
    span_moves(&support, &mut moves);

    debug!(
        "Layer {} ({:?}): {} contours, {} infill spans, {} support spans",
        plan.from_bottom,
        kind,
        plan.contours.len(),
        infill.len(),
        support.len()
    );

    moves
}

fn format_travel(p: Point) -> String {
    format!(
        "G1 X{} Y{} Z{}",
        round_coord(p.x),
        round_coord(p.y),
        round_coord(p.z)
    )
}

fn format_extrude(p: Point, e: f64) -> String {
    format!(
        "G1 X{} Y{} Z{} E{}",
        round_coord(p.x),
        round_coord(p.y),
        round_coord(p.z),
        round_coord(e)
    )
}

/// Serialize a whole print, bottom layer first.
///
/// A single [`ExtruderState`] threads through every layer; travels that
/// would not move the head are dropped.
pub fn emit_gcode(layers: &[LayerPlan], opts: &SliceOptions) -> Vec<String> {
    let mut state = ExtruderState::new();
    let mut position: Option<Point> = None;
    let mut lines = Vec::new();

    for plan in layers {
        for mv in layer_moves(plan, opts) {
            match mv {
                Move::Travel(p) => {
                    if position == Some(p) {
                        continue;
                    }
                    lines.push(format_travel(p));
                    position = Some(p);
                }
                Move::Extrude(p) => match position {
                    Some(prev) => {
                        let e = state.advance(extrusion_amount(opts.layer_thickness, &prev, &p));
                        lines.push(format_extrude(p, e));
                        position = Some(p);
                    }
                    // An extrude with no known position degrades to a travel.
                    None => {
                        lines.push(format_travel(p));
                        position = Some(p);
                    }
                },
            }
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_contour(side: f64, z: f64) -> Contour {
        Contour::new(vec![
            Point::new(0.0, 0.0, z),
            Point::new(side, 0.0, z),
            Point::new(side, side, z),
            Point::new(0.0, side, z),
        ])
    }

    fn single_layer(side: f64, z: f64) -> LayerPlan {
        LayerPlan {
            z,
            contours: vec![square_contour(side, z)],
            from_bottom: 1,
            from_top: 1,
        }
    }

    fn parse_e(line: &str) -> Option<f64> {
        line.split_whitespace()
            .find(|tok| tok.starts_with('E'))
            .and_then(|tok| tok[1..].parse().ok())
    }

    #[test]
    fn contour_moves_travel_then_extrude_and_close() {
        let mut moves = Vec::new();
        contour_moves(&square_contour(10.0, 0.2), &mut moves);

        assert_eq!(moves.len(), 5);
        assert_eq!(moves[0], Move::Travel(Point::new(0.0, 0.0, 0.2)));
        assert_eq!(moves[4], Move::Extrude(Point::new(0.0, 0.0, 0.2)));
        assert!(moves[1..].iter().all(|m| matches!(m, Move::Extrude(_))));
    }

    #[test]
    fn span_moves_alternate_direction() {
        let spans = vec![
            Line::between(Point::new(0.0, 0.0, 0.2), Point::new(1.0, 0.0, 0.2)),
            Line::between(Point::new(1.0, 0.5, 0.2), Point::new(0.0, 0.5, 0.2)),
        ];
        let mut moves = Vec::new();
        span_moves(&spans, &mut moves);

        // Second span is flipped, so its origin becomes (0, 0.5).
        assert_eq!(moves[2], Move::Travel(Point::new(0.0, 0.5, 0.2)));
        assert_eq!(moves[3], Move::Extrude(Point::new(1.0, 0.5, 0.2)));
    }

    #[test]
    fn first_line_of_a_print_is_a_travel() {
        let lines = emit_gcode(&[single_layer(10.0, 0.2)], &SliceOptions::default());
        assert!(!lines.is_empty());
        assert!(lines[0].starts_with("G1 X"));
        assert!(parse_e(&lines[0]).is_none());
    }

    #[test]
    fn emitted_e_values_are_monotonic() {
        let layers = vec![
            LayerPlan {
                z: 0.2,
                contours: vec![square_contour(10.0, 0.2)],
                from_bottom: 1,
                from_top: 2,
            },
            LayerPlan {
                z: 0.4,
                contours: vec![square_contour(10.0, 0.4)],
                from_bottom: 2,
                from_top: 1,
            },
        ];
        let lines = emit_gcode(&layers, &SliceOptions::default());

        let values: Vec<f64> = lines.iter().filter_map(|l| parse_e(l)).collect();
        assert!(!values.is_empty());
        for pair in values.windows(2) {
            assert!(pair[1] >= pair[0], "E went backwards: {:?}", pair);
        }
    }

    #[test]
    fn extrusion_carries_across_layers() {
        let layers = vec![
            LayerPlan {
                z: 0.2,
                contours: vec![square_contour(10.0, 0.2)],
                from_bottom: 1,
                from_top: 2,
            },
            LayerPlan {
                z: 0.4,
                contours: vec![square_contour(10.0, 0.4)],
                from_bottom: 2,
                from_top: 1,
            },
        ];
        let lines = emit_gcode(&layers, &SliceOptions::default());

        // The first extrude of layer two continues from layer one's total.
        let boundary = lines
            .iter()
            .position(|l| l.contains("Z0.4"))
            .expect("second layer present");
        let last_below = lines[..boundary]
            .iter()
            .rev()
            .find_map(|l| parse_e(l))
            .expect("layer one extrudes");
        let first_above = lines[boundary..]
            .iter()
            .find_map(|l| parse_e(l))
            .expect("layer two extrudes");
        assert!(first_above > last_below);
    }

    #[test]
    fn all_lines_are_upper_case() {
        let lines = emit_gcode(&[single_layer(10.0, 0.2)], &SliceOptions::default());
        for line in &lines {
            assert_eq!(line.to_uppercase(), *line);
        }
    }

    #[test]
    fn zero_infill_layer_still_traces_contours() {
        let opts = SliceOptions {
            infill_percent: 0,
            ..SliceOptions::default()
        };
        let plan = LayerPlan {
            z: 0.2,
            contours: vec![square_contour(10.0, 0.2)],
            from_bottom: 5,
            from_top: 5,
        };
        // Middle layer with 0% infill: contour trace plus support only.
        let lines = emit_gcode(&[plan], &opts);
        assert!(lines.len() >= 5);
    }
}
