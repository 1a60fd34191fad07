//! Diagnostic SVG rendering of a tour.
//!
//! Presentation only: the export carries no behavioral contract beyond
//! rendering the current order faithfully. Z offsets are drawn as a light
//! "shadow" route so height scatter stays visible in the 2D projection.

use std::fmt::Write;
use std::time::Duration;

use super::types::TourNode;
use crate::geom::Point;

enum Marker {
    Start,
    End,
    Visit,
}

pub(super) fn render(
    travel: &[TourNode],
    start: Option<&Point>,
    end: Option<&Point>,
    total_cost: f64,
    duration: Duration,
) -> String {
    let mut route: Vec<(Point, Marker)> = Vec::with_capacity(travel.len() + 2);
    if let Some(p) = start {
        route.push((*p, Marker::Start));
    }
    route.extend(travel.iter().map(|node| (node.point, Marker::Visit)));
    if let Some(p) = end {
        route.push((*p, Marker::End));
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for (p, _) in &route {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        // The shadow route is offset by Z; make room for it.
        max_x = max_x.max(p.x + p.z);
        max_y = max_y.max(p.y + p.z);
    }
    if route.is_empty() {
        min_x = 0.0;
        min_y = 0.0;
        max_x = 0.0;
        max_y = 0.0;
    }
    // Round the viewBox outward to whole centimeters with 1 cm padding.
    let min_x = ((min_x / 10.0) - 1.0).floor() * 10.0;
    let min_y = ((min_y / 10.0) - 1.0).floor() * 10.0;
    let max_x = ((max_x / 10.0) + 1.0).ceil() * 10.0;
    let max_y = ((max_y / 10.0) + 1.0).ceil() * 10.0;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\"\n\
         \x20 version=\"1.1\" baseProfile=\"full\"\n\
         \x20 width=\"100%\" height=\"100%\"\n\
         \x20 viewBox=\"{min_x} {min_y} {} {}\">",
        max_x - min_x,
        max_y - min_y
    );
    let _ = writeln!(
        svg,
        "<title>Travel route ({} targets, cost {:.1}, {} ms)</title>",
        travel.len(),
        total_cost,
        duration.as_millis()
    );

    // Shadow route at the Z offset.
    for pair in route.windows(2) {
        let (a, b) = (&pair[0].0, &pair[1].0);
        let _ = writeln!(
            svg,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"stroke:lightgrey;\"/>\
             <circle cx=\"{}\" cy=\"{}\" r=\"2\" style=\"fill:lightgrey;\"/>",
            a.x + a.z,
            a.y + a.z,
            b.x + b.z,
            b.y + b.z,
            b.x + b.z,
            b.y + b.z
        );
    }

    // Travel lines.
    for pair in route.windows(2) {
        let (a, b) = (&pair[0].0, &pair[1].0);
        let _ = writeln!(
            svg,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" style=\"stroke:black;\"/>",
            a.x, a.y, b.x, b.y
        );
    }

    // Node markers: start blue, end green, visited targets red.
    for (p, marker) in &route {
        let style = match marker {
            Marker::Start => "stroke:blue; fill:white;",
            Marker::End => "stroke:green; fill:white;",
            Marker::Visit => "fill:red;",
        };
        let _ = writeln!(
            svg,
            "<circle cx=\"{}\" cy=\"{}\" r=\"2\" style=\"{style}\"/>",
            p.x, p.y
        );
    }

    svg.push_str("</svg>\n");
    svg
}
