use glam::{DVec2, IVec2};

/// Points from `from` to `to` inclusive, one per step of the longer axis
///
/// The step count is the larger of the horizontal and vertical distance, so
/// consecutive points are never more than one cell apart. The count is not
/// bounded, so callers clip far-away endpoints with [`clip`] first.
pub fn interpolate(from: IVec2, to: IVec2) -> Vec<IVec2> {
    let dx = (to.x as i64 - from.x as i64).abs();
    let dy = (to.y as i64 - from.y as i64).abs();
    let steps = dx.max(dy);
    if steps == 0 {
        return vec![to];
    }

    let start = from.as_dvec2();
    let end = to.as_dvec2();
    (0..=steps)
        .map(|i| start.lerp(end, i as f64 / steps as f64).round().as_ivec2())
        .collect()
}

/// Clip the segment `from -> to` to the rectangle `min..=max`
///
/// Returns the clipped endpoints in the original direction, or `None` when
/// the segment misses the rectangle. Endpoints already inside are kept as is.
pub fn clip(from: IVec2, to: IVec2, min: IVec2, max: IVec2) -> Option<(IVec2, IVec2)> {
    let start = from.as_dvec2();
    let delta = to.as_dvec2() - start;
    let (lo, hi) = (min.as_dvec2(), max.as_dvec2());

    // Liang-Barsky: shrink the parameter range [t0, t1] against each edge
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-delta.x, start.x - lo.x),
        (delta.x, hi.x - start.x),
        (-delta.y, start.y - lo.y),
        (delta.y, hi.y - start.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| -> IVec2 {
        let point: DVec2 = start + delta * t;
        point.round().as_ivec2().clamp(min, max)
    };
    Some((at(t0), at(t1)))
}
