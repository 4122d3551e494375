use crate::core::ScaleKind;

/// Tick count used for x-axis rounding when the axis gives no hint.
pub const DEFAULT_X_TICK_COUNT: usize = 8;
/// Tick count used for y-axis rounding when the axis gives no hint.
pub const DEFAULT_Y_TICK_COUNT: usize = 5;

/// Rounds `domain` outward to human-friendly bounds for the given scale kind.
///
/// Linear and power scales snap to a 1/2/5 x 10^k step chosen for
/// `tick_count`; log scales snap to enclosing powers of ten; ordinal domains
/// have no numeric form and are returned unchanged. Reversed domains keep
/// their direction.
#[must_use]
pub fn nice_domain(kind: ScaleKind, domain: (f64, f64), tick_count: usize) -> (f64, f64) {
    match kind {
        ScaleKind::Linear | ScaleKind::Power => nice_linear(domain, tick_count),
        ScaleKind::Log => nice_log(domain),
        ScaleKind::Ordinal => domain,
    }
}

/// Linear nice rounding, applied twice since the first pass can widen the
/// span enough to pick a coarser step.
#[must_use]
pub fn nice_linear(domain: (f64, f64), tick_count: usize) -> (f64, f64) {
    let once = nice_linear_pass(domain, tick_count);
    nice_linear_pass(once, tick_count)
}

/// Step between ticks for `tick_count` ticks over `domain`.
///
/// Returns `None` when the domain is empty, non-finite or no ticks are asked for.
#[must_use]
pub fn linear_tick_step(domain: (f64, f64), tick_count: usize) -> Option<f64> {
    if tick_count == 0 {
        return None;
    }
    let (low, high) = ordered(domain);
    let span = high - low;
    if !span.is_finite() || span <= 0.0 {
        return None;
    }

    let count = tick_count as f64;
    let mut step = 10_f64.powf((span / count).log10().floor());
    let error = count / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }

    (step.is_finite() && step > 0.0).then_some(step)
}

/// Rounds a positive domain outward to powers of ten.
#[must_use]
pub fn nice_log(domain: (f64, f64)) -> (f64, f64) {
    if !(domain.0 > 0.0 && domain.1 > 0.0) || !domain.0.is_finite() || !domain.1.is_finite() {
        return domain;
    }
    outward(domain, |value| 10_f64.powf(value.log10().floor()), |value| {
        10_f64.powf(value.log10().ceil())
    })
}

fn nice_linear_pass(domain: (f64, f64), tick_count: usize) -> (f64, f64) {
    match linear_tick_step(domain, tick_count) {
        Some(step) => outward(
            domain,
            |value| (value / step).floor() * step,
            |value| (value / step).ceil() * step,
        ),
        None => domain,
    }
}

fn outward(
    domain: (f64, f64),
    floor: impl Fn(f64) -> f64,
    ceil: impl Fn(f64) -> f64,
) -> (f64, f64) {
    if domain.1 < domain.0 {
        (ceil(domain.0), floor(domain.1))
    } else {
        (floor(domain.0), ceil(domain.1))
    }
}

fn ordered(domain: (f64, f64)) -> (f64, f64) {
    if domain.0 <= domain.1 {
        domain
    } else {
        (domain.1, domain.0)
    }
}
