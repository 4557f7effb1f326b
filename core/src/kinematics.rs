// core/src/kinematics.rs
use crate::physics::{friction_force, gravity_parallel, normal_force};

/// Snittakselerasjon (m/s²). 0 når t = 0.
#[inline]
pub fn acceleration(v0_ms: f64, v1_ms: f64, t_s: f64) -> f64 {
    if t_s == 0.0 {
        0.0
    } else {
        (v1_ms - v0_ms) / t_s
    }
}

/// Retardasjon når drivverket ikke klarer lasten (m/s², >= 0).
#[inline]
pub fn coast_down_deceleration(required_force: f64, total_force: f64, mass_kg: f64) -> f64 {
    ((required_force - total_force) / mass_kg).max(0.0)
}

/// Retardasjon under bremsing i bakke med kinetisk friksjon (m/s², >= 0).
pub fn braking_deceleration(braking_force: f64, mass_kg: f64, angle: f64, mu_k: f64) -> f64 {
    let g_par = gravity_parallel(mass_kg, angle);
    let friction = friction_force(mu_k, normal_force(mass_kg, angle));
    let net = (-braking_force + g_par - friction).max(0.0);
    net / mass_kg
}

/// Stopplengde (m). Uendelig når retardasjonen er 0.
#[inline]
pub fn stopping_distance(v_ms: f64, deceleration: f64) -> f64 {
    if deceleration != 0.0 {
        v_ms * v_ms / (2.0 * deceleration)
    } else {
        f64::INFINITY
    }
}
