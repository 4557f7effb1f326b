// core/src/physics.rs
use crate::models::BikeConfiguration;

pub const G: f64 = 9.81; // gravitasjon (m/s²)

// --- RoundTo trait (offentlig, brukt av cli.rs) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if !self.is_finite() {
            return self;
        }
        if dp == 0 {
            return self.round();
        }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Stigning i prosent → hellingsvinkel (rad).
#[inline]
pub fn incline_angle(gradient_pct: f64) -> f64 {
    (gradient_pct / 100.0).atan()
}

/// ----- Kraft-komponent helpers -----

#[inline]
pub fn normal_force(mass_kg: f64, angle: f64) -> f64 {
    mass_kg * G * angle.cos()
}

/// Tyngdekomponent langs bakken (negativ i nedoverbakke).
#[inline]
pub fn gravity_parallel(mass_kg: f64, angle: f64) -> f64 {
    mass_kg * G * angle.sin()
}

#[inline]
pub fn friction_force(mu: f64, normal_force: f64) -> f64 {
    mu * normal_force
}

/// Luftmotstand (N). Eksakt 0 ved v = 0.
#[inline]
pub fn drag_force(cd: f64, air_density: f64, frontal_area_m2: f64, v_ms: f64) -> f64 {
    0.5 * cd * air_density * frontal_area_m2 * v_ms * v_ms
}

/// Fartsuavhengige krefter for én konfigurasjon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBudget {
    pub normal: f64,
    pub gravity_parallel: f64,
    pub static_friction_ceiling: f64,
    pub ski_friction: f64,
    pub rolling_resistance: f64,
}

impl ForceBudget {
    pub fn from_config(cfg: &BikeConfiguration) -> Self {
        let normal = normal_force(cfg.mass_kg, cfg.incline_angle);
        Self {
            normal,
            gravity_parallel: gravity_parallel(cfg.mass_kg, cfg.incline_angle),
            static_friction_ceiling: friction_force(cfg.mu_static_wheel, normal),
            ski_friction: friction_force(cfg.mu_kinetic_skis, normal),
            rolling_resistance: friction_force(cfg.rolling_resistance, normal),
        }
    }

    /// Last for å komme i gang (uten luftmotstand).
    #[inline]
    pub fn rest_load(&self) -> f64 {
        self.gravity_parallel + self.rolling_resistance + self.ski_friction
    }

    /// Last for å holde farten, inkl. luftmotstand.
    #[inline]
    pub fn motion_load(&self, drag: f64) -> f64 {
        self.rest_load() + drag
    }
}
