// core/src/energy.rs
use std::f64::consts::PI;

use crate::physics::G;

pub const MOTOR_EFFICIENCY: f64 = 0.8;
pub const REGEN_EFFICIENCY: f64 = 0.8;
/// Over denne elektriske effekten (W) regnes rekkevidde som 0.
pub const RANGE_POWER_CAP_W: f64 = 1000.0;

/// Motor-side tall for én fart.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowertrainOutput {
    pub motor_torque: f64,
    pub angular_speed: f64,
    pub rpm: f64,
    pub mechanical_power_w: f64,
    pub electrical_power_w: f64,
}

impl PowertrainOutput {
    /// Motorkraft → moment, turtall og effekt (hjulside).
    pub fn from_motor_force(
        motor_force: f64,
        v_ms: f64,
        wheel_radius_m: f64,
        gear_ratio: f64,
    ) -> Self {
        let motor_torque = motor_force * wheel_radius_m / gear_ratio;
        let angular_speed = v_ms / wheel_radius_m;
        let mechanical_power_w = motor_torque * angular_speed;
        Self {
            motor_torque,
            angular_speed,
            rpm: angular_speed * 60.0 / (2.0 * PI),
            mechanical_power_w,
            electrical_power_w: mechanical_power_w / MOTOR_EFFICIENCY,
        }
    }

    /// Sykkelen står: motoren holder et moment, men roterer ikke.
    pub fn stationary(motor_force: f64, wheel_radius_m: f64, gear_ratio: f64) -> Self {
        Self {
            motor_torque: motor_force * wheel_radius_m / gear_ratio,
            ..Self::default()
        }
    }
}

/// Gjenvinnbar kinetisk energi (Wh) ved netto nedoverbakke/bremsing.
#[inline]
pub fn recovered_energy_wh(mass_kg: f64, v_ms: f64) -> f64 {
    0.5 * mass_kg * v_ms * v_ms * REGEN_EFFICIENCY / 3600.0
}

#[inline]
pub fn battery_energy_wh(voltage_v: f64, capacity_ah: f64) -> f64 {
    voltage_v * capacity_ah
}

/// Driftstid (h). Uendelig når motoren ikke trekker strøm.
#[inline]
pub fn operational_time_h(battery_energy_wh: f64, electrical_power_w: f64) -> f64 {
    if electrical_power_w > 0.0 {
        battery_energy_wh / electrical_power_w
    } else {
        f64::INFINITY
    }
}

/// Rekkevidde (km). Uendelig ved v = 0, 0 over effektgrensen.
#[inline]
pub fn battery_range_km(operational_time_h: f64, v_ms: f64, electrical_power_w: f64) -> f64 {
    if v_ms == 0.0 {
        f64::INFINITY
    } else if electrical_power_w <= RANGE_POWER_CAP_W {
        operational_time_h * v_ms * 3.6
    } else {
        0.0
    }
}

/// Andel (%) av batterienergien som går til nyttig klatring over `distance_km`.
/// Aldri negativ; 0 ved tom energi eller ikke-endelig distanse.
pub fn climb_efficiency_pct(mass_kg: f64, angle: f64, distance_km: f64, energy_wh: f64) -> f64 {
    if energy_wh <= 0.0 || !distance_km.is_finite() {
        return 0.0;
    }
    let height_gain_m = distance_km * 1000.0 * angle.sin();
    let useful_j = mass_kg * G * height_gain_m;
    let consumed_j = energy_wh * 3600.0;
    (useful_j / consumed_j * 100.0).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_power_gives_infinite_time() {
        assert!(operational_time_h(624.0, 0.0).is_infinite());
        assert!(operational_time_h(624.0, -12.0).is_infinite());
    }

    #[test]
    fn range_gate_above_cap_is_zero() {
        assert_eq!(battery_range_km(0.5, 5.0, 1200.0), 0.0);
        assert!((battery_range_km(2.0, 5.0, 312.0) - 36.0).abs() < 1e-12);
    }
}
