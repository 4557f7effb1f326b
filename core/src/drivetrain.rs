// core/src/drivetrain.rs
use std::f64::consts::PI;

use crate::models::{DriveMode, PedalInput};

/// Nominell maks turtall for motoren (rpm).
pub const MAX_MOTOR_RPM: f64 = 470.0;

/// Maks vinkelhastighet (rad/s) ved MAX_MOTOR_RPM.
#[inline]
pub fn max_angular_speed() -> f64 {
    2.0 * PI * MAX_MOTOR_RPM / 60.0
}

/// Øvre grense for motorkraft ved hjulet (N).
pub fn max_motor_force(max_motor_power_w: f64, gear_ratio: f64, wheel_radius_m: f64) -> f64 {
    let max_torque = max_motor_power_w / max_angular_speed();
    max_torque * gear_ratio / wheel_radius_m
}

/// Pedalkraft ved hjulet. Effekt-input gir 0 ved stillstand.
pub fn pedaling_force(input: PedalInput, v_ms: f64, gear_ratio: f64) -> f64 {
    match input {
        PedalInput::Force(f) => f,
        PedalInput::Power(p) if v_ms > 0.0 => p / v_ms * gear_ratio,
        PedalInput::Power(_) => 0.0,
    }
}

/// Pedaleffekt (W) ved gitt fart.
pub fn pedaling_power(input: PedalInput, v_ms: f64) -> f64 {
    match input {
        PedalInput::Force(f) => f * v_ms,
        PedalInput::Power(p) => p,
    }
}

/// Fordeling av kraft mellom motor og rytter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Allocation {
    pub motor_force: f64,
    pub total_force: f64,
}

/// Fordel `required_force` etter kjøremodus.
///
/// Ved `required_force <= 0` holder/bremser motoren med inntil
/// `max_motor_force` (regenerering), uansett modus.
pub fn allocate(
    required_force: f64,
    max_motor_force: f64,
    pedaling_force: f64,
    mode: DriveMode,
) -> Allocation {
    if required_force <= 0.0 {
        // 0.0 - x: unngå -0.0 når lasten er eksakt null
        let motor_force = 0.0 - required_force.abs().min(max_motor_force);
        return Allocation {
            motor_force,
            total_force: motor_force,
        };
    }

    match mode {
        DriveMode::Pedal => Allocation {
            motor_force: 0.0,
            total_force: pedaling_force,
        },
        DriveMode::Motor => {
            let motor_force = required_force.min(max_motor_force);
            Allocation {
                motor_force,
                total_force: motor_force,
            }
        }
        DriveMode::Both => {
            let motor_force = (required_force - pedaling_force).max(0.0);
            Allocation {
                motor_force,
                total_force: pedaling_force + motor_force,
            }
        }
    }
}
