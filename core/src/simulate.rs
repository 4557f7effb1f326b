// core/src/simulate.rs
use log::{debug, info, warn};

use crate::drivetrain::pedaling_power;
use crate::energy::{
    battery_energy_wh, battery_range_km, operational_time_h, recovered_energy_wh, PowertrainOutput,
};
use crate::kinematics::{coast_down_deceleration, stopping_distance};
use crate::metrics::Metrics;
use crate::models::{BikeConfiguration, DriveMode, Outcome, SimulationPoint, SimulationReport};
use crate::resolver::{MotionResolver, Resolution};

/// Kjør sweepen over `speeds` i gitt rekkefølge.
///
/// Ett `SimulationPoint` per fart (samme rekkefølge). Statusmeldinger
/// samles kun for farten lik `cfg.speed_of_interest_ms`.
pub fn simulate(cfg: &BikeConfiguration, mode: DriveMode, speeds: &[f64]) -> SimulationReport {
    sweep(cfg, mode, speeds, None)
}

/// Som `simulate`, men teller sweeps og utfall i `metrics`.
pub fn simulate_with_metrics(
    cfg: &BikeConfiguration,
    mode: DriveMode,
    speeds: &[f64],
    metrics: &Metrics,
) -> SimulationReport {
    sweep(cfg, mode, speeds, Some(metrics))
}

fn sweep(
    cfg: &BikeConfiguration,
    mode: DriveMode,
    speeds: &[f64],
    metrics: Option<&Metrics>,
) -> SimulationReport {
    info!(
        "sweep start: mode={} gradient={}% mass={}kg speeds={}",
        mode,
        cfg.gradient_pct,
        cfg.mass_kg,
        speeds.len()
    );
    if !speeds.contains(&cfg.speed_of_interest_ms) {
        warn!(
            "speed of interest {} m/s is not part of the sweep; report will carry no messages",
            cfg.speed_of_interest_ms
        );
    }

    let resolver = MotionResolver::new(cfg, mode);
    let mut points = Vec::with_capacity(speeds.len());
    let mut messages = Vec::new();

    for &v in speeds {
        let res = resolver.resolve(v);
        let point = build_point(cfg, &resolver, &res, v);

        debug!(
            "v={}m/s phase={:?} outcome={:?} load={:.3}N eff={:.3}N motor={:.3}N total={:.3}N \
             P_el={:.3}W t={}h range={}km",
            v,
            point.phase,
            point.outcome,
            point.required_force,
            point.effective_load,
            point.motor_force,
            point.total_force,
            point.electrical_power_w,
            point.operational_time_h,
            point.battery_range_km
        );
        if point.required_force < 0.0 {
            debug!("v={}m/s: bike does not need any additional force to move", v);
        }

        if v == cfg.speed_of_interest_ms {
            push_messages(&mut messages, cfg, &resolver, &res, &point);
        }
        if let Some(m) = metrics {
            m.record_point(mode, point.outcome);
        }
        points.push(point);
    }

    if let Some(m) = metrics {
        m.record_sweep();
    }
    info!("sweep done: {} points, {} messages", points.len(), messages.len());

    SimulationReport {
        mode,
        points,
        messages,
    }
}

fn build_point(
    cfg: &BikeConfiguration,
    resolver: &MotionResolver<'_>,
    res: &Resolution,
    v: f64,
) -> SimulationPoint {
    let budget = resolver.budget();
    let decisive = res.decisive();
    let r = cfg.wheel_radius_m;

    let powertrain = match &res.in_motion {
        Some(m) => {
            PowertrainOutput::from_motor_force(m.allocation.motor_force, v, r, cfg.gear_ratio)
        }
        None => PowertrainOutput::stationary(res.at_rest.allocation.motor_force, r, cfg.gear_ratio),
    };

    let recovered = if decisive.required_force < 0.0 {
        recovered_energy_wh(cfg.mass_kg, v)
    } else {
        0.0
    };

    let battery_wh = battery_energy_wh(cfg.battery_voltage_v, cfg.battery_capacity_ah);
    let op_time = operational_time_h(battery_wh, powertrain.electrical_power_w);
    let range = battery_range_km(op_time, v, powertrain.electrical_power_w);

    let total_power_w = if res.in_motion.is_some() {
        pedaling_power(cfg.pedal, v) + powertrain.mechanical_power_w
    } else {
        0.0
    };

    // Ruller ut og stopper: hvor langt kommer den?
    let stopping_distance_m = match &res.in_motion {
        Some(m) if m.outcome == Outcome::Stalled => {
            let a =
                coast_down_deceleration(m.effective_load(), m.allocation.total_force, cfg.mass_kg);
            Some(stopping_distance(v, a))
        }
        _ => None,
    };

    SimulationPoint {
        speed_ms: v,
        normal_force: budget.normal,
        static_friction_ceiling: budget.static_friction_ceiling,
        rolling_resistance_force: budget.rolling_resistance,
        ski_friction_force: budget.ski_friction,
        drag_force: res.drag_force,
        required_force: decisive.required_force,
        slip_correction_force: decisive.slip_correction_force,
        effective_load: decisive.effective_load(),
        motor_force: decisive.allocation.motor_force,
        total_force: decisive.allocation.total_force,
        motor_torque_required: budget.rest_load() * r / cfg.gear_ratio,
        motor_torque: powertrain.motor_torque,
        rpm: powertrain.rpm,
        mechanical_power_w: powertrain.mechanical_power_w,
        electrical_power_w: powertrain.electrical_power_w,
        total_power_w,
        recovered_energy_wh: recovered,
        operational_time_h: op_time,
        battery_range_km: range,
        stopping_distance_m,
        phase: decisive.phase,
        outcome: decisive.outcome,
    }
}

fn push_messages(
    out: &mut Vec<String>,
    cfg: &BikeConfiguration,
    resolver: &MotionResolver<'_>,
    res: &Resolution,
    p: &SimulationPoint,
) {
    out.push(format!("Gradient: {}%", cfg.gradient_pct));

    // hvilefasen
    out.push(res.at_rest.message().to_string());
    out.push(format!("Maximum static friction: {}N", resolver.budget().static_friction_ceiling));
    out.push(format!("Force required to set bike in motion: {}N", res.at_rest.required_force));
    out.push(format!("The motor force is: {}N", res.at_rest.allocation.motor_force));

    if let Some(m) = &res.in_motion {
        out.push(m.message().to_string());
    }

    out.push(format!("Constant speed to maintain: {}m/s", p.speed_ms));
    out.push(format!("The force required to continue motion is: {}N", p.required_force));
    if p.slip_correction_force != 0.0 {
        out.push(format!("The effective load with wheel slip is: {}N", p.effective_load));
    }
    out.push(format!("The actual motor force is: {}N", p.motor_force));
    out.push(format!("The pedalling + motor force is: {}N", p.total_force));
    out.push(format!("The pedaling power is: {}W", pedaling_power(cfg.pedal, p.speed_ms)));
    out.push(format!("The electrical motor power is: {}W", p.electrical_power_w));
    out.push(format!("The motor rpm is: {}rpm", p.rpm));

    out.push(format!("The operational time is: {}hours", p.operational_time_h));
    out.push(format!("The battery range is: {}km", p.battery_range_km));
    out.push(format!("The recovered energy is: {}Wh", p.recovered_energy_wh));
    if let Some(d) = p.stopping_distance_m {
        out.push(format!("The coast-down distance is: {}m", d));
    }
}
