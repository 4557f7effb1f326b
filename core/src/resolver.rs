// core/src/resolver.rs
//
// To-fase beslutning per fart: først AtRest (uten luftmotstand), deretter
// InMotion (med luftmotstand) bare hvis sykkelen faktisk kom i gang.

use crate::drivetrain::{allocate, max_motor_force, pedaling_force, Allocation};
use crate::models::{BikeConfiguration, DriveMode, MotionState, Outcome, SlipCorrection};
use crate::physics::{drag_force, ForceBudget, G};

/// Utfallet av én fase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseResolution {
    pub phase: MotionState,
    pub required_force: f64,
    pub allocation: Allocation,
    /// Kinetisk hjulfriksjon (signert) som legges på lasten når hjulet spinner, ellers 0
    pub slip_correction_force: f64,
    pub outcome: Outcome,
}

impl PhaseResolution {
    /// Lasten drivverket faktisk må matche.
    #[inline]
    pub fn effective_load(&self) -> f64 {
        self.required_force + self.slip_correction_force
    }

    #[inline]
    pub fn can_move(&self) -> bool {
        self.outcome != Outcome::Stalled
    }

    pub fn message(&self) -> &'static str {
        match (self.outcome, self.phase) {
            (Outcome::Slipping, _) => "Wheel will slip",
            (Outcome::RollingWithoutSlipping, MotionState::AtRest) => {
                "Wheel will start rolling without slipping"
            }
            (Outcome::RollingWithoutSlipping, MotionState::InMotion) => {
                "Bike continues rolling without slipping"
            }
            (Outcome::Stalled, MotionState::AtRest) => "Bike is not able to move",
            (Outcome::Stalled, MotionState::InMotion) => {
                "Bike starts to slow down and eventually comes to a stop"
            }
        }
    }
}

/// Resultat for én fart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub at_rest: PhaseResolution,
    /// None når sykkelen aldri forlot hvile
    pub in_motion: Option<PhaseResolution>,
    /// 0 når InMotion ikke ble vurdert
    pub drag_force: f64,
    pub max_motor_force: f64,
    pub pedaling_force: f64,
}

impl Resolution {
    /// Fasen som avgjør klassifiseringen av punktet.
    #[inline]
    pub fn decisive(&self) -> &PhaseResolution {
        self.in_motion.as_ref().unwrap_or(&self.at_rest)
    }
}

/// Resolver for én konfigurasjon og modus; gjenbrukes over hele sweepen.
#[derive(Debug, Clone, Copy)]
pub struct MotionResolver<'a> {
    cfg: &'a BikeConfiguration,
    budget: ForceBudget,
    mode: DriveMode,
    max_motor_force: f64,
}

impl<'a> MotionResolver<'a> {
    pub fn new(cfg: &'a BikeConfiguration, mode: DriveMode) -> Self {
        Self {
            cfg,
            budget: ForceBudget::from_config(cfg),
            mode,
            max_motor_force: max_motor_force(
                cfg.max_motor_power_w,
                cfg.gear_ratio,
                cfg.wheel_radius_m,
            ),
        }
    }

    #[inline]
    pub fn budget(&self) -> &ForceBudget {
        &self.budget
    }

    #[inline]
    pub fn max_motor_force(&self) -> f64 {
        self.max_motor_force
    }

    /// Klassifiser én fase mot gitt last.
    pub fn resolve_phase(
        &self,
        phase: MotionState,
        required_force: f64,
        pedaling_force: f64,
    ) -> PhaseResolution {
        let allocation = allocate(required_force, self.max_motor_force, pedaling_force, self.mode);
        let slipping = allocation.total_force > self.budget.static_friction_ceiling;

        let slip_correction_force = if slipping {
            let kinetic_wheel = self.cfg.mu_kinetic_wheel * self.cfg.mass_kg * G;
            match self.cfg.slip_correction {
                SlipCorrection::AddToLoad => kinetic_wheel,
                SlipCorrection::SubtractFromLoad => -kinetic_wheel,
            }
        } else {
            0.0
        };

        let outcome = if allocation.total_force < required_force + slip_correction_force {
            Outcome::Stalled
        } else if slipping {
            Outcome::Slipping
        } else {
            Outcome::RollingWithoutSlipping
        };

        PhaseResolution {
            phase,
            required_force,
            allocation,
            slip_correction_force,
            outcome,
        }
    }

    /// Kjør begge fasene for én målfart.
    pub fn resolve(&self, v_ms: f64) -> Resolution {
        let pedal = pedaling_force(self.cfg.pedal, v_ms, self.cfg.gear_ratio);
        let at_rest = self.resolve_phase(MotionState::AtRest, self.budget.rest_load(), pedal);

        let (in_motion, drag) = if at_rest.can_move() {
            let drag = drag_force(
                self.cfg.drag_coefficient,
                self.cfg.air_density,
                self.cfg.frontal_area_m2,
                v_ms,
            );
            let load = self.budget.motion_load(drag);
            let phase = self.resolve_phase(MotionState::InMotion, load, pedal);
            (Some(phase), drag)
        } else {
            (None, 0.0)
        };

        Resolution {
            at_rest,
            in_motion,
            drag_force: drag,
            max_motor_force: self.max_motor_force,
            pedaling_force: pedal,
        }
    }
}
